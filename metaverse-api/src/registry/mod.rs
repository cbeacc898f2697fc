//! レスポンスレジストリ
//!
//! (チームID, オペレーション) → 固定レスポンス規則 の不変テーブル。
//! 起動時に一度だけ構築し、以後はリクエスト間で読み取り専用に共有する。

/// チーム定義テーブル
pub mod teams;

use std::collections::{HashMap, HashSet};

use metaverse_api_common::{
    error::{CommonError, CommonResult},
    protocol::{fixed_object, ApiResponse, ControlRequest},
    types::{EndpointKey, OperationKind, RouteMethod},
};
use serde_json::{Map, Value};

use self::teams::{TeamSpec, TEAMS};

/// レスポンス生成規則
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseRule {
    /// 常に同じ `data` を返す
    Fixed(Value),
    /// リクエストの `action` を `action_performed` としてエコーする
    EchoAction,
}

impl ResponseRule {
    /// Produce the `data` payload for a request.
    pub fn render(&self, request: &ControlRequest) -> Value {
        match self {
            ResponseRule::Fixed(payload) => payload.clone(),
            ResponseRule::EchoAction => {
                let mut data = Map::new();
                data.insert(
                    "action_performed".to_string(),
                    request.action.clone().unwrap_or(Value::Null),
                );
                Value::Object(data)
            }
        }
    }
}

/// エンドポイント定義
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDefinition {
    /// チームID（例: "team8"）
    pub team_id: String,
    /// チーム表示名
    pub team_name: String,
    /// オペレーション
    pub operation: OperationKind,
    /// HTTPメソッド
    pub method: RouteMethod,
    /// `/v1` からの相対パス（例: "/team8/data"）
    pub path: String,
    /// レスポンス生成規則
    pub rule: ResponseRule,
}

impl EndpointDefinition {
    /// GET endpoint serving the team's fixed status fields.
    pub fn read(team: &TeamSpec) -> Self {
        Self::new(
            team,
            team.read_operation,
            ResponseRule::Fixed(fixed_object(team.fields)),
        )
    }

    /// POST endpoint echoing the requested action.
    pub fn control(team: &TeamSpec) -> Self {
        Self::new(team, OperationKind::Control, ResponseRule::EchoAction)
    }

    fn new(team: &TeamSpec, operation: OperationKind, rule: ResponseRule) -> Self {
        let team_id = team.id();
        Self {
            path: format!("/{}/{}", team_id, operation),
            team_id,
            team_name: team.name.to_string(),
            operation,
            method: operation.method(),
            rule,
        }
    }

    /// Registry lookup key for this definition.
    pub fn key(&self) -> EndpointKey {
        EndpointKey::new(self.team_id.clone(), self.operation)
    }

    /// Build the full response envelope. Never fails.
    pub fn respond(&self, request: &ControlRequest) -> ApiResponse {
        ApiResponse::success(self.rule.render(request))
    }
}

/// レスポンスレジストリ
#[derive(Debug, Clone)]
pub struct ResponseRegistry {
    definitions: Vec<EndpointDefinition>,
    index: HashMap<EndpointKey, usize>,
}

impl ResponseRegistry {
    /// Build a registry from arbitrary definitions.
    ///
    /// Fails if two definitions share a method and path, or a team and
    /// operation.
    pub fn new(definitions: Vec<EndpointDefinition>) -> CommonResult<Self> {
        let mut routes = HashSet::new();
        let mut index = HashMap::with_capacity(definitions.len());

        for (position, definition) in definitions.iter().enumerate() {
            let duplicate = || CommonError::DuplicateRoute {
                method: definition.method,
                path: definition.path.clone(),
            };
            if !routes.insert((definition.method, definition.path.clone())) {
                return Err(duplicate());
            }
            if index.insert(definition.key(), position).is_some() {
                return Err(duplicate());
            }
        }

        Ok(Self { definitions, index })
    }

    /// Registry for every team in the built-in team table.
    pub fn builtin() -> CommonResult<Self> {
        Self::from_teams(TEAMS)
    }

    /// Registry exposing one read and one control endpoint per team.
    pub fn from_teams(teams: &[TeamSpec]) -> CommonResult<Self> {
        let definitions = teams
            .iter()
            .flat_map(|team| [EndpointDefinition::read(team), EndpointDefinition::control(team)])
            .collect();
        Self::new(definitions)
    }

    /// Look up a definition.
    pub fn get(&self, key: &EndpointKey) -> Option<&EndpointDefinition> {
        self.index.get(key).map(|&position| &self.definitions[position])
    }

    /// Run the rule registered for `key`. `None` only if nothing is registered.
    pub fn respond(&self, key: &EndpointKey, request: &ControlRequest) -> Option<ApiResponse> {
        self.get(key).map(|definition| definition.respond(request))
    }

    /// All definitions in registration order.
    pub fn definitions(&self) -> &[EndpointDefinition] {
        &self.definitions
    }

    /// Number of endpoint definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no endpoints are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Distinct team ids in registration order.
    pub fn team_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.definitions
            .iter()
            .map(|definition| definition.team_id.as_str())
            .filter(|team_id| seen.insert(*team_id))
            .collect()
    }
}
