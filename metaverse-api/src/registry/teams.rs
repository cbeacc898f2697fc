//! チーム定義テーブル
//!
//! 各チームの読み取りオペレーションと固定ステータス値

use metaverse_api_common::types::OperationKind;

/// 1チーム分の静的定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSpec {
    /// チーム番号（パスの `teamN` になる）
    pub number: u8,
    /// 表示名
    pub name: &'static str,
    /// GETで公開する読み取りオペレーション
    pub read_operation: OperationKind,
    /// 読み取りレスポンスの固定フィールド
    pub fields: &'static [(&'static str, &'static str)],
}

impl TeamSpec {
    /// Team identifier used in paths and registry keys, e.g. `team8`.
    pub fn id(&self) -> String {
        format!("team{}", self.number)
    }
}

/// All teams served by the API. Teams 1 and 14 do not exist.
pub const TEAMS: &[TeamSpec] = &[
    TeamSpec {
        number: 2,
        name: "Solaris (Rocket)",
        read_operation: OperationKind::Status,
        fields: &[("rocket_status", "ready")],
    },
    TeamSpec {
        number: 3,
        name: "Healthcare Warehouse",
        read_operation: OperationKind::Status,
        fields: &[("robot_status", "idle")],
    },
    TeamSpec {
        number: 4,
        name: "Tunnel Rover",
        read_operation: OperationKind::Status,
        fields: &[("rover_status", "active")],
    },
    TeamSpec {
        number: 5,
        name: "EEG Brain Simulation",
        read_operation: OperationKind::Data,
        fields: &[("eeg_activity", "normal")],
    },
    TeamSpec {
        number: 6,
        name: "Gravity Battery",
        read_operation: OperationKind::Status,
        fields: &[("battery_status", "charged")],
    },
    TeamSpec {
        number: 7,
        name: "FearTherapy VR",
        read_operation: OperationKind::Session,
        fields: &[("session_status", "in_progress")],
    },
    TeamSpec {
        number: 8,
        name: "Digital Heart Pulse and Blood Flow",
        read_operation: OperationKind::Data,
        fields: &[("heart_rate", "72bpm"), ("blood_pressure", "120/80")],
    },
    TeamSpec {
        number: 9,
        name: "EarthTwin",
        read_operation: OperationKind::Data,
        fields: &[("earth_model", "stable")],
    },
    TeamSpec {
        number: 10,
        name: "Remote Surgery Robotic Arm",
        read_operation: OperationKind::Status,
        fields: &[("arm_status", "standby")],
    },
    TeamSpec {
        number: 11,
        name: "Smart E Yantra Room",
        read_operation: OperationKind::Status,
        fields: &[("room_status", "online")],
    },
    TeamSpec {
        number: 12,
        name: "AI-Based Posture Correction",
        read_operation: OperationKind::Data,
        fields: &[("posture", "good")],
    },
    TeamSpec {
        number: 13,
        name: "Rescue Twin Rover",
        read_operation: OperationKind::Status,
        fields: &[("rover_status", "searching")],
    },
    TeamSpec {
        number: 15,
        name: "Metal Detection Rover",
        read_operation: OperationKind::Status,
        fields: &[("rover_status", "scanning")],
    },
    TeamSpec {
        number: 16,
        name: "ICU Ventilator Control System",
        read_operation: OperationKind::Status,
        fields: &[("ventilator_status", "normal")],
    },
];
