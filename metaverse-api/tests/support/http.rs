use std::{io, net::SocketAddr};

use metaverse_api::{server, AppState};
use tokio::{net::TcpListener, task::JoinHandle};

/// 実ポートにバインドしたテスト用サーバー
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    state: AppState,
    handle: JoinHandle<Result<(), io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://127.0.0.1:<port><path>`
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// シャットダウンを要求し、サーバータスクの終了結果を返す
    pub async fn stop(self) -> Result<(), io::Error> {
        self.state.shutdown.request_shutdown();
        self.handle.await.expect("server task panicked")
    }
}

/// 任意のAppStateでサーバーを 127.0.0.1 のエフェメラルポートに起動する
#[allow(dead_code)]
pub async fn spawn_server(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(server::serve(listener, state.clone()));
    TestServer {
        addr,
        state,
        handle,
    }
}
