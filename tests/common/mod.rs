#![allow(dead_code)]

use pokeguess::config::HttpLimits;
use pokeguess::dex::DexSource;
use pokeguess::state::AppState;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const SECRET: &str = "test-token";

pub const SAMPLE_DEX: &str = r#"{
    "Pikachu": ["4", "Electric", "Electric"],
    "Bulbasaur": ["1", "Grass", "Poison"],
    "Mew": ["151", null, null],
    "Tutor": ["900", "physical", "special"],
    "Slugger": ["901", "physical", "physical"],
    "Ditto": ["132", "Normal"]
}"#;

pub struct TestServer {
    pub _dir: TempDir,
    pub dex_path: PathBuf,
    pub url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Writes `dex` to a temp dir and serves it with the per-request policy.
    pub async fn start(dex: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dex_path = dir.path().join("pokedex.json");
        fs::write(&dex_path, dex).unwrap();

        let source = DexSource::PerRequest(dex_path.clone());
        let url = serve(source).await;

        Self {
            _dir: dir,
            dex_path,
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn guess(&self, auth: Option<&str>, body: serde_json::Value) -> reqwest::Response {
        let mut req = self.client.post(format!("{}/guess", self.url)).json(&body);
        if let Some(value) = auth {
            req = req.header("Authorization", value);
        }
        req.send().await.unwrap()
    }

    pub async fn ask(&self, pokemon: &str, question: &str) -> reqwest::Response {
        self.guess(
            Some(&bearer()),
            serde_json::json!({ "pokemon": pokemon, "question": question }),
        )
        .await
    }

    pub fn dex_path(&self) -> &Path {
        &self.dex_path
    }
}

pub fn bearer() -> String {
    format!("Bearer {}", SECRET)
}

/// Binds a random port and runs the full router in the background.
pub async fn serve(source: DexSource) -> String {
    serve_with_limits(source, HttpLimits::default()).await
}

pub async fn serve_with_limits(source: DexSource, limits: HttpLimits) -> String {
    let state = Arc::new(AppState::new(SECRET.to_string(), source, limits));
    let app = pokeguess::build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}
