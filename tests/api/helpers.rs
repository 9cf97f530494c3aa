//! Shared helpers for the API integration tests.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use signupd::{model::ModelManager, templ_manager::TemplateManager, App, AppState};
use tokio::net::TcpListener;

/// Trying to bind *port 0* will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    pub mm: ModelManager,
    pub http_client: Client,
}

impl TestApp {
    /// Spawns the application on an OS-assigned port against a scratch
    /// database created just for this test.
    pub async fn spawn() -> Result<Self> {
        let mm = ModelManager::test_init().await?;
        let tm = TemplateManager::init();
        let app_state = AppState::new(mm.clone(), tm);

        let listener = TcpListener::bind(&TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(signupd::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            mm,
            http_client: Client::new(),
        })
    }

    pub async fn post_signup(&self, body: &Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/api/signup", self.addr))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn get_signups(&self) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .get(format!("http://{}/api/signups", self.addr))
            .send()
            .await?;
        Ok(res)
    }

    pub async fn signup_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM marketing_signups")
            .fetch_one(self.mm.db())
            .await?;
        Ok(count)
    }
}
