use std::collections::HashMap;

use reqwest::{Client, Response};
use serde::Serialize;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::spawn;

use room_token_service::app_router;
use room_token_service::app_state::AppState;
use room_token_service::utils::config::{env_vars, Config};

pub const API_KEY: &str = "devkey";
pub const API_SECRET: &str = "0123456789abcdef0123456789abcdef";
pub const ADMIN_KEY: &str = "admin-key-0123456789";

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenBody {
    pub room_name: String,
    pub participant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,
}

impl GenerateTokenBody {
    pub fn new(room_name: &str, participant_name: &str) -> Self {
        Self {
            room_name: room_name.to_owned(),
            participant_name: participant_name.to_owned(),
            ..Default::default()
        }
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub app_state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let vars: HashMap<&str, &str> = [
            (env_vars::API_KEY, API_KEY),
            (env_vars::API_SECRET, API_SECRET),
            (env_vars::ADMIN_API_KEY, ADMIN_KEY),
            (env_vars::TEST_ROOM_NAME, "lobby"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
            .expect("failed to build test config");
        let app_state = AppState::from_config(config).expect("failed to build app state");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state.clone()));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            app_state,
        }
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute health request.")
    }

    pub async fn generate_token(&self, body: &GenerateTokenBody) -> Response {
        self.generate_token_with_key(body, ADMIN_KEY).await
    }

    pub async fn generate_token_with_key(&self, body: &GenerateTokenBody, key: &str) -> Response {
        self.http_client
            .post(format!("{}/api/token/generate", &self.address))
            .bearer_auth(key)
            .json(body)
            .send()
            .await
            .expect("Failed to execute generate token request.")
    }

    pub async fn get_test_token(&self) -> Response {
        self.http_client
            .get(format!("{}/api/token", &self.address))
            .bearer_auth(ADMIN_KEY)
            .send()
            .await
            .expect("Failed to execute test token request.")
    }

    pub async fn list_issued(&self) -> Response {
        self.http_client
            .get(format!("{}/api/token/issued", &self.address))
            .bearer_auth(ADMIN_KEY)
            .send()
            .await
            .expect("Failed to execute list issued request.")
    }

    pub async fn delete_issued(&self, id: &str) -> Response {
        self.http_client
            .delete(format!("{}/api/token/issued/{}", &self.address, id))
            .bearer_auth(ADMIN_KEY)
            .send()
            .await
            .expect("Failed to execute delete issued request.")
    }

    pub async fn decode(&self, token: &str) -> Response {
        self.http_client
            .post(format!("{}/api/token/decode", &self.address))
            .bearer_auth(ADMIN_KEY)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await
            .expect("Failed to execute decode request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> Self {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}
