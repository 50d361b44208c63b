use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use formrelay::config::{Config, Recipients, SmtpConfig};
use formrelay::email::{Mailer, OutgoingMail};

/// Recording mail fake. Captures every composed message; can be told to fail
/// so transport-error paths are reachable without a live relay.
pub struct MockMailer {
    pub sent: Mutex<Vec<OutgoingMail>>,
    fail_with: Mutex<Option<String>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn sent_mails(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), String> {
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

/// A running test server instance with a recording mailer.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub mailer: Arc<MockMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// A valid download-request payload; tweak fields per test.
    pub fn download_payload() -> Value {
        json!({
            "firstName": "A",
            "lastName": "B",
            "email": "a@b.com",
            "phone": "1",
            "category": "x",
            "selectedPdfs": ["kiosk1"]
        })
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        environment: "test".to_string(),
        log_level: "warn".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        max_body_size: 1024 * 1024,
        dedup_cooldown_secs: 30,
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            user: "test".to_string(),
            pass: "test".to_string(),
            from: "noreply@test.local".to_string(),
            tls_mode: "none".to_string(),
        },
        recipients: Recipients {
            contact: "info@test.local".to_string(),
            careers: "hr@test.local".to_string(),
            downloads: "downloads@test.local".to_string(),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    let mailer = Arc::new(MockMailer::new());
    let app = formrelay::build_app(test_config(), mailer.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        addr,
        client: Client::new(),
        mailer,
    }
}
