#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, RwLock},
};

use axum_test::TestServer;
use clap::Parser;
use snapmeal_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use snapmeal_core::{
    domain::{
        authentication::ports::SessionTokenRepository,
        common::{SessionConfig, entities::app_errors::CoreError, services::Service},
        crypto::ports::HasherRepository,
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        meal_analysis::{image::ImagePayload, ports::VisionClient},
        user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
    },
    infrastructure::{crypto::Argon2HasherRepository, session::JwtSessionRepository},
};
use test_context::AsyncTestContext;
use uuid::Uuid;

pub const SESSION_SECRET: &str = "test-secret";

pub const VALID_ANALYSIS: &str = r#"{
    "ingredients": ["rice", "chicken", "peanut sauce"],
    "nutrition": {"calories": 500, "protein": "30g", "carbs": "60g", "fat": "15g"},
    "allergens": ["Peanuts", "Soy"],
    "dietary_tags": ["high-protein"],
    "healthScore": 7,
    "alternatives": ["brown rice"],
    "confidence": 0.85
}"#;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users
            .write()
            .expect("users lock")
            .insert(user.id, user);
    }

    pub fn find(&self, user_id: Uuid) -> Option<User> {
        self.users.read().expect("users lock").get(&user_id).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.read().expect("users lock").len()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .read()
            .expect("users lock")
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.find(user_id))
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let mut users = self.users.write().expect("users lock");
        if users.values().any(|user| user.email == request.email) {
            return Err(CoreError::UserExists);
        }

        let user = User::new(request.email, request.name, Some(request.password_hash));
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<(), CoreError> {
        let mut users = self.users.write().expect("users lock");
        let user = users.get_mut(&user_id).ok_or(CoreError::UserNotFound)?;
        user.password_hash = Some(password_hash);

        Ok(())
    }
}

/// Vision client answering with whatever the test scripted last.
#[derive(Clone, Default)]
pub struct FakeVisionClient {
    reply: Arc<Mutex<Option<Result<Option<String>, CoreError>>>>,
    calls: Arc<Mutex<Vec<(String, ImagePayload)>>>,
}

impl FakeVisionClient {
    pub fn reply_with(&self, content: &str) {
        *self.reply.lock().expect("reply lock") = Some(Ok(Some(content.to_string())));
    }

    pub fn reply_empty(&self) {
        *self.reply.lock().expect("reply lock") = Some(Ok(None));
    }

    pub fn fail_with(&self, error: CoreError) {
        *self.reply.lock().expect("reply lock") = Some(Err(error));
    }

    pub fn calls(&self) -> Vec<(String, ImagePayload)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl VisionClient for FakeVisionClient {
    async fn analyze_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> Result<Option<String>, CoreError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((prompt, image));

        self.reply
            .lock()
            .expect("reply lock")
            .clone()
            .unwrap_or(Ok(None))
    }
}

#[derive(Clone, Default)]
pub struct StaticHealthCheckRepository;

impl HealthCheckRepository for StaticHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(2)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            message: "Database is reachable".to_string(),
        })
    }
}

pub type TestService = Service<
    InMemoryUserRepository,
    Argon2HasherRepository,
    JwtSessionRepository,
    FakeVisionClient,
    StaticHealthCheckRepository,
>;

pub struct TestApp {
    pub server: TestServer,
    pub users: InMemoryUserRepository,
    pub vision: FakeVisionClient,
    pub sessions: JwtSessionRepository,
    pub hasher: Argon2HasherRepository,
}

impl TestApp {
    /// Stores a user directly, bypassing signup.
    pub async fn seed_user(&self, email: &str, password: Option<&str>) -> User {
        let password_hash = match password {
            Some(password) => Some(
                self.hasher
                    .hash_password(password.to_string())
                    .await
                    .expect("hash password"),
            ),
            None => None,
        };

        let user = User::new(email.to_string(), Some("Test User".to_string()), password_hash);
        self.users.insert(user.clone());

        user
    }

    pub fn token_for(&self, user: &User) -> String {
        self.sessions.issue(user).expect("issue session").token
    }

    pub async fn signed_in(&self) -> (User, String) {
        let user = self.seed_user("diner@example.com", Some("secret123")).await;
        let token = self.token_for(&user);

        (user, token)
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        let args = Args::parse_from([
            "snapmeal-api",
            "--openai-api-key",
            "sk-test",
            "--session-secret",
            SESSION_SECRET,
            "--server-metrics",
            "false",
        ]);

        let users = InMemoryUserRepository::default();
        let vision = FakeVisionClient::default();
        let sessions = JwtSessionRepository::new(&SessionConfig {
            secret: SESSION_SECRET.to_string(),
            ttl_hours: 1,
        });
        let hasher = Argon2HasherRepository::new();

        let service: TestService = Service::new(
            users.clone(),
            hasher.clone(),
            sessions.clone(),
            vision.clone(),
            StaticHealthCheckRepository,
        );

        let app = router(AppState::new(Arc::new(args), service)).expect("build router");
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            users,
            vision,
            sessions,
            hasher,
        }
    }
}
