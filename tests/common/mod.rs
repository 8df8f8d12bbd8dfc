use serde_json::json;
use simpleask::configuration::{get_configuration, DatabaseSettings, Settings};
use simpleask::connectors::LlmConfig;
use simpleask::models;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Model names pinned here so tests can tell the two flows apart by the
// `model` field of the completion request.
pub const CLASSIFIER_MODEL: &str = "classifier-test-model";
pub const ANSWERER_MODEL: &str = "answerer-test-model";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub llm_server: MockServer,
}

/// Spin up the app on a random port against a throwaway database, with
/// the language-model connector pointed at a wiremock server. Returns
/// None (skipping the test) when Postgres is unreachable.
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let llm_server = MockServer::start().await;
    configuration.connectors.llm = Some(LlmConfig {
        enabled: true,
        base_url: llm_server.uri(),
        classifier_model: CLASSIFIER_MODEL.to_string(),
        answerer_model: ANSWERER_MODEL.to_string(),
        timeout_secs: 5,
        retry_attempts: 1,
        api_key: None,
    });

    spawn_app_with_configuration(configuration, llm_server).await
}

pub async fn spawn_app_with_configuration(
    mut configuration: Settings,
    llm_server: MockServer,
) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = simpleask::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        llm_server,
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}

// ─────────────────────────────────────────────────────────────────────────────
// Seed helpers
// ─────────────────────────────────────────────────────────────────────────────

#[allow(dead_code)]
pub async fn seed_partner(pool: &PgPool, name: &str, ad_tag_url: &str) -> models::Partner {
    simpleask::db::partner::upsert(pool, name, ad_tag_url)
        .await
        .expect("failed to seed partner")
}

#[allow(dead_code)]
pub async fn seed_category(
    pool: &PgPool,
    name: &str,
    assigned_partner_id: Option<i32>,
) -> models::Category {
    simpleask::db::category::upsert(pool, name, assigned_partner_id)
        .await
        .expect("failed to seed category")
}

#[allow(dead_code)]
pub async fn fetch_question(pool: &PgPool, id: Uuid) -> Option<models::Question> {
    simpleask::db::question::fetch(pool, id)
        .await
        .expect("failed to fetch question")
}

// ─────────────────────────────────────────────────────────────────────────────
// LLM mock helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Successful chat-completion body with the given assistant content.
#[allow(dead_code)]
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

/// Mount a completion mock answering every request on the completions
/// path. Tests that need to tell the flows apart add a
/// `body_partial_json` matcher on the model field instead.
#[allow(dead_code)]
pub async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

/// Request payload shared by both flows.
#[allow(dead_code)]
pub fn ask_payload(question: &str, question_id: Uuid) -> serde_json::Value {
    json!({
        "question": question,
        "history": [],
        "question_id": question_id,
        "previous_question_id": null
    })
}
