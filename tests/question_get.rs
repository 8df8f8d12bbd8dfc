mod common;

use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn unknown_question_returns_404() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let client = reqwest::Client::new();
    let response = client
        .get(&format!("{}/api/question/{}", &app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn stored_question_is_returned() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    common::mount_completion(&app.llm_server, "A balanced diet helps.").await;

    let question_id = Uuid::new_v4();
    let client = reqwest::Client::new();
    let ask_response = client
        .post(&format!("{}/api/ask", &app.address))
        .json(&common::ask_payload("Does diet matter?", question_id))
        .send()
        .await
        .expect("ask request failed");
    assert!(ask_response.status().is_success());

    let response = client
        .get(&format!("{}/api/question/{}", &app.address, question_id))
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["text"], "Does diet matter?");
    assert_eq!(body["item"]["answer"], "A balanced diet helps.");
}
