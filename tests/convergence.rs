mod common;

use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────────────────────────────────────────────────────────────
// Tests: both flows against one question row, in any order
// ─────────────────────────────────────────────────────────────────────────────

/// The two flows pick different models, so the shared completions
/// endpoint can serve each its own reply.
async fn mount_split_completions(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": common::CLASSIFIER_MODEL
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::completion_body("Cancer")))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": common::ANSWERER_MODEL
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::completion_body("See a dermatologist.")),
        )
        .mount(server)
        .await;
}

async fn assert_converged(app: &common::TestApp, question_id: Uuid, category_id: i32) {
    let question = common::fetch_question(&app.db_pool, question_id)
        .await
        .expect("question row missing");
    assert_eq!(question.category_id, Some(category_id));
    assert!(question.partner_id.is_some());
    assert!(question.categorized_at.is_some());
    assert_eq!(question.answer.as_deref(), Some("See a dermatologist."));
    assert!(question.answered_at.is_some());
}

#[tokio::test]
async fn concurrent_flows_converge_to_a_single_complete_row() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let partner = common::seed_partner(&app.db_pool, "Pfizer", "https://x/ad.html").await;
    let category = common::seed_category(&app.db_pool, "Cancer", Some(partner.id)).await;
    mount_split_completions(&app.llm_server).await;

    let question_id = Uuid::new_v4();
    let payload = common::ask_payload("Is this mole dangerous?", question_id);
    let client = reqwest::Client::new();

    let (ads_response, ask_response) = tokio::join!(
        client
            .post(&format!("{}/api/ads", &app.address))
            .json(&payload)
            .send(),
        client
            .post(&format!("{}/api/ask", &app.address))
            .json(&payload)
            .send(),
    );

    assert!(ads_response.expect("ads request failed").status().is_success());
    assert!(ask_response.expect("ask request failed").status().is_success());
    assert_converged(&app, question_id, category.id).await;
}

#[tokio::test]
async fn classify_then_answer_converges() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let partner = common::seed_partner(&app.db_pool, "Pfizer", "https://x/ad.html").await;
    let category = common::seed_category(&app.db_pool, "Cancer", Some(partner.id)).await;
    mount_split_completions(&app.llm_server).await;

    let question_id = Uuid::new_v4();
    let payload = common::ask_payload("Is this mole dangerous?", question_id);
    let client = reqwest::Client::new();

    let ads_response = client
        .post(&format!("{}/api/ads", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("ads request failed");
    assert!(ads_response.status().is_success());

    let ask_response = client
        .post(&format!("{}/api/ask", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("ask request failed");
    assert!(ask_response.status().is_success());

    assert_converged(&app, question_id, category.id).await;
}

#[tokio::test]
async fn answer_then_classify_converges() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let partner = common::seed_partner(&app.db_pool, "Pfizer", "https://x/ad.html").await;
    let category = common::seed_category(&app.db_pool, "Cancer", Some(partner.id)).await;
    mount_split_completions(&app.llm_server).await;

    let question_id = Uuid::new_v4();
    let payload = common::ask_payload("Is this mole dangerous?", question_id);
    let client = reqwest::Client::new();

    let ask_response = client
        .post(&format!("{}/api/ask", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("ask request failed");
    assert!(ask_response.status().is_success());

    let ads_response = client
        .post(&format!("{}/api/ads", &app.address))
        .json(&payload)
        .send()
        .await
        .expect("ads request failed");
    assert!(ads_response.status().is_success());

    assert_converged(&app, question_id, category.id).await;
}
