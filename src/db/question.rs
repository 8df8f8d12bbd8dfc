//! Question-row writes for the two concurrent flows.
//!
//! Both flows address the row by the client-generated id, so whichever
//! write lands first creates it and the other merges. Each merge only
//! touches the fields its flow owns (classification: category_id,
//! partner_id, categorized_at; answering: answer, answered_at), which
//! is what makes the arrival order irrelevant. No locking beyond the
//! per-row atomicity of `INSERT ... ON CONFLICT`.

use crate::models;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Create the row if it does not exist yet. Used by the answering flow
/// before the answer is known, so the turn is visible immediately.
pub async fn ensure(
    pool: &PgPool,
    id: Uuid,
    text: &str,
    previous_question_id: Option<Uuid>,
) -> Result<(), String> {
    let query_span = tracing::info_span!("Ensuring question row exists");
    sqlx::query(
        r#"
        INSERT INTO question (id, text, previous_question_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(text)
    .bind(previous_question_id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to ensure question {}: {:?}", id, err);
        "Failed to save question".to_string()
    })
}

/// Insert-or-merge carrying the classification flow's fields. On
/// conflict only category_id, partner_id and categorized_at are
/// updated; the answering flow's fields are left untouched.
pub async fn record_classification(
    pool: &PgPool,
    id: Uuid,
    text: &str,
    previous_question_id: Option<Uuid>,
    category_id: Option<i32>,
    partner_id: Option<i32>,
    categorized_at: Option<DateTime<Utc>>,
) -> Result<models::Question, String> {
    let query_span = tracing::info_span!("Recording question classification");
    sqlx::query_as::<_, models::Question>(
        r#"
        INSERT INTO question (id, text, previous_question_id, category_id, partner_id, categorized_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id)
        DO UPDATE SET
            category_id = EXCLUDED.category_id,
            partner_id = EXCLUDED.partner_id,
            categorized_at = EXCLUDED.categorized_at,
            updated_at = NOW()
        RETURNING id, text, previous_question_id, category_id, partner_id, answer,
                  categorized_at, answered_at, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(text)
    .bind(previous_question_id)
    .bind(category_id)
    .bind(partner_id)
    .bind(categorized_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to record classification for {}: {:?}", id, err);
        "Failed to save classification".to_string()
    })
}

/// Insert-or-merge carrying the answering flow's fields. On conflict
/// only answer and answered_at are updated.
pub async fn record_answer(
    pool: &PgPool,
    id: Uuid,
    text: &str,
    previous_question_id: Option<Uuid>,
    answer: &str,
) -> Result<models::Question, String> {
    let query_span = tracing::info_span!("Recording question answer");
    sqlx::query_as::<_, models::Question>(
        r#"
        INSERT INTO question (id, text, previous_question_id, answer, answered_at)
        VALUES ($1, $2, $3, $4, NOW())
        ON CONFLICT (id)
        DO UPDATE SET
            answer = EXCLUDED.answer,
            answered_at = EXCLUDED.answered_at,
            updated_at = NOW()
        RETURNING id, text, previous_question_id, category_id, partner_id, answer,
                  categorized_at, answered_at, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(text)
    .bind(previous_question_id)
    .bind(answer)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to record answer for {}: {:?}", id, err);
        "Failed to save answer".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Question>, String> {
    let query_span = tracing::info_span!("Fetching question by id");
    sqlx::query_as::<_, models::Question>(
        r#"
        SELECT id, text, previous_question_id, category_id, partner_id, answer,
               categorized_at, answered_at, created_at, updated_at
        FROM question
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch question {}: {:?}", id, err);
        "Could not fetch question".to_string()
    })
}
