use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user question. The classification flow fills in
/// category_id/partner_id/categorized_at, the answering flow fills in
/// answer/answered_at; the two sets never overlap so the concurrent
/// upserts cannot clobber each other.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub previous_question_id: Option<Uuid>,
    pub category_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub answer: Option<String>,
    pub categorized_at: Option<DateTime<Utc>>,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
