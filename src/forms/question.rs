use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

/// One prior conversation turn, kept client-side and replayed with
/// every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body shared by the classification and answering flows. Both
/// carry the same client-generated question_id so they converge on one
/// row regardless of arrival order.
#[derive(Debug, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(min_length = 1)]
    pub question: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub question_id: Uuid,
    pub previous_question_id: Option<Uuid>,
}
