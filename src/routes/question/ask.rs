use crate::connectors::LlmConnector;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde::Serialize;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// POST /api/ask
/// Answering flow: make sure the question row exists (the client shows
/// the turn before the answer arrives), obtain the answer, then merge
/// answer/answered_at into the row. Runs concurrently with the
/// classification flow for the same question_id.
#[tracing::instrument(name = "Answer question.", skip_all)]
#[post("/ask")]
pub async fn ask_handler(
    web::Json(form): web::Json<forms::AskRequest>,
    pg_pool: web::Data<PgPool>,
    llm: web::Data<Arc<dyn LlmConnector>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<AnswerResponse>::build().bad_request(errors.to_string()));
    }

    db::question::ensure(
        pg_pool.get_ref(),
        form.question_id,
        &form.question,
        form.previous_question_id,
    )
    .await
    .map_err(|err| JsonResponse::<AnswerResponse>::build().internal_server_error(err))?;

    let answer = llm.answer(&form.question, &form.history).await?;

    db::question::record_answer(
        pg_pool.get_ref(),
        form.question_id,
        &form.question,
        form.previous_question_id,
        &answer,
    )
    .await
    .map_err(|err| JsonResponse::<AnswerResponse>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_item(AnswerResponse { answer })
        .ok("OK"))
}
