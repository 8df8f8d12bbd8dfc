use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get question.")]
#[get("/question/{id}")]
pub async fn get_handler(
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.into_inner().0;
    let question = db::question::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Question>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Question>::build().not_found("object not found"))?;

    Ok(JsonResponse::build().set_item(question).ok("OK"))
}
