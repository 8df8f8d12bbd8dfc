use crate::connectors::LlmConnector;
use crate::db;
use crate::forms;
use crate::helpers::{ad_tag, JsonResponse};
use crate::models::CategoryChoice;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde::Serialize;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct AdResponse {
    pub ad_tag_url: String,
}

/// POST /api/ads
/// Classification flow: pick a category for the question, record it on
/// the question row together with the category's sponsoring partner,
/// and hand back the ad-tag URL for the placement (empty when there is
/// nothing to show). Runs concurrently with the answering flow for the
/// same question_id; only category_id/partner_id/categorized_at are
/// merged here.
#[tracing::instrument(name = "Classify question.", skip_all)]
#[post("/ads")]
pub async fn ads_handler(
    web::Json(form): web::Json<forms::AskRequest>,
    pg_pool: web::Data<PgPool>,
    llm: web::Data<Arc<dyn LlmConnector>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<AdResponse>::build().bad_request(errors.to_string()));
    }

    let categories = db::category::fetch_active(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<AdResponse>::build().internal_server_error(err))?;
    let category_names: Vec<String> = categories
        .iter()
        .map(|category| category.name.clone())
        .collect();

    // Connector failures surface before anything is written, so a
    // failed classification never leaves a partial row behind.
    let reply = llm
        .classify(&form.question, &form.history, &category_names)
        .await?;

    let category = match CategoryChoice::resolve(&reply, &categories) {
        CategoryChoice::Known(category) => Some(category),
        CategoryChoice::Uncategorized => None,
        CategoryChoice::Unrecognized(name) => {
            tracing::error!("Classifier selected an invalid category: {}", name);
            return Err(JsonResponse::<AdResponse>::build()
                .internal_server_error(format!("Classifier selected an invalid category: {}", name)));
        }
    };

    let partner = match category.as_ref().and_then(|c| c.assigned_partner_id) {
        Some(partner_id) => db::partner::fetch(pg_pool.get_ref(), partner_id)
            .await
            .map_err(|err| JsonResponse::<AdResponse>::build().internal_server_error(err))?,
        None => None,
    };

    db::question::record_classification(
        pg_pool.get_ref(),
        form.question_id,
        &form.question,
        form.previous_question_id,
        category.as_ref().map(|c| c.id),
        partner.as_ref().map(|p| p.id),
        category.as_ref().map(|_| Utc::now()),
    )
    .await
    .map_err(|err| JsonResponse::<AdResponse>::build().internal_server_error(err))?;

    let ad_tag_url = match (category.as_ref(), partner.as_ref()) {
        (Some(category), Some(partner)) => {
            ad_tag::build(&partner.ad_tag_url, &category.name, category.id)
                .map_err(|err| JsonResponse::<AdResponse>::build().internal_server_error(err))?
        }
        _ => String::new(),
    };

    Ok(JsonResponse::build()
        .set_item(AdResponse { ad_tag_url })
        .ok("OK"))
}
