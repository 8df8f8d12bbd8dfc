use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_active(pool: &PgPool) -> Result<Vec<models::Category>, String> {
    let query_span = tracing::info_span!("Fetching active categories");
    sqlx::query_as::<_, models::Category>(
        r#"
        SELECT id, name, active, assigned_partner_id, created_at, updated_at
        FROM category
        WHERE active = TRUE
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch categories: {:?}", err);
        "Could not fetch categories".to_string()
    })
}

pub async fn upsert(
    pool: &PgPool,
    name: &str,
    assigned_partner_id: Option<i32>,
) -> Result<models::Category, String> {
    let query_span = tracing::info_span!("Upserting category");
    sqlx::query_as::<_, models::Category>(
        r#"
        INSERT INTO category (name, assigned_partner_id)
        VALUES ($1, $2)
        ON CONFLICT (name)
        DO UPDATE SET assigned_partner_id = EXCLUDED.assigned_partner_id, updated_at = NOW()
        RETURNING id, name, active, assigned_partner_id, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(assigned_partner_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert category {}: {:?}", name, err);
        "Failed to upsert category".to_string()
    })
}
