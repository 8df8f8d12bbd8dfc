use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Partner>, String> {
    let query_span = tracing::info_span!("Fetching partner by id");
    sqlx::query_as::<_, models::Partner>(
        r#"
        SELECT id, name, ad_tag_url, created_at, updated_at
        FROM partner
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch partner {}: {:?}", id, err);
        "Could not fetch partner".to_string()
    })
}

pub async fn upsert(pool: &PgPool, name: &str, ad_tag_url: &str) -> Result<models::Partner, String> {
    let query_span = tracing::info_span!("Upserting partner");
    sqlx::query_as::<_, models::Partner>(
        r#"
        INSERT INTO partner (name, ad_tag_url)
        VALUES ($1, $2)
        ON CONFLICT (name)
        DO UPDATE SET ad_tag_url = EXCLUDED.ad_tag_url, updated_at = NOW()
        RETURNING id, name, ad_tag_url, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(ad_tag_url)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert partner {}: {:?}", name, err);
        "Failed to upsert partner".to_string()
    })
}
