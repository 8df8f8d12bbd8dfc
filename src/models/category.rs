use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved value the classifier returns when it declines to pick a
/// real category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub assigned_partner_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of validating a classifier reply against the active
/// category set. The classifier only ever hands back free text; the
/// handler resolves it here instead of trusting the collaborator's
/// format enforcement.
#[derive(Debug, Clone)]
pub enum CategoryChoice {
    Known(Category),
    Uncategorized,
    Unrecognized(String),
}

impl CategoryChoice {
    pub fn resolve(raw: &str, categories: &[Category]) -> Self {
        let name = raw.trim();
        if name == UNCATEGORIZED {
            return Self::Uncategorized;
        }
        match categories.iter().find(|category| category.name == name) {
            Some(category) => Self::Known(category.clone()),
            None => Self::Unrecognized(name.to_string()),
        }
    }
}
