use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::db;
use crate::email::EntryNotifier;
use crate::error::AppError;
use crate::models::NewEntry;
use crate::state::SharedState;
use crate::workflow::{self, Flash};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    flashes: Vec<Flash>,
    entries: Vec<EntryRow>,
}

struct EntryRow {
    city: String,
    specialty: String,
    user_email: String,
    submitted_at: String,
}

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub city: Option<String>,
    pub specialty: Option<String>,
    pub user_email: Option<String>,
}

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    render(&state, Vec::new()).await
}

pub async fn submit(
    State(state): State<SharedState>,
    Form(form): Form<EntryForm>,
) -> Result<Html<String>, AppError> {
    let flashes = match NewEntry::parse(form.city, form.specialty, form.user_email) {
        Ok(entry) => {
            let notifier = state.mailer.as_deref().map(|m| m as &dyn EntryNotifier);
            workflow::process(&state.store, notifier, &entry).await
        }
        Err(msg) => vec![Flash::error(msg)],
    };

    render(&state, flashes).await
}

async fn render(state: &SharedState, flashes: Vec<Flash>) -> Result<Html<String>, AppError> {
    // The page stays usable when the store is down; the table just comes
    // back empty.
    let entries = match db::entries::list_recent(&state.pool, 20).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Failed to load recent entries: {e}");
            Vec::new()
        }
    };

    let entries = entries
        .into_iter()
        .map(|e| EntryRow {
            city: e.city,
            specialty: e.specialty,
            user_email: e.user_email,
            submitted_at: e.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    let template = IndexTemplate { flashes, entries };
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))
}
