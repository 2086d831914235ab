use std::sync::Arc;

use sqlx::PgPool;

use crate::email::SmtpMailer;
use crate::store::PgEntryStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub store: PgEntryStore,
    pub mailer: Option<Arc<SmtpMailer>>,
}
