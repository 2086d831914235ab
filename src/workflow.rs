use crate::email::EntryNotifier;
use crate::models::NewEntry;
use crate::store::EntryStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashLevel {
    Success,
    Warning,
    Error,
}

impl FlashLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Warning => "warning",
            FlashLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Run the submission workflow for an already-validated entry: persist it,
/// then notify the admin and the submitter. The phases are independent
/// failure domains; a store failure still lets notification run, and a
/// failed send to one recipient does not suppress the other. Every outcome
/// is reported back as a flash message rather than an error.
pub async fn process(
    store: &dyn EntryStore,
    notifier: Option<&dyn EntryNotifier>,
    entry: &NewEntry,
) -> Vec<Flash> {
    let mut flashes = Vec::new();

    match store.append(entry).await {
        Ok(stored) => {
            tracing::info!(id = stored.id, city = %stored.city, "Entry saved");
        }
        Err(e) => {
            tracing::error!("Database error: {e}");
            flashes.push(Flash::warning("Error saving to database. Check logs."));
        }
    }

    match notifier {
        Some(notifier) => {
            let recipients = [notifier.admin_address().to_string(), entry.user_email.clone()];
            let mut failed = false;
            for to in &recipients {
                tracing::info!(%to, "Sending notification email");
                if let Err(e) = notifier.notify(to, entry).await {
                    tracing::error!(%to, "Failed to send email: {e}");
                    failed = true;
                }
            }
            if failed {
                flashes.push(Flash::warning(
                    "Entry saved, but failed to send email. Check server logs for details.",
                ));
            }
        }
        None => {
            tracing::warn!("Email credentials not configured. Skipping notification.");
        }
    }

    flashes.push(Flash::success(format!("Success! {} added.", entry.city)));
    flashes
}
