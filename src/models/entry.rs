use chrono::{DateTime, Utc};

/// A persisted row from `city_entries`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CityEntry {
    pub id: i64,
    pub city: String,
    pub specialty: String,
    pub user_email: String,
    #[sqlx(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A validated submission, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub city: String,
    pub specialty: String,
    pub user_email: String,
}

impl NewEntry {
    /// Validate the raw form fields. All three must be present and non-empty
    /// after trimming; values are stored exactly as submitted otherwise.
    pub fn parse(
        city: Option<String>,
        specialty: Option<String>,
        user_email: Option<String>,
    ) -> Result<NewEntry, String> {
        let city = city.as_deref().unwrap_or_default().trim().to_string();
        let specialty = specialty.as_deref().unwrap_or_default().trim().to_string();
        let user_email = user_email.as_deref().unwrap_or_default().trim().to_string();

        if city.is_empty() || specialty.is_empty() || user_email.is_empty() {
            return Err("Please fill in all fields.".to_string());
        }

        Ok(NewEntry {
            city,
            specialty,
            user_email,
        })
    }
}
