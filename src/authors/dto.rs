use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::{require_non_blank, Identifiable};
use crate::core::library::LibraryResult;
use crate::utils::date::serializer;

// AuthorDto is the author payload exchanged with the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthorDto {
    pub author_id: String,
    pub version: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl AuthorDto {
    pub fn new(name: &str, birth_date: NaiveDate, nationality: &str) -> AuthorDto {
        AuthorDto {
            author_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            birth_date,
            nationality: nationality.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        require_non_blank("name", self.name.as_str())?;
        require_non_blank("nationality", self.nationality.as_str())?;
        Ok(())
    }
}

impl Identifiable for AuthorDto {
    fn id(&self) -> String {
        self.author_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
