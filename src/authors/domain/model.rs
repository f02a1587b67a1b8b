use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// AuthorEntity is the stored row for an author; books reference it by id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct AuthorEntity {
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

impl AuthorEntity {
    pub fn new(name: &str, birth_date: NaiveDate, nationality: &str) -> Self {
        Self {
            author_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            birth_date,
            nationality: nationality.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AuthorEntity {
    fn id(&self) -> String {
        self.author_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::domain::model::AuthorEntity;

    #[tokio::test]
    async fn test_should_build_author() {
        let birth_date = NaiveDate::from_ymd_opt(1981, 1, 1).expect("date");
        let author = AuthorEntity::new("Author 1", birth_date, "Nationality 1");
        assert_eq!("Author 1", author.name.as_str());
        assert_eq!(birth_date, author.birth_date);
        assert_eq!(0, author.version);
    }
}
