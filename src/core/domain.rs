use serde::{Deserialize, Serialize};

use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the library backend
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub bind_addr: String,
    pub seed_data: bool,
}

impl Configuration {
    pub fn new(bind_addr: &str, seed_data: bool) -> Self {
        Configuration {
            bind_addr: bind_addr.to_string(),
            seed_data,
        }
    }

    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let seed_data = std::env::var("SEED_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Configuration::new(bind_addr.as_str(), seed_data)
    }
}

// rejects blank required strings before anything is persisted
pub(crate) fn require_non_blank(field: &str, value: &str) -> LibraryResult<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(
            format!("{} must not be blank", field).as_str(), None));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{require_non_blank, Configuration};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("127.0.0.1:8080", false);
        assert_eq!("127.0.0.1:8080", config.bind_addr.as_str());
        assert!(!config.seed_data);
    }

    #[tokio::test]
    async fn test_should_reject_blank_field() {
        assert!(require_non_blank("name", "  ").is_err());
        assert!(require_non_blank("name", "Jane").is_ok());
    }
}
