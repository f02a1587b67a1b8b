use sha2::{Digest, Sha256};

// One-way digest used for customer credentials. Injected into the customer
// service so the hashing primitive stays swappable.
pub trait PasswordHasher: Sync + Send {
    fn hash(&self, plaintext: &str) -> String;
}

pub(crate) struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plaintext: &str) -> String {
        format!("{:x}", Sha256::digest(plaintext.as_bytes()))
    }
}

pub(crate) fn create_password_hasher() -> Box<dyn PasswordHasher> {
    Box::new(Sha256PasswordHasher)
}

#[cfg(test)]
mod tests {
    use crate::utils::hash::{create_password_hasher, PasswordHasher};

    #[tokio::test]
    async fn test_should_never_return_plaintext() {
        let hasher = create_password_hasher();
        let digest = hasher.hash("pw1");
        assert_ne!("pw1", digest.as_str());
        assert_eq!(64, digest.len());
    }

    #[tokio::test]
    async fn test_should_be_deterministic() {
        let hasher = create_password_hasher();
        assert_eq!(hasher.hash("pw1"), hasher.hash("pw1"));
        assert_ne!(hasher.hash("pw1"), hasher.hash("pw2"));
    }
}
