//! # Session Flag Repository
//!
//! The login collaborator's session-presence flag. The stored value is the
//! opaque user id handed back by the auth provider; billing logic never
//! reads it, only the terminal's login gate does.

use tracing::info;

use crate::error::StoreResult;
use crate::kv::KvRepository;

/// Key the signed-in user id is stored under.
const SESSION_KEY: &str = "zweeti_session";

/// Repository for the login session flag.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    kv: KvRepository,
}

impl SessionRepository {
    pub fn new(kv: KvRepository) -> Self {
        SessionRepository { kv }
    }

    /// Marks a user as signed in.
    pub async fn sign_in(&self, user_id: &str) -> StoreResult<()> {
        self.kv.put(SESSION_KEY, user_id).await?;
        info!(user_id = %user_id, "Session flag set");
        Ok(())
    }

    /// The signed-in user id, if a session is present.
    pub async fn current_user(&self) -> StoreResult<Option<String>> {
        self.kv.get(SESSION_KEY).await
    }

    /// Clears the session flag. Safe to call when already signed out.
    pub async fn sign_out(&self) -> StoreResult<()> {
        self.kv.delete(SESSION_KEY).await?;
        info!("Session flag cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Store, StoreConfig};

    #[tokio::test]
    async fn test_session_lifecycle() {
        let session = Store::open(StoreConfig::in_memory())
            .await
            .unwrap()
            .session();

        assert_eq!(session.current_user().await.unwrap(), None);

        session.sign_in("stub-cashier-1").await.unwrap();
        assert_eq!(
            session.current_user().await.unwrap().as_deref(),
            Some("stub-cashier-1")
        );

        session.sign_out().await.unwrap();
        assert_eq!(session.current_user().await.unwrap(), None);

        // Signing out twice is fine
        session.sign_out().await.unwrap();
    }
}
