//! # Login Commands
//!
//! The phone + OTP gate, driven through the pluggable auth collaborator.
//! The billing commands know nothing about any of this - the gate only
//! decides whether the terminal loop starts.

use tracing::info;
use zweeti_store::Store;

use crate::auth::AuthProvider;
use crate::error::AppResult;

/// Asks the provider to send a one-time code to `phone`.
pub async fn request_code(auth: &dyn AuthProvider, phone: &str) -> AppResult<()> {
    auth.request_code(phone).await?;
    Ok(())
}

/// Verifies the code and persists the session flag.
///
/// ## Returns
/// The signed-in user id.
pub async fn complete_sign_in(
    auth: &dyn AuthProvider,
    store: &Store,
    code: &str,
) -> AppResult<String> {
    let user_id = auth.verify_code(code).await?;
    store.session().sign_in(&user_id).await?;
    info!(user_id = %user_id, "Cashier signed in");
    Ok(user_id)
}

/// The signed-in user id, if a session is present.
pub async fn current_user(store: &Store) -> AppResult<Option<String>> {
    Ok(store.session().current_user().await?)
}

/// Clears the persisted session flag.
pub async fn sign_out(store: &Store) -> AppResult<()> {
    store.session().sign_out().await?;
    info!("Cashier signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StubAuthProvider;
    use zweeti_store::StoreConfig;

    #[tokio::test]
    async fn test_sign_in_persists_session() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let auth = StubAuthProvider::new();

        request_code(&auth, "9876543210").await.unwrap();
        let user_id = complete_sign_in(&auth, &store, "123456").await.unwrap();

        assert_eq!(current_user(&store).await.unwrap(), Some(user_id));

        sign_out(&store).await.unwrap();
        assert_eq!(current_user(&store).await.unwrap(), None);
    }
}
