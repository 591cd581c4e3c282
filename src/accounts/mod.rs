pub mod profile;
pub mod store;

pub use profile::{normalize_avatar, resolve_avatar, ProfileEditor, ProfileField, ProfileFields, ProfileLoader};
pub use store::{Identity, InMemoryUserStore, UserStore, UserUpsert};

use crate::error::AuthError;
use crate::models::UserRecord;
use tracing::info;

fn upsert_for(identity: &Identity) -> Result<UserUpsert, AuthError> {
    let email = identity
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(AuthError::MissingEmail)?;

    Ok(UserUpsert {
        email: email.to_string(),
        name: identity.name.clone(),
        avatar: identity.picture.clone(),
    })
}

/// Record a sign-in: make sure a user exists for the provider's email and
/// refresh its name and avatar.
pub async fn sign_in<S: UserStore + ?Sized>(store: &S, identity: &Identity) -> Result<UserRecord, AuthError> {
    let upsert = upsert_for(identity)?;
    let user = store.upsert(upsert).await?;
    info!(user_id = %user.id, "Signed in");
    Ok(user)
}

/// The signed-in user's record, created on first access.
pub async fn current_user<S: UserStore + ?Sized>(
    store: &S,
    session: Option<&Identity>,
) -> Result<UserRecord, AuthError> {
    let identity = session.ok_or(AuthError::Unauthorized)?;
    let upsert = upsert_for(identity).map_err(|_| AuthError::Unauthorized)?;
    Ok(store.upsert(upsert).await?)
}
