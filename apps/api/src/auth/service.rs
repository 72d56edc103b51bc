use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::store::AccountStore;
use crate::auth::token::TokenIssuer;
use crate::errors::{run_blocking, AppError};

/// Body of `POST /signup` and `POST /login`. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registers a new account. An existing email is rejected and left untouched.
pub async fn signup(
    store: &dyn AccountStore,
    bcrypt_cost: u32,
    credentials: Credentials,
) -> Result<(), AppError> {
    let Credentials { email, password } = credentials;

    if store.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "signup rejected: account exists");
        return Err(AppError::Conflict(email));
    }

    let password_hash =
        run_blocking("password hashing", move || hash_password(&password, bcrypt_cost)).await?;
    let account = store.insert(&email, &password_hash).await?;

    info!(account_id = account.id, "signup");
    Ok(())
}

/// Verifies credentials and issues a bearer token for the account.
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    store: &dyn AccountStore,
    tokens: &TokenIssuer,
    credentials: Credentials,
) -> Result<String, AppError> {
    let Credentials { email, password } = credentials;

    let Some(account) = store.find_by_email(&email).await? else {
        warn!(email = %email, "login failed: unknown account");
        return Err(AppError::InvalidCredentials);
    };

    let hash = account.password_hash.clone();
    let verified =
        run_blocking("password verification", move || verify_password(&password, &hash)).await?;
    if !verified {
        warn!(account_id = account.id, "login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    tokens.issue(&account.email)
}
