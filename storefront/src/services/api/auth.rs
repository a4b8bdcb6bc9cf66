//! # Auth Endpoints
//!
//! Registration and login against the auth service group. Success responses
//! carry `{token, user, message}`; both fields are persisted into the
//! injected session before the call returns, so a failed call can never
//! disturb previously stored credentials.

use shared::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;
use crate::utils::validation::{validate_email, validate_password, validate_username};

/// Register a new account.
///
/// Credentials are checked against the service's own rules before the
/// request is built, so obvious rejects never leave the client. On success
/// the service grants the starting balance and the returned token/user pair
/// is stored in the session.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse> {
    validate_username(username).into_result()?;
    validate_email(email).into_result()?;
    validate_password(password).into_result()?;

    tracing::info!("Registering account");

    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = client
        .http
        .post(format!("{}?action=register", client.config().auth_url))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Register network error");
            crate::core::error::ClientError::from(e)
        })?;

    let auth = read_json::<AuthResponse>(response, "Registration failed").await?;
    client.session().set_auth(&auth.token, &auth.user)?;

    tracing::info!(user_id = auth.user.id, "Registration successful");
    Ok(auth)
}

/// Log in with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    validate_email(email).into_result()?;
    validate_password(password).into_result()?;

    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = client
        .http
        .post(format!("{}?action=login", client.config().auth_url))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            crate::core::error::ClientError::from(e)
        })?;

    let auth = read_json::<AuthResponse>(response, "Login failed").await?;
    client.session().set_auth(&auth.token, &auth.user)?;

    tracing::info!(
        user_id = auth.user.id,
        duration_ms = start.elapsed().as_millis(),
        "Login successful"
    );
    Ok(auth)
}

/// Log out: clear the stored session. Purely local, no round trip.
pub fn logout(client: &ApiClient) -> Result<()> {
    client.session().clear_auth()
}
