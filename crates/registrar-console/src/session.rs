//! Login and logout.

use registrar_auth::{
    AuthError, LOGIN_ROUTE, LoginRequest, LoginResponse, Role, Session, SessionContext,
};
use registrar_client::ApiClient;

/// Path of the login endpoint, relative to the API base.
pub const LOGIN_PATH: &str = "login";

/// Shown when the server refuses without a reason.
pub const LOGIN_FAILED: &str = "Login failed";

/// Why a login attempt did not start a session. `Display` is the message
/// shown on the login form.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoginError {
    /// Empty fields, unknown role, or the session could not be stored
    #[error(transparent)]
    Invalid(#[from] AuthError),

    /// The server refused the credentials
    #[error("{}", .0.as_deref().unwrap_or(LOGIN_FAILED))]
    Rejected(Option<String>),

    /// No response from the server
    #[error("Server not reachable")]
    Unreachable,

    /// The request could not be built
    #[error(transparent)]
    Client(#[from] registrar_client::Error),
}

/// Sign in and start a session.
///
/// The role is lower-cased before it is sent and before the session is
/// stored. On success returns the role; its
/// [`landing_route`](Role::landing_route) is where the user goes next.
pub async fn login(
    api: &dyn ApiClient,
    session: &SessionContext,
    username: &str,
    password: &str,
    role: &str,
) -> Result<Role, LoginError> {
    let request = LoginRequest::new(username, password, role)?;
    let parsed: Role = request.role.parse()?;
    let body = serde_json::to_value(&request).map_err(registrar_client::Error::from)?;

    tracing::debug!(username, role = %parsed, "Logging in");
    match api.post(LOGIN_PATH, &body).await {
        Ok(value) => {
            let response: LoginResponse = serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Undecodable login response");
                LoginResponse::default()
            });
            match response.token.filter(|token| response.success && !token.is_empty()) {
                Some(token) => {
                    session.init(Session::new(token, &request.role))?;
                    tracing::info!(username, role = %parsed, "Logged in");
                    Ok(parsed)
                }
                None => Err(LoginError::Rejected(response.message)),
            }
        }
        Err(e) if e.is_transport() => {
            tracing::warn!(error = %e, "Login server unreachable");
            Err(LoginError::Unreachable)
        }
        Err(e) => Err(LoginError::Rejected(e.server_message().map(str::to_string))),
    }
}

/// End the session. Returns the route to show next.
pub fn logout(session: &SessionContext) -> Result<&'static str, AuthError> {
    session.clear()?;
    Ok(LOGIN_ROUTE)
}
