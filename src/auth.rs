/// Session login
///
/// Exchanges roll number, email and password for a bearer token. The token is
/// stored in the client's session; only the student identity is handed back.
use crate::client::{ApiClient, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::StudentIdentity;
use log::{debug, info};
use serde_json::{Value, json};

pub const LOGIN_PATH: &str = "/student/auth/login";

/// Already-resolved login credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub roll_number: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("roll_number", &self.roll_number)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Log in and store the returned token into the client session
///
/// A 2xx answer without a token is `ApiError::Auth`; a rejected login is the
/// `ApiError::Http` from the client, carrying the server's raw body.
pub fn authenticate<T: Transport>(client: &ApiClient<T>, credentials: &Credentials) -> ApiResult<StudentIdentity> {
    debug!("logging in as {}", credentials.roll_number);

    let body = json!({
        "rollNumber": credentials.roll_number,
        "email": credentials.email,
        "password": credentials.password,
    });
    let response = client.post(LOGIN_PATH, &body)?;

    let token = match response.get("token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => return Err(ApiError::Auth("no token returned".to_string())),
    };
    client.set_token(token)?;

    let student = StudentIdentity::from_payload(response.get("student").unwrap_or(&Value::Null), &credentials.roll_number);
    info!("authenticated as {} ({})", student.name, student.roll_number);
    Ok(student)
}
