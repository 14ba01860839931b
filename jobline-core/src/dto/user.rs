//! User and session DTOs

use serde::{Deserialize, Serialize};

/// Request body for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    /// "jobseeker" or "employer".
    pub role: String,
}

/// Request body for `PATCH /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The signed-in user as echoed back by the backend.
///
/// No token accompanies this; the backend tracks the session itself and the
/// client attaches no auth headers to any request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}
