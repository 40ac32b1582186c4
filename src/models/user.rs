use serde::{Deserialize, Serialize};
use validator::Validate;

/// `email` is the unique account key; `Prediction.user_id` points at it.
/// The password is stored and compared in plaintext; this is a demo system
/// and hardening it is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// The wire shape for accounts: everything but the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub created_at: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Optional data-URL string.
    pub profile_picture: Option<String>,
}

/// Demo accounts seeded when the users collection is empty.
pub fn sample_users(now_ms: i64) -> Vec<User> {
    let accounts = [
        ("user-1", "John Doe", "john@example.com"),
        ("user-2", "Jane Smith", "jane@example.com"),
        ("user-3", "Mike Johnson", "mike@example.com"),
        ("user-4", "Sarah Williams", "sarah@example.com"),
        ("user-5", "David Brown", "david@example.com"),
    ];

    accounts
        .iter()
        .map(|(id, name, email)| User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            profile_picture: None,
            created_at: now_ms,
        })
        .collect()
}
