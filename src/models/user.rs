//! User model for the authenticated session subject.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Authenticated user profile.
///
/// The application keeps the current session subject in a
/// `Store<Option<User>>`; `None` means unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// User identifier (UUID string)
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name (may not be set)
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_username_deserializes_as_none() {
        let json = r#"{"id":"u-1","email":"lea@example.com","username":null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-1");
        assert!(user.username.is_none());
    }
}
