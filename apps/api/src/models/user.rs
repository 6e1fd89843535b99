use serde::{Deserialize, Serialize};

/// An authenticated user as resolved from a session by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
