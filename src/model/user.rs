use serde::{Deserialize, Serialize};

/// Account record. The username is the caller-facing key: unique among
/// live users and immutable across updates, with case-sensitive matching.
/// The id is server-assigned and survives every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    pub user_status: Option<i32>,
}

impl User {
    /// A new unpersisted user with just a username.
    pub fn named(username: impl Into<String>) -> Self {
        User {
            id: None,
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            phone: String::new(),
            user_status: None,
        }
    }
}
