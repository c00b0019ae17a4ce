use super::Repository;
use crate::error::StoreError;
use crate::model::User;
use crate::table::Table;

impl Repository {
    /// Store a new user and return the username.
    ///
    /// The uniqueness scan and the insert share one lock acquisition, so
    /// two concurrent creations of the same username cannot both land.
    /// The collision check outranks the preset-id rejection.
    pub async fn add_user(&self, user: User) -> Result<String, StoreError> {
        let mut rows = self.users.rows().await;
        if rows.values().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        if user.id.is_some() {
            return Err(StoreError::PresetId);
        }
        let id = Table::next_id(&rows);
        let username = user.username.clone();
        rows.insert(id, User { id: Some(id), ..user });
        Ok(username)
    }

    /// Look up a user by username (linear scan, case-sensitive).
    pub async fn user(&self, username: &str) -> Result<User, StoreError> {
        self.users
            .rows()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))
    }

    /// Remove a user by username.
    pub async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        let mut rows = self.users.rows().await;
        let id = rows
            .iter()
            .find(|(_, u)| u.username == username)
            .map(|(id, _)| *id)
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))?;
        rows.remove(&id);
        Ok(())
    }

    /// Replace the stored user that shares the incoming record's
    /// username, keeping the stored id whatever the caller sent.
    ///
    /// The username is the identifying key here, which makes it
    /// immutable: an update can never move a record to a new username.
    pub async fn update_user(&self, user: User) -> Result<User, StoreError> {
        let mut rows = self.users.rows().await;
        let id = rows
            .iter()
            .find(|(_, u)| u.username == user.username)
            .map(|(id, _)| *id)
            .ok_or_else(|| StoreError::UnknownUser(user.username.clone()))?;
        let stored = User {
            id: Some(id),
            ..user
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }
}
