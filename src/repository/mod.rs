//! Repository - the in-memory store behind the pet-adoption API.
//!
//! Six independent tables, one async mutex each. Every operation locks
//! only the tables it touches; nothing spans tables transactionally. The
//! one cross-table sequence, `add_pet` persisting its embedded tags and
//! category, commits each write independently, so a concurrent reader
//! may observe the new pet before its labels exist in their own stores.

mod orders;
mod pets;
mod users;

use crate::error::StoreError;
use crate::model::{Category, Order, Pet, Tag, User};
use crate::table::Table;

pub struct Repository {
    pets: Table<Pet>,
    tags: Table<Tag>,
    categories: Table<Category>,
    orders: Table<Order>,
    photos: Table<Vec<u8>>,
    users: Table<User>,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository {
    pub fn new() -> Self {
        Repository {
            pets: Table::new(),
            tags: Table::new(),
            categories: Table::new(),
            orders: Table::new(),
            photos: Table::new(),
            users: Table::new(),
        }
    }

    /// Store a tag under a fresh id.
    ///
    /// Same creation rule as every entity: a preset id is rejected.
    pub async fn add_tag(&self, tag: Tag) -> Result<i64, StoreError> {
        if tag.id.is_some() {
            return Err(StoreError::PresetId);
        }
        Ok(self.tags.insert(|id| Tag { id: Some(id), ..tag }).await)
    }

    /// Store a category under a fresh id. Creation rules match `add_tag`.
    pub async fn add_category(&self, category: Category) -> Result<i64, StoreError> {
        if category.id.is_some() {
            return Err(StoreError::PresetId);
        }
        Ok(self
            .categories
            .insert(|id| Category { id: Some(id), ..category })
            .await)
    }

    /// All stored tags in ascending-id order.
    pub async fn tags(&self) -> Vec<Tag> {
        self.tags.all().await
    }

    /// All stored categories in ascending-id order.
    pub async fn categories(&self) -> Vec<Category> {
        self.categories.all().await
    }
}
