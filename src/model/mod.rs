//! Entity types stored by the repository.
//!
//! All creatable entities carry `id: Option<i64>`, left `None` until the
//! store assigns one. The enclosing API layer serializes these directly,
//! so field names follow the wire convention (camelCase structs,
//! lowercase enums).

mod order;
mod pet;
mod user;

pub use order::{Order, OrderStatus};
pub use pet::{Category, Inventory, Pet, Status, Tag};
pub use user::User;
