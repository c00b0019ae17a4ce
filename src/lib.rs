mod error;
mod model;
mod repository;
mod table;

pub use error::StoreError;
pub use model::{Category, Inventory, Order, OrderStatus, Pet, Status, Tag, User};
pub use repository::Repository;
pub use table::Table;
