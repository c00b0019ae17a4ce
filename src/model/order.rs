use serde::{Deserialize, Serialize};

/// Fulfilment state of an order. Carried as data; the store never
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Approved,
    Delivered,
}

/// Adoption order for a single pet.
///
/// Beyond the server-assigned `id`, every field is opaque to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub pet_id: i64,
    pub quantity: i32,
    pub ship_date: Option<String>,
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub complete: bool,
}

impl Order {
    /// A new unpersisted order for one pet.
    pub fn for_pet(pet_id: i64) -> Self {
        Order {
            id: None,
            pet_id,
            quantity: 1,
            ship_date: None,
            status: None,
            complete: false,
        }
    }
}
