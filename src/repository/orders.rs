use super::Repository;
use crate::error::StoreError;
use crate::model::Order;

impl Repository {
    /// Store a new order under a fresh id and return that id.
    pub async fn add_order(&self, order: Order) -> Result<i64, StoreError> {
        if order.id.is_some() {
            return Err(StoreError::PresetId);
        }
        Ok(self
            .orders
            .insert(|id| Order {
                id: Some(id),
                ..order
            })
            .await)
    }

    /// Look up an order by id.
    pub async fn find_order(&self, id: i64) -> Result<Order, StoreError> {
        self.orders
            .get(id)
            .await
            .ok_or(StoreError::OrderNotFound(id))
    }

    /// Quiet removal: `true` if an order was deleted, `false` if the id
    /// was unknown. Unlike `delete_pet`, an absent order is not an error.
    pub async fn delete_order(&self, id: i64) -> bool {
        self.orders.remove(id).await.is_some()
    }
}
