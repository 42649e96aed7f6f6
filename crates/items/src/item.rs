use serde::{Deserialize, Serialize};

use itemservice_core::{Entity, ItemId};

/// Object name used when building message-resolution codes.
pub const OBJECT_NAME: &str = "item";

/// Field names as reported in violations.
pub mod fields {
    pub const NAME: &str = "name";
    pub const PRICE: &str = "price";
    pub const QUANTITY: &str = "quantity";
}

/// Item-shaped input: what a user submits on the add/edit forms.
///
/// Every field is optional; presence is a validation concern, not a
/// construction one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// `price * quantity` computed in 64 bits, when both are present.
    ///
    /// The largest product the rules admit (1_000_000 * 9_998) does not fit in
    /// an `i32`, and neither does the product of two arbitrary `i32` inputs.
    pub fn total_price(&self) -> Option<i64> {
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => Some(i64::from(price) * i64::from(quantity)),
            _ => None,
        }
    }
}

/// A stored catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: Option<String>,
    price: Option<i32>,
    quantity: Option<i32>,
}

impl Item {
    pub fn new(id: ItemId, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
            quantity: payload.quantity,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> Option<i32> {
        self.price
    }

    pub fn quantity(&self) -> Option<i32> {
        self.quantity
    }

    /// Replace name, price and quantity; the identifier never changes.
    pub fn apply(&mut self, payload: ItemPayload) {
        self.name = payload.name;
        self.price = payload.price;
        self.quantity = payload.quantity;
    }

    pub fn to_payload(&self) -> ItemPayload {
        ItemPayload {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
