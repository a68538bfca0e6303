use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Coffee entity - a catalog product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coffee {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
}

impl Coffee {
    /// Create a new coffee with a freshly generated identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A synthetic order event for a coffee.
///
/// Never persisted; produced by the order-stream generator and exists only on
/// the wire. The `coffee_id` is carried by value and is not validated against
/// the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeOrder {
    /// The coffee this order refers to
    pub coffee_id: Uuid,
    /// Wall-clock time at which the event was produced
    pub date_ordered: DateTime<Utc>,
}

impl CoffeeOrder {
    /// Create an order for the given coffee, stamped with the current time
    pub fn new(coffee_id: Uuid) -> Self {
        Self {
            coffee_id,
            date_ordered: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coffees_get_distinct_ids() {
        let a = Coffee::new("Americano");
        let b = Coffee::new("Americano");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_coffee_serializes_id_as_underscore_id() {
        let coffee = Coffee::new("Java");
        let json = serde_json::to_value(&coffee).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["name"], "Java");
    }

    #[test]
    fn test_coffee_deserializes_from_id_alias() {
        let coffee: Coffee =
            serde_json::from_str(r#"{"id":"7f2d1276-3f4a-4e5b-9c8d-0a1b2c3d4e5f","name":"Delta"}"#)
                .unwrap();
        assert_eq!(coffee.name, "Delta");
    }

    #[test]
    fn test_order_uses_camel_case_on_the_wire() {
        let order = CoffeeOrder::new(Uuid::new_v4());
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("coffeeId").is_some());
        assert!(json.get("dateOrdered").is_some());
    }
}
