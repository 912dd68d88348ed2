// ABOUTME: PriceAlert record and its creation payload
// ABOUTME: product_name and current_best_price are snapshots taken at creation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A standing request to be told when a product's best price reaches a target.
/// Once `triggered` flips to true it is never reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub target_price: f64,
    pub current_best_price: f64,
    pub email: Option<String>,
    pub triggered: bool,
    pub created_at: DateTime<Utc>,
    pub triggered_at: Option<DateTime<Utc>>,
}

/// Client payload for alert creation.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertCreateInput {
    pub product_id: String,
    pub product_name: String,
    pub target_price: f64,
    pub current_best_price: f64,
    #[serde(default)]
    pub email: Option<String>,
}

impl PriceAlert {
    pub fn from_input(input: AlertCreateInput) -> Self {
        PriceAlert {
            id: format!("alert-{}", nanoid::nanoid!()),
            product_id: input.product_id,
            product_name: input.product_name,
            target_price: input.target_price,
            current_best_price: input.current_best_price,
            email: input.email,
            triggered: false,
            created_at: Utc::now(),
            triggered_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_starts_untriggered() {
        let alert = PriceAlert::from_input(AlertCreateInput {
            product_id: "prod-1".to_string(),
            product_name: "Milk 2L".to_string(),
            target_price: 3.00,
            current_best_price: 3.40,
            email: None,
        });
        assert!(alert.id.starts_with("alert-"));
        assert!(!alert.triggered);
        assert!(alert.triggered_at.is_none());
    }
}
