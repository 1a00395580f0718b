use serde::{Deserialize, Serialize};

/// A pending "tell me when it reaches X" threshold for one commodity.
///
/// Serialized exactly as the `priceAlerts` blob expects:
/// `{"commodity": "Onion", "target": 2000}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub commodity: String,

    #[serde(rename = "target")]
    pub target_price: f64,
}

impl PriceAlert {
    pub fn new(commodity: impl Into<String>, target_price: f64) -> Self {
        Self {
            commodity: commodity.into(),
            target_price,
        }
    }
}

/// Emitted once when an alert fires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertNotification {
    pub commodity: String,
    pub market: String,
    pub price: f64,
    pub target_price: f64,
    pub message: String,
}

impl AlertNotification {
    pub fn new(alert: &PriceAlert, market: &str, price: f64) -> Self {
        let message = format!(
            "{} at {} reached ₹{}",
            alert.commodity,
            market,
            fmt_price(price)
        );

        Self {
            commodity: alert.commodity.clone(),
            market: market.to_string(),
            price,
            target_price: alert.target_price,
            message,
        }
    }
}

/// Whole rupees print without decimals, anything else with two.
pub fn fmt_price(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{:.0}", x)
    } else {
        format!("{:.2}", x)
    }
}
