use serde::{Deserialize, Deserializer, Serialize};

/// One APMC mandi price row, as served by data.gov.in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub commodity: String,
    #[serde(default)]
    pub variety: String,

    // upstream sends these as strings ("2200"), occasionally "NA"
    #[serde(default, deserialize_with = "lenient_price")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub modal_price: Option<f64>,

    #[serde(default)]
    pub arrival_date: String,
}

impl MarketRecord {
    pub fn is_commodity(&self, commodity: &str) -> bool {
        self.commodity.to_lowercase() == commodity.to_lowercase()
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;

    let parsed = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(parsed.filter(|p| p.is_finite()))
}
