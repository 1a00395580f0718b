use std::env;

pub const DEFAULT_MANDI_API_URL: &str =
    "https://api.data.gov.in/resource/9ef84268-d588-465a-a308-a864a43d0070";

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // blob store directory (priceAlerts.json, mandiData.json)
    pub data_dir: String,
    pub templates_dir: String,

    pub data_gov_api_key: String,
    pub mandi_api_url: String,

    pub alert_poll_secs: u64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let templates_dir = env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());

    let data_gov_api_key = env::var("DATA_GOV_API_KEY").unwrap_or_default();
    let mandi_api_url =
        env::var("MANDI_API_URL").unwrap_or_else(|_| DEFAULT_MANDI_API_URL.to_string());

    let alert_poll_secs = env::var("ALERT_POLL_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(10);

    Settings {
        host,
        port,
        data_dir,
        templates_dir,
        data_gov_api_key,
        mandi_api_url,
        alert_poll_secs,
    }
}
