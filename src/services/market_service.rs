use std::collections::HashSet;

use reqwest::Url;

use crate::models::{alert::fmt_price, MarketRecord};

/// Distinct commodity names in first-seen order.
pub fn unique_commodities(records: &[MarketRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.commodity.as_str()))
        .map(|r| r.commodity.clone())
        .collect()
}

/// Case-insensitive exact match; a blank commodity keeps everything.
pub fn filter_by_commodity(records: &[MarketRecord], commodity: &str) -> Vec<MarketRecord> {
    let commodity = commodity.trim();
    if commodity.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| r.is_commodity(commodity))
        .cloned()
        .collect()
}

/// Highest modal price wins; on a tie the later record is kept.
pub fn best_mandi(records: &[MarketRecord]) -> Option<&MarketRecord> {
    records
        .iter()
        .filter_map(|r| r.modal_price.map(|p| (r, p)))
        .fold(None, |best: Option<(&MarketRecord, f64)>, (r, p)| match best {
            Some((b, bp)) if bp > p => Some((b, bp)),
            _ => Some((r, p)),
        })
        .map(|(r, _)| r)
}

/// WhatsApp share link for one row.
pub fn share_link(record: &MarketRecord) -> String {
    let price = record
        .modal_price
        .map(fmt_price)
        .unwrap_or_else(|| "NA".to_string());

    let msg = format!(
        "🌾 Mandi Rate:\nCommodity: {}\nMarket: {}\nState: {}\nDistrict: {}\nPrice: ₹{}",
        record.commodity, record.market, record.state, record.district, price
    );

    match Url::parse_with_params("https://wa.me/", &[("text", msg.as_str())]) {
        Ok(url) => url.to_string(),
        Err(_) => "https://wa.me/".to_string(),
    }
}
