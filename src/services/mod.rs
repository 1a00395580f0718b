pub mod mandi;
pub mod market_snapshot;
pub mod alert_store;
pub mod alert_monitor;

pub mod market_service;
pub mod credit_service;
pub mod loan_service;
pub mod calendar_service;
