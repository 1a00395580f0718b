pub mod alert;
pub mod market;
pub mod credit;
pub mod loan;
pub mod calendar;

pub use alert::{AlertNotification, PriceAlert};
pub use market::MarketRecord;
pub use credit::{CreditAnswers, CreditCategory, CreditResult};
pub use loan::LoanScheme;
pub use calendar::CalendarEvent;
