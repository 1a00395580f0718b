use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoanScheme {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub benefits: &'static str,
}
