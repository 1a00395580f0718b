use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeSource {
    Farming,
    Business,
    Labor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveLoans {
    Zero,
    One,
    Multiple,
}

/// The five questions on the credit form. Every answer is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAnswers {
    pub income: IncomeLevel,
    // "default" is a keyword
    #[serde(rename = "default")]
    pub defaulted: YesNo,
    pub land: YesNo,
    pub source: IncomeSource,
    pub loans: ActiveLoans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreditCategory {
    Excellent,
    Good,
    Average,
    Poor,
}

impl CreditCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CreditCategory::Excellent => "Excellent (750+)",
            CreditCategory::Good => "Good (650–749)",
            CreditCategory::Average => "Average (550–649)",
            CreditCategory::Poor => "Poor (<550)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditResult {
    pub score: i32,
    pub category: CreditCategory,
}
