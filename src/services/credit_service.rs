use crate::models::{
    credit::{ActiveLoans, IncomeLevel, IncomeSource, YesNo},
    CreditAnswers, CreditCategory, CreditResult,
};

const BASE_SCORE: i32 = 600;
const MIN_SCORE: i32 = 300;
const MAX_SCORE: i32 = 850;

/// Point-based estimate on the familiar 300–850 scale.
pub fn calculate_score(a: &CreditAnswers) -> CreditResult {
    let mut score = BASE_SCORE;

    score += match a.income {
        IncomeLevel::High => 100,
        IncomeLevel::Medium => 50,
        IncomeLevel::Low => -50,
    };

    score += match a.defaulted {
        YesNo::No => 50,
        YesNo::Yes => -100,
    };

    score += match a.land {
        YesNo::Yes => 50,
        YesNo::No => -50,
    };

    score += match a.source {
        IncomeSource::Farming => 50,
        IncomeSource::Business => 0,
        IncomeSource::Labor => -30,
    };

    score += match a.loans {
        ActiveLoans::Zero => 50,
        ActiveLoans::One => 20,
        ActiveLoans::Multiple => -50,
    };

    let score = score.clamp(MIN_SCORE, MAX_SCORE);

    CreditResult {
        score,
        category: categorize(score),
    }
}

pub fn categorize(score: i32) -> CreditCategory {
    match score {
        s if s >= 750 => CreditCategory::Excellent,
        s if s >= 650 => CreditCategory::Good,
        s if s >= 550 => CreditCategory::Average,
        _ => CreditCategory::Poor,
    }
}
