use crate::models::LoanScheme;

static SCHEMES: [LoanScheme; 5] = [
    LoanScheme {
        id: 1,
        title: "Kisan Credit Card (KCC)",
        description: "Provides farmers with timely access to credit for farming needs at low-interest rates.",
        eligibility: "All farmers involved in crop production activities.",
        benefits: "Easy loans with simple documentation and flexible repayment.",
    },
    LoanScheme {
        id: 2,
        title: "PM Kisan Samman Nidhi",
        description: "₹6000/year financial support to small and marginal farmers.",
        eligibility: "Small and marginal farmers owning up to 2 hectares of land.",
        benefits: "Direct cash transfer to farmer accounts.",
    },
    LoanScheme {
        id: 3,
        title: "PM Fasal Bima Yojana",
        description: "Crop insurance scheme to protect farmers against crop loss.",
        eligibility: "Farmers growing notified crops.",
        benefits: "Low premium insurance coverage.",
    },
    LoanScheme {
        id: 4,
        title: "Mudra Loan Yojana",
        description: "Provides loans up to ₹10 lakh for micro and small businesses.",
        eligibility: "Small businesses and entrepreneurs.",
        benefits: "Collateral-free loans under Shishu, Kishor, and Tarun categories.",
    },
    LoanScheme {
        id: 5,
        title: "Agriculture Infrastructure Fund",
        description: "Provides long-term financing for post-harvest infrastructure.",
        eligibility: "Farmer groups, cooperatives, agri startups.",
        benefits: "Loans for warehouses, cold storage, processing units.",
    },
];

pub fn list_schemes() -> &'static [LoanScheme] {
    &SCHEMES
}

pub fn find_scheme(id: u32) -> Option<&'static LoanScheme> {
    SCHEMES.iter().find(|s| s.id == id)
}
