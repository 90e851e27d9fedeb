//! Cash-flow section classification.
//!
//! Every classified row lands in exactly one of OPERATING, INVESTING, or
//! FINANCING. The default implementation is a keyword heuristic over the
//! account's free-text category; it is deliberately behind a trait so a
//! future explicit-enum classifier can replace it without touching the
//! aggregation logic.

use serde::{Deserialize, Serialize};

use crate::coa::AccountType;
use kasbook_shared::config::ReportingConfig;

/// The three classified sections of the cash-flow statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowSectionKind {
    /// Day-to-day operations.
    Operating,
    /// Asset purchases and disposals.
    Investing,
    /// Loans, grants, and equity movements.
    Financing,
}

/// Strategy assigning a classified cash-flow row to a section.
pub trait SectionClassifier {
    /// Classifies one row by its account's type and free-text category.
    fn classify(&self, account_type: AccountType, category: &str) -> CashFlowSectionKind;
}

/// Keyword heuristic over the account category text.
///
/// Rules, in order:
/// 1. category contains an investing keyword → INVESTING
/// 2. category contains a financing keyword, or the account type is
///    LIABILITY or EQUITY → FINANCING
/// 3. otherwise → OPERATING
///
/// Matching is case-insensitive substring containment. Two accounts with
/// slightly different category text can land in different sections; that
/// fragility is inherent to the heuristic and is why it sits behind
/// `SectionClassifier`.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    investing: Vec<String>,
    financing: Vec<String>,
}

impl KeywordClassifier {
    /// Creates a classifier with explicit keyword lists.
    #[must_use]
    pub fn new(investing: Vec<String>, financing: Vec<String>) -> Self {
        Self {
            investing: investing.into_iter().map(|k| k.to_lowercase()).collect(),
            financing: financing.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Creates a classifier from the reporting configuration.
    #[must_use]
    pub fn from_config(config: &ReportingConfig) -> Self {
        Self::new(
            config.investing_keywords.clone(),
            config.financing_keywords.clone(),
        )
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::from_config(&ReportingConfig::default())
    }
}

impl SectionClassifier for KeywordClassifier {
    fn classify(&self, account_type: AccountType, category: &str) -> CashFlowSectionKind {
        let category = category.to_lowercase();
        if self.investing.iter().any(|k| category.contains(k)) {
            return CashFlowSectionKind::Investing;
        }
        let financing_type = matches!(account_type, AccountType::Liability | AccountType::Equity);
        if financing_type || self.financing.iter().any(|k| category.contains(k)) {
            return CashFlowSectionKind::Financing;
        }
        CashFlowSectionKind::Operating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AccountType::Income, "Pendapatan SPP", CashFlowSectionKind::Operating)]
    #[case(AccountType::Expense, "Operasional", CashFlowSectionKind::Operating)]
    #[case(AccountType::Expense, "Investasi Peralatan", CashFlowSectionKind::Investing)]
    #[case(AccountType::Income, "Hasil invest jangka pendek", CashFlowSectionKind::Investing)]
    #[case(AccountType::Income, "Dana Pendanaan Yayasan", CashFlowSectionKind::Financing)]
    #[case(AccountType::Expense, "Loan financing fee", CashFlowSectionKind::Financing)]
    fn test_keyword_rules(
        #[case] account_type: AccountType,
        #[case] category: &str,
        #[case] expected: CashFlowSectionKind,
    ) {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(account_type, category), expected);
    }

    #[test]
    fn test_liability_and_equity_are_financing() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.classify(AccountType::Liability, "Hutang jangka pendek"),
            CashFlowSectionKind::Financing
        );
        assert_eq!(
            classifier.classify(AccountType::Equity, "Modal"),
            CashFlowSectionKind::Financing
        );
    }

    #[test]
    fn test_investing_keyword_wins_over_type() {
        // Rule order: investing keyword is checked before the type rule.
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.classify(AccountType::Liability, "Investasi"),
            CashFlowSectionKind::Investing
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = KeywordClassifier::new(
            vec!["INVEST".to_string()],
            vec!["Financing".to_string()],
        );
        assert_eq!(
            classifier.classify(AccountType::Expense, "beli investasi"),
            CashFlowSectionKind::Investing
        );
        assert_eq!(
            classifier.classify(AccountType::Income, "FINANCING inflow"),
            CashFlowSectionKind::Financing
        );
    }
}
