//! Closed classification of office kinds.

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// Office classification accepted by the registry.
///
/// Membership is a fixed, closed set. Labels are matched case-sensitively
/// and never normalized; anything outside the set is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficeCategory {
    /// `FSA` offices.
    #[serde(rename = "FSA")]
    Fsa,
    /// `FLP` offices.
    #[serde(rename = "FLP")]
    Flp,
    /// `FLPFinance` offices.
    #[serde(rename = "FLPFinance")]
    FlpFinance,
    /// `FLPJurisdiction` offices.
    #[serde(rename = "FLPJurisdiction")]
    FlpJurisdiction,
}

impl OfficeCategory {
    /// Every category in canonical display order.
    pub const ALL: [Self; 4] = [Self::Fsa, Self::Flp, Self::FlpFinance, Self::FlpJurisdiction];

    /// Wire label for this category.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fsa => "FSA",
            Self::Flp => "FLP",
            Self::FlpFinance => "FLPFinance",
            Self::FlpJurisdiction => "FLPJurisdiction",
        }
    }

    /// Parse one label, case-sensitively. Unknown labels yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label() == value)
    }

    /// Parse a sequence of labels, preserving input order.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown label with
    /// [`ValidationError::InvalidOfficeCategory`]; no partial result is
    /// returned.
    pub fn parse_all<I, S>(values: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .map(|value| {
                let value = value.as_ref();
                Self::parse(value).ok_or_else(|| ValidationError::InvalidOfficeCategory {
                    value: value.to_owned(),
                })
            })
            .collect()
    }
}

impl std::fmt::Display for OfficeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    //! Label matching and batch parsing coverage.

    use rstest::rstest;

    use super::*;
    use crate::domain::error::ValidationError;

    #[rstest]
    #[case::fsa("FSA", Some(OfficeCategory::Fsa))]
    #[case::flp("FLP", Some(OfficeCategory::Flp))]
    #[case::flp_finance("FLPFinance", Some(OfficeCategory::FlpFinance))]
    #[case::flp_jurisdiction("FLPJurisdiction", Some(OfficeCategory::FlpJurisdiction))]
    #[case::lowercase_is_rejected("fsa", None)]
    #[case::padded_is_rejected(" FSA", None)]
    #[case::unknown("Regional", None)]
    fn parse_is_exact_and_case_sensitive(
        #[case] label: &str,
        #[case] expected: Option<OfficeCategory>,
    ) {
        assert_eq!(OfficeCategory::parse(label), expected);
    }

    #[test]
    fn parse_all_preserves_input_order() {
        let categories =
            OfficeCategory::parse_all(["FLP", "FSA"]).expect("both labels are valid");
        assert_eq!(categories, vec![OfficeCategory::Flp, OfficeCategory::Fsa]);
    }

    #[test]
    fn parse_all_fails_on_the_first_unknown_label() {
        let err = OfficeCategory::parse_all(["FSA", "bogus"]).expect_err("bogus must fail");
        assert_eq!(
            err,
            ValidationError::InvalidOfficeCategory {
                value: "bogus".to_owned()
            }
        );
    }

    #[test]
    fn canonical_order_matches_the_published_catalog() {
        let labels: Vec<&str> = OfficeCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["FSA", "FLP", "FLPFinance", "FLPJurisdiction"]);
    }

    #[test]
    fn serializes_as_the_wire_label() {
        let json = serde_json::to_value(OfficeCategory::FlpFinance).expect("serializable");
        assert_eq!(json, serde_json::json!("FLPFinance"));
    }
}
