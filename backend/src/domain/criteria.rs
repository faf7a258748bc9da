//! Search criteria as ordered key/value constraint lists.
//!
//! The registry models filter maps as ordered entry lists rather than
//! associative maps, so construction preserves the order of whatever source
//! the pairs came from.

use serde::{Deserialize, Serialize};

/// One search constraint in an ordered list of pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionEntry {
    /// Constraint key as understood by the registry.
    pub key: String,
    /// Constraint value, passed through verbatim.
    pub value: String,
}

impl CriterionEntry {
    /// Create one entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Convert raw key/value pairs into entries, one per pair, in order.
    ///
    /// This is a structural conversion: no filtering, no trimming. Empty
    /// input yields an empty list, never an error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| Self::new(key, value))
            .collect()
    }
}

/// Optional person fields accepted by the advanced identity search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFields {
    /// Login name fragment.
    pub username: Option<String>,
    /// E-mail address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Organizational department.
    pub department: Option<String>,
}

impl SearchFields {
    /// Build the criterion list for these fields.
    ///
    /// Each field that is non-blank after trimming contributes exactly one
    /// entry under its wire key; blank or absent fields are omitted
    /// entirely. An all-blank set yields an empty list; requiring at least
    /// one criterion is the caller's policy, not this builder's.
    pub fn criteria(&self) -> Vec<CriterionEntry> {
        let fields = [
            ("username", &self.username),
            ("email", &self.email),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("department", &self.department),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| {
                let trimmed = value
                    .as_deref()
                    .map(str::trim)
                    .filter(|trimmed| !trimmed.is_empty())?;
                Some(CriterionEntry::new(key, trimmed))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    //! Entry construction and field-omission coverage.

    use rstest::rstest;

    use super::*;

    #[test]
    fn from_pairs_reproduces_every_pair_in_order() {
        let entries = CriterionEntry::from_pairs([("zip", "12345"), ("city", "Springfield")]);
        assert_eq!(
            entries,
            vec![
                CriterionEntry::new("zip", "12345"),
                CriterionEntry::new("city", "Springfield"),
            ]
        );
    }

    #[test]
    fn from_pairs_of_nothing_is_empty() {
        let entries = CriterionEntry::from_pairs(Vec::<(String, String)>::new());
        assert!(entries.is_empty());
    }

    #[test]
    fn from_pairs_does_not_trim_values() {
        let entries = CriterionEntry::from_pairs([("username", " jdoe ")]);
        assert_eq!(entries, vec![CriterionEntry::new("username", " jdoe ")]);
    }

    #[rstest]
    #[case::all_absent(SearchFields::default())]
    #[case::all_blank(SearchFields {
        username: Some(String::new()),
        email: Some("   ".to_owned()),
        first_name: Some(String::new()),
        last_name: None,
        department: Some(" ".to_owned()),
    })]
    fn criteria_of_blank_fields_is_empty(#[case] fields: SearchFields) {
        assert!(fields.criteria().is_empty());
    }

    #[test]
    fn one_populated_field_yields_one_trimmed_entry() {
        let fields = SearchFields {
            email: Some(" jdoe@example.org ".to_owned()),
            ..SearchFields::default()
        };
        assert_eq!(
            fields.criteria(),
            vec![CriterionEntry::new("email", "jdoe@example.org")]
        );
    }

    #[test]
    fn populated_fields_keep_their_declared_order() {
        let fields = SearchFields {
            username: Some("jdoe".to_owned()),
            email: None,
            first_name: Some("Jane".to_owned()),
            last_name: None,
            department: Some("IT".to_owned()),
        };
        let keys: Vec<String> = fields
            .criteria()
            .into_iter()
            .map(|entry| entry.key)
            .collect();
        assert_eq!(keys, vec!["username", "firstName", "department"]);
    }
}
