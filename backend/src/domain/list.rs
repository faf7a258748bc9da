//! Multi-valued results with absent-as-empty semantics.

use serde::{Deserialize, Serialize};

/// Possibly-empty sequence of strings returned by the registry for
/// multi-valued results.
///
/// The wire representation may omit the underlying sequence entirely; that
/// is treated as logically empty rather than as an error, so callers never
/// special-case a missing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringList {
    /// Underlying values; `None` and `Some(vec![])` are equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl StringList {
    /// Wrap a concrete sequence.
    pub fn from_values(values: Vec<String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Flatten to a plain ordered sequence; an absent underlying sequence is
    /// empty.
    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone().unwrap_or_default()
    }

    /// Whether at least one value is present.
    pub fn has_values(&self) -> bool {
        self.values.as_ref().is_some_and(|values| !values.is_empty())
    }

    /// Number of values; absent counts as zero.
    pub fn count(&self) -> usize {
        self.values.as_ref().map_or(0, Vec::len)
    }
}

/// Flatten an optional list; absent is an empty sequence.
pub fn to_sequence(list: Option<&StringList>) -> Vec<String> {
    list.map(StringList::to_vec).unwrap_or_default()
}

/// Whether an optional list holds at least one value.
pub fn has_values(list: Option<&StringList>) -> bool {
    list.is_some_and(StringList::has_values)
}

/// Number of values in an optional list.
pub fn count(list: Option<&StringList>) -> usize {
    list.map_or(0, StringList::count)
}
