use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FillPolicy
///
/// What a column contributes once its sequence is exhausted.
/// Chosen per column at construction and never changed afterwards.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy<T, E> {
    /// End the whole combinator.
    Stop,

    /// Repeat this column's value from the preceding row.
    Previous,

    /// Substitute a fixed value.
    Constant(T),

    /// Fail the row request with this error, on every step after exhaustion.
    Raise(E),
}

impl<T, E> FillPolicy<T, E> {
    /// One `Stop` policy per column; the truncate-at-shortest `zip`.
    #[must_use]
    pub fn all_stop(columns: usize) -> Vec<Self> {
        std::iter::repeat_with(|| Self::Stop).take(columns).collect()
    }

    #[must_use]
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Stop => PolicyKind::Stop,
            Self::Previous => PolicyKind::Previous,
            Self::Constant(_) => PolicyKind::Constant,
            Self::Raise(_) => PolicyKind::Raise,
        }
    }

    #[must_use]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl<T, E> Default for FillPolicy<T, E> {
    fn default() -> Self {
        Self::Stop
    }
}

///
/// PolicyKind
///
/// Payload-free discriminant of a `FillPolicy`, used in trace output.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Stop,
    Previous,
    Constant,
    Raise,
}

impl PolicyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Previous => "previous",
            Self::Constant => "constant",
            Self::Raise => "raise",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that exactly one policy was supplied per column.
pub const fn validate_policies<T, E>(
    columns: usize,
    policies: &[FillPolicy<T, E>],
) -> Result<(), ConfigError> {
    if policies.len() != columns {
        return Err(ConfigError::policy_count(columns, policies.len()));
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    type Policy = FillPolicy<i64, &'static str>;

    #[test]
    fn all_stop_matches_column_count() {
        let policies = Policy::all_stop(3);
        assert_eq!(policies.len(), 3);
        assert!(policies.iter().all(FillPolicy::is_stop));
        assert!(Policy::all_stop(0).is_empty());
    }

    #[test]
    fn validate_rejects_count_mismatch() {
        let policies = vec![Policy::Previous, Policy::Stop];

        assert_eq!(validate_policies(2, &policies), Ok(()));
        assert_eq!(
            validate_policies(3, &policies),
            Err(ConfigError::PolicyCountMismatch {
                columns: 3,
                policies: 2
            })
        );
    }

    #[test]
    fn kind_drops_payload() {
        assert_eq!(Policy::Constant(9).kind(), PolicyKind::Constant);
        assert_eq!(Policy::Raise("oh no").kind(), PolicyKind::Raise);
        assert_eq!(Policy::default().kind(), PolicyKind::Stop);
        assert_eq!(PolicyKind::Previous.to_string(), "previous");
    }

    #[test]
    fn policies_deserialize_from_snake_case() {
        let policies: Vec<FillPolicy<i64, String>> =
            serde_json::from_str(r#"["stop", "previous", {"constant": 5}, {"raise": "boom"}]"#)
                .expect("policies should deserialize");

        assert_eq!(
            policies,
            vec![
                FillPolicy::Stop,
                FillPolicy::Previous,
                FillPolicy::Constant(5),
                FillPolicy::Raise("boom".to_string()),
            ]
        );
    }
}
