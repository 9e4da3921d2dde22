use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Malformed construction arguments. Only ever returned while building a
/// combinator, never from row production.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("bad policy count: expected {columns} (one per column), found {policies}")]
    PolicyCountMismatch { columns: usize, policies: usize },
}

impl ConfigError {
    /// Construct a policy-count mismatch for `columns` columns.
    pub(crate) const fn policy_count(columns: usize, policies: usize) -> Self {
        Self::PolicyCountMismatch { columns, policies }
    }
}
