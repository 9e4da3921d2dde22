use crate::{
    error::ConfigError,
    policy::{FillPolicy, validate_policies},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// ZipConfig
///
/// Declarative combinator settings. `policies: None` means one `Stop` per
/// column; `debug` turns on `[debug]` state output.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ZipConfig<T = Value, E = String> {
    #[serde(default)]
    pub policies: Option<Vec<FillPolicy<T, E>>>,

    #[serde(default)]
    pub debug: bool,
}

impl<T, E> ZipConfig<T, E> {
    #[must_use]
    pub const fn new(policies: Vec<FillPolicy<T, E>>) -> Self {
        Self {
            policies: Some(policies),
            debug: false,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Resolve the policy list for `columns` columns, defaulting to all `Stop`.
    pub fn resolve_policies(&self, columns: usize) -> Result<Vec<FillPolicy<T, E>>, ConfigError>
    where
        T: Clone,
        E: Clone,
    {
        resolve_policies(columns, self.policies.clone())
    }
}

impl<T, E> Default for ZipConfig<T, E> {
    fn default() -> Self {
        Self {
            policies: None,
            debug: false,
        }
    }
}

// Shared by `combine` and `ZipConfig`: default to all-Stop, then validate.
pub(crate) fn resolve_policies<T, E>(
    columns: usize,
    policies: Option<Vec<FillPolicy<T, E>>>,
) -> Result<Vec<FillPolicy<T, E>>, ConfigError> {
    let policies = policies.unwrap_or_else(|| FillPolicy::all_stop(columns));
    validate_policies(columns, &policies)?;

    Ok(policies)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_defaults_to_stop() {
        let config: ZipConfig = serde_json::from_str("{}").expect("config should parse");

        assert_eq!(config, ZipConfig::default());
        assert_eq!(
            config.resolve_policies(2),
            Ok(vec![FillPolicy::Stop, FillPolicy::Stop])
        );
    }

    #[test]
    fn config_loads_value_policies() {
        let config: ZipConfig = serde_json::from_str(
            r#"{
                "policies": ["previous", {"constant": {"text": "x"}}, {"constant": "null"}, {"raise": "Oh no!"}],
                "debug": true
            }"#,
        )
        .expect("config should parse");

        assert!(config.debug);
        assert_eq!(
            config.policies,
            Some(vec![
                FillPolicy::Previous,
                FillPolicy::Constant(Value::from("x")),
                FillPolicy::Constant(Value::Null),
                FillPolicy::Raise("Oh no!".to_string()),
            ])
        );
    }

    #[test]
    fn config_rejects_wrong_policy_count() {
        let config = ZipConfig::<Value, String>::new(vec![FillPolicy::Previous; 2]);

        assert_eq!(
            config.resolve_policies(3),
            Err(ConfigError::PolicyCountMismatch {
                columns: 3,
                policies: 2
            })
        );
    }
}
