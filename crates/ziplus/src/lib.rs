//! ziplus: a `zip` over any number of columns that keeps producing rows
//! after some columns run dry, filling each exhausted column according to
//! its own [`FillPolicy`].
//!
//! ## Crate layout
//! - `zip`: the row combinator and its construction API.
//! - `column`: column cursors and per-column exhaustion state.
//! - `policy`: fill policies and policy validation.
//! - `row`: the row type yielded by the combinator.
//! - `value`: a dynamic `Value` for heterogeneous columns.
//! - `trace`: opt-in diagnostic events.
//! - `config`: serde-loadable combinator configuration.
//! - `error`: construction errors.
#![warn(unreachable_pub)]

pub mod column;
pub mod config;
pub mod error;
pub mod policy;
pub mod row;
pub mod trace;
pub mod value;
pub mod zip;

// re-exports
pub use column::{Column, ColumnState};
pub use config::ZipConfig;
pub use error::ConfigError;
pub use policy::{FillPolicy, PolicyKind, validate_policies};
pub use row::Row;
pub use trace::{ZipTraceEvent, ZipTraceSink};
pub use value::{FillValue, Value};
pub use zip::{ZipPlus, combine};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains only the vocabulary needed to build and drain a combinator.
///

pub mod prelude {
    pub use crate::{
        column::Column,
        policy::FillPolicy,
        row::Row,
        value::Value,
        zip::{ZipPlus, combine},
    };
}
