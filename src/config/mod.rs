//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: which tokens it
//! pairs, what it charges, and how its LP share token is named.  It can be
//! built in code or loaded from a TOML file.

mod pool_config;

pub use pool_config::{PoolConfig, DEFAULT_LP_NAME, DEFAULT_LP_SYMBOL};
