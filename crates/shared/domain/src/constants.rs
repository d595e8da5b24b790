//! Stable names used on the command line, in configuration and in logs.

pub const ABSTRACT_FACTORY: &str = "abstract-factory";
pub const FACTORY_METHOD: &str = "factory-method";
pub const BUILDER: &str = "builder";
pub const ALL: &str = "all";

/// Prefix for environment overrides, e.g. `FOUNDRY__FACTORY_METHOD__TAG=serum`.
pub const ENV_PREFIX: &str = "FOUNDRY";

/// Configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "foundry";
