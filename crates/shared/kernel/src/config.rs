use crate::error::{ShowcaseError, ShowcaseErrorExt};
use config::{Config, Environment, File};
use foundry_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads configuration from an optional file overlaid with `FOUNDRY__` environment variables.
///
/// Layering:
/// 1. **File**: `path` when given (then it must exist), otherwise `foundry.{toml,json,yaml,..}`
///    in the working directory if one is present.
/// 2. **Environment**: variables prefixed with `FOUNDRY__`, nested with `__`
///    (`FOUNDRY__FACTORY_METHOD__TAG=serum` maps to `factory_method.tag`).
///    `FOUNDRY__PATTERNS` accepts a comma separated list.
///
/// Fields missing from every source keep the `Default` of `T`, provided `T` uses
/// `#[serde(default)]`.
///
/// # Errors
/// Returns [`ShowcaseError::Config`] when an explicit file is missing, a source is
/// malformed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use foundry_kernel::config::load_config;
/// use foundry_kernel::domain::config::ShowcaseConfig;
///
/// let cfg: ShowcaseConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ShowcaseError>
where
    T: DeserializeOwned,
{
    load_with_environment(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("patterns")
}

fn load_with_environment<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ShowcaseError>
where
    T: DeserializeOwned,
{
    let (file, required) = match path {
        Some(p) => (p.as_ref().to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if required {
        info!("Loading config from {}", file.display());
    } else {
        debug!("Looking for optional config {}", file.display());
    }

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry_domain::config::ShowcaseConfig;
    use foundry_domain::patterns::PatternSet;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg: ShowcaseConfig =
            load_with_environment(None::<&str>, env(&[])).expect("defaults should load");

        assert_eq!(cfg.factory_method.tag, "lip");
        assert_eq!(cfg.abstract_factory.family, "one");
        assert_eq!(cfg.pattern_set(), PatternSet::ALL);
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");

        let err = load_with_environment::<ShowcaseConfig>(Some(&missing), env(&[]))
            .expect_err("explicit file is required");

        assert!(matches!(err, ShowcaseError::Config { context: Some(_), .. }));
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("foundry.toml");
        fs::write(
            &path,
            "patterns = [\"builder\"]\n\n[abstract_factory]\nfamily = \"two\"\nlhs = 40\n",
        )
        .expect("write config");

        let cfg: ShowcaseConfig =
            load_with_environment(Some(&path), env(&[])).expect("file should load");

        assert_eq!(cfg.abstract_factory.family, "two");
        assert_eq!(cfg.abstract_factory.lhs, 40);
        assert_eq!(cfg.abstract_factory.rhs, 2);
        assert_eq!(cfg.pattern_set(), PatternSet::BUILDER);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("foundry.toml");
        fs::write(&path, "[factory_method]\ntag = \"lip\"\n").expect("write config");

        let cfg: ShowcaseConfig = load_with_environment(
            Some(&path),
            env(&[
                ("FOUNDRY__FACTORY_METHOD__TAG", "serum"),
                ("FOUNDRY__FACTORY_METHOD__STRICT", "true"),
                ("FOUNDRY__PATTERNS", "builder,factory-method"),
            ]),
        )
        .expect("env should merge");

        assert_eq!(cfg.factory_method.tag, "serum");
        assert!(cfg.factory_method.strict);
        assert_eq!(cfg.pattern_set(), PatternSet::BUILDER | PatternSet::FACTORY_METHOD);
    }

    #[test]
    fn numeric_names_from_environment_stay_names() {
        let cfg: ShowcaseConfig = load_with_environment(
            None::<&str>,
            env(&[
                ("FOUNDRY__ABSTRACT_FACTORY__FAMILY", "2"),
                ("FOUNDRY__ABSTRACT_FACTORY__LHS", "-7"),
                ("FOUNDRY__FACTORY_METHOD__TAG", "42"),
            ]),
        )
        .expect("numeric names should load");

        assert_eq!(cfg.abstract_factory.family, "2");
        assert_eq!(cfg.abstract_factory.lhs, -7);
        assert_eq!(cfg.factory_method.tag, "42");
    }
}
