use crate::error::{EvalError, Result};
use crate::types::config::EvalConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "evalscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".evalscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/evalscore/config.toml";

/// Loads `explicit` alone when given, otherwise merges the global, working
/// directory and local files. Missing files fall back to defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<EvalConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(EvalError::PathNotFound(path.display().to_string()));
        }
        let cfg = into_config(read_toml_value(path)?)?;
        cfg.validate()?;
        return Ok(cfg);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<EvalConfig> {
    let mut merged = Value::Table(Map::new());
    let mut sources = 0;
    if let Some(path) = global_path {
        sources += merge_file_if_exists(&mut merged, path)?;
    }
    sources += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    sources += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    tracing::debug!(sources, "configuration merged");

    let cfg = into_config(merged)?;
    cfg.validate()?;
    Ok(cfg)
}

fn into_config(value: Value) -> Result<EvalConfig> {
    value
        .try_into()
        .map_err(|e: toml::de::Error| EvalError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| EvalError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_PASSING_SCORE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.passing_score(), DEFAULT_PASSING_SCORE);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
passing_score = 50.0

[validation]
strict_weight_sum = true
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
passing_score = 65.0

[report]
format = "md"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".evalscore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
format = "json"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(global_path.as_path()))
            .expect("load should succeed");

        assert_eq!(cfg.passing_score(), 65.0);
        assert!(cfg.validation_policy().strict_weight_sum);
        assert_eq!(cfg.report_format(), Some("json"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config(dir.path(), Some(missing.as_path())).expect_err("missing config");
        assert!(matches!(err, EvalError::PathNotFound(_)));
    }

    #[test]
    fn invalid_merged_config_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[scoring]\npassing_score = -1.0\n",
        )
        .expect("config should write");
        let err = load_config_with_global(dir.path(), None).expect_err("out of range");
        assert!(matches!(err, EvalError::ConfigParse(_)));
    }
}
