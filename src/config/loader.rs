//! Configuration loading and discovery for `patterndex.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{PatterndexConfig, ProjectConfig, RadarConfig, RenderConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery.
pub const CONFIG_FILE: &str = "patterndex.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse patterndex.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override catalogue location
    pub catalogue: Option<PathBuf>,
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override PNG output
    pub png: Option<bool>,
    /// Override SVG output
    pub svg: Option<bool>,
    /// Override PNG scale factor
    pub scale: Option<u32>,
}

/// Find patterndex.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for patterndex.toml
/// 2. Check XDG_CONFIG_HOME/patterndex/patterndex.toml (or ~/.config/patterndex/patterndex.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find patterndex.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("patterndex").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find patterndex.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file, returning defaults when none exists. Relative
/// paths in a loaded file are resolved against the file's directory.
pub fn load_config(path: Option<&Path>) -> Result<PatterndexConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            let mut config = load_config_file(&p)?;
            if let Some(root) = project_root(&p) {
                config.project.catalogue = resolve_path(root, &config.project.catalogue);
                config.project.out = resolve_path(root, &config.project.out);
            }
            Ok(config)
        }
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<PatterndexConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PatterndexConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no patterndex.toml is found.
///
/// The project name is the current directory name.
pub fn default_config() -> PatterndexConfig {
    let project_name = env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "patterndex".to_string());

    PatterndexConfig {
        project: ProjectConfig {
            name: project_name,
            catalogue: PathBuf::from("data/catalogue.json"),
            out: PathBuf::from("build"),
        },
        render: RenderConfig::default(),
        radar: RadarConfig::default(),
    }
}

/// Merge CLI overrides into a configuration, then re-validate.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(
    config: &mut PatterndexConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(ref catalogue) = overrides.catalogue {
        config.project.catalogue = catalogue.clone();
    }
    if let Some(ref out) = overrides.out {
        config.project.out = out.clone();
    }
    if let Some(png) = overrides.png {
        config.render.png = png;
    }
    if let Some(svg) = overrides.svg {
        config.render.svg = svg;
    }
    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }

    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, contents).expect("should write config content");
        path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[project]\nname = \"test\"");

        assert_eq!(find_config_from(temp.path().to_path_buf()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[project]\nname = \"test\"");

        let subdir = temp.path().join("data").join("extra");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        assert_eq!(find_config_from(subdir), Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        assert_eq!(find_config_from(temp.path().to_path_buf()), None);
    }

    #[test]
    #[serial]
    fn test_find_xdg_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let dir = temp.path().join("patterndex");
        fs::create_dir_all(&dir).expect("should create xdg dir");
        let config_path = write_config(&dir, "[project]\nname = \"global\"");

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_resolves_relative_paths() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r#"
[project]
name = "dex"
catalogue = "creatures.json"
out = "/tmp/dex-out"

[render]
png = true
scale = 4
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.project.name, "dex");
        assert_eq!(config.project.catalogue, temp.path().join("creatures.json"));
        assert_eq!(config.project.out, PathBuf::from("/tmp/dex-out"));
        assert!(config.render.png);
        assert_eq!(config.render.scale, 4);
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[project]\nname = \"\"\n\n[render]\nscale = 0\n");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert!(!config.project.name.is_empty());
        assert_eq!(config.project.catalogue, PathBuf::from("data/catalogue.json"));
        assert_eq!(config.project.out, PathBuf::from("build"));
        assert!(config.render.svg && config.render.radar && !config.render.png);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = default_config();
        let overrides = CliOverrides {
            catalogue: Some(PathBuf::from("dex.json5")),
            out: Some(PathBuf::from("dist")),
            png: Some(true),
            svg: Some(false),
            scale: Some(8),
        };

        merge_cli_overrides(&mut config, &overrides).expect("overrides are valid");
        assert_eq!(config.project.catalogue, PathBuf::from("dex.json5"));
        assert_eq!(config.project.out, PathBuf::from("dist"));
        assert!(config.render.png);
        assert!(!config.render.svg);
        assert_eq!(config.render.scale, 8);
    }

    #[test]
    fn test_merge_cli_overrides_revalidates() {
        let mut config = default_config();
        let overrides = CliOverrides { scale: Some(200), ..Default::default() };

        let result = merge_cli_overrides(&mut config, &overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/project");
        assert_eq!(resolve_path(root, Path::new("/other/path")), PathBuf::from("/other/path"));
        assert_eq!(resolve_path(root, Path::new("data/c.json")), PathBuf::from("/project/data/c.json"));
    }

    #[test]
    fn test_project_root() {
        assert_eq!(project_root(Path::new("/project/patterndex.toml")), Some(Path::new("/project")));
    }
}
