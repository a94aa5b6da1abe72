//! Catalogue loading
//!
//! A catalogue document holds the type table, the matchup chart and the
//! creature list. Files are read as JSON5, so plain JSON works too and
//! hand-edited catalogues may carry comments and trailing commas. A
//! directory of catalogue files is merged in path order.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use thiserror::Error;

use crate::models::Catalogue;

/// Error type for catalogue loading failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogueError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Document is not valid JSON5 or does not match the catalogue shape
    #[error("{origin}: {message}")]
    Parse { origin: String, message: String },
    /// A directory contained no catalogue files
    #[error("no catalogue files found in {0}")]
    Empty(PathBuf),
}

/// Check if a path has a catalogue file extension (.json or .json5).
pub fn is_catalogue_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("json") | Some("json5"))
}

/// Find all catalogue files in a directory (recursively), sorted by path.
pub fn find_catalogue_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let dir_str = dir.display().to_string();

    for ext in ["json", "json5"] {
        if let Ok(paths) = glob(&format!("{}/**/*.{}", dir_str, ext)) {
            files.extend(paths.filter_map(Result::ok));
        }
    }

    files.sort();
    files
}

/// Parse a catalogue from a string. `origin` names the source in errors.
pub fn parse_catalogue(source: &str, origin: &str) -> Result<Catalogue, CatalogueError> {
    json5::from_str(source)
        .map_err(|e| CatalogueError::Parse { origin: origin.to_string(), message: e.to_string() })
}

/// Load a catalogue from a file, or merge every catalogue file under a
/// directory.
pub fn load_catalogue(path: &Path) -> Result<Catalogue, CatalogueError> {
    if path.is_dir() {
        let files = find_catalogue_files(path);
        if files.is_empty() {
            return Err(CatalogueError::Empty(path.to_path_buf()));
        }
        let mut merged = Catalogue::default();
        for file in &files {
            merge(&mut merged, load_file(file)?);
        }
        log::debug!("merged {} catalogue files from {}", files.len(), path.display());
        return Ok(merged);
    }

    load_file(path)
}

fn load_file(path: &Path) -> Result<Catalogue, CatalogueError> {
    let source = fs::read_to_string(path)
        .map_err(|source| CatalogueError::Io { path: path.to_path_buf(), source })?;
    let catalogue = parse_catalogue(&source, &path.display().to_string())?;
    log::debug!(
        "loaded {} creatures and {} types from {}",
        catalogue.creatures.len(),
        catalogue.types.0.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Fold `other` into `into`. Later type records and chart entries win;
/// creatures are appended, and a repeated id replaces the earlier record.
fn merge(into: &mut Catalogue, other: Catalogue) {
    into.types.0.extend(other.types.0);
    for (attacker, row) in other.type_chart.0 {
        into.type_chart.0.entry(attacker).or_default().extend(row);
    }
    for creature in other.creatures {
        if let Some(existing) = into.creatures.iter_mut().find(|c| c.id == creature.id) {
            log::warn!("duplicate creature id '{}', using latest", creature.id);
            *existing = creature;
        } else {
            into.creatures.push(creature);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FIRE: &str = r##"{
        // comments are fine
        types: { fire: { name: "Fire", color: "#f08030" } },
        typeChart: { fire: { steel: 2 } },
        creatures: [ { id: "004", name: "Factorch", types: ["fire"], visual: { body: "round", features: ["tail"] } }, ],
    }"##;

    const WATER: &str = r##"{
        "types": { "water": { "name": "Water", "color": "#6890f0" } },
        "creatures": [
            { "id": "007", "name": "Observurtle", "types": ["water"] },
            { "id": "004", "name": "Factorch II", "types": ["fire", "water"] }
        ]
    }"##;

    #[test]
    fn test_parse_json5() {
        let cat = parse_catalogue(FIRE, "inline").unwrap();
        assert_eq!(cat.creatures.len(), 1);
        assert_eq!(cat.types.color_of("fire").to_string(), "#f08030");
    }

    #[test]
    fn test_null_features_keep_catalogue() {
        let cat = parse_catalogue(
            r#"{ creatures: [ { id: "001", visual: { body: "round", features: null } }, { id: "002" } ] }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(cat.creatures.len(), 2);
        let visual = cat.creature("001").unwrap().visual.as_ref().unwrap();
        assert!(visual.features.is_empty());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_catalogue("{ creatures: [ }", "broken.json").unwrap_err();
        assert!(err.to_string().starts_with("broken.json:"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalogue(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogueError::Io { .. }));
    }

    #[test]
    fn test_directory_merge() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json5"), FIRE).unwrap();
        fs::write(dir.path().join("b.json"), WATER).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let cat = load_catalogue(dir.path()).unwrap();
        let ids: Vec<&str> = cat.creatures.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["004", "007"]);
        assert_eq!(cat.creature("004").unwrap().name, "Factorch II");
        assert_eq!(cat.type_chart.effectiveness("fire", "steel"), 2.0);
        assert!(cat.types.get("water").is_some());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(load_catalogue(dir.path()), Err(CatalogueError::Empty(_))));
    }

    #[test]
    fn test_is_catalogue_file() {
        assert!(is_catalogue_file(Path::new("data/catalogue.json")));
        assert!(is_catalogue_file(Path::new("extra.json5")));
        assert!(!is_catalogue_file(Path::new("patterndex.toml")));
    }
}
