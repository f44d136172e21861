//! Loading the `cars.json` manifest.
//!
//! The manifest is a JSON array of `{ imagePath, make, model, label }`
//! objects. Entries missing any of `imagePath`, `make` or `label` (or holding
//! a non-string there) are dropped rather than failing the whole load.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::Item,
    settings::QuizSettings,
};

/// Read and validate a manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let items = parse_manifest(&raw)?;
    info!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse manifest text. A document that is valid JSON but not an array
/// yields an empty pool.
pub fn parse_manifest(raw: &str) -> Result<Vec<Item>> {
    let data: Value = serde_json::from_str(raw)?;
    let Value::Array(entries) = data else {
        warn!("manifest is not a JSON array; using an empty pool");
        return Ok(Vec::new());
    };

    let total = entries.len();
    let items: Vec<Item> = entries
        .into_iter()
        .filter(is_valid_entry)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if items.len() < total {
        warn!("skipped {} invalid manifest entries", total - items.len());
    }
    Ok(items)
}

fn is_valid_entry(entry: &Value) -> bool {
    ["imagePath", "label", "make"]
        .iter()
        .all(|key| entry.get(key).map_or(false, Value::is_string))
}

/// Check that `pool` can fill at least one full choice set.
pub fn ensure_playable(pool: &[Item], settings: &QuizSettings) -> Result<()> {
    if pool.len() < settings.choices_per_question {
        return Err(QuizError::InsufficientItems {
            available: pool.len(),
            required: settings.choices_per_question,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn invalid_entries_are_dropped() {
        let raw = r#"[
            {"imagePath": "images/cars/a.JPG", "make": "Kia", "model": "Rio", "label": "Kia Rio"},
            {"imagePath": "images/cars/b.JPG", "make": "Kia", "label": 42},
            {"make": "Audi", "label": "Audi A3"},
            "not an object",
            {"imagePath": "images/cars/c.JPG", "make": "Audi", "label": "Audi A3", "model": null}
        ]"#;
        let items = parse_manifest(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Kia Rio");
        assert_eq!(items[1].model, None);
    }

    #[test]
    fn non_array_document_is_an_empty_pool() {
        assert!(parse_manifest(r#"{"cars": []}"#).unwrap().is_empty());
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(matches!(parse_manifest("[{"), Err(QuizError::Json(_))));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"imagePath":"x.JPG","make":"Mini","label":"Mini Cooper"}}]"#).unwrap();
        let items = load_manifest(file.path()).unwrap();
        assert_eq!(items, vec![Item::new("Mini Cooper", "Mini", "x.JPG")]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
    }

    #[test]
    fn playable_needs_a_full_choice_set() {
        let settings = QuizSettings::default();
        let pool: Vec<Item> = (0..4).map(|n| Item::new(format!("Car {n}"), "X", "x.JPG")).collect();
        assert!(ensure_playable(&pool, &settings).is_err());
        let mut bigger = pool.clone();
        bigger.push(Item::new("Car 4", "X", "x.JPG"));
        assert!(ensure_playable(&bigger, &settings).is_ok());
    }
}
