//! Build `cars.json` from a folder of photos.
//!
//! File names carry the answer: `Toyota_Land-Cruiser_2019_4WD.JPG` becomes
//! make "Toyota", model "Land Cruiser". Parsing stops at the first year or
//! drivetrain/body token, so trim levels after the model name are dropped.
//!
//! ## Layout
//!
//! Photos are copied to `<dest>/images/cars/` and the manifest is written to
//! `<dest>/data/cars.json`, the paths the quiz page loads them from.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::Item,
};

/// Tokens that end the model name. Compared upper-cased.
const STOP_TOKENS: [&str; 14] = [
    "AWD", "FWD", "RWD", "4WD", "2WD", "4X4", "4X2", "4DR", "2DR", "CVT", "MT", "AT", "AUTO",
    "MANUAL",
];

const IMAGE_EXTENSION: &str = "JPG";
const IMAGE_URL_PREFIX: &str = "images/cars";

/// One photo and the make/model parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarRecord {
    #[serde(skip)]
    pub source_path: PathBuf,
    #[serde(rename = "imagePath")]
    pub image_path: String,
    pub make: String,
    pub model: String,
    pub label: String,
}

impl CarRecord {
    pub fn new(source_path: PathBuf, image_path: String, make: String, model: String) -> Self {
        let label = format!("{make} {model}").trim().to_string();
        CarRecord {
            source_path,
            image_path: image_path.replace('\\', "/"),
            make,
            model,
            label,
        }
    }
}

impl From<CarRecord> for Item {
    fn from(record: CarRecord) -> Self {
        Item {
            label: record.label,
            category: record.make,
            image_path: record.image_path,
            model: Some(record.model),
        }
    }
}

/// Options for [`build_manifest`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Folder holding the `*.JPG` photos.
    pub source: PathBuf,
    /// Web root that receives `images/cars/` and `data/cars.json`.
    pub dest: PathBuf,
    pub limit: Option<usize>,
    /// Parse only; copy and write nothing.
    pub dry_run: bool,
    /// Write the manifest without copying photos.
    pub skip_copy: bool,
}

impl BuildOptions {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        BuildOptions {
            source: source.into(),
            dest: dest.into(),
            limit: None,
            dry_run: false,
            skip_copy: false,
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.dest.join("images").join("cars")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dest.join("data").join("cars.json")
    }
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub records: Vec<CarRecord>,
    pub images_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub dry_run: bool,
}

/// Tidy one file-name token: hyphens and pluses become spaces, short
/// all-caps tokens ("BMW", "GT") stay as they are, anything else is
/// capitalized word by word.
pub fn normalise_token(token: &str) -> String {
    let cleaned = token.replace(['-', '+'], " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return String::new();
    }
    if is_upper(cleaned) && cleaned.chars().count() <= 3 {
        return cleaned.to_string();
    }
    cleaned.split_whitespace().map(capitalize).collect::<Vec<_>>().join(" ")
}

/// At least one cased character and no lowercase ones.
fn is_upper(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

fn is_stop_token(token: &str) -> bool {
    let upper = token.to_uppercase();
    STOP_TOKENS.contains(&upper.as_str())
}

/// Split a file stem like `Kia_Ceed_GT_2020_AT` into `("Kia", "Ceed GT")`.
pub fn parse_make_model(stem: &str) -> Result<(String, String)> {
    let invalid = |reason: &str| QuizError::InvalidFileName {
        name: stem.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = stem.split('_').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return Err(invalid("expected at least make and model"));
    }

    let make = normalise_token(parts[0]);
    if make.is_empty() {
        return Err(invalid("empty make token"));
    }

    let mut model_tokens: Vec<&str> = parts[1..]
        .iter()
        .take_while(|token| !is_year(token) && !is_stop_token(token))
        .copied()
        .collect();
    if model_tokens.is_empty() {
        model_tokens.push(parts[1]);
    }

    let joined = model_tokens.iter().map(|t| normalise_token(t)).collect::<Vec<_>>().join(" ");
    let model = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    if model.is_empty() {
        return Err(invalid("could not parse a model name"));
    }

    Ok((make, model))
}

/// Collect `*.JPG` photos in `source_dir` (sorted, optionally limited) and
/// parse their names. Unparseable names are skipped with a warning.
pub fn gather_records(source_dir: &Path, limit: Option<usize>) -> Result<Vec<CarRecord>> {
    let mut files: Vec<PathBuf> = fs::read_dir(source_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(IMAGE_EXTENSION)
        })
        .collect();
    files.sort();
    if let Some(n) = limit.filter(|n| *n > 0) {
        files.truncate(n);
    }

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        let (Some(stem), Some(file_name)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.file_name().and_then(|s| s.to_str()),
        ) else {
            warn!("skipping non UTF-8 file name {}", path.display());
            continue;
        };
        match parse_make_model(stem) {
            Ok((make, model)) => {
                let image_path = format!("{IMAGE_URL_PREFIX}/{file_name}");
                records.push(CarRecord::new(path.clone(), image_path, make, model));
            }
            Err(e) => warn!("skipping {file_name}: {e}"),
        }
    }
    Ok(records)
}

/// Copy each record's photo into `dest_dir` under its own file name.
pub fn copy_assets(records: &[CarRecord], dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)?;
    for record in records {
        if let Some(name) = record.source_path.file_name() {
            fs::copy(&record.source_path, dest_dir.join(name))?;
        }
    }
    Ok(())
}

/// Write `records` as a pretty-printed JSON array, creating parent folders.
pub fn write_manifest(records: &[CarRecord], manifest_path: &Path) -> Result<()> {
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(manifest_path, json)?;
    Ok(())
}

/// Parse the photos under `options.source`, copy them and write the
/// manifest, honouring `dry_run` and `skip_copy`.
pub fn build_manifest(options: &BuildOptions) -> Result<BuildReport> {
    if !options.source.is_dir() {
        return Err(QuizError::SourceNotFound(options.source.clone()));
    }

    let records = gather_records(&options.source, options.limit)?;
    if records.is_empty() {
        warn!("no valid {IMAGE_EXTENSION} files found in {}", options.source.display());
    }

    let report = BuildReport {
        records,
        images_dir: options.images_dir(),
        manifest_path: options.manifest_path(),
        dry_run: options.dry_run,
    };
    if options.dry_run {
        return Ok(report);
    }

    fs::create_dir_all(&report.images_dir)?;
    if !options.skip_copy {
        copy_assets(&report.records, &report.images_dir)?;
        info!("copied {} images to {}", report.records.len(), report.images_dir.display());
    }
    write_manifest(&report.records, &report.manifest_path)?;
    info!(
        "wrote manifest with {} entries to {}",
        report.records.len(),
        report.manifest_path.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::manifest::load_manifest;

    #[test]
    fn tokens_are_capitalized_unless_short_caps() {
        assert_eq!(normalise_token("land-cruiser"), "Land Cruiser");
        assert_eq!(normalise_token("BMW"), "BMW");
        assert_eq!(normalise_token("X5"), "X5");
        assert_eq!(normalise_token("MERCEDES"), "Mercedes");
        assert_eq!(normalise_token("c+class"), "C Class");
        assert_eq!(normalise_token("--"), "");
        assert_eq!(normalise_token("500"), "500");
    }

    #[test]
    fn parse_stops_at_year_and_stop_tokens() {
        assert_eq!(
            parse_make_model("toyota_land-cruiser_2019_4wd").unwrap(),
            ("Toyota".to_string(), "Land Cruiser".to_string())
        );
        assert_eq!(
            parse_make_model("Kia_Ceed_GT_awd").unwrap(),
            ("Kia".to_string(), "Ceed GT".to_string())
        );
        assert_eq!(
            parse_make_model("__BMW__X5__").unwrap(),
            ("BMW".to_string(), "X5".to_string())
        );
    }

    #[test]
    fn parse_keeps_second_part_when_it_is_a_year() {
        assert_eq!(
            parse_make_model("Fiat_2019_Panda").unwrap(),
            ("Fiat".to_string(), "2019".to_string())
        );
    }

    #[test]
    fn parse_rejects_single_part_and_empty_tokens() {
        assert!(matches!(
            parse_make_model("Porsche"),
            Err(QuizError::InvalidFileName { .. })
        ));
        assert!(parse_make_model("-_Golf").is_err());
        assert!(parse_make_model("VW_-").is_err());
    }

    #[test]
    fn record_label_joins_make_and_model() {
        let record = CarRecord::new(
            PathBuf::from("a.JPG"),
            "images\\cars\\a.JPG".to_string(),
            "Kia".to_string(),
            "Rio".to_string(),
        );
        assert_eq!(record.label, "Kia Rio");
        assert_eq!(record.image_path, "images/cars/a.JPG");
    }

    fn photo_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "Toyota_Corolla_2018.JPG",
            "Audi_A3_2020_AT.JPG",
            "Broken.JPG",
            "Kia_Rio_2019.jpg",
            "notes.txt",
        ] {
            fs::write(dir.path().join(name), b"img").unwrap();
        }
        dir
    }

    #[test]
    fn gather_keeps_sorted_parseable_jpgs() {
        let dir = photo_dir();
        let records = gather_records(dir.path(), None).unwrap();
        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Audi A3", "Toyota Corolla"]);
        assert_eq!(records[0].image_path, "images/cars/Audi_A3_2020_AT.JPG");

        let limited = gather_records(dir.path(), Some(1)).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn build_copies_photos_and_writes_loadable_manifest() {
        let src = photo_dir();
        let dest = tempfile::tempdir().unwrap();
        let options = BuildOptions::new(src.path(), dest.path());
        let report = build_manifest(&options).unwrap();

        assert_eq!(report.records.len(), 2);
        assert!(dest.path().join("images/cars/Toyota_Corolla_2018.JPG").is_file());

        let items = load_manifest(&report.manifest_path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].label, "Toyota Corolla");
        assert_eq!(items[1].category, "Toyota");
        assert_eq!(items[1].model.as_deref(), Some("Corolla"));

        let converted: Vec<Item> = report.records.into_iter().map(Item::from).collect();
        assert_eq!(converted, items);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let src = photo_dir();
        let dest = tempfile::tempdir().unwrap();
        let options = BuildOptions { dry_run: true, ..BuildOptions::new(src.path(), dest.path()) };
        let report = build_manifest(&options).unwrap();
        assert_eq!(report.records.len(), 2);
        assert!(!report.manifest_path.exists());
        assert!(!report.images_dir.exists());
    }

    #[test]
    fn skip_copy_writes_manifest_and_empty_image_folder() {
        let src = photo_dir();
        let dest = tempfile::tempdir().unwrap();
        let options = BuildOptions { skip_copy: true, ..BuildOptions::new(src.path(), dest.path()) };
        let report = build_manifest(&options).unwrap();
        assert!(report.manifest_path.is_file());
        assert!(report.images_dir.is_dir(), "image folder is created even without copying");
        assert_eq!(fs::read_dir(&report.images_dir).unwrap().count(), 0);
    }

    #[test]
    fn missing_source_is_reported() {
        let dest = tempfile::tempdir().unwrap();
        let options = BuildOptions::new(dest.path().join("missing"), dest.path());
        assert!(matches!(build_manifest(&options), Err(QuizError::SourceNotFound(_))));
    }
}
