//! Loading item catalogs into a [`Dictionary`].
//!
//! A catalog is the list of item names the scanner can recognize. Three
//! file layouts are accepted, picked by extension:
//!
//! | Extension | Layout |
//! |-----------|--------|
//! | `.txt`, `.lst`, none | one name per line, `#` starts a comment |
//! | `.json` | array of names, or array of `{"name": ..., "id": ...}` objects |
//! | `.csv` | header row with a `name` or `displayName` column, optional `id` |
//!
//! Records carrying an `id` of zero or less are treated as placeholders and
//! skipped, as are empty names.
//!
//! # Example
//!
//! ```
//! use tradepack::catalog::{CatalogFormat, parse_catalog_str};
//!
//! let names = parse_catalog_str("# weapons\nWurmslayer\n\nSpear of Fate\n", CatalogFormat::Text)?;
//! assert_eq!(names, ["Wurmslayer", "Spear of Fate"]);
//! # Ok::<(), tradepack::TradepackError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dictionary::Dictionary;
use crate::error::{Result, TradepackError};

/// On-disk layout of an item catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// One name per line.
    #[default]
    #[serde(alias = "txt")]
    Text,

    /// JSON array of names or item records.
    Json,

    /// Comma-separated table with a header row.
    Csv,
}

impl CatalogFormat {
    /// Detects the layout from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => CatalogFormat::Json,
            Some("csv") => CatalogFormat::Csv,
            _ => CatalogFormat::Text,
        }
    }

    /// Returns all accepted names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }
}

impl std::fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFormat::Text => write!(f, "text"),
            CatalogFormat::Json => write!(f, "json"),
            CatalogFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for CatalogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(CatalogFormat::Text),
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            _ => Err(format!(
                "Unknown catalog format: '{}'. Expected one of: {}",
                s,
                CatalogFormat::all_names().join(", ")
            )),
        }
    }
}

/// Reads the item names of a catalog file.
///
/// # Errors
///
/// Returns [`TradepackError::Io`] if the file cannot be read and
/// [`TradepackError::InvalidFormat`] if its content doesn't fit the layout.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path);
    let content = fs::read_to_string(path)?;
    let names = parse_catalog_str(&content, format)?;
    info!(path = %path.display(), %format, names = names.len(), "loaded catalog");
    Ok(names)
}

/// Loads a catalog file into a ready [`Dictionary`].
///
/// # Errors
///
/// Same as [`load_catalog`], plus [`TradepackError::EmptyCatalog`] when the
/// file holds no usable name.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary> {
    let path = path.as_ref();
    let names = load_catalog(path)?;
    if names.is_empty() {
        return Err(TradepackError::empty_catalog(path));
    }
    Ok(Dictionary::from_catalog(names))
}

/// Parses catalog content already in memory.
pub fn parse_catalog_str(content: &str, format: CatalogFormat) -> Result<Vec<String>> {
    match format {
        CatalogFormat::Text => Ok(parse_text(content)),
        CatalogFormat::Json => parse_json(content),
        CatalogFormat::Csv => parse_csv(content),
    }
}

fn parse_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// A catalog record: the item name plus an optional database id.
#[cfg_attr(not(any(feature = "json-output", feature = "csv-output")), allow(dead_code))]
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(alias = "displayName", alias = "display_name", alias = "Name", alias = "DisplayName")]
    name: String,

    #[serde(default, alias = "Id", alias = "ID")]
    id: Option<i64>,
}

#[cfg_attr(not(any(feature = "json-output", feature = "csv-output")), allow(dead_code))]
impl CatalogRecord {
    fn into_name(self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() || self.id.is_some_and(|id| id <= 0) {
            return None;
        }
        Some(name.to_string())
    }
}

#[cfg(feature = "json-output")]
fn parse_json(content: &str) -> Result<Vec<String>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Name(String),
        Record(CatalogRecord),
    }

    let entries: Vec<Entry> = serde_json::from_str(content)
        .map_err(|e| TradepackError::invalid_format("JSON catalog", e.to_string()))?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Name(name) => {
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            Entry::Record(record) => record.into_name(),
        })
        .collect())
}

#[cfg(not(feature = "json-output"))]
fn parse_json(_content: &str) -> Result<Vec<String>> {
    Err(TradepackError::invalid_format(
        "JSON catalog",
        "JSON support is disabled; enable the json-output feature",
    ))
}

#[cfg(feature = "csv-output")]
fn parse_csv(content: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |wanted: &[&str]| {
        headers
            .iter()
            .position(|h| wanted.iter().any(|w| h.eq_ignore_ascii_case(w)))
    };

    let name_col = column(&["name", "displayname", "display_name"]).ok_or_else(|| {
        TradepackError::invalid_format("CSV catalog", "missing a name or displayName column")
    })?;
    let id_col = column(&["id"]);

    let mut names = Vec::new();
    for row in reader.records() {
        let row = row?;
        let id = match id_col.and_then(|col| row.get(col)) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<i64>().map_err(|_| {
                TradepackError::invalid_format("CSV catalog", format!("invalid id '{raw}'"))
            })?),
            _ => None,
        };
        let record = CatalogRecord {
            name: row.get(name_col).unwrap_or_default().to_string(),
            id,
        };
        if let Some(name) = record.into_name() {
            names.push(name);
        }
    }

    Ok(names)
}

#[cfg(not(feature = "csv-output"))]
fn parse_csv(_content: &str) -> Result<Vec<String>> {
    Err(TradepackError::invalid_format(
        "CSV catalog",
        "CSV support is disabled; enable the csv-output feature",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(Path::new("items.json")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("items.CSV")), CatalogFormat::Csv);
        assert_eq!(CatalogFormat::from_path(Path::new("items.txt")), CatalogFormat::Text);
        assert_eq!(CatalogFormat::from_path(Path::new("items.lst")), CatalogFormat::Text);
        assert_eq!(CatalogFormat::from_path(Path::new("items")), CatalogFormat::Text);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TXT".parse::<CatalogFormat>().unwrap(), CatalogFormat::Text);
        assert_eq!("json".parse::<CatalogFormat>().unwrap(), CatalogFormat::Json);
        let err = "xml".parse::<CatalogFormat>().unwrap_err();
        assert!(err.contains("text, txt, json, csv"));
    }

    #[test]
    fn test_text_skips_comments_and_blanks() {
        let names = parse_catalog_str("Ale\n  # comment\n\n  Bronze Girdle  \r\n", CatalogFormat::Text)
            .unwrap();
        assert_eq!(names, ["Ale", "Bronze Girdle"]);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_names_and_records() {
        let json = r#"["Ale", {"displayName": "Mask of Wurms", "id": 12}, {"name": "Ghost", "id": 0}, {"name": "Wurmslayer"}, "  "]"#;
        let names = parse_catalog_str(json, CatalogFormat::Json).unwrap();
        assert_eq!(names, ["Ale", "Mask of Wurms", "Wurmslayer"]);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_invalid() {
        let err = parse_catalog_str("{not json", CatalogFormat::Json).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_csv_with_ids() {
        let csv = "id,displayName\n1,Ale\n-1,Removed\n2, Spear of Fate \n3,\n";
        let names = parse_catalog_str(csv, CatalogFormat::Csv).unwrap();
        assert_eq!(names, ["Ale", "Spear of Fate"]);
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_csv_without_name_column() {
        let err = parse_catalog_str("id,price\n1,5\n", CatalogFormat::Csv).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_load_dictionary() {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        writeln!(file, "Wurmslayer\nMask of Wurms").unwrap();

        let dictionary = load_dictionary(file.path()).unwrap();
        assert!(dictionary.contains("wurmslayer"));
        assert!(dictionary.contains("mask of wurms"));
        assert!(dictionary.contains("wts"));
    }

    #[test]
    fn test_load_dictionary_empty() {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        writeln!(file, "# nothing here").unwrap();

        let err = load_dictionary(file.path()).unwrap_err();
        assert!(matches!(err, TradepackError::EmptyCatalog { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog("/nonexistent/items.txt").unwrap_err();
        assert!(err.is_io());
    }
}
