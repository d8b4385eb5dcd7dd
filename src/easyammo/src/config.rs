//! Mod configuration
//!
//! The configuration file maps penetration values to background colours,
//! either as a descending list of thresholds or as an ordered list of
//! inclusive ranges with gradient endpoints. Files are validated field by
//! field so a broken file is reported with the offending key or value
//! instead of a bare parser message.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::color::Color;
use crate::reference::VanillaColor;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration is not an object.")]
    NotAnObject,

    #[error("Configuration validation error: 'penetration' property should be a non-empty array.")]
    EmptyPenetration,

    #[error("Configuration validation error: penetration entry {index} has neither 'minPenetration' nor 'range'.")]
    UnknownEntryShape { index: usize },

    #[error("Configuration validation error: penetration entry {index} mixes threshold and range forms.")]
    MixedEntryShapes { index: usize },

    #[error(
        "Configuration validation error: 'minPenetration' must be a number greater than or equal to 0 (entry {index})."
    )]
    InvalidMinPenetration { index: usize },

    #[error(
        "Configuration validation error: 'penetration' array should be sorted in descending order based on 'minPenetration' (entry {index})."
    )]
    UnsortedThresholds { index: usize },

    #[error("Configuration validation error: '{value}' is not a valid background color.")]
    InvalidColor { value: String },

    #[error("Configuration validation error: penetration entry {index} is missing colour '{field}'.")]
    MissingColor { index: usize, field: &'static str },

    #[error("Configuration validation error: 'range' of penetration entry {index} {reason}.")]
    InvalidRange { index: usize, reason: &'static str },

    #[error("Configuration validation error: 'general' must be an object.")]
    InvalidGeneral,

    #[error("Configuration validation error: '{field}' must be a boolean.")]
    InvalidFlag { field: String },

    #[error("Failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Toggles from the `general` section (or the top level of older files)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)] // Mirrors the file's flag set
pub struct GeneralSettings {
    pub enabled: bool,
    pub debug: bool,
    pub use_color_converter: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            use_color_converter: false,
        }
    }
}

/// Single-colour cutoff, matched when `penetration >= min_penetration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdEntry {
    pub min_penetration: i64,
    pub background_color: VanillaColor,
}

/// Inclusive penetration range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PenetrationRange {
    pub min: i64,
    pub max: i64,
}

impl PenetrationRange {
    pub fn contains(&self, penetration: i64) -> bool {
        self.min <= penetration && penetration <= self.max
    }
}

/// Gradient endpoints; `start` is reached at `range.min`, `end` at `range.max`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeEntry {
    pub range: PenetrationRange,
    pub colour: Gradient,
}

/// Ordered penetration-to-colour table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PenetrationTable {
    /// Sorted descending by `min_penetration`, first match wins
    Thresholds(Vec<ThresholdEntry>),
    /// Declaration order, first containing range wins
    Ranges(Vec<RangeEntry>),
}

impl PenetrationTable {
    pub fn len(&self) -> usize {
        match self {
            Self::Thresholds(entries) => entries.len(),
            Self::Ranges(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validated mod configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub general: GeneralSettings,
    pub penetration: PenetrationTable,
}

/// On-disk format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    /// Comments, trailing commas and unquoted keys
    Json5,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json5") => Self::Json5,
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Read, parse and validate a configuration file
pub fn load(path: &Path) -> Result<Configuration, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = parse_value(&contents, ConfigFormat::from_path(path)).map_err(|message| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        }
    })?;

    validate(&value)
}

/// Parse text in the given format into a JSON value tree
pub fn parse_value(contents: &str, format: ConfigFormat) -> Result<Value, String> {
    match format {
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        ConfigFormat::Json5 => json5::from_str(contents).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
    }
}

/// Validate a parsed configuration document
pub fn validate(value: &Value) -> Result<Configuration, ConfigError> {
    let root = value.as_object().ok_or(ConfigError::NotAnObject)?;

    let general = parse_general(root)?;

    let entries = match root.get("penetration").and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(ConfigError::EmptyPenetration),
    };

    let penetration = parse_table(entries)?;

    Ok(Configuration {
        general,
        penetration,
    })
}

fn parse_general(root: &Map<String, Value>) -> Result<GeneralSettings, ConfigError> {
    let (section, prefix) = match root.get("general") {
        Some(Value::Object(general)) => (general, "general."),
        Some(_) => return Err(ConfigError::InvalidGeneral),
        None => (root, ""),
    };

    let flag = |key: &str, default: bool| -> Result<bool, ConfigError> {
        match section.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(ConfigError::InvalidFlag {
                field: format!("{}{}", prefix, key),
            }),
        }
    };

    let defaults = GeneralSettings::default();
    Ok(GeneralSettings {
        enabled: flag("enabled", defaults.enabled)?,
        debug: flag("debug", defaults.debug)?,
        use_color_converter: flag("useColorConverter", defaults.use_color_converter)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryShape {
    Threshold,
    Range,
}

fn entry_shape(index: usize, entry: &Value) -> Result<EntryShape, ConfigError> {
    let obj = entry
        .as_object()
        .ok_or(ConfigError::UnknownEntryShape { index })?;
    match (obj.contains_key("minPenetration"), obj.contains_key("range")) {
        (true, false) => Ok(EntryShape::Threshold),
        (false, true) => Ok(EntryShape::Range),
        (true, true) => Err(ConfigError::MixedEntryShapes { index }),
        (false, false) => Err(ConfigError::UnknownEntryShape { index }),
    }
}

fn parse_table(entries: &[Value]) -> Result<PenetrationTable, ConfigError> {
    let shape = entry_shape(0, &entries[0])?;
    for (index, entry) in entries.iter().enumerate().skip(1) {
        if entry_shape(index, entry)? != shape {
            return Err(ConfigError::MixedEntryShapes { index });
        }
    }

    match shape {
        EntryShape::Threshold => parse_thresholds(entries).map(PenetrationTable::Thresholds),
        EntryShape::Range => parse_ranges(entries).map(PenetrationTable::Ranges),
    }
}

fn parse_thresholds(entries: &[Value]) -> Result<Vec<ThresholdEntry>, ConfigError> {
    let mut parsed = Vec::with_capacity(entries.len());
    let mut previous = i64::MAX;

    for (index, entry) in entries.iter().enumerate() {
        let min_penetration = entry
            .get("minPenetration")
            .and_then(Value::as_i64)
            .filter(|v| *v >= 0)
            .ok_or(ConfigError::InvalidMinPenetration { index })?;

        if min_penetration > previous {
            return Err(ConfigError::UnsortedThresholds { index });
        }
        previous = min_penetration;

        let background_color = match entry.get("backgroundColor") {
            Some(Value::String(name)) => {
                name.parse::<VanillaColor>()
                    .map_err(|_| ConfigError::InvalidColor {
                        value: name.clone(),
                    })?
            }
            Some(other) => {
                return Err(ConfigError::InvalidColor {
                    value: other.to_string(),
                })
            }
            None => {
                return Err(ConfigError::MissingColor {
                    index,
                    field: "backgroundColor",
                })
            }
        };

        parsed.push(ThresholdEntry {
            min_penetration,
            background_color,
        });
    }

    Ok(parsed)
}

fn parse_ranges(entries: &[Value]) -> Result<Vec<RangeEntry>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Ok(RangeEntry {
                range: parse_range(index, entry)?,
                colour: parse_gradient(index, entry)?,
            })
        })
        .collect()
}

fn parse_range(index: usize, entry: &Value) -> Result<PenetrationRange, ConfigError> {
    let range = entry
        .get("range")
        .and_then(Value::as_object)
        .ok_or(ConfigError::InvalidRange {
            index,
            reason: "must be an object",
        })?;

    let bound = |key: &str| {
        range
            .get(key)
            .and_then(Value::as_i64)
            .ok_or(ConfigError::InvalidRange {
                index,
                reason: "needs integer 'min' and 'max'",
            })
    };

    let (min, max) = (bound("min")?, bound("max")?);
    if min > max {
        return Err(ConfigError::InvalidRange {
            index,
            reason: "has 'min' greater than 'max'",
        });
    }

    Ok(PenetrationRange { min, max })
}

fn parse_gradient(index: usize, entry: &Value) -> Result<Gradient, ConfigError> {
    let colour = ["colour", "color", "colorSpec"]
        .iter()
        .find_map(|key| entry.get(*key))
        .and_then(Value::as_object)
        .ok_or(ConfigError::MissingColor {
            index,
            field: "colour",
        })?;

    let endpoint = |keys: [&str; 2], field: &'static str| -> Result<Color, ConfigError> {
        match keys.iter().find_map(|key| colour.get(*key)) {
            Some(Value::String(s)) => Color::parse(s).map_err(|_| ConfigError::InvalidColor {
                value: s.clone(),
            }),
            Some(other) => Err(ConfigError::InvalidColor {
                value: other.to_string(),
            }),
            None => Err(ConfigError::MissingColor { index, field }),
        }
    };

    Ok(Gradient {
        start: endpoint(["start", "high"], "start")?,
        end: endpoint(["end", "low"], "end")?,
    })
}
