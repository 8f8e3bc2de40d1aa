//! Export configuration
//!
//! [`ExportConfiguration`] holds the per-export options; [`Branding`] carries the
//! product/company strings and timestamp format that every document stamps.
//! Both are plain values: a dialog, a CLI or a config file may build them, the
//! engine only reads them.

use crate::error::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Data Export";
pub const DEFAULT_PRODUCT_NAME: &str = "Business Manager";
pub const DEFAULT_COMPANY_NAME: &str = "RoyalBit Inc.";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Options controlling a single export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfiguration {
    pub title: String,
    pub subtitle: String,
    pub include_header: bool,
    pub include_footer: bool,
    pub include_timestamp: bool,
    /// Column names to emit; `None` exports every column
    pub selected_columns: Option<Vec<String>>,
}

impl Default for ExportConfiguration {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: String::new(),
            include_header: true,
            include_footer: true,
            include_timestamp: true,
            selected_columns: None,
        }
    }
}

impl ExportConfiguration {
    /// Defaults everywhere except the title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    #[must_use]
    pub fn with_footer(mut self, include: bool) -> Self {
        self.include_footer = include;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    #[must_use]
    pub fn with_selected_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_columns = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Product identity and timestamp formatting stamped into every document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub product_name: String,
    pub company_name: String,
    /// chrono strftime pattern for human-readable timestamps
    pub timestamp_format: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// On-disk configuration: export options plus optional branding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub export: ExportConfiguration,
    #[serde(default)]
    pub branding: Branding,
}

/// Load a configuration file (.yaml, .yml or .json)
pub fn load_config(path: &Path) -> ExportResult<ConfigFile> {
    let content = fs::read_to_string(path)?;
    let config = match extension_of(path).as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        other => {
            return Err(ExportError::UnsupportedFormat(format!(
                "configuration file extension '{}'",
                other.unwrap_or("")
            )))
        }
    };
    Ok(config)
}

pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
