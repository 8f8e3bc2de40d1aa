//! Output format identifiers and their static metadata

use crate::error::{ExportError, ExportResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated values with comment header/footer
    Delimited,
    /// XML Spreadsheet 2003 markup
    SpreadsheetMarkup,
    /// Hypertext report with a print trigger, saved with a .pdf name
    PrintableHypertext,
    /// Hypertext report without the print trigger
    PlainHypertext,
}

/// Static description of an [`ExportFormat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub id: ExportFormat,
    pub display_name: &'static str,
    pub extension: &'static str,
}

static DESCRIPTORS: [FormatDescriptor; 4] = [
    FormatDescriptor {
        id: ExportFormat::Delimited,
        display_name: "CSV (Comma Separated Values)",
        extension: "csv",
    },
    FormatDescriptor {
        id: ExportFormat::SpreadsheetMarkup,
        display_name: "Excel Spreadsheet (XML)",
        extension: "xls",
    },
    FormatDescriptor {
        id: ExportFormat::PrintableHypertext,
        display_name: "PDF (Printable Report)",
        extension: "pdf",
    },
    FormatDescriptor {
        id: ExportFormat::PlainHypertext,
        display_name: "HTML Report",
        extension: "html",
    },
];

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Delimited,
        ExportFormat::SpreadsheetMarkup,
        ExportFormat::PrintableHypertext,
        ExportFormat::PlainHypertext,
    ];

    pub fn descriptor(self) -> &'static FormatDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn extension(self) -> &'static str {
        self.descriptor().extension
    }

    /// Match a file extension (case-insensitive, leading dot optional)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.matches_path(path))
    }

    /// Whether the file name ends with `.<extension>` (case-insensitive).
    /// A dotfile such as `.csv` counts.
    pub fn matches_path(self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_ascii_lowercase();
        name.ends_with(&format!(".{}", self.extension()))
    }

    /// Append `.<extension>` unless `path` already ends with it
    pub fn normalize_path(self, path: &Path) -> PathBuf {
        if self.matches_path(path) {
            return path.to_path_buf();
        }
        let mut os = path.as_os_str().to_owned();
        os.push(".");
        os.push(self.extension());
        PathBuf::from(os)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().display_name)
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Accepts an extension (`csv`, `xls`, `pdf`, `html`) or a format name
    fn from_str(s: &str) -> ExportResult<Self> {
        if let Some(format) = Self::from_extension(s) {
            return Ok(format);
        }
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "delimited" => Ok(ExportFormat::Delimited),
            "excel" | "spreadsheet" | "spreadsheetmarkup" => Ok(ExportFormat::SpreadsheetMarkup),
            "printable" | "printablehypertext" => Ok(ExportFormat::PrintableHypertext),
            "htm" | "plain" | "plainhypertext" => Ok(ExportFormat::PlainHypertext),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_is_keyed_by_id() {
        for format in ExportFormat::ALL {
            assert_eq!(format.descriptor().id, format);
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Delimited.extension(), "csv");
        assert_eq!(ExportFormat::SpreadsheetMarkup.extension(), "xls");
        assert_eq!(ExportFormat::PrintableHypertext.extension(), "pdf");
        assert_eq!(ExportFormat::PlainHypertext.extension(), "html");
    }

    #[test]
    fn test_normalize_appends_missing_extension() {
        let path = ExportFormat::Delimited.normalize_path(Path::new("report"));
        assert_eq!(path, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_normalize_keeps_matching_extension() {
        let path = ExportFormat::PlainHypertext.normalize_path(Path::new("out/Report.HTML"));
        assert_eq!(path, PathBuf::from("out/Report.HTML"));
    }

    #[test]
    fn test_normalize_appends_after_other_extension() {
        let path = ExportFormat::PrintableHypertext.normalize_path(Path::new("report.html"));
        assert_eq!(path, PathBuf::from("report.html.pdf"));
    }

    #[test]
    fn test_normalize_keeps_dotfile_name() {
        let path = ExportFormat::Delimited.normalize_path(Path::new("dir/.csv"));
        assert_eq!(path, PathBuf::from("dir/.csv"));
        assert_eq!(
            ExportFormat::from_path(Path::new("dir/.CSV")),
            Some(ExportFormat::Delimited)
        );
        assert_eq!(ExportFormat::from_path(Path::new("dir/csv")), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Delimited);
        assert_eq!(".xls".parse::<ExportFormat>().unwrap(), ExportFormat::SpreadsheetMarkup);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::SpreadsheetMarkup);
        assert_eq!("plain-hypertext".parse::<ExportFormat>().unwrap(), ExportFormat::PlainHypertext);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(s)) if s == "docx"
        ));
    }
}
