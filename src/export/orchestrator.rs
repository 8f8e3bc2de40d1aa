//! Export entry points: pick the encoder, render, persist

use super::encoder::{encode_document, encoder_for, EncodeContext, EncodedDocument};
use crate::clock::{Clock, SystemClock};
use crate::columns;
use crate::config::{Branding, ExportConfiguration};
use crate::error::{ExportError, ExportResult};
use crate::format::ExportFormat;
use crate::types::TabularDataSource;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Table exporter.
///
/// Holds only injected, immutable collaborators; every call renders and
/// writes one document from scratch.
pub struct Exporter<C = SystemClock> {
    branding: Branding,
    clock: C,
}

impl Default for Exporter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            branding: Branding::default(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Exporter<C> {
    pub fn with_clock(branding: Branding, clock: C) -> Self {
        Self { branding, clock }
    }

    #[must_use]
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Render `source` in `format` without touching the filesystem
    pub fn encode(
        &self,
        source: &dyn TabularDataSource,
        config: &ExportConfiguration,
        format: ExportFormat,
    ) -> ExportResult<EncodedDocument> {
        let columns = columns::resolve(source, config);
        let missing = columns::unmatched(source, config);
        if !missing.is_empty() {
            warn!(columns = ?missing, "Selected columns not found in table; skipping");
        }
        debug!(?columns, %format, rows = source.row_count(), "Encoding table");

        let now = self.clock.now();
        let ctx = EncodeContext {
            source,
            columns: &columns,
            config,
            branding: &self.branding,
            timestamp: format_timestamp(&now, &self.branding.timestamp_format)?,
            iso_timestamp: format_timestamp(&now, ISO_TIMESTAMP_FORMAT)?,
        };

        Ok(encode_document(encoder_for(format), &ctx))
    }

    /// Export `source` to `target`, appending the format's extension when the
    /// path lacks it. Returns the path actually written.
    pub fn export(
        &self,
        source: &dyn TabularDataSource,
        config: &ExportConfiguration,
        format: ExportFormat,
        target: impl AsRef<Path>,
    ) -> ExportResult<PathBuf> {
        let target = target.as_ref();
        let path = format.normalize_path(target);
        if path != target {
            debug!(from = %target.display(), to = %path.display(), "Appended file extension");
        }

        let document = self.encode(source, config, format)?;
        write_document(&path, &document)?;

        info!(
            path = %path.display(),
            bytes = document.len(),
            rows = source.row_count(),
            "Export complete"
        );
        Ok(path)
    }

    /// Like [`Exporter::export`], with the format given as an id or extension
    pub fn export_by_id(
        &self,
        source: &dyn TabularDataSource,
        config: &ExportConfiguration,
        format_id: &str,
        target: impl AsRef<Path>,
    ) -> ExportResult<PathBuf> {
        let format: ExportFormat = format_id.parse()?;
        self.export(source, config, format, target)
    }

    /// Default configuration with `title`; writes `path` as given
    fn quick_export(
        &self,
        source: &dyn TabularDataSource,
        title: &str,
        format: ExportFormat,
        path: &Path,
    ) -> ExportResult<()> {
        let config = ExportConfiguration::titled(title);
        let document = self.encode(source, &config, format)?;
        write_document(path, &document)?;
        info!(path = %path.display(), %format, "Quick export complete");
        Ok(())
    }

    pub fn quick_export_csv(
        &self,
        source: &dyn TabularDataSource,
        title: &str,
        path: impl AsRef<Path>,
    ) -> ExportResult<()> {
        self.quick_export(source, title, ExportFormat::Delimited, path.as_ref())
    }

    pub fn quick_export_xls(
        &self,
        source: &dyn TabularDataSource,
        title: &str,
        path: impl AsRef<Path>,
    ) -> ExportResult<()> {
        self.quick_export(source, title, ExportFormat::SpreadsheetMarkup, path.as_ref())
    }

    pub fn quick_export_pdf(
        &self,
        source: &dyn TabularDataSource,
        title: &str,
        path: impl AsRef<Path>,
    ) -> ExportResult<()> {
        self.quick_export(source, title, ExportFormat::PrintableHypertext, path.as_ref())
    }

    pub fn quick_export_html(
        &self,
        source: &dyn TabularDataSource,
        title: &str,
        path: impl AsRef<Path>,
    ) -> ExportResult<()> {
        self.quick_export(source, title, ExportFormat::PlainHypertext, path.as_ref())
    }
}

/// Export with default branding and the system clock
pub fn export(
    source: &dyn TabularDataSource,
    config: &ExportConfiguration,
    format: ExportFormat,
    target: impl AsRef<Path>,
) -> ExportResult<PathBuf> {
    Exporter::new().export(source, config, format, target)
}

pub fn quick_export_csv(
    source: &dyn TabularDataSource,
    title: &str,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    Exporter::new().quick_export_csv(source, title, path)
}

pub fn quick_export_xls(
    source: &dyn TabularDataSource,
    title: &str,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    Exporter::new().quick_export_xls(source, title, path)
}

pub fn quick_export_pdf(
    source: &dyn TabularDataSource,
    title: &str,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    Exporter::new().quick_export_pdf(source, title, path)
}

pub fn quick_export_html(
    source: &dyn TabularDataSource,
    title: &str,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    Exporter::new().quick_export_html(source, title, path)
}

fn format_timestamp(now: &chrono::NaiveDateTime, pattern: &str) -> ExportResult<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(pattern))
        .map_err(|_| ExportError::Encoding(format!("Invalid timestamp format '{}'", pattern)))?;
    Ok(out)
}

/// Write the whole document; the file handle is released on every path.
/// A failure midway leaves whatever was already written.
fn write_document(path: &Path, document: &EncodedDocument) -> ExportResult<()> {
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::types::{CellValue, Table};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn fixed_exporter() -> Exporter<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Exporter::with_clock(Branding::default(), FixedClock(at))
    }

    fn table() -> Table {
        Table::new(["ID", "Name"]).with_row([CellValue::from(1), CellValue::from("Ann")])
    }

    #[test]
    fn test_export_appends_extension() {
        let dir = TempDir::new().unwrap();
        let written = fixed_exporter()
            .export(
                &table(),
                &ExportConfiguration::default(),
                ExportFormat::Delimited,
                dir.path().join("report"),
            )
            .unwrap();
        assert_eq!(written, dir.path().join("report.csv"));
        assert!(written.exists());
        assert!(!dir.path().join("report").exists());
    }

    #[test]
    fn test_timestamps_come_from_clock() {
        let doc = fixed_exporter()
            .encode(
                &table(),
                &ExportConfiguration::default(),
                ExportFormat::SpreadsheetMarkup,
            )
            .unwrap();
        assert!(doc.as_str().contains("<Created>2024-03-15T09:30:00</Created>"));
        assert!(doc.as_str().contains("Generated: 2024-03-15 09:30:00"));
    }

    #[test]
    fn test_custom_branding_and_timestamp_format() {
        let branding = Branding {
            product_name: "Inventory".to_string(),
            company_name: "Acme".to_string(),
            timestamp_format: "%d/%m/%Y".to_string(),
        };
        let doc = fixed_exporter()
            .with_branding(branding)
            .encode(&table(), &ExportConfiguration::default(), ExportFormat::Delimited)
            .unwrap();
        assert!(doc.as_str().contains("# Inventory - Acme\n"));
        assert!(doc.as_str().contains("# Generated: 15/03/2024\n"));
    }

    #[test]
    fn test_invalid_timestamp_format_is_an_error() {
        let branding = Branding {
            timestamp_format: "%Q".to_string(),
            ..Branding::default()
        };
        let result = fixed_exporter().with_branding(branding).encode(
            &table(),
            &ExportConfiguration::default(),
            ExportFormat::Delimited,
        );
        assert!(matches!(result, Err(ExportError::Encoding(_))));
    }

    #[test]
    fn test_export_by_id_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let result = fixed_exporter().export_by_id(
            &table(),
            &ExportConfiguration::default(),
            "docx",
            dir.path().join("out"),
        );
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unwritable_target_reports_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("report.csv");
        let result = fixed_exporter().export(
            &table(),
            &ExportConfiguration::default(),
            ExportFormat::Delimited,
            &target,
        );
        match result {
            Err(ExportError::Write { path, .. }) => assert_eq!(path, target),
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_quick_export_keeps_path_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quick.txt");
        fixed_exporter()
            .quick_export_html(&table(), "Quick", &path)
            .unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<title>Quick</title>"));
        assert!(html.contains("Total rows: 1"));
        assert!(!dir.path().join("quick.txt.html").exists());
    }
}
