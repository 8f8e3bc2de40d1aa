//! Encoder capability and the per-format lookup table

use super::delimited::DelimitedEncoder;
use super::hypertext::HypertextEncoder;
use super::spreadsheet::SpreadsheetEncoder;
use crate::config::{Branding, ExportConfiguration};
use crate::format::{ExportFormat, FormatDescriptor};
use crate::types::TabularDataSource;

/// Everything an encoder reads while rendering one document
pub struct EncodeContext<'a> {
    pub source: &'a dyn TabularDataSource,
    /// Resolved column indices, native order
    pub columns: &'a [usize],
    pub config: &'a ExportConfiguration,
    pub branding: &'a Branding,
    /// Export timestamp rendered with `branding.timestamp_format`
    pub timestamp: String,
    /// Export timestamp in ISO-8601, for machine-readable metadata
    pub iso_timestamp: String,
}

impl EncodeContext<'_> {
    /// Column names of the resolved columns
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|&col| self.source.column_name(col))
    }

    /// Text form of a cell; absent cells become the empty string
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        self.source.value(row, col).to_string()
    }
}

/// A format-specific renderer.
///
/// `encode_header` runs once, `encode_row` once per table row, then
/// `encode_footer` once. Structural closing tags belong in `encode_footer`
/// even when the configuration disables footer content.
pub trait Encoder: Sync {
    fn format(&self) -> ExportFormat;
    fn encode_header(&self, ctx: &EncodeContext<'_>, out: &mut String);
    fn encode_row(&self, ctx: &EncodeContext<'_>, row: usize, out: &mut String);
    fn encode_footer(&self, ctx: &EncodeContext<'_>, out: &mut String);
}

/// Indexed by `ExportFormat as usize`
static ENCODERS: [&dyn Encoder; 4] = [
    &DelimitedEncoder,
    &SpreadsheetEncoder,
    &HypertextEncoder { printable: true },
    &HypertextEncoder { printable: false },
];

pub fn encoder_for(format: ExportFormat) -> &'static dyn Encoder {
    ENCODERS[format as usize]
}

/// Rendered output of one export, tagged with its format
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedDocument {
    descriptor: &'static FormatDescriptor,
    content: String,
}

impl EncodedDocument {
    pub fn descriptor(&self) -> &'static FormatDescriptor {
        self.descriptor
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// Drive `encoder` over every row of the context's source
pub fn encode_document(encoder: &dyn Encoder, ctx: &EncodeContext<'_>) -> EncodedDocument {
    let mut content = String::new();
    encoder.encode_header(ctx, &mut content);
    for row in 0..ctx.source.row_count() {
        encoder.encode_row(ctx, row, &mut content);
    }
    encoder.encode_footer(ctx, &mut content);

    EncodedDocument {
        descriptor: encoder.format().descriptor(),
        content,
    }
}
