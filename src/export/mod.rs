//! Table export engine
//!
//! Renders any [`TabularDataSource`](crate::types::TabularDataSource) as:
//! - CSV with comment header/footer (.csv)
//! - XML Spreadsheet 2003 (.xls)
//! - Printable HTML report (.pdf name, HTML content)
//! - Plain HTML report (.html)

mod delimited;
mod encoder;
mod hypertext;
mod orchestrator;
mod spreadsheet;

pub use encoder::{encode_document, encoder_for, EncodeContext, EncodedDocument, Encoder};
pub use orchestrator::{
    export, quick_export_csv, quick_export_html, quick_export_pdf, quick_export_xls, Exporter,
};
