//! Tabex - tabular export engine
//!
//! Turns any in-memory table into a ready-to-save document under one shared
//! configuration.
//!
//! # Formats
//!
//! - CSV with commented header and footer (`.csv`)
//! - XML Spreadsheet 2003, readable by Excel and LibreOffice (`.xls`)
//! - Printable HTML report with a print button (`.pdf` file name)
//! - Plain HTML report (`.html`)
//!
//! # Example
//!
//! ```no_run
//! use royalbit_tabex::{ExportConfiguration, ExportFormat, Exporter, Table};
//!
//! let table = Table::new(["ID", "Name"])
//!     .with_row(["1", "Smith, John"])
//!     .with_row(["2", "O'Brien"]);
//!
//! let config = ExportConfiguration::titled("Customers").with_selected_columns(["Name"]);
//! let written = Exporter::new().export(&table, &config, ExportFormat::Delimited, "customers")?;
//! assert!(written.ends_with("customers.csv"));
//! # Ok::<(), royalbit_tabex::ExportError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod columns;
pub mod config;
pub mod error;
pub mod escape;
pub mod export;
pub mod format;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use config::{Branding, ExportConfiguration};
pub use error::{ExportError, ExportResult};
pub use export::{EncodedDocument, Exporter};
pub use format::{ExportFormat, FormatDescriptor};
pub use types::{CellValue, Table, TabularDataSource};
