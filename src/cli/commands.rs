use crate::config::{load_config, ConfigFile, ExportConfiguration};
use crate::error::{ExportError, ExportResult};
use crate::export::Exporter;
use crate::format::ExportFormat;
use crate::parser;
use crate::types::TabularDataSource;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Options for the export command, as collected from the command line
#[derive(Debug, Default, Clone)]
pub struct ExportOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Format id or extension; inferred from `output` when absent
    pub format: Option<String>,
    pub config: Option<PathBuf>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub columns: Option<Vec<String>>,
    pub no_header: bool,
    pub no_footer: bool,
    pub no_timestamp: bool,
    pub verbose: bool,
}

/// Pick the format from `--format`, falling back to the output extension
pub fn resolve_format(format: Option<&str>, output: &Path) -> ExportResult<ExportFormat> {
    match format {
        Some(id) => id.parse(),
        None => ExportFormat::from_path(output).ok_or_else(|| {
            ExportError::UnsupportedFormat(format!(
                "cannot infer format from '{}' (use --format csv|xls|pdf|html)",
                output.display()
            ))
        }),
    }
}

/// Merge the optional configuration file with command-line overrides
pub fn build_config(options: &ExportOptions) -> ExportResult<ConfigFile> {
    let mut file = match &options.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };

    let export: &mut ExportConfiguration = &mut file.export;
    if let Some(title) = &options.title {
        export.title = title.clone();
    }
    if let Some(subtitle) = &options.subtitle {
        export.subtitle = subtitle.clone();
    }
    if let Some(columns) = &options.columns {
        export.selected_columns = Some(columns.clone());
    }
    if options.no_header {
        export.include_header = false;
    }
    if options.no_footer {
        export.include_footer = false;
    }
    if options.no_timestamp {
        export.include_timestamp = false;
    }

    Ok(file)
}

/// Execute the export command
pub fn export(options: ExportOptions) -> ExportResult<PathBuf> {
    let format = resolve_format(options.format.as_deref(), &options.output)?;

    println!("{}", "📤 Tabex - Table Export".bold().green());
    println!("   Input:  {}", options.input.display());
    println!("   Format: {}\n", format.to_string().cyan());

    if options.verbose {
        println!("{}", "📖 Reading table...".cyan());
    }
    let table = parser::parse_table(&options.input)?;
    let ConfigFile { export, branding } = build_config(&options)?;

    if options.verbose {
        println!(
            "   Found {} columns, {} rows\n",
            table.column_count(),
            table.row_count()
        );
        println!("{}", "📊 Exporting...".cyan());
    }

    let written = Exporter::new()
        .with_branding(branding)
        .export(&table, &export, format, &options.output)?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Output: {}\n", written.display());

    Ok(written)
}

/// Execute the formats command
pub fn formats() {
    println!("{}", "📋 Supported export formats".bold().green());
    for format in ExportFormat::ALL {
        let descriptor = format.descriptor();
        println!(
            "   {:<6} {}",
            descriptor.extension.bright_blue().bold(),
            descriptor.display_name
        );
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
