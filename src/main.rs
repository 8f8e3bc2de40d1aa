use clap::{Parser, Subcommand};
use royalbit_tabex::cli::{self, ExportOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tabex")]
#[command(about = "Export tables to CSV, Excel XML and HTML reports.")]
#[command(long_about = "Tabex - tabular export engine

FORMATS:
  csv   - Comma separated values with commented header/footer
  xls   - Excel XML spreadsheet (opens in Excel and LibreOffice)
  pdf   - Printable HTML report with a print button
  html  - Plain HTML report

TABLE FILES (.yaml, .yml, .json):
  columns: [ID, Name, Stock]
  rows:
    - [1, Bolt, 120]
    - [2, Nut, ~]

EXAMPLES:
  tabex export products.yaml report.csv
  tabex export products.yaml report -f xls --title \"Stock Levels\"
  tabex export products.yaml report.html --columns Name,Stock --no-footer
  tabex formats")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a table file to a report
    Export {
        /// Table file (.yaml, .yml or .json)
        input: PathBuf,

        /// Output path; the format's extension is appended when missing
        output: PathBuf,

        /// Output format: csv, xls, pdf, html (default: from output extension)
        #[arg(short, long)]
        format: Option<String>,

        /// Configuration file (.yaml, .yml or .json)
        #[arg(short, long, env = "TABEX_CONFIG")]
        config: Option<PathBuf>,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Report subtitle
        #[arg(long)]
        subtitle: Option<String>,

        /// Columns to export, comma separated (table order is kept)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Omit the header block
        #[arg(long)]
        no_header: bool,

        /// Omit the footer block
        #[arg(long)]
        no_footer: bool,

        /// Omit the generation timestamp from the header
        #[arg(long)]
        no_timestamp: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List supported export formats
    Formats,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "tabex=info,royalbit_tabex=info"
    } else {
        "tabex=warn,royalbit_tabex=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            format,
            config,
            title,
            subtitle,
            columns,
            no_header,
            no_footer,
            no_timestamp,
            verbose,
        } => {
            init_tracing(verbose);
            cli::export(ExportOptions {
                input,
                output,
                format,
                config,
                title,
                subtitle,
                columns,
                no_header,
                no_footer,
                no_timestamp,
                verbose,
            })?;
        }

        Commands::Formats => {
            init_tracing(false);
            cli::formats();
        }
    }

    Ok(())
}
