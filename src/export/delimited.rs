//! CSV encoder with `# `-prefixed comment header and footer

use super::encoder::{EncodeContext, Encoder};
use crate::escape;
use crate::format::ExportFormat;

pub struct DelimitedEncoder;

fn comment(out: &mut String, text: &str) {
    if text.is_empty() {
        out.push_str("#\n");
        return;
    }
    // Line breaks would end the comment early
    let flat = text.replace(['\r', '\n'], " ");
    out.push_str(&format!("# {}\n", flat));
}

fn record<I>(out: &mut String, fields: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let fields = fields
        .into_iter()
        .map(|f| escape::delimited_field(f.as_ref()))
        .collect::<Vec<_>>();
    if fields.is_empty() {
        // A bare newline is skipped by CSV readers; keep one empty field per record
        out.push_str("\"\"\n");
        return;
    }
    out.push_str(&fields.join(","));
    out.push('\n');
}

impl Encoder for DelimitedEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Delimited
    }

    fn encode_header(&self, ctx: &EncodeContext<'_>, out: &mut String) {
        let config = ctx.config;
        if config.include_header {
            comment(out, &config.title);
            if !config.subtitle.is_empty() {
                comment(out, &config.subtitle);
            }
            comment(
                out,
                &format!(
                    "{} - {}",
                    ctx.branding.product_name, ctx.branding.company_name
                ),
            );
            if config.include_timestamp {
                comment(out, &format!("Generated: {}", ctx.timestamp));
            }
            comment(out, "");
        }

        record(out, ctx.column_names());
    }

    fn encode_row(&self, ctx: &EncodeContext<'_>, row: usize, out: &mut String) {
        record(out, ctx.columns.iter().map(|&col| ctx.cell_text(row, col)));
    }

    fn encode_footer(&self, ctx: &EncodeContext<'_>, out: &mut String) {
        if !ctx.config.include_footer {
            return;
        }
        comment(out, "");
        comment(out, &format!("Total rows: {}", ctx.source.row_count()));
        comment(out, &format!("Export completed: {}", ctx.timestamp));
    }
}

#[cfg(test)]
mod tests {
    use super::super::encoder::test_support::*;
    use crate::config::ExportConfiguration;
    use crate::format::ExportFormat;
    use crate::types::{CellValue, Table};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_rows_without_header_or_footer() {
        let config = ExportConfiguration::default()
            .with_header(false)
            .with_footer(false);
        let csv = render(ExportFormat::Delimited, &customers(), &config);
        assert_eq!(
            csv,
            "\"ID\",\"Name\"\n\"1\",\"Smith, John\"\n\"2\",\"O'Brien\"\n"
        );
    }

    #[test]
    fn test_full_header_and_footer() {
        let config = ExportConfiguration::titled("Customers").with_subtitle("All regions");
        let csv = render(ExportFormat::Delimited, &customers(), &config);
        let expected = "\
# Customers
# All regions
# Business Manager - RoyalBit Inc.
# Generated: 2024-03-15 09:30:00
#
\"ID\",\"Name\"
\"1\",\"Smith, John\"
\"2\",\"O'Brien\"
#
# Total rows: 2
# Export completed: 2024-03-15 09:30:00
";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_header_skips_empty_subtitle_and_timestamp() {
        let config = ExportConfiguration::titled("Stock")
            .with_timestamp(false)
            .with_footer(false);
        let csv = render(ExportFormat::Delimited, &customers(), &config);
        assert!(csv.starts_with("# Stock\n# Business Manager - RoyalBit Inc.\n#\n\"ID\""));
        assert!(!csv.contains("Generated:"));
    }

    #[test]
    fn test_multiline_title_stays_in_comment() {
        let config = ExportConfiguration::titled("Line one\nLine two").with_footer(false);
        let csv = render(ExportFormat::Delimited, &customers(), &config);
        assert!(csv.starts_with("# Line one Line two\n"));
    }

    #[test]
    fn test_absent_and_quoted_cells() {
        let table = Table::new(["Code", "Note"])
            .with_row([CellValue::from("A\"1"), CellValue::Absent]);
        let config = ExportConfiguration::default()
            .with_header(false)
            .with_footer(false);
        let csv = render(ExportFormat::Delimited, &table, &config);
        assert_eq!(csv, "\"Code\",\"Note\"\n\"A\"\"1\",\"\"\n");
    }

    #[test]
    fn test_no_matching_columns_keeps_one_record_per_row() {
        let config = ExportConfiguration::default()
            .with_header(false)
            .with_footer(false)
            .with_selected_columns(["Nope"]);
        let csv = render(ExportFormat::Delimited, &customers(), &config);
        assert_eq!(csv, "\"\"\n\"\"\n\"\"\n");

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        assert_eq!(reader.records().count(), 2);
    }

    #[test]
    fn test_selected_columns_follow_native_order() {
        let table = Table::new(["ID", "Name", "Stock"])
            .with_row([CellValue::from(7), CellValue::from("Bolt"), CellValue::from(120)]);
        let config = ExportConfiguration::default()
            .with_header(false)
            .with_footer(false)
            .with_selected_columns(["Stock", "ID"]);
        let csv = render(ExportFormat::Delimited, &table, &config);
        assert_eq!(csv, "\"ID\",\"Stock\"\n\"7\",\"120\"\n");
    }
}
