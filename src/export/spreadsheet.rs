//! XML Spreadsheet 2003 encoder (opens in Excel and LibreOffice as .xls)

use super::encoder::{EncodeContext, Encoder};
use crate::escape::markup;
use crate::format::ExportFormat;
use crate::types::CellValue;

pub struct SpreadsheetEncoder;

const STYLE_HEADER: &str = "Header";
const STYLE_TITLE: &str = "Title";
const STYLE_DATA: &str = "Data";

/// A row holding one string cell merged across every resolved column
fn merged_row(ctx: &EncodeContext<'_>, style: Option<&str>, text: &str, out: &mut String) {
    let merge = ctx.columns.len().saturating_sub(1);
    let style_attr = style
        .map(|s| format!(" ss:StyleID=\"{}\"", s))
        .unwrap_or_default();
    out.push_str(&format!(
        "   <Row>\n    <Cell ss:MergeAcross=\"{}\"{}><Data ss:Type=\"String\">{}</Data></Cell>\n   </Row>\n",
        merge,
        style_attr,
        markup(text)
    ));
}

fn data_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) if n.is_finite() => format!(
            "    <Cell ss:StyleID=\"{}\"><Data ss:Type=\"Number\">{}</Data></Cell>\n",
            STYLE_DATA, n
        ),
        other => format!(
            "    <Cell ss:StyleID=\"{}\"><Data ss:Type=\"String\">{}</Data></Cell>\n",
            STYLE_DATA,
            markup(&other.to_string())
        ),
    }
}

impl Encoder for SpreadsheetEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::SpreadsheetMarkup
    }

    fn encode_header(&self, ctx: &EncodeContext<'_>, out: &mut String) {
        let config = ctx.config;

        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
        out.push_str(
            "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\"\n \
             xmlns:o=\"urn:schemas-microsoft-com:office:office\"\n \
             xmlns:x=\"urn:schemas-microsoft-com:office:excel\"\n \
             xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\"\n \
             xmlns:html=\"http://www.w3.org/TR/REC-html40\">\n",
        );

        out.push_str(" <DocumentProperties xmlns=\"urn:schemas-microsoft-com:office:office\">\n");
        out.push_str(&format!("  <Title>{}</Title>\n", markup(&config.title)));
        out.push_str(&format!(
            "  <Author>{}</Author>\n",
            markup(&ctx.branding.product_name)
        ));
        out.push_str(&format!("  <Created>{}</Created>\n", ctx.iso_timestamp));
        out.push_str(" </DocumentProperties>\n");

        out.push_str(" <Styles>\n");
        out.push_str(&format!("  <Style ss:ID=\"{}\">\n", STYLE_HEADER));
        out.push_str("   <Font ss:Bold=\"1\" ss:Color=\"#FFFFFF\"/>\n");
        out.push_str("   <Interior ss:Color=\"#4472C4\" ss:Pattern=\"Solid\"/>\n");
        out.push_str("  </Style>\n");
        out.push_str(&format!("  <Style ss:ID=\"{}\">\n", STYLE_TITLE));
        out.push_str("   <Alignment ss:Horizontal=\"Center\"/>\n");
        out.push_str("   <Font ss:Bold=\"1\" ss:Size=\"14\"/>\n");
        out.push_str("  </Style>\n");
        out.push_str(&format!("  <Style ss:ID=\"{}\">\n", STYLE_DATA));
        out.push_str("   <Borders>\n");
        out.push_str(
            "    <Border ss:Position=\"Bottom\" ss:LineStyle=\"Continuous\" ss:Weight=\"1\"/>\n",
        );
        out.push_str("   </Borders>\n");
        out.push_str("  </Style>\n");
        out.push_str(" </Styles>\n");

        out.push_str(&format!(
            " <Worksheet ss:Name=\"{}\">\n",
            markup(&config.title)
        ));
        out.push_str("  <Table>\n");

        if config.include_header {
            merged_row(ctx, Some(STYLE_TITLE), &config.title, out);
            if !config.subtitle.is_empty() {
                merged_row(ctx, None, &config.subtitle, out);
            }
            if config.include_timestamp {
                merged_row(ctx, None, &format!("Generated: {}", ctx.timestamp), out);
            }
            out.push_str("   <Row/>\n");
        }

        out.push_str("   <Row>\n");
        for name in ctx.column_names() {
            out.push_str(&format!(
                "    <Cell ss:StyleID=\"{}\"><Data ss:Type=\"String\">{}</Data></Cell>\n",
                STYLE_HEADER,
                markup(name)
            ));
        }
        out.push_str("   </Row>\n");
    }

    fn encode_row(&self, ctx: &EncodeContext<'_>, row: usize, out: &mut String) {
        out.push_str("   <Row>\n");
        for &col in ctx.columns {
            out.push_str(&data_cell(&ctx.source.value(row, col)));
        }
        out.push_str("   </Row>\n");
    }

    fn encode_footer(&self, _ctx: &EncodeContext<'_>, out: &mut String) {
        out.push_str("  </Table>\n");
        out.push_str(" </Worksheet>\n");
        out.push_str("</Workbook>\n");
    }
}
