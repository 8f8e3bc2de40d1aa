//! Self-contained HTML report encoders.
//!
//! The printable variant (saved as `.pdf`) adds a print button hidden from
//! printed output; otherwise both variants render identically.

use super::encoder::{EncodeContext, Encoder};
use crate::escape::hypertext as esc;
use crate::format::ExportFormat;

pub struct HypertextEncoder {
    pub printable: bool,
}

const STYLE: &str = r#"    <style>
        body { font-family: "Segoe UI", Arial, Helvetica, sans-serif; margin: 2rem; color: #333; }
        .report-header { margin-bottom: 1.5rem; border-bottom: 2px solid #4472C4; padding-bottom: 0.75rem; }
        .report-title { font-size: 1.6rem; font-weight: bold; color: #1F3864; }
        .report-subtitle { font-size: 1.1rem; color: #4472C4; margin-top: 0.25rem; }
        .report-company { font-size: 0.9rem; color: #666; margin-top: 0.5rem; }
        .report-timestamp { font-size: 0.8rem; color: #888; }
        table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
        th { background-color: #4472C4; color: #fff; text-align: left; padding: 6px 8px; }
        td { border-bottom: 1px solid #ddd; padding: 6px 8px; }
        tbody tr:nth-child(even) { background-color: #f2f5fb; }
        .report-footer { margin-top: 1rem; font-size: 0.8rem; color: #666; }
        .print-controls { margin-bottom: 1rem; }
        .print-controls button { padding: 6px 14px; font-size: 0.9rem; cursor: pointer; }
        @media print {
            .no-print { display: none; }
            body { margin: 0; }
            th { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
        }
    </style>
"#;

impl Encoder for HypertextEncoder {
    fn format(&self) -> ExportFormat {
        if self.printable {
            ExportFormat::PrintableHypertext
        } else {
            ExportFormat::PlainHypertext
        }
    }

    fn encode_header(&self, ctx: &EncodeContext<'_>, out: &mut String) {
        let config = ctx.config;

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(&format!("    <title>{}</title>\n", esc(&config.title)));
        out.push_str(STYLE);
        out.push_str("</head>\n<body>\n");

        if self.printable {
            out.push_str("<div class=\"print-controls no-print\">\n");
            out.push_str(
                "    <button type=\"button\" onclick=\"window.print()\">Print / Save as PDF</button>\n",
            );
            out.push_str("</div>\n");
        }

        if config.include_header {
            out.push_str("<div class=\"report-header\">\n");
            out.push_str(&format!(
                "    <div class=\"report-title\">{}</div>\n",
                esc(&config.title)
            ));
            if !config.subtitle.is_empty() {
                out.push_str(&format!(
                    "    <div class=\"report-subtitle\">{}</div>\n",
                    esc(&config.subtitle)
                ));
            }
            out.push_str(&format!(
                "    <div class=\"report-company\">{}</div>\n",
                esc(&ctx.branding.company_name)
            ));
            if config.include_timestamp {
                out.push_str(&format!(
                    "    <div class=\"report-timestamp\">Generated: {}</div>\n",
                    esc(&ctx.timestamp)
                ));
            }
            out.push_str("</div>\n");
        }

        out.push_str("<table>\n<thead>\n<tr>");
        for name in ctx.column_names() {
            out.push_str(&format!("<th>{}</th>", esc(name)));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
    }

    fn encode_row(&self, ctx: &EncodeContext<'_>, row: usize, out: &mut String) {
        out.push_str("<tr>");
        for &col in ctx.columns {
            out.push_str(&format!("<td>{}</td>", esc(&ctx.cell_text(row, col))));
        }
        out.push_str("</tr>\n");
    }

    fn encode_footer(&self, ctx: &EncodeContext<'_>, out: &mut String) {
        out.push_str("</tbody>\n</table>\n");

        if ctx.config.include_footer {
            out.push_str("<div class=\"report-footer\">\n");
            out.push_str(&format!(
                "    <div>Total rows: {}</div>\n",
                ctx.source.row_count()
            ));
            out.push_str(&format!(
                "    <div>Export completed: {}</div>\n",
                esc(&ctx.timestamp)
            ));
            out.push_str("</div>\n");
        }

        out.push_str("</body>\n</html>\n");
    }
}
