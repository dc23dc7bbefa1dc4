//! Human-readable report rendering

use console::Style;
use std::fmt::Write;

use crate::compare::{ComparisonResult, ABSENT_TOKEN};
use crate::error::{CheckerError, CheckerResult};
use crate::report::{DocumentEntry, Report, ReportOptions};

/// Text formatter for comparison reports
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format a report as text
    pub fn format(&self, report: &Report) -> CheckerResult<String> {
        let mut out = String::new();
        self.write_report(report, &mut out)
            .map_err(|e| CheckerError::Other(anyhow::Error::new(e)))?;
        Ok(out)
    }

    fn write_report(&self, report: &Report, out: &mut String) -> std::fmt::Result {
        if report.summary.document_count == 0 {
            writeln!(out, "{}", self.paint("Ready to Compare Balance Files", Style::new().bold()))?;
            writeln!(
                out,
                "Load your balance files to start comparing field differences."
            )?;
            return Ok(());
        }

        self.write_fields(report, out)?;

        if report.summary.active_field_count > 0 {
            writeln!(out)?;
            self.write_comparisons(report, out)?;
        }

        if !report.documents.is_empty() {
            writeln!(out)?;
            self.write_documents(&report.documents, out)?;
        }

        writeln!(out)?;
        self.write_summary(report, out)
    }

    fn write_fields(&self, report: &Report, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            "{} ({} of {} fields active)",
            self.paint("Field Filters", Style::new().bold()),
            report.summary.active_field_count,
            report.summary.field_count
        )?;

        for field in &report.fields {
            if field.ignored {
                writeln!(
                    out,
                    "  {} {}",
                    self.paint("○", Style::new().dim()),
                    self.paint(&format!("{} (ignored)", display_path(&field.path)), Style::new().dim())
                )?;
            } else {
                writeln!(
                    out,
                    "  {} {}",
                    self.paint("●", Style::new().blue()),
                    display_path(&field.path)
                )?;
            }
        }

        Ok(())
    }

    fn write_comparisons(&self, report: &Report, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            "{}",
            self.paint("Field Comparison Results", Style::new().bold())
        )?;

        if report.comparisons.is_empty() {
            writeln!(out, "  No inconsistent fields")?;
        }

        for comparison in &report.comparisons {
            self.write_comparison(comparison, out)?;
        }

        Ok(())
    }

    fn write_comparison(&self, comparison: &ComparisonResult, out: &mut String) -> std::fmt::Result {
        let path = display_path(&comparison.path);

        if comparison.is_consistent {
            write!(
                out,
                "  {} {}: {}",
                self.paint("✓", Style::new().green()),
                path,
                self.paint("Consistent", Style::new().green())
            )?;
            match &comparison.reference {
                Some(reference) => writeln!(out, " {}", display_canonical(reference))?,
                None => writeln!(out)?,
            }
            return Ok(());
        }

        writeln!(
            out,
            "  {} {}: {}",
            self.paint("✗", Style::new().red()),
            path,
            self.paint("Inconsistent", Style::new().red())
        )?;
        for value in &comparison.values {
            let line = format!("Item {}: {}", value.index, display_canonical(&value.canonical));
            if comparison.failing_items.contains(&value.index) {
                writeln!(out, "      {}", self.paint(&line, Style::new().red()))?;
            } else {
                writeln!(out, "      {}", line)?;
            }
        }

        Ok(())
    }

    fn write_documents(&self, documents: &[DocumentEntry], out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            "{} ({})",
            self.paint("Balance Files", Style::new().bold()),
            documents.len()
        )?;

        for doc in documents {
            writeln!(out, "  {}. {} ({} fields)", doc.position, doc.label, doc.field_count)?;

            if let Some(data) = &doc.data {
                let pretty = serde_json::to_string_pretty(data).map_err(|_| std::fmt::Error)?;
                for line in pretty.lines() {
                    writeln!(out, "     {}", line)?;
                }
            }
        }

        Ok(())
    }

    fn write_summary(&self, report: &Report, out: &mut String) -> std::fmt::Result {
        let summary = &report.summary;
        let verdict = if summary.all_consistent() {
            self.paint("All active fields are consistent", Style::new().green())
        } else {
            self.paint(
                &format!("{} inconsistent field(s)", summary.inconsistent_count),
                Style::new().red(),
            )
        };

        writeln!(
            out,
            "{} ({} consistent, {} documents)",
            verdict, summary.consistent_count, summary.document_count
        )
    }

    fn paint(&self, text: &str, style: Style) -> String {
        style.apply_to(text).force_styling(self.options.color).to_string()
    }
}

/// The root path is the empty string; show it as `(root)`
fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

fn display_canonical(canonical: &str) -> &str {
    if canonical == ABSENT_TOKEN {
        "(absent)"
    } else {
        canonical
    }
}
