//! Plain-text rendering of an exported report
//!
//! Page one carries the scenario inputs and the current/adjusted figures.
//! A second page holds the advisory text when there is any.

use cfo_types::{ReportRecord, ScenarioMetrics};
use std::fmt;

/// Column width used when wrapping advisory text
pub const WRAP_WIDTH: usize = 80;

pub const REPORT_TITLE: &str = "CFO Helper Agent - Financial Report";
pub const ADVISORY_HEADING: &str = "AI Analysis & Recommendations:";

/// One page of a rendered report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub number: usize,
    pub lines: Vec<String>,
}

impl fmt::Display for ReportPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Page {} ---", self.number)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render `record` into pages
pub fn render_report(record: &ReportRecord) -> Vec<ReportPage> {
    let data = &record.scenario_data;
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!("Generated on: {}", record.timestamp.format("%Y-%m-%d")),
        format!("Export ID: {}", record.export_id),
        String::new(),
        "Scenario Inputs:".to_string(),
        format!("  • Additional Hiring: {} employees", data.changes.hiring),
        format!(
            "  • Marketing Spend Change: ₹{}",
            format_amount(data.changes.marketing_spend_delta)
        ),
        format!("  • Price Change: {}%", data.changes.price_change_percent),
        String::new(),
        "Financial Impact:".to_string(),
    ];
    push_metrics(&mut lines, "Current Scenario:", &data.current);
    push_metrics(&mut lines, "Adjusted Scenario:", &data.adjusted);

    let mut pages = vec![ReportPage { number: 1, lines }];

    if let Some(summary) = record.ai_summary.as_deref().filter(|s| !s.trim().is_empty()) {
        let mut lines = vec![ADVISORY_HEADING.to_string(), String::new()];
        lines.extend(wrap_text(summary, WRAP_WIDTH));
        pages.push(ReportPage { number: 2, lines });
    }

    pages
}

/// All pages joined with form feeds, ready to write to a file
pub fn render_report_text(record: &ReportRecord) -> String {
    render_report(record)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\u{c}\n")
}

fn push_metrics(lines: &mut Vec<String>, heading: &str, metrics: &ScenarioMetrics) {
    lines.push(format!("  {heading}"));
    lines.push(format!("    • Revenue: ₹{}", format_amount(metrics.revenue)));
    lines.push(format!("    • Expenses: ₹{}", format_amount(metrics.expenses)));
    lines.push(format!("    • Runway: {} months", metrics.runway_months));
}

/// Group thousands with commas, keeping up to two decimals
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match cents {
        0 => format!("{sign}{grouped}"),
        c if c % 10 == 0 => format!("{sign}{grouped}.{}", c / 10),
        c => format!("{sign}{grouped}.{c:02}"),
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::compute_scenario;
    use cfo_types::{FinancialSnapshot, ScenarioInput};
    use chrono::Utc;

    fn record(ai_summary: Option<&str>) -> ReportRecord {
        let comparison = compute_scenario(
            &FinancialSnapshot::mock(),
            &ScenarioInput {
                hiring_delta: 2,
                marketing_spend: 20_000.0,
                price_change_percent: 10.0,
            },
        )
        .unwrap();
        ReportRecord {
            timestamp: Utc::now(),
            scenario_data: comparison,
            ai_summary: ai_summary.map(str::to_string),
            export_id: "CFO-1700000000000".to_string(),
        }
    }

    #[test]
    fn test_single_page_without_summary() {
        let pages = render_report(&record(None));
        assert_eq!(pages.len(), 1);
        let lines = &pages[0].lines;
        assert_eq!(lines[0], REPORT_TITLE);
        assert!(lines.contains(&"  • Additional Hiring: 2 employees".to_string()));
        assert!(lines.contains(&"  • Marketing Spend Change: ₹5,000".to_string()));
        assert!(lines.contains(&"  • Price Change: 10%".to_string()));
        assert!(lines.contains(&"    • Revenue: ₹110,000".to_string()));
        assert!(lines.contains(&"    • Runway: 3.5 months".to_string()));
        assert!(lines.contains(&"    • Runway: 4.3 months".to_string()));
    }

    #[test]
    fn test_blank_summary_adds_no_page() {
        assert_eq!(render_report(&record(Some("   "))).len(), 1);
    }

    #[test]
    fn test_summary_goes_to_wrapped_second_page() {
        let summary = "Keep a close eye on burn. ".repeat(20);
        let pages = render_report(&record(Some(&summary)));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].lines[0], ADVISORY_HEADING);
        assert!(pages[1].lines.len() > 3);
        assert!(pages[1].lines.iter().all(|l| l.chars().count() <= WRAP_WIDTH));

        let text = render_report_text(&record(Some(&summary)));
        assert!(text.contains("--- Page 1 ---"));
        assert!(text.contains("\u{c}\n--- Page 2 ---"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(-20_000.0), "-20,000");
        assert_eq!(format_amount(1_500.5), "1,500.5");
        assert_eq!(format_amount(12.34), "12.34");
    }

    #[test]
    fn test_wrap_text_keeps_long_words() {
        let lines = wrap_text("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
        assert_eq!(wrap_text("one two three", 80), vec!["one two three"]);
    }
}
