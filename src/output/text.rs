//! Terminal rendering of a dashboard view.
//!
//! This is the only place quantities are rounded (2 decimals).

use crate::aggregator::metrics::GroupTotal;
use crate::aggregator::view::DashboardView;

const LABEL_WIDTH: usize = 32;
const VALUE_WIDTH: usize = 14;

/// Render statistics, group sums, top records and the diameter table
///
/// **Public** - used by the summary command
pub fn render_text_summary(view: &DashboardView) -> String {
    let mut lines = Vec::new();

    let Some(stats) = &view.statistics else {
        lines.push("  No data matches the selected filters.".to_string());
        return lines.join("\n");
    };

    lines.push("  📊 STATISTICS".to_string());
    lines.push(top_border(2));
    lines.push(row("Total weight (kg)", &format!("{:.2}", stats.total_kg)));
    lines.push(row("Mean weight (kg)", &format!("{:.2}", stats.mean_kg)));
    lines.push(row("Max weight (kg)", &format!("{:.2}", stats.max_kg)));
    lines.push(row("Min weight (kg)", &format!("{:.2}", stats.min_kg)));
    lines.push(row("Rows", &stats.count.to_string()));
    lines.push(row("Elements", &stats.distinct_categories.to_string()));
    lines.push(row("Floors", &stats.distinct_floors.to_string()));
    lines.push(row("Diameters", &stats.distinct_diameters.to_string()));
    lines.push(bottom_border(2));

    push_group_table(&mut lines, "BY ELEMENT", &view.by_category);
    push_group_table(&mut lines, "BY FLOOR", &view.by_floor);
    push_group_table(&mut lines, "BY DIAMETER", &view.by_diameter);

    if !view.category_shares.is_empty() {
        lines.push(String::new());
        lines.push("  🥧 SHARE BY ELEMENT".to_string());
        for share in &view.category_shares {
            let bar_len = (share.percentage / 2.0).round() as usize;
            lines.push(format!(
                "  {:<12} {:<50} {:>6.1}%",
                share.category.label(),
                "█".repeat(bar_len),
                share.percentage
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("  🏆 TOP {} COMBINATIONS", view.top_records.len()));
    lines.push(top_border(4));
    lines.push(format!(
        "  ┃ {:<12} ┃ {:<w$} ┃ {:>8} ┃ {:>v$} ┃",
        "Element",
        "Floor",
        "Ø (mm)",
        "Weight (kg)",
        w = LABEL_WIDTH,
        v = VALUE_WIDTH
    ));
    for record in &view.top_records {
        lines.push(format!(
            "  ┃ {:<12} ┃ {:<w$} ┃ {:>8} ┃ {:>v$.2} ┃",
            record.element_category.label(),
            truncate(&record.floor_label, LABEL_WIDTH),
            record.diameter_mm,
            record.quantity_kg,
            w = LABEL_WIDTH,
            v = VALUE_WIDTH
        ));
    }
    lines.push(bottom_border(4));

    lines.push(String::new());
    lines.push("  📐 SUMMARY BY DIAMETER".to_string());
    lines.push(top_border(4));
    lines.push(format!(
        "  ┃ {:<12} ┃ {:>w$} ┃ {:>8} ┃ {:>v$} ┃",
        "Ø (mm)",
        "Total (kg)",
        "Count",
        "Mean (kg)",
        w = LABEL_WIDTH,
        v = VALUE_WIDTH
    ));
    for summary in &view.diameter_summary {
        lines.push(format!(
            "  ┃ {:<12} ┃ {:>w$.2} ┃ {:>8} ┃ {:>v$.2} ┃",
            summary.diameter_mm,
            summary.total_kg,
            summary.count,
            summary.mean_kg,
            w = LABEL_WIDTH,
            v = VALUE_WIDTH
        ));
    }
    lines.push(bottom_border(4));

    lines.join("\n")
}

fn push_group_table(lines: &mut Vec<String>, title: &str, totals: &[GroupTotal]) {
    lines.push(String::new());
    lines.push(format!("  {title}"));
    lines.push(top_border(2));
    for total in totals {
        lines.push(row(&total.key.to_string(), &format!("{:.2}", total.total_kg)));
    }
    lines.push(bottom_border(2));
}

fn row(label: &str, value: &str) -> String {
    format!(
        "  ┃ {:<w$} ┃ {:>v$} ┃",
        truncate(label, LABEL_WIDTH),
        value,
        w = LABEL_WIDTH,
        v = VALUE_WIDTH
    )
}

/// Column widths for 2-column (label, value) and 4-column tables
fn widths(columns: usize) -> Vec<usize> {
    if columns == 4 {
        vec![12, LABEL_WIDTH, 8, VALUE_WIDTH]
    } else {
        vec![LABEL_WIDTH, VALUE_WIDTH]
    }
}

fn top_border(columns: usize) -> String {
    border(columns, '┏', '┳', '┓')
}

fn bottom_border(columns: usize) -> String {
    border(columns, '┗', '┻', '┛')
}

fn border(columns: usize, left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths(columns)
        .into_iter()
        .map(|w| "━".repeat(w + 2))
        .collect();
    format!("  {left}{}{right}", segments.join(&mid.to_string()))
}

/// Shorten long labels, counting characters rather than bytes
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let tail: String = text
        .chars()
        .rev()
        .take(max - 3)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{build_view, FilterSpec, ViewOptions};
    use crate::parser::schema::{Category, Dataset, Record};

    #[test]
    fn test_render_rounds_to_two_decimals() {
        let dataset = Dataset::from_records(vec![
            Record::new(Category::Columns, "Piano 1", 12, 3.456),
            Record::new(Category::Beams, "Piano 2", 16, 10.0),
        ]);
        let view = build_view(&dataset, &FilterSpec::new(), &ViewOptions::default());
        let text = render_text_summary(&view);

        assert!(text.contains("13.46"));
        assert!(text.contains("PILASTRI"));
        assert!(text.contains("ø16"));
    }

    #[test]
    fn test_render_no_data() {
        let view = build_view(&Dataset::empty(), &FilterSpec::new(), &ViewOptions::default());
        assert!(render_text_summary(&view).contains("No data"));
    }

    #[test]
    fn test_truncate_multibyte() {
        let label = "è".repeat(40);
        let short = truncate(&label, 10);
        assert_eq!(short.chars().count(), 10);
        assert!(short.starts_with("..."));
    }
}
