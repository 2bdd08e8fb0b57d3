//! Table rendering using comfy-table

use crate::config::theme::Colors;
use crate::config::{Messages, Theme};
use crate::models::AnalysisResult;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

fn table_color(hex: &str) -> Color {
    let (r, g, b) = Colors::hex_to_rgb(hex);
    Color::Rgb { r, g, b }
}

fn new_table(headers: &[&str], theme: &Theme) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent, default to 120 if detection fails
    let width = crossterm::terminal::size()
        .map(|(cols, _)| cols)
        .unwrap_or(120)
        .saturating_sub(4);
    table.set_width(width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            Cell::new(h)
                .add_attribute(Attribute::Bold)
                .fg(table_color(&theme.colors.highlight))
        })
        .collect();
    table.set_header(header_cells);
    table
}

/// Signed weight for display; zero carries no sign
pub fn format_weight(weight: i8) -> String {
    if weight == 0 {
        "0".to_string()
    } else {
        format!("{:+}", weight)
    }
}

fn indent(table: &Table) -> String {
    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// Format the per-word weights as a two-column table, rows coloured by sign
pub fn format_word_table(result: &AnalysisResult, theme: &Theme, messages: &Messages) -> String {
    let mut table = new_table(
        &[messages.results.word_header.as_str(), messages.results.weight_header.as_str()],
        theme,
    );

    for ws in &result.word_scores {
        let color = table_color(theme.weight_color(ws.weight));
        table.add_row(vec![
            Cell::new(&ws.word).fg(color),
            Cell::new(format_weight(ws.weight)).fg(color),
        ]);
    }

    indent(&table)
}

/// Format lexicon entries as a table
pub fn format_lexicon_table(
    entries: &[(&str, i8)],
    theme: &Theme,
    messages: &Messages,
) -> String {
    let mut table = new_table(
        &[messages.results.word_header.as_str(), messages.results.weight_header.as_str()],
        theme,
    );

    for (word, weight) in entries {
        let color = table_color(theme.weight_color(*weight));
        table.add_row(vec![
            Cell::new(word).fg(color),
            Cell::new(format_weight(*weight)).fg(color),
        ]);
    }

    indent(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer;

    #[test]
    fn test_word_table_keeps_token_order() {
        let result = scorer::analyze("плохой день, отличный вечер");
        let table = format_word_table(&result, &Theme::default(), &Messages::default());

        let bad = table.find("плохой").unwrap();
        let day = table.find("день").unwrap();
        let great = table.find("отличный").unwrap();
        assert!(bad < day && day < great);
        assert!(table.contains("Слово"));
        assert!(table.contains("+1"));
        assert!(table.contains("-1"));
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(1), "+1");
        assert_eq!(format_weight(-1), "-1");
        assert_eq!(format_weight(0), "0");
    }

    #[test]
    fn test_zero_weight_row_has_no_sign() {
        let result = scorer::analyze("погода");
        let table = format_word_table(&result, &Theme::default(), &Messages::default());
        assert!(table.contains("погода"));
        assert!(!table.contains("+0"));
    }

    #[test]
    fn test_lexicon_table_lists_all_entries() {
        let entries = vec![("хороший", 1i8), ("плохой", -1i8)];
        let table = format_lexicon_table(&entries, &Theme::default(), &Messages::default());
        assert!(table.contains("хороший"));
        assert!(table.contains("плохой"));
    }
}
