//! Results display widget
//!
//! Shows the coloured summary line and the per-word weights table.

use crate::config::theme::Colors;
use crate::config::{Messages, Theme};
use crate::models::AnalysisResult;
use crate::output::{format_weight, summary_text};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Table, Widget, Wrap,
    },
};

/// Results widget state
#[derive(Debug, Default)]
pub struct ResultsState {
    pub scroll_offset: usize,
    pub content_height: usize,
}

impl ResultsState {
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.content_height.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}

/// Results widget
pub struct ResultsWidget<'a> {
    result: Option<&'a AnalysisResult>,
    theme: &'a Theme,
    messages: &'a Messages,
    precision: usize,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(
        result: Option<&'a AnalysisResult>,
        theme: &'a Theme,
        messages: &'a Messages,
        precision: usize,
    ) -> Self {
        Self {
            result,
            theme,
            messages,
            precision,
        }
    }
}

impl StatefulWidget for ResultsWidget<'_> {
    type State = ResultsState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::tui_color(&self.theme.colors.border)))
            .title(format!(" {} ", self.messages.results.title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(result) = self.result else {
            state.content_height = 0;
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        self.render_summary(result, chunks[0], buf);
        self.render_word_table(result, chunks[1], buf, state);
    }
}

impl ResultsWidget<'_> {
    fn render_summary(&self, result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
        let style = self.theme.sentiment_style(result.sentiment);
        let text = summary_text(result, self.theme, self.messages, self.precision);

        let line = Line::from(Span::styled(
            text,
            Style::default()
                .fg(style.tui_color())
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_word_table(
        &self,
        result: &AnalysisResult,
        area: Rect,
        buf: &mut Buffer,
        state: &mut ResultsState,
    ) {
        state.content_height = result.word_scores.len();

        if result.is_empty() {
            Paragraph::new(Span::styled(
                self.messages.results.no_tokens.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .render(area, buf);
            return;
        }

        let header = Row::new(vec![
            Cell::from(self.messages.results.word_header.as_str()),
            Cell::from(self.messages.results.weight_header.as_str()),
        ])
        .style(
            Style::default()
                .fg(Colors::tui_color(&self.theme.colors.highlight))
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = result
            .word_scores
            .iter()
            .skip(state.scroll_offset)
            .map(|ws| {
                let color = Colors::tui_color(self.theme.weight_color(ws.weight));
                Row::new(vec![
                    Cell::from(ws.word.as_str()),
                    Cell::from(format_weight(ws.weight)),
                ])
                .style(Style::default().fg(color))
            })
            .collect();

        let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(6)])
            .header(header)
            .column_spacing(2);
        Widget::render(table, area, buf);

        // One header row, the rest are data rows
        let visible = area.height.saturating_sub(1) as usize;
        if state.content_height > visible {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state =
                ScrollbarState::new(state.content_height).position(state.scroll_offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_summary_and_rows() {
        let theme = Theme::default();
        let messages = Messages::default();
        let result = scorer::analyze("отличный день");
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        let mut state = ResultsState::default();

        ResultsWidget::new(Some(&result), &theme, &messages, 2).render(area, &mut buf, &mut state);

        let text = buffer_text(&buf);
        assert!(text.contains("Положительный"));
        assert!(text.contains("отличный"));
        assert!(text.contains("+1"));
        assert!(!text.contains("+0"));
        assert_eq!(state.content_height, 2);
    }

    #[test]
    fn test_empty_panel() {
        let theme = Theme::default();
        let messages = Messages::default();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        let mut state = ResultsState {
            scroll_offset: 3,
            content_height: 5,
        };

        ResultsWidget::new(None, &theme, &messages, 2).render(area, &mut buf, &mut state);
        assert_eq!(state.content_height, 0);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = ResultsState {
            scroll_offset: 0,
            content_height: 3,
        };
        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 2);
        state.scroll_up(5);
        assert_eq!(state.scroll_offset, 0);
    }
}
