//! Multi-line text entry widget
//!
//! Cursor positions are counted in chars, not bytes, so Cyrillic input edits
//! cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text area state
#[derive(Debug, Clone)]
pub struct TextAreaState {
    /// One entry per line, never empty
    lines: Vec<String>,
    /// Cursor line index
    pub row: usize,
    /// Cursor position within the line, in chars
    pub col: usize,
    /// First visible line
    pub scroll: usize,
    /// First visible column, in chars
    pub hscroll: usize,
    /// Whether input is focused
    pub focused: bool,
    /// Whether the input accepts edits
    pub enabled: bool,
}

impl Default for TextAreaState {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            scroll: 0,
            hscroll: 0,
            focused: true,
            enabled: true,
        }
    }
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl TextAreaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.row = self.lines.len() - 1;
        self.col = char_len(&self.lines[self.row]);
        self.scroll = 0;
        self.hscroll = 0;
    }

    /// Full text, lines joined with '\n'
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// True when the content is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn insert(&mut self, c: char) {
        if !self.enabled {
            return;
        }
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        line.insert(at, c);
        self.col += 1;
    }

    pub fn newline(&mut self) {
        if !self.enabled {
            return;
        }
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        let rest = line.split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn delete_backward(&mut self) {
        if !self.enabled {
            return;
        }
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col - 1);
            line.remove(at);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
    }

    pub fn delete_forward(&mut self) {
        if !self.enabled {
            return;
        }
        let len = char_len(&self.lines[self.row]);
        if self.col < len {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col);
            line.remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_len(&self.lines[self.row]);
    }

    pub fn clear(&mut self) {
        *self = Self {
            focused: self.focused,
            enabled: self.enabled,
            ..Self::default()
        };
    }

    /// Keep the cursor inside a viewport of `height` lines by `width` columns.
    /// The cursor cell itself must fit, so at most `width - 1` chars precede it.
    fn scroll_to_cursor(&mut self, height: usize, width: usize) {
        if height > 0 {
            if self.row < self.scroll {
                self.scroll = self.row;
            } else if self.row >= self.scroll + height {
                self.scroll = self.row + 1 - height;
            }
        }
        if width > 0 {
            if self.col < self.hscroll {
                self.hscroll = self.col;
            } else if self.col >= self.hscroll + width {
                self.hscroll = self.col + 1 - width;
            }
        }
    }
}

/// Render the text area with its prompt as the block title
pub fn render_text_area(
    area: Rect,
    buf: &mut Buffer,
    state: &mut TextAreaState,
    prompt: &str,
    placeholder: &str,
) {
    let border_color = if !state.enabled {
        Color::DarkGray
    } else if state.focused {
        Color::Cyan
    } else {
        Color::Gray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", prompt),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    state.scroll_to_cursor(inner.height as usize, inner.width as usize);

    let value_style = if state.enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let show_cursor = state.focused && state.enabled;

    let lines: Vec<Line> = if state.is_empty() {
        let mut spans = vec![];
        if show_cursor {
            spans.push(Span::styled(" ", cursor_style));
        }
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        vec![Line::from(spans)]
    } else {
        state
            .lines
            .iter()
            .enumerate()
            .skip(state.scroll)
            .map(|(i, line)| {
                let line = &line[byte_index(line, state.hscroll)..];
                if show_cursor && i == state.row {
                    let at = byte_index(line, state.col.saturating_sub(state.hscroll));
                    let (before, after) = line.split_at(at);
                    let mut rest = after.chars();
                    let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
                    Line::from(vec![
                        Span::styled(before, value_style),
                        Span::styled(cursor_char, cursor_style),
                        Span::styled(rest.as_str(), value_style),
                    ])
                } else {
                    Line::from(Span::styled(line, value_style))
                }
            })
            .collect()
    };

    Paragraph::new(lines).block(block).render(area, buf);
}
