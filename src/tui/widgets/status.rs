//! Header, status bar and spinner widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar showing context-sensitive key hints.
///
/// Hints are written as "Key: Action" pairs separated by " │ ".
pub struct StatusBar<'a> {
    hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { hints }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];

        for (i, hint) in self.hints.split(" │ ").enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            }
            match hint.split_once(": ") {
                Some((key, action)) => {
                    spans.push(Span::styled(
                        format!(" {} ", key),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(action, Style::default().fg(Color::White)));
                }
                None => spans.push(Span::styled(hint, Style::default().fg(Color::White))),
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

/// Header bar with title, version and engine name
pub struct HeaderBar<'a> {
    title: &'a str,
    version: &'a str,
    engine: Option<&'a str>,
}

impl<'a> HeaderBar<'a> {
    pub fn new(title: &'a str, version: &'a str) -> Self {
        Self {
            title,
            version,
            engine: None,
        }
    }

    pub fn with_engine(mut self, engine: &'a str) -> Self {
        self.engine = Some(engine);
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                format!("  {} ", self.title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("v{}", self.version), Style::default().fg(Color::DarkGray)),
        ];

        if let Some(engine) = self.engine {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                engine,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

/// Loading spinner animation
#[derive(Debug, Clone)]
pub struct LoadingSpinner {
    frame: usize,
    frames: Vec<String>,
    message: String,
}

impl LoadingSpinner {
    pub fn new(frames: &[String], message: &str) -> Self {
        let frames = if frames.is_empty() {
            vec!["*".to_string()]
        } else {
            frames.to_vec()
        };
        Self {
            frame: 0,
            frames,
            message: message.to_string(),
        }
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % self.frames.len();
    }

    /// Get the current spinner frame
    pub fn current_frame(&self) -> &str {
        &self.frames[self.frame]
    }

    /// Get the loading message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Widget for &LoadingSpinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.current_frame(), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(self.message.as_str(), Style::default().fg(Color::White)),
        ]);

        // Center the loading message
        let width = line.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;

        if y < area.y + area.height && x < area.x + area.width {
            buf.set_line(x, y, &line, area.width);
        }
    }
}
