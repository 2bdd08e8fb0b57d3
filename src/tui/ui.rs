//! Main UI rendering

use crate::config::theme::Colors;
use crate::tui::app::{App, Dialog};
use crate::tui::widgets::{render_text_area, HeaderBar, ResultsWidget, StatusBar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                            // Header
            Constraint::Length(app.settings.ui.input_height), // Input
            Constraint::Length(1),                            // Trigger
            Constraint::Min(5),                               // Results
            Constraint::Length(2),                            // Status bar
        ])
        .split(size);

    let header = HeaderBar::new(&app.messages.header.app_name, VERSION)
        .with_engine(app.engine_name());
    f.render_widget(header, chunks[0]);

    render_text_area(
        chunks[1],
        f.buffer_mut(),
        &mut app.input,
        &app.messages.input.prompt,
        &app.messages.input.placeholder,
    );

    render_trigger(f, chunks[2], app);

    if app.busy {
        render_loading(f, chunks[3], app);
    } else {
        let results = ResultsWidget::new(
            app.results.as_ref(),
            &app.theme,
            &app.messages,
            app.settings.ui.score_precision,
        );
        f.render_stateful_widget(results, chunks[3], &mut app.results_state);
    }

    let hints = if app.has_dialog() {
        &app.messages.hints.dialog
    } else if app.busy {
        &app.messages.hints.analyzing
    } else {
        &app.messages.hints.editing
    };
    f.render_widget(StatusBar::new(hints), chunks[4]);

    if let Some(dialog) = &app.dialog {
        render_dialog(f, size, app, dialog);
    }
}

fn render_trigger(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::tui_color(&app.theme.colors.primary))
            .add_modifier(Modifier::BOLD)
    };

    let line = Line::from(Span::styled(
        format!(" {} ", app.messages.input.button),
        style,
    ));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", app.messages.results.title));

    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(&app.spinner, inner);
}

fn render_dialog(f: &mut Frame, area: Rect, app: &App, dialog: &Dialog) {
    let (message, icon, color) = match dialog {
        Dialog::Warning(msg) => (
            msg.as_str(),
            app.theme.icons.warning.as_str(),
            Colors::tui_color(&app.theme.colors.warning),
        ),
        Dialog::Error(msg) => (
            msg.as_str(),
            app.theme.icons.error.as_str(),
            Colors::tui_color(&app.theme.colors.negative),
        ),
    };

    let dialog_width = 60.min(area.width.saturating_sub(4));
    let dialog_height = 8.min(area.height.saturating_sub(4));

    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", app.messages.errors.title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let inner = block.inner(dialog_area);

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", icon), Style::default().fg(color)),
            Span::raw(message),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.messages.errors.dismiss),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });

    f.render_widget(block, dialog_area);
    f.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Messages, Settings, Theme};
    use crate::scorer::LexiconScorer;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            Arc::new(LexiconScorer::new()),
            Settings::default(),
            Theme::default(),
            Messages::default(),
        )
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draws_main_view() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("Анализатор тональности"));
        assert!(text.contains("Анализировать"));
    }

    #[test]
    fn test_draws_warning_dialog() {
        let mut app = app();
        app.begin_analysis();
        let text = screen(&mut app);
        assert!(text.contains("Пожалуйста, введите текст для анализа"));
    }

    #[test]
    fn test_draws_results() {
        let mut app = app();
        app.input.set_text("прекрасный день");
        let request = app.begin_analysis().expect("request");
        app.handle_analysis_complete(request.id, crate::scorer::analyze(&request.text));
        let text = screen(&mut app);
        assert!(text.contains("прекрасный"));
        assert!(text.contains("Положительный"));
    }
}
