//! Widget rendering for the terminal shell.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Key-to-action reference shown in the sidebar.
const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "type"),
    ("+-*/%", "operator"),
    ("Enter", "equals"),
    ("a", "add sample"),
    ("s", "toggle sign"),
    ("m", "statistics"),
    ("Bksp", "backspace"),
    ("c/Esc", "clear"),
    ("q", "quit"),
];

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Top-level UI widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the UI widget over the app state.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.app.pending_symbol() {
            Some(symbol) => format!(" Display (pending {symbol}) "),
            None => " Display ".to_string(),
        };
        let paragraph = Paragraph::new(Span::styled(
            self.app.display(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        paragraph.render(area, buf);
    }

    fn render_log(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .log_lines()
            .into_iter()
            .map(|line| {
                let color = if line.starts_with("Result") {
                    Color::Green
                } else if line.starts_with("Added") {
                    Color::Cyan
                } else {
                    Color::Gray
                };
                ListItem::new(Line::from(Span::styled(line, Style::default().fg(color))))
            })
            .collect();

        let title = format!(" History ({} samples) ", self.app.sample_count());
        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match self.app.status() {
            Some(msg) => (msg, Style::default().fg(Color::Red)),
            None => ("Ready", Style::default().fg(Color::DarkGray)),
        };
        let paragraph = Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        list.render(area, buf);
    }

    fn render_report_popup(&self, report: &str, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area, 30, 14);
        Clear.render(popup, buf);
        let paragraph = Paragraph::new(
            report
                .lines()
                .map(|l| Line::from(l.to_string()))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Statistics (any key to close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        paragraph.render(popup, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" statpad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // display / log / status
                Constraint::Length(22), // keypad
                Constraint::Length(20), // help
            ])
            .split(area);

        if columns.len() < 3 {
            return;
        }

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // display
                Constraint::Min(5),    // log
                Constraint::Length(3), // status
            ])
            .split(columns[0]);

        self.render_display(main[0], buf);
        self.render_log(main[1], buf);
        self.render_status(main[2], buf);
        KeypadWidget::new(self.app.keypad()).render(columns[1], buf);
        self.render_help(columns[2], buf);

        if let Some(report) = self.app.report() {
            self.render_report_popup(report, area, buf);
        }
    }
}

/// A rect of at most `width` x `height`, centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
