//! Rendering of the browser state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::application::browser::{BrowserState, InputField};
use crate::domain::COLUMN_TITLES;

const HELP: &str =
    " [Tab] next input  [Enter] apply  [r] reload  [←/h] prev page  [→/l] next page  [q] quit ";

const COLUMN_WIDTHS: [Constraint; 8] = [
    Constraint::Length(12),
    Constraint::Length(9),
    Constraint::Length(6),
    Constraint::Min(20),
    Constraint::Length(10),
    Constraint::Length(14),
    Constraint::Length(10),
    Constraint::Length(12),
];

pub fn draw(f: &mut Frame, state: &BrowserState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_inputs(f, chunks[0], state);
    render_page_indicator(f, chunks[1], state);
    render_table(f, chunks[2], state);
    f.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
    render_status(f, chunks[4], state);
}

fn render_inputs(f: &mut Frame, area: Rect, state: &BrowserState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    for (field, cell) in InputField::ALL.into_iter().zip(cells.iter()) {
        let focused = field == state.focus();
        let border = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let input = state.input(field);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(field.label());
        f.render_widget(Paragraph::new(input.value()).block(block), *cell);

        if focused {
            let x = cell.x + 1 + input.cursor() as u16;
            let max_x = cell.x + cell.width.saturating_sub(2);
            f.set_cursor_position(Position::new(x.min(max_x), cell.y + 1));
        }
    }
}

fn render_page_indicator(f: &mut Frame, area: Rect, state: &BrowserState) {
    let mut spans = vec![Span::styled(
        format!(" {} ", state.page_indicator()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if !state.filter_text().is_empty() {
        spans.push(Span::raw(format!(
            " filter \"{}\": {} of {} rows",
            state.filter_text(),
            state.filtered_rows().len(),
            state.all_rows().len()
        )));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(f: &mut Frame, area: Rect, state: &BrowserState) {
    let header = Row::new(COLUMN_TITLES)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let rows = state.visible_rows().iter().map(|row| Row::new(row.cells()));

    let title = format!(
        " Top {} by volume / top {} by change ",
        state.top_volume(),
        state.top_change()
    );
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}

fn render_status(f: &mut Frame, area: Rect, state: &BrowserState) {
    let mut spans = Vec::new();
    if state.is_loading() {
        spans.push(Span::styled(
            " Loading... ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(" Ready ", Style::default().fg(Color::Black).bg(Color::Green)));
    }

    match state.last_update() {
        Some(at) => spans.push(Span::raw(format!(" Last update: {} ", at.format("%H:%M:%S UTC")))),
        None => spans.push(Span::raw(" No data yet ")),
    }

    if let Some(error) = state.last_error() {
        spans.push(Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::browser::{BrowserEvent, BrowserSettings};
    use crate::domain::{flatten, rank, Timeframe, TokenMetric};
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &BrowserState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 20)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_loading_screen() {
        let state = BrowserState::new(BrowserSettings::default());
        let text = screen(&state);

        assert!(text.contains("Top Volume (N)"));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Loading..."));
        assert!(text.contains("No data yet"));
        assert!(text.contains("Symbol"));
    }

    #[test]
    fn test_draw_rows_and_error() {
        let tokens = vec![TokenMetric::new("0xfeed", "WETH", 1234.0, 2.5, 3100.0)];
        let rows = flatten("uniswap", Timeframe::FiveMinutes, &rank(&tokens, 1, 1));
        let (state, _) = BrowserState::new(BrowserSettings::default()).update(
            BrowserEvent::DataLoaded {
                rows,
                loaded_at: Utc::now(),
            },
        );
        let (state, _) = state.update(BrowserEvent::LoadFailed("All 6 fetches failed".into()));

        let text = screen(&state);
        assert!(text.contains("WETH"));
        assert!(text.contains("2.50%"));
        assert!(text.contains("3100.0000"));
        assert!(text.contains("Last update:"));
        assert!(text.contains("All 6 fetches failed"));
    }
}
