use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::app::{ItemsApp, Mode};

pub fn render(frame: &mut Frame, app: &ItemsApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Error
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Items
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_error(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_items(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("CRUD App")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(header, area);
}

fn render_error(frame: &mut Frame, app: &ItemsApp, area: Rect) {
    if let Some(ref error) = app.last_error {
        let line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(line, area);
    }
}

fn render_input(frame: &mut Frame, app: &ItemsApp, area: Rect) {
    let title = format!(" Item Name - Enter: {} ", app.submit_label());
    let border_style = match app.mode {
        Mode::Add => Style::default().fg(Color::Green),
        Mode::Edit { .. } => Style::default().fg(Color::Yellow),
    };

    // Cursor sits inside the border
    let inner_width = usize::from(area.width.saturating_sub(2));
    let (scroll, column) = input_viewport(app.cursor_width(), inner_width);

    let input = Paragraph::new(app.input.as_str())
        .scroll((0, scroll))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
    frame.render_widget(input, area);

    frame.set_cursor_position((area.x + 1 + column, area.y + 1));
}

/// Horizontal scroll offset and cursor column that keep the cursor visible
/// in a field `inner_width` columns wide.
fn input_viewport(cursor_width: usize, inner_width: usize) -> (u16, u16) {
    let last = inner_width.saturating_sub(1);
    let scroll = cursor_width.saturating_sub(last);
    let column = cursor_width - scroll;
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(column).unwrap_or(u16::MAX),
    )
}

fn render_items(frame: &mut Frame, app: &ItemsApp, area: Rect) {
    let editing = match &app.mode {
        Mode::Edit { id } => Some(id.as_str()),
        Mode::Add => None,
    };

    let rows: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| {
            let mut spans = vec![Span::raw(item.name.clone())];
            if editing == Some(item.id.as_str()) {
                spans.push(Span::styled(
                    "  (editing)",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Items ({}) ", app.items.len())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(app.selected_item().map(|_| app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, app: &ItemsApp, area: Rect) {
    let text = if app.pending {
        Span::styled(
            "Waiting for server...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            "Enter submit | ^E edit | ^D delete | ^R reload | Esc quit",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Item;
    use crate::tui::app::Outcome;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &ItemsApp, width: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, 12)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
    }

    fn screen(app: &ItemsApp) -> String {
        draw(app, 70)
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_items_and_error() {
        let mut app = ItemsApp::new();
        app.load();
        app.apply(Outcome::Fetched(Ok(vec![
            Item {
                id: "1".to_string(),
                name: "Milk".to_string(),
            },
            Item {
                id: "2".to_string(),
                name: "Bread".to_string(),
            },
        ])));
        app.reload();
        app.apply(Outcome::Fetched(Err("down".to_string())));

        let text = screen(&app);
        assert!(text.contains("CRUD App"));
        assert!(text.contains("Failed to fetch items"));
        assert!(text.contains("Milk"));
        assert!(text.contains("Bread"));
        assert!(text.contains("Add Item"));
    }

    #[test]
    fn test_edit_mode_label() {
        let mut app = ItemsApp::new();
        app.load();
        app.apply(Outcome::Fetched(Ok(vec![Item {
            id: "1".to_string(),
            name: "Milk".to_string(),
        }])));
        app.edit_selected();

        let text = screen(&app);
        assert!(text.contains("Update Item"));
        assert!(text.contains("(editing)"));
    }

    #[test]
    fn test_input_viewport() {
        assert_eq!(input_viewport(0, 10), (0, 0));
        assert_eq!(input_viewport(9, 10), (0, 9));
        assert_eq!(input_viewport(10, 10), (1, 9));
        assert_eq!(input_viewport(25, 10), (16, 9));
        assert_eq!(input_viewport(3, 0), (3, 0));
    }

    #[test]
    fn test_cursor_follows_wide_chars() {
        let mut app = ItemsApp::new();
        for c in "日本".chars() {
            app.input_char(c);
        }

        let mut terminal = draw(&app, 70);
        // Input box starts on row 2; one column of border before the text
        terminal.backend_mut().assert_cursor_position((5, 3));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let mut app = ItemsApp::new();
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            app.input_char(c);
        }

        // 20 wide terminal leaves 18 columns inside the border
        let mut terminal = draw(&app, 20);
        terminal.backend_mut().assert_cursor_position((18, 3));

        let buffer = terminal.backend().buffer();
        let row: String = (1..19).map(|x| buffer[(x, 3)].symbol()).collect();
        assert!(row.starts_with("jklmnopqrstuvwxyz"));
        assert!(!row.contains('a'));
    }
}
