use crate::tui::app::{App, Mode, View};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(10),   // Info / Results
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_input(f, app, chunks[0]);
    draw_main_area(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match app.mode {
        Mode::Query => (
            " Query (:N page, .word scan, word lookup | F5: rebuild, Esc: quit) ",
            app.query.as_str(),
        ),
        Mode::Rebuild => (
            " New page size (Enter: rebuild, Esc: cancel) ",
            app.page_size_input.as_str(),
        ),
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(input, area);
    f.set_cursor_position((area.x + text.len() as u16 + 1, area.y + 1));
}

fn draw_main_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_info_column(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
}

fn draw_info_column(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(5)])
        .split(area);

    draw_build_info(f, app, chunks[0]);
    draw_edge_pages(f, app, chunks[1]);
}

fn draw_build_info(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let store = app.session.store();

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        info_line("Words", stats.word_count.to_string(), label),
        info_line("Page size", store.page_size().to_string(), label),
        info_line("Pages", store.page_count().to_string(), label),
        info_line("Bucket capacity", stats.bucket_capacity.to_string(), label),
        info_line("Primary buckets", stats.bucket_count.to_string(), label),
        info_line(
            "Collisions",
            format!("{} ({:.2}%)", stats.collisions, stats.collision_rate() * 100.0),
            label,
        ),
        info_line(
            "Overflows",
            format!("{} ({:.2}%)", stats.overflows, stats.overflow_rate() * 100.0),
            label,
        ),
    ];

    let info = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Build "));
    f.render_widget(info, area);
}

fn info_line(name: &str, value: String, label: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:16}", name), label),
        Span::raw(value),
    ])
}

fn draw_edge_pages(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let store = app.session.store();
    let page_count = store.page_count();

    draw_page_panel(f, " First page (0) ", store.page(0), chunks[0]);
    let last = page_count.saturating_sub(1) as u32;
    draw_page_panel(
        f,
        &format!(" Last page ({}) ", last),
        store.page(last),
        chunks[1],
    );
}

fn draw_page_panel(f: &mut Frame, title: &str, words: Option<&[String]>, area: Rect) {
    let content = match words {
        Some(words) => Text::from(
            words
                .iter()
                .map(|w| Line::raw(w.clone()))
                .collect::<Vec<_>>(),
        ),
        None => Text::raw("(empty)"),
    };

    let panel = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let strategy_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let hit_style = Style::default().fg(Color::Green);
    let miss_style = Style::default().fg(Color::Red);

    let content = match &app.view {
        View::Empty => Text::raw("Type a word and press Enter to compare both strategies."),
        View::Page { id, words } => match words {
            Some(words) => {
                let mut lines = vec![Line::styled(format!("page {}", id), strategy_style)];
                lines.extend(words.iter().map(|w| Line::raw(format!("  {}", w))));
                Text::from(lines)
            }
            None => Text::styled(format!("page {} does not exist", id), miss_style),
        },
        View::Lookups {
            word,
            lookups,
            page_words,
        } => {
            let mut lines = Vec::new();
            for lookup in lookups {
                lines.push(Line::styled(lookup.strategy.label().to_string(), strategy_style));
                match lookup.page {
                    Some(page) => lines.push(Line::from(vec![
                        Span::styled(format!("  found \"{}\" in page {}", word, page), hit_style),
                        Span::raw(format!(
                            " ({} accesses, {:?})",
                            lookup.accesses, lookup.elapsed
                        )),
                    ])),
                    None => lines.push(Line::from(vec![
                        Span::styled(format!("  \"{}\" not found", word), miss_style),
                        Span::raw(format!(
                            " ({} accesses, {:?})",
                            lookup.accesses, lookup.elapsed
                        )),
                    ])),
                }
                lines.push(Line::raw(""));
            }

            if let Some(words) = page_words {
                lines.push(Line::styled(
                    "page contents:".to_string(),
                    Style::default().fg(Color::Cyan),
                ));
                lines.push(Line::raw(format!("  {}", words.join(" "))));
            }
            Text::from(lines)
        }
    };

    let results = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(" Results "))
        .wrap(Wrap { trim: false });
    f.render_widget(results, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.status_message.is_empty() {
        Line::styled(
            "Ctrl+C: quit | F5: rebuild with a new page size",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::styled(app.status_message.clone(), Style::default().fg(Color::Yellow))
    };
    f.render_widget(Paragraph::new(status), area);
}
