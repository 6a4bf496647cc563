//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::catalog::SoundRecord;
use crate::config::UiSettings;
use crate::filter::CategoryFilter;
use crate::notify::{Notification, NotificationKind};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter", "play/stop");
    map.insert("s", "stop");
    map.insert("y", "copy link");
    map.insert("/", "search");
    map.insert("tab", "category");
    map.insert("x", "clear filters");
    map.insert("d", "dismiss");
    map.insert("q", "quit");
    map
});

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Render the controls help text in a stable, human-friendly order.
fn controls_text(search_mode: bool) -> String {
    if search_mode {
        return "[type] edit query | [enter] accept | [esc] clear search | [ctrl-j/k] up/down"
            .to_string();
    }
    let order = ["j/k", "gg/G", "enter", "s", "y", "/", "tab", "x", "d", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// "N Assets Available" for the header, singular for one.
fn asset_count_text(n: usize) -> String {
    let noun = if n == 1 { "Asset" } else { "Assets" };
    format!("{n} {noun} Available")
}

fn padded_left() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// The search line plus one tab per category option.
fn filter_bar_line(app: &App) -> Line<'static> {
    let filter = app.filter();
    let mut spans: Vec<Span<'static>> = Vec::new();

    let query = if filter.search_query.is_empty() && !app.search_mode {
        Span::styled("search by name...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(filter.search_query.clone())
    };
    spans.push(Span::raw(" / "));
    spans.push(query);
    if app.search_mode {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    spans.push(Span::raw("   "));

    for option in CategoryFilter::options() {
        let label = format!(" {} ", option.label());
        if option == filter.selected_category {
            spans.push(Span::styled(
                label,
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// One card: marker, title, category badge and duration, then the optional
/// description on a second line.
fn card_item(sound: &SoundRecord, playing: bool, show_description: bool) -> ListItem<'static> {
    let marker = if playing { "▶ " } else { "  " };
    let title_style = if playing {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(sound.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", sound.category),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(sound.duration.clone(), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(sound.filename.clone(), Style::default().fg(Color::DarkGray)),
    ])];

    if show_description && !sound.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", sound.description),
            Style::default().fg(Color::Gray),
        )));
    }

    ListItem::new(lines)
}

fn details_text(app: &App, sound: &SoundRecord) -> String {
    let state = if app.is_playing(&sound.id) {
        "Playing"
    } else {
        "Stopped"
    };
    format!(
        "Title: {}\nCategory: {}\nDuration: {}\nFile: {}\nLink: {}\nBase path: {}\nPreview: {}\n\n{}",
        sound.title,
        sound.category,
        if sound.duration.is_empty() {
            "-"
        } else {
            sound.duration.as_str()
        },
        sound.filename,
        app.url_for(sound),
        app.resolver.base_path(),
        state,
        sound.description,
    )
}

/// Bottom-right stack of toasts inside `area`, oldest on top.
fn toast_areas(count: usize, area: Rect) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let fit = (area.height / TOAST_HEIGHT) as usize;
    let shown = count.min(fit);
    let x = area.x + area.width.saturating_sub(width);
    let bottom = area.y + area.height;

    (0..shown)
        .map(|i| {
            let from_bottom = (shown - i) as u16;
            Rect {
                x,
                y: bottom.saturating_sub(from_bottom * TOAST_HEIGHT),
                width,
                height: TOAST_HEIGHT,
            }
        })
        .collect()
}

fn draw_toast(frame: &mut Frame, toast: &Notification, area: Rect) {
    let (title, color) = match toast.kind {
        NotificationKind::Success => (" ok ", Color::Green),
        NotificationKind::Error => (" error ", Color::Red),
    };
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(toast.message.as_str())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .padding(padded_left())
                .title(title),
        );
    frame.render_widget(paragraph, area);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let mut header_text = format!(
        "{}  •  {}",
        ui_settings.header_text,
        asset_count_text(app.catalog.len())
    );
    if let Some(sound) = app.playback.active_id().and_then(|id| app.catalog.get(id)) {
        header_text.push_str(&format!("  •  ▶ {}", sound.title));
    }
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SonicVault ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Filter bar
    let filter_title = if app.search_mode {
        " search (esc clears) "
    } else if app.filter().is_default() {
        " filter "
    } else {
        " filter (x clears) "
    };
    let filter_bar = Paragraph::new(filter_bar_line(app))
        .block(Block::bordered().title(filter_title));
    frame.render_widget(filter_bar, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    // Card list or empty state
    let list_title = format!(" sounds ({}) ", app.visible_indices().len());
    if app.is_empty_result() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No sounds found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Try adjusting your search or filters."),
            Line::from(""),
            Line::from(Span::styled(
                "[x] clear filters",
                Style::default().fg(Color::Cyan),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(list_title));
        frame.render_widget(empty, body[0]);
    } else {
        let items: Vec<ListItem> = app
            .visible_sounds()
            .into_iter()
            .map(|s| card_item(s, app.is_playing(&s.id), ui_settings.show_descriptions))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(list_title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(app.selected()));
        frame.render_stateful_widget(list, body[0], &mut state);
    }

    // Details pane
    let details = match app.selected_sound() {
        Some(sound) => details_text(app, sound),
        None => "No sound selected".to_string(),
    };
    let details_par = Paragraph::new(details)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" details ")
                .padding(padded_left()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details_par, body[1]);

    // Toasts float over the body, bottom-right.
    if !app.notifications.is_empty() {
        let toasts = app.notifications.entries();
        let areas = toast_areas(app.notifications.len(), chunks[2]);
        // When the stack does not fit, keep the newest ones.
        let skip = toasts.len() - areas.len();
        for (toast, area) in toasts[skip..].iter().zip(areas) {
            draw_toast(frame, toast, area);
        }
    }

    let footer = Paragraph::new(controls_text(app.search_mode))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(padded_left()),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_count_is_singular_only_for_one() {
        assert_eq!(asset_count_text(7), "7 Assets Available");
        assert_eq!(asset_count_text(1), "1 Asset Available");
        assert_eq!(asset_count_text(0), "0 Assets Available");
    }

    #[test]
    fn controls_follow_fixed_order() {
        let text = controls_text(false);
        assert!(text.starts_with("[j/k] up/down | [gg/G] top/bottom"));
        assert!(text.ends_with("[q] quit"));
        assert!(controls_text(true).contains("[esc] clear search"));
    }

    #[test]
    fn toasts_stack_from_bottom_right() {
        let area = Rect::new(0, 0, 100, 20);
        let areas = toast_areas(2, area);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[1].y + areas[1].height, 20);
        assert_eq!(areas[0].y + areas[0].height, areas[1].y);
        assert!(areas.iter().all(|r| r.x + r.width == 100));
    }

    #[test]
    fn toasts_clip_to_available_height() {
        let area = Rect::new(0, 0, 30, 7);
        let areas = toast_areas(5, area);
        assert_eq!(areas.len(), 2);
        assert!(areas.iter().all(|r| r.width == 30));
    }
}
