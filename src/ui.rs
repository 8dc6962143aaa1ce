use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::dialog::{DialogKind, DialogSession, FocusTarget};
use crate::model::{AppState, FsEntry, PanelId, PanelState};
use crate::viewport::ScrollbarGeometry;

const COL_SEP: &str = "│";
const SIZE_WIDTH: usize = 7;
const MODIFIED_WIDTH: usize = 12;
const MENU_ITEMS: [&str; 5] = ["Left", "File", "Command", "Options", "Right"];
const SCROLL_THUMB: &str = "█";
const SCROLL_TRACK: &str = "░";

struct KeyCell {
    key: &'static str,
    label: &'static str,
    enabled: bool,
}

const KEY_BAR: [KeyCell; 9] = [
    KeyCell { key: "F1", label: "Help", enabled: false },
    KeyCell { key: "F2", label: "Menu", enabled: false },
    KeyCell { key: "F3", label: "View", enabled: false },
    KeyCell { key: "F4", label: "Edit", enabled: false },
    KeyCell { key: "F5", label: "Copy", enabled: false },
    KeyCell { key: "F6", label: "Move", enabled: false },
    KeyCell { key: "F7", label: "Mkdir", enabled: true },
    KeyCell { key: "F8", label: "Delete", enabled: true },
    KeyCell { key: "F9", label: "Quit", enabled: true },
];

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_top_menu(frame, chunks[0]);

    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (id, area) in [(PanelId::Left, panel_chunks[0]), (PanelId::Right, panel_chunks[1])] {
        render_panel(
            frame,
            area,
            state.panel(id),
            state.is_active(id),
            state.dialog.is_none(),
            state.visible_rows,
        );
    }

    render_key_bar(frame, chunks[2]);

    if let Some(dialog) = &state.dialog {
        render_dialog(frame, dialog);
    }
}

fn render_top_menu(frame: &mut Frame, area: Rect) {
    let widths = distribute_width(area.width as usize, MENU_ITEMS.len());
    let style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let spans: Vec<Span<'static>> = MENU_ITEMS
        .iter()
        .zip(widths)
        .filter(|(_, width)| *width > 0)
        .map(|(item, width)| Span::styled(fit_cell_text(&format!(" {item}"), width), style))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &PanelState,
    active: bool,
    show_selection: bool,
    visible_rows: usize,
) {
    let border_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title_bottom(Line::from(format!(" {} ", panel.cwd.display())))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let layout = TableLayout::for_width(inner.width as usize);
    let rows = visible_rows.min(inner.height.saturating_sub(1) as usize);

    let mut lines = Vec::with_capacity(rows + 1);
    lines.push(match &panel.error_message {
        Some(error) => Line::from(vec![
            Span::styled(
                "ERROR: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(error.clone()),
        ]),
        None => render_table_header(layout),
    });

    for index in panel.visible_range(rows) {
        let entry = &panel.entries[index];
        let selected = show_selection && index == panel.selected_index;
        lines.push(render_entry_line(entry, layout, selected, active));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(scrollbar) =
        ScrollbarGeometry::compute(panel.entries.len(), rows, panel.viewport_offset)
    {
        render_scrollbar(frame, area, inner, scrollbar, border_style);
    }
}

/// Draws over the right border, one cell per visible entry row.
fn render_scrollbar(
    frame: &mut Frame,
    area: Rect,
    inner: Rect,
    scrollbar: ScrollbarGeometry,
    style: Style,
) {
    let x = area.right().saturating_sub(1);
    let first_row = inner.y + 1;
    let buffer = frame.buffer_mut();
    for row in 1..=scrollbar.track_height {
        let y = first_row + (row - 1) as u16;
        if y >= inner.bottom() {
            break;
        }
        let symbol = if scrollbar.covers(row) {
            SCROLL_THUMB
        } else {
            SCROLL_TRACK
        };
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableLayout {
    name_width: usize,
    size_width: usize,
    modified_width: usize,
}

impl TableLayout {
    fn for_width(total_width: usize) -> Self {
        let fixed = SIZE_WIDTH + MODIFIED_WIDTH + 2;
        if total_width <= fixed + 4 {
            return Self {
                name_width: total_width,
                size_width: 0,
                modified_width: 0,
            };
        }

        Self {
            name_width: total_width - fixed,
            size_width: SIZE_WIDTH,
            modified_width: MODIFIED_WIDTH,
        }
    }

    fn is_name_only(self) -> bool {
        self.size_width == 0
    }

    fn format_row(self, name: &str, size: &str, modified: &str) -> String {
        let name = truncate_name(name, self.name_width);
        let size = truncate_name(size, self.size_width);
        if self.is_name_only() {
            return format!("{name:<width$}", width = self.name_width);
        }
        format!(
            "{name:<name_width$}{COL_SEP}{size:>size_width$}{COL_SEP}{modified:>modified_width$}",
            name_width = self.name_width,
            size_width = self.size_width,
            modified_width = self.modified_width,
        )
    }
}

fn render_table_header(layout: TableLayout) -> Line<'static> {
    Line::styled(
        layout.format_row("Name", "Size", "Modify time"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_entry_line(
    entry: &FsEntry,
    layout: TableLayout,
    selected: bool,
    panel_active: bool,
) -> Line<'static> {
    let text = layout.format_row(&entry.name, &entry_size(entry), &format_modified_at(entry));

    let mut style = if entry.is_dir() {
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    if selected {
        style = if panel_active {
            style.fg(Color::Black).bg(Color::Cyan)
        } else {
            style.add_modifier(Modifier::REVERSED)
        };
    }

    Line::styled(text, style)
}

fn entry_size(entry: &FsEntry) -> String {
    if entry.is_parent_link() {
        return "UP--DIR".to_string();
    }
    format!("{}K", entry.size_bytes / 1024)
}

fn format_modified_at(entry: &FsEntry) -> String {
    let Some(ts) = entry.modified_at else {
        return String::new();
    };

    let dt: DateTime<Local> = DateTime::<Local>::from(ts);
    dt.format("%b %d %H:%M").to_string()
}

fn render_key_bar(frame: &mut Frame, area: Rect) {
    let widths = distribute_width(area.width as usize, KEY_BAR.len());
    let mut spans = Vec::with_capacity(KEY_BAR.len() * 2);
    for (cell, width) in KEY_BAR.iter().zip(widths) {
        if width == 0 {
            continue;
        }
        let key_width = cell.key.len().min(width);
        spans.push(Span::styled(
            cell.key[..key_width].to_string(),
            Style::default().fg(Color::White).bg(Color::Black),
        ));
        let label_style = if cell.enabled {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Blue)
        };
        spans.push(Span::styled(
            fit_cell_text(cell.label, width - key_width),
            label_style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dialog(frame: &mut Frame, dialog: &DialogSession) {
    let is_create = matches!(dialog.kind, DialogKind::CreateDirectory { .. });
    let area = centered_rect(60, if is_create { 9 } else { 7 }, frame.area());
    frame.render_widget(Clear, area);

    let (border_color, background) = match dialog.kind {
        DialogKind::CreateDirectory { .. } => (Color::Cyan, Color::Reset),
        DialogKind::ConfirmDelete { .. } => (Color::White, Color::Red),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.title()))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(background))
        .border_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints = if is_create {
        vec![
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let message = Paragraph::new(dialog.message()).alignment(Alignment::Center);
    frame.render_widget(message, chunks[0]);

    let (button_idx, banner_idx) = if let Some(text) = dialog.text() {
        let focused = dialog.focus == FocusTarget::TextInput;
        let cursor = if focused { "_" } else { "" };
        let input_block = Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }),
        );
        let input = Paragraph::new(Line::styled(
            format!("{text}{cursor}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .block(input_block);
        frame.render_widget(input, chunks[1]);
        (2, 3)
    } else {
        (1, 2)
    };

    let buttons = Paragraph::new(render_button_row(dialog)).alignment(Alignment::Center);
    frame.render_widget(buttons, chunks[button_idx]);

    if let Some(error) = dialog.error_message() {
        let banner = Paragraph::new(Line::styled(
            error.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[banner_idx]);
    }
}

fn render_button_row(dialog: &DialogSession) -> Line<'static> {
    let buttons: [(FocusTarget, &str); 2] = match dialog.kind {
        DialogKind::CreateDirectory { .. } => [
            (FocusTarget::OkButton, "Ok"),
            (FocusTarget::CancelButton, "Cancel"),
        ],
        DialogKind::ConfirmDelete { .. } => [
            (FocusTarget::YesButton, "Yes"),
            (FocusTarget::NoButton, "No"),
        ],
    };

    let mut spans = Vec::new();
    for (idx, (target, label)) in buttons.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if dialog.focus == target {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!("[ {label} ]"), style));
    }

    Line::from(spans)
}

fn truncate_name(name: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    if name.chars().count() <= width {
        return name.to_string();
    }

    if width <= 3 {
        return ".".repeat(width);
    }

    let mut truncated: String = name.chars().take(width - 3).collect();
    truncated.push_str("...");
    truncated
}

fn fit_cell_text(text: &str, width: usize) -> String {
    let mut value = truncate_name(text, width);
    let len = value.chars().count();
    if len < width {
        value.push_str(&" ".repeat(width - len));
    }
    value
}

fn distribute_width(total_width: usize, cells: usize) -> Vec<usize> {
    if cells == 0 {
        return Vec::new();
    }
    let base = total_width / cells;
    let rem = total_width % cells;
    (0..cells).map(|idx| base + usize::from(idx < rem)).collect()
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
