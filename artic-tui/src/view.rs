//! Draws the artwork table, paginator footer and row-count overlay.

use crossterm::style::Color;

use artic_lib::list::ListState;
use artic_lib::model::Artwork;

use crate::buffer::{Buffer, Style};
use crate::text::{display_width, single_line, thousands, truncate_to_width};
use crate::widgets::{RowInput, Spinner};

const ACCENT: Color = Color::Rgb {
    r: 94,
    g: 129,
    b: 244,
};
const MUTED: Color = Color::DarkGrey;
const BORDER: Color = Color::Grey;

const HEADER_Y: u16 = 2;
const FIRST_ROW_Y: u16 = 4;
/// Footer rows below the table: a blank line, the paginator and key hints.
const FOOTER_HEIGHT: u16 = 3;
const OVERLAY_WIDTH: u16 = 36;
const OVERLAY_PLACEHOLDER: &str = "Select no. of rows...";

/// Everything the view needs for one frame.
pub struct View<'a> {
    pub state: &'a ListState,
    pub cursor: usize,
    pub overlay: Option<&'a RowInput>,
    pub spinner: &'a Spinner,
    pub tick: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Checkbox,
    Chevron,
    Id,
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    DateStart,
    DateEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    kind: ColumnKind,
    header: &'static str,
    x: u16,
    width: u16,
}

const GAP: u16 = 1;

/// Column layout for a terminal `width` columns wide.
///
/// Title and Artist Display share whatever the fixed columns leave over.
fn columns(width: u16) -> Vec<Column> {
    let fixed = [
        (ColumnKind::Checkbox, "", 3),
        (ColumnKind::Chevron, "▾", 1),
        (ColumnKind::Id, "ID", 7),
        (ColumnKind::Title, "Title", 0),
        (ColumnKind::PlaceOfOrigin, "Place Of Origin", 16),
        (ColumnKind::ArtistDisplay, "Artist Display", 0),
        (ColumnKind::DateStart, "From", 5),
        (ColumnKind::DateEnd, "To", 5),
    ];

    let used: u16 = fixed.iter().map(|(_, _, w)| *w).sum::<u16>() + GAP * (fixed.len() as u16 + 1);
    let flexible = width.saturating_sub(used).max(10);
    let title_width = flexible * 11 / 20;
    let artist_width = flexible - title_width;

    let mut x = GAP;
    fixed
        .iter()
        .map(|&(kind, header, w)| {
            let width = match kind {
                ColumnKind::Title => title_width,
                ColumnKind::ArtistDisplay => artist_width,
                _ => w,
            };
            let column = Column {
                kind,
                header,
                x,
                width,
            };
            x = x.saturating_add(width + GAP);
            column
        })
        .collect()
}

fn cell_text(artwork: &Artwork, kind: ColumnKind, selected: bool) -> String {
    match kind {
        ColumnKind::Checkbox => (if selected { "[x]" } else { "[ ]" }).to_string(),
        ColumnKind::Chevron => String::new(),
        ColumnKind::Id => artwork.id.to_string(),
        ColumnKind::Title => single_line(artwork.title()),
        ColumnKind::PlaceOfOrigin => single_line(artwork.place_of_origin()),
        ColumnKind::ArtistDisplay => single_line(artwork.artist_display()),
        ColumnKind::DateStart => artwork.date_start.map(|d| d.to_string()).unwrap_or_default(),
        ColumnKind::DateEnd => artwork.date_end.map(|d| d.to_string()).unwrap_or_default(),
    }
}

/// Number of table rows that fit in a buffer `height` rows tall.
pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(FIRST_ROW_Y + FOOTER_HEIGHT) as usize
}

/// First displayed row to draw so the cursor row stays on screen.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    cursor.saturating_sub(visible.saturating_sub(1))
}

pub fn render(view: &View<'_>, buf: &mut Buffer) {
    render_title(view, buf);

    if view.state.is_loading() {
        render_spinner(view, buf);
        return;
    }

    render_table(view, buf);
    render_footer(view, buf);

    if let Some(input) = view.overlay {
        render_overlay(input, buf);
    }
}

fn render_title(view: &View<'_>, buf: &mut Buffer) {
    let width = buf.width();
    buf.put_str(1, 0, "Artworks", Style::new().bold().fg(ACCENT), width);

    let selected = format!("{} selected", view.state.selection().len());
    let x = width.saturating_sub(display_width(&selected) as u16 + 1);
    buf.put_str(x, 0, &selected, Style::new().fg(MUTED), width);
}

fn render_spinner(view: &View<'_>, buf: &mut Buffer) {
    let frame = view.spinner.frame(view.tick);
    let x = buf.width().saturating_sub(view.spinner.track_width()) / 2;
    let y = buf.height() / 2;

    for (i, (ch, color)) in frame.into_iter().enumerate() {
        let mut s = [0u8; 4];
        buf.put_str(x + i as u16, y, ch.encode_utf8(&mut s), Style::new().fg(color), 1);
    }
}

fn render_table(view: &View<'_>, buf: &mut Buffer) {
    let width = buf.width();
    let columns = columns(width);
    let header_style = Style::new().bold();

    for column in &columns {
        let style = if column.kind == ColumnKind::Chevron {
            Style::new().fg(ACCENT)
        } else {
            header_style
        };
        buf.put_str(column.x, HEADER_Y, column.header, style, column.width);
    }
    let rule = "─".repeat(width.saturating_sub(2) as usize);
    buf.put_str(1, HEADER_Y + 1, &rule, Style::new().fg(BORDER), width);

    let selection = view.state.selection();
    let displayed = view.state.displayed();
    let visible = visible_rows(buf.height());
    let offset = scroll_offset(view.cursor, visible);
    let rows = displayed.iter().enumerate().skip(offset).take(visible);

    for (index, artwork) in rows {
        let y = FIRST_ROW_Y + (index - offset) as u16;
        let selected = selection.is_selected(artwork.id);

        for column in &columns {
            let text = truncate_to_width(
                &cell_text(artwork, column.kind, selected),
                column.width as usize,
            );
            let style = match column.kind {
                ColumnKind::Checkbox if selected => Style::new().fg(ACCENT).bold(),
                ColumnKind::Id => Style::new().fg(MUTED),
                _ => Style::new(),
            };
            buf.put_str(column.x, y, &text, style, column.width);
        }

        if index == view.cursor {
            for column in &columns {
                let mut cursor_style = Style::new().reverse();
                if column.kind == ColumnKind::Checkbox && selected {
                    cursor_style = cursor_style.fg(ACCENT).bold();
                }
                buf.fill_style(column.x, y, column.width + GAP, cursor_style);
            }
        }
    }

    let below = displayed.len().saturating_sub(offset + visible);
    if below > 0 {
        let more = format!("↓ {} more", below);
        buf.put_str(1, FIRST_ROW_Y + visible as u16, &more, Style::new().fg(MUTED), width);
    }

    if displayed.is_empty() {
        buf.put_str(1, FIRST_ROW_Y, "No records found.", Style::new().fg(MUTED), width);
    }
}

/// Paginator text: page links, row range and the rows-per-page choices.
pub fn paginator_text(state: &ListState) -> String {
    let page = state.page();
    let shown = state.displayed().len() as u64;
    let range = if shown == 0 {
        format!("0 of {}", thousands(page.total_records))
    } else {
        format!(
            "{}–{} of {}",
            thousands(page.first_row() + 1),
            thousands(page.first_row() + shown),
            thousands(page.total_records)
        )
    };

    let options: Vec<String> = state
        .page_size_options()
        .iter()
        .map(|&size| {
            if size == page.page_size {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect();

    format!(
        "«  ‹  Page {} of {}  ›  »    {}    Rows per page: {}",
        thousands(u64::from(page.current_page)),
        thousands(page.total_pages()),
        range,
        options.join(" ")
    )
}

fn render_footer(view: &View<'_>, buf: &mut Buffer) {
    let width = buf.width();
    let height = buf.height();
    if height < FOOTER_HEIGHT {
        return;
    }

    buf.put_str(1, height - 2, &paginator_text(view.state), Style::new(), width);
    buf.put_str(
        1,
        height - 1,
        "↑↓ move  space select  ←→ page  home/end first/last  r rows  s select rows  q quit",
        Style::new().fg(MUTED).dim(),
        width,
    );
}

fn render_overlay(input: &RowInput, buf: &mut Buffer) {
    let x = 2;
    let y = HEADER_Y + 1;
    let inner = OVERLAY_WIDTH - 2;
    let border = Style::new().fg(BORDER);

    let top = format!("┌{}┐", "─".repeat(inner as usize));
    let blank = format!("│{}│", " ".repeat(inner as usize));
    let bottom = format!("└{}┘", "─".repeat(inner as usize));
    buf.put_str(x, y, &top, border, OVERLAY_WIDTH);
    for row in 1..=3 {
        buf.put_str(x, y + row, &blank, border, OVERLAY_WIDTH);
    }
    buf.put_str(x, y + 4, &bottom, border, OVERLAY_WIDTH);

    let field_x = x + 2;
    let field_width = inner - 2;
    let field_style = Style::new().bg(Color::Black);
    buf.put_str(field_x, y + 1, &" ".repeat(field_width as usize), field_style, field_width);

    if input.text().is_empty() {
        buf.put_str(field_x, y + 1, OVERLAY_PLACEHOLDER, field_style.fg(MUTED), field_width);
    } else {
        buf.put_str(field_x, y + 1, input.text(), field_style, field_width);
    }
    let cursor_x = field_x + (input.cursor() as u16).min(field_width - 1);
    buf.fill_style(cursor_x, y + 1, 1, field_style.reverse());

    buf.put_str(field_x, y + 3, "Submit ⏎", Style::new().bold().fg(ACCENT), field_width);
    buf.put_str(field_x + 12, y + 3, "esc close", Style::new().fg(MUTED), field_width - 12);
}
