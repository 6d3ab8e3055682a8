//! Terminal rendering of the desktop.
//!
//! The terminal stands in for the browser surface: every cell is treated as a
//! fixed block of virtual pixels, so the core keeps working in pixels and
//! percent while the host draws on a character grid.
//!
//! All drawing goes through [`UiFrame`], which clips rectangles to the
//! visible area. Windows dragged partly off-screen produce rectangles that
//! drift outside the buffer, and writing there would panic.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget};

use crate::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::desktop::Desktop;
use crate::layout::{Framing, Point, Size, to_pixel_framing};

/// Wrapper around `ratatui::Frame` that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: CellRect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    pub fn from_parts(area: CellRect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> CellRect {
        self.area
    }

    fn clip_rect(&self, rect: CellRect) -> Option<CellRect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: CellRect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let Some(row) = self.clip_rect(CellRect::new(x, y, 1, 1)) else {
            return;
        };
        let available = self.area.right().saturating_sub(row.x) as usize;
        let text: String = text.chars().take(available).collect();
        self.buffer.set_string(row.x, row.y, text, style);
    }
}

/// Virtual pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: CELL_WIDTH_PX,
            height: CELL_HEIGHT_PX,
        }
    }
}

impl CellMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Container size in pixels for a desktop occupying `area`.
    pub fn container_size(&self, area: CellRect) -> Size {
        Size::new(
            area.width as f64 * self.width,
            area.height as f64 * self.height,
        )
    }

    /// Container-local pixel point at the center of a cell.
    pub fn pointer(&self, area: CellRect, column: u16, row: u16) -> Point {
        let col = column as f64 - area.x as f64;
        let row = row as f64 - area.y as f64;
        Point::new(
            col * self.width + self.width / 2.0,
            row * self.height + self.height / 2.0,
        )
    }

    /// Cells covered by a pixel framing, clipped to `area`.
    pub fn cells(&self, framing: Framing, area: CellRect) -> Option<CellRect> {
        let left = (framing.position.x / self.width).round() as i64;
        let top = (framing.position.y / self.height).round() as i64;
        let width = ((framing.size.width / self.width).round() as i64).max(1);
        let height = ((framing.size.height / self.height).round() as i64).max(1);

        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = (left + width).min(area.width as i64);
        let y1 = (top + height).min(area.height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(CellRect::new(
            area.x + x0 as u16,
            area.y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }
}

/// Draw all visible windows bottom to top, then the snap preview on top.
pub fn render_desktop(frame: &mut UiFrame<'_>, desktop: &Desktop, area: CellRect, cells: CellMetrics) {
    let focused = desktop.registry().focused_id();
    for window in desktop.registry().windows() {
        if window.is_hidden() {
            continue;
        }
        let Some(framing) = desktop.pixel_framing(window.id()) else {
            continue;
        };
        let Some(rect) = cells.cells(framing, area) else {
            continue;
        };
        let title = desktop
            .apps()
            .get(window.id())
            .map(|app| app.title.as_str())
            .unwrap_or(window.id());
        let is_focused = focused == Some(window.id());
        let border = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(if window.is_fullscreen() {
                BorderType::Double
            } else {
                BorderType::Plain
            })
            .border_style(border)
            .title(format!(" {title} "));
        let body = match window.framing() {
            Some(f) => format!(
                "{:.0}% {:.0}%  {:.0}x{:.0}%",
                f.position.x, f.position.y, f.size.width, f.size.height
            ),
            None => "unplaced".to_string(),
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(body).block(block), rect);
    }

    if let (Some(preview), Some(bounds)) = (desktop.snap_preview(), desktop.container_size())
        && let Some(rect) = cells.cells(to_pixel_framing(preview.framing, bounds), area)
    {
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, rect);
    }
}

/// One entry of the launcher strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherItem {
    pub app_id: String,
    pub label: String,
    pub rect: CellRect,
    pub focused: bool,
}

/// Lay out the launcher strip inside `area`. Entries that do not fit are
/// dropped.
pub fn launcher_items(desktop: &Desktop, area: CellRect) -> Vec<LauncherItem> {
    let mut items = Vec::new();
    if area.height == 0 {
        return items;
    }
    let registry = desktop.registry();
    let mut x = area.x;
    for (index, app) in desktop.apps().iter().enumerate() {
        let marker = if registry.is_hidden(&app.id) {
            "-"
        } else if registry.contains(&app.id) {
            "*"
        } else {
            " "
        };
        let label = format!("[{} {}{}]", index + 1, app.title, marker);
        let width = label.chars().count() as u16;
        if x.saturating_add(width) > area.right() {
            break;
        }
        items.push(LauncherItem {
            app_id: app.id.clone(),
            label,
            rect: CellRect::new(x, area.y, width, 1),
            focused: registry.focused_id() == Some(app.id.as_str()),
        });
        x = x.saturating_add(width + 1);
    }
    items
}

pub fn render_launcher(frame: &mut UiFrame<'_>, items: &[LauncherItem]) {
    for item in items {
        let mut style = Style::default().fg(Color::White);
        if item.focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        frame.set_string(item.rect.x, item.rect.y, &item.label, style);
    }
}
