//! Terminal host for the desktop.
//!
//! Translates crossterm events into desktop operations and draws the result.
//! The bottom row of the terminal is the launcher strip; everything above it
//! is the desktop container.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect as CellRect;

use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::{DesktopError, Result};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::layout::{Point, Rect};
use crate::ui::{CellMetrics, UiFrame, launcher_items, render_desktop, render_launcher};
use crate::window::{ResizeEdge, resize_edge_at};

pub struct Shell {
    desktop: Desktop,
    cells: CellMetrics,
    area: CellRect,
}

impl Shell {
    pub fn new(desktop: Desktop, cells: CellMetrics) -> Self {
        Self {
            desktop,
            cells,
            area: CellRect::default(),
        }
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    pub fn desktop_mut(&mut self) -> &mut Desktop {
        &mut self.desktop
    }

    pub fn cells(&self) -> CellMetrics {
        self.cells
    }

    /// Cells occupied by the desktop container.
    pub fn desktop_area(&self) -> CellRect {
        CellRect {
            height: self.area.height.saturating_sub(1),
            ..self.area
        }
    }

    pub fn launcher_area(&self) -> CellRect {
        if self.area.height == 0 {
            return CellRect::default();
        }
        CellRect {
            y: self.area.bottom().saturating_sub(1),
            height: 1,
            ..self.area
        }
    }

    /// Adopt a new terminal size and report the container to the desktop.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.area = CellRect::new(0, 0, columns, rows);
        let size = self.cells.container_size(self.desktop_area());
        self.desktop.set_container_size(size.width, size.height);
    }

    pub fn draw(&self, frame: &mut UiFrame<'_>) {
        render_desktop(frame, &self.desktop, self.desktop_area(), self.cells);
        let items = launcher_items(&self.desktop, self.launcher_area());
        render_launcher(frame, &items);
    }

    /// Apply one input event. Errors are wiring bugs and end the session.
    pub fn handle_event(&mut self, event: &Event) -> Result<ControlFlow> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse)?;
                Ok(ControlFlow::Continue)
            }
            Event::Resize(columns, rows) => {
                self.resize(*columns, *rows);
                Ok(ControlFlow::Continue)
            }
            _ => Ok(ControlFlow::Continue),
        }
    }

    fn focused(&self) -> Option<String> {
        self.desktop.registry().focused_id().map(str::to_owned)
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Result<ControlFlow> {
        match key.code {
            // Also matches Ctrl-Q.
            KeyCode::Char('q') => return Ok(ControlFlow::Quit),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                let app_id = self.desktop.apps().iter().nth(index).map(|app| app.id.clone());
                if let Some(app_id) = app_id {
                    self.desktop.launch(&app_id)?;
                }
            }
            KeyCode::Tab => self.desktop.focus_next(),
            KeyCode::Esc => self.desktop.cancel_gesture(),
            KeyCode::Char('h') => {
                if let Some(id) = self.focused() {
                    self.desktop.hide(&id);
                }
            }
            KeyCode::Char('u') => {
                let hidden: Vec<String> = self
                    .desktop
                    .registry()
                    .windows()
                    .filter(|window| window.is_hidden())
                    .map(|window| window.id().to_owned())
                    .collect();
                for id in hidden {
                    self.desktop.show(&id);
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.focused() {
                    self.desktop.toggle_fullscreen(&id);
                }
            }
            KeyCode::Char('w') => {
                if let Some(id) = self.focused() {
                    self.desktop.close(&id)?;
                }
            }
            _ => {}
        }
        Ok(ControlFlow::Continue)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Result<()> {
        let pointer = self
            .cells
            .pointer(self.desktop_area(), mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row >= self.launcher_area().y && self.launcher_area().height > 0 {
                    return self.click_launcher(mouse.column, mouse.row);
                }
                self.press(pointer);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.desktop.pointer_moved(pointer);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.desktop.end_gesture(pointer);
            }
            _ => {}
        }
        Ok(())
    }

    fn click_launcher(&mut self, column: u16, row: u16) -> Result<()> {
        let hit = launcher_items(&self.desktop, self.launcher_area())
            .into_iter()
            .find(|item| item.rect.contains((column, row).into()));
        if let Some(item) = hit {
            self.desktop.launch(&item.app_id)?;
        }
        Ok(())
    }

    // Title row moves, borders and corners resize, anything else focuses.
    fn press(&mut self, pointer: Point) {
        let Some(id) = self.desktop.window_at(pointer).map(str::to_owned) else {
            return;
        };
        let Some(framing) = self.desktop.pixel_framing(&id) else {
            return;
        };
        let rect = Rect::from(framing);
        let on_title = pointer.y < rect.y + self.cells.height;
        let grip = self.cells.width.max(self.cells.height);
        match resize_edge_at(rect, pointer, grip) {
            Some(edge) if edge != ResizeEdge::Top => {
                if !self.desktop.begin_resize(&id, edge, pointer) {
                    self.desktop.activate(&id);
                }
            }
            _ if on_title => {
                if !self.desktop.begin_move(&id, pointer) {
                    self.desktop.activate(&id);
                }
            }
            _ => self.desktop.activate(&id),
        }
    }
}

/// Drive `shell` until the user quits or a wiring error surfaces.
pub fn run<I, O>(shell: &mut Shell, input: I, output: &mut O, poll_interval: Duration) -> Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    let mut failure: Option<DesktopError> = None;
    event_loop.run(|_, event| match event {
        None => {
            output.draw(|mut frame| shell.draw(&mut frame))?;
            Ok(ControlFlow::Continue)
        }
        Some(event) => match shell.handle_event(&event) {
            Ok(flow) => Ok(flow),
            Err(DesktopError::Io(err)) => Err(err),
            Err(err) => {
                failure = Some(err);
                Ok(ControlFlow::Quit)
            }
        },
    })?;
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::AppDescriptor;
    use crate::config::DesktopConfig;
    use crate::layout::Size;
    use crate::snap::SnapTarget;
    use crossterm::event::KeyModifiers;

    fn shell() -> Shell {
        let mut desktop = Desktop::new(DesktopConfig {
            seed: Some(1),
            ..DesktopConfig::default()
        });
        desktop
            .register_app(AppDescriptor::new("files", "Files").with_default_size(Size::new(50.0, 50.0)))
            .unwrap();
        desktop
            .register_app(AppDescriptor::new("notes", "Notes").with_default_size(Size::new(50.0, 50.0)))
            .unwrap();
        let mut shell = Shell::new(desktop, CellMetrics::new(8.0, 16.0));
        // 150 x 40 desktop cells = 1200 x 640 px, plus the launcher row.
        shell.resize(150, 41);
        shell
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn resize_reports_container_in_pixels() {
        let s = shell();
        assert_eq!(s.desktop().container_size(), Some(Size::new(1200.0, 640.0)));
        assert_eq!(s.launcher_area(), CellRect::new(0, 40, 150, 1));
    }

    #[test]
    fn digit_keys_launch_and_q_quits() {
        let mut s = shell();
        assert_eq!(s.handle_event(&key(KeyCode::Char('2'))).unwrap(), ControlFlow::Continue);
        assert!(s.desktop().is_running("notes").unwrap());
        assert!(!s.desktop().is_running("files").unwrap());
        s.handle_event(&key(KeyCode::Char('h'))).unwrap();
        assert!(s.desktop().registry().is_hidden("notes"));
        s.handle_event(&key(KeyCode::Char('2'))).unwrap();
        assert!(!s.desktop().registry().is_hidden("notes"));
        assert_eq!(s.handle_event(&key(KeyCode::Char('q'))).unwrap(), ControlFlow::Quit);
    }

    #[test]
    fn launcher_click_launches() {
        let mut s = shell();
        // "[1 Files ]" occupies columns 0..10, "[2 Notes ]" starts at 11.
        s.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 12, 40))
            .unwrap();
        assert!(s.desktop().is_running("notes").unwrap());
    }

    #[test]
    fn title_drag_to_left_edge_snaps() {
        let mut s = shell();
        s.handle_event(&key(KeyCode::Char('1'))).unwrap();
        let framing = s.desktop().pixel_framing("files").unwrap();
        let cells = s.cells();
        let column = ((framing.position.x + framing.size.width / 2.0) / cells.width) as u16;
        let row = (framing.position.y / cells.height).round() as u16;

        s.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, row))
            .unwrap();
        assert_eq!(s.desktop().gesture_target(), Some("files"));
        s.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, row))
            .unwrap();
        assert_eq!(
            s.desktop().snap_preview().map(|p| p.target),
            Some(SnapTarget::Left)
        );
        s.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 0, row))
            .unwrap();
        assert_eq!(
            s.desktop().registry().framing("files"),
            Some(SnapTarget::Left.framing())
        );
        assert!(s.desktop().snap_preview().is_none());
        assert!(s.desktop().gesture().is_none());
    }

    #[test]
    fn escape_cancels_drag() {
        let mut s = shell();
        s.handle_event(&key(KeyCode::Char('1'))).unwrap();
        let before = s.desktop().registry().framing("files");
        let framing = s.desktop().pixel_framing("files").unwrap();
        let cells = s.cells();
        let column = ((framing.position.x + framing.size.width / 2.0) / cells.width) as u16;
        let row = (framing.position.y / cells.height).round() as u16;
        s.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, row))
            .unwrap();
        s.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), column + 5, row + 3))
            .unwrap();
        s.handle_event(&key(KeyCode::Esc)).unwrap();
        s.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), column + 5, row + 3))
            .unwrap();
        assert_eq!(s.desktop().registry().framing("files"), before);
    }
}
