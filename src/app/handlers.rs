//! Keyboard and mouse handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::map::{Point, PointerOutcome};
use crate::store::DisplayMode;
use crate::ui::interaction::handle_click_action;
use crate::ui::map_canvas::cell_to_view_box;
use crate::ui::viewport::Viewport;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            // The error panel keeps its message and retry button.
            KeyCode::Esc if self.store.state().display_mode() == DisplayMode::Ready => {
                self.map.clear_pointer(&mut self.store);
                self.store.reset_selection();
                self.mark_dirty();
            }
            KeyCode::Char('r') => {
                self.reload();
            }
            KeyCode::Char(digit @ '1'..='9') => {
                self.sync_views();
                let index = digit as usize - '1' as usize;
                if let Some(region_id) = self.quick_select.region_at(index).map(str::to_string) {
                    self.toggle_region(&region_id);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(point) = self.map_point(mouse.column, mouse.row) {
                    if self.map.click(&mut self.store, point) == PointerOutcome::Consumed {
                        self.mark_dirty();
                        return;
                    }
                }
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let mut changed = self.hit_registry.update_hover(mouse.column, mouse.row);
                let point = self.map_point(mouse.column, mouse.row);
                changed |= self.map.pointer_moved(&mut self.store, point, &self.viewport);
                if changed {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Terminal resized to `columns` x `rows`. The pixel width is queried
    /// again because it changes along with the cell grid.
    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        let viewport = match Viewport::detect() {
            Ok(viewport) if viewport.columns == columns => viewport,
            _ => Viewport::new(columns, rows, None),
        };
        self.set_viewport(viewport);
    }

    fn map_point(&self, column: u16, row: u16) -> Option<Point> {
        self.map_area
            .and_then(|area| cell_to_view_box(area, column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::api::RegionApi;
    use crate::models::{Coordinates, MapPosition, Region, Tier};
    use crate::traits::HttpClient;
    use crate::ui::interaction::ClickAction;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use std::sync::Arc;

    fn region(id: &str, x: f64, y: f64) -> Region {
        Region {
            id: id.to_string(),
            display_name: id.to_string(),
            emoji: "📍".to_string(),
            coordinates: Coordinates {
                latitude: 37.5,
                longitude: 127.0,
            },
            map_position: MapPosition { x: x + 50.0, y: y + 50.0 },
            svg_path: format!(
                "M{x},{y} L{},{y} L{},{} L{x},{} Z",
                x + 100.0,
                x + 100.0,
                y + 100.0,
                y + 100.0
            ),
            popularity_score: 80.0,
            available_places_count: 10,
            keywords: vec![],
            tier: Tier::Essential,
            is_active: true,
        }
    }

    /// App with two loaded regions and an 80x60 map canvas at the origin,
    /// so one cell covers 10x10 view-box units.
    fn loaded_app(viewport: Viewport) -> App {
        let http: Arc<dyn HttpClient> = Arc::new(MockHttpClient::new());
        let api = Arc::new(RegionApi::new(http, "http://test/api/v1"));
        let mut app = App::new(api, viewport);
        app.map.attach(&mut app.store);
        app.quick_select.attach(&mut app.store);
        app.info_card.attach(&mut app.store);
        app.store
            .set_regions(vec![region("hongdae", 100.0, 100.0), region("gangnam", 300.0, 300.0)]);
        app.sync_views();
        app.map_area = Some(Rect::new(0, 0, 80, 60));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_map_click_toggles_and_stops_propagation() {
        let mut app = loaded_app(Viewport::new(120, 40, None));
        // A button registered under the map must not receive the click.
        app.hit_registry
            .register(Rect::new(0, 0, 80, 60), ClickAction::Retry, None);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 15));
        assert_eq!(app.store.state().selected_id(), Some("hongdae"));
        assert_eq!(app.loader.generation(), 0);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 15));
        assert!(app.store.state().selected_region.is_none());
    }

    #[test]
    fn test_click_on_empty_map_falls_through() {
        let mut app = loaded_app(Viewport::new(120, 40, None));
        app.hit_registry.register(
            Rect::new(70, 50, 10, 4),
            ClickAction::ToggleRegion("gangnam".to_string()),
            None,
        );
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 75, 52));
        assert_eq!(app.store.state().selected_id(), Some("gangnam"));
    }

    #[test]
    fn test_hover_on_desktop_only() {
        let mut app = loaded_app(Viewport::new(120, 40, None));
        app.handle_mouse(mouse(MouseEventKind::Moved, 35, 35));
        assert_eq!(app.store.state().hovered_id(), Some("gangnam"));

        app.handle_mouse(mouse(MouseEventKind::Moved, 79, 0));
        assert!(app.store.state().hovered_region.is_none());

        let mut narrow = loaded_app(Viewport::new(60, 40, None));
        narrow.handle_mouse(mouse(MouseEventKind::Moved, 35, 35));
        assert!(narrow.store.state().hovered_region.is_none());
    }

    #[test]
    fn test_narrowing_viewport_clears_hover() {
        let mut app = loaded_app(Viewport::new(120, 40, None));
        app.handle_mouse(mouse(MouseEventKind::Moved, 15, 15));
        assert!(app.store.state().hovered_region.is_some());

        app.set_viewport(Viewport::new(90, 40, None));
        assert!(app.store.state().hovered_region.is_none());
    }

    #[test]
    fn test_digit_keys_toggle_quick_select() {
        let mut app = loaded_app(Viewport::default());
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.store.state().selected_id(), Some("gangnam"));

        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.store.state().selected_id(), Some("gangnam"));

        app.handle_key(key(KeyCode::Char('2')));
        assert!(app.store.state().selected_region.is_none());
    }

    #[test]
    fn test_escape_resets_selection() {
        let mut app = loaded_app(Viewport::new(120, 40, None));
        app.toggle_region("hongdae");
        app.handle_mouse(mouse(MouseEventKind::Moved, 35, 35));

        app.handle_key(key(KeyCode::Esc));
        let state = app.store.state();
        assert!(state.selected_region.is_none());
        assert!(state.hovered_region.is_none());
    }

    #[test]
    fn test_escape_keeps_error_panel() {
        let mut app = loaded_app(Viewport::new(120, 40, None));
        app.store.set_error(Some("boom".to_string()));
        assert_eq!(app.store.state().display_mode(), DisplayMode::Error);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.store.state().error.as_deref(), Some("boom"));
        assert_eq!(app.store.state().display_mode(), DisplayMode::Error);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app(Viewport::default());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = loaded_app(Viewport::default());
        app.handle_key(KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        });
        assert!(app.should_quit);
    }
}
