//! End-to-end selection flows: load, click, toggle, dim, hover, reload.

mod common;

use std::time::Duration;

use common::*;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use region_selector::adapters::MockResponse;
use region_selector::app::App;
use region_selector::map::scene::{DIMMED_OPACITY, STROKE_WEIGHT_SELECTED};
use region_selector::map::Point;
use region_selector::models::Tier;
use region_selector::traits::{HttpError, Response};
use region_selector::ui::interaction::ClickAction;
use region_selector::ui::map_canvas::view_box_to_cell;
use region_selector::ui::text;
use region_selector::ui::theme::{COLOR_ACCENT, MAP_HOVER_FILL};
use region_selector::ui::Viewport;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Left click at the first cell of the hit area registered for `action`.
fn click_hit_area(app: &mut App, action: &ClickAction) {
    let rect = app
        .hit_registry
        .areas()
        .iter()
        .find(|area| &area.action == action)
        .map(|area| area.rect)
        .unwrap_or_else(|| panic!("no hit area for {:?}", action));
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), rect.x + 1, rect.y + 1));
}

/// Terminal cell over the view-box point `point` of the last rendered map.
fn map_cell(app: &App, point: Point) -> (u16, u16) {
    let area = app.map_area.expect("map not rendered");
    view_box_to_cell(area, point).expect("point outside the map")
}

#[tokio::test]
async fn test_quick_select_lists_active_tier_one_in_order() {
    let regions = vec![
        region("a", "A", Tier::Essential, true, 0.0, 0.0),
        region("b", "B", Tier::Important, true, 150.0, 0.0),
        region("c", "C", Tier::Essential, false, 300.0, 0.0),
        region("d", "D", Tier::Essential, true, 450.0, 0.0),
        region("e", "E", Tier::Optional, true, 600.0, 0.0),
    ];
    let (app, _) = mounted(ok_response(&regions)).await;

    let ids: Vec<&str> = app
        .quick_select
        .buttons()
        .iter()
        .map(|b| b.region_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "d"]);
    // Every region is on the map regardless of tier.
    assert_eq!(app.map.scene().shapes().len(), 5);
}

#[tokio::test]
async fn test_happy_path_button_toggles_selection_and_card() {
    let (mut app, _) = mounted(ok_response(&two_regions())).await;
    let mut terminal = test_terminal();

    let screen = draw(&mut terminal, &mut app);
    assert_eq!(app.quick_select.buttons().len(), 2);
    assert!(!screen.contains(text::INFO_CARD_TITLE));

    click_hit_area(&mut app, &ClickAction::ToggleRegion("hongdae".to_string()));
    assert_eq!(app.store.state().selected_id(), Some("hongdae"));
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains(text::INFO_CARD_TITLE));
    assert!(screen.contains("홍대"));
    assert!(screen.contains("인기도: 95점"));
    assert!(screen.contains("150곳"));
    assert!(screen.contains("#힙한"));
    assert!(screen.contains("좌표: 37.5563, 126.9239"));

    click_hit_area(&mut app, &ClickAction::ToggleRegion("hongdae".to_string()));
    assert!(app.store.state().selected_region.is_none());
    let screen = draw(&mut terminal, &mut app);
    assert!(!screen.contains(text::INFO_CARD_TITLE));
    assert!(!app.info_card.is_visible());
}

#[tokio::test]
async fn test_selecting_another_region_replaces_selection() {
    let (mut app, _) = mounted(ok_response(&two_regions())).await;

    app.toggle_region("hongdae");
    app.toggle_region("gangnam");
    app.sync_views();

    assert_eq!(app.store.state().selected_id(), Some("gangnam"));
    let selected: Vec<bool> = app.quick_select.buttons().iter().map(|b| b.selected).collect();
    assert_eq!(selected, vec![false, true]);
    assert_eq!(app.info_card.card().unwrap().display_name, "강남");
}

#[tokio::test]
async fn test_selection_dims_other_shapes() {
    let (mut app, _) = mounted(ok_response(&two_regions())).await;

    app.toggle_region("hongdae");
    app.sync_views();

    let scene = app.map.scene();
    let hongdae = scene.shape("hongdae").unwrap();
    let gangnam = scene.shape("gangnam").unwrap();
    assert_eq!(hongdae.style.opacity, 1.0);
    assert_eq!(hongdae.style.fill, COLOR_ACCENT);
    assert_eq!(hongdae.style.stroke_weight, STROKE_WEIGHT_SELECTED);
    assert_eq!(gangnam.style.opacity, DIMMED_OPACITY);
}

#[tokio::test]
async fn test_map_click_selects_and_stops_propagation() {
    let (mut app, _) = mounted(ok_response(&two_regions())).await;
    let mut terminal = test_terminal();
    draw(&mut terminal, &mut app);

    let (column, row) = map_cell(&app, Point::from((560.0, 410.0)));
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    assert_eq!(app.store.state().selected_id(), Some("gangnam"));

    // Clicking the selected shape again clears the selection.
    draw(&mut terminal, &mut app);
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    assert!(app.store.state().selected_region.is_none());

    // Empty map background does nothing.
    draw(&mut terminal, &mut app);
    let (column, row) = map_cell(&app, Point::from((400.0, 20.0)));
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    assert!(app.store.state().selected_region.is_none());
}

#[tokio::test]
async fn test_hover_highlights_shape_on_desktop_only() {
    let (mut app, _) = mounted(ok_response(&two_regions())).await;
    let mut terminal = test_terminal();
    draw(&mut terminal, &mut app);

    let (column, row) = map_cell(&app, Point::from((160.0, 160.0)));
    app.handle_mouse(mouse(MouseEventKind::Moved, column, row));
    assert_eq!(app.store.state().hovered_id(), Some("hongdae"));
    assert_eq!(app.map.scene().shape("hongdae").unwrap().style.fill, MAP_HOVER_FILL);

    // Hover never changes the selection.
    assert!(app.store.state().selected_region.is_none());

    app.set_viewport(Viewport::new(60, 40, None));
    assert!(app.store.state().hovered_region.is_none());

    draw(&mut terminal, &mut app);
    app.handle_mouse(mouse(MouseEventKind::Moved, column, row));
    assert!(app.store.state().hovered_region.is_none());
}

#[tokio::test]
async fn test_loading_state_renders_no_regions() {
    let delayed = MockResponse::Delayed(
        Duration::from_millis(50),
        Box::new(ok_response(&two_regions())),
    );
    let (mut app, _) = app_with_response(delayed);
    let mut terminal = test_terminal();

    app.mount();
    let screen = draw(&mut terminal, &mut app);
    assert!(app.store.state().is_loading);
    assert!(screen.contains(text::LOADING_MESSAGE));
    assert!(app.quick_select.buttons().is_empty());
    assert!(app.map.scene().shapes().is_empty());
    assert!(app.map_area.is_none());

    pump(&mut app).await;
    let screen = draw(&mut terminal, &mut app);
    assert!(!screen.contains(text::LOADING_MESSAGE));
    assert_eq!(app.quick_select.buttons().len(), 2);
}

#[tokio::test]
async fn test_error_state_shows_message_and_retry_recovers() {
    let failure = MockResponse::Error(HttpError::ConnectionFailed("refused".to_string()));
    let (mut app, client) = mounted(failure).await;
    let mut terminal = test_terminal();

    let screen = draw(&mut terminal, &mut app);
    assert_eq!(
        app.store.state().error.as_deref(),
        Some("Connection failed: refused")
    );
    assert!(screen.contains("Connection failed: refused"));
    assert!(screen.contains(text::RETRY_LABEL));
    assert!(app.quick_select.buttons().is_empty());
    assert!(!screen.contains("인기도"));

    client.set_default_response(ok_response(&two_regions()));
    click_hit_area(&mut app, &ClickAction::Retry);
    assert!(app.store.state().is_loading);
    assert!(app.store.state().error.is_none());

    pump(&mut app).await;
    let screen = draw(&mut terminal, &mut app);
    assert_eq!(client.request_count(), 2);
    assert!(!screen.contains(text::RETRY_LABEL));
    assert_eq!(app.quick_select.buttons().len(), 2);
}

#[tokio::test]
async fn test_status_error_message() {
    let (app, _) = mounted(MockResponse::Success(Response::new(500, "oops"))).await;
    assert_eq!(
        app.store.state().error.as_deref(),
        Some("API 요청 실패: 500 Internal Server Error")
    );
    assert!(!app.store.state().is_loading);
}

#[tokio::test]
async fn test_keyboard_quick_select_and_reset() {
    let (mut app, _) = mounted(ok_response(&two_regions())).await;

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.store.state().selected_id(), Some("gangnam"));

    app.handle_key(key(KeyCode::Char('9')));
    assert_eq!(app.store.state().selected_id(), Some("gangnam"));

    app.handle_key(key(KeyCode::Esc));
    assert!(app.store.state().selected_region.is_none());
}
