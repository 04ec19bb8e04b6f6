//! Shared fixtures for the integration tests.
//!
//! ```ignore
//! mod common;
//! use common::*;
//!
//! let (mut app, client) = app_with_response(ok_response(&two_regions()));
//! app.mount();
//! pump(&mut app).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use region_selector::adapters::{MockHttpClient, MockResponse};
use region_selector::api::RegionApi;
use region_selector::app::App;
use region_selector::models::{Coordinates, MapPosition, Region, RegionMetadataResponse, Tier};
use region_selector::traits::{HttpClient, Response};
use region_selector::ui::{self, Viewport};
use unicode_width::UnicodeWidthStr;

pub const TEST_BASE_URL: &str = "http://test/api/v1";
pub const TERMINAL_WIDTH: u16 = 120;
pub const TERMINAL_HEIGHT: u16 = 50;

/// Region with a square outline of `side` view-box units at `(x, y)`.
pub fn region(id: &str, name: &str, tier: Tier, is_active: bool, x: f64, y: f64) -> Region {
    let side = 120.0;
    Region {
        id: id.to_string(),
        display_name: name.to_string(),
        emoji: "📍".to_string(),
        coordinates: Coordinates {
            latitude: 37.5,
            longitude: 127.0,
        },
        map_position: MapPosition {
            x: x + side / 2.0,
            y: y + side / 2.0,
        },
        svg_path: format!(
            "M{x},{y} L{r},{y} L{r},{b} L{x},{b} Z",
            x = x,
            y = y,
            r = x + side,
            b = y + side
        ),
        popularity_score: 80.0,
        available_places_count: 50,
        keywords: vec!["데이트".to_string()],
        tier,
        is_active,
    }
}

pub fn hongdae() -> Region {
    Region {
        emoji: "🎨".to_string(),
        coordinates: Coordinates {
            latitude: 37.55634,
            longitude: 126.92386,
        },
        popularity_score: 95.0,
        available_places_count: 150,
        keywords: vec!["힙한".to_string(), "예술".to_string(), "클럽".to_string()],
        ..region("hongdae", "홍대", Tier::Essential, true, 100.0, 100.0)
    }
}

pub fn gangnam() -> Region {
    Region {
        emoji: "🏙️".to_string(),
        popularity_score: 90.0,
        available_places_count: 200,
        keywords: vec!["쇼핑".to_string()],
        ..region("gangnam", "강남", Tier::Essential, true, 500.0, 350.0)
    }
}

pub fn two_regions() -> Vec<Region> {
    vec![hongdae(), gangnam()]
}

pub fn ok_response(regions: &[Region]) -> MockResponse {
    let body = RegionMetadataResponse {
        regions: regions.to_vec(),
    };
    MockResponse::Success(Response::json_body(200, &body))
}

/// App wired to a mock HTTP client answering every URL with `response`.
pub fn app_with_response(response: MockResponse) -> (App, MockHttpClient) {
    let client = MockHttpClient::new();
    client.set_default_response(response);
    let http: Arc<dyn HttpClient> = Arc::new(client.clone());
    let api = Arc::new(RegionApi::new(http, TEST_BASE_URL));
    let app = App::new(api, Viewport::new(TERMINAL_WIDTH, TERMINAL_HEIGHT, None));
    (app, client)
}

/// Wait for the next loader message and apply it.
pub async fn pump(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    let msg = rx.recv().await.expect("loader channel closed");
    app.handle_message(msg);
    app.message_rx = Some(rx);
    app.sync_views();
}

/// Mount and wait for the load to finish.
pub async fn mounted(response: MockResponse) -> (App, MockHttpClient) {
    let (mut app, client) = app_with_response(response);
    app.mount();
    pump(&mut app).await;
    (app, client)
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(TERMINAL_WIDTH, TERMINAL_HEIGHT)).unwrap()
}

/// Render one frame and return the screen as text.
pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

/// Buffer contents as text, skipping the filler cells after wide glyphs.
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        let mut skip = 0;
        for x in 0..buffer.area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            skip = symbol.width().saturating_sub(1);
            text.push_str(symbol);
        }
        text.push('\n');
    }
    text
}
