//! Draws a [`MapScene`] onto a braille canvas and maps terminal cells back
//! into view-box space for pointer events.
//!
//! The canvas y axis grows upward while the view box grows downward, so
//! every y coordinate is flipped on the way in.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::map::{LabelKind, MapScene, Point, ShapeNode, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};
use crate::ui::theme::{blend, MAP_BACKGROUND, MAP_LABEL};

/// Braille dots per cell.
const DOTS_X: f64 = 2.0;
const DOTS_Y: f64 = 4.0;

/// A shape resolved to canvas coordinates and final colors.
#[derive(Debug, Clone)]
pub struct RasterShape {
    pub fill: Color,
    pub stroke: Color,
    pub fill_points: Vec<(f64, f64)>,
    pub strokes: Vec<(f64, f64, f64, f64)>,
}

/// Resolve every shape of `scene` for a canvas of `area` cells.
pub fn rasterize(scene: &MapScene, area: Rect) -> Vec<RasterShape> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let step_x = VIEW_BOX_WIDTH / (area.width as f64 * DOTS_X);
    let step_y = VIEW_BOX_HEIGHT / (area.height as f64 * DOTS_Y);

    scene
        .shapes()
        .iter()
        .filter_map(|shape| rasterize_shape(shape, step_x, step_y))
        .collect()
}

fn rasterize_shape(shape: &ShapeNode, step_x: f64, step_y: f64) -> Option<RasterShape> {
    let outline = shape.outline.as_ref()?;
    let style = shape.style;

    let fill_points = outline
        .fill_samples(step_x, step_y)
        .into_iter()
        .map(|(x, y)| (x, flip(y)))
        .collect();

    let mut strokes: Vec<(f64, f64, f64, f64)> = outline
        .edges()
        .map(|(a, b)| (a.x, flip(a.y), b.x, flip(b.y)))
        .collect();
    // Extra weight is drawn as copies shifted by one dot.
    for pass in 1..style.stroke_weight.saturating_sub(1) {
        let dx = step_x * pass as f64;
        let extra: Vec<_> = outline
            .edges()
            .map(|(a, b)| (a.x + dx, flip(a.y), b.x + dx, flip(b.y)))
            .collect();
        strokes.extend(extra);
    }

    Some(RasterShape {
        fill: blend(style.fill, MAP_BACKGROUND, style.opacity),
        stroke: blend(style.stroke, MAP_BACKGROUND, style.opacity),
        fill_points,
        strokes,
    })
}

fn flip(y: f64) -> f64 {
    VIEW_BOX_HEIGHT - y
}

/// Render the scene into `area`. Shapes are painted in scene order, labels
/// on a layer above all shapes.
pub fn render_map(frame: &mut Frame, area: Rect, scene: &MapScene) {
    let shapes = rasterize(scene, area);
    let units_per_column = if area.width > 0 {
        VIEW_BOX_WIDTH / area.width as f64
    } else {
        0.0
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(MAP_BACKGROUND)
        .x_bounds([0.0, VIEW_BOX_WIDTH])
        .y_bounds([0.0, VIEW_BOX_HEIGHT])
        .paint(|ctx| {
            for shape in &shapes {
                ctx.draw(&Points {
                    coords: &shape.fill_points,
                    color: shape.fill,
                });
                for &(x1, y1, x2, y2) in &shape.strokes {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, shape.stroke));
                }
            }
            ctx.layer();
            for label in scene.labels() {
                let width = label.text.width() as f64 * units_per_column;
                let x = (label.position.x - width / 2.0).clamp(0.0, VIEW_BOX_WIDTH);
                let y = flip(label.position.y).clamp(0.0, VIEW_BOX_HEIGHT);
                let style = match label.kind {
                    LabelKind::Emoji => Style::default(),
                    LabelKind::Name => Style::default()
                        .fg(MAP_LABEL)
                        .add_modifier(Modifier::BOLD),
                };
                ctx.print(x, y, Line::from(Span::styled(label.text.clone(), style)));
            }
        });
    frame.render_widget(canvas, area);
}

/// View-box point under the centre of terminal cell (`column`, `row`), or
/// `None` when the cell is outside `area`.
pub fn cell_to_view_box(area: Rect, column: u16, row: u16) -> Option<Point> {
    if column < area.x
        || column >= area.x + area.width
        || row < area.y
        || row >= area.y + area.height
    {
        return None;
    }
    let rel_x = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let rel_y = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    Some(Point::from((rel_x * VIEW_BOX_WIDTH, rel_y * VIEW_BOX_HEIGHT)))
}

/// Terminal cell containing view-box point `point`.
pub fn view_box_to_cell(area: Rect, point: Point) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if !(0.0..VIEW_BOX_WIDTH).contains(&point.x) || !(0.0..VIEW_BOX_HEIGHT).contains(&point.y) {
        return None;
    }
    let column = (point.x / VIEW_BOX_WIDTH * f64::from(area.width)).floor() as u16;
    let row = (point.y / VIEW_BOX_HEIGHT * f64::from(area.height)).floor() as u16;
    Some((area.x + column, area.y + row))
}
