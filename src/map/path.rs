//! Parser for the `svg_path` outline strings.
//!
//! Supports the SVG path commands `M L H V C S Q T A Z` in absolute and
//! relative forms, comma or whitespace separators, and implicit repeated
//! commands. Curves and arcs are flattened into line segments so the result
//! is a set of closed rings in view-box space.

use std::f64::consts::TAU;

use geo::{LineString, MultiPolygon, Polygon};
use thiserror::Error;

use super::geometry::Point;

/// Segments used to flatten one Bézier curve or elliptical arc.
const CURVE_STEPS: usize = 12;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),
    #[error("path must start with a move command")]
    MissingMoveTo,
    #[error("expected a number at offset {0}")]
    ExpectedNumber(usize),
    #[error("expected an arc flag at offset {0}")]
    ExpectedFlag(usize),
    #[error("path has no drawable segments")]
    Empty,
}

/// Parse a path string into one exterior-only polygon per subpath. Open
/// subpaths are closed implicitly (filled shapes always close). Subpaths
/// with fewer than two points are dropped.
pub fn parse_path(input: &str) -> Result<MultiPolygon<f64>, PathError> {
    let mut parser = PathParser::new(input);
    parser.run()?;
    let rings: Vec<Polygon<f64>> = parser
        .rings
        .into_iter()
        .filter(|points| points.len() >= 2)
        .map(|points| Polygon::new(LineString::from(points), vec![]))
        .collect();
    if rings.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(MultiPolygon(rings))
}

struct PathParser<'a> {
    bytes: &'a [u8],
    pos: usize,
    current: Point,
    subpath_start: Point,
    /// Second control point of the previous cubic, for `S`.
    last_cubic_ctrl: Option<Point>,
    /// Control point of the previous quadratic, for `T`.
    last_quad_ctrl: Option<Point>,
    rings: Vec<Vec<Point>>,
    active: Vec<Point>,
}

impl<'a> PathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
            current: Point::from((0.0, 0.0)),
            subpath_start: Point::from((0.0, 0.0)),
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
            rings: Vec::new(),
            active: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), PathError> {
        let mut command: Option<u8> = None;
        loop {
            self.skip_separators();
            let Some(&byte) = self.bytes.get(self.pos) else {
                break;
            };

            if byte.is_ascii_alphabetic() {
                self.pos += 1;
                command = Some(byte);
                if byte == b'Z' || byte == b'z' {
                    self.close_subpath();
                    continue;
                }
            } else if command.is_none() {
                return Err(PathError::MissingMoveTo);
            }

            let Some(cmd) = command else {
                return Err(PathError::MissingMoveTo);
            };
            if self.active.is_empty() && self.rings.is_empty() && !matches!(cmd, b'M' | b'm') {
                return Err(PathError::MissingMoveTo);
            }
            match cmd {
                b'Z' | b'z' => {
                    // Numbers directly after Z have no command to bind to.
                    return Err(PathError::ExpectedNumber(self.pos));
                }
                _ => self.apply(cmd)?,
            }

            // Implicit repetition: extra pairs after M are treated as L.
            command = match cmd {
                b'M' => Some(b'L'),
                b'm' => Some(b'l'),
                other => Some(other),
            };
        }
        self.finish_subpath();
        Ok(())
    }

    fn apply(&mut self, cmd: u8) -> Result<(), PathError> {
        let relative = cmd.is_ascii_lowercase();
        let origin = if relative { self.current } else { Point::from((0.0, 0.0)) };

        match cmd.to_ascii_uppercase() {
            b'M' => {
                let p = self.point(origin)?;
                self.finish_subpath();
                self.active.push(p);
                self.current = p;
                self.subpath_start = p;
                self.reset_controls();
            }
            b'L' => {
                let p = self.point(origin)?;
                self.line_to(p);
                self.reset_controls();
            }
            b'H' => {
                let x = self.number()? + origin.x;
                self.line_to(Point::from((x, self.current.y)));
                self.reset_controls();
            }
            b'V' => {
                let y = self.number()? + origin.y;
                self.line_to(Point::from((self.current.x, y)));
                self.reset_controls();
            }
            b'C' => {
                let c1 = self.point(origin)?;
                let c2 = self.point(origin)?;
                let end = self.point(origin)?;
                self.cubic_to(c1, c2, end);
            }
            b'S' => {
                let c1 = self.reflected(self.last_cubic_ctrl);
                let c2 = self.point(origin)?;
                let end = self.point(origin)?;
                self.cubic_to(c1, c2, end);
            }
            b'Q' => {
                let ctrl = self.point(origin)?;
                let end = self.point(origin)?;
                self.quad_to(ctrl, end);
            }
            b'T' => {
                let ctrl = self.reflected(self.last_quad_ctrl);
                let end = self.point(origin)?;
                self.quad_to(ctrl, end);
            }
            b'A' => {
                let rx = self.number()?;
                let ry = self.number()?;
                let rotation = self.number()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let end = self.point(origin)?;
                self.arc_to(rx, ry, rotation, large_arc, sweep, end);
                self.reset_controls();
            }
            _ => return Err(PathError::UnsupportedCommand(cmd as char)),
        }
        Ok(())
    }

    fn line_to(&mut self, p: Point) {
        if self.active.is_empty() {
            self.active.push(self.current);
        }
        self.active.push(p);
        self.current = p;
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) {
        let start = self.current;
        for step in 1..=CURVE_STEPS {
            let t = step as f64 / CURVE_STEPS as f64;
            let mt = 1.0 - t;
            let x = mt.powi(3) * start.x
                + 3.0 * mt.powi(2) * t * c1.x
                + 3.0 * mt * t.powi(2) * c2.x
                + t.powi(3) * end.x;
            let y = mt.powi(3) * start.y
                + 3.0 * mt.powi(2) * t * c1.y
                + 3.0 * mt * t.powi(2) * c2.y
                + t.powi(3) * end.y;
            self.line_to(Point::from((x, y)));
        }
        self.current = end;
        self.last_cubic_ctrl = Some(c2);
        self.last_quad_ctrl = None;
    }

    fn quad_to(&mut self, ctrl: Point, end: Point) {
        let start = self.current;
        for step in 1..=CURVE_STEPS {
            let t = step as f64 / CURVE_STEPS as f64;
            let mt = 1.0 - t;
            let x = mt * mt * start.x + 2.0 * mt * t * ctrl.x + t * t * end.x;
            let y = mt * mt * start.y + 2.0 * mt * t * ctrl.y + t * t * end.y;
            self.line_to(Point::from((x, y)));
        }
        self.current = end;
        self.last_quad_ctrl = Some(ctrl);
        self.last_cubic_ctrl = None;
    }

    /// Elliptical arc from the current point, converted from endpoint to
    /// centre form. Radii too small to span the chord are scaled up; a zero
    /// radius degrades to a straight line.
    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    ) {
        let start = self.current;
        if start == end {
            return;
        }
        let (mut rx, mut ry) = (rx.abs(), ry.abs());
        if rx == 0.0 || ry == 0.0 {
            self.line_to(end);
            return;
        }

        let (sin_phi, cos_phi) = rotation.to_radians().sin_cos();
        let half_dx = (start.x - end.x) / 2.0;
        let half_dy = (start.y - end.y) / 2.0;
        let x1 = cos_phi * half_dx + sin_phi * half_dy;
        let y1 = -sin_phi * half_dx + cos_phi * half_dy;

        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let numerator = rx * rx * ry * ry - rx * rx * y1 * y1 - ry * ry * x1 * x1;
        let denominator = rx * rx * y1 * y1 + ry * ry * x1 * x1;
        let mut coef = (numerator / denominator).max(0.0).sqrt();
        if large_arc == sweep {
            coef = -coef;
        }
        let cx1 = coef * rx * y1 / ry;
        let cy1 = -coef * ry * x1 / rx;
        let cx = cos_phi * cx1 - sin_phi * cy1 + (start.x + end.x) / 2.0;
        let cy = sin_phi * cx1 + cos_phi * cy1 + (start.y + end.y) / 2.0;

        let start_angle = vector_angle((1.0, 0.0), ((x1 - cx1) / rx, (y1 - cy1) / ry));
        let mut sweep_angle = vector_angle(
            ((x1 - cx1) / rx, (y1 - cy1) / ry),
            ((-x1 - cx1) / rx, (-y1 - cy1) / ry),
        );
        if !sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        } else if sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }

        for step in 1..CURVE_STEPS {
            let theta = start_angle + sweep_angle * step as f64 / CURVE_STEPS as f64;
            let (sin_t, cos_t) = theta.sin_cos();
            self.line_to(Point::from((
                cx + rx * cos_t * cos_phi - ry * sin_t * sin_phi,
                cy + rx * cos_t * sin_phi + ry * sin_t * cos_phi,
            )));
        }
        self.line_to(end);
    }

    /// Reflection of the previous control point about the current point,
    /// or the current point itself when there is none.
    fn reflected(&self, ctrl: Option<Point>) -> Point {
        match ctrl {
            Some(c) => Point::from((2.0 * self.current.x - c.x, 2.0 * self.current.y - c.y)),
            None => self.current,
        }
    }

    fn reset_controls(&mut self) {
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    fn close_subpath(&mut self) {
        self.finish_subpath();
        self.current = self.subpath_start;
        self.reset_controls();
    }

    fn finish_subpath(&mut self) {
        if !self.active.is_empty() {
            let points = std::mem::take(&mut self.active);
            self.rings.push(points);
        }
    }

    fn point(&mut self, origin: Point) -> Result<Point, PathError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::from((origin.x + x, origin.y + y)))
    }

    /// Arc flags are a single `0` or `1` and may be packed without
    /// separators.
    fn flag(&mut self) -> Result<bool, PathError> {
        self.skip_separators();
        let flag = match self.bytes.get(self.pos) {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(PathError::ExpectedFlag(self.pos)),
        };
        self.pos += 1;
        Ok(flag)
    }

    fn number(&mut self) -> Result<f64, PathError> {
        self.skip_separators();
        let start = self.pos;
        let mut end = start;

        if matches!(self.bytes.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let mut seen_digit = false;
        let mut seen_dot = false;
        while let Some(&b) = self.bytes.get(end) {
            if b.is_ascii_digit() {
                seen_digit = true;
            } else if b == b'.' && !seen_dot {
                seen_dot = true;
            } else {
                break;
            }
            end += 1;
        }
        if !seen_digit {
            return Err(PathError::ExpectedNumber(start));
        }
        if matches!(self.bytes.get(end), Some(b'e') | Some(b'E')) {
            let mut exp_end = end + 1;
            if matches!(self.bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let digits_start = exp_end;
            while self.bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
                exp_end += 1;
            }
            if exp_end > digits_start {
                end = exp_end;
            }
        }

        let text = std::str::from_utf8(&self.bytes[start..end])
            .map_err(|_| PathError::ExpectedNumber(start))?;
        let value = text
            .parse::<f64>()
            .map_err(|_| PathError::ExpectedNumber(start))?;
        self.pos = end;
        Ok(value)
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}

/// Signed angle from `u` to `v`.
fn vector_angle(u: (f64, f64), v: (f64, f64)) -> f64 {
    let cross = u.0 * v.1 - u.1 * v.0;
    let dot = u.0 * v.0 + u.1 * v.1;
    cross.atan2(dot)
}
