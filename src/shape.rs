use crate::{Canvas, Point, Rgb};

/// Geometric primitive of a vector document
///
/// The variant set is closed: every operation is a single exhaustive match so
/// a missing case is a compile error. `rect` is not a variant of its own, it
/// is lowered to a `Polygon` at construction time, and a circle keeps a single
/// integer radius instead of the ellipse's radius pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Ellipse {
        fill: Rgb,
        center: Point,
        /// radius along x in `radius.x`, along y in `radius.y`
        radius: Point,
    },
    Circle {
        fill: Rgb,
        center: Point,
        radius: i32,
    },
    Polyline {
        stroke: Rgb,
        /// open chain of straight segments, at least 2 points
        points: Vec<Point>,
    },
    Line {
        stroke: Rgb,
        start: Point,
        end: Point,
    },
    Polygon {
        fill: Rgb,
        /// closed filled region, at least 2 points
        points: Vec<Point>,
    },
}

impl Shape {
    /// Construct a rectangle as its 4-corner polygon
    ///
    /// Edges are exclusive: the corners are `(x, y)`, `(x+w, y)`,
    /// `(x+w, y+h)`, `(x, y+h)`, so together with the even-odd polygon fill a
    /// `w x h` rectangle covers exactly `w * h` pixels.
    pub fn rect(fill: Rgb, upper_left: Point, width: i32, height: i32) -> Self {
        let Point { x, y } = upper_left;
        Shape::Polygon {
            fill,
            points: vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
        }
    }

    /// Paint the shape onto the canvas
    ///
    /// Side effect only on the canvas, the shape itself is unchanged.
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Shape::Ellipse {
                fill,
                center,
                radius,
            } => canvas.draw_ellipse(*center, *radius, *fill),
            Shape::Circle {
                fill,
                center,
                radius,
            } => canvas.draw_ellipse(*center, Point::new(*radius, *radius), *fill),
            Shape::Polyline { stroke, points } => {
                for pair in points.windows(2) {
                    canvas.draw_line(pair[0], pair[1], *stroke);
                }
            }
            Shape::Line { stroke, start, end } => canvas.draw_line(*start, *end, *stroke),
            Shape::Polygon { fill, points } => canvas.draw_polygon(points, *fill),
        }
    }

    /// Move the shape by the provided delta
    pub fn translate(&mut self, delta: Point) {
        match self {
            Shape::Ellipse { center, .. } | Shape::Circle { center, .. } => {
                *center = center.translate(delta);
            }
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => {
                *points = points.iter().map(|p| p.translate(delta)).collect();
            }
            Shape::Line { start, end, .. } => {
                *start = start.translate(delta);
                *end = end.translate(delta);
            }
        }
    }

    /// Rotate the shape around `origin` by `degrees` (clockwise, y-down)
    pub fn rotate(&mut self, origin: Point, degrees: i32) {
        match self {
            Shape::Ellipse { center, .. } | Shape::Circle { center, .. } => {
                *center = center.rotate(origin, degrees);
            }
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => {
                *points = points.iter().map(|p| p.rotate(origin, degrees)).collect();
            }
            Shape::Line { start, end, .. } => {
                *start = start.rotate(origin, degrees);
                *end = end.rotate(origin, degrees);
            }
        }
    }

    /// Scale the shape relative to `origin` by a uniform integer factor
    pub fn scale(&mut self, origin: Point, factor: i32) {
        match self {
            Shape::Ellipse { center, radius, .. } => {
                *center = center.scale(origin, factor);
                *radius = Point::new(radius.x * factor, radius.y * factor);
            }
            Shape::Circle { center, radius, .. } => {
                *center = center.scale(origin, factor);
                *radius *= factor;
            }
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => {
                *points = points.iter().map(|p| p.scale(origin, factor)).collect();
            }
            Shape::Line { start, end, .. } => {
                *start = start.scale(origin, factor);
                *end = end.scale(origin, factor);
            }
        }
    }
}
