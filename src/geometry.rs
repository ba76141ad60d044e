use std::{
    fmt,
    ops::{Add, Neg, Sub},
};

const PI: f64 = std::f64::consts::PI;

/// Value representing a 2D point or vector with integer coordinates.
///
/// Canvas coordinates grow right and down. All transform math that has to go
/// through floating point is truncated toward zero before it is stored back,
/// never rounded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move the point by the provided delta
    pub fn translate(self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Rotate the point around `origin` by `degrees`
    ///
    /// Positive angles rotate clockwise on a y-down canvas. Computed with the
    /// standard rotation matrix in `f64` and truncated back to integers.
    pub fn rotate(self, origin: Point, degrees: i32) -> Self {
        let angle = degrees as f64 * PI / 180.0;
        let (sin, cos) = angle.sin_cos();
        let dx = (self.x - origin.x) as f64;
        let dy = (self.y - origin.y) as f64;
        Self {
            x: (origin.x as f64 + dx * cos - dy * sin) as i32,
            y: (origin.y as f64 + dx * sin + dy * cos) as i32,
        }
    }

    /// Scale the point relative to `origin` by a uniform integer factor
    pub fn scale(self, origin: Point, factor: i32) -> Self {
        Self {
            x: origin.x + (self.x - origin.x) * factor,
            y: origin.y + (self.y - origin.y) * factor,
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from(xy: (i32, i32)) -> Self {
        Self { x: xy.0, y: xy.1 }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Self::Output {
        self.translate(other)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
