use crate::{Point, Rgb};
use std::{fmt, io::Write};

/// Owned row-major RGB pixel buffer with the drawing primitives the shape
/// variants need: filled ellipse, line segment and filled polygon.
///
/// Coordinates are y-down with the origin in the upper left corner. All
/// primitives silently clip to the canvas bounds.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas filled with white
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Rgb::WHITE; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get pixel color, `None` if outside of the canvas
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some(self.data[y as usize * self.width + x as usize])
        }
    }

    /// Set pixel color, pixels outside of the canvas are discarded
    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.data[y as usize * self.width + x as usize] = color;
        }
    }

    /// Draw a filled axis-aligned ellipse
    ///
    /// A pixel is painted when `dx^2 * ry^2 + dy^2 * rx^2 <= rx^2 * ry^2`,
    /// the boundary included. The test is evaluated in `i128` so no radius
    /// that fits in a point can overflow; iteration is clipped to the canvas
    /// before it starts.
    pub fn draw_ellipse(&mut self, center: Point, radius: Point, fill: Rgb) {
        if radius.x < 0 || radius.y < 0 {
            return;
        }
        let (rx, ry) = (radius.x as i128, radius.y as i128);
        let limit = rx * rx * ry * ry;
        let y_min = (center.y as i64 - radius.y as i64).clamp(0, self.height as i64) as i32;
        let y_max = (center.y as i64 + radius.y as i64).min(self.height as i64 - 1) as i32;
        let x_min = (center.x as i64 - radius.x as i64).clamp(0, self.width as i64) as i32;
        let x_max = (center.x as i64 + radius.x as i64).min(self.width as i64 - 1) as i32;
        for y in y_min..=y_max {
            let dy = (y as i64 - center.y as i64) as i128;
            for x in x_min..=x_max {
                let dx = (x as i64 - center.x as i64) as i128;
                if dx * dx * ry * ry + dy * dy * rx * rx <= limit {
                    self.put(x, y, fill);
                }
            }
        }
    }

    /// Draw a one pixel wide line segment, endpoints included
    pub fn draw_line(&mut self, p0: Point, p1: Point, stroke: Rgb) {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.put(p0.x, p0.y, stroke);
            return;
        }
        // step along the major axis, rounding the minor one to the nearest pixel
        let x_inc = dx as f64 / steps as f64;
        let y_inc = dy as f64 / steps as f64;
        let mut x = p0.x as f64;
        let mut y = p0.y as f64;
        for _ in 0..=steps {
            self.put(x.round() as i32, y.round() as i32, stroke);
            x += x_inc;
            y += y_inc;
        }
    }

    /// Draw a filled polygon using the even-odd (crossing number) rule
    pub fn draw_polygon(&mut self, points: &[Point], fill: Rgb) {
        if points.len() < 2 {
            return;
        }
        let (mut x_min, mut x_max) = (points[0].x, points[0].x);
        let (mut y_min, mut y_max) = (points[0].y, points[0].y);
        for p in &points[1..] {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                if polygon_contains(points, Point::new(x, y)) {
                    self.put(x, y, fill);
                }
            }
        }
    }

    /// Encode the canvas as an 8-bit RGB PNG
    pub fn write_png(&self, out: impl Write) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(out, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        let mut data = Vec::with_capacity(self.width * self.height * 3);
        for pixel in &self.data {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b]);
        }
        writer.write_image_data(&data)?;
        Ok(())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Canvas {}x{}", self.width, self.height)?;
        for row in self.data.chunks(self.width.max(1)) {
            for pixel in row {
                write!(f, " {:?}", pixel)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Even-odd test: count edge crossings of the ray going right from the point
fn polygon_contains(points: &[Point], point: Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let t = (point.y - pi.y) as f64 / (pj.y - pi.y) as f64;
            let x = pi.x as f64 + t * (pj.x - pi.x) as f64;
            if (point.x as f64) < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
