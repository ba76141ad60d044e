//! SVG document builder
//!
//! Walks the parsed XML tree, constructs one shape per recognized element and
//! applies its declared transforms immediately, so the document ends up with
//! final geometry in rendering order.
use crate::{Canvas, Point, Rgb, Shape, TransformList};
use roxmltree::Node;
use std::{fmt, str::FromStr};
use tracing::{debug, debug_span};

/// Parsed vector document: canvas dimensions plus shapes in paint order
///
/// Shapes are stored in document order, which is also the rendering order:
/// later shapes paint over earlier ones and there is no z-index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// canvas width in `size.x`, height in `size.y`
    pub size: Point,
    shapes: Vec<Shape>,
}

impl Document {
    /// Build a document from SVG text
    ///
    /// Fails only when the text is not well-formed XML. Unrecognized elements
    /// are skipped, missing numeric attributes default to 0 and missing or
    /// unresolvable colors fall back to opaque black.
    pub fn parse(text: &str) -> Result<Self, SvgError> {
        debug_span!("[build]").in_scope(|| {
            let doc = roxmltree::Document::parse(text)?;
            let root = doc.root_element();
            let size = Point::new(attr_i32(root, "width"), attr_i32(root, "height"));

            let mut shapes = Vec::new();
            for node in root.children().filter(Node::is_element) {
                if let Some(mut shape) = build_shape(node) {
                    let transform = node
                        .attribute("transform")
                        .map(TransformList::parse)
                        .unwrap_or_default();
                    if !transform.is_empty() {
                        transform.apply(&mut shape, transform_origin(node));
                    }
                    shapes.push(shape);
                }
            }
            Ok(Self { size, shapes })
        })
    }

    /// Shapes in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Paint all shapes onto the canvas in document order
    pub fn render(&self, canvas: &mut Canvas) {
        debug_span!("[render]").in_scope(|| {
            for shape in &self.shapes {
                shape.draw(canvas);
            }
        })
    }

    /// Create a canvas matching the document dimensions and render into it
    pub fn rasterize(&self) -> Canvas {
        let mut canvas = Canvas::new(self.size.x.max(0) as usize, self.size.y.max(0) as usize);
        self.render(&mut canvas);
        canvas
    }
}

impl FromStr for Document {
    type Err = SvgError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// Construct a shape from one element, `None` if the element is skipped
fn build_shape(node: Node<'_, '_>) -> Option<Shape> {
    let shape = match node.tag_name().name() {
        "circle" => Shape::Circle {
            fill: attr_color(node, "fill"),
            center: Point::new(attr_i32(node, "cx"), attr_i32(node, "cy")),
            radius: attr_i32(node, "r"),
        },
        "ellipse" => Shape::Ellipse {
            fill: attr_color(node, "fill"),
            center: Point::new(attr_i32(node, "cx"), attr_i32(node, "cy")),
            radius: Point::new(attr_i32(node, "rx"), attr_i32(node, "ry")),
        },
        "line" => Shape::Line {
            stroke: attr_color(node, "stroke"),
            start: Point::new(attr_i32(node, "x1"), attr_i32(node, "y1")),
            end: Point::new(attr_i32(node, "x2"), attr_i32(node, "y2")),
        },
        "polyline" => Shape::Polyline {
            stroke: attr_color(node, "stroke"),
            points: attr_points(node)?,
        },
        "polygon" => Shape::Polygon {
            fill: attr_color(node, "fill"),
            points: attr_points(node)?,
        },
        "rect" => Shape::rect(
            attr_color(node, "fill"),
            Point::new(attr_i32(node, "x"), attr_i32(node, "y")),
            attr_i32(node, "width"),
            attr_i32(node, "height"),
        ),
        name => {
            debug!(element = name, "skipping unrecognized element");
            return None;
        }
    };
    Some(shape)
}

/// Numeric attribute truncated toward zero, 0 when absent or unparsable
fn attr_i32(node: Node<'_, '_>, name: &str) -> i32 {
    node.attribute(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .map_or(0, |value| value as i32)
}

/// Color attribute, opaque black when absent or unresolvable
fn attr_color(node: Node<'_, '_>, name: &str) -> Rgb {
    match node.attribute(name) {
        None => Rgb::BLACK,
        Some(token) => token.parse().unwrap_or_else(|error| {
            debug!(token, %error, "falling back to black");
            Rgb::BLACK
        }),
    }
}

/// `points` attribute: whitespace-separated list of `x,y` pairs
///
/// Malformed pairs are dropped; an element with fewer than 2 usable points is
/// skipped entirely since neither an open chain nor a filled region can be
/// made out of it.
fn attr_points(node: Node<'_, '_>) -> Option<Vec<Point>> {
    let points: Vec<Point> = node
        .attribute("points")
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            let x: f64 = x.parse().ok()?;
            let y: f64 = y.parse().ok()?;
            Some(Point::new(x as i32, y as i32))
        })
        .collect();
    if points.len() < 2 {
        debug!(
            element = node.tag_name().name(),
            "skipping element with fewer than 2 points"
        );
        None
    } else {
        Some(points)
    }
}

/// `transform-origin` attribute: two whitespace-separated integers, the pivot
/// for rotate/scale of this element; `(0, 0)` when absent
fn transform_origin(node: Node<'_, '_>) -> Point {
    node.attribute("transform-origin")
        .and_then(|value| {
            let mut parts = value.split_whitespace();
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            Some(Point::new(x, y))
        })
        .unwrap_or_default()
}

/// Error while building a document
#[derive(Debug)]
pub enum SvgError {
    /// Document is not well-formed XML
    Xml(roxmltree::Error),
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::Xml(error) => write!(f, "unable to parse document: {}", error),
        }
    }
}

impl From<roxmltree::Error> for SvgError {
    fn from(error: roxmltree::Error) -> Self {
        Self::Xml(error)
    }
}

impl std::error::Error for SvgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SvgError::Xml(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() -> Result<(), SvgError> {
        let doc = Document::parse(r#"<svg width="64" height="48"></svg>"#)?;
        assert_eq!(doc.size, Point::new(64, 48));
        assert!(doc.shapes().is_empty());

        // missing attributes default to zero
        let doc = Document::parse("<svg></svg>")?;
        assert_eq!(doc.size, Point::new(0, 0));
        Ok(())
    }

    #[test]
    fn test_parse_error() {
        assert!(Document::parse("<svg").is_err());
        assert!(Document::parse("not xml at all").is_err());
    }

    #[test]
    fn test_document_order_preserved() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="10" height="10">
                 <circle cx="5" cy="5" r="2" fill="red"/>
                 <rect x="0" y="0" width="4" height="4" fill="blue"/>
                 <line x1="0" y1="0" x2="9" y2="9" stroke="lime"/>
               </svg>"#,
        )?;
        let kinds: Vec<_> = doc
            .shapes()
            .iter()
            .map(|shape| match shape {
                Shape::Circle { .. } => "circle",
                Shape::Polygon { .. } => "polygon",
                Shape::Line { .. } => "line",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["circle", "polygon", "line"]);
        Ok(())
    }

    #[test]
    fn test_unrecognized_element_skipped() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="10" height="10">
                 <text x="1" y="1">hi</text>
                 <path d="M0 0L5 5"/>
                 <circle cx="3" cy="3" r="1" fill="red"/>
               </svg>"#,
        )?;
        assert_eq!(doc.shapes().len(), 1);
        Ok(())
    }

    #[test]
    fn test_attribute_extraction() -> Result<(), SvgError> {
        let doc = Document::parse(
            r##"<svg width="20" height="20">
                 <ellipse cx="7" cy="8" rx="3" ry="2" fill="#102030"/>
                 <polyline points="0,0 3,4 6,0" stroke="navy"/>
               </svg>"##,
        )?;
        assert_eq!(
            doc.shapes()[0],
            Shape::Ellipse {
                fill: Rgb::new(0x10, 0x20, 0x30),
                center: Point::new(7, 8),
                radius: Point::new(3, 2),
            }
        );
        assert_eq!(
            doc.shapes()[1],
            Shape::Polyline {
                stroke: Rgb::new(0, 0, 128),
                points: vec![Point::new(0, 0), Point::new(3, 4), Point::new(6, 0)],
            }
        );
        Ok(())
    }

    #[test]
    fn test_fractional_attributes_truncate() -> Result<(), SvgError> {
        // fractional values truncate toward zero, they do not default to 0
        let doc = Document::parse(
            r#"<svg width="10" height="10">
                 <circle cx="3.7" cy="2.9" r="1.5" fill="red"/>
                 <polyline points="0.9,1.2 -2.7,4.1 6,0" stroke="navy"/>
               </svg>"#,
        )?;
        assert_eq!(
            doc.shapes()[0],
            Shape::Circle {
                fill: Rgb::new(255, 0, 0),
                center: Point::new(3, 2),
                radius: 1,
            }
        );
        assert_eq!(
            doc.shapes()[1],
            Shape::Polyline {
                stroke: Rgb::new(0, 0, 128),
                points: vec![Point::new(0, 1), Point::new(-2, 4), Point::new(6, 0)],
            }
        );
        Ok(())
    }

    #[test]
    fn test_missing_fill_defaults_to_black() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="10" height="10">
                 <circle cx="5" cy="5" r="2"/>
                 <circle cx="5" cy="5" r="2" fill="so-not-a-color"/>
               </svg>"#,
        )?;
        for shape in doc.shapes() {
            let Shape::Circle { fill, .. } = shape else {
                panic!("expected circles");
            };
            assert_eq!(*fill, Rgb::BLACK);
        }
        Ok(())
    }

    #[test]
    fn test_short_point_list_skipped() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="10" height="10">
                 <polygon points="1,1" fill="red"/>
                 <polyline stroke="red"/>
                 <polygon points="1,1 nope 4,1 4,4" fill="red"/>
               </svg>"#,
        )?;
        // the last polygon survives with its malformed pair dropped
        assert_eq!(doc.shapes().len(), 1);
        assert_eq!(
            doc.shapes()[0],
            Shape::Polygon {
                fill: Rgb::new(255, 0, 0),
                points: vec![Point::new(1, 1), Point::new(4, 1), Point::new(4, 4)],
            }
        );
        Ok(())
    }

    #[test]
    fn test_transform_applied_at_build_time() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="40" height="40">
                 <rect x="0" y="0" width="4" height="2" fill="red"
                       transform="translate(10 0) rotate(90)"/>
               </svg>"#,
        )?;
        let Shape::Polygon { points, .. } = &doc.shapes()[0] else {
            panic!("expected a polygon");
        };
        // corners translated to x 10..14, then rotated clockwise about
        // (0, 0); the x components land on -2 + eps because cos(90) is a
        // hair above zero in f64 and truncation toward zero keeps them at -1
        assert_eq!(
            points,
            &[
                Point::new(0, 10),
                Point::new(0, 14),
                Point::new(-1, 14),
                Point::new(-1, 10),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_transform_origin_pivot() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="40" height="40">
                 <circle cx="10" cy="10" r="2" fill="red"
                         transform="scale(2)" transform-origin="10 10"/>
               </svg>"#,
        )?;
        assert_eq!(
            doc.shapes()[0],
            Shape::Circle {
                fill: Rgb::new(255, 0, 0),
                center: Point::new(10, 10),
                radius: 4,
            }
        );
        Ok(())
    }

    #[test]
    fn test_malformed_transform_recovers() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="40" height="40">
                 <circle cx="1" cy="1" r="1" fill="red"
                         transform="wobble(3) translate(5 5)"/>
               </svg>"#,
        )?;
        assert_eq!(
            doc.shapes()[0],
            Shape::Circle {
                fill: Rgb::new(255, 0, 0),
                center: Point::new(6, 6),
                radius: 1,
            }
        );
        Ok(())
    }

    #[test]
    fn test_painters_algorithm() -> Result<(), SvgError> {
        // the later rect overpaints the overlapping half of the earlier one
        let doc = Document::parse(
            r#"<svg width="8" height="4">
                 <rect x="0" y="0" width="4" height="4" fill="red"/>
                 <rect x="2" y="0" width="4" height="4" fill="blue"/>
               </svg>"#,
        )?;
        let canvas = doc.rasterize();
        assert_eq!(canvas.get(1, 1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(canvas.get(3, 1), Some(Rgb::new(0, 0, 255)));
        assert_eq!(canvas.get(5, 1), Some(Rgb::new(0, 0, 255)));
        assert_eq!(canvas.get(7, 1), Some(Rgb::WHITE));
        Ok(())
    }

    #[test]
    fn test_rect_covers_exact_area() -> Result<(), SvgError> {
        let doc = Document::parse(
            r#"<svg width="12" height="8">
                 <rect x="1" y="2" width="10" height="5" fill="maroon"/>
               </svg>"#,
        )?;
        let canvas = doc.rasterize();
        let fill = Rgb::new(128, 0, 0);
        for y in 0..8 {
            for x in 0..12 {
                let expected = if (1..11).contains(&x) && (2..7).contains(&y) {
                    fill
                } else {
                    Rgb::WHITE
                };
                assert_eq!(canvas.get(x, y), Some(expected), "pixel {x},{y}");
            }
        }
        Ok(())
    }
}
