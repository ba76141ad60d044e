use crate::{Point, Shape};
use tracing::debug;

/// Single operation of a `transform` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOp {
    Translate(Point),
    /// degrees, clockwise on a y-down canvas
    Rotate(i32),
    /// uniform integer factor; a second `scale` component is parsed but
    /// ignored, only uniform scaling is supported
    Scale(i32),
}

/// Ordered sequence of transform operations
///
/// Operations are applied one by one in left-to-right textual order directly
/// to the shape geometry; no combined matrix is ever built. Results are order
/// dependent and truncation error accumulates across steps, that is the
/// intended semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformList(Vec<TransformOp>);

impl TransformList {
    /// Parse a `transform` attribute value
    ///
    /// The accepted forms are `translate(dx dy)` (also with a comma),
    /// `rotate(angle)` and `scale(sx)`/`scale(sx,sy)`. A token that does not
    /// match any of those forms is skipped and the remaining tokens are still
    /// processed, so parsing never fails.
    pub fn parse(text: &str) -> Self {
        let mut ops = Vec::new();
        for token in text.split_inclusive(')') {
            match parse_op(token) {
                Some(op) => ops.push(op),
                None => {
                    if !token.trim().is_empty() {
                        debug!(token, "ignoring malformed transform operation");
                    }
                }
            }
        }
        Self(ops)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.0
    }

    /// Apply all operations to the shape in order, rotating and scaling
    /// around the provided pivot
    pub fn apply(&self, shape: &mut Shape, origin: Point) {
        for op in &self.0 {
            match *op {
                TransformOp::Translate(delta) => shape.translate(delta),
                TransformOp::Rotate(degrees) => shape.rotate(origin, degrees),
                TransformOp::Scale(factor) => shape.scale(origin, factor),
            }
        }
    }
}

/// Parse a single `name(arg ...)` token, `None` if it is malformed
fn parse_op(token: &str) -> Option<TransformOp> {
    let token = token.trim().strip_suffix(')')?;
    let (name, args) = token.split_once('(')?;
    let args: Vec<i32> = args
        .split([' ', '\t', '\n', ','])
        .filter(|arg| !arg.is_empty())
        .map(|arg| arg.parse().ok())
        .collect::<Option<_>>()?;
    match (name.trim(), args.as_slice()) {
        ("translate", [dx, dy]) => Some(TransformOp::Translate(Point::new(*dx, *dy))),
        ("rotate", [angle]) => Some(TransformOp::Rotate(*angle)),
        ("scale", [sx]) | ("scale", [sx, _]) => Some(TransformOp::Scale(*sx)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn line() -> Shape {
        Shape::Line {
            stroke: Rgb::BLACK,
            start: Point::new(0, 0),
            end: Point::new(10, 0),
        }
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            TransformList::parse("translate(4 5) translate(4,5) rotate(90) scale(2) scale(2,3)")
                .ops(),
            &[
                TransformOp::Translate(Point::new(4, 5)),
                TransformOp::Translate(Point::new(4, 5)),
                TransformOp::Rotate(90),
                TransformOp::Scale(2),
                TransformOp::Scale(2),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(TransformList::parse("").is_empty());
        assert!(TransformList::parse("   ").is_empty());
    }

    #[test]
    fn test_malformed_token_skipped() {
        // unknown name, wrong arity and junk must not abort the valid tail
        let list = TransformList::parse("foo(1,2) rotate(90) translate(1) scale(2)");
        assert_eq!(list.ops(), &[TransformOp::Rotate(90), TransformOp::Scale(2)]);
    }

    #[test]
    fn test_apply_order_matters() {
        let origin = Point::new(0, 0);

        let mut first = line();
        TransformList::parse("translate(10 0) rotate(90)").apply(&mut first, origin);
        let mut second = line();
        TransformList::parse("rotate(90) translate(10 0)").apply(&mut second, origin);

        assert_eq!(
            first,
            Shape::Line {
                stroke: Rgb::BLACK,
                start: Point::new(0, 10),
                end: Point::new(0, 20),
            }
        );
        assert_eq!(
            second,
            Shape::Line {
                stroke: Rgb::BLACK,
                start: Point::new(10, 0),
                end: Point::new(10, 10),
            }
        );
        assert_ne!(first, second);
    }

    #[test]
    fn test_apply_pivot() {
        let mut shape = Shape::Circle {
            fill: Rgb::BLACK,
            center: Point::new(4, 0),
            radius: 2,
        };
        TransformList::parse("scale(3)").apply(&mut shape, Point::new(4, 0));
        assert_eq!(
            shape,
            Shape::Circle {
                fill: Rgb::BLACK,
                center: Point::new(4, 0),
                radius: 6,
            }
        );
    }
}
