//! Rasterizer for a small subset of SVG.
//!
//! Main features:
//!  - basic shapes: circle, ellipse, line, polyline, polygon, rect
//!  - `transform`/`transform-origin` attributes (translate, rotate, scale),
//!    applied to integer geometry at build time
//!  - painter's algorithm rendering into an RGB canvas, PNG output
//!
//! ```no_run
//! use svgrast::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::parse(
//!     r#"<svg width="64" height="64">
//!          <circle cx="32" cy="32" r="20" fill="teal"/>
//!        </svg>"#,
//! )?;
//! doc.rasterize().write_png(std::fs::File::create("out.png")?)?;
//! # Ok(())
//! # }
//! ```
#![deny(warnings)]

mod canvas;
mod color;
mod geometry;
mod shape;
mod svg;
mod transform;

pub use canvas::Canvas;
pub use color::{ColorError, Rgb};
pub use geometry::Point;
pub use shape::Shape;
pub use svg::{Document, SvgError};
pub use transform::{TransformList, TransformOp};
