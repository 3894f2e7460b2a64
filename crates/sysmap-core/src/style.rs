//! Per-shape presentation table consumed by the rendering surface.

use crate::model::Shape;

/// CSS-level styling for one shape. Diamond nodes render as a rotated box;
/// their labels counter-rotate by the same angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub border_radius: &'static str,
    pub rotate_degrees: f64,
}

pub fn shape_style(shape: Shape) -> ShapeStyle {
    match shape {
        Shape::Box => ShapeStyle {
            border_radius: "8px",
            rotate_degrees: 0.0,
        },
        Shape::Circle => ShapeStyle {
            border_radius: "50%",
            rotate_degrees: 0.0,
        },
        Shape::Diamond => ShapeStyle {
            border_radius: "0",
            rotate_degrees: 45.0,
        },
    }
}
