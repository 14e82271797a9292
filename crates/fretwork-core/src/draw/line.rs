//! Straight line segments: strings, fret wires and the nut.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// An axis-aligned line segment starting at the render position.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    stroke: &'a StrokeDefinition,
    delta: Point,
    layer: RenderLayer,
}

impl<'a> Line<'a> {
    /// A line running `length` pixels to the right, such as a string.
    pub fn horizontal(stroke: &'a StrokeDefinition, length: f32, layer: RenderLayer) -> Self {
        Self {
            stroke,
            delta: Point::new(length, 0.0),
            layer,
        }
    }

    /// A line running `length` pixels downwards, such as a fret wire.
    pub fn vertical(stroke: &'a StrokeDefinition, length: f32, layer: RenderLayer) -> Self {
        Self {
            stroke,
            delta: Point::new(0.0, length),
            layer,
        }
    }
}

impl Drawable for Line<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let end = position.add_point(self.delta);

        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", end.x())
            .set("y2", end.y());
        let line = apply_stroke!(line, self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(line));
        output
    }

    fn size(&self) -> Size {
        Size::new(self.delta.x().abs(), self.delta.y().abs())
    }
}
