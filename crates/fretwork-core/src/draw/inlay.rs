//! Position inlays: the dots set into the fretboard at conventional frets.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Appearance of inlay dots.
#[derive(Debug, Clone, PartialEq)]
pub struct InlayDefinition {
    radius: f32,
    color: Color,
}

impl InlayDefinition {
    pub fn new(radius: f32, color: Color) -> Self {
        Self { radius, color }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// One inlay, drawn as a single dot or as a pair of dots stacked vertically.
#[derive(Debug, Clone)]
pub struct Inlay<'a> {
    definition: &'a InlayDefinition,
    separation: Option<f32>,
}

impl<'a> Inlay<'a> {
    pub fn single(definition: &'a InlayDefinition) -> Self {
        Self {
            definition,
            separation: None,
        }
    }

    /// Two dots whose centers are `separation` pixels apart.
    pub fn double(definition: &'a InlayDefinition, separation: f32) -> Self {
        Self {
            definition,
            separation: Some(separation),
        }
    }

    fn dot(&self, center: Point) -> svg_element::Circle {
        let color = self.definition.color();
        svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", self.definition.radius())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
    }
}

impl Drawable for Inlay<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        match self.separation {
            None => output.add_to_layer(RenderLayer::Inlay, Box::new(self.dot(position))),
            Some(separation) => {
                let half = separation / 2.0;
                for dy in [-half, half] {
                    let center = position.add_point(Point::new(0.0, dy));
                    output.add_to_layer(RenderLayer::Inlay, Box::new(self.dot(center)));
                }
            }
        }
        output
    }

    fn size(&self) -> Size {
        let diameter = 2.0 * self.definition.radius();
        Size::new(diameter, diameter + self.separation.unwrap_or_default())
    }
}
