//! Note markers drawn on fretboard positions.
//!
//! A marker has one of three fill states:
//!
//! - [`MarkerFill::Hollow`]: outline only, for positions that carry no scale note
//! - [`MarkerFill::Full`]: solid fill, for scale notes
//! - [`MarkerFill::Half`]: top half in the fill color and bottom half in the
//!   alternate color, for the root

use svg::node::element::{self as svg_element, path::Data};

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Fill state of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerFill {
    Hollow,
    Full,
    Half,
}

impl MarkerFill {
    /// Returns a short name, used as a CSS class on rendered markers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hollow => "hollow",
            Self::Full => "full",
            Self::Half => "half",
        }
    }
}

/// Appearance of a circular marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDefinition {
    radius: f32,
    fill: Color,
    alt_fill: Option<Color>,
    stroke: StrokeDefinition,
}

impl MarkerDefinition {
    /// Creates a marker definition with the outline drawn in the fill color.
    pub fn new(radius: f32, fill: Color) -> Self {
        Self {
            radius,
            fill,
            alt_fill: None,
            stroke: StrokeDefinition::solid(fill, 1.5),
        }
    }

    /// Sets the color of the lower half of half-filled markers (builder style).
    pub fn with_alt_fill(mut self, alt_fill: Color) -> Self {
        self.alt_fill = Some(alt_fill);
        self
    }

    /// Sets the outline stroke (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn alt_fill(&self) -> Option<Color> {
        self.alt_fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

/// A marker centered on its render position.
#[derive(Debug, Clone)]
pub struct Marker<'a> {
    definition: &'a MarkerDefinition,
    fill: MarkerFill,
}

impl<'a> Marker<'a> {
    pub fn new(definition: &'a MarkerDefinition, fill: MarkerFill) -> Self {
        Self { definition, fill }
    }

    pub fn fill(&self) -> MarkerFill {
        self.fill
    }

    /// Upper (`from_left`) or lower half disc of a marker.
    fn half_disc(center: Point, radius: f32, from_left: bool, color: Color) -> svg_element::Path {
        let (from, to) = if from_left {
            (center.x() - radius, center.x() + radius)
        } else {
            (center.x() + radius, center.x() - radius)
        };
        let data = Data::new()
            .move_to((from, center.y()))
            .elliptical_arc_to((radius, radius, 0.0, 0.0, 1.0, to, center.y()))
            .close();

        svg_element::Path::new()
            .set("d", data)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
    }
}

impl Drawable for Marker<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let radius = self.definition.radius();
        let mut group = svg_element::Group::new().set("class", self.fill.name());

        match self.fill {
            MarkerFill::Hollow => {}
            MarkerFill::Full => {
                let fill = self.definition.fill();
                group = group.add(
                    svg_element::Circle::new()
                        .set("cx", position.x())
                        .set("cy", position.y())
                        .set("r", radius)
                        .set("fill", fill.to_string())
                        .set("fill-opacity", fill.alpha()),
                );
            }
            MarkerFill::Half => {
                group = group.add(Self::half_disc(
                    position,
                    radius,
                    true,
                    self.definition.fill(),
                ));
                if let Some(alt_fill) = self.definition.alt_fill() {
                    group = group.add(Self::half_disc(position, radius, false, alt_fill));
                }
            }
        }

        let outline = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", radius)
            .set("fill", "none");
        group = group.add(apply_stroke!(outline, self.definition.stroke()));

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marker, Box::new(group));
        output
    }

    fn size(&self) -> Size {
        let diameter = 2.0 * self.definition.radius() + self.definition.stroke().width();
        Size::new(diameter, diameter)
    }
}
