//! Drawable components for fretboard rendering.
//!
//! All drawable components implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to layered SVG output and calculating size.
//! Their appearance comes from definitions ([`StrokeDefinition`],
//! [`TextDefinition`], [`MarkerDefinition`], [`InlayDefinition`]) grouped in a
//! [`Theme`].
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically ordered
//! during final SVG generation, so note markers always sit above strings and
//! fret wires regardless of emission order.

mod inlay;
mod layer;
mod line;
mod marker;
mod stroke;
mod text;
mod theme;

pub use inlay::{Inlay, InlayDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::Line;
pub use marker::{Marker, MarkerDefinition, MarkerFill};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};
pub use theme::{InlayKind, InlayPattern, Theme};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// # Arguments
    ///
    /// * `position` - The anchor point where this drawable should be rendered
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
