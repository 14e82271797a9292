//! Layer-based rendering system for SVG output.
//!
//! Drawables tag each SVG node with the [`RenderLayer`] it belongs to; the
//! [`LayeredOutput`] collects the nodes and emits them grouped and ordered
//! bottom to top.
//!
//! # Example
//!
//! ```
//! # use fretwork_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Line};
//! let mut output = LayeredOutput::new();
//!
//! // Emitted first, but drawn above the string line
//! output.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::String, Box::new(Line::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// The `Ord` derive uses declaration order: the first variant renders first
/// (bottom), the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Fretboard background fill
    Background,
    /// Position inlay dots
    Inlay,
    /// Fret wires and the nut
    Fret,
    /// String lines
    String,
    /// Note markers (hollow, scale and root)
    Marker,
    /// Title, string labels and fret numbers
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Inlay => "inlay",
            Self::Fret => "fret",
            Self::String => "string",
            Self::Marker => "marker",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top); nodes of
/// the same layer keep their insertion order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes tagged with `layer`.
    pub fn count(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Circle, Line};

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_count() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::String, Box::new(Line::new()));

        assert_eq!(output.count(RenderLayer::Marker), 2);
        assert_eq!(output.count(RenderLayer::String), 1);
        assert_eq!(output.count(RenderLayer::Text), 0);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Fret, Box::new(Line::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_same_layer_single_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::String, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::String, Box::new(Line::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_render_order() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Marker, Box::new(Line::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"marker\""));
        assert!(rendered[2].contains("data-layer=\"text\""));
    }
}
