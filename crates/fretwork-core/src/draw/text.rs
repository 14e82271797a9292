//! Text definitions for titles, string labels and fret numbers.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable single-line label combining content with a [`TextDefinition`]
//!
//! Text sizes are measured with real font metrics through `cosmic-text`, so the
//! canvas can be widened to fit a long title.
//!
//! ```
//! # use fretwork_core::draw::{Drawable, Text, TextDefinition};
//! # use fretwork_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(11);
//! style.set_bold(true);
//!
//! let label = Text::new(&style, "12");
//! let output = label.render_to_layers(Point::new(100.0, 80.0));
//! assert!(!output.is_empty());
//! ```

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Bold | `false` |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "Helvetica", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Renders the text in bold weight when `true`.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets the text color; `None` keeps the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            bold: false,
            color: None,
        }
    }
}

/// A renderable single-line label.
///
/// The label is centered on its position.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new centered label.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Calculate the size required to display this text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.is_bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the size of a single line of text in pixels using cosmic-text.
    ///
    /// Falls back to an estimate from the character count when no font
    /// produces layout runs.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = match self.font_system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        if text_def.is_bold() {
            attrs = attrs.weight(Weight::BOLD);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width == 0.0 {
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
