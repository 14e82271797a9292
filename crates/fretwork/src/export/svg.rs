//! SVG surface.
//!
//! Board content (inlays, fret wires, strings, markers and fret numbers) is
//! clipped to the fret window; the background, string labels and title are
//! drawn outside the clip so they stay whole.

use log::{debug, info};
use svg::{
    Document,
    node::element::{ClipPath, Definitions, Group, Rectangle},
};

use fretwork_core::{
    draw::{
        Drawable, Inlay, InlayKind, LayeredOutput, Line, Marker, MarkerDefinition, MarkerFill,
        RenderLayer, Text, Theme,
    },
    geometry::{Bounds, Point},
};

use crate::{
    export::{self, Exporter},
    layout::Layout,
};

const CLIP_ID: &str = "fretboard-clip";

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    theme: Theme,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            theme: self.theme,
            output: None,
        }
    }
}

/// Exporter that renders a layout to an in-memory SVG document.
#[derive(Debug)]
pub struct Svg {
    theme: Theme,
    output: Option<String>,
}

impl Svg {
    /// Renders `layout` to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the viewport is empty or not finite.
    pub fn render_layout(&self, layout: &Layout) -> Result<Document, export::Error> {
        let viewport = layout.viewport();
        if !(viewport.width() > 0.0 && viewport.height() > 0.0)
            || !viewport.width().is_finite()
            || !viewport.height().is_finite()
        {
            return Err(export::Error::Render(format!(
                "invalid canvas size {}x{}",
                viewport.width(),
                viewport.height()
            )));
        }

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    viewport.min_x(),
                    viewport.min_y(),
                    viewport.width(),
                    viewport.height()
                ),
            )
            .set("width", viewport.width())
            .set("height", viewport.height());

        if let Some(background) = self.theme.background() {
            doc = doc.add(
                Rectangle::new()
                    .set("x", viewport.min_x())
                    .set("y", viewport.min_y())
                    .set("width", viewport.width())
                    .set("height", viewport.height())
                    .set("fill", background.to_string())
                    .set("fill-opacity", background.alpha()),
            );
        }

        doc = doc.add(create_clip_path(CLIP_ID, layout.clip()));

        let mut board = Group::new().set("clip-path", format!("url(#{CLIP_ID})"));
        for node in self.render_board(layout).render() {
            board = board.add(node);
        }
        doc = doc.add(board);

        for node in self.render_labels(layout).render() {
            doc = doc.add(node);
        }

        debug!(
            width = viewport.width(),
            height = viewport.height();
            "SVG document rendered"
        );
        Ok(doc)
    }

    /// Returns the document produced by the last export, if any.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Consumes the exporter, returning the rendered document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if nothing was exported.
    pub fn finish(self) -> Result<String, export::Error> {
        self.output
            .ok_or_else(|| export::Error::Render("no layout was exported".to_string()))
    }

    fn render_board(&self, layout: &Layout) -> LayeredOutput {
        let theme = &self.theme;
        let board = layout.board();
        let mut output = LayeredOutput::new();

        for inlay in layout.inlays() {
            let drawable = match inlay.kind() {
                InlayKind::Single => Inlay::single(theme.inlay()),
                InlayKind::Double => Inlay::double(theme.inlay(), inlay.separation()),
            };
            output.merge(drawable.render_to_layers(inlay.center()));
        }

        let wire = Line::vertical(theme.fret_stroke(), board.height(), RenderLayer::Fret);
        for &x in layout.fret_wires() {
            output.merge(wire.render_to_layers(Point::new(x, board.min_y())));
        }
        let nut = Line::vertical(theme.nut_stroke(), board.height(), RenderLayer::Fret);
        output.merge(nut.render_to_layers(Point::new(layout.nut_x(), board.min_y())));

        let string = Line::horizontal(theme.string_stroke(), board.width(), RenderLayer::String);
        for line in layout.strings() {
            output.merge(string.render_to_layers(Point::new(board.min_x(), line.y())));
        }

        for marker in layout.markers() {
            let definition = self.marker_definition(marker.fill());
            output.merge(Marker::new(definition, marker.fill()).render_to_layers(marker.center()));
        }

        for label in layout.fret_labels() {
            let style = if label.is_inlay() {
                theme.inlay_number_text()
            } else {
                theme.fret_number_text()
            };
            output.merge(Text::new(style, label.text()).render_to_layers(label.position()));
        }

        output
    }

    fn render_labels(&self, layout: &Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for line in layout.strings() {
            let text = Text::new(self.theme.string_label_text(), line.label());
            output.merge(text.render_to_layers(line.label_position()));
        }

        if let Some(title) = layout.title() {
            let text = Text::new(self.theme.title_text(), title.text());
            output.merge(text.render_to_layers(title.position()));
        }

        output
    }

    fn marker_definition(&self, fill: MarkerFill) -> &MarkerDefinition {
        match fill {
            MarkerFill::Hollow => self.theme.hollow_marker(),
            MarkerFill::Full => self.theme.note_marker(),
            MarkerFill::Half => self.theme.root_marker(),
        }
    }
}

/// Creates an SVG clip path covering `bounds`.
fn create_clip_path(clip_id: &str, bounds: Bounds) -> Definitions {
    let clip_rect = Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height());

    Definitions::new().add(ClipPath::new().set("id", clip_id).add(clip_rect))
}

impl Exporter for Svg {
    fn export_layout(&mut self, layout: &Layout) -> Result<(), export::Error> {
        let doc = self.render_layout(layout)?;
        self.output = Some(doc.to_string());
        info!(markers = layout.markers().len(); "Layout exported to SVG");
        Ok(())
    }
}
