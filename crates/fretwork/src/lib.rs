//! Fretwork - Scale diagrams for stringed-instrument fretboards.
//!
//! Resolution, layout, and rendering of scale diagrams. A diagram is built
//! from a tuning (one pitch per open string), a scale (root first) and a
//! visible fret window, and rendered to SVG.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use fretwork_core::{color, draw, geometry, pitch, semantic};

pub use error::FretworkError;

use log::{debug, info, trace};

use config::AppConfig;
use draw::Theme;
use export::{Exporter, svg::SvgBuilder};
use layout::Layout;
use semantic::{Diagram, FretWindow};

/// Builder for resolving and rendering Fretwork diagrams.
///
/// This provides an API for processing diagrams through resolution, layout,
/// and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use fretwork::{DiagramBuilder, config::AppConfig, semantic::FretWindow};
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Resolve pitch names to a semantic model
/// let diagram = builder
///     .resolve(
///         &["E", "A", "D", "G", "B", "E"],
///         &["A", "B", "C#", "D", "E", "F#", "G"],
///         FretWindow::default(),
///         Some("A Mixolydian"),
///     )
///     .expect("Failed to resolve");
///
/// // Render semantic model to SVG
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and default settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve tuning and scale names into a semantic diagram.
    ///
    /// Every name is validated before anything is laid out; the error lists
    /// all invalid tuning and scale entries.
    ///
    /// # Arguments
    ///
    /// * `tuning` - Open-string pitch names, string 0 first
    /// * `scale` - Scale pitch names, root first; may be empty
    /// * `window` - Visible fret range
    /// * `title` - Optional title drawn above the fretboard
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Resolve`] for unknown pitch names or an empty
    /// tuning.
    pub fn resolve<S: AsRef<str>, T: AsRef<str>>(
        &self,
        tuning: &[S],
        scale: &[T],
        window: FretWindow,
        title: Option<&str>,
    ) -> Result<Diagram, FretworkError> {
        info!(strings = tuning.len(), notes = scale.len(); "Resolving diagram");

        let mut diagram = Diagram::resolve(tuning, scale, window)?;
        if let Some(title) = title {
            diagram = diagram.with_title(title);
        }

        trace!(diagram:?; "Resolved diagram");
        Ok(diagram)
    }

    /// Builds the theme described by the style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Config`] if a configured style value is invalid.
    pub fn theme(&self) -> Result<Theme, FretworkError> {
        self.config.style().theme().map_err(FretworkError::Config)
    }

    /// Compute the layout of a semantic diagram.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Config`] if the configured theme is invalid.
    pub fn layout(&self, diagram: &Diagram) -> Result<Layout, FretworkError> {
        let theme = self.theme()?;
        Ok(Layout::new(diagram, &theme))
    }

    /// Lay out a semantic diagram and hand it to `exporter`.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Config`] for an invalid theme and
    /// [`FretworkError::Export`] if the exporter fails.
    pub fn render_with<E: Exporter>(
        &self,
        diagram: &Diagram,
        exporter: &mut E,
    ) -> Result<(), FretworkError> {
        let theme = self.theme()?;
        Self::export(&Layout::new(diagram, &theme), exporter)
    }

    fn export<E: Exporter>(layout: &Layout, exporter: &mut E) -> Result<(), FretworkError> {
        debug!(markers = layout.markers().len(); "Layout ready for export");
        exporter.export_layout(layout)?;
        Ok(())
    }

    /// Render a semantic diagram to SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError`] for configuration or rendering errors.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use fretwork::{DiagramBuilder, semantic::FretWindow};
    ///
    /// let builder = DiagramBuilder::default();
    /// let diagram = builder
    ///     .resolve(&["E", "A", "D", "G"], &["E", "G", "A", "B", "D"], FretWindow::default(), None)
    ///     .expect("Failed to resolve");
    ///
    /// let svg = builder.render_svg(&diagram)
    ///     .expect("Failed to render diagram");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, FretworkError> {
        let theme = self.theme()?;
        let layout = Layout::new(diagram, &theme);

        let mut svg_exporter = SvgBuilder::new().with_theme(theme).build();
        Self::export(&layout, &mut svg_exporter)?;

        let svg_string = svg_exporter.finish()?;
        info!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }
}
