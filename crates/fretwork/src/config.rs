//! Configuration types for Fretwork diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled and which instrument and fret window are used when a request
//! leaves them out. All types implement [`serde::Deserialize`] for loading
//! from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining style and default settings.
//! - [`StyleConfig`] - Visual overrides applied on top of the default [`Theme`].
//! - [`DefaultsConfig`] - Instrument, tuning and fret window used when none is given.
//!
//! # Example
//!
//! ```
//! # use fretwork::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().theme().is_ok());
//! assert_eq!(config.defaults().stop(), 15);
//! ```

use serde::Deserialize;

use fretwork_core::{
    color::Color,
    draw::{InlayDefinition, MarkerDefinition, StrokeCap, StrokeStyle, Theme},
    semantic::{FretWindow, Instrument},
};

/// Top-level application configuration combining style and default settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Defaults configuration section.
    #[serde(default)]
    defaults: DefaultsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and default settings.
    pub fn new(style: StyleConfig, defaults: DefaultsConfig) -> Self {
        Self { style, defaults }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the defaults configuration.
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Every field is optional; fields that are not set keep the value of
/// [`Theme::default`]. Colors are CSS color strings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    note_color: Option<String>,
    /// Lower half of root markers.
    #[serde(default)]
    root_color: Option<String>,
    #[serde(default)]
    string_color: Option<String>,
    #[serde(default)]
    fret_color: Option<String>,
    #[serde(default)]
    inlay_color: Option<String>,
    /// Outline of hollow markers: `solid`, `dashed`, `dotted` or a dasharray.
    #[serde(default)]
    hollow_stroke_style: Option<String>,
    /// Cap of strings, fret wires and the nut: `butt`, `round` or `square`.
    #[serde(default)]
    line_cap: Option<String>,
    #[serde(default)]
    marker_radius: Option<f32>,
    #[serde(default)]
    fret_spacing: Option<f32>,
    #[serde(default)]
    string_spacing: Option<f32>,
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background_color", self.background_color.as_deref())
    }

    /// Builds the [`Theme`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field if a color does not parse
    /// or a size is not a positive number.
    pub fn theme(&self) -> Result<Theme, String> {
        let mut theme = Theme::default();

        if let Some(background) = self.background_color()? {
            theme.set_background(Some(background));
        }

        let radius = positive("marker_radius", self.marker_radius)?
            .unwrap_or_else(|| theme.note_marker().radius());
        let note = parse_color("note_color", self.note_color.as_deref())?
            .unwrap_or_else(|| theme.note_marker().fill());
        let root_alt = parse_color("root_color", self.root_color.as_deref())?
            .or_else(|| theme.root_marker().alt_fill());

        let mut root_marker = MarkerDefinition::new(radius, note);
        if let Some(root_alt) = root_alt {
            root_marker = root_marker.with_alt_fill(root_alt);
        }
        let mut hollow_stroke = theme.hollow_marker().stroke().clone();
        if self.note_color.is_some() {
            hollow_stroke.set_color(note.with_alpha(hollow_stroke.color().alpha()));
        }
        if let Some(style) = &self.hollow_stroke_style {
            hollow_stroke.set_style(style.parse::<StrokeStyle>()?);
        }
        theme.set_note_marker(MarkerDefinition::new(radius, note));
        theme.set_root_marker(root_marker);
        theme.set_hollow_marker(MarkerDefinition::new(radius, note).with_stroke(hollow_stroke));

        let cap = self
            .line_cap
            .as_deref()
            .map(str::parse::<StrokeCap>)
            .transpose()
            .map_err(|err| format!("Invalid line_cap in config: {err}"))?;

        let mut string_stroke = theme.string_stroke().clone();
        if let Some(color) = parse_color("string_color", self.string_color.as_deref())? {
            string_stroke.set_color(color);
        }
        let mut fret_stroke = theme.fret_stroke().clone();
        if let Some(color) = parse_color("fret_color", self.fret_color.as_deref())? {
            fret_stroke.set_color(color);
        }
        let mut nut_stroke = theme.nut_stroke().clone();
        if let Some(cap) = cap {
            string_stroke.set_cap(cap);
            fret_stroke.set_cap(cap);
            nut_stroke.set_cap(cap);
        }
        theme.set_string_stroke(string_stroke);
        theme.set_fret_stroke(fret_stroke);
        theme.set_nut_stroke(nut_stroke);

        if let Some(color) = parse_color("inlay_color", self.inlay_color.as_deref())? {
            let inlay_radius = theme.inlay().radius();
            theme.set_inlay(InlayDefinition::new(inlay_radius, color));
        }

        if let Some(spacing) = positive("fret_spacing", self.fret_spacing)? {
            theme.set_fret_spacing(spacing);
        }
        if let Some(spacing) = positive("string_spacing", self.string_spacing)? {
            theme.set_string_spacing(spacing);
        }
        if let Some(family) = &self.font_family {
            theme.set_font_family(family);
        }

        Ok(theme)
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

fn positive(field: &str, value: Option<f32>) -> Result<Option<f32>, String> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => {
            Err(format!("Invalid {field} in config: `{v}` is not a positive number"))
        }
        _ => Ok(value),
    }
}

/// Defaults used when a request leaves out the tuning or the fret window.
///
/// An explicit `tuning` takes precedence over `instrument`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    instrument: Option<Instrument>,
    #[serde(default)]
    tuning: Option<Vec<String>>,
    #[serde(default)]
    start: Option<u8>,
    #[serde(default)]
    stop: Option<u8>,
}

impl DefaultsConfig {
    /// Returns the configured instrument, falling back to [`Instrument::Guitar`].
    pub fn instrument(&self) -> Instrument {
        self.instrument.unwrap_or_default()
    }

    /// Returns the open-string names of the default tuning.
    pub fn tuning_names(&self) -> Vec<String> {
        match &self.tuning {
            Some(tuning) => tuning.clone(),
            None => self
                .instrument()
                .string_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Returns the default first visible fret.
    pub fn start(&self) -> u8 {
        self.start.unwrap_or(0)
    }

    /// Returns the default last visible fret.
    pub fn stop(&self) -> u8 {
        self.stop.unwrap_or(FretWindow::DEFAULT_STOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(toml_style: &[(&str, &str)]) -> StyleConfig {
        let mut style = StyleConfig::default();
        for (key, value) in toml_style {
            let value = Some(value.to_string());
            match *key {
                "background_color" => style.background_color = value,
                "note_color" => style.note_color = value,
                "root_color" => style.root_color = value,
                "string_color" => style.string_color = value,
                "hollow_stroke_style" => style.hollow_stroke_style = value,
                "line_cap" => style.line_cap = value,
                _ => unreachable!("unexpected key {key}"),
            }
        }
        style
    }

    #[test]
    fn test_default_style_matches_default_theme() {
        let theme = StyleConfig::default().theme().unwrap();
        let default = Theme::default();
        assert_eq!(theme.note_marker(), default.note_marker());
        assert_eq!(theme.root_marker(), default.root_marker());
        assert_eq!(theme.hollow_marker(), default.hollow_marker());
        assert_eq!(theme.background(), default.background());
    }

    #[test]
    fn test_style_colors_applied() {
        let theme = style(&[
            ("note_color", "seagreen"),
            ("root_color", "orange"),
            ("background_color", "ivory"),
        ])
        .theme()
        .unwrap();

        let seagreen = Color::new("seagreen").unwrap();
        assert_eq!(theme.note_marker().fill(), seagreen);
        assert_eq!(theme.root_marker().fill(), seagreen);
        assert_eq!(theme.root_marker().alt_fill(), Some(Color::new("orange").unwrap()));
        assert_eq!(theme.background(), Some(Color::new("ivory").unwrap()));

        // Hollow markers draw only their outline
        let outline = theme.hollow_marker().stroke();
        assert_eq!(outline.color(), seagreen.with_alpha(0.5));
        assert_eq!(*outline.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_hollow_stroke_style_applied() {
        let theme = style(&[("hollow_stroke_style", "dashed")]).theme().unwrap();
        assert_eq!(*theme.hollow_marker().stroke().style(), StrokeStyle::Dashed);

        let theme = style(&[("hollow_stroke_style", "4,2")]).theme().unwrap();
        assert_eq!(
            *theme.hollow_marker().stroke().style(),
            StrokeStyle::Custom("4,2".to_string())
        );
    }

    #[test]
    fn test_line_cap_applied_to_board_lines() {
        let theme = style(&[("line_cap", "round"), ("string_color", "maroon")])
            .theme()
            .unwrap();
        assert_eq!(theme.string_stroke().cap(), StrokeCap::Round);
        assert_eq!(theme.fret_stroke().cap(), StrokeCap::Round);
        assert_eq!(theme.nut_stroke().cap(), StrokeCap::Round);
        assert_eq!(theme.string_stroke().color(), Color::new("maroon").unwrap());
        assert_eq!(theme.string_stroke().width(), Theme::default().string_stroke().width());
    }

    #[test]
    fn test_invalid_line_cap_names_field() {
        let err = style(&[("line_cap", "pointy")]).theme().unwrap_err();
        assert!(err.contains("line_cap"), "{err}");
        assert!(err.contains("butt, round, square"), "{err}");
    }

    #[test]
    fn test_invalid_color_names_field() {
        let err = style(&[("string_color", "not-a-color")]).theme().unwrap_err();
        assert!(err.contains("string_color"), "{err}");
    }

    #[test]
    fn test_non_positive_spacing_rejected() {
        let style = StyleConfig {
            fret_spacing: Some(0.0),
            ..StyleConfig::default()
        };
        let err = style.theme().unwrap_err();
        assert!(err.contains("fret_spacing"), "{err}");
    }

    #[test]
    fn test_spacing_and_radius_applied() {
        let style = StyleConfig {
            fret_spacing: Some(50.0),
            string_spacing: Some(30.0),
            marker_radius: Some(7.0),
            ..StyleConfig::default()
        };
        let theme = style.theme().unwrap();
        assert_eq!(theme.fret_spacing(), 50.0);
        assert_eq!(theme.string_spacing(), 30.0);
        assert_eq!(theme.root_marker().radius(), 7.0);
        assert_eq!(theme.hollow_marker().radius(), 7.0);
    }

    #[test]
    fn test_defaults_fall_back_to_guitar() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.instrument(), Instrument::Guitar);
        assert_eq!(defaults.tuning_names(), ["E", "A", "D", "G", "B", "E"]);
        assert_eq!(defaults.start(), 0);
        assert_eq!(defaults.stop(), 15);
    }

    #[test]
    fn test_explicit_tuning_wins_over_instrument() {
        let defaults = DefaultsConfig {
            instrument: Some(Instrument::Bass),
            tuning: Some(vec!["D".to_string(), "G".to_string()]),
            ..DefaultsConfig::default()
        };
        assert_eq!(defaults.tuning_names(), ["D", "G"]);

        let defaults = DefaultsConfig {
            instrument: Some(Instrument::Bass),
            ..DefaultsConfig::default()
        };
        assert_eq!(defaults.tuning_names(), ["E", "A", "D", "G"]);
    }
}
