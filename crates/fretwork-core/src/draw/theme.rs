//! Fretboard theme: every styling constant used when drawing a diagram.
//!
//! A [`Theme`] is passed to the layout and export stages, so an alternate look
//! (a darker board, larger markers, a different inlay scheme) only needs a
//! different theme value.
//!
//! # Example
//!
//! ```
//! # use fretwork_core::draw::{InlayPattern, Theme};
//! # use fretwork_core::color::Color;
//! let mut theme = Theme::default();
//! theme.set_fret_spacing(48.0);
//! theme.set_background(Some(Color::new("ivory").unwrap()));
//! theme.set_inlays(InlayPattern::new(vec![3, 5, 7, 9], vec![12]));
//!
//! assert!(theme.inlays().at(15).is_some());
//! ```

use crate::{
    color::Color,
    draw::{InlayDefinition, MarkerDefinition, StrokeDefinition, TextDefinition},
    pitch::SEMITONES_PER_OCTAVE,
};

/// Number of dots an inlay fret carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlayKind {
    Single,
    Double,
}

/// Inlay positions within one octave (frets 1 to 12), repeated up the neck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlayPattern {
    single: Vec<u8>,
    double: Vec<u8>,
}

impl InlayPattern {
    /// Creates a pattern; positions outside `1..=12` never match.
    pub fn new(single: Vec<u8>, double: Vec<u8>) -> Self {
        Self { single, double }
    }

    /// Returns the inlay carried by `fret`, if any.
    ///
    /// ```
    /// # use fretwork_core::draw::{InlayKind, InlayPattern};
    /// let pattern = InlayPattern::default();
    /// assert_eq!(pattern.at(0), None);
    /// assert_eq!(pattern.at(5), Some(InlayKind::Single));
    /// assert_eq!(pattern.at(12), Some(InlayKind::Double));
    /// assert_eq!(pattern.at(17), Some(InlayKind::Single));
    /// assert_eq!(pattern.at(24), Some(InlayKind::Double));
    /// ```
    pub fn at(&self, fret: u8) -> Option<InlayKind> {
        if fret == 0 {
            return None;
        }
        let position = (fret - 1) % SEMITONES_PER_OCTAVE + 1;

        if self.double.contains(&position) {
            Some(InlayKind::Double)
        } else if self.single.contains(&position) {
            Some(InlayKind::Single)
        } else {
            None
        }
    }
}

impl Default for InlayPattern {
    fn default() -> Self {
        Self::new(vec![3, 5, 7, 9], vec![12])
    }
}

/// Complete styling of a fretboard diagram.
#[derive(Debug, Clone)]
pub struct Theme {
    background: Option<Color>,
    fret_spacing: f32,
    string_spacing: f32,
    string_stroke: StrokeDefinition,
    fret_stroke: StrokeDefinition,
    nut_stroke: StrokeDefinition,
    root_marker: MarkerDefinition,
    note_marker: MarkerDefinition,
    hollow_marker: MarkerDefinition,
    inlay: InlayDefinition,
    inlays: InlayPattern,
    title_text: TextDefinition,
    string_label_text: TextDefinition,
    fret_number_text: TextDefinition,
    inlay_number_text: TextDefinition,
}

impl Theme {
    /// Background fill of the whole canvas; `None` leaves it transparent.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Horizontal distance between neighbouring frets.
    pub fn fret_spacing(&self) -> f32 {
        self.fret_spacing
    }

    /// Vertical distance between neighbouring strings.
    pub fn string_spacing(&self) -> f32 {
        self.string_spacing
    }

    pub fn string_stroke(&self) -> &StrokeDefinition {
        &self.string_stroke
    }

    pub fn fret_stroke(&self) -> &StrokeDefinition {
        &self.fret_stroke
    }

    pub fn nut_stroke(&self) -> &StrokeDefinition {
        &self.nut_stroke
    }

    pub fn root_marker(&self) -> &MarkerDefinition {
        &self.root_marker
    }

    pub fn note_marker(&self) -> &MarkerDefinition {
        &self.note_marker
    }

    pub fn hollow_marker(&self) -> &MarkerDefinition {
        &self.hollow_marker
    }

    pub fn inlay(&self) -> &InlayDefinition {
        &self.inlay
    }

    pub fn inlays(&self) -> &InlayPattern {
        &self.inlays
    }

    pub fn title_text(&self) -> &TextDefinition {
        &self.title_text
    }

    pub fn string_label_text(&self) -> &TextDefinition {
        &self.string_label_text
    }

    pub fn fret_number_text(&self) -> &TextDefinition {
        &self.fret_number_text
    }

    /// Text style of fret numbers under inlay frets.
    pub fn inlay_number_text(&self) -> &TextDefinition {
        &self.inlay_number_text
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    pub fn set_fret_spacing(&mut self, spacing: f32) {
        self.fret_spacing = spacing;
    }

    pub fn set_string_spacing(&mut self, spacing: f32) {
        self.string_spacing = spacing;
    }

    pub fn set_string_stroke(&mut self, stroke: StrokeDefinition) {
        self.string_stroke = stroke;
    }

    pub fn set_fret_stroke(&mut self, stroke: StrokeDefinition) {
        self.fret_stroke = stroke;
    }

    pub fn set_nut_stroke(&mut self, stroke: StrokeDefinition) {
        self.nut_stroke = stroke;
    }

    pub fn set_root_marker(&mut self, marker: MarkerDefinition) {
        self.root_marker = marker;
    }

    pub fn set_note_marker(&mut self, marker: MarkerDefinition) {
        self.note_marker = marker;
    }

    pub fn set_hollow_marker(&mut self, marker: MarkerDefinition) {
        self.hollow_marker = marker;
    }

    pub fn set_inlay(&mut self, inlay: InlayDefinition) {
        self.inlay = inlay;
    }

    pub fn set_inlays(&mut self, inlays: InlayPattern) {
        self.inlays = inlays;
    }

    /// Applies one font family to every text style of the theme.
    pub fn set_font_family(&mut self, family: &str) {
        for text in [
            &mut self.title_text,
            &mut self.string_label_text,
            &mut self.fret_number_text,
            &mut self.inlay_number_text,
        ] {
            text.set_font_family(family);
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let blue = Color::new("#1f77b4").expect("valid hex color");
        let red = Color::new("#d62728").expect("valid hex color");
        let wire = Color::new("#9a9a9a").expect("valid hex color");
        let label = Color::new("#444444").expect("valid hex color");

        let mut title_text = TextDefinition::new();
        title_text.set_font_size(16);
        title_text.set_bold(true);

        let mut string_label_text = TextDefinition::new();
        string_label_text.set_font_size(13);

        let mut fret_number_text = TextDefinition::new();
        fret_number_text.set_font_size(11);
        fret_number_text.set_color(Some(label));

        let mut inlay_number_text = fret_number_text.clone();
        inlay_number_text.set_bold(true);
        inlay_number_text.set_color(None);

        Self {
            background: Some(Color::new("white").expect("valid CSS color")),
            fret_spacing: 40.0,
            string_spacing: 28.0,
            string_stroke: StrokeDefinition::solid(Color::default(), 1.2),
            fret_stroke: StrokeDefinition::solid(wire, 1.0),
            nut_stroke: StrokeDefinition::solid(Color::default(), 4.0),
            root_marker: MarkerDefinition::new(10.0, blue).with_alt_fill(red),
            note_marker: MarkerDefinition::new(10.0, blue),
            hollow_marker: MarkerDefinition::new(10.0, blue)
                .with_stroke(StrokeDefinition::dotted(blue.with_alpha(0.5), 1.0)),
            inlay: InlayDefinition::new(5.0, Color::new("#dddddd").expect("valid hex color")),
            inlays: InlayPattern::default(),
            title_text,
            string_label_text,
            fret_number_text,
            inlay_number_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inlay_pattern_repeats_per_octave() {
        let pattern = InlayPattern::default();
        let singles: Vec<u8> = (0..=24)
            .filter(|&f| pattern.at(f) == Some(InlayKind::Single))
            .collect();
        let doubles: Vec<u8> = (0..=24)
            .filter(|&f| pattern.at(f) == Some(InlayKind::Double))
            .collect();

        assert_eq!(singles, [3, 5, 7, 9, 15, 17, 19, 21]);
        assert_eq!(doubles, [12, 24]);
    }

    #[test]
    fn test_inlay_pattern_custom() {
        let pattern = InlayPattern::new(vec![5, 7], vec![]);
        assert_eq!(pattern.at(3), None);
        assert_eq!(pattern.at(12), None);
        assert_eq!(pattern.at(19), Some(InlayKind::Single));
    }

    #[test]
    fn test_default_theme_distinguishes_marker_states() {
        let theme = Theme::default();
        assert!(theme.root_marker().alt_fill().is_some());
        assert!(theme.note_marker().alt_fill().is_none());
        assert_ne!(theme.hollow_marker().stroke(), theme.note_marker().stroke());
        assert!(theme.inlay_number_text().is_bold());
        assert!(!theme.fret_number_text().is_bold());
    }

    #[test]
    fn test_set_font_family_applies_everywhere() {
        let mut theme = Theme::default();
        theme.set_font_family("serif");
        assert_eq!(theme.title_text().font_family(), "serif");
        assert_eq!(theme.string_label_text().font_family(), "serif");
        assert_eq!(theme.fret_number_text().font_family(), "serif");
        assert_eq!(theme.inlay_number_text().font_family(), "serif");
    }
}
