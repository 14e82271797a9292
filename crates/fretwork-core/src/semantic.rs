//! Semantic model of a fretboard diagram.
//!
//! These types hold validated input: every [`Pitch`] in a [`Tuning`] or
//! [`Scale`] has been resolved, a [`Tuning`] has at least one string and a
//! [`FretWindow`] never ends before it starts. A [`Diagram`] can therefore be
//! laid out and drawn without any further failure.
//!
//! # Example
//!
//! ```
//! # use fretwork_core::semantic::{Diagram, FretWindow, ResolveError};
//! # fn main() -> Result<(), ResolveError> {
//! let diagram = Diagram::resolve(
//!     &["E", "A", "D", "G", "B", "E"],
//!     &["A", "B", "C#", "D", "E", "F#", "G"],
//!     FretWindow::new(0, 15)?,
//! )?
//! .with_title("A Mixolydian");
//!
//! assert_eq!(diagram.tuning().len(), 6);
//! assert_eq!(diagram.scale().root().map(|p| p.spelling()), Some("A"));
//! # Ok(())
//! # }
//! ```

use std::{fmt, str::FromStr};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::pitch::{Pitch, UnknownPitch};

/// Where an input pitch name appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchPosition {
    /// Open-string pitch at the given index of the tuning.
    Tuning { string: usize },
    /// Scale entry at the given index; index 0 is the root.
    Scale { degree: usize },
}

impl fmt::Display for PitchPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tuning { string } => write!(f, "tuning entry {}", string + 1),
            Self::Scale { degree } => write!(f, "scale entry {}", degree + 1),
        }
    }
}

/// A pitch name that failed to resolve, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pitch} in {position}")]
pub struct InvalidPitch {
    position: PitchPosition,
    pitch: UnknownPitch,
}

impl InvalidPitch {
    pub fn new(position: PitchPosition, pitch: UnknownPitch) -> Self {
        Self { position, pitch }
    }

    /// Returns where the invalid name appeared.
    pub fn position(&self) -> PitchPosition {
        self.position
    }

    /// Returns the offending name.
    pub fn name(&self) -> &str {
        self.pitch.name()
    }
}

/// Errors raised while validating diagram input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// One or more tuning or scale entries are not valid pitch names.
    #[error("{}", describe_invalid(.0))]
    UnknownPitches(Vec<InvalidPitch>),

    #[error("tuning has no strings")]
    EmptyTuning,

    #[error("invalid fret window: stop fret {stop} is below start fret {start}")]
    InvalidWindow { start: u8, stop: u8 },
}

fn describe_invalid(invalid: &[InvalidPitch]) -> String {
    invalid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Resolves every name, keeping the successes and the failures apart.
fn resolve_names<S: AsRef<str>>(
    names: &[S],
    position: impl Fn(usize) -> PitchPosition,
) -> (Vec<Pitch>, Vec<InvalidPitch>) {
    let mut pitches = Vec::with_capacity(names.len());
    let mut invalid = Vec::new();

    for (index, name) in names.iter().enumerate() {
        match Pitch::new(name.as_ref()) {
            Ok(pitch) => pitches.push(pitch),
            Err(err) => invalid.push(InvalidPitch::new(position(index), err)),
        }
    }

    (pitches, invalid)
}

/// Well-known instrument tunings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Instrument {
    /// Six-string guitar in standard tuning: E A D G B E.
    #[default]
    Guitar,
    /// Four-string bass in standard tuning: E A D G.
    Bass,
    /// Ukulele in standard (re-entrant) tuning: G C E A.
    Ukulele,
    /// Six-string guitar with the lowest string dropped to D.
    DropD,
    /// Seven-string guitar with a low B.
    SevenString,
}

impl Instrument {
    /// Open-string pitch names, lowest-index string first.
    pub fn string_names(self) -> &'static [&'static str] {
        match self {
            Self::Guitar => &["E", "A", "D", "G", "B", "E"],
            Self::Bass => &["E", "A", "D", "G"],
            Self::Ukulele => &["G", "C", "E", "A"],
            Self::DropD => &["D", "A", "D", "G", "B", "E"],
            Self::SevenString => &["B", "E", "A", "D", "G", "B", "E"],
        }
    }

    /// Returns the tuning of this instrument.
    pub fn tuning(self) -> Tuning {
        let (strings, invalid) = resolve_names(self.string_names(), |string| {
            PitchPosition::Tuning { string }
        });
        debug_assert!(invalid.is_empty(), "preset tunings use valid spellings");
        Tuning { strings }
    }

    /// Returns the kebab-case name used on the command line and in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Guitar => "guitar",
            Self::Bass => "bass",
            Self::Ukulele => "ukulele",
            Self::DropD => "drop-d",
            Self::SevenString => "seven-string",
        }
    }
}

impl FromStr for Instrument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guitar" => Ok(Self::Guitar),
            "bass" => Ok(Self::Bass),
            "ukulele" => Ok(Self::Ukulele),
            "drop-d" => Ok(Self::DropD),
            "seven-string" => Ok(Self::SevenString),
            _ => Err(format!(
                "invalid instrument `{s}`, valid values: guitar, bass, ukulele, drop-d, seven-string"
            )),
        }
    }
}

/// Open-string pitches, one per string.
///
/// String 0 is drawn on the bottom row of the diagram. Duplicate pitches are
/// allowed (a guitar has two E strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    strings: Vec<Pitch>,
}

impl Tuning {
    /// Creates a tuning from resolved pitches.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyTuning`] if `strings` is empty.
    pub fn new(strings: Vec<Pitch>) -> Result<Self, ResolveError> {
        if strings.is_empty() {
            return Err(ResolveError::EmptyTuning);
        }
        Ok(Self { strings })
    }

    /// Resolves a tuning from pitch names, reporting every invalid entry.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ResolveError> {
        let (strings, invalid) = resolve_names(names, |string| PitchPosition::Tuning { string });
        if !invalid.is_empty() {
            return Err(ResolveError::UnknownPitches(invalid));
        }
        Self::new(strings)
    }

    /// Returns the open-string pitches.
    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    /// Returns the number of strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always `false`; a tuning has at least one string.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Instrument::default().tuning()
    }
}

/// Ordered scale pitches; the first entry is the root.
///
/// An empty scale is valid and yields a blank fretboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scale {
    notes: Vec<Pitch>,
}

impl Scale {
    pub fn new(notes: Vec<Pitch>) -> Self {
        Self { notes }
    }

    /// Resolves a scale from pitch names, reporting every invalid entry.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ResolveError> {
        let (notes, invalid) = resolve_names(names, |degree| PitchPosition::Scale { degree });
        if !invalid.is_empty() {
            return Err(ResolveError::UnknownPitches(invalid));
        }
        Ok(Self::new(notes))
    }

    /// Returns the scale pitches in order.
    pub fn notes(&self) -> &[Pitch] {
        &self.notes
    }

    /// Returns the root, or `None` for an empty scale.
    pub fn root(&self) -> Option<&Pitch> {
        self.notes.first()
    }

    /// Returns `true` if `pitch` is an enharmonic spelling of the root.
    pub fn is_root(&self, pitch: &Pitch) -> bool {
        self.root().is_some_and(|root| root.is_enharmonic_to(pitch))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Visible fret range `[start, stop]`; fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretWindow {
    start: u8,
    stop: u8,
}

impl FretWindow {
    /// Default last visible fret.
    pub const DEFAULT_STOP: u8 = 15;

    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidWindow`] if `stop < start`.
    pub fn new(start: u8, stop: u8) -> Result<Self, ResolveError> {
        if stop < start {
            return Err(ResolveError::InvalidWindow { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Returns the first visible fret.
    pub fn start(self) -> u8 {
        self.start
    }

    /// Returns the last visible fret.
    pub fn stop(self) -> u8 {
        self.stop
    }

    /// Number of frets in the window, both ends included.
    pub fn fret_count(self) -> usize {
        usize::from(self.stop - self.start) + 1
    }

    /// Returns `true` if `fret` lies inside the window.
    pub fn contains(self, fret: u8) -> bool {
        (self.start..=self.stop).contains(&fret)
    }

    /// Iterates over the frets of the window.
    pub fn frets(self) -> impl Iterator<Item = u8> {
        self.start..=self.stop
    }
}

impl Default for FretWindow {
    fn default() -> Self {
        Self {
            start: 0,
            stop: Self::DEFAULT_STOP,
        }
    }
}

/// A complete, validated diagram request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    tuning: Tuning,
    scale: Scale,
    window: FretWindow,
    title: Option<String>,
}

impl Diagram {
    pub fn new(tuning: Tuning, scale: Scale, window: FretWindow) -> Self {
        Self {
            tuning,
            scale,
            window,
            title: None,
        }
    }

    /// Resolves tuning and scale names together.
    ///
    /// Every name is checked before failing, so the error lists all invalid
    /// tuning and scale entries at once.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownPitches`] if any name is not a pitch.
    /// - [`ResolveError::EmptyTuning`] if `tuning` is empty.
    pub fn resolve<S: AsRef<str>, T: AsRef<str>>(
        tuning: &[S],
        scale: &[T],
        window: FretWindow,
    ) -> Result<Self, ResolveError> {
        let (strings, mut invalid) =
            resolve_names(tuning, |string| PitchPosition::Tuning { string });
        let (notes, invalid_notes) = resolve_names(scale, |degree| PitchPosition::Scale { degree });
        invalid.extend(invalid_notes);

        if !invalid.is_empty() {
            debug!(invalid_count = invalid.len(); "Rejecting diagram input");
            return Err(ResolveError::UnknownPitches(invalid));
        }

        let diagram = Self::new(Tuning::new(strings)?, Scale::new(notes), window);
        debug!(
            strings = diagram.tuning.len(),
            notes = diagram.scale.len(),
            start = window.start,
            stop = window.stop;
            "Diagram input resolved"
        );
        Ok(diagram)
    }

    /// Sets the title drawn above the fretboard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn window(&self) -> FretWindow {
        self.window
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
