//! Pitch spelling resolution and fret arithmetic.
//!
//! Every pitch name is resolved to one of the twelve chromatic classes of the
//! equal-tempered octave. Classes are numbered from A:
//!
//! ```text
//!   0   1   2   3   4   5   6   7   8   9   10  11
//!   A   A#  B   C   C#  D   D#  E   F   F#  G   G#
//! ```
//!
//! Spellings are a letter `A`-`G` followed by one of `#`, `b`, `##`, `bb` or
//! nothing. Lookup is case-insensitive and accepts `♯`/`♭` in place of
//! `#`/`b`, so `C#`, `db`, `B##` and `D♭` all name class 4.
//!
//! # Examples
//!
//! ```
//! # use fretwork_core::pitch::{chromatic_class, fret_offset};
//! assert_eq!(chromatic_class("C#").unwrap(), chromatic_class("Db").unwrap());
//! assert_eq!(fret_offset("E", "A").unwrap(), 5);
//! assert_eq!(fret_offset("E", "Dbb").unwrap(), 8);
//! assert!(chromatic_class("H").is_err());
//! ```

use std::{collections::HashMap, fmt, str::FromStr, sync::OnceLock};

use log::trace;
use thiserror::Error;

/// Number of semitones in one octave.
pub const SEMITONES_PER_OCTAVE: u8 = 12;

/// Canonical (lower-cased) spellings and their chromatic classes.
const SPELLINGS: [(&str, u8); 35] = [
    ("a", 0),
    ("a#", 1),
    ("ab", 11),
    ("a##", 2),
    ("abb", 10),
    ("b", 2),
    ("b#", 3),
    ("bb", 1),
    ("b##", 4),
    ("bbb", 0),
    ("c", 3),
    ("c#", 4),
    ("cb", 2),
    ("c##", 5),
    ("cbb", 1),
    ("d", 5),
    ("d#", 6),
    ("db", 4),
    ("d##", 7),
    ("dbb", 3),
    ("e", 7),
    ("e#", 8),
    ("eb", 6),
    ("e##", 9),
    ("ebb", 5),
    ("f", 8),
    ("f#", 9),
    ("fb", 7),
    ("f##", 10),
    ("fbb", 6),
    ("g", 10),
    ("g#", 11),
    ("gb", 9),
    ("g##", 0),
    ("gbb", 8),
];

/// Sharp spellings used when a class is displayed without an explicit spelling.
const SHARP_NAMES: [&str; SEMITONES_PER_OCTAVE as usize] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

static SPELLING_TABLE: OnceLock<HashMap<&'static str, PitchClass>> = OnceLock::new();

fn spelling_table() -> &'static HashMap<&'static str, PitchClass> {
    SPELLING_TABLE.get_or_init(|| {
        SPELLINGS
            .iter()
            .map(|&(spelling, class)| (spelling, PitchClass(class)))
            .collect()
    })
}

/// Normalizes a pitch name into the key format of the spelling table.
fn canonicalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '♯' => '#',
            '♭' => 'b',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Error returned when a pitch name matches no known spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pitch `{name}`")]
pub struct UnknownPitch {
    name: String,
}

impl UnknownPitch {
    /// Creates a new error for the given pitch name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the pitch name as it was supplied.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A chromatic pitch class in the range `0..12`, with A = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Creates a pitch class from its index, or `None` if the index is not below 12.
    pub fn new(index: u8) -> Option<Self> {
        (index < SEMITONES_PER_OCTAVE).then_some(Self(index))
    }

    /// Returns the class index in `0..12`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Number of frets to climb from an open string tuned to `self` until
    /// `target` sounds.
    ///
    /// The result is always in `0..12`; a string reaches its own class on the
    /// open string (fret 0).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretwork_core::pitch::PitchClass;
    /// let a = "A".parse::<PitchClass>().unwrap();
    /// let g_sharp = "G#".parse::<PitchClass>().unwrap();
    /// assert_eq!(a.fret_offset_to(g_sharp), 11);
    /// assert_eq!(a.fret_offset_to(a), 0);
    /// ```
    pub fn fret_offset_to(self, target: PitchClass) -> u8 {
        (SEMITONES_PER_OCTAVE + target.0 - self.0) % SEMITONES_PER_OCTAVE
    }

    /// Returns the sharp spelling of this class (e.g. `"C#"`).
    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[usize::from(self.0)]
    }
}

impl FromStr for PitchClass {
    type Err = UnknownPitch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chromatic_class(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

/// A pitch as written by the user, together with its resolved class.
///
/// The spelling is kept so that labels show `Db` when the user wrote `Db`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pitch {
    spelling: String,
    class: PitchClass,
}

impl Pitch {
    /// Resolves a pitch name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPitch`] if the name is not an accepted spelling.
    pub fn new(name: &str) -> Result<Self, UnknownPitch> {
        let class = chromatic_class(name)?;
        Ok(Self {
            spelling: name.trim().to_string(),
            class,
        })
    }

    /// Returns the spelling as supplied, without surrounding whitespace.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Returns the resolved chromatic class.
    pub fn class(&self) -> PitchClass {
        self.class
    }

    /// Returns `true` if both pitches resolve to the same class.
    pub fn is_enharmonic_to(&self, other: &Pitch) -> bool {
        self.class == other.class
    }

    /// Fret on a string tuned to `self` where `target` first sounds.
    pub fn fret_offset_to(&self, target: &Pitch) -> u8 {
        self.class.fret_offset_to(target.class)
    }
}

impl FromStr for Pitch {
    type Err = UnknownPitch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling)
    }
}

/// Resolves a pitch name to its chromatic class.
///
/// # Errors
///
/// Returns [`UnknownPitch`] carrying the original name when no spelling matches.
pub fn chromatic_class(name: &str) -> Result<PitchClass, UnknownPitch> {
    let key = canonicalize(name);
    let class = spelling_table()
        .get(key.as_str())
        .copied()
        .ok_or_else(|| UnknownPitch::new(name))?;

    trace!(name, class = class.index(); "Resolved pitch");
    Ok(class)
}

/// Computes the fret where `target` first sounds on a string tuned to `open`.
///
/// Equivalent to `(12 - (start - stop)) mod 12` on the two chromatic classes.
///
/// # Errors
///
/// Returns [`UnknownPitch`] for the first name that cannot be resolved.
pub fn fret_offset(open: &str, target: &str) -> Result<u8, UnknownPitch> {
    let start = chromatic_class(open)?;
    let stop = chromatic_class(target)?;
    Ok(start.fret_offset_to(stop))
}

/// Iterates over every accepted canonical spelling and its class.
pub fn spellings() -> impl Iterator<Item = (&'static str, PitchClass)> {
    SPELLINGS
        .iter()
        .map(|&(spelling, class)| (spelling, PitchClass(class)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> u8 {
        chromatic_class(name).unwrap().index()
    }

    #[test]
    fn test_reference_fret_offsets() {
        let cases = [
            ("E", "A", 5),
            ("D", "E", 2),
            ("G", "C", 5),
            ("A", "G#", 11),
            ("E", "E", 0),
            ("E", "F", 1),
            ("E", "B", 7),
            ("E", "A##", 7),
            ("E", "C", 8),
            ("E", "B#", 8),
            ("E", "Dbb", 8),
            ("B", "E", 5),
        ];

        for (open, target, expected) in cases {
            assert_eq!(
                fret_offset(open, target).unwrap(),
                expected,
                "{target} on a {open} string"
            );
        }
    }

    #[test]
    fn test_natural_classes() {
        assert_eq!(class("A"), 0);
        assert_eq!(class("B"), 2);
        assert_eq!(class("C"), 3);
        assert_eq!(class("D"), 5);
        assert_eq!(class("E"), 7);
        assert_eq!(class("F"), 8);
        assert_eq!(class("G"), 10);
    }

    #[test]
    fn test_enharmonic_spellings_share_class() {
        assert_eq!(class("C#"), 4);
        assert_eq!(class("Db"), 4);
        assert_eq!(class("B##"), 4);

        assert_eq!(class("Dbb"), class("C"));
        assert_eq!(class("B#"), class("C"));
        assert_eq!(class("Cb"), class("B"));
        assert_eq!(class("Fb"), class("E"));
        assert_eq!(class("E#"), class("F"));
        assert_eq!(class("G##"), class("A"));
        assert_eq!(class("Abb"), class("G"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(class("c#"), class("C#"));
        assert_eq!(class("DB"), class("Db"));
        assert_eq!(class("bb"), class("Bb"));
        assert_eq!(class("bbb"), class("A"));
        assert_eq!(fret_offset("e", "a").unwrap(), fret_offset("E", "A").unwrap());
    }

    #[test]
    fn test_unicode_accidentals() {
        assert_eq!(class("F♯"), class("F#"));
        assert_eq!(class("B♭"), class("Bb"));
        assert_eq!(class("D♭♭"), class("C"));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(class("  G# "), 11);
        assert_eq!(Pitch::new(" Eb ").unwrap().spelling(), "Eb");
    }

    #[test]
    fn test_unknown_pitch_rejected() {
        for name in ["H", "", "#", "C###", "Cbbb", "C#b", "A1", "do"] {
            let err = chromatic_class(name).unwrap_err();
            assert_eq!(err.name(), name);
        }
    }

    #[test]
    fn test_unknown_pitch_message() {
        let err = fret_offset("E", "H").unwrap_err();
        assert_eq!(err.to_string(), "unknown pitch `H`");
    }

    #[test]
    fn test_fret_offset_reports_open_string_first() {
        let err = fret_offset("X", "Y").unwrap_err();
        assert_eq!(err.name(), "X");
    }

    #[test]
    fn test_pitch_class_new_bounds() {
        assert_eq!(PitchClass::new(0).map(PitchClass::index), Some(0));
        assert_eq!(PitchClass::new(11).map(PitchClass::index), Some(11));
        assert!(PitchClass::new(12).is_none());
    }

    #[test]
    fn test_pitch_class_display_uses_sharps() {
        assert_eq!(chromatic_class("Db").unwrap().to_string(), "C#");
        assert_eq!(chromatic_class("Abb").unwrap().to_string(), "G");
    }

    #[test]
    fn test_pitch_keeps_spelling() {
        let pitch: Pitch = "Gb".parse().unwrap();
        assert_eq!(pitch.to_string(), "Gb");
        assert_eq!(pitch.class(), chromatic_class("F#").unwrap());
        assert!(pitch.is_enharmonic_to(&Pitch::new("F#").unwrap()));
        assert!(!pitch.is_enharmonic_to(&Pitch::new("G").unwrap()));
    }

    #[test]
    fn test_spelling_table_is_complete() {
        assert_eq!(spellings().count(), 35);
        assert_eq!(spelling_table().len(), 35);

        for index in 0..SEMITONES_PER_OCTAVE {
            let count = spellings().filter(|(_, c)| c.index() == index).count();
            assert!(count >= 2, "class {index} has only {count} spellings");
        }
    }
}
