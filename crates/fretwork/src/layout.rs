//! Fretboard layout.
//!
//! [`Layout::new`] places every element of a diagram in SVG coordinates
//! without drawing anything: string rows, fret wires, labels, inlays and the
//! three kinds of note marker. An [`Exporter`](crate::export::Exporter) turns
//! the result into output.
//!
//! Fret `f` is drawn as a column of width `fret_spacing`, centered at
//! `(f + 0.5) * fret_spacing`; fret wires sit on the column boundaries and the
//! nut closes column 0. The board always covers frets `0..=max(stop, 23)` so
//! both marker octaves exist; the fret window only decides the visible
//! [`viewport`](Layout::viewport) and the [`clip`](Layout::clip) region.

use std::collections::HashSet;

use log::{debug, trace};

use fretwork_core::{
    draw::{InlayKind, MarkerFill, Text, Theme},
    geometry::{Bounds, Insets, Point, Size},
    pitch::SEMITONES_PER_OCTAVE,
    semantic::Diagram,
};

/// Lowest last fret of the board: the octave marker of fret 11.
pub const MIN_LAST_FRET: u8 = 2 * SEMITONES_PER_OCTAVE - 1;

/// A note marker placed on one string at one fret.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker {
    string: usize,
    fret: u8,
    fill: MarkerFill,
    center: Point,
}

impl PlacedMarker {
    pub fn string(&self) -> usize {
        self.string
    }

    pub fn fret(&self) -> u8 {
        self.fret
    }

    pub fn fill(&self) -> MarkerFill {
        self.fill
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

/// A string row with its open-string label.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLine {
    label: String,
    y: f32,
    label_position: Point,
}

impl StringLine {
    /// Spelling of the open-string pitch, as given in the tuning.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn label_position(&self) -> Point {
        self.label_position
    }
}

/// A fret number printed under the board.
#[derive(Debug, Clone, PartialEq)]
pub struct FretLabel {
    fret: u8,
    text: String,
    position: Point,
    inlay: bool,
}

impl FretLabel {
    pub fn fret(&self) -> u8 {
        self.fret
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` if the fret carries an inlay.
    pub fn is_inlay(&self) -> bool {
        self.inlay
    }
}

/// An inlay centered between the outer strings of a fret column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedInlay {
    fret: u8,
    kind: InlayKind,
    center: Point,
    separation: f32,
}

impl PlacedInlay {
    pub fn fret(&self) -> u8 {
        self.fret
    }

    pub fn kind(&self) -> InlayKind {
        self.kind
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Distance between the two dots of a double inlay.
    pub fn separation(&self) -> f32 {
        self.separation
    }
}

/// Title text and the point its center is drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLabel {
    text: String,
    position: Point,
}

impl TitleLabel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Positioned elements of one diagram.
#[derive(Debug, Clone)]
pub struct Layout {
    last_fret: u8,
    board: Bounds,
    nut_x: f32,
    fret_wires: Vec<f32>,
    strings: Vec<StringLine>,
    fret_labels: Vec<FretLabel>,
    inlays: Vec<PlacedInlay>,
    markers: Vec<PlacedMarker>,
    title: Option<TitleLabel>,
    clip: Bounds,
    viewport: Bounds,
}

impl Layout {
    /// Computes the layout of `diagram` with the spacing of `theme`.
    pub fn new(diagram: &Diagram, theme: &Theme) -> Self {
        let window = diagram.window();
        let fret_spacing = theme.fret_spacing();
        let string_spacing = theme.string_spacing();
        let last_fret = window.stop().max(MIN_LAST_FRET);
        let column_center = |fret: u8| (f32::from(fret) + 0.5) * fret_spacing;

        let title_size = diagram
            .title()
            .map(|title| Text::new(theme.title_text(), title).calculate_size());
        let title_band = title_size
            .map(|size| size.height() + string_spacing / 2.0)
            .unwrap_or_default();

        let string_count = diagram.tuning().len();
        let top = title_band + string_spacing;
        let bottom = top + (string_count - 1) as f32 * string_spacing;
        let string_y = |string: usize| bottom - string as f32 * string_spacing;

        let board = Bounds::new_from_top_left(
            Point::new(0.0, top),
            Size::new(column_center(last_fret) + fret_spacing / 2.0, bottom - top),
        );
        let label_y = bottom + string_spacing * 0.9;
        let height = label_y + string_spacing * 0.7;

        let window_left = f32::from(window.start()) * fret_spacing;
        let strings = diagram
            .tuning()
            .strings()
            .iter()
            .enumerate()
            .map(|(string, pitch)| StringLine {
                label: pitch.spelling().to_string(),
                y: string_y(string),
                label_position: Point::new(window_left - fret_spacing / 2.0, string_y(string)),
            })
            .collect();

        let fret_wires = (1..=last_fret)
            .map(|fret| (f32::from(fret) + 1.0) * fret_spacing)
            .collect();

        let fret_labels = (1..=last_fret)
            .map(|fret| FretLabel {
                fret,
                text: fret.to_string(),
                position: Point::new(column_center(fret), label_y),
                inlay: theme.inlays().at(fret).is_some(),
            })
            .collect();

        let separation = if board.height() > 0.0 {
            board.height() / 2.0
        } else {
            string_spacing
        };
        let inlays = (1..=last_fret)
            .filter_map(|fret| {
                theme.inlays().at(fret).map(|kind| PlacedInlay {
                    fret,
                    kind,
                    center: Point::new(column_center(fret), board.center().y()),
                    separation,
                })
            })
            .collect();

        let markers = place_markers(diagram, last_fret, |string, fret| {
            Point::new(column_center(fret), string_y(string))
        });

        let clip = Bounds::new_from_top_left(
            Point::new(window_left, 0.0),
            Size::new(window.fret_count() as f32 * fret_spacing, height),
        );
        let mut viewport = clip.add_padding(Insets::new(0.0, fret_spacing / 2.0, 0.0, fret_spacing));
        if let Some(size) = title_size {
            let needed = size.width() + string_spacing;
            if needed > viewport.width() {
                viewport =
                    viewport.add_padding(Insets::new(0.0, needed - viewport.width(), 0.0, 0.0));
            }
        }

        let title = diagram.title().zip(title_size).map(|(text, size)| TitleLabel {
            text: text.to_string(),
            position: Point::new(
                viewport.center().x(),
                string_spacing / 2.0 + size.height() / 2.0,
            ),
        });

        debug!(
            last_fret,
            markers = markers.len(),
            width = viewport.width(),
            height = viewport.height();
            "Layout calculated"
        );

        Self {
            last_fret,
            board,
            nut_x: fret_spacing,
            fret_wires,
            strings,
            fret_labels,
            inlays,
            markers,
            title,
            clip,
            viewport,
        }
    }

    /// Highest fret drawn on the board.
    pub fn last_fret(&self) -> u8 {
        self.last_fret
    }

    /// Region covered by the strings, from the left of fret 0 to the last fret.
    pub fn board(&self) -> Bounds {
        self.board
    }

    /// Horizontal position of the nut.
    pub fn nut_x(&self) -> f32 {
        self.nut_x
    }

    /// Horizontal positions of the fret wires, nut excluded.
    pub fn fret_wires(&self) -> &[f32] {
        &self.fret_wires
    }

    /// String rows, string 0 first.
    pub fn strings(&self) -> &[StringLine] {
        &self.strings
    }

    pub fn fret_labels(&self) -> &[FretLabel] {
        &self.fret_labels
    }

    pub fn inlays(&self) -> &[PlacedInlay] {
        &self.inlays
    }

    /// All markers: hollow positions first, then scale notes in
    /// string-by-scale order.
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    /// Markers that carry a scale note, root markers included.
    pub fn note_markers(&self) -> impl Iterator<Item = &PlacedMarker> {
        self.markers
            .iter()
            .filter(|marker| marker.fill != MarkerFill::Hollow)
    }

    pub fn title(&self) -> Option<&TitleLabel> {
        self.title.as_ref()
    }

    /// Region of board content left visible by the fret window.
    pub fn clip(&self) -> Bounds {
        self.clip
    }

    /// Visible canvas: the clip region plus the string-label gutter and
    /// padding, widened to fit the title.
    pub fn viewport(&self) -> Bounds {
        self.viewport
    }
}

/// Places scale-note markers for every string and scale entry, then hollow
/// markers on every remaining fret from 1 to `last_fret`.
fn place_markers(
    diagram: &Diagram,
    last_fret: u8,
    center: impl Fn(usize, u8) -> Point,
) -> Vec<PlacedMarker> {
    let scale = diagram.scale();
    let mut notes = Vec::with_capacity(2 * scale.len() * diagram.tuning().len());

    for (string, open) in diagram.tuning().strings().iter().enumerate() {
        for note in scale.notes() {
            let fret = open.fret_offset_to(note);
            let fill = if scale.is_root(note) {
                MarkerFill::Half
            } else {
                MarkerFill::Full
            };
            trace!(string, note = note.spelling(), fret; "Placing note");

            for fret in [fret, fret + SEMITONES_PER_OCTAVE] {
                notes.push(PlacedMarker {
                    string,
                    fret,
                    fill,
                    center: center(string, fret),
                });
            }
        }
    }

    let occupied: HashSet<(usize, u8)> = notes.iter().map(|m| (m.string, m.fret)).collect();
    let mut markers: Vec<PlacedMarker> = (0..diagram.tuning().len())
        .flat_map(|string| (1..=last_fret).map(move |fret| (string, fret)))
        .filter(|position| !occupied.contains(position))
        .map(|(string, fret)| PlacedMarker {
            string,
            fret,
            fill: MarkerFill::Hollow,
            center: center(string, fret),
        })
        .collect();

    markers.extend(notes);
    markers
}
