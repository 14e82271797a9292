//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use fretwork::{
    DiagramBuilder, FretworkError,
    color::Color,
    config::AppConfig,
    export::{self, Exporter, svg::SvgBuilder},
    layout::Layout,
    semantic::{FretWindow, PitchPosition, ResolveError},
};

const GUITAR: [&str; 6] = ["E", "A", "D", "G", "B", "E"];
const A_MIXOLYDIAN: [&str; 7] = ["A", "B", "C#", "D", "E", "F#", "G"];

/// Exporter that only remembers what it was given.
#[derive(Default)]
struct RecordingExporter {
    exported: Vec<usize>,
}

impl Exporter for RecordingExporter {
    fn export_layout(&mut self, layout: &Layout) -> Result<(), export::Error> {
        self.exported.push(layout.note_markers().count());
        Ok(())
    }
}

fn render_names(
    builder: &DiagramBuilder,
    tuning: &[&str],
    scale: &[&str],
    exporter: &mut RecordingExporter,
) -> Result<(), FretworkError> {
    let diagram = builder.resolve(tuning, scale, FretWindow::default(), None)?;
    builder.render_with(&diagram, exporter)
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_render_a_mixolydian() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .resolve(&GUITAR, &A_MIXOLYDIAN, FretWindow::default(), Some("A Mixolydian"))
        .expect("Failed to resolve diagram");
    let result = builder.render_svg(&diagram);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
        assert!(svg.contains("A Mixolydian"), "Output should contain the title");
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_render_empty_scale() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .resolve(&GUITAR, &[] as &[&str], FretWindow::default(), None)
        .expect("Empty scale is valid");

    let svg = builder.render_svg(&diagram).expect("Failed to render");
    assert!(!svg.contains("class=\"full\""));
    assert!(!svg.contains("class=\"half\""));
}

#[test]
fn test_exporter_receives_layout() {
    let builder = DiagramBuilder::default();
    let mut exporter = RecordingExporter::default();

    render_names(&builder, &GUITAR, &A_MIXOLYDIAN, &mut exporter).expect("Failed to render");
    assert_eq!(exporter.exported, [2 * 7 * 6]);
}

#[test]
fn test_unknown_pitch_fails_before_export() {
    let builder = DiagramBuilder::default();
    let mut exporter = RecordingExporter::default();

    let result = render_names(&builder, &GUITAR, &["A", "H", "C#"], &mut exporter);
    assert!(exporter.exported.is_empty(), "Nothing should be drawn");

    match result {
        Err(FretworkError::Resolve(ResolveError::UnknownPitches(invalid))) => {
            assert_eq!(invalid.len(), 1);
            assert_eq!(invalid[0].name(), "H");
            assert_eq!(invalid[0].position(), PitchPosition::Scale { degree: 1 });
        }
        other => panic!("Expected unknown pitch error, got {other:?}"),
    }
}

#[test]
fn test_all_invalid_entries_reported() {
    let builder = DiagramBuilder::default();
    let result = builder.resolve(
        &["E", "X", "D"],
        &["A", "B", "Q"],
        FretWindow::default(),
        None,
    );

    let Err(FretworkError::Resolve(ResolveError::UnknownPitches(invalid))) = result else {
        panic!("Expected unknown pitch error");
    };
    let positions: Vec<PitchPosition> = invalid.iter().map(|i| i.position()).collect();
    assert_eq!(
        positions,
        [
            PitchPosition::Tuning { string: 1 },
            PitchPosition::Scale { degree: 2 },
        ]
    );
}

#[test]
fn test_empty_tuning_rejected() {
    let builder = DiagramBuilder::default();
    let result = builder.resolve(&[] as &[&str], &["A"], FretWindow::default(), None);
    assert!(matches!(
        result,
        Err(FretworkError::Resolve(ResolveError::EmptyTuning))
    ));
}

#[test]
fn test_invalid_style_is_config_error() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        note_color = "not-a-color"
        "#,
    )
    .expect("Failed to parse config");
    let builder = DiagramBuilder::new(config);
    let diagram = builder
        .resolve(&GUITAR, &A_MIXOLYDIAN, FretWindow::default(), None)
        .expect("Failed to resolve");

    let mut exporter = RecordingExporter::default();
    let result = builder.render_with(&diagram, &mut exporter);
    assert!(matches!(result, Err(FretworkError::Config(_))));
    assert!(exporter.exported.is_empty());
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let guitar = builder
        .resolve(&GUITAR, &A_MIXOLYDIAN, FretWindow::default(), None)
        .expect("Failed to resolve guitar diagram");
    let bass = builder
        .resolve(&["E", "A", "D", "G"], &["E", "G", "A", "B", "D"], FretWindow::default(), None)
        .expect("Failed to resolve bass diagram");

    let svg1 = builder.render_svg(&guitar).expect("Failed to render guitar");
    let svg2 = builder.render_svg(&bass).expect("Failed to render bass");
    assert_ne!(svg1, svg2, "Different diagrams should produce different SVG");
}

#[test]
fn test_render_svg_matches_explicit_pipeline() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        fret_spacing = 48.0
        note_color = "teal"
        "#,
    )
    .expect("Failed to parse config");
    let builder = DiagramBuilder::new(config);
    let diagram = builder
        .resolve(&GUITAR, &A_MIXOLYDIAN, FretWindow::new(3, 12).unwrap(), None)
        .expect("Failed to resolve");

    let theme = builder.theme().expect("Failed to build theme");
    let layout = Layout::new(&diagram, &theme);
    let mut svg = SvgBuilder::new().with_theme(theme).build();
    svg.export_layout(&layout).expect("Failed to export");

    let rendered = builder.render_svg(&diagram).expect("Failed to render");
    assert_eq!(svg.finish().expect("Nothing exported"), rendered);
}

#[test]
fn test_note_color_reaches_hollow_outlines() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        note_color = "seagreen"
        hollow_stroke_style = "dashed"
        "#,
    )
    .expect("Failed to parse config");
    let builder = DiagramBuilder::new(config);
    let diagram = builder
        .resolve(&GUITAR, &["A"], FretWindow::default(), None)
        .expect("Failed to resolve");
    let svg = builder.render_svg(&diagram).expect("Failed to render");

    let outline = Color::new("seagreen").unwrap().with_alpha(0.5);
    let hollow_start = svg.find("class=\"hollow\"").expect("No hollow marker");
    let hollow_end = hollow_start + svg[hollow_start..].find("</g>").expect("Unclosed group");
    let hollow = &svg[hollow_start..hollow_end];

    assert!(hollow.contains(&format!("stroke=\"{outline}\"")), "{hollow}");
    assert!(hollow.contains("stroke-dasharray=\"5,5\""), "{hollow}");
}
