//! Example: A Mixolydian on a guitar in standard tuning
//!
//! Resolves the scale, renders it with the default theme and writes
//! `a_mixolydian.svg` to the working directory.

use std::fs;

use fretwork::{DiagramBuilder, semantic::FretWindow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tuning = ["E", "A", "D", "G", "B", "E"];
    let a_mixolydian = ["A", "B", "C#", "D", "E", "F#", "G"];

    let builder = DiagramBuilder::default();
    let diagram = builder.resolve(
        &tuning,
        &a_mixolydian,
        FretWindow::new(0, 15)?,
        Some("A Mixolydian"),
    )?;

    println!(
        "{} strings, {} scale notes, root {}",
        diagram.tuning().len(),
        diagram.scale().len(),
        diagram.scale().root().map(|p| p.spelling()).unwrap_or("-"),
    );

    let svg = builder.render_svg(&diagram)?;
    fs::write("a_mixolydian.svg", &svg)?;
    println!("Wrote a_mixolydian.svg ({} bytes)", svg.len());

    Ok(())
}
