//! Fretwork Core Types and Definitions
//!
//! This crate provides the foundational types for Fretwork scale diagrams.
//! It includes:
//!
//! - **Pitches**: Enharmonic pitch spelling resolution ([`pitch`] module)
//! - **Semantic**: Validated tuning, scale and fret window types ([`semantic`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual definitions for fretboard elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod pitch;
pub mod semantic;
