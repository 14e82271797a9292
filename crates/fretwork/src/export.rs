//! Output surfaces for computed layouts.
//!
//! An [`Exporter`] receives a finished [`Layout`] and draws it. The SVG
//! surface lives in [`svg`]; other surfaces only need to implement the trait.

pub mod svg;

use thiserror::Error;

use crate::layout::Layout;

/// A drawing surface that a [`Layout`] can be exported to.
pub trait Exporter {
    fn export_layout(&mut self, layout: &Layout) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),
}
