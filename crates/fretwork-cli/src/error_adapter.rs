//! Error adapter for converting FretworkError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`ResolveError::UnknownPitches`] lists several invalid tuning or
//! scale entries, each entry is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use fretwork::{
    FretworkError,
    semantic::{InvalidPitch, PitchPosition, ResolveError},
};

const PITCH_HELP: &str =
    "pitch names are a letter A to G followed by nothing, #, b, ## or bb (e.g. C#, Db, B##)";

/// Adapter for a single invalid tuning or scale entry.
pub struct InvalidPitchAdapter<'a>(pub &'a InvalidPitch);

impl fmt::Debug for InvalidPitchAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for InvalidPitchAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for InvalidPitchAdapter<'_> {}

impl MietteDiagnostic for InvalidPitchAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("fretwork::unknown_pitch"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let flag = match self.0.position() {
            PitchPosition::Tuning { .. } => "--tuning",
            PitchPosition::Scale { .. } => "--scale",
        };
        Some(Box::new(format!("check {flag}: {PITCH_HELP}")))
    }
}

/// Adapter for [`FretworkError`] variants other than unknown pitches.
pub struct ErrorAdapter<'a>(pub &'a FretworkError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FretworkError::Io(_) => "fretwork::io",
            FretworkError::Resolve(ResolveError::UnknownPitches(_)) => "fretwork::unknown_pitch",
            FretworkError::Resolve(ResolveError::EmptyTuning) => "fretwork::empty_tuning",
            FretworkError::Resolve(ResolveError::InvalidWindow { .. }) => {
                "fretwork::invalid_window"
            }
            FretworkError::Config(_) => "fretwork::config",
            FretworkError::Export(_) => "fretwork::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FretworkError::Resolve(ResolveError::EmptyTuning) => {
                "pass at least one pitch with --tuning, or pick an --instrument"
            }
            FretworkError::Resolve(ResolveError::InvalidWindow { .. }) => {
                "--stop must not be lower than --start"
            }
            FretworkError::Config(_) => {
                "check the [style] and [defaults] sections of the configuration file"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One invalid tuning or scale entry.
    Pitch(InvalidPitchAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Pitch(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Pitch(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Pitch(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Pitch(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`FretworkError`] into a list of reportable errors.
///
/// For [`ResolveError::UnknownPitches`], this returns one [`Reportable`] for
/// each invalid entry. For other error variants, this returns a single
/// [`Reportable`].
pub fn to_reportables(err: &FretworkError) -> Vec<Reportable<'_>> {
    match err {
        FretworkError::Resolve(ResolveError::UnknownPitches(invalid)) => invalid
            .iter()
            .map(|pitch| Reportable::Pitch(InvalidPitchAdapter(pitch)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render every reportable of `err` with `handler`, one string per report.
///
/// A report that fails to render falls back to its plain message.
pub fn render_reports(err: &FretworkError, handler: &GraphicalReportHandler) -> Vec<String> {
    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut writer = String::new();
            match handler.render_report(&mut writer, reportable) {
                Ok(()) => writer,
                Err(_) => reportable.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use fretwork::pitch::UnknownPitch;
    use miette::GraphicalTheme;

    use super::*;

    fn unknown_pitches() -> FretworkError {
        FretworkError::Resolve(ResolveError::UnknownPitches(vec![
            InvalidPitch::new(PitchPosition::Tuning { string: 1 }, UnknownPitch::new("X")),
            InvalidPitch::new(PitchPosition::Scale { degree: 0 }, UnknownPitch::new("H")),
        ]))
    }

    #[test]
    fn test_one_reportable_per_invalid_pitch() {
        let err = unknown_pitches();
        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "unknown pitch `X` in tuning entry 2");
        assert_eq!(reportables[1].to_string(), "unknown pitch `H` in scale entry 1");
    }

    #[test]
    fn test_pitch_code_and_help() {
        let err = unknown_pitches();
        let reportables = to_reportables(&err);

        let code = reportables[0].code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("fretwork::unknown_pitch"));

        let tuning_help = reportables[0].help().map(|h| h.to_string()).unwrap();
        assert!(tuning_help.starts_with("check --tuning"));
        let scale_help = reportables[1].help().map(|h| h.to_string()).unwrap();
        assert!(scale_help.starts_with("check --scale"));
    }

    #[test]
    fn test_invalid_window() {
        let err = FretworkError::Resolve(ResolveError::InvalidWindow { start: 9, stop: 5 });
        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                let code = e.code().map(|c| c.to_string());
                assert_eq!(code.as_deref(), Some("fretwork::invalid_window"));
                assert!(e.help().is_some());
            }
            Reportable::Pitch(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error() {
        let err = FretworkError::Config("bad color".to_string());
        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "Configuration error: bad color");
        let code = reportables[0].code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("fretwork::config"));
    }

    #[test]
    fn test_render_reports_one_text_per_pitch() {
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let reports = render_reports(&unknown_pitches(), &handler);

        assert_eq!(reports.len(), 2);
        assert!(reports[0].contains("fretwork::unknown_pitch"), "{}", reports[0]);
        assert!(reports[0].contains("unknown pitch `X` in tuning entry 2"));
        assert!(reports[1].contains("unknown pitch `H` in scale entry 1"));
        assert!(reports[1].contains("check --scale"));
    }

    #[test]
    fn test_render_reports_plain_error() {
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let err = FretworkError::Config("bad color".to_string());
        let reports = render_reports(&err, &handler);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("Configuration error: bad color"));
        assert!(reports[0].contains("fretwork::config"));
    }
}
