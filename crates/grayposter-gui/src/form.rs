//! Validation of the window's text fields.
//!
//! Kept free of UI types so the rules can be tested without a display.

use std::path::PathBuf;

use grayposter::{parse_levels, BucketMap, Mapping, PosterizeError, ValueList};
use thiserror::Error;

/// Extension appended to output paths picked without one.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "jpg";

/// Message-box text for every way the form can be rejected.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Please select both input and output files.")]
    MissingPaths,

    #[error("Levels must be an integer.")]
    LevelsNotInteger,

    #[error("Levels must be between 2 and 256.")]
    LevelsOutOfRange,

    #[error("Values must be comma-separated integers.")]
    BadValues,

    #[error("Bin breakpoints must be comma-separated integers.")]
    BadBreakpoints,

    #[error("Number of bin levels must be equal to the number of values - 1.")]
    BreakpointCount,

    #[error("{0}")]
    Mapping(#[from] PosterizeError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Basic,
    Buckets,
}

impl Mode {
    /// Mode for the selector's `current-index`.
    pub fn from_index(index: i32) -> Self {
        if index == 1 {
            Mode::Buckets
        } else {
            Mode::Basic
        }
    }
}

/// Raw field contents as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct Form {
    pub input: String,
    pub output: String,
    pub mode_index: i32,
    pub levels: String,
    pub values: String,
    pub breakpoints: String,
}

/// A validated request to posterize one file.
#[derive(Debug)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mapping: Mapping,
}

impl Form {
    pub fn mode(&self) -> Mode {
        Mode::from_index(self.mode_index)
    }

    /// Build the mapping from the mode-specific fields.
    pub fn mapping(&self) -> Result<Mapping, FormError> {
        match self.mode() {
            Mode::Basic => match parse_levels(&self.levels) {
                Ok(levels) => Ok(Mapping::Levels(levels)),
                Err(PosterizeError::InvalidLevels(_)) => Err(FormError::LevelsOutOfRange),
                Err(_) => Err(FormError::LevelsNotInteger),
            },
            Mode::Buckets => {
                let values: ValueList = self.values.parse().map_err(|_| FormError::BadValues)?;

                let breakpoints = match self.breakpoints.trim() {
                    "" => None,
                    text => {
                        let points: ValueList =
                            text.parse().map_err(|_| FormError::BadBreakpoints)?;
                        if points.len() + 1 != values.len() {
                            return Err(FormError::BreakpointCount);
                        }
                        Some(points)
                    }
                };

                let buckets = BucketMap::new(&values, breakpoints.as_deref())?;
                Ok(Mapping::Buckets(buckets))
            }
        }
    }

    /// Validate the whole form.
    pub fn job(&self) -> Result<Job, FormError> {
        let input = self.input.trim();
        let output = self.output.trim();
        if input.is_empty() || output.is_empty() {
            return Err(FormError::MissingPaths);
        }

        Ok(Job {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            mapping: self.mapping()?,
        })
    }
}

/// Give `path` the default output extension when it has none.
pub fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(DEFAULT_OUTPUT_EXTENSION);
    }
    path
}

/// Append `value` to a comma-separated values field.
pub fn append_value(field: &str, value: u8) -> String {
    let field = field.trim().trim_end_matches(',');
    if field.is_empty() {
        value.to_string()
    } else {
        format!("{field},{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn basic(levels: &str) -> Form {
        Form {
            input: "in.png".into(),
            output: "out.png".into(),
            mode_index: 0,
            levels: levels.into(),
            ..Default::default()
        }
    }

    fn buckets(values: &str, breakpoints: &str) -> Form {
        Form {
            input: "in.png".into(),
            output: "out.png".into(),
            mode_index: 1,
            values: values.into(),
            breakpoints: breakpoints.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_paths() {
        let mut form = basic("3");
        form.output = "  ".into();
        assert!(matches!(form.job(), Err(FormError::MissingPaths)));
    }

    #[test]
    fn test_basic_mode() {
        let job = basic("3").job().unwrap();
        assert_eq!(job.input, PathBuf::from("in.png"));
        assert!(matches!(job.mapping, Mapping::Levels(l) if l.count() == 3));
    }

    #[test]
    fn test_levels_messages() {
        let err = basic("three").mapping().unwrap_err();
        assert_eq!(err.to_string(), "Levels must be an integer.");

        let err = basic("300").mapping().unwrap_err();
        assert_eq!(err.to_string(), "Levels must be between 2 and 256.");

        let err = basic("1").mapping().unwrap_err();
        assert!(matches!(err, FormError::LevelsOutOfRange));
    }

    #[test]
    fn test_bucket_mode_even() {
        let mapping = buckets("10,80,150", "").mapping().unwrap();
        match mapping {
            Mapping::Buckets(b) => {
                assert_eq!(b.values(), &[10, 80, 150]);
                assert!(b.breakpoints().is_none());
            }
            other => panic!("unexpected mapping {other:?}"),
        }
    }

    #[test]
    fn test_bucket_mode_breakpoints() {
        let mapping = buckets("10,80,150,200,255", "50,100,150,200").mapping().unwrap();
        assert_eq!(mapping.lut().get(120), 150);
    }

    #[test]
    fn test_bucket_errors() {
        let err = buckets("10,x", "").mapping().unwrap_err();
        assert_eq!(err.to_string(), "Values must be comma-separated integers.");

        let err = buckets("10,20", "50,y").mapping().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bin breakpoints must be comma-separated integers."
        );

        let err = buckets("10,20,30", "100").mapping().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number of bin levels must be equal to the number of values - 1."
        );

        assert!(matches!(
            buckets("", "").mapping(),
            Err(FormError::BadValues)
        ));
        assert!(matches!(
            buckets("10,x", "").mapping(),
            Err(FormError::BadValues)
        ));
        assert!(matches!(
            buckets("10,20", "y").mapping(),
            Err(FormError::BadBreakpoints)
        ));
        assert!(matches!(
            buckets("10,20,30", "100").mapping(),
            Err(FormError::BreakpointCount)
        ));
        assert!(matches!(
            buckets("10,20", "0").mapping(),
            Err(FormError::Mapping(PosterizeError::BreakpointOutOfRange(0)))
        ));
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/poster")),
            PathBuf::from("/tmp/poster.jpg")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/poster.png")),
            PathBuf::from("/tmp/poster.png")
        );
    }

    #[test]
    fn test_append_value() {
        assert_eq!(append_value("", 12), "12");
        assert_eq!(append_value("10,80", 200), "10,80,200");
        assert_eq!(append_value("10, ", 5), "10,5");
    }

    #[test]
    fn test_mode_from_index() {
        assert_eq!(Mode::from_index(0), Mode::Basic);
        assert_eq!(Mode::from_index(1), Mode::Buckets);
        assert_eq!(Mode::from_index(-1), Mode::Basic);
    }
}
