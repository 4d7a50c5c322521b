//! Error type shared by the record model, persistence and console.

use std::fmt;
use std::path::PathBuf;

use crate::core::Field;

#[derive(Debug)]
pub enum RegistrationError {
    InvalidField {
        field: Field,
        value: String,
        reason: String,
    },
    InvalidMenuChoice {
        input: String,
    },
    Io {
        operation: String,
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidRecord {
        path: PathBuf,
        index: usize,
        source: Box<RegistrationError>,
    },
    Other(anyhow::Error),
}

impl RegistrationError {
    pub fn invalid_field(field: Field, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_menu_choice(input: impl Into<String>) -> Self {
        Self::InvalidMenuChoice {
            input: input.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_record(path: impl Into<PathBuf>, index: usize, source: RegistrationError) -> Self {
        Self::InvalidRecord {
            path: path.into(),
            index,
            source: Box::new(source),
        }
    }

    /// Short classification shown in the technical detail block.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField { .. } | Self::InvalidMenuChoice { .. } => "ValidationError",
            Self::Io { .. } => "IoError",
            Self::Parse { .. } => "ParseError",
            Self::InvalidRecord { .. } => "RecordError",
            Self::Other(_) => "Error",
        }
    }

    /// Generic description of the class of failure, independent of the
    /// particular value that caused it.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::InvalidField { .. } => "A field contained characters that are not allowed.",
            Self::InvalidMenuChoice { .. } => "The input did not match any menu option.",
            Self::Io { .. } => "The operating system reported a failure accessing a file or stream.",
            Self::Parse { .. } => "The file contents are not a valid list of enrollments.",
            Self::InvalidRecord { .. } => "A stored enrollment failed validation.",
            Self::Other(_) => "An unexpected failure occurred.",
        }
    }

    /// True when the input stream has been closed, which the menu loop
    /// treats as a request to exit.
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::UnexpectedEof
        )
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { field, reason, .. } => write!(f, "{} {reason}", field.label()),
            Self::InvalidMenuChoice { .. } => write!(f, "Please choose only 1, 2, 3, or 4"),
            Self::Io {
                operation,
                path,
                source,
            } => {
                write!(f, "I/O error during {operation}")?;
                if let Some(path) = path {
                    write!(f, " ({})", path.display())?;
                }
                write!(f, ": {source}")
            }
            Self::Parse { path, source } => {
                write!(f, "Could not parse {}: {source}", path.display())
            }
            Self::InvalidRecord {
                path,
                index,
                source,
            } => write!(
                f,
                "Entry {} in {} is invalid: {source}",
                index + 1,
                path.display()
            ),
            Self::Other(err) => write!(f, "{err:#}"),
        }
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidRecord { source, .. } => Some(source.as_ref()),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RegistrationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "console".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for RegistrationError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
