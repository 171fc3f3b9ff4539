use thiserror::Error;

/// Everything that can abort a run. No variant is retried.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModeError {
    #[error("No screen found")]
    NoScreen,
    #[error("Screen has no display id")]
    NoDisplay,
    #[error("Display returned an invalid list of modes")]
    InvalidDisplay,
    #[error("No matching display modes")]
    NoMatchingModes,
    #[error("Display configuration failed: {0}")]
    Platform(#[from] CgError),
}

/// CoreGraphics status codes. `kCGErrorSuccess` (0) has no variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CgError {
    #[error("a general failure occurred")]
    Failure,
    #[error("one or more of the parameters passed to a function are invalid")]
    IllegalArgument,
    #[error("the parameter representing a connection to the window server is invalid")]
    InvalidConnection,
    #[error("the context is invalid or has been released")]
    InvalidContext,
    #[error("the requested operation cannot be completed")]
    CannotComplete,
    #[error("the requested operation is not implemented")]
    NotImplemented,
    #[error("a parameter passed in has a value that is out of range")]
    RangeCheck,
    #[error("a data type or token was encountered that did not match the expected type")]
    TypeCheck,
    #[error("the requested operation is not valid for the current state")]
    InvalidOperation,
    #[error("the requested operation could not be completed as the indicated resources were not found")]
    NoneAvailable,
    #[error("unrecognized graphics error code {0}")]
    Unknown(i32),
}

impl CgError {
    /// Maps a raw status code; success maps to `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        let err = match code {
            0 => return None,
            1000 => Self::Failure,
            1001 => Self::IllegalArgument,
            1002 => Self::InvalidConnection,
            1003 => Self::InvalidContext,
            1004 => Self::CannotComplete,
            1006 => Self::NotImplemented,
            1007 => Self::RangeCheck,
            1008 => Self::TypeCheck,
            1010 => Self::InvalidOperation,
            1011 => Self::NoneAvailable,
            other => Self::Unknown(other),
        };
        Some(err)
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Failure => 1000,
            Self::IllegalArgument => 1001,
            Self::InvalidConnection => 1002,
            Self::InvalidContext => 1003,
            Self::CannotComplete => 1004,
            Self::NotImplemented => 1006,
            Self::RangeCheck => 1007,
            Self::TypeCheck => 1008,
            Self::InvalidOperation => 1010,
            Self::NoneAvailable => 1011,
            Self::Unknown(code) => code,
        }
    }
}

/// For statuses already known to be failures. A stray success code is kept
/// as `Unknown(0)` rather than dropped.
impl From<i32> for CgError {
    fn from(code: i32) -> Self {
        Self::from_code(code).unwrap_or(Self::Unknown(code))
    }
}

impl From<i32> for ModeError {
    fn from(code: i32) -> Self {
        Self::Platform(code.into())
    }
}
