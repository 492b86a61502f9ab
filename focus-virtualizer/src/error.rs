use core::fmt;

/// Configuration errors.
///
/// These are raised eagerly, when options are constructed or changed, never on a later focus
/// change. Out-of-range focus indexes are not errors: they are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A required setting is missing or has an invalid value (unknown scroll behavior, zero
    /// extent, missing grid columns, header row without a header extent, ...).
    InvalidConfiguration(&'static str),
    /// The settings are individually valid but cannot be combined (jump-on-scroll with
    /// per-item extents).
    UnsupportedConfiguration(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Self::UnsupportedConfiguration(reason) => {
                write!(f, "unsupported configuration: {reason}")
            }
        }
    }
}

impl core::error::Error for Error {}
