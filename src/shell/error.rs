//! Command error types.

/// Why a command execute returned failure.
///
/// Handlers print their own usage diagnostics before returning one of
/// these; the dispatcher only logs that the call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdError {
    /// E01: Argument not understood by this command
    UnknownArg,
    /// E02: Missing required argument
    MissingArg,
    /// E03: Invalid value format
    InvalidValue,
    /// E04: Value out of allowed range
    OutOfRange,
    /// E05: Peripheral operation failed
    Hardware,
}

impl CmdError {
    /// Get error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownArg => "E01",
            Self::MissingArg => "E02",
            Self::InvalidValue => "E03",
            Self::OutOfRange => "E04",
            Self::Hardware => "E05",
        }
    }

    /// Get error message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownArg => "unknown argument",
            Self::MissingArg => "missing argument",
            Self::InvalidValue => "invalid value",
            Self::OutOfRange => "out of range",
            Self::Hardware => "peripheral error",
        }
    }
}

impl core::fmt::Display for CmdError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
