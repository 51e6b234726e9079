//! Console error types

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Line is not an optionally signed decimal integer
    InvalidCommandSyntax,
    /// E02: GPIO driver refused a level change
    OutputFault,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCommandSyntax => "E01",
            Self::OutputFault => "E02",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidCommandSyntax => "unknown command",
            Self::OutputFault => "output fault",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Failure while bringing the console up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupError<S, O> {
    /// Serial channel could not be opened or written
    Serial(S),
    /// An LED could not be driven to its initial level
    Output(O),
}

impl<S: core::fmt::Debug, O: core::fmt::Debug> core::fmt::Display for StartupError<S, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Serial(e) => write!(f, "serial startup failed: {:?}", e),
            Self::Output(e) => write!(f, "output init failed: {:?}", e),
        }
    }
}
