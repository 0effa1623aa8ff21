use std::fmt;

use crate::invocation_error::InvocationError;

const SUCCESS_MARKER: &str = "✅ Output:";
const FAILURE_MARKER: &str = "❌ Error:";

/// The terminal state of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The process exited with status zero.
    Success { stdout: String },
    /// The process exited non-zero or could not be launched at all.
    Failure { stderr: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn into_result(self) -> Result<String, InvocationError> {
        match self {
            Self::Success { stdout } => Ok(stdout),
            Self::Failure { stderr } => Err(InvocationError::ExternalProcessFailed { stderr }),
        }
    }
}

impl fmt::Display for Outcome {
    /// Renders the report line followed by the captured text, untouched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { stdout } => write!(f, "{}\n{}", SUCCESS_MARKER, stdout),
            Self::Failure { stderr } => write!(f, "{}\n{}", FAILURE_MARKER, stderr),
        }
    }
}
