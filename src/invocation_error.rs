use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvocationError {
    #[error("external process failed:\n{stderr}")]
    ExternalProcessFailed { stderr: String },
}
