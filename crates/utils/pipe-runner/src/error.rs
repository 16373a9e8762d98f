use crate::scope::CancelReason;
use std::borrow::Cow;
use thiserror::Error;

/// Error that occurs when running a pipeline state through the runner.
#[derive(Debug, Error)]
#[error("pipeline '{pipeline}' failed: {kind}")]
#[non_exhaustive]
pub struct RunError {
    pub pipeline: String,
    #[source]
    pub kind: RunErrorKind,
}

impl RunError {
    pub fn new(pipeline: impl Into<String>, kind: RunErrorKind) -> Self {
        Self {
            pipeline: pipeline.into(),
            kind,
        }
    }

    pub fn pipe<E>(pipeline: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::new(
            pipeline,
            RunErrorKind::Pipe {
                source: source.into(),
            },
        )
    }

    pub fn execution<E>(pipeline: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::new(
            pipeline,
            RunErrorKind::Execution {
                source: source.into(),
            },
        )
    }

    pub fn cancelled(pipeline: impl Into<String>, reason: CancelReason) -> Self {
        Self::new(pipeline, RunErrorKind::Cancelled { reason })
    }

    pub fn panic(pipeline: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(
            pipeline,
            RunErrorKind::Panic {
                message: message.into(),
            },
        )
    }

    /// Whether this error came from the cancellation signal rather than the
    /// run itself.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, RunErrorKind::Cancelled { .. })
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunErrorKind {
    /// The pre-step transform failed; the run was never scheduled.
    #[error("pre-step failed")]
    #[non_exhaustive]
    Pipe {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The blocking run itself failed.
    #[error("execution error")]
    #[non_exhaustive]
    Execution {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The scope resolved before the worker did.
    #[error("run cancelled: {reason}")]
    #[non_exhaustive]
    Cancelled { reason: CancelReason },

    /// The blocking run panicked on its worker.
    #[error("run panicked: {message}")]
    #[non_exhaustive]
    Panic { message: Cow<'static, str> },
}

pub type RunResult<T> = Result<T, RunError>;
