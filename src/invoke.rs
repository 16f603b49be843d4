use thiserror::Error;

/// The seam in front of the external model. One blocking call per prompt, no
/// retries; implementations must never propagate failure and instead hand
/// back [`Invocation::Fallback`].
pub trait ModelInvoker {
    fn invoke(&mut self, prompt: &str) -> Invocation;
}

/// The outcome of one invocation. Degraded runs stay distinguishable from
/// real model output, but both carry printable text.
#[derive(Debug)]
pub enum Invocation {
    Generated(String),
    Fallback(InvokeError),
}

impl Invocation {
    pub fn text(&self) -> &str {
        match self {
            Invocation::Generated(text) => text,
            Invocation::Fallback(_) => FALLBACK_RESULT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Invocation::Fallback(_))
    }
}

/// Why an invocation fell back to the placeholder
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("model output was not valid UTF-8")]
    BadEncoding(#[from] std::string::FromUtf8Error),
}

mod ollama;
pub use ollama::{FALLBACK_RESULT, Ollama};
