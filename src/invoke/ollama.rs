use std::process::Command;

use indoc::indoc;
use log::{debug, warn};

use super::{InvokeError, Invocation, ModelInvoker};

/// Returned whenever the subprocess cannot deliver real output. Shaped like a
/// well-formed response so downstream consumers see the same six fields.
pub const FALLBACK_RESULT: &str = indoc! {"
    Positive Prompt: placeholder positive prompt
    Negative Prompt: placeholder negative prompt
    CFG Scale: 7
    Resolution: 512px
    Steps: 50
    Scheduler: DDIM"};

/// Runs `ollama run <model> <prompt>` and captures stdout.
pub struct Ollama {
    program: String,
    model: String,
}

impl Ollama {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_program("ollama", model)
    }

    pub fn with_program(program: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            model: model.into(),
        }
    }

    fn run(&self, prompt: &str) -> Result<String, InvokeError> {
        debug!(
            "running {} with model {} ({} byte prompt)",
            self.program,
            self.model,
            prompt.len()
        );

        let output = Command::new(&self.program)
            .arg("run")
            .arg(&self.model)
            .arg(prompt)
            .output()
            .map_err(|source| InvokeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(InvokeError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?.trim().to_string())
    }
}

impl ModelInvoker for Ollama {
    fn invoke(&mut self, prompt: &str) -> Invocation {
        match self.run(prompt) {
            Ok(text) => Invocation::Generated(text),
            Err(err) => {
                warn!("model invocation failed, using placeholder output: {err}");
                Invocation::Fallback(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn fallback_text_is_stable() {
        expect![[r#"
            Positive Prompt: placeholder positive prompt
            Negative Prompt: placeholder negative prompt
            CFG Scale: 7
            Resolution: 512px
            Steps: 50
            Scheduler: DDIM"#]]
        .assert_eq(FALLBACK_RESULT);
    }

    #[test]
    fn missing_executable_falls_back() {
        let mut invoker = Ollama::with_program("sd-prompter-no-such-binary", "gemma3:27b");
        for _ in 0..2 {
            let result = invoker.invoke("a prompt");
            assert!(result.is_fallback());
            assert_eq!(result.text(), FALLBACK_RESULT);
        }
        assert!(matches!(
            invoker.invoke("a prompt"),
            Invocation::Fallback(InvokeError::Spawn { .. })
        ));
    }

    #[test]
    fn nonzero_exit_falls_back() {
        let mut invoker = Ollama::with_program("false", "gemma3:27b");
        let result = invoker.invoke("a prompt");
        assert!(matches!(
            result,
            Invocation::Fallback(InvokeError::Failed { .. })
        ));
        assert_eq!(result.text(), FALLBACK_RESULT);
    }

    #[test]
    fn captures_and_trims_stdout() {
        // echo stands in for ollama, reflecting the argument vector back
        let mut invoker = Ollama::with_program("echo", "gemma3:27b");
        let result = invoker.invoke("a cat on a rooftop");
        assert!(!result.is_fallback());
        assert_eq!(result.text(), "run gemma3:27b a cat on a rooftop");
    }
}
