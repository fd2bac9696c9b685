//! Scripted prompt adapter for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rnforge_core::{application::ports::LineInput, error::ForgeResult};

/// Queued answers instead of a real terminal.
///
/// Each `ask` pops the next answer and records the prompt it was given;
/// once the queue is empty, further asks return an empty line (the same
/// thing a closed stdin produces).
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    inner: Arc<Mutex<ScriptedPromptInner>>,
}

#[derive(Debug, Default)]
struct ScriptedPromptInner {
    answers: VecDeque<String>,
    prompts_seen: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScriptedPromptInner {
                answers: answers.into_iter().map(Into::into).collect(),
                prompts_seen: Vec::new(),
            })),
        }
    }

    /// Prompts displayed so far (testing helper).
    pub fn prompts_seen(&self) -> Vec<String> {
        self.inner.lock().unwrap().prompts_seen.clone()
    }
}

impl LineInput for ScriptedPrompt {
    fn ask(&self, prompt: &str) -> ForgeResult<String> {
        let mut inner = self.inner.lock().unwrap();
        inner.prompts_seen.push(prompt.to_owned());
        Ok(inner.answers.pop_front().unwrap_or_default())
    }
}
