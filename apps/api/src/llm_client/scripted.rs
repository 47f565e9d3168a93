//! Test double for `CompletionGateway`: replays scripted completions and
//! counts calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionGateway, LlmError};

enum Script {
    Always(Option<String>),
    Sequence(VecDeque<Option<String>>),
}

/// `Some(text)` replies with `text`; `None` fails like an unreachable service.
pub struct ScriptedGateway {
    script: Mutex<Script>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    fn with_script(script: Script) -> Self {
        Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_script(Script::Always(Some(text.to_string())))
    }

    pub fn failing() -> Self {
        Self::with_script(Script::Always(None))
    }

    /// Replays `replies` in order, then fails.
    pub fn sequence(replies: Vec<Option<&str>>) -> Self {
        Self::with_script(Script::Sequence(
            replies
                .into_iter()
                .map(|r| r.map(str::to_string))
                .collect(),
        ))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = match &mut *self.script.lock().unwrap() {
            Script::Always(reply) => reply.clone(),
            Script::Sequence(queue) => queue.pop_front().flatten(),
        };

        reply.ok_or(LlmError::Api {
            status: 503,
            message: "scripted outage".to_string(),
        })
    }
}
