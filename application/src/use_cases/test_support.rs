//! Scripted gateway shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use async_trait::async_trait;
use medicore_domain::{ChatMessage, ClassificationRequest, Model};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What the next classification call does.
pub(crate) enum Classify {
    Reply(String),
    Fail,
}

impl Classify {
    pub(crate) fn agent(wire_name: &str) -> Self {
        Classify::Reply(format!(r#"{{"targetAgent": "{}"}}"#, wire_name))
    }
}

/// What the next chat session does.
pub(crate) enum Generate {
    Reply(String),
    /// `send` fails.
    Fail,
    /// Opening the session fails.
    FailSession,
    /// `send` panics.
    Panic,
}

/// One chat session as the generator opened and used it.
#[derive(Debug, Clone)]
pub(crate) struct RecordedSession {
    pub system_prompt: String,
    pub history: Vec<ChatMessage>,
    pub sent: Vec<String>,
}

#[derive(Default)]
pub(crate) struct ScriptedGateway {
    classifications: Mutex<VecDeque<Classify>>,
    generations: Mutex<VecDeque<Generate>>,
    pub classify_requests: Mutex<Vec<ClassificationRequest>>,
    pub sessions: Arc<Mutex<Vec<RecordedSession>>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn classify(self, step: Classify) -> Self {
        self.classifications.lock().unwrap().push_back(step);
        self
    }

    pub(crate) fn generate(self, step: Generate) -> Self {
        self.generations.lock().unwrap().push_back(step);
        self
    }

    pub(crate) fn reply(self, text: &str) -> Self {
        self.generate(Generate::Reply(text.to_string()))
    }

    pub(crate) fn recorded_sessions(&self) -> Vec<RecordedSession> {
        self.sessions.lock().unwrap().clone()
    }

    pub(crate) fn recorded_prompts(&self) -> Vec<String> {
        self.classify_requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn classify(
        &self,
        _model: &Model,
        request: &ClassificationRequest,
    ) -> Result<String, GatewayError> {
        self.classify_requests.lock().unwrap().push(request.clone());
        // Give other tasks a chance to run while "the network" is busy
        tokio::task::yield_now().await;
        let step = self.classifications.lock().unwrap().pop_front();
        match step {
            Some(Classify::Reply(raw)) => Ok(raw),
            Some(Classify::Fail) | None => {
                Err(GatewayError::ConnectionError("classifier unreachable".to_string()))
            }
        }
    }

    async fn create_chat_session(
        &self,
        model: &Model,
        system_prompt: &str,
        history: &[ChatMessage],
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let step = self.generations.lock().unwrap().pop_front();
        if let Some(Generate::FailSession) = step {
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        }

        let index = {
            let mut sessions = self.sessions.lock().unwrap();
            sessions.push(RecordedSession {
                system_prompt: system_prompt.to_string(),
                history: history.to_vec(),
                sent: Vec::new(),
            });
            sessions.len() - 1
        };

        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            step: Mutex::new(step),
            sessions: self.sessions.clone(),
            index,
        }))
    }
}

struct ScriptedSession {
    model: Model,
    step: Mutex<Option<Generate>>,
    sessions: Arc<Mutex<Vec<RecordedSession>>>,
    index: usize,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.sessions.lock().unwrap()[self.index]
            .sent
            .push(content.to_string());
        let step = self.step.lock().unwrap().take();
        match step {
            Some(Generate::Reply(text)) => Ok(text),
            Some(Generate::Panic) => panic!("session exploded"),
            Some(Generate::Fail) | Some(Generate::FailSession) | None => {
                Err(GatewayError::RequestFailed("503 Service Unavailable".to_string()))
            }
        }
    }
}
