//! Converse use case.
//!
//! [`ConversationOrchestrator`] runs one user turn at a time:
//!
//! 1. Append the user turn and mark the session as awaiting a response
//! 2. Route the utterance ([`IntentRouter`]) and announce the hand-off
//! 3. Pause for the configured hand-off delay
//! 4. Generate the chosen agent's reply ([`ResponseGenerator`])
//! 5. Append the agent turn and go idle
//!
//! Anything that escapes the router's and generator's own fallbacks,
//! including a panic inside a gateway adapter, ends the turn with a
//! system-error reply from the orchestrator, as does dropping the submit
//! future before the turn finishes. A turn always ends idle.

mod state;
mod types;

pub use state::ConversationState;
pub use types::{ConversationSnapshot, OrchestrationError, RejectReason, SubmitOutcome};

use crate::config::{BehaviorConfig, ModelConfig};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::turn_progress::{NoTurnProgress, TurnProgressNotifier};
use crate::use_cases::generate_response::ResponseGenerator;
use crate::use_cases::route_intent::IntentRouter;
use futures::FutureExt;
use medicore_domain::util::preview;
use medicore_domain::{
    AgentKind, ChatMessage, ConversationTurn, OrchestrationStatus, RoutingEntry,
    SYSTEM_ERROR_MESSAGE, TurnId,
};
use state::TurnContext;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

/// The agent's reply produced by a successful pipeline run.
struct AgentReply {
    agent: AgentKind,
    text: String,
}

/// Owns one conversation and processes its user turns.
///
/// Each orchestrator is an independent session. The state lock is never
/// held across an `.await`, so [`snapshot`](Self::snapshot) can be called
/// while a turn is in flight.
pub struct ConversationOrchestrator {
    router: IntentRouter,
    generator: ResponseGenerator,
    behavior: BehaviorConfig,
    state: Mutex<ConversationState>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConversationOrchestrator {
    /// Build router and generator on top of one gateway.
    pub fn new(gateway: Arc<dyn LlmGateway>, models: ModelConfig, behavior: BehaviorConfig) -> Self {
        let router = IntentRouter::new(gateway.clone(), models.routing)
            .with_window(behavior.routing_window);
        let generator = ResponseGenerator::new(gateway, models.agents);
        Self::from_parts(router, generator, behavior)
    }

    /// Assemble from an existing router and generator.
    pub fn from_parts(
        router: IntentRouter,
        generator: ResponseGenerator,
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            router,
            generator,
            behavior,
            state: Mutex::new(ConversationState::new()),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Record transcript events from the orchestrator, router and generator.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.router = self.router.with_conversation_logger(logger.clone());
        self.generator = self.generator.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> ConversationSnapshot {
        self.state().snapshot()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state().is_awaiting_response()
    }

    /// Submit user text without progress callbacks.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        self.submit_with_progress(text, &NoTurnProgress).await
    }

    /// Submit user text and process the turn to completion.
    ///
    /// Rejected without touching the log when a turn is already in flight
    /// or the text is blank. Dropping the returned future mid-turn still
    /// ends the turn, with the system-error reply.
    pub async fn submit_with_progress(
        &self,
        text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> SubmitOutcome {
        let context = match self.state().begin_turn(text) {
            Ok(context) => context,
            Err(reason) => {
                debug!(?reason, "Submission rejected");
                return SubmitOutcome::Rejected(reason);
            }
        };

        let TurnContext {
            user_turn,
            routing_history,
            prior_turns,
        } = context;
        let in_flight = InFlightTurn {
            orchestrator: self,
            turn: user_turn.id(),
            finished: false,
        };

        info!(turn = %user_turn.id(), "Processing: {}", preview(text, 100));
        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({
                "turn": user_turn.id().value(),
                "text": user_turn.content(),
            }),
        ));
        progress.on_user_turn(&user_turn);
        progress.on_status(&OrchestrationStatus::Analyzing);

        let pipeline = self.run_pipeline(text, &routing_history, &prior_turns, progress);
        let result = AssertUnwindSafe(pipeline)
            .catch_unwind()
            .await
            .map_err(|payload| OrchestrationError::Panicked(panic_message(payload.as_ref())));

        let agent_turn = match result {
            Ok(reply) => in_flight.finish(reply.agent, reply.text),
            Err(e) => {
                error!(turn = %user_turn.id(), "Turn failed: {}", e);
                self.log_turn_failed(user_turn.id(), &e);
                in_flight.finish(AgentKind::Orchestrator, SYSTEM_ERROR_MESSAGE)
            }
        };

        self.log_agent_turn(&agent_turn);
        progress.on_agent_turn(&agent_turn);
        SubmitOutcome::Completed(agent_turn)
    }

    /// Route, hand off, generate. Leaves appending the reply to the caller.
    async fn run_pipeline(
        &self,
        utterance: &str,
        routing_history: &[RoutingEntry],
        prior_turns: &[ChatMessage],
        progress: &dyn TurnProgressNotifier,
    ) -> AgentReply {
        let agent = self.router.route(utterance, routing_history).await;

        let handoff = OrchestrationStatus::for_decision(agent);
        {
            let mut state = self.state();
            state.set_active_agent(agent);
            state.set_status(handoff);
        }
        progress.on_agent_selected(agent);
        progress.on_status(&handoff);

        if !self.behavior.handoff_delay.is_zero() {
            tokio::time::sleep(self.behavior.handoff_delay).await;
        }

        self.state().set_status(OrchestrationStatus::Generating);
        progress.on_status(&OrchestrationStatus::Generating);

        let text = self.generator.generate(agent, utterance, prior_turns).await;
        AgentReply { agent, text }
    }

    fn log_turn_failed(&self, turn: TurnId, error: &dyn std::fmt::Display) {
        self.conversation_logger.log(ConversationEvent::new(
            "turn_failed",
            serde_json::json!({
                "turn": turn.value(),
                "error": error.to_string(),
            }),
        ));
    }

    fn log_agent_turn(&self, turn: &ConversationTurn) {
        self.conversation_logger.log(ConversationEvent::new(
            "agent_turn",
            serde_json::json!({
                "turn": turn.id().value(),
                "agent": turn.agent_kind().map(|a| a.as_str()),
                "text": turn.content(),
            }),
        ));
    }

    /// Lock the state. The lock is never held across a panic point, so a
    /// poisoned guard still holds consistent data.
    fn state(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The turn between `begin_turn` and `finish_turn`.
///
/// If the submit future is dropped first, the turn is closed here with the
/// system-error reply so the session doesn't stay busy.
struct InFlightTurn<'a> {
    orchestrator: &'a ConversationOrchestrator,
    turn: TurnId,
    finished: bool,
}

impl InFlightTurn<'_> {
    fn finish(mut self, agent: AgentKind, content: impl Into<String>) -> ConversationTurn {
        self.finished = true;
        self.orchestrator.state().finish_turn(agent, content)
    }
}

impl Drop for InFlightTurn<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        warn!(turn = %self.turn, "Turn dropped before completion");
        self.orchestrator
            .log_turn_failed(self.turn, &"turn dropped before completion");
        let agent_turn = self
            .orchestrator
            .state()
            .finish_turn(AgentKind::Orchestrator, SYSTEM_ERROR_MESSAGE);
        self.orchestrator.log_agent_turn(&agent_turn);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{Classify, Generate, ScriptedGateway};
    use medicore_domain::{
        ChatRole, EMPTY_RESPONSE_FALLBACK, GENERATION_FAILURE_FALLBACK, Speaker, TurnPhase,
        WELCOME_MESSAGE,
    };
    use std::time::Duration;

    fn orchestrator(gateway: ScriptedGateway) -> (ConversationOrchestrator, Arc<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let orchestrator = ConversationOrchestrator::new(
            gateway.clone(),
            ModelConfig::default(),
            BehaviorConfig::immediate(),
        );
        (orchestrator, gateway)
    }

    /// Records every progress callback as a string.
    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl TurnProgressNotifier for RecordingProgress {
        fn on_user_turn(&self, turn: &ConversationTurn) {
            self.events.lock().unwrap().push(format!("user:{}", turn.content()));
        }

        fn on_status(&self, status: &OrchestrationStatus) {
            self.events.lock().unwrap().push(format!("status:{}", status.message()));
        }

        fn on_agent_selected(&self, agent: AgentKind) {
            self.events.lock().unwrap().push(format!("agent:{}", agent));
        }

        fn on_agent_turn(&self, turn: &ConversationTurn) {
            self.events.lock().unwrap().push(format!("reply:{}", turn.content()));
        }
    }

    /// Records the type of every transcript event.
    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl RecordingLogger {
        fn events(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[tokio::test]
    async fn test_scheduling_request_end_to_end() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("APPOINTMENT_SCHEDULING"))
                .reply("Slot tersedia Senin pukul 09.00."),
        );
        let before = orchestrator.snapshot().turns.len();

        let outcome = orchestrator
            .submit("saya ingin membuat jadwal temu dokter")
            .await;

        assert!(outcome.is_completed());
        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.turns.len(), before + 2);

        let user = &snapshot.turns[before];
        assert_eq!(user.speaker(), Speaker::User);
        assert_eq!(user.content(), "saya ingin membuat jadwal temu dokter");

        let reply = &snapshot.turns[before + 1];
        assert_eq!(reply.speaker(), Speaker::Agent);
        assert_eq!(reply.agent_kind(), Some(AgentKind::AppointmentScheduling));
        assert_eq!(reply.content(), "Slot tersedia Senin pukul 09.00.");
        assert_eq!(outcome.agent_turn(), Some(reply));

        assert!(!snapshot.awaiting_response);
        assert_eq!(snapshot.status, None);
        assert_eq!(snapshot.status_message(), "");
        assert_eq!(snapshot.phase, TurnPhase::Idle);
        assert_eq!(snapshot.active_agent, AgentKind::AppointmentScheduling);
    }

    #[tokio::test]
    async fn test_classifier_failure_is_handled_by_orchestrator() {
        let (orchestrator, gateway) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::Fail)
                .reply("Bisa dijelaskan lebih lanjut?"),
        );

        let outcome = orchestrator.submit("apa saja").await;

        let reply = outcome.agent_turn().unwrap();
        assert_eq!(reply.agent_kind(), Some(AgentKind::Orchestrator));
        assert_eq!(reply.content(), "Bisa dijelaskan lebih lanjut?");
        assert_eq!(
            gateway.recorded_sessions()[0].system_prompt,
            AgentKind::Orchestrator.profile().directive
        );
        let snapshot = orchestrator.snapshot();
        assert!(!snapshot.awaiting_response);
        assert_eq!(snapshot.active_agent, AgentKind::Orchestrator);
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_first_in_flight() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("BILLING_INSURANCE"))
                .reply("Tagihan Anda Rp 500.000.")
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .reply("Hasil lab normal."),
        );
        let before = orchestrator.snapshot().turns.len();

        let (first, second) = tokio::join!(
            orchestrator.submit("berapa tagihan saya?"),
            orchestrator.submit("hasil lab saya?"),
        );

        assert!(first.is_completed());
        assert_eq!(second, SubmitOutcome::Rejected(RejectReason::Busy));
        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.turns.len(), before + 2);
        assert!(snapshot.turns.iter().all(|t| t.content() != "hasil lab saya?"));

        // Once the first turn is done the next submission goes through
        let retry = orchestrator.submit("hasil lab saya?").await;
        assert_eq!(
            retry.agent_turn().and_then(|t| t.agent_kind()),
            Some(AgentKind::MedicalRecords)
        );
        assert_eq!(orchestrator.snapshot().turns.len(), before + 4);
    }

    #[tokio::test]
    async fn test_blank_submission_is_rejected() {
        let (orchestrator, gateway) = orchestrator(ScriptedGateway::new());
        assert_eq!(
            orchestrator.submit("   ").await,
            SubmitOutcome::Rejected(RejectReason::Blank)
        );
        assert_eq!(orchestrator.snapshot().turns.len(), 1);
        assert!(gateway.recorded_prompts().is_empty());
    }

    #[tokio::test]
    async fn test_history_boundaries_for_router_and_generator() {
        let (orchestrator, gateway) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("PATIENT_MANAGEMENT"))
                .reply("Pasien sudah diterima.")
                .classify(Classify::agent("PATIENT_MANAGEMENT"))
                .reply("Pemulangan dijadwalkan."),
        );

        orchestrator.submit("terima pasien baru").await;
        orchestrator.submit("pulangkan pasien").await;

        let sessions = gateway.recorded_sessions();
        assert_eq!(sessions.len(), 2);

        // First turn: prior is just the welcome, live message is the utterance
        assert_eq!(sessions[0].history, vec![ChatMessage::model(WELCOME_MESSAGE)]);
        assert_eq!(sessions[0].sent, vec!["terima pasien baru".to_string()]);

        // Second turn: prior + live covers the conversation exactly once
        assert_eq!(
            sessions[1].history,
            vec![
                ChatMessage::model(WELCOME_MESSAGE),
                ChatMessage::user("terima pasien baru"),
                ChatMessage::model("Pasien sudah diterima."),
            ]
        );
        assert_eq!(sessions[1].sent, vec!["pulangkan pasien".to_string()]);
        assert!(
            sessions[1]
                .history
                .iter()
                .all(|m| !(m.role == ChatRole::User && m.content == "pulangkan pasien"))
        );

        // Router sees the utterance as the subject, never as a context line
        let prompts = gateway.recorded_prompts();
        assert!(!prompts[0].contains("User: terima pasien baru"));
        assert!(prompts[1].contains("User: terima pasien baru"));
        assert!(prompts[1].contains("System: Pasien sudah diterima."));
        assert!(!prompts[1].contains("User: pulangkan pasien"));
    }

    #[tokio::test]
    async fn test_status_sequence() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("APPOINTMENT_SCHEDULING"))
                .reply("Terjadwal."),
        );
        let progress = RecordingProgress::default();

        orchestrator
            .submit_with_progress("jadwal dokter", &progress)
            .await;

        assert_eq!(
            progress.events(),
            vec![
                "user:jadwal dokter".to_string(),
                "status:Orkestrator sedang menganalisis permintaan...".to_string(),
                "agent:APPOINTMENT_SCHEDULING".to_string(),
                "status:Mengarahkan ke Penjadwal...".to_string(),
                "status:Menghasilkan respons...".to_string(),
                "reply:Terjadwal.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_orchestrator_decision_announces_clarification() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("ORCHESTRATOR"))
                .reply("Mohon perjelas permintaan Anda."),
        );
        let progress = RecordingProgress::default();

        orchestrator.submit_with_progress("bantu saya", &progress).await;

        assert!(
            progress
                .events()
                .contains(&"status:Orkestrator meminta klarifikasi...".to_string())
        );
    }

    #[tokio::test]
    async fn test_generator_fallbacks_surface_as_agent_turns() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .reply("")
                .classify(Classify::agent("BILLING_INSURANCE"))
                .generate(Generate::Fail),
        );

        let empty = orchestrator.submit("riwayat saya").await;
        let failed = orchestrator.submit("klaim asuransi").await;

        let empty = empty.agent_turn().unwrap();
        assert_eq!(empty.content(), EMPTY_RESPONSE_FALLBACK);
        assert_eq!(empty.agent_kind(), Some(AgentKind::MedicalRecords));

        let failed = failed.agent_turn().unwrap();
        assert_eq!(failed.content(), GENERATION_FAILURE_FALLBACK);
        assert_eq!(failed.agent_kind(), Some(AgentKind::BillingInsurance));
    }

    #[tokio::test]
    async fn test_panic_becomes_system_error_turn() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("BILLING_INSURANCE"))
                .generate(Generate::Panic)
                .classify(Classify::agent("BILLING_INSURANCE"))
                .reply("Pembayaran diterima."),
        );

        let outcome = orchestrator.submit("bayar tagihan").await;

        let turn = outcome.agent_turn().unwrap();
        assert_eq!(turn.content(), SYSTEM_ERROR_MESSAGE);
        assert_eq!(turn.agent_kind(), Some(AgentKind::Orchestrator));
        let snapshot = orchestrator.snapshot();
        assert!(!snapshot.awaiting_response);
        assert_eq!(snapshot.status, None);
        assert_eq!(snapshot.active_agent, AgentKind::Orchestrator);

        // The session keeps working afterwards
        let next = orchestrator.submit("bayar tagihan").await;
        assert_eq!(next.agent_turn().unwrap().content(), "Pembayaran diterima.");
    }

    #[tokio::test]
    async fn test_log_is_append_only_across_turns() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::Fail)
                .reply("satu")
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .generate(Generate::Fail)
                .classify(Classify::agent("PATIENT_MANAGEMENT"))
                .generate(Generate::Panic),
        );

        let mut previous = orchestrator.snapshot().turns;
        for text in ["a", "  ", "b", "c"] {
            orchestrator.submit(text).await;
            let current = orchestrator.snapshot().turns;
            assert!(current.len() >= previous.len());
            assert_eq!(&current[..previous.len()], previous.as_slice());
            previous = current;
        }
        assert_eq!(previous.len(), 1 + 3 * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handoff_delay_is_applied() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .reply("ok"),
        );
        let orchestrator = ConversationOrchestrator::new(
            gateway,
            ModelConfig::default(),
            BehaviorConfig::default().with_handoff_delay(Duration::from_millis(800)),
        );

        let start = tokio::time::Instant::now();
        orchestrator.submit("hasil lab").await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submission_ends_turn() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .reply("Hasil lab normal."),
        );
        let logger = Arc::new(RecordingLogger::default());
        let orchestrator = ConversationOrchestrator::new(
            gateway,
            ModelConfig::default(),
            BehaviorConfig::default().with_handoff_delay(Duration::from_millis(800)),
        )
        .with_conversation_logger(logger.clone());

        let abandoned =
            tokio::time::timeout(Duration::from_millis(100), orchestrator.submit("hasil lab")).await;
        assert!(abandoned.is_err());

        let snapshot = orchestrator.snapshot();
        assert!(!snapshot.awaiting_response);
        assert_eq!(snapshot.phase, TurnPhase::Idle);
        assert_eq!(snapshot.status, None);
        let last = &snapshot.turns[snapshot.turns.len() - 1];
        assert_eq!(last.content(), SYSTEM_ERROR_MESSAGE);
        assert_eq!(last.agent_kind(), Some(AgentKind::Orchestrator));
        assert_eq!(
            logger.events(),
            vec!["user_turn", "routing_decision", "turn_failed", "agent_turn"]
        );

        let next = orchestrator.submit("hasil lab").await;
        assert_eq!(next.agent_turn().unwrap().content(), "Hasil lab normal.");
        assert!(!orchestrator.is_awaiting_response());
        assert_eq!(orchestrator.snapshot().turns.len(), 1 + 2 * 2);
    }

    #[tokio::test]
    async fn test_transcript_event_order_for_one_turn() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("BILLING_INSURANCE"))
                .reply("Tagihan Anda lunas."),
        );
        let logger = Arc::new(RecordingLogger::default());
        let orchestrator = orchestrator.with_conversation_logger(logger.clone());

        orchestrator.submit("status tagihan").await;

        assert_eq!(
            logger.events(),
            vec!["user_turn", "routing_decision", "agent_response", "agent_turn"]
        );
    }

    #[tokio::test]
    async fn test_transcript_records_failure_before_agent_turn() {
        let (orchestrator, _) = orchestrator(
            ScriptedGateway::new()
                .classify(Classify::agent("BILLING_INSURANCE"))
                .generate(Generate::Panic),
        );
        let logger = Arc::new(RecordingLogger::default());
        let orchestrator = orchestrator.with_conversation_logger(logger.clone());

        orchestrator.submit("bayar tagihan").await;

        assert_eq!(
            logger.events(),
            vec!["user_turn", "routing_decision", "turn_failed", "agent_turn"]
        );
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .classify(Classify::agent("MEDICAL_RECORDS"))
                .reply("ok"),
        );
        let first = ConversationOrchestrator::new(
            gateway.clone(),
            ModelConfig::default(),
            BehaviorConfig::immediate(),
        );
        let second =
            ConversationOrchestrator::new(gateway, ModelConfig::default(), BehaviorConfig::immediate());

        first.submit("hasil lab").await;

        assert_eq!(first.snapshot().turns.len(), 3);
        assert_eq!(second.snapshot().turns.len(), 1);
    }
}
