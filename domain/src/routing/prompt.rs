//! Classification request construction.

use super::value_objects::{ChoiceSchema, ClassificationRequest, RoutingEntry};
use crate::agent::kind::AgentKind;

/// Number of history entries the router looks at by default.
pub const DEFAULT_ROUTING_WINDOW: usize = 4;

/// Name of the single field the classifier must fill in.
pub const TARGET_AGENT_FIELD: &str = "targetAgent";

const ROUTING_SYSTEM_INSTRUCTION: &str =
    "Anda adalah logika perutean untuk AIS Rumah Sakit. Keluarkan hanya JSON.";

const TARGET_AGENT_DESCRIPTION: &str =
    "Agen yang paling cocok untuk menangani permintaan. Gunakan ORCHESTRATOR jika ambigu.";

/// The last `window` entries of `history`, oldest first.
pub fn bounded_window(history: &[RoutingEntry], window: usize) -> &[RoutingEntry] {
    let start = history.len().saturating_sub(window);
    &history[start..]
}

/// Schema constraining the classifier to one known agent identifier.
pub fn target_agent_schema() -> ChoiceSchema {
    ChoiceSchema {
        field: TARGET_AGENT_FIELD.to_string(),
        description: TARGET_AGENT_DESCRIPTION.to_string(),
        choices: AgentKind::wire_names(),
    }
}

/// Build the classification request for one utterance.
///
/// `history` must not contain the utterance itself; only the last `window`
/// entries are included.
pub fn build_classification_request(
    utterance: &str,
    history: &[RoutingEntry],
    window: usize,
) -> ClassificationRequest {
    let context = bounded_window(history, window)
        .iter()
        .map(RoutingEntry::render)
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        r#"{directive}

Analisis permintaan pengguna berikut dan konteks percakapan.
Tentukan agen mana yang harus menangani permintaan ini.

Konteks:
{context}

Permintaan Saat Ini:
{utterance}
"#,
        directive = AgentKind::Orchestrator.profile().directive.trim(),
    );

    ClassificationRequest {
        system_instruction: ROUTING_SYSTEM_INSTRUCTION.to_string(),
        prompt,
        schema: target_agent_schema(),
    }
}
