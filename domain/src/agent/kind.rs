//! Agent identifiers.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifies one of the agents a request can be routed to (Value Object).
///
/// The set is closed: every variant has exactly one profile in the
/// [registry](super::registry), and the routing schema offers exactly these
/// wire names to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentKind {
    /// Default agent: general questions, clarification, fallback routing.
    #[default]
    Orchestrator,
    PatientManagement,
    AppointmentScheduling,
    MedicalRecords,
    BillingInsurance,
}

impl AgentKind {
    /// Every agent, in declaration order.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Orchestrator,
        AgentKind::PatientManagement,
        AgentKind::AppointmentScheduling,
        AgentKind::MedicalRecords,
        AgentKind::BillingInsurance,
    ];

    /// Wire name used in routing schemas and transcripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Orchestrator => "ORCHESTRATOR",
            AgentKind::PatientManagement => "PATIENT_MANAGEMENT",
            AgentKind::AppointmentScheduling => "APPOINTMENT_SCHEDULING",
            AgentKind::MedicalRecords => "MEDICAL_RECORDS",
            AgentKind::BillingInsurance => "BILLING_INSURANCE",
        }
    }

    pub fn is_orchestrator(&self) -> bool {
        matches!(self, AgentKind::Orchestrator)
    }

    /// All agents except the orchestrator.
    pub fn specialists() -> impl Iterator<Item = AgentKind> {
        Self::ALL.into_iter().filter(|kind| !kind.is_orchestrator())
    }

    /// Wire names of every agent, for constrained-output schemas.
    pub fn wire_names() -> Vec<String> {
        Self::ALL.iter().map(|kind| kind.as_str().to_string()).collect()
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| DomainError::UnknownAgent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_wire_name() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.as_str().parse::<AgentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_lowercase() {
        assert!("RADIOLOGY".parse::<AgentKind>().unwrap_err().is_unknown_agent());
        assert!("orchestrator".parse::<AgentKind>().is_err());
        assert!("".parse::<AgentKind>().is_err());
    }

    #[test]
    fn test_serde_matches_wire_name() {
        let json = serde_json::to_string(&AgentKind::AppointmentScheduling).unwrap();
        assert_eq!(json, "\"APPOINTMENT_SCHEDULING\"");
        let back: AgentKind = serde_json::from_str("\"BILLING_INSURANCE\"").unwrap();
        assert_eq!(back, AgentKind::BillingInsurance);
    }

    #[test]
    fn test_specialists_exclude_orchestrator() {
        let specialists: Vec<_> = AgentKind::specialists().collect();
        assert_eq!(specialists.len(), 4);
        assert!(!specialists.contains(&AgentKind::Orchestrator));
    }

    #[test]
    fn test_default_is_orchestrator() {
        assert_eq!(AgentKind::default(), AgentKind::Orchestrator);
    }
}
