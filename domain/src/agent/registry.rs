//! Agent registry: the total mapping from [`AgentKind`] to [`AgentProfile`].
//!
//! Profiles are `'static` and built at compile time. Because [`lookup`] is an
//! exhaustive `match`, adding a variant without a profile fails to compile.

use super::directives;
use super::kind::AgentKind;
use super::profile::{Accent, AgentProfile, PresentationHints};

static ORCHESTRATOR: AgentProfile = AgentProfile {
    kind: AgentKind::Orchestrator,
    name: "Sang Orkestrator",
    role: "Manajer Operasional RS",
    description: "Merutekan permintaan & menangani pertanyaan umum.",
    directive: directives::ORCHESTRATOR,
    hints: PresentationHints {
        accent: Accent::Gray,
        icon: "Network",
    },
};

static PATIENT_MANAGEMENT: AgentProfile = AgentProfile {
    kind: AgentKind::PatientManagement,
    name: "Admin Pasien",
    role: "Penerimaan & Informasi",
    description: "Menangani penerimaan, pemulangan, & info umum.",
    directive: directives::PATIENT_MANAGEMENT,
    hints: PresentationHints {
        accent: Accent::Blue,
        icon: "Users",
    },
};

static APPOINTMENT_SCHEDULING: AgentProfile = AgentProfile {
    kind: AgentKind::AppointmentScheduling,
    name: "Penjadwal",
    role: "Manajemen Janji Temu",
    description: "Pemesanan, pembatalan, & ubah jadwal.",
    directive: directives::APPOINTMENT_SCHEDULING,
    hints: PresentationHints {
        accent: Accent::Teal,
        icon: "Calendar",
    },
};

static MEDICAL_RECORDS: AgentProfile = AgentProfile {
    kind: AgentKind::MedicalRecords,
    name: "Arsiparis Medis",
    role: "Penjaga Data Klinis",
    description: "Akses aman ke riwayat & hasil tes.",
    directive: directives::MEDICAL_RECORDS,
    hints: PresentationHints {
        accent: Accent::Purple,
        icon: "FileText",
    },
};

static BILLING_INSURANCE: AgentProfile = AgentProfile {
    kind: AgentKind::BillingInsurance,
    name: "Penagihan & Keuangan",
    role: "Pengendali Keuangan",
    description: "Faktur, asuransi, & pembayaran.",
    directive: directives::BILLING_INSURANCE,
    hints: PresentationHints {
        accent: Accent::Emerald,
        icon: "CreditCard",
    },
};

/// Look up the profile for an agent. Total; never fails.
pub fn lookup(kind: AgentKind) -> &'static AgentProfile {
    match kind {
        AgentKind::Orchestrator => &ORCHESTRATOR,
        AgentKind::PatientManagement => &PATIENT_MANAGEMENT,
        AgentKind::AppointmentScheduling => &APPOINTMENT_SCHEDULING,
        AgentKind::MedicalRecords => &MEDICAL_RECORDS,
        AgentKind::BillingInsurance => &BILLING_INSURANCE,
    }
}

/// Every profile, in [`AgentKind::ALL`] order.
pub fn all_profiles() -> impl Iterator<Item = &'static AgentProfile> {
    AgentKind::ALL.into_iter().map(lookup)
}

impl AgentKind {
    /// Shorthand for [`lookup`].
    pub fn profile(self) -> &'static AgentProfile {
        lookup(self)
    }

    /// Display name from the registry.
    pub fn display_name(self) -> &'static str {
        lookup(self).name
    }
}
