//! Console output formatter for conversations

use colored::{Color, Colorize};
use medicore_application::{ConversationSnapshot, RejectReason};
use medicore_domain::{
    Accent, AgentKind, AgentProfile, ConversationTurn, OrchestrationStatus, Speaker, all_profiles,
};

/// Formats conversation turns and agent information for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Terminal colour for an agent accent.
    pub fn accent_color(accent: Accent) -> Color {
        match accent {
            Accent::Gray => Color::BrightBlack,
            Accent::Blue => Color::Blue,
            Accent::Teal => Color::Cyan,
            Accent::Purple => Color::Magenta,
            Accent::Emerald => Color::Green,
        }
    }

    /// Terminal glyph for an icon name, `•` when unknown.
    pub fn icon_glyph(icon: &str) -> &'static str {
        match icon {
            "Network" => "◈",
            "Users" => "☺",
            "Calendar" => "▦",
            "FileText" => "▤",
            "CreditCard" => "▭",
            _ => "•",
        }
    }

    /// "glyph Name", in the agent's accent colour.
    pub fn agent_label(kind: AgentKind) -> String {
        let profile = kind.profile();
        format!(
            "{} {}",
            Self::icon_glyph(profile.hints.icon),
            profile.name
        )
        .color(Self::accent_color(profile.hints.accent))
        .bold()
        .to_string()
    }

    /// Session banner followed by the turns already in the log.
    pub fn format_welcome(snapshot: &ConversationSnapshot) -> String {
        let mut output = Self::header("MediCore - Asisten Operasional RS");
        output.push('\n');
        output.push_str(&Self::format_history(&snapshot.turns));
        output
    }

    pub fn format_turn(turn: &ConversationTurn) -> String {
        match (turn.speaker(), turn.agent_kind()) {
            (Speaker::User, _) | (Speaker::Agent, None) => {
                format!("{} {}", "Anda:".bold(), turn.content())
            }
            (Speaker::Agent, Some(kind)) => format!(
                "{}\n{}",
                Self::agent_label(kind),
                Self::indent(turn.content(), "  ")
            ),
        }
    }

    pub fn format_history(turns: &[ConversationTurn]) -> String {
        turns
            .iter()
            .map(|turn| format!("{}\n", Self::format_turn(turn)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Agent roster with the active agent marked.
    pub fn format_roster(active: AgentKind) -> String {
        let mut output = Self::section_header("Agen Aktif");
        for profile in all_profiles() {
            output.push_str(&Self::roster_line(profile, profile.kind == active));
            output.push('\n');
        }
        output
    }

    fn roster_line(profile: &AgentProfile, active: bool) -> String {
        let marker = if active {
            "●".green().to_string()
        } else {
            "○".dimmed().to_string()
        };
        format!(
            "{} {} {}\n    {}",
            marker,
            Self::agent_label(profile.kind),
            format!("({})", profile.role).dimmed(),
            profile.description
        )
    }

    pub fn format_status(status: &OrchestrationStatus) -> String {
        status.message().italic().to_string()
    }

    pub fn format_rejection(reason: RejectReason) -> String {
        match reason {
            RejectReason::Busy => "Masih memproses permintaan sebelumnya.".yellow().to_string(),
            RejectReason::Blank => "Pesan kosong diabaikan.".dimmed().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicore_domain::{ConversationLog, TurnId};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_every_agent_has_a_glyph() {
        for profile in all_profiles() {
            assert_ne!(ConsoleFormatter::icon_glyph(profile.hints.icon), "•");
        }
        assert_eq!(ConsoleFormatter::icon_glyph("Unknown"), "•");
    }

    #[test]
    fn test_agent_turn_shows_name_and_indented_content() {
        plain();
        let turn = ConversationTurn::agent(
            TurnId::new(2),
            AgentKind::BillingInsurance,
            "Tagihan Anda:\nRp 500.000",
        );
        let output = ConsoleFormatter::format_turn(&turn);
        assert_eq!(output, "▭ Penagihan & Keuangan\n  Tagihan Anda:\n  Rp 500.000");
    }

    #[test]
    fn test_user_turn() {
        plain();
        let turn = ConversationTurn::user(TurnId::new(1), "halo");
        assert_eq!(ConsoleFormatter::format_turn(&turn), "Anda: halo");
    }

    #[test]
    fn test_roster_marks_only_active_agent() {
        plain();
        let roster = ConsoleFormatter::format_roster(AgentKind::MedicalRecords);
        let active: Vec<&str> = roster.lines().filter(|l| l.starts_with('●')).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("Arsiparis Medis"));
        assert_eq!(roster.lines().filter(|l| l.starts_with('○')).count(), 4);
    }

    #[test]
    fn test_history_includes_welcome() {
        plain();
        let log = ConversationLog::seeded();
        let history = ConsoleFormatter::format_history(log.turns());
        assert!(history.contains("Sang Orkestrator"));
        assert!(history.contains(log.turns()[0].content().lines().next().unwrap()));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
