//! Fixed user-visible texts.
//!
//! Each fallback is shown as if an agent said it, so the texts are
//! distinct from one another to keep failure paths tellable apart.

/// Seed turn of every new conversation.
pub const WELCOME_MESSAGE: &str = "Selamat datang di MediCore AIS. Saya adalah Sang Orkestrator. Bagaimana saya dapat membantu Anda dengan operasional rumah sakit hari ini? Saya dapat mengarahkan Anda ke Manajemen Pasien, Penjadwalan, Rekam Medis, atau Penagihan.";

/// The generation call succeeded but produced no text.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "Maaf, saya tidak dapat memproses permintaan Anda saat ini.";

/// The generation call failed.
pub const GENERATION_FAILURE_FALLBACK: &str =
    "Terjadi kesalahan sistem saat menghubungi agen spesialis.";

/// An orchestration step failed outside the router and generator.
pub const SYSTEM_ERROR_MESSAGE: &str =
    "Maaf, kami mengalami kesalahan sistem internal. Silakan coba lagi.";
