//! Turn progress rendering

pub mod reporter;
