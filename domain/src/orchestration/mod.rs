//! Turn orchestration domain: phases and status lines of an in-flight turn.

pub mod status;
