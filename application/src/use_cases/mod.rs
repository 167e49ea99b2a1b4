//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod converse;
pub mod generate_response;
pub mod route_intent;

#[cfg(test)]
pub(crate) mod test_support;
