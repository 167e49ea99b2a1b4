//! Intent routing domain.
//!
//! Pure logic around the classification call: which context the classifier
//! sees, what output shape it is constrained to, and how its answer is read.

pub mod parsing;
pub mod prompt;
pub mod value_objects;
