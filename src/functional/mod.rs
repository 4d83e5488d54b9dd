//! Pure combinators over [`Sequence`](crate::models::sequence::Sequence)s.
//!
//! None of these functions mutate their input; each returns a new sequence
//! (sharing structure with the input where possible) or a summary value.

pub mod mapping;
pub mod modification;
pub mod operators;
pub mod pipeline;
pub mod plucking;
pub mod predicates;
pub mod prelude;
pub mod reduction;
pub mod reshaping;
