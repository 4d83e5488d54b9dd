//! Pure, name-aware sequence combinators.
//!
//! The crate replaces hand-written loops over small in-memory collections
//! with a fixed set of combinators: mapping ([`map`](functional::mapping::map),
//! [`map2`](functional::mapping::map2), [`imap`](functional::mapping::imap)),
//! filtering ([`keep`](functional::predicates::keep),
//! [`discard`](functional::predicates::discard)), searching
//! ([`detect`](functional::predicates::detect)), selective modification,
//! path-based extraction ([`pluck`](functional::plucking::pluck)) and
//! reshaping ([`flatten`](functional::reshaping::flatten),
//! [`transpose`](functional::reshaping::transpose)).
//!
//! ```
//! use seqops::prelude::*;
//!
//! let evens = keep(&(11..=20).collect::<Sequence<i32>>(), |x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![12, 14, 16, 18, 20]);
//! ```

pub mod config;
pub mod error;
pub mod functional;
pub mod models;
pub mod utils;

pub use functional::prelude;
