//! Prelude for the sequence combinators
//!
//! This module re-exports the data model, every combinator and the error
//! types so callers can pull the whole toolkit in with one `use`.

pub use crate::error::{SequenceError, SequenceResult};
pub use crate::functional::mapping::{
    imap, map, map2, map_chr, map_dbl, map_int, map_lgl, map_pluck, map_typed, map_types,
    map_with, pmap,
};
pub use crate::functional::modification::{modify, modify_at, modify_if, modify_in};
pub use crate::functional::operators::{compose, negate};
pub use crate::functional::pipeline::{Pipeline, PipelineSummary, StageMetrics};
pub use crate::functional::plucking::{pluck, pluck_or, PathSegment};
pub use crate::functional::predicates::{
    compact, detect, detect_index, detect_index_last, detect_last, discard, every, has_element,
    has_value, head_while, keep, none, some, tail_while,
};
pub use crate::functional::reduction::{accumulate, fold, reduce};
pub use crate::functional::reshaping::{
    flatten, flatten_typed, flatten_values, transpose, transpose_values,
};
pub use crate::models::sequence::{Key, Sequence};
pub use crate::models::value::{NumericEquality, Typed, Value, ValueType};
pub use crate::path;
