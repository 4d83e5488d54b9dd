//! Path-based extraction from nested containers.

use derive_more::Display;
use serde_derive::Serialize;

use crate::error::{SequenceError, SequenceResult};
use crate::models::sequence::Sequence;
use crate::models::value::Value;

/// One step of a pluck path: a name or a 1-based position.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum PathSegment {
    #[display(fmt = "{:?}", _0)]
    Name(String),
    #[display(fmt = "[{}]", _0)]
    Position(usize),
}

impl PathSegment {
    /// 0-based index this segment selects in `seq`, if any.
    pub fn resolve<T: Clone>(&self, seq: &Sequence<T>) -> Option<usize> {
        match self {
            PathSegment::Name(name) => seq.position_of_name(name),
            PathSegment::Position(position) => position
                .checked_sub(1)
                .filter(|index| *index < seq.len()),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Name(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Name(name)
    }
}

impl From<usize> for PathSegment {
    fn from(position: usize) -> Self {
        PathSegment::Position(position)
    }
}

/// Builds a pluck path from mixed names and positions.
///
/// ```
/// use seqops::prelude::*;
///
/// let path = path!["lowers", 2usize];
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::functional::plucking::PathSegment::from($segment)),*]
    };
}

fn step<'a>(current: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    let items = current.as_list()?;
    segment.resolve(items).and_then(|index| items.get(index))
}

/// Follows `path` through nested lists and returns the element it lands on.
///
/// Names resolve against named lists, positions (1-based) against any list.
/// Fails with `PathNotFound` naming the first segment that does not resolve;
/// `depth` is the 1-based index of that segment in the path. An empty path
/// returns the container itself.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let letters = Value::record([
///     ("lowers", Value::list(['a', 'b', 'c'])),
///     ("uppers", Value::list(['A', 'B', 'C'])),
/// ]);
/// assert_eq!(pluck(&letters, &path!["lowers", 2usize]).unwrap(), &Value::from("b"));
/// ```
pub fn pluck<'a>(container: &'a Value, path: &[PathSegment]) -> SequenceResult<&'a Value> {
    path.iter()
        .enumerate()
        .try_fold(container, |current, (index, segment)| {
            step(current, segment).ok_or_else(|| {
                tracing::debug!(depth = index + 1, %segment, "pluck path did not resolve");
                SequenceError::PathNotFound {
                    depth: index + 1,
                    segment: segment.clone(),
                }
            })
        })
}

/// Like [`pluck`], but returns `default` when the path does not resolve.
pub fn pluck_or<'a>(container: &'a Value, path: &[PathSegment], default: &'a Value) -> &'a Value {
    pluck(container, path).unwrap_or(default)
}
