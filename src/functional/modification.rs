//! Selective modification: transform some or all elements while keeping the
//! shape (length, names) of the input.

use std::collections::HashSet;

use crate::error::{SequenceError, SequenceResult};
use crate::functional::plucking::PathSegment;
use crate::models::sequence::Sequence;
use crate::models::value::{Typed, Value};

/// Applies `transform` to every element, requiring each result to keep the
/// runtime type of the element it replaces.
///
/// For statically typed elements the check always passes; for [`Value`]
/// elements a type change fails with `TypeMismatch`.
pub fn modify<T, F>(seq: &Sequence<T>, mut transform: F) -> SequenceResult<Sequence<T>>
where
    T: Clone + Typed,
    F: FnMut(&T) -> T,
{
    let entries = seq
        .entries()
        .enumerate()
        .map(|(index, (name, item))| {
            let updated = transform(item);
            if updated.value_type() != item.value_type() {
                tracing::debug!(
                    position = index + 1,
                    expected = %item.value_type(),
                    found = %updated.value_type(),
                    "modify changed an element's type"
                );
                return Err(SequenceError::type_mismatch(
                    index + 1,
                    item.value_type(),
                    updated.value_type(),
                ));
            }
            Ok((name.map(str::to_owned), updated))
        })
        .collect::<SequenceResult<Vec<_>>>()?;
    Ok(Sequence::from_entries(entries))
}

/// Applies `transform` only to elements satisfying `predicate`.
pub fn modify_if<T, P, F>(seq: &Sequence<T>, mut predicate: P, mut transform: F) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> T,
{
    Sequence::from_entries(seq.entries().map(|(name, item)| {
        let item = if predicate(item) {
            transform(item)
        } else {
            item.clone()
        };
        (name.map(str::to_owned), item)
    }))
}

/// Applies `transform` only at the given 1-based positions.
///
/// Every position is validated before anything is transformed; a position of
/// zero or beyond the end fails with `IndexOutOfRange`. A position listed
/// more than once is transformed once.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let seq: Sequence<i32> = (11..=20).collect();
/// let zeroed = modify_at(&seq, &[1, 3, 5], |_| 0).unwrap();
/// assert_eq!(zeroed.to_vec(), vec![0, 12, 0, 14, 0, 16, 17, 18, 19, 20]);
/// ```
pub fn modify_at<T, F>(seq: &Sequence<T>, positions: &[usize], mut transform: F) -> SequenceResult<Sequence<T>>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    if let Some(&position) = positions
        .iter()
        .find(|&&position| position == 0 || position > seq.len())
    {
        tracing::debug!(position, len = seq.len(), "modify_at position out of range");
        return Err(SequenceError::IndexOutOfRange {
            position,
            len: seq.len(),
        });
    }

    let targets: HashSet<usize> = positions.iter().map(|position| position - 1).collect();
    Ok(Sequence::from_entries(seq.entries().enumerate().map(
        |(index, (name, item))| {
            let item = if targets.contains(&index) {
                transform(item)
            } else {
                item.clone()
            };
            (name.map(str::to_owned), item)
        },
    )))
}

/// Replaces the element found by following `path` with `transform` applied
/// to it, rebuilding only the lists along the path.
///
/// Fails with `PathNotFound` exactly where [`pluck`](crate::functional::plucking::pluck)
/// would.
pub fn modify_in<F>(container: &Value, path: &[PathSegment], transform: F) -> SequenceResult<Value>
where
    F: FnOnce(&Value) -> Value,
{
    modify_in_at(container, path, 1, transform)
}

fn modify_in_at<F>(current: &Value, path: &[PathSegment], depth: usize, transform: F) -> SequenceResult<Value>
where
    F: FnOnce(&Value) -> Value,
{
    let Some((segment, rest)) = path.split_first() else {
        return Ok(transform(current));
    };
    let not_found = || SequenceError::PathNotFound {
        depth,
        segment: segment.clone(),
    };
    let items = current.as_list().ok_or_else(not_found)?;
    let index = segment.resolve(items).ok_or_else(not_found)?;
    let child = modify_in_at(&items[index], rest, depth + 1, transform)?;
    Ok(Value::List(items.replaced(index, child)))
}
