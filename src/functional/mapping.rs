//! Mapping combinators
//!
//! Every function here walks its input once, in order, and returns a new
//! sequence of the same length. Names on the (first) input are carried over
//! position by position.

use im::Vector;

use crate::error::{SequenceError, SequenceResult};
use crate::functional::plucking::{pluck, PathSegment};
use crate::models::sequence::{Key, Sequence};
use crate::models::value::{Typed, Value, ValueType};

/// Applies `transform` to every element.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let roots = map(&Sequence::from(vec![9.0, 16.0, 25.0]), |x: &f64| x.sqrt());
/// assert_eq!(roots.to_vec(), vec![3.0, 4.0, 5.0]);
/// ```
pub fn map<T, U, F>(seq: &Sequence<T>, transform: F) -> Sequence<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(&T) -> U,
{
    Sequence::from_parts(seq.iter().map(transform).collect(), seq.name_vector().cloned())
}

/// Applies `transform` to every element, forwarding the same extra
/// arguments to each call.
pub fn map_with<T, A, U, F>(seq: &Sequence<T>, mut transform: F, args: &A) -> Sequence<U>
where
    T: Clone,
    U: Clone,
    A: ?Sized,
    F: FnMut(&T, &A) -> U,
{
    map(seq, |item| transform(item, args))
}

fn map_checked<T, U, F, G>(
    seq: &Sequence<T>,
    mut transform: F,
    target: ValueType,
    extract: G,
) -> SequenceResult<Sequence<U>>
where
    T: Clone,
    U: Clone,
    F: FnMut(&T) -> Value,
    G: Fn(Value) -> Option<U>,
{
    let values = seq
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let result = transform(item);
            result
                .coerce_to(target)
                .and_then(&extract)
                .ok_or_else(|| {
                    tracing::debug!(
                        position = index + 1,
                        expected = %target,
                        found = %result.value_type(),
                        "typed map produced a non-conforming result"
                    );
                    SequenceError::type_mismatch(index + 1, target, result.value_type())
                })
        })
        .collect::<SequenceResult<Vector<U>>>()?;
    Ok(Sequence::from_parts(values, seq.name_vector().cloned()))
}

/// Like [`map`], but every result must conform to `target`.
///
/// Results are widened where possible (logical → integer → double), so the
/// output is homogeneous. The first non-conforming result fails the whole
/// call with `TypeMismatch` carrying its 1-based position.
pub fn map_typed<T, F>(seq: &Sequence<T>, transform: F, target: ValueType) -> SequenceResult<Sequence<Value>>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    map_checked(seq, transform, target, Some)
}

/// Typed map producing booleans.
pub fn map_lgl<T, F>(seq: &Sequence<T>, transform: F) -> SequenceResult<Sequence<bool>>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    map_checked(seq, transform, ValueType::Logical, |value| value.as_bool())
}

/// Typed map producing integers.
pub fn map_int<T, F>(seq: &Sequence<T>, transform: F) -> SequenceResult<Sequence<i64>>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    map_checked(seq, transform, ValueType::Integer, |value| value.as_i64())
}

/// Typed map producing doubles.
pub fn map_dbl<T, F>(seq: &Sequence<T>, transform: F) -> SequenceResult<Sequence<f64>>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    map_checked(seq, transform, ValueType::Double, |value| value.as_f64())
}

/// Typed map producing strings.
pub fn map_chr<T, F>(seq: &Sequence<T>, transform: F) -> SequenceResult<Sequence<String>>
where
    T: Clone,
    F: FnMut(&T) -> Value,
{
    map_checked(seq, transform, ValueType::Character, |value| match value {
        Value::Character(s) => Some(s),
        _ => None,
    })
}

/// Applies a two-argument transform element-wise over two sequences.
///
/// Fails with `LengthMismatch` when the inputs differ in length. Names are
/// taken from `first`.
pub fn map2<A, B, U, F>(first: &Sequence<A>, second: &Sequence<B>, mut transform: F) -> SequenceResult<Sequence<U>>
where
    A: Clone,
    B: Clone,
    U: Clone,
    F: FnMut(&A, &B) -> U,
{
    if first.len() != second.len() {
        tracing::debug!(first = first.len(), second = second.len(), "map2 length mismatch");
        return Err(SequenceError::length_mismatch(first.len(), second.len()));
    }
    let values = first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| transform(a, b))
        .collect();
    Ok(Sequence::from_parts(values, first.name_vector().cloned()))
}

/// N-ary generalisation of [`map2`]: `transform` receives the i-th element
/// of every input.
///
/// All inputs must share the length of the first one. No inputs yield an
/// empty sequence.
pub fn pmap<T, U, F>(inputs: &[Sequence<T>], mut transform: F) -> SequenceResult<Sequence<U>>
where
    T: Clone,
    U: Clone,
    F: FnMut(&[&T]) -> U,
{
    let Some(head) = inputs.first() else {
        return Ok(Sequence::new());
    };
    if let Some(odd) = inputs.iter().find(|input| input.len() != head.len()) {
        return Err(SequenceError::length_mismatch(head.len(), odd.len()));
    }

    let mut row: Vec<&T> = Vec::with_capacity(inputs.len());
    let values = (0..head.len())
        .map(|index| {
            row.clear();
            row.extend(inputs.iter().filter_map(|input| input.get(index)));
            transform(&row)
        })
        .collect();
    Ok(Sequence::from_parts(values, head.name_vector().cloned()))
}

/// Applies `transform(element, key)`, where `key` is the element's name if
/// it has one and its 1-based position otherwise.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let labelled = imap(&Sequence::from(vec!["a", "b"]), |x, key| format!("{}: {}", key, x));
/// assert_eq!(labelled.to_vec(), vec!["1: a", "2: b"]);
/// ```
pub fn imap<T, U, F>(seq: &Sequence<T>, mut transform: F) -> Sequence<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(&T, Key<'_>) -> U,
{
    let values = seq
        .iter()
        .enumerate()
        .map(|(index, item)| transform(item, seq.key_at(index)))
        .collect();
    Sequence::from_parts(values, seq.name_vector().cloned())
}

/// Plucks the same path out of every element.
pub fn map_pluck(seq: &Sequence<Value>, path: &[PathSegment]) -> SequenceResult<Sequence<Value>> {
    let values = seq
        .iter()
        .map(|item| pluck(item, path).cloned())
        .collect::<SequenceResult<Vector<Value>>>()?;
    Ok(Sequence::from_parts(values, seq.name_vector().cloned()))
}

/// Runtime types of every element, e.g. to inspect a heterogeneous list.
pub fn map_types<T: Clone + Typed>(seq: &Sequence<T>) -> Sequence<ValueType> {
    map(seq, |item| item.value_type())
}
