//! Shape changes over nested sequences: one-level flattening and
//! row/column transposition.

use im::Vector;

use crate::error::{SequenceError, SequenceResult};
use crate::models::sequence::Sequence;
use crate::models::value::{Typed, Value, ValueType};

/// Concatenates the inner sequences in order, keeping inner names.
pub fn flatten<T: Clone>(seq: &Sequence<Sequence<T>>) -> Sequence<T> {
    Sequence::from_entries(seq.iter().flat_map(|inner| {
        inner
            .entries()
            .map(|(name, item)| (name.map(str::to_owned), item.clone()))
    }))
}

fn spliced(seq: &Sequence<Value>) -> impl Iterator<Item = (usize, Option<String>, Value)> + '_ {
    seq.entries().enumerate().flat_map(|(index, (name, item))| {
        let parts: Vec<(Option<String>, Value)> = match item {
            Value::List(inner) => inner
                .entries()
                .map(|(inner_name, value)| (inner_name.map(str::to_owned), value.clone()))
                .collect(),
            scalar => vec![(name.map(str::to_owned), scalar.clone())],
        };
        parts
            .into_iter()
            .map(move |(name, value)| (index, name, value))
    })
}

/// Splices list elements into their parent one level deep; scalar elements
/// are kept as they are.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let nested: Sequence<Value> = vec![Value::list([1, 2]), Value::from(3)].into();
/// assert_eq!(flatten_values(&nested).len(), 3);
/// ```
pub fn flatten_values(seq: &Sequence<Value>) -> Sequence<Value> {
    Sequence::from_entries(spliced(seq).map(|(_, name, value)| (name, value)))
}

/// [`flatten_values`], additionally coercing every element to `target`.
///
/// A `TypeMismatch` reports the 1-based position of the offending element's
/// top-level container in `seq`.
pub fn flatten_typed(seq: &Sequence<Value>, target: ValueType) -> SequenceResult<Sequence<Value>> {
    let entries = spliced(seq)
        .map(|(index, name, value)| {
            value
                .coerce_to(target)
                .map(|coerced| (name, coerced))
                .ok_or_else(|| {
                    tracing::debug!(
                        position = index + 1,
                        expected = %target,
                        found = %value.value_type(),
                        "flatten_typed could not coerce"
                    );
                    SequenceError::type_mismatch(index + 1, target, value.value_type())
                })
        })
        .collect::<SequenceResult<Vec<_>>>()?;
    Ok(Sequence::from_entries(entries))
}

/// Swaps rows and columns: the i-th output sequence collects the i-th
/// element of every input sequence.
///
/// All inner sequences must have the length of the first one, otherwise the
/// call fails with `LengthMismatch`. Outer names of the input become inner
/// names of the output; the outer names of the output come from the first
/// row only. Transposing twice restores the input only when every row
/// carries the same names and the rows are non-empty: other rows' names are
/// replaced by the first row's, and zero-width rows transpose to an empty
/// sequence.
pub fn transpose<T: Clone>(seq: &Sequence<Sequence<T>>) -> SequenceResult<Sequence<Sequence<T>>> {
    let Some(first) = seq.first() else {
        return Ok(Sequence::new());
    };
    let width = first.len();
    if let Some(row) = seq.iter().find(|row| row.len() != width) {
        tracing::debug!(expected = width, found = row.len(), "transpose over ragged rows");
        return Err(SequenceError::length_mismatch(width, row.len()));
    }

    let columns = (0..width).map(|column| {
        let cells: Vector<T> = seq.iter().map(|row| row[column].clone()).collect();
        (
            first.name_at(column).map(str::to_owned),
            Sequence::from_parts(cells, seq.name_vector().cloned()),
        )
    });
    Ok(Sequence::from_entries(columns))
}

/// [`transpose`] for a list of lists held as [`Value`]s.
///
/// Every element must be a list (`TypeMismatch` otherwise).
pub fn transpose_values(seq: &Sequence<Value>) -> SequenceResult<Sequence<Value>> {
    let rows = seq
        .entries()
        .enumerate()
        .map(|(index, (name, item))| match item {
            Value::List(row) => Ok((name.map(str::to_owned), row.clone())),
            other => Err(SequenceError::type_mismatch(
                index + 1,
                ValueType::List,
                other.value_type(),
            )),
        })
        .collect::<SequenceResult<Vec<_>>>()?;
    let transposed = transpose(&Sequence::from_entries(rows))?;
    Ok(Sequence::from_entries(
        transposed
            .entries()
            .map(|(name, column)| (name.map(str::to_owned), Value::List(column.clone()))),
    ))
}
