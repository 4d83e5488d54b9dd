//! Reducing combinators.

use crate::models::sequence::Sequence;

/// Combines the elements left to right, starting from the first element.
///
/// Returns `None` on an empty sequence.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let total = reduce(&(1..=5).collect(), |acc, x: &i32| acc + x);
/// assert_eq!(total, Some(15));
/// ```
pub fn reduce<T, F>(seq: &Sequence<T>, mut combine: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let mut items = seq.iter();
    let first = items.next()?.clone();
    Some(items.fold(first, |acc, item| combine(acc, item)))
}

/// Combines the elements left to right, starting from `init`.
pub fn fold<T, B, F>(seq: &Sequence<T>, init: B, combine: F) -> B
where
    T: Clone,
    F: FnMut(B, &T) -> B,
{
    seq.iter().fold(init, combine)
}

/// Running reduction: the i-th output is the reduction of the first i
/// elements. Same length and names as the input.
pub fn accumulate<T, F>(seq: &Sequence<T>, mut combine: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    let values = seq
        .iter()
        .scan(None::<T>, |running, item| {
            let next = match running.take() {
                Some(acc) => combine(&acc, item),
                None => item.clone(),
            };
            *running = Some(next.clone());
            Some(next)
        })
        .collect();
    Sequence::from_parts(values, seq.name_vector().cloned())
}
