//! Predicate combinators: filtering, aggregate tests and searching.
//!
//! Filtering keeps relative order and the names of surviving elements.
//! Search results that return positions are 1-based and always refer to the
//! sequence that was searched.

use itertools::Itertools;

use crate::models::sequence::Sequence;
use crate::models::value::{NumericEquality, Value};

/// Elements for which `predicate` holds.
///
/// # Examples
///
/// ```
/// use seqops::prelude::*;
///
/// let evens = keep(&(11..=20).collect(), |x: &i32| x % 2 == 0);
/// assert_eq!(evens.to_vec(), vec![12, 14, 16, 18, 20]);
/// ```
pub fn keep<T, P>(seq: &Sequence<T>, mut predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    Sequence::from_entries(
        seq.entries()
            .filter(|&(_, item)| predicate(item))
            .map(|(name, item)| (name.map(str::to_owned), item.clone())),
    )
}

/// Elements for which `predicate` does not hold; the complement of [`keep`].
pub fn discard<T, P>(seq: &Sequence<T>, mut predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    keep(seq, |item| !predicate(item))
}

/// Drops `Null` elements.
pub fn compact(seq: &Sequence<Value>) -> Sequence<Value> {
    discard(seq, Value::is_null)
}

/// Longest prefix whose elements all satisfy `predicate`.
pub fn head_while<T, P>(seq: &Sequence<T>, mut predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    Sequence::from_entries(
        seq.entries()
            .take_while(|&(_, item)| predicate(item))
            .map(|(name, item)| (name.map(str::to_owned), item.clone())),
    )
}

/// Longest suffix whose elements all satisfy `predicate`.
pub fn tail_while<T, P>(seq: &Sequence<T>, mut predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let start = seq
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |index| index + 1);
    Sequence::from_entries(
        seq.entries()
            .skip(start)
            .map(|(name, item)| (name.map(str::to_owned), item.clone())),
    )
}

/// True iff `predicate` holds for every element; true on an empty sequence.
pub fn every<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().all(predicate)
}

/// True iff `predicate` holds for at least one element; false on an empty
/// sequence.
pub fn some<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// True iff `predicate` holds for no element; true on an empty sequence.
pub fn none<T, P>(seq: &Sequence<T>, predicate: P) -> bool
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    !some(seq, predicate)
}

/// True iff some element equals `value` under the element type's `PartialEq`.
///
/// For [`Value`] sequences this is strict: `Integer(2)` does not match
/// `Double(2.0)`. See [`has_value`] for a configurable comparison.
pub fn has_element<T>(seq: &Sequence<T>, value: &T) -> bool
where
    T: Clone + PartialEq,
{
    seq.iter().any(|item| item == value)
}

/// [`has_element`] for dynamically typed sequences under an explicit
/// numeric equality policy.
pub fn has_value(seq: &Sequence<Value>, value: &Value, policy: NumericEquality) -> bool {
    seq.iter().any(|item| item.equals(value, policy))
}

/// First element satisfying `predicate`, `None` if there is none.
pub fn detect<T, P>(seq: &Sequence<T>, mut predicate: P) -> Option<&T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().find(|item| predicate(item))
}

/// 1-based position of the first element satisfying `predicate`.
///
/// Returns `None` exactly when [`detect`] does.
pub fn detect_index<T, P>(seq: &Sequence<T>, mut predicate: P) -> Option<usize>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter()
        .find_position(|item| predicate(item))
        .map(|(index, _)| index + 1)
}

/// Last element satisfying `predicate`.
pub fn detect_last<T, P>(seq: &Sequence<T>, mut predicate: P) -> Option<&T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().rev().find(|item| predicate(item))
}

/// 1-based position, counted from the start, of the last element satisfying
/// `predicate`.
pub fn detect_index_last<T, P>(seq: &Sequence<T>, mut predicate: P) -> Option<usize>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().rposition(|item| predicate(item)).map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teens() -> Sequence<i32> {
        (11..=20).collect()
    }

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_keep_evens() {
        let kept = keep(&teens(), is_even);
        assert_eq!(kept.to_vec(), vec![12, 14, 16, 18, 20]);
        assert!(every(&kept, is_even));
    }

    #[test]
    fn test_keep_and_discard_partition() {
        let seq = teens();
        let kept = keep(&seq, is_even);
        let dropped = discard(&seq, is_even);
        assert_eq!(kept.len() + dropped.len(), seq.len());
        assert!(none(&dropped, is_even));

        let mut merged: Vec<i32> = kept.into_iter().chain(dropped).collect();
        merged.sort_unstable();
        assert_eq!(merged, seq.to_vec());
    }

    #[test]
    fn test_keep_preserves_names() {
        let seq = Sequence::named([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let kept = keep(&seq, is_even);
        assert_eq!(kept.names(), vec![Some("b"), Some("d")]);
        assert_eq!(kept.get_by_name("d"), Some(&4));
    }

    #[test]
    fn test_keep_empty_result_is_valid() {
        let kept = keep(&teens(), |x| *x > 100);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_compact() {
        let seq: Sequence<Value> = vec![Value::from(1), Value::Null, Value::from("a")].into();
        assert_eq!(compact(&seq).to_vec(), vec![Value::from(1), Value::from("a")]);
    }

    #[test]
    fn test_head_and_tail_while() {
        let seq: Sequence<i32> = vec![2, 4, 5, 6, 8].into();
        assert_eq!(head_while(&seq, is_even).to_vec(), vec![2, 4]);
        assert_eq!(tail_while(&seq, is_even).to_vec(), vec![6, 8]);

        let all_even: Sequence<i32> = vec![2, 4].into();
        assert_eq!(tail_while(&all_even, is_even).to_vec(), vec![2, 4]);
        assert!(head_while(&seq, |x| *x > 10).is_empty());
    }

    #[test]
    fn test_every_and_some_on_empty() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(every(&empty, is_even));
        assert!(!some(&empty, is_even));
        assert!(none(&empty, is_even));
    }

    #[test]
    fn test_every_and_some() {
        let seq = teens();
        assert!(every(&seq, |x| *x > 10));
        assert!(!every(&seq, is_even));
        assert!(some(&seq, |x| *x == 20));
        assert!(!some(&seq, |x| *x > 20));
    }

    #[test]
    fn test_has_element() {
        let seq = teens();
        assert!(has_element(&seq, &15));
        assert!(!has_element(&seq, &21));

        let values: Sequence<Value> = vec![Value::from(1), Value::from(2)].into();
        assert!(has_element(&values, &Value::from(2)));
        assert!(!has_element(&values, &Value::from(2.0)));
        assert!(has_value(&values, &Value::from(2.0), NumericEquality::Loose));
        assert!(!has_value(&values, &Value::from(2.0), NumericEquality::Strict));
    }

    #[test]
    fn test_detect_and_detect_index_agree() {
        let seq = teens();
        assert_eq!(detect(&seq, |x| x % 5 == 0), Some(&15));
        assert_eq!(detect_index(&seq, |x| x % 5 == 0), Some(5));
        assert_eq!(seq.get(5 - 1), Some(&15));

        assert_eq!(detect(&seq, |x| *x > 20), None);
        assert_eq!(detect_index(&seq, |x| *x > 20), None);
    }

    #[test]
    fn test_detect_backwards() {
        let seq = teens();
        assert_eq!(detect_last(&seq, |x| x % 5 == 0), Some(&20));
        assert_eq!(detect_index_last(&seq, |x| x % 5 == 0), Some(10));
        assert_eq!(detect_index_last(&seq, |x| x % 7 == 0), Some(4));
        assert_eq!(detect_index_last(&seq, |x| *x < 0), None);
    }
}
