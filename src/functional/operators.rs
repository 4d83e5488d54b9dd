//! Function operators: build new transforms and predicates out of existing
//! ones.

/// Inverts a predicate.
///
/// `discard(seq, p)` behaves like `keep(seq, negate(p))`.
pub fn negate<T: ?Sized, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
{
    move |item| !predicate(item)
}

/// `compose(f, g)` applies `f` first, then `g`.
pub fn compose<A: ?Sized, B, C, F, G>(mut first: F, mut second: G) -> impl FnMut(&A) -> C
where
    F: FnMut(&A) -> B,
    G: FnMut(B) -> C,
{
    move |input| second(first(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::predicates::{discard, keep};
    use crate::models::sequence::Sequence;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_negate_matches_discard() {
        let seq: Sequence<i32> = (1..=10).collect();
        assert_eq!(keep(&seq, negate(is_even)), discard(&seq, is_even));
    }

    #[test]
    fn test_compose_order() {
        let mut describe = compose(|x: &i32| x * 2, |doubled: i32| format!("<{}>", doubled));
        assert_eq!(describe(&21), "<42>");

        let mut length_is_even = compose(|s: &str| s.len() as i32, |n: i32| is_even(&n));
        assert!(length_is_even("ab"));
        assert!(!length_is_even("abc"));
    }
}
