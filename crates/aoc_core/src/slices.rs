use crate::AocError;
use core::iter::Sum;

/// Clones the elements matching `predicate` into a new vector.
pub fn filter<T: Clone>(source: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    source.iter().filter(|e| predicate(*e)).cloned().collect()
}

pub fn first<T>(source: &[T], predicate: impl Fn(&T) -> bool) -> Option<&T> {
    source.iter().find(|e| predicate(*e))
}

pub fn contains_any<T: PartialEq>(source: &[T], elements: &[T]) -> bool {
    elements.iter().any(|e| source.contains(e))
}

/// Splits `source` into the elements matching `predicate` and the rest,
/// both in their original order.
pub fn divide<T: Clone>(source: &[T], predicate: impl Fn(&T) -> bool) -> (Vec<T>, Vec<T>) {
    source.iter().cloned().partition(|e| predicate(e))
}

/// Returns the only element of `source`, or `None` unless it has exactly one.
pub fn is_single<T>(source: &[T]) -> Option<&T> {
    match source {
        [only] => Some(only),
        _ => None,
    }
}

/// `rows` rows of `columns` default values.
pub fn init_grid<T: Clone + Default>(columns: usize, rows: usize) -> Vec<Vec<T>> {
    vec![vec![T::default(); columns]; rows]
}

pub fn min_max<T: Ord + Copy>(source: &[T]) -> Option<(T, T)> {
    let (&head, tail) = source.split_first()?;
    Some(
        tail.iter()
            .fold((head, head), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

pub fn sum_weighted<T, U: Sum>(source: &[T], weight: impl Fn(&T) -> U) -> U {
    source.iter().map(weight).sum()
}

pub fn count_if<T>(source: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    source.iter().filter(|e| predicate(*e)).count()
}

/// Drops the last `n` elements; an empty slice if `n` exceeds the length.
pub fn trim_end<T>(source: &[T], n: usize) -> &[T] {
    &source[..source.len().saturating_sub(n)]
}

/// Middle value of an odd-length sequence.
pub fn median<T: Ord + Copy>(source: &[T]) -> Result<T, AocError> {
    if source.is_empty() {
        return Err(AocError::EmptyCollection);
    }
    if source.len() % 2 == 0 {
        return Err(AocError::EvenMedian);
    }

    let mut sorted = source.to_vec();
    sorted.sort_unstable();
    Ok(sorted[sorted.len() / 2])
}

pub fn index_of<T: PartialEq>(source: &[T], val: &T) -> Option<usize> {
    source.iter().position(|e| e == val)
}
