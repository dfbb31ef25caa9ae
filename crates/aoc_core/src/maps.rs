//! Aggregations over `(key, value)` iterators.
//!
//! Every function accepts anything iterating `(&K, &V)`, so both `&HashMap`
//! and `&BTreeMap` can be passed directly. Results that pick an entry return
//! `None` for an empty map; ties between equal values resolve to an
//! unspecified entry for unordered maps.

use core::iter::Sum;

pub fn sum_values<'a, K: 'a, V>(source: impl IntoIterator<Item = (&'a K, &'a V)>) -> V
where
    V: Copy + Sum + 'a,
{
    source.into_iter().map(|(_, v)| *v).sum()
}

pub fn sum_values_for<'a, K: 'a, V>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
    predicate: impl Fn(&K) -> bool,
) -> V
where
    V: Copy + Sum + 'a,
{
    source
        .into_iter()
        .filter(|&(k, _)| predicate(k))
        .map(|(_, v)| *v)
        .sum()
}

pub fn max_key<'a, K: Ord + 'a, V: 'a>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> Option<&'a K> {
    source.into_iter().map(|(k, _)| k).max()
}

pub fn max_value<'a, K: 'a, V: Ord + 'a>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> Option<(&'a K, &'a V)> {
    source.into_iter().max_by_key(|&(_, v)| v)
}

pub fn min_value<'a, K: 'a, V: Ord + 'a>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> Option<(&'a K, &'a V)> {
    min_mapped_value(source, |v| v)
}

/// Entry whose value is smallest after mapping through `op`.
pub fn min_mapped_value<'a, K: 'a, V: 'a, O: Ord>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
    op: impl Fn(&'a V) -> O,
) -> Option<(&'a K, &'a V)> {
    source.into_iter().min_by_key(|&(_, v)| op(v))
}

pub fn first<'a, K: 'a, V: 'a>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
    predicate: impl Fn(&K, &V) -> bool,
) -> Option<(&'a K, &'a V)> {
    source.into_iter().find(|&(k, v)| predicate(k, v))
}

pub fn keys<'a, K: 'a, V: 'a>(source: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<&'a K> {
    source.into_iter().map(|(k, _)| k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn ages() -> BTreeMap<&'static str, u32> {
        BTreeMap::from([("ann", 31), ("bob", 27), ("cat", 45)])
    }

    #[test]
    fn sums() {
        let map = ages();
        assert_eq!(sum_values(&map), 103);
        assert_eq!(sum_values_for(&map, |k| k.starts_with('b')), 27);
        assert_eq!(sum_values(&HashMap::<u8, u64>::new()), 0);
    }

    #[test]
    fn extremes() {
        let map = ages();
        assert_eq!(max_key(&map), Some(&"cat"));
        assert_eq!(max_value(&map), Some((&"cat", &45)));
        assert_eq!(min_value(&map), Some((&"bob", &27)));
        assert_eq!(
            min_mapped_value(&map, |v| (*v as i64 - 30).abs()),
            Some((&"ann", &31))
        );
        assert_eq!(max_value(&BTreeMap::<u8, u8>::new()), None);
    }

    #[test]
    fn lookups() {
        let map: HashMap<char, usize> = HashMap::from([('x', 1), ('y', 2)]);
        assert_eq!(first(&map, |_, v| *v == 2), Some((&'y', &2)));
        assert_eq!(first(&map, |_, v| *v == 3), None);

        let mut ks = keys(&map);
        ks.sort_unstable();
        assert_eq!(ks, vec![&'x', &'y']);
    }
}
