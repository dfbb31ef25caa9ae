use aoc_core::AocError;
use aoc_core::bitfield::BitField;
use aoc_core::bitfield_array::BitFieldArray;
use proptest::prelude::*;

fn binary_string() -> impl Strategy<Value = String> {
    "[01]{1,64}"
}

/// A report of distinct lines sharing one width.
fn report() -> impl Strategy<Value = Vec<String>> {
    (1usize..=12).prop_flat_map(|width| {
        let max = (1u64 << width) - 1;
        prop::collection::vec(0..=max, 1..40).prop_map(move |mut values| {
            values.sort_unstable();
            values.dedup();
            values
                .into_iter()
                .map(|v| format!("{v:0width$b}"))
                .collect::<Vec<String>>()
        })
    })
}

proptest! {
    #[test]
    fn get_matches_text(text in binary_string()) {
        let field: BitField = text.parse().unwrap();
        for (i, c) in text.chars().enumerate() {
            prop_assert_eq!(field.get(i), c == '1');
        }
        prop_assert_eq!(field.to_string(), text.clone());
    }

    #[test]
    fn value_round_trips(text in binary_string()) {
        let field: BitField = text.parse().unwrap();
        let rebuilt = BitField::from_value(field.value(), field.len()).unwrap();
        prop_assert_eq!(&rebuilt, &field);
        prop_assert_eq!(rebuilt.as_str(), text.as_str());
    }

    #[test]
    fn invert_is_an_involution(text in binary_string()) {
        let field: BitField = text.parse().unwrap();
        let inverted = field.invert();
        prop_assert_eq!(inverted.len(), field.len());
        prop_assert_eq!(inverted.invert(), field.clone());
        for i in 0..field.len() {
            prop_assert_ne!(inverted.get(i), field.get(i));
        }
    }

    #[test]
    fn most_common_of_identical_entries(text in binary_string(), copies in 1usize..10) {
        let report = BitFieldArray::try_from_strs(vec![text.clone(); copies]).unwrap();
        let most_common = report.most_common().unwrap();
        prop_assert_eq!(most_common.as_str(), text.as_str());
    }

    #[test]
    fn filters_partition_the_report(lines in report(), pos_seed in any::<usize>()) {
        let report = BitFieldArray::try_from_strs(&lines).unwrap();
        let pos = pos_seed % report.width();
        let common = report.filter_by_pos(pos, true).unwrap();
        let least = report.filter_by_pos(pos, false).unwrap();

        prop_assert_eq!(common.len() + least.len(), report.len());
        for field in &report {
            let in_common = common.iter().any(|f| f == field);
            let in_least = least.iter().any(|f| f == field);
            prop_assert!(in_common != in_least);
        }
    }

    #[test]
    fn reduction_is_deterministic(lines in report(), use_common in any::<bool>()) {
        let report = BitFieldArray::try_from_strs(&lines).unwrap();
        let first = report.reduce_to_rating(use_common);
        let second = report.reduce_to_rating(use_common);
        prop_assert_eq!(&first, &second);
        if let Ok(rating) = first {
            prop_assert!(report.iter().any(|f| *f == rating));
        }
    }
}

#[test]
fn empty_report_has_no_majority() {
    let report = BitFieldArray::try_from_strs(Vec::<String>::new()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.most_common(), Err(AocError::EmptyCollection));
}

#[test]
fn example_life_support() {
    let report = BitFieldArray::try_from_strs([
        "00100", "11110", "10110", "10111", "10101", "01111", "00111", "11100", "10000", "11001",
        "00010", "01010",
    ])
    .unwrap();

    let oxygen = report.reduce_to_rating(true).unwrap();
    let co2 = report.reduce_to_rating(false).unwrap();
    assert_eq!((oxygen.value(), co2.value()), (23, 10));
    assert_eq!(oxygen.value() * co2.value(), 230);
}
