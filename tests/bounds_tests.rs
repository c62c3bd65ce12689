//! Clamped slicing tests.
//!
//! Every case is compared against Rust's own range slicing after the index has
//! been translated the way a native bounded slice would translate it.

use seqkit::{clamped_slice, normalize_index};

const SAMPLE: [i32; 7] = [1, 2, 3, 4, 5, 6, 7];

/// Reference bounded-slice semantics written independently of `normalize_index`.
fn native_slice(s: &[i32], start: Option<isize>, end: Option<isize>) -> Vec<i32> {
    let len = s.len() as isize;
    let resolve = |i: isize| -> usize {
        let i = if i < 0 { (len + i).max(0) } else { i.min(len) };
        i as usize
    };
    let from = start.map_or(0, resolve);
    let to = end.map_or(s.len(), resolve);
    if from < to {
        s[from..to].to_vec()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod clamped_slice_tests {
    use super::*;

    #[test]
    fn test_matches_native_semantics() {
        let cases: &[(Option<isize>, Option<isize>)] = &[
            (None, None),
            (Some(0), None),
            (Some(0), Some(0)),
            (Some(0), Some(1)),
            (Some(0), Some(2)),
            (Some(0), Some(5)),
            (Some(0), Some(-1)),
            (Some(0), Some(-3)),
            (Some(0), Some(-10000)),
            (Some(3), None),
            (Some(3), Some(-100)),
            (Some(3), Some(100)),
            (Some(3), Some(5)),
            (Some(9999), None),
            (Some(-9999), None),
            (Some(-9999), Some(4)),
            (Some(-9999), Some(-4)),
        ];

        for &(start, end) in cases {
            assert_eq!(
                clamped_slice(&SAMPLE, start, end),
                native_slice(&SAMPLE, start, end),
                "start {start:?}, end {end:?}"
            );
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(clamped_slice(&SAMPLE, Some(0), Some(-1)), vec![1, 2, 3, 4, 5, 6]);
        assert!(clamped_slice(&SAMPLE, Some(3), Some(-100)).is_empty());
        assert_eq!(clamped_slice(&SAMPLE, Some(-9999), Some(4)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_defaults_copy_everything() {
        let v = SAMPLE.to_vec();
        assert_eq!(clamped_slice(&v, None, None), v);
    }

    #[test]
    fn test_negative_start_counts_from_end() {
        assert_eq!(clamped_slice(&SAMPLE, Some(-2), None), vec![6, 7]);
        assert_eq!(clamped_slice(&SAMPLE, Some(-3), Some(-1)), vec![5, 6]);
    }

    #[test]
    fn test_inverted_bounds_are_empty() {
        assert!(clamped_slice(&SAMPLE, Some(5), Some(2)).is_empty());
        assert!(clamped_slice(&SAMPLE, Some(-1), Some(-3)).is_empty());
    }

    #[test]
    fn test_input_left_untouched() {
        let v = vec![String::from("x"), String::from("y"), String::from("z")];
        let before = v.clone();
        let sliced = clamped_slice(&v, Some(1), None);
        assert_eq!(sliced, vec!["y".to_string(), "z".to_string()]);
        assert_eq!(v, before);
    }

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<u8> = Vec::new();
        for (start, end) in [(None, None), (Some(-1), Some(1)), (Some(3), Some(-3))] {
            assert!(clamped_slice(&empty, start, end).is_empty());
        }
    }

    #[test]
    fn test_works_on_slices_and_persistent_vectors() {
        let slice: &[i32] = &SAMPLE[..];
        assert_eq!(clamped_slice(slice, Some(1), Some(3)), vec![2, 3]);

        let persistent: im::Vector<i32> = SAMPLE.iter().copied().collect();
        assert_eq!(clamped_slice(&persistent, Some(-2), None), vec![6, 7]);
    }
}

#[cfg(test)]
mod normalize_index_tests {
    use super::*;

    #[test]
    fn test_boundary_values_against_length() {
        for len in [0usize, 1, 7] {
            let l = len as isize;
            assert_eq!(normalize_index(-l - 1, len), 0);
            assert_eq!(normalize_index(-l, len), 0);
            assert_eq!(normalize_index(-1, len), len.saturating_sub(1));
            assert_eq!(normalize_index(0, len), 0);
            assert_eq!(normalize_index(l - 1, len), len.saturating_sub(1));
            assert_eq!(normalize_index(l, len), len);
            assert_eq!(normalize_index(l + 1, len), len);
        }
    }
}
