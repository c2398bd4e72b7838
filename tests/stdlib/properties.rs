//! Property tests over randomly shaped sequences

use ligo_foundation::Seq;
use ligo_stdlib::{
    append, copy_seq, drop, equal, every, filter, length, map_car, remove_if, reverse, some, take,
};
use proptest::prelude::*;

fn any_seq() -> impl Strategy<Value = Seq<i64>> {
    (prop::collection::vec(-100i64..100, 0..30), any::<bool>()).prop_map(|(items, as_list)| {
        if as_list {
            Seq::list(items)
        } else {
            Seq::vector(items)
        }
    })
}

proptest! {
    #[test]
    fn equal_ignores_representation(items in prop::collection::vec(any::<i64>(), 0..30)) {
        prop_assert!(equal(&[&Seq::list(items.clone()), &Seq::vector(items)]));
    }

    #[test]
    fn copy_is_equal(seq in any_seq()) {
        let copy = copy_seq(&seq);
        prop_assert!(equal(&[&copy, &seq]));
        prop_assert_eq!(copy.repr(), seq.repr());
    }

    #[test]
    fn append_length_adds(a in any_seq(), b in any_seq()) {
        prop_assert_eq!(length(&append(&[&a, &b])), length(&a) + length(&b));
    }

    #[test]
    fn reverse_twice_is_identity(seq in any_seq()) {
        prop_assert!(equal(&[&reverse(&reverse(&seq)), &seq]));
    }

    #[test]
    fn take_and_drop_rebuild(seq in any_seq(), k in 0usize..40) {
        let k = k.min(length(&seq));
        prop_assert!(equal(&[&append(&[&take(&seq, k), &drop(&seq, k)]), &seq]));
    }

    #[test]
    fn map_car_truncates_to_shortest(a in any_seq(), b in any_seq()) {
        let mapped = map_car(|xs: &[&i64]| xs[0] + xs[1], &[&a, &b]);
        prop_assert_eq!(length(&mapped), length(&a).min(length(&b)));
    }

    #[test]
    fn filter_and_remove_partition(seq in any_seq()) {
        let kept = filter(|x: &i64| x % 2 == 0, &seq);
        let removed = remove_if(|x: &i64| x % 2 == 0, &seq);
        prop_assert_eq!(length(&kept) + length(&removed), length(&seq));
        prop_assert!(kept.iter().all(|x| x % 2 == 0));
        prop_assert!(removed.iter().all(|x| x % 2 != 0));
    }

    #[test]
    fn every_is_not_some_not(seq in any_seq()) {
        let positive = |xs: &[&i64]| *xs[0] > 0;
        let not_positive = |xs: &[&i64]| *xs[0] <= 0;
        prop_assert_eq!(every(positive, &[&seq]), !some(not_positive, &[&seq]));
    }
}
