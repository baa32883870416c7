use proptest::prelude::*;
use sign_similarity::compare;

fn features() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e]{1,2}", 0..10)
}

proptest! {
    #[test]
    fn metrics_stay_in_unit_interval(a in features(), b in features()) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        let s = compare(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&s.dice));
        prop_assert!((0.0..=1.0).contains(&s.jaccard));
        prop_assert!(s.jaccard <= s.dice + 1e-12);
    }

    #[test]
    fn compare_is_symmetric(a in features(), b in features()) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        prop_assert_eq!(compare(&a, &b).unwrap(), compare(&b, &a).unwrap());
    }

    #[test]
    fn dice_and_jaccard_agree(a in features(), b in features()) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        let s = compare(&a, &b).unwrap();
        // D = 2J / (1 + J)
        prop_assert!((s.dice - 2.0 * s.jaccard / (1.0 + s.jaccard)).abs() < 1e-9);
    }

    #[test]
    fn self_comparison_is_perfect(a in proptest::collection::vec("[a-e]{1,2}", 1..10)) {
        let s = compare(&a, &a).unwrap();
        prop_assert_eq!(s.dice, 1.0);
        prop_assert_eq!(s.jaccard, 1.0);
    }
}
