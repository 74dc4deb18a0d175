use og_sitemap_stream::crawl_engine::ProgressState;
use proptest::prelude::*;

proptest! {
    #[test]
    fn progress_is_monotonic_and_ends_at_100(total in 1usize..500) {
        let mut state = ProgressState::new(total);
        let mut last = 0u8;
        for _ in 0..total {
            let percent = state.record();
            prop_assert!(percent >= last);
            last = percent;
        }
        prop_assert_eq!(last, 100);
        prop_assert!(state.is_complete());
    }

    #[test]
    fn progress_matches_rounded_ratio(total in 1usize..1000, processed_seed in 0usize..1000) {
        let processed = processed_seed % (total + 1);
        let mut state = ProgressState::new(total);
        for _ in 0..processed {
            state.record();
        }
        let expected = ((processed * 100) as f64 / total as f64).round() as u8;
        prop_assert_eq!(state.percent(), expected);
    }
}
