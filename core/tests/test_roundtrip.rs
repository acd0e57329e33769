// Round-trip composition: streams assembled the way the hardware
// test-vector generators assemble them come back out, per consumer,
// exactly as the generator predicted, boundary words included.

#[cfg(test)]
mod tests {
    use align_core::align::DataAligner;
    use align_core::fixture::random_fixture;
    use proptest::prelude::*;

    fn check(width: usize, consumers: usize, blocks: usize, max_words: usize, seed: u64) {
        let fixture = random_fixture(width, consumers, blocks, max_words, seed).unwrap();
        let mut aligner =
            DataAligner::new(width, consumers, fixture.initial_misalignment).unwrap();
        let streams = aligner
            .run(fixture.raw_words.clone(), &fixture.schedule)
            .unwrap();
        assert_eq!(
            streams, fixture.expected,
            "width={width} consumers={consumers} seed={seed}"
        );
    }

    #[test]
    fn canonical_width_three_consumers() {
        check(64, 3, 4, 6, 0x5EED);
    }

    #[test]
    fn canonical_width_five_consumers_sparse_blocks() {
        // Zero-word blocks exercise the stall path heavily.
        check(64, 5, 20, 2, 42);
    }

    #[test]
    fn narrow_bus() {
        check(8, 2, 8, 3, 7);
    }

    #[test]
    fn single_consumer_many_blocks() {
        check(32, 1, 32, 4, 0xDEAD_BEEF);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn roundtrip_holds_for_arbitrary_streams(
            width in 5usize..48,
            consumers in 1usize..5,
            blocks in 1usize..6,
            max_words in 0usize..4,
            seed in any::<u64>(),
        ) {
            let fixture = random_fixture(width, consumers, blocks, max_words, seed).unwrap();
            let mut aligner =
                DataAligner::new(width, consumers, fixture.initial_misalignment).unwrap();
            let streams = aligner
                .run(fixture.raw_words.clone(), &fixture.schedule)
                .unwrap();
            prop_assert_eq!(streams, fixture.expected);
        }

        // The telemetry word accounting matches the schedule exactly.
        #[test]
        fn counters_match_schedule(
            seed in any::<u64>(),
        ) {
            let fixture = random_fixture(64, 3, 3, 5, seed).unwrap();
            let mut aligner = DataAligner::new(64, 3, fixture.initial_misalignment).unwrap();
            aligner.run(fixture.raw_words.clone(), &fixture.schedule).unwrap();

            let counters = aligner.counters();
            let data_words: usize = fixture.schedule.iter().sum();
            prop_assert_eq!(counters.data_words, data_words as u64);
            prop_assert_eq!(counters.boundary_words, fixture.schedule.len() as u64);
            prop_assert_eq!(counters.segments, fixture.schedule.len() as u64);
            prop_assert_eq!(
                counters.words_out,
                counters.data_words + counters.boundary_words
            );
            prop_assert!(counters.words_in as usize <= fixture.raw_words.len());
        }
    }
}
