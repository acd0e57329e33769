// Counter arithmetic and the frozen snapshot form.

#[cfg(test)]
mod tests {
    use align_core::telemetry::{TelemetryCounters, TelemetrySnapshot};

    #[test]
    fn counters_accumulate() {
        let mut counters = TelemetryCounters::default();
        counters.add_raw_word();
        counters.add_raw_word();
        counters.add_data_word(64);
        counters.add_boundary_word(48);
        counters.add_stall();

        assert_eq!(counters.words_in, 2);
        assert_eq!(counters.words_out, 2);
        assert_eq!(counters.data_words, 1);
        assert_eq!(counters.boundary_words, 1);
        assert_eq!(counters.segments, 1);
        assert_eq!(counters.stall_cycles, 1);
        // One full word plus the carried bytes of the boundary.
        assert_eq!(counters.bytes_delivered, 64 + 48);
    }

    #[test]
    fn snapshot_freezes_the_counters() {
        let mut counters = TelemetryCounters::default();
        for _ in 0..10 {
            counters.add_raw_word();
        }
        for _ in 0..6 {
            counters.add_data_word(16);
        }
        counters.add_boundary_word(5);
        counters.add_boundary_word(16);
        counters.add_stall();

        let snapshot = TelemetrySnapshot::from_counters(&counters, 4);
        assert_eq!(snapshot.words_in, 10);
        assert_eq!(snapshot.words_out, 8);
        assert_eq!(snapshot.segments, 2);
        assert_eq!(snapshot.bytes_delivered, 6 * 16 + 5 + 16);
        assert_eq!(snapshot.consumers, 4);
        assert!((snapshot.stall_ratio() - 1.0 / 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_run_has_zero_stall_ratio() {
        let snapshot = TelemetrySnapshot::from_counters(&TelemetryCounters::default(), 1);
        assert_eq!(snapshot.stall_ratio(), 0.0);
    }

    #[test]
    fn snapshot_json_roundtrip() {
        let mut counters = TelemetryCounters::default();
        counters.add_raw_word();
        counters.add_data_word(32);
        counters.add_boundary_word(7);

        let snapshot = TelemetrySnapshot::from_counters(&counters, 2);
        let json = snapshot.to_json().unwrap();
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
