// Pure-function contract of the two-word byte window:
// identity at zero shift, purity, and exact slice placement.

#[cfg(test)]
mod tests {
    use align_core::align::window::{bit_window, slice_at};
    use proptest::prelude::*;

    fn seq(start: u8, len: usize) -> Vec<u8> {
        (0..len).map(|i| start.wrapping_add(i as u8)).collect()
    }

    #[test]
    fn zero_shift_is_identity() {
        let prev = seq(0x10, 8);
        let cur = seq(0x80, 8);
        assert_eq!(bit_window(&prev, &cur, 0).as_ref(), cur.as_slice());
    }

    #[test]
    fn full_shift_takes_prev_tail() {
        let prev = seq(0x10, 8);
        let cur = seq(0x80, 8);
        // Shift W-1: all but one byte come from prev.
        let out = bit_window(&prev, &cur, 7);
        assert_eq!(out[..7], prev[1..]);
        assert_eq!(out[7], cur[0]);
    }

    #[test]
    fn window_matches_concatenation_slice() {
        let prev = seq(0x00, 16);
        let cur = seq(0x40, 16);
        let mut concat = prev.clone();
        concat.extend_from_slice(&cur);

        for m in 0..16 {
            let out = bit_window(&prev, &cur, m);
            assert_eq!(out.as_ref(), &concat[16 - m..32 - m], "shift {m}");
        }
    }

    #[test]
    fn slice_at_endpoints() {
        let prev = seq(1, 8);
        let cur = seq(9, 8);
        assert_eq!(slice_at(&prev, &cur, 0).as_ref(), prev.as_slice());
        assert_eq!(slice_at(&prev, &cur, 8).as_ref(), cur.as_slice());
        let mid = slice_at(&prev, &cur, 3);
        assert_eq!(mid[..5], prev[3..]);
        assert_eq!(mid[5..], cur[..3]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn shift_at_width_is_a_contract_violation() {
        let prev = seq(0, 8);
        let cur = seq(8, 8);
        let _ = bit_window(&prev, &cur, 8);
    }

    #[test]
    #[should_panic(expected = "share one width")]
    fn mismatched_pair_is_a_contract_violation() {
        let _ = bit_window(&seq(0, 8), &seq(0, 9), 1);
    }

    proptest! {
        // Identity under zero misalignment, for arbitrary word contents.
        #[test]
        fn identity_holds_for_any_words(
            prev in proptest::collection::vec(any::<u8>(), 64),
            cur in proptest::collection::vec(any::<u8>(), 64),
        ) {
            let out = bit_window(&prev, &cur, 0);
            prop_assert_eq!(out.as_ref(), cur.as_slice());
        }

        // Repeated extraction with identical arguments is identical.
        #[test]
        fn extraction_is_pure(
            prev in proptest::collection::vec(any::<u8>(), 32),
            cur in proptest::collection::vec(any::<u8>(), 32),
            m in 0usize..32,
        ) {
            let a = bit_window(&prev, &cur, m);
            let b = bit_window(&prev, &cur, m);
            prop_assert_eq!(a, b);
        }
    }
}
