#![forbid(unsafe_code)]

//! Property-based invariants for the scroll offset sequence.
//!
//! Within one controller lifetime the offset sequence must be strictly
//! decreasing by exactly `scroll_speed` per step until the wrap, then
//! reset to the starting position. No offset is skipped or repeated out
//! of order.

use marquee_runtime::advance_offset;
use proptest::prelude::*;

proptest! {
    #[test]
    fn steps_decrease_by_exactly_speed(
        viewport in 1u32..1024,
        total in 1u32..4096,
        speed in 1u32..64,
    ) {
        let start = viewport as i32;
        let mut offset = start;
        let mut wrapped = false;
        for _ in 0..20_000 {
            let next = advance_offset(offset, speed, total, viewport);
            if next == offset - speed as i32 {
                prop_assert!(next >= -(total as i32));
            } else {
                // The only other legal move is the wrap, taken exactly
                // when the next step would pass -(total).
                prop_assert_eq!(next, start);
                prop_assert!(offset - (speed as i32) < -(total as i32));
                wrapped = true;
            }
            offset = next;
            if wrapped {
                break;
            }
        }
        prop_assert!(wrapped, "sequence never wrapped");
    }

    #[test]
    fn cycle_visits_no_offset_twice(
        viewport in 1u32..256,
        total in 1u32..512,
        speed in 1u32..32,
    ) {
        let start = viewport as i32;
        let mut offset = start;
        let mut seen = std::collections::HashSet::new();
        loop {
            prop_assert!(seen.insert(offset), "offset {} repeated before wrap", offset);
            let next = advance_offset(offset, speed, total, viewport);
            if next >= offset {
                // Wrapped (degenerate configs wrap straight back to the
                // starting offset).
                break;
            }
            offset = next;
        }
    }
}
