use std::collections::HashSet;
use std::rc::Rc;

use proptest::prelude::*;
use quickcheck::quickcheck;
use shapyter::{BitMatrix, Render, Shapifier};

quickcheck! {
    fn pool_shrinks_by_distinct_values(seed: u64, values: Vec<u8>) -> bool {
        let values: Vec<u8> = values.into_iter().take(200).collect();
        let distinct: HashSet<u8> = values.iter().copied().collect();
        let mut s: Shapifier<u8> = Shapifier::new(Some(seed));
        match s.apply(&values) {
            Ok(list) => {
                distinct.len() <= 45
                    && list.len() == values.len()
                    && s.len() == distinct.len()
                    && s.remaining() == 45 - distinct.len()
            }
            Err(_) => distinct.len() > 45 && s.is_empty(),
        }
    }
}

quickcheck! {
    fn equal_values_share_a_glyph(seed: u64, values: Vec<u8>) -> bool {
        let values: Vec<u8> = values.into_iter().map(|v| v % 40).collect();
        let mut s: Shapifier<u8> = Shapifier::new(Some(seed));
        let list = s.apply(&values).unwrap();
        values.iter().zip(list.iter()).all(|(v, g)| {
            values.iter().zip(list.iter()).all(|(w, h)| (v == w) == Rc::ptr_eq(g, h))
        })
    }
}

proptest! {
    #[test]
    fn seeded_runs_are_reproducible(seed in any::<u64>(), values in prop::collection::vec(0u16..30, 0..60)) {
        let mut a: Shapifier<u16> = Shapifier::new(Some(seed));
        let mut b: Shapifier<u16> = Shapifier::new(Some(seed));
        prop_assert_eq!(a.apply(&values).unwrap().render(), b.apply(&values).unwrap().render());
    }

    #[test]
    fn similarity_stays_in_unit_interval(bits in 1u32..=64, a in any::<u64>(), b in any::<u64>()) {
        let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        let x = BitMatrix::new((a & mask) as i128, bits).unwrap();
        let y = BitMatrix::new((b & mask) as i128, bits).unwrap();
        let s = x.similarity(&y).unwrap();
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert_eq!(s, y.similarity(&x).unwrap());
    }

    #[test]
    fn values_at_or_past_width_are_rejected(bits in 1u32..=32, extra in 0i128..1000) {
        prop_assert!(BitMatrix::new((1i128 << bits) + extra, bits).is_err());
        prop_assert!(BitMatrix::new(-1 - extra, bits).is_err());
    }

    #[test]
    fn grid_has_room_for_every_bit(bits in 1u32..=127) {
        let m = BitMatrix::new(0, bits).unwrap();
        let side = m.side();
        prop_assert!(side * side >= bits);
        prop_assert!((side - 1) * (side - 1) < bits);
        prop_assert_eq!(m.render().matches("<rect").count() as u32, side * side);
    }
}
