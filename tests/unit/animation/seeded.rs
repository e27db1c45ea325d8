use super::*;

#[test]
fn same_seed_same_value() {
    for i in [0u64, 1, 7, 500, 4119] {
        assert_eq!(seeded(i).to_bits(), seeded(i).to_bits());
    }
}

#[test]
fn values_in_unit_interval() {
    for i in 0..10_000u64 {
        let v = seeded(i);
        assert!((0.0..1.0).contains(&v), "seed {i} -> {v}");
    }
}

#[test]
fn matches_reference_formula() {
    let x = (127.1f64 * 3.0 + 311.7).sin() * 43758.5453;
    assert_eq!(seeded(3), x - x.floor());
}

#[test]
fn channels_offset_the_seed() {
    let ch = SeedChannel(500);
    assert_eq!(ch.at(7), seeded(507));
    let v = SeedChannel(1000).span(3, 0.5, 1.8);
    assert!((0.5..2.3).contains(&v));
}
