use super::*;

#[test]
fn clamped_edges_return_range_endpoints() {
    let v = interpolate_clamped(-5.0, [0.0, 10.0], [1.0, 3.0]);
    assert_eq!(v, 1.0);
    let v = interpolate_clamped(50.0, [0.0, 10.0], [1.0, 3.0]);
    assert_eq!(v, 3.0);
}

#[test]
fn midpoint_maps_to_range_midpoint() {
    let v = interpolate(5.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::CLAMP);
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn extend_continues_the_line() {
    let v = interpolate(40.0, [0.0, 32.0], [4.0, 32.0], Extrapolation::EXTEND);
    assert!((v - 39.0).abs() < 1e-12);
    let v = interpolate(-8.0, [0.0, 8.0], [0.0, 1.0], Extrapolation::CLAMP_RIGHT);
    assert!((v + 1.0).abs() < 1e-12);
}

#[test]
fn zero_width_domain_is_a_step() {
    assert_eq!(interpolate_clamped(1.0, [2.0, 2.0], [0.0, 1.0]), 0.0);
    assert_eq!(interpolate_clamped(2.0, [2.0, 2.0], [0.0, 1.0]), 1.0);
}

#[test]
fn eased_variant_respects_endpoints() {
    let ease = Ease::OutCubic;
    assert_eq!(interpolate_eased(-1.0, [0.0, 10.0], [0.9, 1.0], ease), 0.9);
    assert!((interpolate_eased(11.0, [0.0, 10.0], [0.9, 1.0], ease) - 1.0).abs() < 1e-12);
    let mid = interpolate_eased(5.0, [0.0, 10.0], [0.0, 1.0], ease);
    assert!(mid > 0.5);
}

#[test]
fn unit_wave_remap() {
    assert_eq!(remap_unit_wave(-1.0, 0.3, 1.0), 0.3);
    assert_eq!(remap_unit_wave(1.0, 0.3, 1.0), 1.0);
}
