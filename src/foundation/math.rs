pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Undo alpha premultiplication for one channel, rounding to nearest.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

/// Fractional part with the sign convention of `x - floor(x)`, always in `[0, 1)`.
pub(crate) fn fract(x: f64) -> f64 {
    let f = x - x.floor();
    // `x - floor(x)` can round up to exactly 1.0 for tiny negative inputs.
    if f >= 1.0 { 0.0 } else { f }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
