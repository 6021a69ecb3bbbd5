//! Band plan for the fixed EU configuration (87.5-108.0 MHz, 100 kHz spacing).

/// Lowest tunable frequency in MHz.
pub const MIN_MHZ: f32 = 87.5;

/// Highest tunable frequency in MHz.
pub const MAX_MHZ: f32 = 108.0;

/// Channel spacing in MHz.
pub const SPACING_MHZ: f32 = 0.1;

/// Channel number of [`MAX_MHZ`].
pub const MAX_CHANNEL: u16 = 205;

/// Clamps `mhz` into the band.
///
/// Returns the clamped value and whether clamping changed it. NaN is treated
/// as below the band.
pub fn clamp(mhz: f32) -> (f32, bool) {
    if mhz.is_nan() || mhz < MIN_MHZ {
        (MIN_MHZ, true)
    } else if mhz > MAX_MHZ {
        (MAX_MHZ, true)
    } else {
        (mhz, false)
    }
}

/// Converts an in-band frequency to a channel number.
///
/// The quotient is truncated towards zero, not rounded; callers clamp first.
pub fn channel_for(mhz: f32) -> u16 {
    ((mhz - MIN_MHZ) / SPACING_MHZ) as u16
}

/// Converts a channel number back to MHz.
pub fn frequency_for(channel: u16) -> f32 {
    MIN_MHZ + channel as f32 * SPACING_MHZ
}
