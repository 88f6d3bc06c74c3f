use rand::Rng;

/// Sample the weekly delta uniformly from the closed interval `[-amplitude, amplitude]`.
///
/// Zero, negative-zero, and non-finite amplitudes yield `0.0`; a negative
/// amplitude is treated by magnitude. The unit interval is scaled afterwards so
/// the sampled span never overflows, even for amplitudes near `f64::MAX`.
pub fn weekly_delta<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    let a = amplitude.abs();
    if a == 0.0 || !a.is_finite() {
        return 0.0;
    }
    rng.gen_range(-1.0f64..=1.0) * a
}
