//! Scalar interpolation helpers shared by the tile renderer and the classifier

use num_traits::Float;

/// Linear interpolation between `a` and `b`
///
/// `t = 0` returns `a` exactly and `t = 1` returns `b` exactly for the
/// values the renderer feeds in (connection states of 0 and 1), so a settled
/// frame reproduces the target geometry without drift.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Clamp an interpolation factor into `[0, 1]`
///
/// NaN collapses to zero so a corrupted animation clock draws the previous state
/// rather than garbage.
pub fn clamp_unit<T: Float>(t: T) -> T {
    if t.is_nan() {
        return T::zero();
    }
    t.max(T::zero()).min(T::one())
}

/// Round half toward positive infinity
///
/// Pixel sampling positions are rounded this way so `-2.5` maps to `-2`, keeping
/// sample rings symmetric around the image centre.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Interpolation factor of animation frame `frame` for a fixed step
///
/// Derived from the integer frame counter instead of accumulating the step so
/// the final frame lands on exactly `1.0`.
pub fn frame_factor(frame: u32, step: f64) -> f64 {
    clamp_unit(f64::from(frame) * step)
}
