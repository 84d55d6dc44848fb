mod spectrum;

pub use spectrum::Spectrum;

use num::Float;

/// Linear interpolation from `x` towards `y` by `a`, as `x + a * (y - x)`.
#[inline]
pub fn lerp<T>(x: T, y: T, a: T) -> T
where
    T: Float,
{
    x + a * (y - x)
}

/// Clamps `v` into `[min, max]`.
#[inline]
pub fn clamp<T>(v: T, min: T, max: T) -> T
where
    T: Float,
{
    v.max(min).min(max)
}

/// Raises `base` to `exp` in double precision and truncates the result back.
#[inline]
pub fn powf(base: f32, exp: f64) -> f32 {
    (base as f64).powf(exp) as f32
}
