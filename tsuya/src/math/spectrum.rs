use approx::{AbsDiffEq, RelativeEq};
use num::Float;
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A color stored as RGB
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Spectrum<T>
where
    T: Float,
{
    /// The r component of the color
    pub r: T,
    /// The g component of the color
    pub g: T,
    /// The b component of the color
    pub b: T,
}

impl<T> Spectrum<T>
where
    T: Float,
{
    /// Constructs a new `Spectrum`.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Self {
        let v = Self { r, g, b };
        debug_assert!(!v.has_nans());
        v
    }

    /// Constructs a new `Spectrum` with all components set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Constructs a new `Spectrum` of 0s.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Constructs a new `Spectrum` of 1s.
    #[inline]
    pub fn ones() -> Self {
        Self::splat(T::one())
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns `true` if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Returns `true` if this `Spectrum` is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        debug_assert!(!self.has_nans());

        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    /// Returns the spectrum with each component clamped to `[min, max]`.
    #[inline]
    pub fn clamped(&self, min: T, max: T) -> Self {
        self.map(|c| c.max(min).min(max))
    }

    /// Linear interpolation from `self` towards `other` by `t`.
    #[inline]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        Self {
            r: super::lerp(self.r, other.r, t),
            g: super::lerp(self.g, other.g, t),
            b: super::lerp(self.b, other.b, t),
        }
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.r, self.g, self.b]
    }
}

impl<T> Default for Spectrum<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T> From<[T; 3]> for Spectrum<T>
where
    T: Float,
{
    fn from(v: [T; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Spectrum<f32>> for Spectrum<f64> {
    fn from(v: Spectrum<f32>) -> Self {
        Self::new(v.r as f64, v.g as f64, v.b as f64)
    }
}

impl Spectrum<f64> {
    /// Rounds each component to `f32`.
    #[inline]
    pub fn to_f32(&self) -> Spectrum<f32> {
        Spectrum::new(self.r as f32, self.g as f32, self.b as f32)
    }
}

impl<T> Index<usize> for Spectrum<T>
where
    T: Float,
{
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Spectrum index {} out of bounds", i),
        }
    }
}

impl<T> IndexMut<usize> for Spectrum<T>
where
    T: Float,
{
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Spectrum index {} out of bounds", i),
        }
    }
}

impl<T> Neg for Spectrum<T>
where
    T: Float,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

macro_rules! impl_component_op {
    ( $( $op_trait:ident $op_fn:ident $assign_trait:ident $assign_fn:ident $op:tt ),+ ) => {
        $(
            impl<T> $op_trait for Spectrum<T>
            where
                T: Float,
            {
                type Output = Self;

                #[inline]
                fn $op_fn(self, other: Self) -> Self {
                    Self {
                        r: self.r $op other.r,
                        g: self.g $op other.g,
                        b: self.b $op other.b,
                    }
                }
            }

            impl<T> $op_trait<T> for Spectrum<T>
            where
                T: Float,
            {
                type Output = Self;

                #[inline]
                fn $op_fn(self, other: T) -> Self {
                    Self {
                        r: self.r $op other,
                        g: self.g $op other,
                        b: self.b $op other,
                    }
                }
            }

            impl<T> $assign_trait for Spectrum<T>
            where
                T: Float,
            {
                #[inline]
                fn $assign_fn(&mut self, other: Self) {
                    *self = *self $op other;
                }
            }

            impl<T> $assign_trait<T> for Spectrum<T>
            where
                T: Float,
            {
                #[inline]
                fn $assign_fn(&mut self, other: T) {
                    *self = *self $op other;
                }
            }
        )*
    };
}
impl_component_op!(
    Add add AddAssign add_assign +,
    Sub sub SubAssign sub_assign -,
    Mul mul MulAssign mul_assign *,
    Div div DivAssign div_assign /
);

impl<T> AbsDiffEq for Spectrum<T>
where
    T: Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T> RelativeEq for Spectrum<T>
where
    T: Float + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}
