use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::normalize::normalize_radians;

/// A planar angle, always held in (-π, π] radians.
///
/// Outside this module an `Angle` can only be built through
/// [`Angle::from_radians`] or [`Angle::from_degrees`], and every operator
/// re-normalizes its result.
#[derive(Default, Debug, Copy, Clone, PartialEq, PartialOrd, derive_more::Into)]
pub struct Angle {
    rads: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { rads: 0.0 };
    pub const HALF_TURN: Angle = Angle { rads: PI };
    pub const QUARTER_TURN: Angle = Angle { rads: FRAC_PI_2 };

    pub fn zero() -> Self {
        Self::ZERO
    }
    pub fn from_radians(rad: f64) -> Self {
        Angle {
            rads: normalize_radians(rad),
        }
    }
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_radians(deg.to_radians())
    }
    pub fn radians(&self) -> f64 {
        self.rads
    }
    pub fn degrees(&self) -> f64 {
        self.rads.to_degrees()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.rads + rhs.rads)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.rads - rhs.rads)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.rads * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.rads / rhs)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_radians(-self.rads)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Angle {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Angle {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} deg", self.degrees())
    }
}
