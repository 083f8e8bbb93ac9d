mod angle;
pub use angle::Angle;

mod normalize;
pub use normalize::{normalize_radians, DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};

pub const FULL_TURN_RADIANS: f64 = std::f64::consts::TAU;
pub const HALF_TURN: Angle = Angle::HALF_TURN;
pub const QUARTER_TURN: Angle = Angle::QUARTER_TURN;

pub fn deg(x: f64) -> Angle {
    Angle::from_degrees(x)
}
pub fn rad(x: f64) -> Angle {
    Angle::from_radians(x)
}
