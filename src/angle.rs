use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians into (-pi, pi].
///
/// Angles already in range are returned unchanged. Only used on copies of
/// trajectory data for plotting; integration always works on the raw angle.
/// Non-finite input yields NaN.
pub fn wrap_angle(theta: f64) -> f64 {
    if !theta.is_finite() {
        return f64::NAN;
    }
    if theta > -PI && theta <= PI {
        return theta;
    }
    let wrapped = (theta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}
