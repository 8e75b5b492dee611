//! Scalar easing curves.
//!
//! Each function remaps a normalized progress value before linear
//! interpolation, producing acceleration and deceleration effects. Inputs
//! are not clamped: the polynomial curves extrapolate outside `[0, 1]`,
//! and the circular curves take the square root of a negative argument
//! there and return NaN. Callers that need a bounded result clamp first.
//!
//! The three variants of each family sharpen the same shape: the ease-in
//! powers are quadratic, cubic, and octic; the bounce cubics deepen their
//! overshoot from variant 1 to 3.

/// Quadratic ease-in: slow start, fast finish.
pub fn ease_in1(t: f64) -> f64 {
    t.powi(2)
}

/// Cubic ease-in.
pub fn ease_in2(t: f64) -> f64 {
    t.powi(3)
}

/// Octic ease-in.
pub fn ease_in3(t: f64) -> f64 {
    t.powi(8)
}

/// Quadratic ease-out: fast start, slow finish.
pub fn ease_out1(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(2)
}

/// Cubic ease-out.
pub fn ease_out2(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Octic ease-out.
pub fn ease_out3(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(8)
}

/// Quadratic ease-in-out, piecewise at the midpoint.
pub fn ease_in_out1(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t.powi(2)
    } else {
        -2.0 * t.powi(2) + 4.0 * t - 1.0
    }
}

/// Cubic ease-in-out.
pub fn ease_in_out2(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t.powi(3)
    } else {
        4.0 * t.powi(3) - 12.0 * t.powi(2) + 12.0 * t - 3.0
    }
}

/// Octic ease-in-out.
pub fn ease_in_out3(t: f64) -> f64 {
    if t < 0.5 {
        128.0 * t.powi(8)
    } else {
        0.5 + (1.0 - (2.0 * (1.0 - t)).powi(8)) / 2.0
    }
}

/// Circular ease-in: a quarter-circle valley.
pub fn ease_in_circular(t: f64) -> f64 {
    1.0 - (1.0 - t.powi(2)).sqrt()
}

/// Circular ease-out: a quarter-circle hill.
pub fn ease_out_circular(t: f64) -> f64 {
    (-(t - 2.0) * t).sqrt()
}

/// Circular ease-in-out: valley then hill, joined at the midpoint.
pub fn ease_in_out_circular(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * t.powi(2)).sqrt())
    } else {
        0.5 * ((-4.0 * (t - 2.0) * t - 3.0).sqrt() + 1.0)
    }
}

/// Bounce-in, mildest overshoot: dips below 0 before accelerating.
pub fn ease_in_bounce1(t: f64) -> f64 {
    t.powi(2) * (2.0 * t - 1.0)
}

pub fn ease_in_bounce2(t: f64) -> f64 {
    t.powi(2) * (3.0 * t - 2.0)
}

pub fn ease_in_bounce3(t: f64) -> f64 {
    t.powi(2) * (4.0 * t - 3.0)
}

/// Bounce-out, mildest overshoot: rises above 1 before settling.
pub fn ease_out_bounce1(t: f64) -> f64 {
    t * (t * (2.0 * t - 5.0) + 4.0)
}

pub fn ease_out_bounce2(t: f64) -> f64 {
    t * (t * (3.0 * t - 7.0) + 5.0)
}

pub fn ease_out_bounce3(t: f64) -> f64 {
    t * (t * (4.0 * t - 9.0) + 6.0)
}

/// Bounce-in-out, piecewise cubics joined at the midpoint.
pub fn ease_in_out_bounce1(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(3) - 2.0 * t.powi(2)
    } else {
        8.0 * t.powi(3) - 22.0 * t.powi(2) + 20.0 * t - 5.0
    }
}

pub fn ease_in_out_bounce2(t: f64) -> f64 {
    if t < 0.5 {
        12.0 * t.powi(3) - 4.0 * t.powi(2)
    } else {
        12.0 * t.powi(3) - 32.0 * t.powi(2) + 28.0 * t - 7.0
    }
}

pub fn ease_in_out_bounce3(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(3) - 6.0 * t.powi(2)
    } else {
        16.0 * t.powi(3) - 42.0 * t.powi(2) + 36.0 * t - 9.0
    }
}
