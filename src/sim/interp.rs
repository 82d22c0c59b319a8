//! Interpolation curves for choreographed moves and tints
//!
//! All curves map `t` in [0, 1] to a blend factor with f(0) = 0 and f(1) = 1.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interp {
    #[default]
    Linear,
    /// Smootherstep
    Fade,
    /// Exponential ease-in, base 2, power 5
    Exp5In,
    /// Exponential ease-in, base 2, power 10
    Exp10In,
    /// Backs up slightly before moving (overshoot scale 2)
    SwingIn,
    CircleIn,
    CircleOut,
}

impl Interp {
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Interp::Linear => t,
            Interp::Fade => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
            Interp::Exp5In => exp_in(t, 5.0),
            Interp::Exp10In => exp_in(t, 10.0),
            Interp::SwingIn => {
                let scale = 2.0;
                t * t * ((scale + 1.0) * t - scale)
            }
            Interp::CircleIn => 1.0 - (1.0 - t * t).sqrt(),
            Interp::CircleOut => {
                let t = t - 1.0;
                (1.0 - t * t).sqrt()
            }
        }
    }
}

/// Exponential ease-in rescaled so it starts exactly at 0
fn exp_in(t: f32, power: f32) -> f32 {
    let min = 2f32.powf(-power);
    let scale = 1.0 / (1.0 - min);
    (2f32.powf(power * (t - 1.0)) - min) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Interp; 7] = [
        Interp::Linear,
        Interp::Fade,
        Interp::Exp5In,
        Interp::Exp10In,
        Interp::SwingIn,
        Interp::CircleIn,
        Interp::CircleOut,
    ];

    #[test]
    fn test_endpoints() {
        for interp in ALL {
            assert!(interp.apply(0.0).abs() < 1e-5, "{interp:?} at 0");
            assert!((interp.apply(1.0) - 1.0).abs() < 1e-5, "{interp:?} at 1");
        }
    }

    #[test]
    fn test_swing_backs_up_first() {
        assert!(Interp::SwingIn.apply(0.2) < 0.0);
    }

    #[test]
    fn test_ease_in_lags_linear() {
        assert!(Interp::Exp10In.apply(0.5) < 0.5);
        assert!(Interp::CircleIn.apply(0.5) < 0.5);
        assert!(Interp::CircleOut.apply(0.5) > 0.5);
    }

    proptest! {
        #[test]
        fn prop_input_is_clamped(t in -10.0f32..10.0) {
            for interp in ALL {
                let v = interp.apply(t);
                prop_assert!(v.is_finite());
                if t <= 0.0 {
                    prop_assert!(v.abs() < 1e-5);
                }
                if t >= 1.0 {
                    prop_assert!((v - 1.0).abs() < 1e-5);
                }
            }
        }
    }
}
