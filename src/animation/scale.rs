// src/animation/scale.rs
//
// Scale interpolation math shared by the state machine and the figure drawer.
// A top-level scale is split into n partitions that fill one after another;
// partition i stays at 0 until the parent scale passes i/n.

/// Per-tick scale increment.
pub const SC_GAP: f32 = 0.05;

/// Divisor for the interpolation-endpoint switch. Slightly above 0.5 so the
/// first half-partition completes before the switch flips.
pub const SC_DIV: f32 = 0.51;

/// Quantizes a scale into the 0/1 switch used by `mirror_value`.
pub fn scale_factor(scale: f32) -> f32 {
    (scale / SC_DIV).floor()
}

/// Fraction of partition `i` of `n` filled at the given parent scale,
/// rescaled to [0, 1].
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let n = n as f32;
    let clamped = (scale - i as f32 / n).max(0.0);
    clamped.min(1.0 / n) * n
}

/// Steps between 1/a and 1/b as the scale crosses `SC_DIV`. Not a smooth
/// blend: `scale_factor` floors, so the switch is all-or-nothing.
pub fn mirror_value(scale: f32, a: f32, b: f32) -> f32 {
    let k = scale_factor(scale);
    (1.0 - k) / a + k / b
}

/// Signed per-tick delta for a node animating in the given direction.
pub fn update_delta(scale: f32, dir: f32, a: f32, b: f32) -> f32 {
    mirror_value(scale, a, b) * dir * SC_GAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_scale_bounds() {
        let mut scale = 0.0;
        while scale <= 3.0 {
            for i in 0..4 {
                let sc = divide_scale(scale, i, 4);
                assert!((0.0..=1.0).contains(&sc), "out of range at scale {}", scale);
            }
            scale += 0.01;
        }
    }

    #[test]
    fn test_divide_scale_staggered_start() {
        // partition 1 of 2 stays empty until the parent scale passes 1/2
        assert_eq!(divide_scale(0.4, 1, 2), 0.0);
        assert_eq!(divide_scale(0.5, 1, 2), 0.0);
        assert!((divide_scale(0.6, 1, 2) - 0.2).abs() < 1e-6);
        assert!((divide_scale(1.0, 1, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_divide_scale_saturates() {
        assert!((divide_scale(2.0, 0, 2) - 1.0).abs() < 1e-6);
        assert!((divide_scale(2.0, 1, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_divide_scale_monotonic() {
        for i in 0..5 {
            let mut previous = 0.0;
            let mut scale = 0.0;
            while scale <= 2.0 {
                let sc = divide_scale(scale, i, 5);
                assert!(sc >= previous, "decreased at scale {}", scale);
                previous = sc;
                scale += 0.01;
            }
        }
    }

    #[test]
    fn test_scale_factor_steps() {
        assert_eq!(scale_factor(0.0), 0.0);
        assert_eq!(scale_factor(0.5), 0.0);
        assert_eq!(scale_factor(0.51), 1.0);
        assert_eq!(scale_factor(1.0), 1.0);
        assert_eq!(scale_factor(1.02), 2.0);
    }

    #[test]
    fn test_mirror_value_switch() {
        // below the divisor the first endpoint applies, above it the second
        assert!((mirror_value(0.3, 1.0, 10.0) - 1.0).abs() < 1e-6);
        assert!((mirror_value(0.6, 1.0, 10.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_update_delta_direction() {
        assert!(update_delta(0.3, 1.0, 1.0, 10.0) > 0.0);
        assert!(update_delta(0.9, -1.0, 1.0, 10.0) < 0.0);
        assert_eq!(update_delta(0.3, 0.0, 1.0, 10.0), 0.0);
    }
}
