//! Computed smooth scrolling for hosts without native support.

/// Ease-in-out interpolation between two scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollAnimation {
    /// Animation from `from` to `to`; negative targets are clamped to the top.
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to: to.max(0.0),
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Final offset.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the animation has reached its end after `elapsed_ms`.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Offset to show `elapsed_ms` after the start.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollAnimation;

    #[test]
    fn starts_and_ends_on_the_requested_offsets() {
        let animation = ScrollAnimation::new(100.0, 920.0, 400.0);
        assert_eq!(animation.position_at(0.0), 100.0);
        assert_eq!(animation.position_at(400.0), 920.0);
        assert_eq!(animation.position_at(10_000.0), 920.0);
        assert!(animation.is_finished(400.0));
        assert!(!animation.is_finished(399.0));
    }

    #[test]
    fn midpoint_is_halfway_and_motion_is_monotonic() {
        let animation = ScrollAnimation::new(0.0, 1000.0, 400.0);
        assert!((animation.position_at(200.0) - 500.0).abs() < 1e-9);

        let mut previous = animation.position_at(0.0);
        for step in 1..=40 {
            let current = animation.position_at(f64::from(step) * 10.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn scrolling_up_and_negative_targets() {
        let up = ScrollAnimation::new(800.0, 200.0, 300.0);
        assert!(up.position_at(150.0) < 800.0);
        assert_eq!(up.position_at(300.0), 200.0);

        let clamped = ScrollAnimation::new(300.0, -40.0, 300.0);
        assert_eq!(clamped.target(), 0.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let animation = ScrollAnimation::new(0.0, 500.0, 0.0);
        assert_eq!(animation.position_at(0.0), 500.0);
    }
}
