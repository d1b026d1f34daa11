//! Tweening with easing curves.
//!
//! Widgets hold a [`Tween`] per animated property set and the host advances
//! it from its frame loop with the elapsed frame time. Nothing here reads a
//! clock, so animations are deterministic under test.

use embassy_time::Duration;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Easing curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Slow start
    EaseIn,
    /// Slow end
    EaseOut,
    /// Slow start and end
    #[default]
    EaseInOut,
}

impl Easing {
    /// Calculate the eased value for a given progress (0.0 to 1.0)
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// Values that can be interpolated between two endpoints
pub trait Lerp: Copy {
    /// Value at fraction `t` of the way from `self` to `to`
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for i32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        round_to_i32((*self as f32).lerp(&(*to as f32), t))
    }
}

impl Lerp for u32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        (*self as i32).lerp(&(*to as i32), t).max(0) as u32
    }
}

impl Lerp for Rgb565 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        let channel = |a: u8, b: u8| (a as i32).lerp(&(b as i32), t).clamp(0, 63) as u8;
        Rgb565::new(
            channel(self.r(), to.r()),
            channel(self.g(), to.g()),
            channel(self.b(), to.b()),
        )
    }
}

/// Round half away from zero without `std`
pub(crate) fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// An eased transition of a value from one endpoint to another.
///
/// Retargeting while running restarts from the current interpolated value, so
/// rapid back-and-forth triggers never jump.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// A tween that is already at rest on `value`
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: Duration::from_ticks(0),
            duration: Duration::from_ticks(0),
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start moving towards `to` from wherever the value currently is.
    pub fn retarget(&mut self, to: T, duration: Duration) {
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::from_ticks(0);
        self.duration = duration;
    }

    /// Advance by `dt`. Returns `true` if the value moved.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        true
    }

    /// Jump straight to the target.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.duration.as_ticks() == 0 {
            return 1.0;
        }
        self.elapsed.as_ticks() as f32 / self.duration.as_ticks() as f32
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if !self.is_running() {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.ease(self.progress()))
    }

    /// Value the tween is heading to
    pub fn target(&self) -> T {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.ease(0.0), 0.0);
            assert_eq!(easing.ease(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric_at_midpoint() {
        assert_eq!(Easing::EaseInOut.ease(0.5), 0.5);
        assert!(Easing::EaseInOut.ease(0.25) < 0.25);
        assert!(Easing::EaseInOut.ease(0.75) > 0.75);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.ease(-1.0), 0.0);
        assert_eq!(Easing::Linear.ease(2.0), 1.0);
    }

    #[test]
    fn test_i32_lerp_rounds() {
        assert_eq!(0i32.lerp(&-25, 0.5), -13);
        assert_eq!(10i32.lerp(&12, 0.5), 11);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        assert_eq!(Rgb565::BLACK.lerp(&Rgb565::WHITE, 0.0), Rgb565::BLACK);
        assert_eq!(Rgb565::BLACK.lerp(&Rgb565::WHITE, 1.0), Rgb565::WHITE);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::settled(0i32).with_easing(Easing::Linear);
        tween.retarget(-25, Duration::from_millis(300));

        assert!(tween.is_running());
        assert_eq!(tween.value(), 0);

        tween.advance(Duration::from_millis(150));
        assert_eq!(tween.value(), -13);

        tween.advance(Duration::from_millis(1000));
        assert!(!tween.is_running());
        assert_eq!(tween.value(), -25);
        assert!(!tween.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::settled(0i32).with_easing(Easing::Linear);
        tween.retarget(100, Duration::from_millis(100));
        tween.advance(Duration::from_millis(50));

        tween.retarget(0, Duration::from_millis(100));
        assert_eq!(tween.value(), 50);

        tween.finish();
        assert_eq!(tween.value(), 0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = Tween::settled(1.0f32);
        tween.retarget(2.0, Duration::from_ticks(0));
        assert!(!tween.is_running());
        assert_eq!(tween.value(), 2.0);
    }
}
