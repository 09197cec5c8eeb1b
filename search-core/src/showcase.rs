//! Timer-driven state for the home page carousel and "how it works" stepper.

use std::time::Duration;

pub const CAROUSEL_FRAME: Duration = Duration::from_millis(16);
pub const CAROUSEL_STEP_PX: f64 = 0.5;
pub const STEPPER_INTERVAL: Duration = Duration::from_secs(4);

/// Horizontal offset of a strip rendered twice back to back, so wrapping at
/// one strip width is seamless.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Carousel {
    offset: f64,
    paused: bool,
}

impl Carousel {
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn tick(&mut self, step: f64, strip_width: f64) {
        if self.paused {
            return;
        }
        if strip_width <= 0.0 {
            self.offset = 0.0;
            return;
        }
        self.offset = (self.offset + step) % strip_width;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCycle {
    current: usize,
    len: usize,
}

impl StepCycle {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, step: usize) {
        if step < self.len {
            self.current = step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = Carousel::default();
        carousel.tick(60.0, 100.0);
        carousel.tick(60.0, 100.0);
        assert_eq!(carousel.offset(), 20.0);
    }

    #[test]
    fn test_carousel_pause() {
        let mut carousel = Carousel::default();
        carousel.tick(10.0, 100.0);
        carousel.pause();
        carousel.tick(10.0, 100.0);
        assert_eq!(carousel.offset(), 10.0);
        carousel.resume();
        carousel.tick(10.0, 100.0);
        assert_eq!(carousel.offset(), 20.0);
    }

    #[test]
    fn test_carousel_without_width() {
        let mut carousel = Carousel::default();
        carousel.tick(10.0, 0.0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_stepper_cycles() {
        let mut steps = StepCycle::new(3);
        steps.advance();
        steps.advance();
        assert_eq!(steps.current(), 2);
        steps.advance();
        assert_eq!(steps.current(), 0);
    }

    #[test]
    fn test_stepper_select() {
        let mut steps = StepCycle::new(4);
        steps.select(2);
        assert_eq!(steps.current(), 2);
        steps.select(9);
        assert_eq!(steps.current(), 2);
        steps.advance();
        assert_eq!(steps.current(), 3);
    }

    #[test]
    fn test_empty_stepper() {
        let mut steps = StepCycle::new(0);
        steps.advance();
        assert_eq!(steps.current(), 0);
    }
}
