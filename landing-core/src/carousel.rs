//! Gallery slide index.
//!
//! All transitions are modulo the slide count, so the index can never leave
//! `[0, len)`. The timer and the manual controls share the same arithmetic;
//! pressing "next" does not reset the timer phase.

use std::num::NonZeroUsize;

use crate::error::CarouselError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

#[allow(clippy::len_without_is_empty)]
impl Carousel {
    /// Start at the first slide.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        let len = NonZeroUsize::new(len).ok_or(CarouselError::Empty)?;
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Timer tick.
    pub fn tick(&mut self) {
        self.next();
    }

    /// "Next" control.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    /// "Previous" control.
    pub fn prev(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    /// Dot indicator `k`. Out-of-range picks leave the index untouched.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len.get() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    /// Horizontal offset of the slide track, in percent of the container
    /// width: `-index * 100`.
    pub fn offset_percent(&self) -> f64 {
        0.0 - self.index as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn ticks_wrap() {
        let mut carousel = Carousel::new(5).unwrap();
        for _ in 0..5 {
            carousel.tick();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.prev();
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn select_out_of_range_keeps_index() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.select(3).unwrap();
        let err = carousel.select(5).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 5, len: 5 });
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn offset_follows_index() {
        let mut carousel = Carousel::new(5).unwrap();
        assert_eq!(carousel.offset_percent(), 0.0);
        carousel.select(2).unwrap();
        assert_eq!(carousel.offset_percent(), -200.0);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.next();
        carousel.prev();
        carousel.tick();
        assert_eq!(carousel.index(), 0);
    }
}
