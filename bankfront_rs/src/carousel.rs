use tracing::debug;

use crate::error::InteractionError;

/// Index into a fixed, non-empty slide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self, InteractionError> {
        if len == 0 {
            return Err(InteractionError::EmptyCarousel);
        }
        Ok(Self {
            current_index: 0,
            len,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an empty carousel cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.len;
        debug!(index = self.current_index, "carousel advanced");
    }

    pub fn retreat(&mut self) {
        self.current_index = (self.current_index + self.len - 1) % self.len;
        debug!(index = self.current_index, "carousel retreated");
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), InteractionError> {
        if index >= self.len {
            return Err(InteractionError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current_index = index;
        debug!(index, "carousel jumped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        assert_eq!(CarouselState::new(0), Err(InteractionError::EmptyCarousel));
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = CarouselState::new(1).expect("one slide");
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut carousel = CarouselState::new(4).expect("four slides");
        carousel.retreat();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn out_of_range_jump_leaves_index() {
        let mut carousel = CarouselState::new(3).expect("three slides");
        carousel.advance();
        assert_eq!(
            carousel.go_to(3),
            Err(InteractionError::SlideOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.current_index(), 1);
    }
}
