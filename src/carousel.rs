//! Cyclic image carousel
//!
//! Keeps a position into a fixed, non-empty list of image identifiers and
//! moves it forward or backward with wrap-around. The position is the only
//! mutable state and is never outside `[0, N)`: every transition computes
//! the next value from the previous one before storing it.

use std::fmt;
use std::sync::Arc;

/// Errors raised when building a carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The image list was empty (a carousel needs at least one image)
    EmptyImageSet,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImageSet => write!(f, "Carousel needs at least one image"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Ordered, immutable, non-empty list of image identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    images: Arc<[String]>,
}

impl ImageSet {
    /// Build an image set, rejecting an empty list
    pub fn new<I, S>(images: I) -> Result<Self, CarouselError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(CarouselError::EmptyImageSet);
        }
        Ok(Self {
            images: images.into(),
        })
    }

    /// Number of images (always >= 1)
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Image identifier at `index`, wrapped into range
    pub fn get(&self, index: usize) -> &str {
        &self.images[index % self.images.len()]
    }
}

/// Index after `prev` in a ring of `len` items
///
/// `len` must be non-zero; [`ImageSet`] guarantees that for carousel use.
pub fn next_index(prev: usize, len: usize) -> usize {
    (prev + 1) % len
}

/// Index before `prev` in a ring of `len` items
pub fn prev_index(prev: usize, len: usize) -> usize {
    (prev + len - 1) % len
}

/// One visible slot of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub index: usize,
    pub image: &'a str,
}

/// The three slots rendered for a position: dimmed neighbours around the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slots<'a> {
    pub left: Slot<'a>,
    pub center: Slot<'a>,
    pub right: Slot<'a>,
}

/// Carousel controller: image set plus current position
#[derive(Debug, Clone)]
pub struct Carousel {
    images: ImageSet,
    position: usize,
}

impl Carousel {
    /// Create a carousel positioned on the first image
    pub fn new(images: ImageSet) -> Self {
        Self {
            images,
            position: 0,
        }
    }

    /// Current position, always in `[0, len)`
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Move to the next image, wrapping to the first
    pub fn advance(&mut self) {
        self.apply(next_index);
    }

    /// Move to the previous image, wrapping to the last
    pub fn retreat(&mut self) {
        self.apply(prev_index);
    }

    /// Apply a transition computed from the current position
    fn apply(&mut self, transition: fn(usize, usize) -> usize) {
        self.position = transition(self.position, self.images.len());
    }

    /// Left, center and right slots for the current position
    pub fn slots(&self) -> Slots<'_> {
        let len = self.images.len();
        let slot = |index: usize| Slot {
            index,
            image: self.images.get(index),
        };

        Slots {
            left: slot(prev_index(self.position, len)),
            center: slot(self.position),
            right: slot(next_index(self.position, len)),
        }
    }

    /// Image currently in the center slot
    pub fn current(&self) -> &str {
        self.images.get(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel_of(n: usize) -> Carousel {
        let images = (0..n).map(|i| format!("image-{i}.jpg"));
        Carousel::new(ImageSet::new(images).unwrap())
    }

    #[test]
    fn test_empty_image_set_is_rejected() {
        let result = ImageSet::new(Vec::<String>::new());
        assert_eq!(result, Err(CarouselError::EmptyImageSet));
    }

    #[test]
    fn test_position_stays_in_range() {
        for n in 1..=9 {
            let mut carousel = carousel_of(n);
            // Deterministic mixed sequence of moves
            for step in 0..200usize {
                if (step * 7 + n) % 3 == 0 {
                    carousel.retreat();
                } else {
                    carousel.advance();
                }
                assert!(carousel.position() < n, "n={n} step={step}");
            }
        }
    }

    #[test]
    fn test_advance_and_retreat_are_inverse() {
        for n in 1..=8 {
            for start in 0..n {
                let mut carousel = carousel_of(n);
                for _ in 0..start {
                    carousel.advance();
                }
                assert_eq!(carousel.position(), start);

                carousel.advance();
                carousel.retreat();
                assert_eq!(carousel.position(), start);

                carousel.retreat();
                carousel.advance();
                assert_eq!(carousel.position(), start);
            }
        }
    }

    #[test]
    fn test_n_advances_return_to_start() {
        for n in 1..=8 {
            let mut carousel = carousel_of(n);
            carousel.retreat(); // start somewhere other than 0 when n > 1
            let start = carousel.position();
            for _ in 0..n {
                carousel.advance();
            }
            assert_eq!(carousel.position(), start);
        }
    }

    #[test]
    fn test_single_image_is_stable() {
        let mut carousel = carousel_of(1);
        carousel.advance();
        assert_eq!(carousel.position(), 0);
        carousel.retreat();
        assert_eq!(carousel.position(), 0);

        let slots = carousel.slots();
        assert_eq!(slots.left.index, 0);
        assert_eq!(slots.center.index, 0);
        assert_eq!(slots.right.index, 0);
        assert_eq!(slots.left.image, slots.center.image);
        assert_eq!(slots.right.image, slots.center.image);
    }

    #[test]
    fn test_seven_images_three_advances() {
        let mut carousel = carousel_of(7);
        for _ in 0..3 {
            carousel.advance();
        }
        assert_eq!(carousel.position(), 3);

        let slots = carousel.slots();
        assert_eq!(slots.left.index, 2);
        assert_eq!(slots.center.index, 3);
        assert_eq!(slots.right.index, 4);
        assert_eq!(slots.center.image, "image-3.jpg");
        assert_eq!(carousel.current(), "image-3.jpg");
    }

    #[test]
    fn test_wrap_around_at_boundaries() {
        let mut carousel = carousel_of(7);
        carousel.retreat();
        assert_eq!(carousel.position(), 6);

        let slots = carousel.slots();
        assert_eq!(slots.left.index, 5);
        assert_eq!(slots.right.index, 0);

        carousel.advance();
        assert_eq!(carousel.position(), 0);
        assert_eq!(carousel.slots().left.index, 6);
    }

    #[test]
    fn test_index_helpers() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
