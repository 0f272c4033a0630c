pub mod carousel;
pub mod scroll;
pub mod typewriter;
pub mod visibility;

pub use carousel::{Carousel, CarouselDriver};
pub use scroll::{Bounds, ScrollNav, ScrollThresholds, SectionGeometry, SectionId};
pub use typewriter::{Phase, Typewriter, TypewriterTimings};
pub use visibility::{IntersectionSample, SeenSet};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    #[error("cannot animate over an empty list")]
    Empty,
}

/// Modular step over `[0, len)` that never underflows.
pub(crate) fn wrap_offset(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}
