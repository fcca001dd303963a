//! Slideshow state shared by the hero carousel and the page slideshows.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Auto-advance period of the home hero carousel.
pub const HERO_INTERVAL_MS: u32 = 7_000;
/// Auto-advance period of the contact page header slideshow.
pub const CONTACT_INTERVAL_MS: u32 = 6_000;
/// Auto-advance period of the about page slideshow.
pub const ABOUT_INTERVAL_MS: u32 = 5_000;

/// Direction of the most recent slide change; drives the enter/exit motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    None,
    Forward,
    Backward,
}

impl SlideDirection {
    /// CSS modifier used by the slide animation classes.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            SlideDirection::None => "still",
            SlideDirection::Forward => "forward",
            SlideDirection::Backward => "backward",
        }
    }
}

/// Index into a fixed, non-empty list of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    direction: SlideDirection,
    paused: bool,
}

impl CarouselState {
    /// A carousel over `len` slides. An empty list behaves as a single slide.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len: len.max(1), direction: SlideDirection::None, paused: false }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        self.direction = SlideDirection::Forward;
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.direction = SlideDirection::Backward;
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump straight to `index`; out-of-range values are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len || index == self.index {
            return;
        }
        self.direction = if index > self.index { SlideDirection::Forward } else { SlideDirection::Backward };
        self.index = index;
    }

    /// Hovering the stage pauses auto-advance.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Timer tick: advance unless paused. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.next();
        true
    }
}
