//! Slideshow auto-advance state machine.
//!
//! A [`Slideshow`] is driven by a repeating timer. Each [`Slideshow::tick`]
//! increments the progress of the current slide; once progress has reached
//! the threshold the next tick advances to the following slug. On the last
//! slide the progress holds at the threshold and ticks report
//! [`Tick::Finished`].
//!
//! The timer itself lives with the caller (the detail page script or the
//! async driver in `galleria-client`).

use std::time::Duration;

use serde::Serialize;

/// Default delay between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Default number of ticks a slide stays on screen.
pub const DEFAULT_THRESHOLD: u32 = 100;

/// Timer parameters for a slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideshowConfig {
    #[serde(rename = "tick_interval_ms", serialize_with = "as_millis")]
    pub tick_interval: Duration,
    pub threshold: u32,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SlideshowConfig {
    /// Wall-clock time a single slide stays on screen.
    pub fn slide_duration(&self) -> Duration {
        self.tick_interval * self.threshold
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Result of a single timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Progress moved to the contained value.
    Progress(u32),
    /// The slide completed; navigate to the contained slug.
    Advance(String),
    /// The last slide is complete. Nothing left to show.
    Finished,
}

/// Progress through an ordered list of slides.
#[derive(Debug, Clone)]
pub struct Slideshow {
    slugs: Vec<String>,
    current: usize,
    progress: u32,
    threshold: u32,
}

impl Slideshow {
    /// Start at `current` within `slugs`. `current` is clamped to the list.
    pub fn new(slugs: Vec<String>, current: usize, threshold: u32) -> Self {
        let current = current.min(slugs.len().saturating_sub(1));
        Self {
            slugs,
            current,
            progress: 0,
            threshold: threshold.max(1),
        }
    }

    /// Start at the slide whose slug matches, or `None` if absent.
    pub fn starting_at(slugs: Vec<String>, slug: &str, threshold: u32) -> Option<Self> {
        let index = slugs.iter().position(|s| s == slug)?;
        Some(Self::new(slugs, index, threshold))
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slug(&self) -> Option<&str> {
        self.slugs.get(self.current).map(String::as_str)
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Progress as a percentage of the threshold (0..=100).
    pub fn progress_percent(&self) -> u32 {
        self.progress * 100 / self.threshold
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// `true` when the current slide is the final one (or there are none).
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.slugs.len()
    }

    pub fn previous(&self) -> Option<&str> {
        self.current
            .checked_sub(1)
            .and_then(|i| self.slugs.get(i))
            .map(String::as_str)
    }

    pub fn next(&self) -> Option<&str> {
        self.slugs.get(self.current + 1).map(String::as_str)
    }

    /// Jump to `index`, resetting progress. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slugs.len() {
            return false;
        }
        self.current = index;
        self.progress = 0;
        true
    }

    /// Advance the timer by one tick.
    pub fn tick(&mut self) -> Tick {
        if self.slugs.is_empty() {
            return Tick::Finished;
        }

        if self.progress < self.threshold {
            self.progress += 1;
            return Tick::Progress(self.progress);
        }

        match self.next().map(str::to_owned) {
            Some(next) => {
                self.current += 1;
                self.progress = 0;
                Tick::Advance(next)
            }
            None => Tick::Finished,
        }
    }
}
