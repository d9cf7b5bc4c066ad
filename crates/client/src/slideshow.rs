//! Async slideshow driver.
//!
//! [`run_slideshow`] ticks a [`Slideshow`] on a tokio interval and reports
//! each step to a callback. It stops when the last slide completes or when
//! the [`CancellationToken`] fires; cancelling is how a viewer tears the
//! slideshow down.

use galleria_core::artwork::gallery_href;
use galleria_core::slideshow::{Slideshow, SlideshowConfig, Tick};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// What the viewer should do after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideEvent {
    /// Redraw the progress bar at this percentage.
    Progress(u32),
    /// Show the detail page at this href.
    Navigate(String),
}

/// Why [`run_slideshow`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowEnd {
    /// The last slide completed.
    Finished,
    /// The token was cancelled first.
    Cancelled,
}

/// Drive `slideshow` until it finishes or `cancel` fires.
///
/// The first tick happens one `tick_interval` after the call.
pub async fn run_slideshow<F>(
    mut slideshow: Slideshow,
    config: SlideshowConfig,
    cancel: CancellationToken,
    mut on_event: F,
) -> SlideshowEnd
where
    F: FnMut(SlideEvent),
{
    let mut interval = interval_at(Instant::now() + config.tick_interval, config.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(
        slides = slideshow.len(),
        start = ?slideshow.current_slug(),
        tick_ms = config.tick_interval.as_millis() as u64,
        "Slideshow started",
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(slide = ?slideshow.current_slug(), "Slideshow cancelled");
                return SlideshowEnd::Cancelled;
            }
            _ = interval.tick() => {
                match slideshow.tick() {
                    Tick::Progress(_) => {
                        on_event(SlideEvent::Progress(slideshow.progress_percent()))
                    }
                    Tick::Advance(slug) => {
                        tracing::debug!(%slug, "Slideshow advancing");
                        on_event(SlideEvent::Navigate(gallery_href(&slug)));
                    }
                    Tick::Finished => {
                        tracing::debug!("Slideshow finished");
                        return SlideshowEnd::Finished;
                    }
                }
            }
        }
    }
}
