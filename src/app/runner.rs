//! Frame loops.
//!
//! Browsers drive [`AnimationApp::frame`] from the display refresh
//! (`requestAnimationFrame`), falling back to a fixed-interval timer when the
//! display hook is unavailable. Native hosts use the fixed interval.

use std::time::Duration;

use crate::app::AnimationApp;
use crate::errors::Result;
use crate::render::Renderer;
use crate::settings::PlayerSettings;

/// Where frame ticks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    /// The platform's display-synchronised callback.
    DisplaySync,
    /// A plain timer firing every interval.
    FixedInterval(Duration),
}

impl FrameSource {
    /// The preferred source for the current platform.
    #[must_use]
    pub fn preferred(settings: &PlayerSettings) -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::DisplaySync
        } else {
            Self::fallback(settings)
        }
    }

    /// The fixed-interval source from `settings.fallback_interval_ms`.
    #[must_use]
    pub fn fallback(settings: &PlayerSettings) -> Self {
        let ms = settings.fallback_interval_ms;
        let interval = if ms.is_finite() && ms > 0.0 {
            Duration::from_secs_f64(ms / 1000.0)
        } else {
            Duration::from_secs_f64(1.0 / 60.0)
        };
        Self::FixedInterval(interval)
    }

    /// Interval between frames; `None` for display-synchronised sources.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        match self {
            Self::DisplaySync => None,
            Self::FixedInterval(d) => Some(*d),
        }
    }
}

/// Runs frames on the current thread until the animation finishes or
/// `max_frames` frames have been produced. Returns the number of frames run.
///
/// `DisplaySync` has no native meaning and is treated as a 60 Hz timer.
pub fn run_native<R: Renderer>(
    app: &mut AnimationApp<R>,
    source: FrameSource,
    max_frames: Option<u64>,
) -> Result<u64> {
    let interval = source
        .interval()
        .unwrap_or_else(|| Duration::from_secs_f64(1.0 / 60.0));

    log::info!(
        "Running animation '{}' ({:.0} ms) at {:.1} ms per frame",
        app.settings.animation,
        app.duration_ms(),
        interval.as_secs_f64() * 1000.0
    );

    let mut frames = 0_u64;
    while !app.is_finished() {
        if max_frames.is_some_and(|max| frames >= max) {
            log::warn!("Stopping after {frames} frames, animation not finished");
            break;
        }
        app.frame()?;
        frames += 1;
        std::thread::sleep(interval);
    }

    // Render the final state once more so the last values are on screen.
    if app.is_finished() {
        app.frame()?;
        frames += 1;
        log::info!("Animation finished after {frames} frames");
    }
    Ok(frames)
}

/// Runs `frames` frames of exactly `dt_ms` each without sleeping.
///
/// Deterministic stepping for tests and offline rendering.
pub fn run_fixed_step<R: Renderer>(
    app: &mut AnimationApp<R>,
    dt_ms: f64,
    frames: u64,
) -> Result<()> {
    for _ in 0..frames {
        app.advance(dt_ms)?;
        if app.is_finished() {
            break;
        }
    }
    Ok(())
}
