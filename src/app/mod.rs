//! Application wiring.
//!
//! [`AnimationApp`] owns the animated scene, the timeline player and a
//! [`Renderer`]. The host calls [`AnimationApp::frame`] once per display
//! frame; see [`runner`] for the native and browser frame loops.
//!
//! # Example
//!
//! ```rust,ignore
//! use tessera::app::{AnimationApp, FrameSource, runner};
//! use tessera::render::HeadlessRenderer;
//! use tessera::settings::PlayerSettings;
//!
//! let settings = PlayerSettings::default();
//! let renderer = HeadlessRenderer::new(settings.view.width, settings.view.height);
//! let mut app = AnimationApp::load(settings, renderer)?;
//! runner::run_native(&mut app, FrameSource::fallback(&app.settings), None)?;
//! ```

pub mod runner;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use runner::FrameSource;

use crate::animation::player::TimelinePlayer;
use crate::assets::{AnimationData, AnimationLibrary, AssetReader, FileAssetReader};
use crate::errors::Result;
use crate::render::Renderer;
use crate::scene::AnimatedScene;
use crate::settings::PlayerSettings;
use crate::utils::time::Timer;

/// A playing animation: scene, timeline player and renderer.
pub struct AnimationApp<R: Renderer> {
    pub settings: PlayerSettings,
    pub scene: AnimatedScene,
    pub player: TimelinePlayer,
    pub renderer: R,

    timer: Timer,
    duration_ms: f64,
}

impl<R: Renderer> AnimationApp<R> {
    /// Builds the scene and timeline from `data` and starts playback.
    pub fn new(settings: PlayerSettings, data: &AnimationData, mut renderer: R) -> Result<Self> {
        let (scene, timeline) = AnimatedScene::build(data, &settings)?;
        let duration_ms = data.duration_ms(settings.frame_rate);

        renderer.resize(settings.view.width, settings.view.height);

        let mut player = TimelinePlayer::new(timeline);
        player.start();

        Ok(Self {
            settings,
            scene,
            player,
            renderer,
            timer: Timer::new(),
            duration_ms,
        })
    }

    /// Loads `settings.animation` from `settings.data_root` on disk.
    pub fn load(settings: PlayerSettings, renderer: R) -> Result<Self> {
        let library = AnimationLibrary::new(FileAssetReader::new(&settings.data_root));
        Self::load_from(settings, &library, renderer)
    }

    /// Loads `settings.animation` through an existing library.
    pub fn load_from<A: AssetReader>(
        settings: PlayerSettings,
        library: &AnimationLibrary<A>,
        renderer: R,
    ) -> Result<Self> {
        let data = library.load(&settings.animation)?;
        Self::new(settings, &data, renderer)
    }

    /// One display frame: advances by the wall-clock time since the previous
    /// frame, then renders.
    pub fn frame(&mut self) -> Result<()> {
        self.timer.tick();
        let dt_ms = if self.timer.frame_count == 1 {
            0.0
        } else {
            self.timer.dt_ms()
        };
        self.advance(dt_ms)
    }

    /// Advances the animation by `dt_ms` and renders one frame.
    pub fn advance(&mut self, dt_ms: f64) -> Result<()> {
        self.player.tick(dt_ms, &mut self.scene);
        self.scene.scene.update_matrices();
        self.renderer.render(&self.scene.scene, self.scene.camera())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.settings.view.width = width;
        self.settings.view.height = height;
        self.scene.resize(width, height);
        self.renderer.resize(width, height);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.player.is_finished()
    }

    /// Authored length of the animation (the data file's `duration`).
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count
    }
}
