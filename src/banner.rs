//! The banner itself: mount once, then resize and advance as the host asks.

use glam::Vec3;

use crate::camera::{CameraMotion, PerspectiveCamera};
use crate::clock::Clock;
use crate::config::{BannerConfig, Motif, CONFIG_ATTRIBUTE, MOTIF_ATTRIBUTE};
use crate::error::{InitError, RenderError};
use crate::host::{Graphics, Host, Surface};
use crate::motif::MotifScene;
use crate::scene::FrameUniforms;
use crate::surface::Viewport;
use crate::theme::Theme;

pub struct Banner<S, G> {
    surface: S,
    graphics: G,
    scene: MotifScene,
    camera: PerspectiveCamera,
    rest: Vec3,
    motion: CameraMotion,
    clock: Clock,
    viewport: Option<Viewport>,
}

impl<S: Surface, G: Graphics> Banner<S, G> {
    /// Find the surface, acquire graphics, build the scene and size it.
    ///
    /// Missing collaborators are logged and reported; nothing is drawn and no
    /// graphics call is made in that case.
    pub fn mount<H>(host: &H, config: BannerConfig) -> Result<Self, InitError>
    where
        H: Host<Surface = S, Graphics = G>,
    {
        let Some(surface) = host.find_surface(&config.surface_id) else {
            log::error!("no #{} element; hero banner disabled", config.surface_id);
            return Err(InitError::MissingSurface(config.surface_id));
        };
        let Some(mut graphics) = host.graphics(&surface) else {
            log::error!("WebGL2 unavailable on #{}; hero banner disabled", config.surface_id);
            return Err(InitError::MissingCapability);
        };

        let config = config.with_overrides(
            surface.attribute(MOTIF_ATTRIBUTE).as_deref(),
            surface.attribute(CONFIG_ATTRIBUTE).as_deref(),
        );
        let theme = Theme::from_lookup(|name| host.style_property(name));
        let scene = MotifScene::build(&config, &theme);

        if let Err(err) = graphics.prepare(scene.layers()) {
            log::error!("hero banner setup failed: {err}");
            return Err(err.into());
        }

        let (camera, motion) = scene.camera();
        let vertices: usize = scene.layers().iter().map(|l| l.vertex_count()).sum();
        log::info!(
            "hero banner mounted: motif={} layers={} vertices={}",
            scene.motif(),
            scene.layers().len(),
            vertices
        );

        let mut banner = Self {
            surface,
            graphics,
            scene,
            rest: camera.position,
            camera,
            motion,
            clock: Clock::new(),
            viewport: None,
        };
        banner.resize(host.device_pixel_ratio());
        Ok(banner)
    }

    /// Match the drawing buffer to the surface's layout box.
    ///
    /// Returns `false`, touching nothing, when the geometry is unchanged.
    pub fn resize(&mut self, device_pixel_ratio: f64) -> bool {
        let (w, h) = self.surface.layout_size();
        let viewport = Viewport::new(w, h, device_pixel_ratio);
        if self.viewport == Some(viewport) {
            return false;
        }
        let (bw, bh) = viewport.buffer_size();
        self.graphics.set_buffer_size(bw, bh);
        self.camera.set_aspect(viewport.aspect());
        self.scene.resize(&viewport);
        self.viewport = Some(viewport);
        true
    }

    /// One frame: advance the clock by `dt` seconds, update the scene and
    /// camera, draw.
    pub fn advance(&mut self, dt: f64) -> Result<(), RenderError> {
        self.clock.tick(dt);
        let (elapsed, frames) = (self.clock.elapsed(), self.clock.frames());
        self.scene.update(elapsed, frames);
        self.motion.apply(&mut self.camera, self.rest, elapsed, frames);

        let viewport = self.viewport.unwrap_or_else(|| Viewport::new(1.0, 1.0, 1.0));
        let frame = FrameUniforms {
            projection: self.camera.projection(),
            view: self.camera.view(),
            time: elapsed as f32,
            pixel_ratio: viewport.pixel_ratio as f32,
            buffer_size: viewport.buffer_size(),
        };
        self.graphics.draw(&frame, self.scene.layers())
    }

    pub fn motif(&self) -> Motif {
        self.scene.motif()
    }

    pub fn scene(&self) -> &MotifScene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn graphics(&self) -> &G {
        &self.graphics
    }
}
