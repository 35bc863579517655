#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use hero_banner::error::RenderError;
use hero_banner::host::{Graphics, Host, Surface};
use hero_banner::scene::{FrameUniforms, Layer};

/// Every graphics call the banner makes, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetBufferSize(u32, u32),
    Prepare { layers: usize },
    Draw { time: f32, pixel_ratio: f32, params: Vec<[f32; 4]> },
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Clone)]
pub struct FakeSurface {
    pub size: Rc<Cell<(f64, f64)>>,
    pub attributes: HashMap<String, String>,
}

impl Surface for FakeSurface {
    fn layout_size(&self) -> (f64, f64) {
        self.size.get()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

pub struct FakeGraphics {
    pub calls: CallLog,
    pub fail_prepare: bool,
}

impl Graphics for FakeGraphics {
    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.calls.borrow_mut().push(Call::SetBufferSize(width, height));
    }

    fn prepare(&mut self, layers: &[Layer]) -> Result<(), RenderError> {
        self.calls.borrow_mut().push(Call::Prepare { layers: layers.len() });
        if self.fail_prepare {
            return Err(RenderError::Shader { layer: "test", log: "ERROR: 0:1".into() });
        }
        Ok(())
    }

    fn draw(&mut self, frame: &FrameUniforms, layers: &[Layer]) -> Result<(), RenderError> {
        self.calls.borrow_mut().push(Call::Draw {
            time: frame.time,
            pixel_ratio: frame.pixel_ratio,
            params: layers.iter().map(|l| l.params).collect(),
        });
        Ok(())
    }
}

/// Configurable page stand-in.
pub struct FakeHost {
    pub surface_id: Option<String>,
    pub surface: FakeSurface,
    pub webgl2: bool,
    pub fail_prepare: bool,
    pub pixel_ratio: f64,
    pub styles: HashMap<String, String>,
    pub calls: CallLog,
}

impl FakeHost {
    pub fn page(width: f64, height: f64) -> Self {
        Self {
            surface_id: Some("hero3d".into()),
            surface: FakeSurface {
                size: Rc::new(Cell::new((width, height))),
                attributes: HashMap::new(),
            },
            webgl2: true,
            fail_prepare: false,
            pixel_ratio: 1.0,
            styles: HashMap::new(),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_motif(mut self, motif: &str) -> Self {
        self.surface.attributes.insert("data-motif".into(), motif.into());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn resize_surface(&self, width: f64, height: f64) {
        self.surface.size.set((width, height));
    }
}

impl Host for FakeHost {
    type Surface = FakeSurface;
    type Graphics = FakeGraphics;

    fn find_surface(&self, id: &str) -> Option<FakeSurface> {
        (self.surface_id.as_deref() == Some(id)).then(|| self.surface.clone())
    }

    fn graphics(&self, _surface: &FakeSurface) -> Option<FakeGraphics> {
        self.webgl2.then(|| FakeGraphics {
            calls: self.calls.clone(),
            fail_prepare: self.fail_prepare,
        })
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.styles.get(name).cloned()
    }
}
