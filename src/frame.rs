use crate::camera::Camera;
use crate::constants::RGB_SHIFT_STRENGTH;
use crate::core::{Gallery, ScrollMetrics, SharedContext};
use crate::overlay::Overlay;
use crate::render::{self, textures::CoverInbox, SurfaceUniforms};
use crate::scene;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Repeating `requestAnimationFrame` task. Dropping it cancels the pending frame.
pub struct AnimationLoop {
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    /// `tick` receives seconds since the previous frame (0 on the first).
    pub fn start(tick: impl FnMut(f32) + 'static) -> Self {
        let handle = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        let tick: Rc<RefCell<dyn FnMut(f32)>> = Rc::new(RefCell::new(tick));
        schedule(handle.clone(), running.clone(), tick, None);
        Self { handle, running }
    }
}

fn schedule(
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<dyn FnMut(f32)>>,
    last: Option<Instant>,
) {
    let slot = handle.clone();
    let frame = request_animation_frame(move |_| {
        if !running.get() {
            return;
        }
        let now = Instant::now();
        let dt = last.map_or(0.0, |prev| (now - prev).as_secs_f32());
        (&mut *tick.borrow_mut())(dt);
        if running.get() {
            schedule(handle, running, tick, Some(now));
        }
    });
    *slot.borrow_mut() = Some(frame);
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.running.set(false);
        self.handle.borrow_mut().take();
    }
}

pub struct FrameContext<'a> {
    pub gallery: Rc<RefCell<Gallery>>,
    pub shared: Rc<RefCell<SharedContext>>,

    pub canvas: web::HtmlCanvasElement,
    pub scroll_area: web::HtmlElement,
    pub overlay: Rc<RefCell<Overlay>>,

    pub gpu: Option<render::GpuState<'a>>,
    pub covers: Rc<RefCell<CoverInbox>>,
    pub uniforms: Vec<SurfaceUniforms>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self, dt_sec: f32) {
        let scroll: Option<ScrollMetrics> = scene::read_scroll_metrics(&self.scroll_area);

        let mut gallery = self.gallery.borrow_mut();
        {
            let mut shared = self.shared.borrow_mut();
            gallery.frame(&mut shared, scroll, dt_sec);
        }

        let camera = scene::scene_camera(gallery.camera(), &self.canvas);
        {
            let covers_progress = {
                let mut covers = self.covers.borrow_mut();
                if let Some(g) = &mut self.gpu {
                    for (i, bitmap) in covers.drain() {
                        g.set_cover(i, &bitmap);
                        bitmap.close();
                    }
                }
                covers.progress()
            };
            let mut overlay = self.overlay.borrow_mut();
            overlay.set_loading(covers_progress);
            overlay.update_labels(&gallery, &camera, &self.canvas);
        }

        if let Some(g) = &mut self.gpu {
            let speed = self.shared.borrow().speed();
            let params = gallery.breakpoint().params();
            g.set_plane_size(params.plane_size);
            self.uniforms.clear();
            self.uniforms
                .extend(gallery.surfaces().iter().map(|s| SurfaceUniforms {
                    model: gallery.placement(s.index).model_matrix().to_cols_array_2d(),
                    time: gallery.time(),
                    speed,
                    hover_value: s.hover_value(),
                    rgb_shift_strength: RGB_SHIFT_STRENGTH,
                    texture_aspect: g.texture_aspect(s.index),
                    frame_aspect: params.frame_aspect(),
                    _pad: [0.0; 2],
                }));
            drop(gallery);
            render_frame(g, &camera, &self.canvas, &self.uniforms);
        }
    }
}

fn render_frame(
    g: &mut render::GpuState<'_>,
    camera: &Camera,
    canvas: &web::HtmlCanvasElement,
    uniforms: &[SurfaceUniforms],
) {
    g.set_camera(camera.view_proj());
    g.resize_if_needed(canvas.width(), canvas.height());
    if let Err(e) = g.render(uniforms) {
        log::error!("render error: {:?}", e);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    surface_count: usize,
    plane_size: [f32; 2],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, surface_count, plane_size).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext<'static>) -> AnimationLoop {
    let mut frame_ctx = frame_ctx;
    AnimationLoop::start(move |dt| frame_ctx.frame(dt))
}
