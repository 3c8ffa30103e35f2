//! The works scene: scroll container, WebGPU canvas, overlays and the
//! pointer wiring that ties them to one [`Gallery`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::camera::{ndc_to_world_ray, Camera};
use crate::constants::{CANVAS_ID, SCROLL_AREA_ID};
use crate::core::{projects, Breakpoint, CameraRig, DelayedNavigation, Gallery, GalleryConfig, ScrollMetrics, SharedContext};
use crate::dom;
use crate::events::{self, ScenePointer};
use crate::frame::{self, AnimationLoop, FrameContext};
use crate::input::{pick_nearest, PickQuad};
use crate::overlay::Overlay;
use crate::render::textures::{spawn_cover_loads, CoverInbox};
use crate::routing::TimeoutScheduler;

/// Current scroll offset and scrollable distance of the container.
///
/// `None` when the spacer child is missing; `max_offset` may be zero or
/// negative when the page is taller than the spacer.
pub fn read_scroll_metrics(scroll_area: &web::HtmlElement) -> Option<ScrollMetrics> {
    let spacer = scroll_area.first_element_child()?;
    let (_, viewport_h) = dom::viewport_size()?;
    Some(ScrollMetrics {
        scroll_top: scroll_area.scroll_top() as f32,
        max_offset: (spacer.client_height() as f64 - viewport_h) as f32,
    })
}

/// Render camera for the rig's current pose, aspect taken from the canvas CSS box.
pub fn scene_camera(rig: &CameraRig, canvas: &web::HtmlCanvasElement) -> Camera {
    let w = canvas.client_width().max(1) as f32;
    let h = canvas.client_height().max(1) as f32;
    Camera::new(rig.position, rig.look_at, w / h)
}

/// Nearest surface under `ndc`, if any.
pub fn pick_surface(gallery: &Gallery, camera: &Camera, ndc: Vec2) -> Option<usize> {
    let size = gallery.breakpoint().params().plane_size;
    let quads: Vec<PickQuad> = gallery
        .placements()
        .map(|p| PickQuad::from_pose(p.position, p.rotation(), size))
        .collect();
    let (ro, rd) = ndc_to_world_ray(camera, ndc);
    if rd == glam::Vec3::ZERO {
        return None;
    }
    pick_nearest(ro, rd, &quads)
}

fn current_breakpoint() -> Breakpoint {
    dom::viewport_size()
        .map(|(w, _)| Breakpoint::from_width(w))
        .unwrap_or(Breakpoint::Desktop)
}

pub struct WorksScene {
    gallery: Rc<RefCell<Gallery>>,
    shared: Rc<RefCell<SharedContext>>,
    _listeners: Vec<EventListener>,
    _loop: AnimationLoop,
}

impl WorksScene {
    pub async fn mount(
        document: &web::Document,
        shared: Rc<RefCell<SharedContext>>,
        config: Rc<GalleryConfig>,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
        let scroll_area = dom::html_by_id(document, SCROLL_AREA_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", SCROLL_AREA_ID))?;

        let projects = projects();
        let len = projects.len();
        match scroll_area
            .first_element_child()
            .and_then(|c| c.dyn_into::<web::HtmlElement>().ok())
        {
            Some(spacer) => dom::set_style(&spacer, "height", &config.spacer_height_css(len)),
            None => log::warn!("[scene] #{} has no spacer child", SCROLL_AREA_ID),
        }

        let breakpoint = current_breakpoint();
        log::info!("[scene] mount {} projects, breakpoint={}", len, breakpoint.name());
        dom::sync_canvas_backing_size(&canvas);

        let gallery = Rc::new(RefCell::new(Gallery::new(len, breakpoint)));
        let overlay = Rc::new(RefCell::new(Overlay::mount(document, projects, &config)));

        let gpu = frame::init_gpu(&canvas, len, breakpoint.params().plane_size).await;
        let covers = if gpu.is_some() {
            let inbox = Rc::new(RefCell::new(CoverInbox::new(len)));
            spawn_cover_loads(
                projects.iter().map(|p| p.cover_img_small.clone()).collect(),
                &inbox,
            );
            inbox
        } else {
            log::warn!("[scene] no WebGPU, gallery runs without rendering");
            Rc::new(RefCell::new(CoverInbox::new(0)))
        };

        // Kick the scroll listener so the overlays pick up the initial state.
        scroll_area.set_scroll_top(scroll_area.scroll_top() + 1);

        let mut listeners = Vec::new();
        {
            let gallery = gallery.clone();
            let canvas = canvas.clone();
            listeners.extend(dom::on_window("resize", move |_| {
                dom::sync_canvas_backing_size(&canvas);
                let bp = current_breakpoint();
                if gallery.borrow_mut().set_breakpoint(bp) {
                    log::info!("[scene] breakpoint -> {}", bp.name());
                }
            }));
        }
        {
            let overlay = overlay.clone();
            let area = scroll_area.clone();
            listeners.push(EventListener::new(&scroll_area, "scroll", move |_| {
                if let Some(m) = read_scroll_metrics(&area) {
                    overlay.borrow_mut().on_scroll(m);
                }
            }));
        }
        let navigation = Rc::new(DelayedNavigation::new(
            Rc::new(crate::routing::WindowRouter),
            TimeoutScheduler,
            config.navigate_delay_ms,
        ));
        listeners.extend(events::wire_scene_pointer(ScenePointer {
            canvas: canvas.clone(),
            scroll_area: scroll_area.clone(),
            gallery: gallery.clone(),
            shared: shared.clone(),
            config,
            navigation,
        }));

        let frame_loop = frame::start_loop(FrameContext {
            gallery: gallery.clone(),
            shared: shared.clone(),
            canvas,
            scroll_area,
            overlay,
            gpu,
            covers,
            uniforms: Vec::with_capacity(len),
        });

        Ok(Self {
            gallery,
            shared,
            _listeners: listeners,
            _loop: frame_loop,
        })
    }
}

impl Drop for WorksScene {
    fn drop(&mut self) {
        self.gallery.borrow_mut().release(&mut self.shared.borrow_mut());
        log::info!("[scene] unmounted");
    }
}
