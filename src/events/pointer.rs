use crate::core::{projects, DelayedNavigation, Gallery, GalleryConfig, SharedContext};
use crate::input;
use crate::routing::TimeoutScheduler;
use crate::scene;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ScenePointer {
    pub canvas: web::HtmlCanvasElement,
    pub scroll_area: web::HtmlElement,
    pub gallery: Rc<RefCell<Gallery>>,
    pub shared: Rc<RefCell<SharedContext>>,
    pub config: Rc<GalleryConfig>,
    pub navigation: Rc<DelayedNavigation<TimeoutScheduler>>,
}

/// Hover, click and leave handlers on the scroll container.
pub fn wire_scene_pointer(w: ScenePointer) -> Vec<EventListener> {
    vec![
        wire_pointermove(&w),
        wire_click(&w),
        wire_pointerleave(&w),
    ]
}

/// Surface under the pointer of `ev`, picked against the live camera.
fn pick_at(w: &ScenePointer, ev: &web::MouseEvent) -> Option<usize> {
    let ndc = input::pointer_ndc(
        ev.offset_x() as f32,
        ev.offset_y() as f32,
        w.scroll_area.scroll_top() as f32,
        w.canvas.client_width() as f32,
        w.canvas.client_height() as f32,
    )?;
    let gallery = w.gallery.borrow();
    let camera = scene::scene_camera(gallery.camera(), &w.canvas);
    scene::pick_surface(&gallery, &camera, ndc)
}

fn set_hovered(w: &ScenePointer, index: Option<usize>) {
    let change = {
        let mut gallery = w.gallery.borrow_mut();
        let mut shared = w.shared.borrow_mut();
        gallery.set_hovered(&mut shared, index)
    };
    if !change.is_empty() {
        // index.html only turns this into a native pointer below the desktop breakpoint
        _ = w
            .scroll_area
            .class_list()
            .toggle_with_force("hovering", change.entered.is_some());
    }
}

fn wire_pointermove(w: &ScenePointer) -> EventListener {
    let w2 = w.clone();
    EventListener::new(&w.scroll_area, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let hit = pick_at(&w2, ev);
        set_hovered(&w2, hit);
    })
}

fn wire_click(w: &ScenePointer) -> EventListener {
    let w2 = w.clone();
    EventListener::new(&w.scroll_area, "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let hit = pick_at(&w2, ev);
        let Some(index) = w2.gallery.borrow().click_target(hit) else {
            return;
        };
        let Some(project) = projects().get(index) else {
            return;
        };

        let offset = scene::read_scroll_metrics(&w2.scroll_area)
            .and_then(|m| w2.gallery.borrow().click_offset(index, m.max_offset));
        match offset {
            Some(offset) => w2.scroll_area.set_scroll_top(offset.round() as i32),
            None => log::warn!("[scene] nothing to scroll for surface {}", index),
        }
        w2.navigation.navigate_later(w2.config.route_for(project));
    })
}

fn wire_pointerleave(w: &ScenePointer) -> EventListener {
    let w2 = w.clone();
    EventListener::new(&w.scroll_area, "pointerleave", move |_| {
        set_hovered(&w2, None);
    })
}
