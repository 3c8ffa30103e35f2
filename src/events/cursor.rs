use crate::core::{is_hover_target, FollowerState, SharedContext, HOVER_MARKER_CLASS};
use crate::dom;
use gloo::events::EventListener;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct CursorWiring {
    pub root: web::HtmlElement,
    pub state: Rc<RefCell<FollowerState>>,
    pub shared: Rc<RefCell<SharedContext>>,
    /// Set while the pointer is over a link, button or marked element.
    pub dom_hover: Rc<Cell<bool>>,
}

/// Window-level mouse listeners for the cursor follower.
pub fn wire_cursor(w: CursorWiring) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(4);

    let w2 = w.clone();
    listeners.extend(dom::on_window("mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        w2.shared
            .borrow_mut()
            .set_mouse_pos(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        w2.dom_hover.set(target_is_hover_target(ev));
        if w2.state.borrow_mut().reveal() {
            dom::set_style(&w2.root, "opacity", "1");
        }
    }));

    let w2 = w.clone();
    listeners.extend(dom::on_window("mousedown", move |_| {
        w2.state.borrow_mut().set_pressed(true);
    }));

    let w2 = w.clone();
    listeners.extend(dom::on_window("mouseup", move |_| {
        w2.state.borrow_mut().set_pressed(false);
    }));

    // A release outside the window never reaches mouseup.
    listeners.extend(dom::on_window("blur", move |_| {
        w.state.borrow_mut().set_pressed(false);
    }));

    listeners
}

/// The event target or its parent is a link, a button or carries the marker class.
fn target_is_hover_target(ev: &web::MouseEvent) -> bool {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    std::iter::successors(Some(el), |e| e.parent_element())
        .take(2)
        .any(|e| is_hover_target(&e.node_name(), e.class_list().contains(HOVER_MARKER_CLASS)))
}
