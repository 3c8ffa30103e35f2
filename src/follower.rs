//! DOM side of the custom cursor. [`FollowerGate`] mounts a
//! [`CursorFollower`] only while the desktop media query matches.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys as web;

use crate::constants::{
    FOLLOWER_BORDER_COLOR, FOLLOWER_HOVER_FILL_IDLE_SCALE, FOLLOWER_HOVER_ID, FOLLOWER_ID,
    FOLLOWER_INNER_ID, FOLLOWER_OUTER_ID, FOLLOWER_OUTER_WRAPPER_ID,
};
use crate::core::{FollowerState, SharedContext};
use crate::dom;
use crate::events::{wire_cursor, CursorWiring};
use crate::frame::AnimationLoop;

struct Parts {
    root: web::HtmlElement,
    inner: web::HtmlElement,
    outer_wrapper: web::HtmlElement,
    outer: web::HtmlElement,
    hover_fill: web::HtmlElement,
}

impl Parts {
    fn find(document: &web::Document) -> anyhow::Result<Self> {
        let get = |id: &str| {
            dom::html_by_id(document, id).ok_or_else(|| anyhow::anyhow!("missing #{}", id))
        };
        Ok(Self {
            root: get(FOLLOWER_ID)?,
            inner: get(FOLLOWER_INNER_ID)?,
            outer_wrapper: get(FOLLOWER_OUTER_WRAPPER_ID)?,
            outer: get(FOLLOWER_OUTER_ID)?,
            hover_fill: get(FOLLOWER_HOVER_ID)?,
        })
    }

    fn apply_hover(&self, hovering: bool) {
        let border = if hovering { "transparent" } else { FOLLOWER_BORDER_COLOR };
        dom::set_style(&self.outer, "border-color", border);
        let scale = if hovering { 1.0 } else { FOLLOWER_HOVER_FILL_IDLE_SCALE };
        dom::set_style(&self.hover_fill, "transform", &format!("scale({scale})"));
    }
}

pub struct CursorFollower {
    root: web::HtmlElement,
    _listeners: Vec<EventListener>,
    _loop: AnimationLoop,
}

impl CursorFollower {
    pub fn mount(document: &web::Document, shared: Rc<RefCell<SharedContext>>) -> anyhow::Result<Self> {
        let parts = Parts::find(document)?;
        let start = shared.borrow().mouse_pos();
        let state = Rc::new(RefCell::new(FollowerState::new(start)));
        let dom_hover = Rc::new(Cell::new(false));

        dom::set_style(&parts.root, "display", "");
        dom::set_style(&parts.root, "opacity", "0");
        parts.apply_hover(false);

        let listeners = wire_cursor(CursorWiring {
            root: parts.root.clone(),
            state: state.clone(),
            shared: shared.clone(),
            dom_hover: dom_hover.clone(),
        });

        let root = parts.root.clone();
        let frame_loop = AnimationLoop::start(move |_| {
            let (pointer, hovering) = {
                let shared = shared.borrow();
                (shared.mouse_pos(), dom_hover.get() || shared.hovering_canvas())
            };
            let mut state = state.borrow_mut();
            if state.set_hovering(hovering) {
                parts.apply_hover(hovering);
            }
            let frame = state.step(pointer);
            dom::set_style(&parts.outer_wrapper, "transform", &frame.outer_transform());
            dom::set_style(&parts.inner, "transform", &frame.inner_transform());
        });

        log::info!("[follower] mounted");
        Ok(Self {
            root,
            _listeners: listeners,
            _loop: frame_loop,
        })
    }
}

impl Drop for CursorFollower {
    fn drop(&mut self) {
        dom::set_style(&self.root, "opacity", "0");
        log::info!("[follower] unmounted");
    }
}

/// Keeps the follower mounted exactly while `query` matches.
pub struct FollowerGate {
    follower: Rc<RefCell<Option<CursorFollower>>>,
    _change: EventListener,
}

impl FollowerGate {
    pub fn install(
        document: &web::Document,
        shared: Rc<RefCell<SharedContext>>,
        query: &str,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let mql = window
            .match_media(query)
            .map_err(|e| anyhow::anyhow!("matchMedia({query}): {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("matchMedia({query}) unsupported"))?;

        let follower = Rc::new(RefCell::new(None));
        let sync = {
            let follower = follower.clone();
            let document = document.clone();
            let mql = mql.clone();
            move || sync_follower(&follower, &document, &shared, mql.matches())
        };
        sync();
        let change = EventListener::new(&mql, "change", move |_| sync());

        Ok(Self {
            follower,
            _change: change,
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.follower.borrow().is_some()
    }
}

fn sync_follower(
    slot: &Rc<RefCell<Option<CursorFollower>>>,
    document: &web::Document,
    shared: &Rc<RefCell<SharedContext>>,
    matches: bool,
) {
    if matches {
        if slot.borrow().is_some() {
            return;
        }
        match CursorFollower::mount(document, shared.clone()) {
            Ok(f) => *slot.borrow_mut() = Some(f),
            Err(e) => log::warn!("[follower] not mounted: {:?}", e),
        }
    } else {
        // drop outside the borrow
        let dropped = slot.borrow_mut().take();
        drop(dropped);
        if let Some(root) = dom::html_by_id(document, FOLLOWER_ID) {
            dom::set_style(&root, "display", "none");
        }
    }
}
