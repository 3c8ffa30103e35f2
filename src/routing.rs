use gloo::timers::callback::Timeout;
use web_sys as web;

use crate::core::{Router, Scheduler};

/// Full page navigation through `window.location`.
pub struct WindowRouter;

impl Router for WindowRouter {
    fn navigate(&self, href: &str) {
        let Some(window) = web::window() else {
            log::warn!("[nav] no window, dropping {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::error!("[nav] {} failed: {:?}", href, e);
        }
    }
}

/// `setTimeout` that is never cleared; the page may already be gone when it fires.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
