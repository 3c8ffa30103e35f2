use std::rc::Rc;

/// Performs a full page navigation.
pub trait Router {
    fn navigate(&self, href: &str);
}

/// Runs a task once after a delay. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Navigates after a fixed delay so a scroll snap can finish on screen first.
pub struct DelayedNavigation<S> {
    router: Rc<dyn Router>,
    scheduler: S,
    delay_ms: u32,
}

impl<S: Scheduler> DelayedNavigation<S> {
    pub fn new(router: Rc<dyn Router>, scheduler: S, delay_ms: u32) -> Self {
        Self {
            router,
            scheduler,
            delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn navigate_later(&self, href: String) {
        log::info!("[nav] {} in {}ms", href, self.delay_ms);
        let router = self.router.clone();
        self.scheduler
            .schedule(self.delay_ms, Box::new(move || router.navigate(&href)));
    }
}
