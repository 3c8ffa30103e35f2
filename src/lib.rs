#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
pub mod core;
mod dom;
mod events;
mod follower;
mod frame;
mod input;
mod overlay;
mod render;
mod routing;
mod scene;

use crate::core::{GalleryConfig, SharedContext};

/// Everything one mount owns. Dropping it removes every listener and stops both loops.
struct App {
    _follower: Option<follower::FollowerGate>,
    scene: Option<scene::WorksScene>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    // Leave on pagehide, come back when the page is restored from bfcache.
    if let Some(l) = dom::on_window("pagehide", |_| unmount()) {
        l.forget();
    }
    if let Some(l) = dom::on_window("pageshow", |ev| {
        let restored = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if restored {
            mount();
        }
    }) {
        l.forget();
    }

    mount();
    Ok(())
}

/// Mount the works page if it is not mounted already.
#[wasm_bindgen]
pub fn mount() {
    if APP.with(|a| a.borrow().is_some()) {
        return;
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

/// Tear down listeners, loops and overlays.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|a| a.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("unmounted");
    }
}

fn read_config(canvas: Option<&web::HtmlElement>) -> GalleryConfig {
    let Some(canvas) = canvas else {
        return GalleryConfig::default();
    };
    let dataset = canvas.dataset();
    GalleryConfig::default().with_overrides(|key| dataset.get(key))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(read_config(
        dom::html_by_id(&document, constants::CANVAS_ID).as_ref(),
    ));
    let (w, h) = dom::viewport_size().unwrap_or((0.0, 0.0));
    let shared = Rc::new(RefCell::new(SharedContext::new(w as f32, h as f32)));

    // The follower does not depend on WebGPU, so it goes up first.
    let follower = match follower::FollowerGate::install(
        &document,
        shared.clone(),
        &config.desktop_media_query(),
    ) {
        Ok(gate) => {
            log::info!("[follower] gate installed, mounted={}", gate.is_mounted());
            Some(gate)
        }
        Err(e) => {
            log::warn!("[follower] disabled: {:?}", e);
            None
        }
    };
    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            _follower: follower,
            scene: None,
        })
    });

    let scene = scene::WorksScene::mount(&document, shared, config).await?;
    let leftover = APP.with(|a| match a.borrow_mut().as_mut() {
        Some(app) if app.scene.is_none() => {
            app.scene = Some(scene);
            None
        }
        // unmounted (or mounted twice) while the GPU was initialising
        _ => Some(scene),
    });
    drop(leftover);
    Ok(())
}
