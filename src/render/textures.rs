//! Cover image loading. Each cover is fetched and decoded off the frame loop;
//! finished bitmaps wait in a [`CoverInbox`] until the next frame uploads them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Default)]
pub struct CoverInbox {
    ready: Vec<(usize, web::ImageBitmap)>,
    settled: usize,
    total: usize,
}

impl CoverInbox {
    pub fn new(total: usize) -> Self {
        Self {
            ready: Vec::new(),
            settled: 0,
            total,
        }
    }

    pub fn drain(&mut self) -> Vec<(usize, web::ImageBitmap)> {
        std::mem::take(&mut self.ready)
    }

    /// Loaded-or-failed share in [0, 1]; 1 when there is nothing to load.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.settled as f32 / self.total as f32
        }
    }

    fn settle(&mut self, bitmap: Option<(usize, web::ImageBitmap)>) {
        self.settled = (self.settled + 1).min(self.total);
        self.ready.extend(bitmap);
    }
}

pub async fn fetch_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let blob = resp
        .blob()
        .map_err(|e| anyhow::anyhow!("blob {url}: {:?}", e))?;
    let blob: web::Blob = JsFuture::from(blob)
        .await
        .map_err(|e| anyhow::anyhow!("blob {url}: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Blob: {:?}", e))?;
    let bitmap = window
        .create_image_bitmap_with_blob(&blob)
        .map_err(|e| anyhow::anyhow!("decode {url}: {:?}", e))?;
    let bitmap = JsFuture::from(bitmap)
        .await
        .map_err(|e| anyhow::anyhow!("decode {url}: {:?}", e))?;
    bitmap
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| anyhow::anyhow!("not an ImageBitmap: {:?}", e))
}

/// Start one fetch per url. Results land in `inbox` while it is still alive;
/// a torn-down scene simply drops late arrivals.
pub fn spawn_cover_loads(urls: Vec<String>, inbox: &Rc<RefCell<CoverInbox>>) {
    for (index, url) in urls.into_iter().enumerate() {
        let inbox: Weak<RefCell<CoverInbox>> = Rc::downgrade(inbox);
        spawn_local(async move {
            let result = fetch_bitmap(&url).await;
            let Some(inbox) = inbox.upgrade() else {
                return;
            };
            match result {
                Ok(bitmap) => {
                    log::info!("[covers] {} loaded {}x{}", index, bitmap.width(), bitmap.height());
                    inbox.borrow_mut().settle(Some((index, bitmap)));
                }
                Err(e) => {
                    log::warn!("[covers] {} failed: {:?}", index, e);
                    inbox.borrow_mut().settle(None);
                }
            }
        });
    }
}
