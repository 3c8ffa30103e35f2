use glam::Vec3;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::camera::{centred_transform, ndc_to_css, Camera};
use crate::constants::{
    LABELS_ID, LOADING_BAR_ID, LOADING_ID, SCROLL_HINT_ID, SCROLL_PROGRESS_BAR_ID,
};
use crate::core::{clamp01, Gallery, GalleryConfig, Project, ScrollMetrics, LABEL_DEPTH, SCROLL_HINT_THRESHOLD_PX};
use crate::dom;

struct Label {
    root: web::HtmlElement,
    cta: web::HtmlElement,
    visible: bool,
    hovering: bool,
}

impl Label {
    fn create(document: &web::Document, project: &Project, href: &str) -> Option<Self> {
        let root = create_html(document, "div", "label")?;
        let name = create_html(document, "span", "label-name")?;
        name.set_text_content(Some(project.name));
        let cta = create_html(document, "a", "label-cta mf-active")?;
        cta.set_text_content(Some("open project"));
        _ = cta.set_attribute("href", href);
        _ = root.append_child(&name);
        _ = root.append_child(&cta);
        _ = root.class_list().add_1("hidden");
        Some(Self {
            root,
            cta,
            visible: false,
            hovering: false,
        })
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            _ = self.root.class_list().toggle_with_force("hidden", !visible);
        }
    }

    fn set_hovering(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            _ = self.cta.class_list().toggle_with_force("hovering", hovering);
        }
    }
}

fn create_html(document: &web::Document, tag: &str, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}

/// DOM layers drawn over the canvas: project labels, scroll progress, the
/// scroll hint and the cover loading bar. Every node is optional.
pub struct Overlay {
    labels: Vec<Label>,
    progress_bar: Option<web::HtmlElement>,
    hint: Option<web::HtmlElement>,
    hint_hidden: bool,
    loading: Option<web::HtmlElement>,
    loading_bar: Option<web::HtmlElement>,
    loaded: bool,
}

impl Overlay {
    pub fn mount(document: &web::Document, projects: &[Project], config: &GalleryConfig) -> Self {
        let labels = match dom::html_by_id(document, LABELS_ID) {
            Some(container) => projects
                .iter()
                .filter_map(|p| {
                    let label = Label::create(document, p, &config.route_for(p))?;
                    _ = container.append_child(&label.root);
                    Some(label)
                })
                .collect(),
            None => {
                log::warn!("[overlay] missing #{}, labels disabled", LABELS_ID);
                Vec::new()
            }
        };
        Self {
            labels,
            progress_bar: dom::html_by_id(document, SCROLL_PROGRESS_BAR_ID),
            hint: dom::html_by_id(document, SCROLL_HINT_ID),
            hint_hidden: false,
            loading: dom::html_by_id(document, LOADING_ID),
            loading_bar: dom::html_by_id(document, LOADING_BAR_ID),
            loaded: false,
        }
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        if let Some(bar) = &self.progress_bar {
            if metrics.max_offset > 0.0 {
                let pct = clamp01(metrics.scroll_top / metrics.max_offset) * 100.0;
                dom::set_style(bar, "width", &format!("{pct:.2}%"));
            }
        }
        if !self.hint_hidden && metrics.scroll_top > SCROLL_HINT_THRESHOLD_PX {
            if let Some(hint) = &self.hint {
                _ = hint.class_list().add_1("hidden");
            }
            self.hint_hidden = true;
        }
    }

    /// `progress` is the settled share of cover loads in [0, 1].
    pub fn set_loading(&mut self, progress: f32) {
        if self.loaded {
            return;
        }
        if let Some(bar) = &self.loading_bar {
            dom::set_style(bar, "width", &format!("{:.2}vw", clamp01(progress) * 100.0));
        }
        if progress >= 1.0 {
            self.loaded = true;
            if let Some(el) = &self.loading {
                _ = el.class_list().add_1("loaded");
            }
            log::info!("[overlay] covers settled");
        }
    }

    pub fn update_labels(&mut self, gallery: &Gallery, camera: &Camera, canvas: &web::HtmlCanvasElement) {
        let width = canvas.client_width() as f32;
        let height = canvas.client_height() as f32;
        for (i, label) in self.labels.iter_mut().enumerate() {
            let Some(surface) = gallery.surfaces().get(i) else {
                label.set_visible(false);
                continue;
            };
            label.set_hovering(surface.is_hovered());
            if !gallery.is_in_view(i) {
                label.set_visible(false);
                continue;
            }
            let anchor = gallery.placement(i).local_to_world(Vec3::new(0.0, 0.0, LABEL_DEPTH));
            let Some(ndc) = camera.project(anchor) else {
                label.set_visible(false);
                continue;
            };
            let css = ndc_to_css(ndc, width, height);
            if !css.is_finite() {
                label.set_visible(false);
                continue;
            }
            label.set_visible(true);
            dom::set_style(&label.root, "transform", &centred_transform(css));
        }
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        for label in self.labels.drain(..) {
            label.root.remove();
        }
    }
}
