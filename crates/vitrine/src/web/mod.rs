//! Browser entry point.
//!
//! Wires [`Portfolio`] to the DOM. Every lookup is optional: a page without
//! a canvas, a toggle or a modal still gets the rest.

mod adapters;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vitrine_ui::{Key, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, NodeList, Window};

pub use adapters::{
    AnimationFrameScheduler, CanvasSurface, DocumentTheme, FrameCallback, LocalStoragePreferences,
};

use crate::app::{Portfolio, PortfolioHost};
use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::projects::ProjectView;

type WebPortfolio = Portfolio<CanvasSurface, AnimationFrameScheduler, LocalStoragePreferences>;
type Shared = Rc<RefCell<Option<WebPortfolio>>>;

/// Section the hero's scroll-down button leads to.
const SCROLL_DOWN_TARGET: &str = "sobre";

/// Starts the page once the module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = SiteConfig::default();
    let app: Shared = Rc::new(RefCell::new(None));

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let app = Rc::clone(&app);
        *callback.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.frame();
            }
        }));
    }

    let surface = CanvasSurface::from_document(&window, &document, &config.background.canvas_id);
    let reveal_ids = reveal_elements(&document)
        .iter()
        .map(Element::id)
        .collect::<Vec<_>>();

    let host = PortfolioHost {
        surface,
        scheduler: AnimationFrameScheduler::new(window.clone(), callback),
        preferences: LocalStoragePreferences::new(&window),
        seed: entropy_seed(),
        reveal_ids,
        intersection_observer: false,
    };
    let portfolio = Portfolio::new(config, host);

    let theme = Rc::new(DocumentTheme::new(&document));
    theme.apply(portfolio.theme().current(), portfolio.theme().icons());
    for element in reveal_elements(&document) {
        let _ = element.class_list().add_1(crate::reveal::ScrollReveal::SHOW_CLASS);
    }
    *app.borrow_mut() = Some(portfolio);

    bind_window(&window, &document, &app);
    bind_theme_toggle(&document, &app, &theme);
    bind_menu(&document, &app);
    bind_projects(&document, &app);
    bind_carousel(&document, &app);
    bind_smooth_scroll(&window, &document, &app);
    start_typing(&window, &document, &app);

    web_sys::console::log_1(&"Portfolio application initialized.".into());
}

fn entropy_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    ChaCha8Rng::seed_from_u64(seed ^ js_sys::Date::now().to_bits()).next_u64()
}

fn elements(nodes: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(nodes) = nodes else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal_elements(document: &Document) -> Vec<Element> {
    elements(document.query_selector_all(".reveal"))
}

#[allow(clippy::cast_possible_truncation)]
fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[allow(clippy::cast_possible_truncation)]
fn seconds_between(earlier: f64, later: f64) -> f32 {
    ((later - earlier) / 1000.0).max(0.0) as f32
}

fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    // Page-lifetime listener.
    closure.forget();
}

fn sync_body(document: &Document, app: &WebPortfolio) {
    let Some(body) = document.body() else {
        return;
    };
    let classes = app.body_classes();
    for class in [crate::menu::MobileMenu::BODY_CLASS, crate::projects::ProjectModal::BODY_CLASS] {
        let _ = body
            .class_list()
            .toggle_with_force(class, classes.contains(&class));
    }
}

fn bind_window(window: &Window, document: &Document, app: &Shared) {
    {
        let app = Rc::clone(app);
        listen(window, "resize", move |_: Event| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.on_resize();
            }
        });
    }
    {
        let app = Rc::clone(app);
        let page = document.clone();
        listen(document, "keydown", move |event: KeyboardEvent| {
            if let Some(app) = app.borrow_mut().as_mut() {
                if app.handle_key(Key::from_dom_key(&event.key())) {
                    sync_body(&page, app);
                    set_active(&page, "projectModal", false);
                }
            }
        });
    }
    {
        let app = Rc::clone(app);
        let navbar = document.get_element_by_id("navbar");
        let viewport_window = window.clone();
        listen(window, "scroll", move |_: Event| {
            #[allow(clippy::cast_possible_truncation)]
            let scroll_y = viewport_window.scroll_y().unwrap_or(0.0) as f32;
            if let Some(app) = app.borrow_mut().as_mut() {
                app.on_scroll(scroll_y, &Rect::ZERO, &[]);
                if let Some(navbar) = &navbar {
                    let _ = navbar
                        .class_list()
                        .toggle_with_force(crate::navbar::Navbar::SCROLLED_CLASS, app.navbar().is_scrolled());
                }
            }
        });
    }
}

fn bind_theme_toggle(document: &Document, app: &Shared, theme: &Rc<DocumentTheme>) {
    let Some(toggle) = document.get_element_by_id("themeToggle") else {
        return;
    };
    let app = Rc::clone(app);
    let theme = Rc::clone(theme);
    listen(&toggle, "click", move |_: Event| {
        if let Some(app) = app.borrow_mut().as_mut() {
            let mode = app.toggle_theme();
            theme.apply(mode, app.theme().icons());
        }
    });
}

fn set_active(document: &Document, id: &str, active: bool) {
    if let Some(element) = document.get_element_by_id(id) {
        let _ = element.class_list().toggle_with_force("active", active);
    }
}

fn bind_menu(document: &Document, app: &Shared) {
    let bind = |element: Element, action: fn(&mut WebPortfolio, bool)| {
        let app = Rc::clone(app);
        let document = document.clone();
        listen(&element, "click", move |event: Event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t.id() == "mobileMenu");
            if let Some(app) = app.borrow_mut().as_mut() {
                action(app, on_backdrop);
                set_active(&document, "mobileMenu", app.menu().is_open());
                sync_body(&document, app);
            }
        });
    };

    if let Some(toggle) = document.get_element_by_id("menuToggle") {
        bind(toggle, |app, _| app.open_mobile_menu());
    }
    if let Some(close) = document.get_element_by_id("closeMenu") {
        bind(close, |app, _| app.close_mobile_menu());
    }
    if let Some(menu) = document.get_element_by_id("mobileMenu") {
        bind(menu, |app, on_backdrop| app.menu_mut().on_click(on_backdrop));
    }
    for link in elements(document.query_selector_all(".mobile-link, .btn-cv-mobile")) {
        bind(link, |app, _| app.menu_mut().on_link_click());
    }
}

fn fill_modal(document: &Document, view: &ProjectView) {
    let set_text = |id: &str, text: &str| {
        if let Some(element) = document.get_element_by_id(id) {
            element.set_text_content(Some(text));
        }
    };
    set_text("modalTitle", &view.title);
    set_text("modalChallenge", &view.challenge);
    set_text("modalSolution", &view.solution);
    set_text("modalImpact", &view.impact);

    let append = |parent: &Element, class: &str, text: &str| -> Option<Element> {
        let child = document.create_element("span").ok()?;
        child.set_class_name(class);
        child.set_text_content(Some(text));
        parent.append_child(&child).ok()?;
        Some(child)
    };

    if let Some(tags) = document.get_element_by_id("modalTags") {
        tags.set_text_content(None);
        for tag in &view.tags {
            append(&tags, "modal-tag", tag);
        }
    }
    if let Some(metrics) = document.get_element_by_id("modalMetrics") {
        metrics.set_text_content(None);
        for metric in &view.metrics {
            if let Some(item) = append(&metrics, "metric-item", "") {
                append(&item, "metric-value", &metric.value);
                append(&item, "metric-label", &metric.label);
            }
        }
    }
    if let Some(links) = document.get_element_by_id("modalLinks") {
        links.set_text_content(None);
        for link in &view.links {
            let Ok(anchor) = document.create_element("a") else {
                continue;
            };
            let _ = anchor.set_attribute("href", &link.href);
            let _ = anchor.set_attribute("target", "_blank");
            anchor.set_class_name(link.class);
            anchor.set_text_content(Some(link.label));
            let _ = links.append_child(&anchor);
        }
    }
}

fn bind_projects(document: &Document, app: &Shared) {
    for card in elements(document.query_selector_all(".project-card")) {
        let Some(index) = card
            .get_attribute("data-index")
            .and_then(|v| v.parse::<usize>().ok())
        else {
            continue;
        };
        let app = Rc::clone(app);
        let document = document.clone();
        listen(&card, "click", move |event: Event| {
            let on_link = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|t| t.closest("a").ok().flatten())
                .is_some();
            if on_link {
                return;
            }
            if let Some(app) = app.borrow_mut().as_mut() {
                if app.open_project_modal(index) {
                    if let Some(view) = app.projects().view() {
                        fill_modal(&document, view);
                    }
                    set_active(&document, "projectModal", true);
                    sync_body(&document, app);
                }
            }
        });
    }

    let close = |element: Element, overlay_only: bool| {
        let app = Rc::clone(app);
        let document = document.clone();
        listen(&element, "click", move |event: Event| {
            let on_overlay = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t.id() == "projectModal");
            if let Some(app) = app.borrow_mut().as_mut() {
                if overlay_only {
                    app.projects_mut().on_overlay_click(on_overlay);
                } else {
                    app.close_project_modal();
                }
                set_active(&document, "projectModal", app.projects().is_open());
                sync_body(&document, app);
            }
        });
    };
    if let Some(button) = document.get_element_by_id("closeModal") {
        close(button, false);
    }
    if let Some(overlay) = document.get_element_by_id("projectModal") {
        close(overlay, true);
    }
}

/// The carousel's DOM: track, arrow buttons, cards and dots.
struct CarouselView {
    track: Element,
    prev: Element,
    next: Element,
    cards: Vec<Element>,
    dots: Vec<Element>,
}

impl CarouselView {
    fn find(document: &Document) -> Option<Self> {
        let track = document.get_element_by_id("projectsTrack")?;
        let cards = elements(track.query_selector_all(".project-card"));
        Some(Self {
            prev: document.get_element_by_id("prevProject")?,
            next: document.get_element_by_id("nextProject")?,
            dots: elements(document.query_selector_all(".carousel-dots .dot")),
            track,
            cards,
        })
    }

    /// Rendered width of the first card; cards share one width.
    #[allow(clippy::cast_precision_loss)]
    fn card_width(&self) -> f32 {
        self.cards
            .first()
            .and_then(|card| card.dyn_ref::<HtmlElement>())
            .map_or(0.0, |card| card.offset_width() as f32)
    }

    /// Scrolls the track to `offset`, if given, and mirrors button and dot state.
    fn apply(&self, carousel: &Carousel, offset: Option<f32>) {
        if let Some(offset) = offset {
            self.track.scroll_to_with_x_and_y(f64::from(offset), 0.0);
        }
        let _ = self
            .prev
            .toggle_attribute_with_force("disabled", carousel.prev_disabled());
        let _ = self
            .next
            .toggle_attribute_with_force("disabled", carousel.next_disabled());
        for (dot, active) in self.dots.iter().zip(carousel.dot_states()) {
            let _ = dot.class_list().toggle_with_force("active", active);
        }
    }
}

fn bind_carousel(document: &Document, app: &Shared) {
    let Some(view) = CarouselView::find(document) else {
        return;
    };
    let view = Rc::new(view);
    if let Some(app) = app.borrow().as_ref() {
        if app.carousel().is_inert() {
            return;
        }
        view.apply(app.carousel(), None);
    }

    let bind = |button: &Element, index: usize, action: fn(&mut WebPortfolio, usize) -> Option<f32>| {
        let app = Rc::clone(app);
        let view = Rc::clone(&view);
        listen(button, "click", move |_: Event| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.carousel_mut().set_card_width(view.card_width());
                let offset = action(app, index);
                view.apply(app.carousel(), offset);
            }
        });
    };
    bind(&view.prev, 0, |app, _| app.prev_project());
    bind(&view.next, 0, |app, _| app.next_project());
    for (index, dot) in view.dots.iter().enumerate() {
        bind(dot, index, WebPortfolio::go_to_project);
    }

    let app = Rc::clone(app);
    let track_view = Rc::clone(&view);
    listen(&view.track, "scroll", move |_: Event| {
        let track = client_rect(&track_view.track);
        let cards = track_view.cards.iter().map(client_rect).collect::<Vec<_>>();
        if let Some(app) = app.borrow_mut().as_mut() {
            if app.on_carousel_scroll(&track, &cards) {
                track_view.apply(app.carousel(), None);
            }
        }
    });
}

fn bind_smooth_scroll(window: &Window, document: &Document, app: &Shared) {
    let running = Rc::new(Cell::new(false));
    let step: FrameCallback = Rc::new(RefCell::new(None));
    {
        let app = Rc::clone(app);
        let running = Rc::clone(&running);
        let next = Rc::clone(&step);
        let frame_window = window.clone();
        let mut last: Option<f64> = None;
        *step.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            let dt = last.map_or(0.0, |last| seconds_between(last, timestamp));
            let offset = app
                .borrow_mut()
                .as_mut()
                .and_then(|app| app.scroll_frame(dt));
            let Some(offset) = offset else {
                last = None;
                running.set(false);
                return;
            };
            frame_window.scroll_to_with_x_and_y(0.0, f64::from(offset));
            last = Some(timestamp);
            if let Some(callback) = next.borrow().as_ref() {
                if frame_window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    running.set(false);
                }
            }
        }));
    }

    let start: Rc<dyn Fn(&Element)> = {
        let app = Rc::clone(app);
        let window = window.clone();
        Rc::new(move |target: &Element| {
            #[allow(clippy::cast_possible_truncation)]
            let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
            if let Some(app) = app.borrow_mut().as_mut() {
                app.scroll_to_section(scroll_y, &client_rect(target));
            }
            // One loop at a time; a running loop picks up the new target.
            if running.replace(true) {
                return;
            }
            if let Some(callback) = step.borrow().as_ref() {
                if window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    running.set(false);
                }
            }
        })
    };

    for anchor in elements(document.query_selector_all("a[href^=\"#\"]")) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let start = Rc::clone(&start);
        let document = document.clone();
        listen(&anchor, "click", move |event: Event| {
            // A bare "#" is not a valid selector and falls through here.
            if let Ok(Some(target)) = document.query_selector(&href) {
                event.prevent_default();
                start(&target);
            }
        });
    }
    if let Some(button) = document.get_element_by_id("scrollDown") {
        let document = document.clone();
        listen(&button, "click", move |_: Event| {
            if let Some(target) = document.get_element_by_id(SCROLL_DOWN_TARGET) {
                start(&target);
            }
        });
    }
}

fn start_typing(window: &Window, document: &Document, app: &Shared) {
    let Some(target) = document.get_element_by_id("typedText") else {
        return;
    };
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let next = Rc::clone(&slot);
    let app = Rc::clone(app);
    let timer = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move || {
        let step = app
            .borrow_mut()
            .as_mut()
            .and_then(|app| app.typing_mut().step());
        let Some(step) = step else {
            return;
        };
        target.set_text_content(Some(&step.text));
        if let Some(callback) = next.borrow().as_ref() {
            let delay = i32::try_from(step.delay_ms).unwrap_or(i32::MAX);
            let _ = timer.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            );
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), 0);
    }
}
