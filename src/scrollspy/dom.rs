use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use super::{Intersection, LinkMarker, Scrollspy, Section, ViewportObserver, ACTIVE_ATTR, ROOT_MARGIN, THRESHOLD};

const SECTION_SELECTOR: &str = "header[id], section[id]";
const LINK_SELECTOR: &str = "nav a[href^=\"#\"]";

type Controller = Scrollspy<Element, BandObserver>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

impl LinkMarker for Element {
    fn set_active(&self, active: bool) {
        let result = if active {
            self.set_attribute(ACTIVE_ATTR, "true")
        } else {
            self.remove_attribute(ACTIVE_ATTR)
        };
        if let Err(err) = result {
            warn!("failed to update {} on nav link: {:?}", ACTIVE_ATTR, err);
        }
    }
}

pub struct BandObserver {
    inner: IntersectionObserver,
}

impl ViewportObserver for BandObserver {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.inner.observe(target);
    }

    fn disconnect(&mut self) {
        self.inner.disconnect();
    }
}

/// Live scrollspy on the current document. Owns the observer callback;
/// call `teardown` before dropping it so the observer never outlives it.
pub struct ScrollspyHandle {
    controller: Rc<RefCell<Option<Controller>>>,
    _callback: ObserverCallback,
}

impl ScrollspyHandle {
    pub fn teardown(self) {
        if let Some(mut controller) = self.controller.borrow_mut().take() {
            controller.teardown();
        }
    }
}

fn query_all(document: &web_sys::Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn to_intersections(entries: &Array) -> Vec<Intersection> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| Intersection {
            id: entry.target().id(),
            is_intersecting: entry.is_intersecting(),
        })
        .collect()
}

/// Builds the registries from the rendered document and starts observing.
pub fn mount() -> Result<ScrollspyHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let sections: Vec<Section<Element>> = query_all(&document, SECTION_SELECTOR)?
        .into_iter()
        .map(|el| Section { id: el.id(), target: el })
        .collect();
    let links: Vec<(String, Element)> = query_all(&document, LINK_SELECTOR)?
        .into_iter()
        .filter_map(|a| a.get_attribute("href").map(|href| (href, a)))
        .collect();

    let controller: Rc<RefCell<Option<Controller>>> = Rc::new(RefCell::new(None));
    let callback = {
        let controller = controller.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _: IntersectionObserver| {
            if let Some(spy) = controller.borrow().as_ref() {
                spy.handle(to_intersections(&entries));
            }
        })
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let spy = Scrollspy::new(sections, links, BandObserver { inner });
    debug!("scrollspy sections: {:?}", spy.section_ids().collect::<Vec<_>>());
    *controller.borrow_mut() = Some(spy);

    Ok(ScrollspyHandle {
        controller,
        _callback: callback,
    })
}

/// Runs the scrollspy for as long as the calling component is mounted.
#[hook]
pub fn use_scrollspy() {
    use_effect_once(|| {
        let handle = match mount() {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("scrollspy not started: {:?}", err);
                None
            }
        };
        move || {
            if let Some(handle) = handle {
                handle.teardown();
            }
        }
    });
}
