//! Scroll-triggered fade-in.
//!
//! Wrapped content starts hidden and gains the `visible` class the first time
//! an `IntersectionObserver` sees it enter the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be on screen.
const THRESHOLD: f64 = 0.2;
/// Pulls the viewport's bottom edge up so elements reveal a little late.
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Keeps the observer and its JS callback alive together.
struct Watch {
	_observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

/// Calls `on_visible` whenever `element` starts intersecting the viewport.
fn watch(element: &Element, on_visible: impl Fn() + 'static) -> Option<Watch> {
	let callback: Closure<dyn FnMut(js_sys::Array)> = Closure::new(move |entries: js_sys::Array| {
		let intersecting = entries
			.iter()
			.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
			.any(|e| e.is_intersecting());
		if intersecting {
			on_visible();
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);

	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	observer.observe(element);

	Some(Watch {
		_observer: observer,
		_callback: callback,
	})
}

/// Fades its children in once they scroll into view.
#[component]
pub fn FadeIn(children: Children) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(false);
	let active: Rc<RefCell<Option<Watch>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		if active.borrow().is_some() {
			return;
		}
		let el: Element = el.into();
		match watch(&el, move || visible.set(true)) {
			Some(w) => *active.borrow_mut() = Some(w),
			None => {
				warn!("valentine-scrapbook: IntersectionObserver unavailable, showing content");
				visible.set(true);
			}
		}
	});

	view! {
		<div node_ref=node_ref class="fade-in-element" class:visible=move || visible.get()>
			{children()}
		</div>
	}
}
