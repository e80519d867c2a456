//! Sparkles that burst from clicked photo cards.
//!
//! A document-level click listener spawns a short-lived dot wherever a click
//! lands inside a `.photo-card`; each dot removes itself after its animation.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// How long a sparkle stays on the page, matching its CSS animation.
const LIFETIME_MS: i32 = 1_000;
const DIAMETER_PX: f64 = 10.0;
/// Sideways float is drawn from `[-MAX_DRIFT_PX, MAX_DRIFT_PX)`.
const MAX_DRIFT_PX: f64 = 50.0;
const COLOR: &str = "#d4a373";

/// One floating dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
	pub id: u64,
	pub x: f64,
	pub y: f64,
	/// Horizontal distance travelled by the end of the animation.
	pub drift: f64,
}

impl Sparkle {
	/// `unit` is a uniform sample from `[0, 1)`.
	pub fn new(id: u64, x: f64, y: f64, unit: f64) -> Self {
		Self {
			id,
			x,
			y,
			drift: unit * 2.0 * MAX_DRIFT_PX - MAX_DRIFT_PX,
		}
	}

	pub fn style(&self) -> String {
		format!(
			"position: fixed; left: {}px; top: {}px; width: {d}px; height: {d}px; \
			 background: {COLOR}; border-radius: 50%; pointer-events: none; z-index: 9999; \
			 --drift: {}px; animation: sparkleFloat 1s ease-out forwards;",
			self.x,
			self.y,
			self.drift,
			d = DIAMETER_PX,
		)
	}
}

/// Whether a click on `target` landed inside a photo card.
fn on_photo_card(target: &Element) -> bool {
	target.closest(".photo-card").ok().flatten().is_some()
}

/// Hosts every live sparkle and listens for clicks on photo cards.
#[component]
pub fn SparkleLayer() -> impl IntoView {
	let sparkles = RwSignal::new(Vec::<Sparkle>::new());
	let next_id = StoredValue::new(0_u64);

	let on_click: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
		let hit = ev
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.is_some_and(|el| on_photo_card(&el));
		if !hit {
			return;
		}

		let id = next_id.get_value();
		next_id.set_value(id.wrapping_add(1));
		let sparkle = Sparkle::new(
			id,
			ev.page_x() as f64,
			ev.page_y() as f64,
			js_sys::Math::random(),
		);
		sparkles.update(|s| s.push(sparkle));

		let expire = Closure::once_into_js(move || sparkles.update(|s| s.retain(|sp| sp.id != id)));
		let scheduled = web_sys::window().map(|w| {
			w.set_timeout_with_callback_and_timeout_and_arguments_0(
				expire.unchecked_ref(),
				LIFETIME_MS,
			)
		});
		if !matches!(scheduled, Some(Ok(_))) {
			sparkles.update(|s| s.retain(|sp| sp.id != id));
		}
	});

	match web_sys::window().and_then(|w| w.document()) {
		Some(document) => {
			let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
			on_click.forget();
		}
		None => warn!("valentine-scrapbook: no document, sparkles disabled"),
	}

	view! {
		<div class="sparkle-layer" aria-hidden="true">
			<For
				each=move || sparkles.get()
				key=|s: &Sparkle| s.id
				children=|s| view! { <div class="sparkle" style=s.style()></div> }
			/>
		</div>
	}
}
