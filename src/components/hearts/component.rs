//! Leptos component wrapping the floating hearts canvas.
//!
//! The component creates a full-viewport canvas, keeps its pixel size in step
//! with the window, and runs an animation loop via `requestAnimationFrame`
//! that ticks the heart field and redraws it every frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::HeartField;
use super::render;
use super::theme::HeartStyle;

/// Bundles the heart pool with the 2D context it draws into.
struct HeartsContext {
	field: HeartField<StdRng>,
	ctx: CanvasRenderingContext2d,
}

/// Current viewport size in CSS pixels. Missing values read as zero.
fn viewport(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

/// Seed drawn from the browser's RNG and clock so every page load differs.
fn page_seed() -> u64 {
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let now = js_sys::Date::now() as u64;
	(noise << 32) ^ now
}

/// Renders floating hearts on a fixed, full-viewport canvas behind the page.
///
/// The heart pool is created once on mount and animated for the life of the
/// page. Window resizes update the canvas size without touching the hearts.
#[component]
pub fn HeartsCanvas(#[prop(optional)] style: HeartStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<HeartsContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("valentine-scrapbook: 2d canvas context unavailable, hearts disabled");
			return;
		};

		let field = HeartField::new(style.clone(), w, h, StdRng::seed_from_u64(page_seed()));
		info!(
			"valentine-scrapbook: {} hearts on a {}x{} canvas",
			field.hearts().len(),
			w,
			h
		);
		*context.borrow_mut() = Some(HeartsContext { field, ctx });

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.tick();
				render::render(&c.field, &c.ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="heartsCanvas"
			class="hearts-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}
