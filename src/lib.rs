//! valentine-scrapbook: a Valentine's Day digital scrapbook page.
//!
//! This crate provides a WASM page with floating canvas hearts, a countdown
//! to Feb 14, an in-memory photo gallery, and scroll-triggered fade-ins.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub mod components;
pub mod config;

pub use components::countdown::{Countdown, compute as compute_countdown};
pub use components::gallery::PhotoGallery;
pub use components::hearts::{HeartField, HeartStyle, HeartsCanvas};
pub use config::PageConfig;

use components::music::MusicToggle;
use components::reveal::FadeIn;
use components::scroll::ScrollIndicator;
use components::sparkle::SparkleLayer;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("valentine-scrapbook: logging initialized");
}

/// Main application component.
/// Reads page configuration from the DOM and lays out the scrapbook sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let page = config::load();
	let hearts = HeartStyle::from_config(&page.hearts);
	let (title, subtitle, slots) = (page.title, page.subtitle, page.gallery.slots);
	info!("💖 Valentine's Day Digital Scrapbook 💖");
	info!("Made with love for someone special");

	let scroll_top = RwSignal::new(0);
	let on_scroll = move |ev: Event| {
		if let Some(el) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) {
			scroll_top.set(el.scroll_top());
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<HeartsCanvas style=hearts />
		<MusicToggle />
		<SparkleLayer />

		<main class="scroll-container" on:scroll=on_scroll>
			<section class="snap-section hero">
				<FadeIn>
					<h1>{title}</h1>
					<p class="subtitle">{subtitle}</p>
				</FadeIn>
				<ScrollIndicator scroll_top=scroll_top />
			</section>

			<section class="snap-section memories">
				<FadeIn>
					<h2>"Our Memories"</h2>
					<PhotoGallery slots=slots />
				</FadeIn>
			</section>

			<section class="snap-section countdown-section">
				<FadeIn>
					<h2>"Counting Down to Valentine's Day"</h2>
					<Countdown />
				</FadeIn>
			</section>

			<section class="snap-section closing">
				<FadeIn>
					<h2>"Forever Yours"</h2>
					<p>"Every day with you is Valentine's Day."</p>
				</FadeIn>
			</section>
		</main>
	}
}
