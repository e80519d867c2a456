//! Leptos component showing the Valentine's Day countdown.
//!
//! The four slots are filled once on mount and then refreshed by a one-second
//! `setInterval` that lives as long as the page.

use chrono::Local;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;

use super::calc::{self, CountdownText};

const TICK_MS: i32 = 1_000;

fn now_text() -> CountdownText {
	calc::compute(&Local::now()).text()
}

/// Days/hours/minutes/seconds until the next Feb 14, updated every second.
#[component]
pub fn Countdown() -> impl IntoView {
	let text = RwSignal::new(now_text());

	let tick: Closure<dyn FnMut()> = Closure::new(move || text.set(now_text()));
	match web_sys::window().map(|w| {
		w.set_interval_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			TICK_MS,
		)
	}) {
		Some(Ok(_)) => {
			info!("valentine-scrapbook: countdown running");
			tick.forget();
		}
		_ => warn!("valentine-scrapbook: could not start countdown timer"),
	}

	let unit = move |value: Signal<String>, label: &'static str, id: &'static str| {
		view! {
			<div class="countdown-unit">
				<span class="countdown-value" id=id>{value}</span>
				<span class="countdown-label">{label}</span>
			</div>
		}
	};

	view! {
		<div class="countdown" role="timer" aria-label="Time until Valentine's Day">
			{unit(Signal::derive(move || text.with(|t| t.days.clone())), "Days", "days")}
			{unit(Signal::derive(move || text.with(|t| t.hours.clone())), "Hours", "hours")}
			{unit(Signal::derive(move || text.with(|t| t.minutes.clone())), "Minutes", "minutes")}
			{unit(Signal::derive(move || text.with(|t| t.seconds.clone())), "Seconds", "seconds")}
		</div>
	}
}
