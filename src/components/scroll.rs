//! Scroll hint and section navigation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

/// Scroll offset past which the hint is hidden.
const HIDE_AFTER_PX: i32 = 100;

/// Whether the hint should be hidden at this scroll offset.
pub fn hint_hidden(scroll_top: i32) -> bool {
	scroll_top > HIDE_AFTER_PX
}

/// Smooth-scrolls to the `.snap-section` at `index`.
/// Returns `false` if there is no such section.
pub fn scroll_to_section(index: u32) -> bool {
	let Some(section) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.query_selector_all(".snap-section").ok())
		.and_then(|sections| sections.get(index))
		.and_then(|node| node.dyn_into::<Element>().ok())
	else {
		return false;
	};

	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	section.scroll_into_view_with_scroll_into_view_options(&options);
	true
}

/// Bouncing "scroll down" hint. Hides once the page is scrolled and jumps to
/// the second section when clicked.
#[component]
pub fn ScrollIndicator(#[prop(into)] scroll_top: Signal<i32>) -> impl IntoView {
	let on_click = move |_: MouseEvent| {
		scroll_to_section(1);
	};

	view! {
		<button
			id="scrollIndicator"
			class="scroll-indicator"
			class:hidden=move || hint_hidden(scroll_top.get())
			aria-label="Scroll to next section"
			on:click=on_click
		>
			<span class="scroll-arrow">"↓"</span>
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hint_hides_only_past_threshold() {
		assert!(!hint_hidden(0));
		assert!(!hint_hidden(100));
		assert!(hint_hidden(101));
		assert!(!hint_hidden(-20));
	}
}
