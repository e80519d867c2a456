//! Background music toggle.
//!
//! There is no audio track yet; the button only tracks and shows its state.

use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

/// Play/pause state owned by the toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
	playing: bool,
}

impl Playback {
	/// Flips the state and returns whether music is now playing.
	pub fn toggle(&mut self) -> bool {
		self.playing = !self.playing;
		self.playing
	}

	pub fn is_playing(&self) -> bool {
		self.playing
	}
}

#[component]
pub fn MusicToggle() -> impl IntoView {
	let playback = RwSignal::new(Playback::default());

	let on_click = move |_: MouseEvent| {
		let mut playing = false;
		playback.update(|p| playing = p.toggle());
		if playing {
			info!("Music would start playing");
		} else {
			info!("Music would pause");
		}
	};

	let playing = move || playback.with(Playback::is_playing);

	view! {
		<button
			id="musicToggle"
			class="music-toggle"
			class:active=playing
			aria-label="Toggle background music"
			aria-pressed=move || playing().to_string()
			on:click=on_click
		>
			"♫"
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_paused_and_alternates() {
		let mut p = Playback::default();
		assert!(!p.is_playing());
		assert!(p.toggle());
		assert!(!p.toggle());
		assert!(p.toggle());
		assert!(p.is_playing());
	}
}
