//! Leptos component for the photo gallery grid.
//!
//! Selected image files are read into data URLs with `FileReader` and shown as
//! cards; the rest of the grid is padded with placeholder cards.

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement, MouseEvent};

use super::state::{Gallery, is_image};

const CLEAR_PROMPT: &str = "Are you sure you want to clear all photos?";

/// Reads `file` as a data URL and hands it to `on_load` once the read finishes.
fn read_as_data_url(file: &File, on_load: impl FnOnce(String) + 'static) {
	let Ok(reader) = FileReader::new() else {
		warn!("valentine-scrapbook: FileReader unavailable");
		return;
	};

	let reader_done = reader.clone();
	let name = file.name();
	let onload = Closure::once_into_js(move || {
		match reader_done.result().ok().and_then(|r| r.as_string()) {
			Some(url) => on_load(url),
			None => warn!("valentine-scrapbook: could not read {}", name),
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));

	if let Err(e) = reader.read_as_data_url(file) {
		warn!("valentine-scrapbook: read failed: {:?}", e);
	}
}

fn confirm(message: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.confirm_with_message(message).ok())
		.unwrap_or(false)
}

/// Upload button, photo grid and "clear all" control.
#[component]
pub fn PhotoGallery(#[prop(default = 6)] slots: usize) -> impl IntoView {
	let gallery = RwSignal::new(Gallery::new(slots));

	let on_upload = move |ev: Event| {
		let Some(input) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
		else {
			return;
		};

		if let Some(files) = input.files() {
			for file in (0..files.length()).filter_map(|i| files.get(i)) {
				if !is_image(&file.type_()) {
					debug!("valentine-scrapbook: skipping {} ({})", file.name(), file.type_());
					continue;
				}
				read_as_data_url(&file, move |url| gallery.update(|g| g.add(url)));
			}
		}

		// Lets the same file be picked again.
		input.set_value("");
	};

	let on_clear = move |_: MouseEvent| {
		if gallery.with_untracked(Gallery::is_empty) {
			return;
		}
		if confirm(CLEAR_PROMPT) && gallery.try_update(Gallery::clear) == Some(true) {
			debug!("valentine-scrapbook: gallery cleared");
		}
	};

	let photos = move || {
		gallery.with(|g| {
			g.images()
				.iter()
				.enumerate()
				.map(|(index, src)| {
					let src = src.clone();
					view! {
						<div class="photo-card">
							<img src=src alt=format!("Uploaded memory {}", index + 1) loading="lazy" />
							<button
								class="delete-btn"
								aria-label="Delete photo"
								on:click=move |_| {
									gallery.update(|g| {
										g.remove(index);
									});
								}
							>
								"×"
							</button>
						</div>
					}
				})
				.collect_view()
		})
	};

	let placeholders = move || {
		gallery.with(|g| {
			g.placeholders()
				.into_iter()
				.map(|icon| {
					view! {
						<div class="photo-card placeholder">
							<div class="placeholder-icon">{icon}</div>
							<p>"Upload Photo"</p>
						</div>
					}
				})
				.collect_view()
		})
	};

	view! {
		<div class="gallery">
			<div class="gallery-controls">
				<label class="upload-btn" for="imageUpload">"Add Photos"</label>
				<input
					type="file"
					id="imageUpload"
					accept="image/*"
					multiple=true
					style="display: none;"
					on:change=on_upload
				/>
				<button id="clearGallery" class="clear-btn" on:click=on_clear>
					"Clear All"
				</button>
			</div>
			<div id="photoGrid" class="photo-grid">
				{photos}
				{placeholders}
			</div>
		</div>
	}
}
