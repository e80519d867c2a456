//! Page configuration read from the host document.
//!
//! The page may embed a JSON block:
//!
//! ```html
//! <script id="scrapbook-config" type="application/json">
//!   { "title": "For Sam", "hearts": { "count": 20 } }
//! </script>
//! ```
//!
//! Every field is optional; anything missing keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Element id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "scrapbook-config";

/// Floating heart overrides.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeartConfig {
	/// Pool size, fixed once the page has started.
	pub count: usize,
	/// CSS color, `#RRGGBB` or `rgb()`/`rgba()`.
	pub color: String,
	pub size_min: f64,
	pub size_max: f64,
	pub speed_min: f64,
	pub speed_max: f64,
	pub drift: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
}

impl Default for HeartConfig {
	fn default() -> Self {
		Self {
			count: 15,
			color: "#b76e79".into(),
			size_min: 15.0,
			size_max: 35.0,
			speed_min: 0.5,
			speed_max: 2.0,
			drift: 1.0,
			opacity_min: 0.3,
			opacity_max: 0.8,
		}
	}
}

/// Gallery layout.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
	/// Cards shown in the grid, photos first, placeholders after.
	pub slots: usize,
}

impl Default for GalleryConfig {
	fn default() -> Self {
		Self { slots: 6 }
	}
}

/// Complete page configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	pub title: String,
	pub subtitle: String,
	pub hearts: HeartConfig,
	pub gallery: GalleryConfig,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			title: "Our Love Story".into(),
			subtitle: "A scrapbook of our favourite moments".into(),
			hearts: HeartConfig::default(),
			gallery: GalleryConfig::default(),
		}
	}
}

impl PageConfig {
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Loads the page configuration, falling back to defaults when the block is
/// absent or malformed.
pub fn load() -> PageConfig {
	let Some(json) = config_text() else {
		return PageConfig::default();
	};

	match PageConfig::from_json(&json) {
		Ok(config) => {
			info!(
				"valentine-scrapbook: loaded config ({} hearts, {} gallery slots)",
				config.hearts.count, config.gallery.slots
			);
			config
		}
		Err(e) => {
			warn!("valentine-scrapbook: failed to parse config: {}", e);
			PageConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_the_stock_page() {
		assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
	}

	#[test]
	fn partial_sections_keep_other_defaults() {
		let config = PageConfig::from_json(
			r##"{ "title": "For Sam", "hearts": { "count": 20, "color": "#ff0000" } }"##,
		)
		.unwrap();
		assert_eq!(config.title, "For Sam");
		assert_eq!(config.hearts.count, 20);
		assert_eq!(config.hearts.color, "#ff0000");
		assert_eq!(config.hearts.size_max, 35.0);
		assert_eq!(config.gallery.slots, 6);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(PageConfig::from_json("{ hearts: ").is_err());
		assert!(PageConfig::from_json(r#"{ "hearts": { "count": -1 } }"#).is_err());
	}
}
