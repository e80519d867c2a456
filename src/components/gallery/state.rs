//! In-memory photo list backing the gallery grid.

/// Icons cycled through the empty slots.
pub const PLACEHOLDER_ICONS: [&str; 6] = ["📷", "💝", "🌹", "💕", "✨", "💖"];

/// Uploaded photos, held as data URLs for the life of the page only.
#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
	images: Vec<String>,
	slots: usize,
}

impl Gallery {
	/// An empty gallery laid out with `slots` cards.
	pub fn new(slots: usize) -> Self {
		Self {
			images: Vec::new(),
			slots,
		}
	}

	pub fn add(&mut self, data_url: String) {
		self.images.push(data_url);
	}

	/// Removes the photo at `index`. Out-of-range indices are ignored.
	pub fn remove(&mut self, index: usize) -> Option<String> {
		(index < self.images.len()).then(|| self.images.remove(index))
	}

	/// Drops every photo. Returns whether anything was removed.
	pub fn clear(&mut self) -> bool {
		let had_any = !self.images.is_empty();
		self.images.clear();
		had_any
	}

	pub fn images(&self) -> &[String] {
		&self.images
	}

	pub fn is_empty(&self) -> bool {
		self.images.is_empty()
	}

	/// Icons for the empty cards shown after the photos.
	pub fn placeholders(&self) -> Vec<&'static str> {
		let remaining = self.slots.saturating_sub(self.images.len());
		(0..remaining)
			.map(|i| PLACEHOLDER_ICONS[i % PLACEHOLDER_ICONS.len()])
			.collect()
	}
}

/// Whether a file's MIME type marks it as an image.
pub fn is_image(mime: &str) -> bool {
	mime.starts_with("image/")
}
