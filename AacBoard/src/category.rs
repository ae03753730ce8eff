//! A single topic of the board: an ordered set of image to spoken text mappings

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::formats::board::{is_valid_image_id, is_valid_text};
use crate::page::{BoardPage, Selection};

/// The mappings for one category of items shown together on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: IndexMap<String, String>,
}

impl Category {
    /// Create an empty category with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: IndexMap::new(),
        }
    }

    /// Add an image location, text pairing to the category.
    ///
    /// Re-adding an existing image replaces its text in place, keeping its
    /// original position. A pairing that could not be written to a board
    /// file (empty or whitespace-containing image identifier, multi-line
    /// text) is ignored and leaves the category unchanged; the return value
    /// reports whether the pairing was stored.
    pub fn add_item(&mut self, image: impl Into<String>, text: impl Into<String>) -> bool {
        let image = image.into();
        let text = text.into();
        if !is_valid_image_id(&image) || !is_valid_text(&text) {
            tracing::warn!(category = %self.name, image = %image, "ignoring unstorable item");
            return false;
        }
        self.items.insert(image, text);
        true
    }

    /// All image locations in the category, in insertion order
    #[must_use]
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// The text associated with `image`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageNotFound`] if the image is not in this category.
    pub fn select(&self, image: &str) -> Result<&str> {
        self.text_for(image).ok_or_else(|| Error::ImageNotFound {
            image: image.to_string(),
            scope: self.name.clone(),
        })
    }

    #[must_use]
    pub fn text_for(&self, image: &str) -> Option<&str> {
        self.items.get(image).map(String::as_str)
    }

    #[must_use]
    pub fn has_image(&self, image: &str) -> bool {
        self.items.contains_key(image)
    }

    /// Name of the category
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate `(image, text)` pairs in insertion order
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl BoardPage for Category {
    fn select(&mut self, image: &str) -> Result<Selection> {
        Category::select(self, image).map(|text| Selection::Spoken(text.to_string()))
    }

    fn image_locs(&self) -> Vec<String> {
        Category::image_locs(self)
    }

    // Best-effort: a rejected item is dropped rather than reported.
    fn add_item(&mut self, image: &str, text: &str) -> Result<()> {
        Category::add_item(self, image, text);
        Ok(())
    }

    fn current_category(&self) -> &str {
        &self.name
    }

    fn has_image(&self, image: &str) -> bool {
        Category::has_image(self, image)
    }
}
