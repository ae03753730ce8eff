//! Two-level AAC board: a home screen of topics, each holding spoken items
//!
//! The board is a small state machine. On the [`Screen::Home`] screen the
//! images shown are topic entry points; selecting one moves to
//! [`Screen::Topic`], where selecting an image yields text to speak.
//! Only [`AacMappings::select`] and [`AacMappings::reset`] change screens.

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::category::Category;
use crate::error::{Error, Result};
use crate::formats::board::{
    ITEM_MARKER, is_valid_image_id, is_valid_text, parse_board_str, read_board, serialize_board,
    write_board,
};
use crate::page::{BoardPage, Selection};

/// Name given to the category backing the home screen
pub const HOME_CATEGORY: &str = "homeScreen";

/// Which screen the board is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    /// Inside the named topic.
    Topic(String),
}

/// The full set of board mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AacMappings {
    /// Home screen items: image -> topic name
    home: Category,
    /// Topic name -> category holding its leaf items
    categories: IndexMap<String, Category>,
    /// Image -> topic name for every topic entry point
    topics_by_image: IndexMap<String, String>,
    screen: Screen,
}

impl Default for AacMappings {
    fn default() -> Self {
        Self::new()
    }
}

impl AacMappings {
    /// Create an empty board sitting on the home screen
    pub fn new() -> Self {
        Self {
            home: Category::new(HOME_CATEGORY),
            categories: IndexMap::new(),
            topics_by_image: IndexMap::new(),
            screen: Screen::Home,
        }
    }

    /// Load a board from a mapping file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`]
    /// if any line is malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_board(path)
    }

    /// Build a board from mapping file contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if any line is malformed.
    pub fn parse(text: &str) -> Result<Self> {
        parse_board_str(text)
    }

    /// Select an image on the current screen.
    ///
    /// On the home screen this enters the image's topic and returns
    /// [`Selection::Navigated`]. Inside a topic it returns the text to speak
    /// and stays on the same screen. A failed selection never changes screens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageNotFound`] if the image is not on the current screen.
    pub fn select(&mut self, image: &str) -> Result<Selection> {
        if let Screen::Topic(name) = &self.screen {
            let category = self
                .categories
                .get(name)
                .ok_or_else(|| Error::CategoryNotFound { name: name.clone() })?;
            let text = category.select(image)?;
            return Ok(Selection::Spoken(text.to_string()));
        }

        let topic = self
            .topics_by_image
            .get(image)
            .ok_or_else(|| Error::ImageNotFound {
                image: image.to_string(),
                scope: "home screen".to_string(),
            })?
            .clone();
        if !self.categories.contains_key(&topic) {
            return Err(Error::CategoryNotFound { name: topic });
        }
        tracing::debug!(image, topic = %topic, "entering topic");
        self.screen = Screen::Topic(topic.clone());
        Ok(Selection::Navigated(topic))
    }

    /// Images on the current screen, in insertion order
    #[must_use]
    pub fn image_locs(&self) -> Vec<String> {
        self.current_page().map(Category::image_locs).unwrap_or_default()
    }

    /// Return to the home screen
    pub fn reset(&mut self) {
        self.screen = Screen::Home;
    }

    /// Add an item to the current screen.
    ///
    /// On the home screen `text` names a new topic: the image becomes its
    /// entry point and a fresh, empty category is registered under that
    /// name, replacing any category already using it. Inside a topic the
    /// pairing is added as a spoken leaf item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullKey`] if `image` is empty, or if `text` is empty
    /// on the home screen (it would become an empty topic name).
    /// Returns [`Error::InvalidImageId`] if `image` contains whitespace, or
    /// starts with `>` on the home screen, and [`Error::InvalidText`] if
    /// `text` contains a line break. These could not be read back from a
    /// board file.
    pub fn add_item(&mut self, image: &str, text: &str) -> Result<()> {
        if image.is_empty() {
            return Err(Error::NullKey);
        }
        if !is_valid_image_id(image) {
            return Err(Error::InvalidImageId {
                image: image.to_string(),
            });
        }
        if !is_valid_text(text) {
            return Err(Error::InvalidText {
                text: text.to_string(),
            });
        }
        if let Screen::Topic(name) = &self.screen {
            let category = self
                .categories
                .get_mut(name)
                .ok_or_else(|| Error::CategoryNotFound { name: name.clone() })?;
            category.add_item(image, text);
            return Ok(());
        }

        if text.is_empty() {
            return Err(Error::NullKey);
        }
        if image.starts_with(ITEM_MARKER) {
            return Err(Error::InvalidImageId {
                image: image.to_string(),
            });
        }
        self.register_topic(image, text);
        Ok(())
    }

    /// Name of the current topic, or the empty string on the home screen
    #[must_use]
    pub fn current_category(&self) -> &str {
        match &self.screen {
            Screen::Home => "",
            Screen::Topic(name) => name,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Whether `image` is a topic entry point on the home screen.
    ///
    /// Leaf items inside topics are not considered.
    #[must_use]
    pub fn has_image(&self, image: &str) -> bool {
        self.topics_by_image.contains_key(image)
    }

    /// Write the board to a mapping file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_board(path, self)
    }

    /// Serialize the board into mapping file contents
    #[must_use]
    pub fn to_board_string(&self) -> String {
        serialize_board(self)
    }

    /// The category backing the home screen
    #[must_use]
    pub fn home(&self) -> &Category {
        &self.home
    }

    /// Look up a topic's category by name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// All registered topic categories, in registration order
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.values()
    }

    /// `(image, topic)` pairs for every topic entry point, in insertion order
    pub fn topics(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.topics_by_image
            .iter()
            .map(|(image, topic)| (image.as_str(), topic.as_str()))
    }

    /// Register `image` as the entry point of a fresh, empty `topic`.
    pub(crate) fn register_topic(&mut self, image: &str, topic: &str) {
        self.home.add_item(image, topic);
        self.categories
            .insert(topic.to_string(), Category::new(topic));
        self.topics_by_image
            .insert(image.to_string(), topic.to_string());
    }

    pub(crate) fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.get_mut(name)
    }

    fn current_page(&self) -> Option<&Category> {
        match &self.screen {
            Screen::Home => Some(&self.home),
            Screen::Topic(name) => self.categories.get(name),
        }
    }

    #[cfg(test)]
    pub(crate) fn drop_category(&mut self, name: &str) -> Option<Category> {
        self.categories.shift_remove(name)
    }
}

impl FromStr for AacMappings {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl BoardPage for AacMappings {
    fn select(&mut self, image: &str) -> Result<Selection> {
        AacMappings::select(self, image)
    }

    fn image_locs(&self) -> Vec<String> {
        AacMappings::image_locs(self)
    }

    fn add_item(&mut self, image: &str, text: &str) -> Result<()> {
        AacMappings::add_item(self, image, text)
    }

    fn current_category(&self) -> &str {
        AacMappings::current_category(self)
    }

    fn has_image(&self, image: &str) -> bool {
        AacMappings::has_image(self, image)
    }
}
