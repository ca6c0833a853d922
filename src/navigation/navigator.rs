use crossterm::event::KeyCode;

use super::scroll::{NoopScrollLock, ScrollLock};
use crate::manifest::{Category, Image};

/// Which of the three gallery screens the navigator is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Category list
    Categories,
    /// Image grid of the selected category
    Images,
    /// Fullscreen single-image overlay on top of the grid
    Lightbox,
}

/// Snapshot of the navigator state handed to the renderer after every
/// transition
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub selected_category_id: Option<&'a str>,
    pub lightbox_open: bool,
    pub current_image_index: usize,
    pub current_images: &'a [Image],
}

impl ViewState<'_> {
    /// "X / N" position text for the lightbox caption area
    pub fn position_text(&self) -> String {
        format!(
            "{} / {}",
            self.current_image_index + 1,
            self.current_images.len()
        )
    }
}

/// The gallery navigator: category selection, lightbox visibility and
/// wrap-around image index over a fixed, pre-loaded set of categories.
///
/// Every operation is a total function: inputs outside the reachable state
/// space (unknown category id, out-of-range index, key presses with the
/// lightbox closed) are no-ops, never errors. The category data is supplied
/// whole at construction and never mutated.
pub struct Navigator {
    categories: Vec<Category>,
    selected_category: Option<String>,
    lightbox_open: bool,
    current_index: usize,
    scroll_lock: Box<dyn ScrollLock>,
}

impl Navigator {
    pub fn new(categories: Vec<Category>) -> Self {
        Self::with_scroll_lock(categories, Box::new(NoopScrollLock))
    }

    pub fn with_scroll_lock(categories: Vec<Category>, scroll_lock: Box<dyn ScrollLock>) -> Self {
        Self {
            categories,
            selected_category: None,
            lightbox_open: false,
            current_index: 0,
            scroll_lock,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.selected_category.as_deref().and_then(|id| self.category(id))
    }

    /// Images of the selected category; empty on the category list
    pub fn current_images(&self) -> &[Image] {
        self.current_category()
            .map(|cat| cat.images.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_category_id(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    /// Index of the image shown in the lightbox. Only meaningful while the
    /// lightbox is open.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn screen(&self) -> Screen {
        match (&self.selected_category, self.lightbox_open) {
            (None, _) => Screen::Categories,
            (Some(_), false) => Screen::Images,
            (Some(_), true) => Screen::Lightbox,
        }
    }

    pub fn view_state(&self) -> ViewState<'_> {
        ViewState {
            selected_category_id: self.selected_category_id(),
            lightbox_open: self.lightbox_open,
            current_image_index: self.current_index,
            current_images: self.current_images(),
        }
    }

    /// Select a category and show its image grid. Any open lightbox is
    /// closed and the image index reset; an unknown id is a no-op.
    pub fn select_category(&mut self, id: &str) {
        if self.category(id).is_none() {
            return;
        }

        self.exit_lightbox();
        self.selected_category = Some(id.to_string());
        self.current_index = 0;
    }

    /// Back to the category list, from the grid or straight out of an open
    /// lightbox. Idempotent.
    pub fn return_to_categories(&mut self) {
        self.exit_lightbox();
        self.selected_category = None;
        self.current_index = 0;
    }

    /// Open the lightbox on the given index into the selected category's
    /// image sequence. No-op without a selected category, on an empty
    /// category, or when the index is out of range.
    pub fn open_lightbox(&mut self, index: usize) {
        let count = self.current_images().len();
        if count == 0 || index >= count {
            return;
        }

        self.current_index = index;
        if !self.lightbox_open {
            self.lightbox_open = true;
            self.scroll_lock.acquire();
        }
    }

    /// Close the lightbox, restoring page scroll. Idempotent.
    pub fn close_lightbox(&mut self) {
        self.exit_lightbox();
    }

    /// Advance to the next image, wrapping past the last back to the first.
    /// No-op while the lightbox is closed.
    pub fn next_image(&mut self) {
        let count = self.current_images().len();
        if !self.lightbox_open || count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % count;
    }

    /// Retreat to the previous image, wrapping past the first to the last.
    /// No-op while the lightbox is closed.
    pub fn prev_image(&mut self) {
        let count = self.current_images().len();
        if !self.lightbox_open || count == 0 {
            return;
        }
        self.current_index = (self.current_index + count - 1) % count;
    }

    /// Lightbox keyboard contract: Escape closes, arrows navigate, every
    /// other key is ignored
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_lightbox(),
            KeyCode::Right => self.next_image(),
            KeyCode::Left => self.prev_image(),
            _ => {}
        }
    }

    // Single funnel for leaving the lightbox state, so the scroll lock is
    // released exactly once on every exit path.
    fn exit_lightbox(&mut self) {
        if self.lightbox_open {
            self.lightbox_open = false;
            self.scroll_lock.release();
        }
    }
}
