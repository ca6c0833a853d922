use regex::Regex;
use unicode_width::UnicodeWidthChar;

use crate::manifest::{Category, Image};

/// Search state for filtering the category list and image grid
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Whether search input is active
    pub active: bool,
    /// The search query string
    pub query: String,
    /// Whether the filter is applied (search was confirmed)
    pub filter_active: bool,
    /// Compiled regex pattern (cached)
    regex_pattern: Option<Regex>,
    /// Whether to use case-sensitive search
    pub case_sensitive: bool,
}

impl SearchFilter {
    /// Compile the query into a regex pattern
    fn compile_pattern(&mut self) {
        if self.query.is_empty() {
            self.regex_pattern = None;
            return;
        }

        // Query starting with '!' switches to regex mode
        let pattern_str = if let Some(raw) = self.query.strip_prefix('!') {
            raw.to_string()
        } else {
            regex::escape(&self.query)
        };

        let regex_result = if self.case_sensitive {
            Regex::new(&pattern_str)
        } else {
            Regex::new(&format!("(?i){}", pattern_str))
        };

        self.regex_pattern = regex_result.ok();
    }

    /// Test if a string matches the search pattern
    pub fn matches(&self, text: &str) -> bool {
        if !self.filter_active || self.query.is_empty() {
            return true; // No filter, everything matches
        }

        // Fast path: literal search is a plain substring check
        if !self.query.starts_with('!') {
            if self.case_sensitive {
                return text.contains(&self.query);
            }
            return text.to_lowercase().contains(&self.query.to_lowercase());
        }

        match &self.regex_pattern {
            Some(regex) => regex.is_match(text),
            None => true, // Invalid regex, show everything
        }
    }

    /// Match a category by title or description
    pub fn matches_category(&self, category: &Category) -> bool {
        self.matches(&category.title) || self.matches(&category.description)
    }

    /// Match an image by caption or alt text
    pub fn matches_image(&self, image: &Image) -> bool {
        self.matches(&image.caption) || self.matches(&image.alt)
    }

    /// Activate search mode
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Deactivate and apply filter
    pub fn apply(&mut self) {
        self.active = false;
        self.filter_active = !self.query.is_empty();
        self.compile_pattern();
    }

    /// Cancel search without applying
    pub fn cancel(&mut self) {
        self.active = false;
        self.query.clear();
        self.filter_active = false;
        self.regex_pattern = None;
    }

    /// Clear the search filter
    pub fn clear(&mut self) {
        self.query.clear();
        self.filter_active = false;
        self.regex_pattern = None;
    }

    /// Add character to query
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove last character from query
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Toggle case sensitivity
    pub fn toggle_case_sensitive(&mut self) {
        self.case_sensitive = !self.case_sensitive;
        if self.filter_active {
            self.compile_pattern();
        }
    }
}

/// Truncate a string to the given display width, appending an ellipsis when
/// anything was cut. Width-aware so wide characters in captions do not
/// overflow their table cell.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|ch| ch.width()).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Reserve one cell for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(title: &str, description: &str) -> Category {
        Category {
            id: "test".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            cover_image: "cover.jpg".to_string(),
            images: Vec::new(),
        }
    }

    fn image(caption: &str, alt: &str) -> Image {
        Image {
            id: 1,
            src: "a.jpg".to_string(),
            alt: alt.to_string(),
            caption: caption.to_string(),
        }
    }

    fn applied(query: &str) -> SearchFilter {
        let mut filter = SearchFilter::default();
        for c in query.chars() {
            filter.push_char(c);
        }
        filter.apply();
        filter
    }

    #[test]
    fn test_no_filter_matches_everything() {
        let filter = SearchFilter::default();
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_literal_match_is_case_insensitive_by_default() {
        let filter = applied("sports");
        assert!(filter.matches("Sports Day"));
        assert!(!filter.matches("Science Fair"));
    }

    #[test]
    fn test_case_sensitive_toggle() {
        let mut filter = applied("Sports");
        filter.toggle_case_sensitive();

        assert!(filter.matches("Sports Day"));
        assert!(!filter.matches("sports day"));
    }

    #[test]
    fn test_regex_mode() {
        let filter = applied("!^10+m");
        assert!(filter.matches("100m final"));
        assert!(filter.matches("1000m relay"));
        assert!(!filter.matches("long jump 100m"));
    }

    #[test]
    fn test_invalid_regex_matches_everything() {
        let filter = applied("![unclosed");
        assert!(filter.matches("anything"));
    }

    #[test]
    fn test_cancel_clears_state() {
        let mut filter = applied("sports");
        filter.cancel();

        assert!(!filter.filter_active);
        assert!(filter.query.is_empty());
        assert!(filter.matches("anything"));
    }

    #[test]
    fn test_matches_category_on_title_or_description() {
        let filter = applied("excursion");
        assert!(filter.matches_category(&category("Trips", "Excursions and field trips")));
        assert!(!filter.matches_category(&category("Sports Day", "Track events")));
    }

    #[test]
    fn test_matches_image_on_caption_or_alt() {
        let filter = applied("museum");
        assert!(filter.matches_image(&image("At the museum", "")));
        assert!(filter.matches_image(&image("", "Museum entrance")));
        assert!(!filter.matches_image(&image("On the bus", "Bus ride")));
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("short", 20), "short");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let truncated = truncate_to_width("a very long caption indeed", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 10);
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK character occupies two cells
        let truncated = truncate_to_width("学校写真ギャラリー", 8);
        assert!(truncated.ends_with('…'));
        let width: usize = truncated.chars().filter_map(|c| c.width()).sum();
        assert!(width <= 8);
    }
}
