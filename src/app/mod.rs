use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::{
    error::{GalleryError, Result},
    input::{KeyMap, NavCommand},
    manifest::Manifest,
    navigation::{Navigator, Screen, SharedScrollLock},
};

pub mod slideshow;
pub mod types;

use slideshow::Slideshow;
use types::{SearchFilter, truncate_to_width};

/// Poll timeout for the event loop; also the slideshow tick resolution
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    running: bool,
    gallery_title: String,

    navigator: Navigator,
    keymap: KeyMap,

    // Grid cursors index into the *visible* (filtered) row lists
    category_cursor: usize,
    image_cursor: usize,
    category_table_state: TableState,
    image_table_state: TableState,

    // Set by the navigator's scroll lock while the lightbox is open; the
    // image grid viewport is frozen while it reads true
    grid_frozen: Rc<std::cell::Cell<bool>>,

    search: SearchFilter,
    slideshow: Slideshow,

    show_help: bool,
    show_quit_confirm: bool,
    needs_render: bool,
}

impl App {
    pub fn new(manifest: Manifest, slideshow_override: Option<Duration>) -> Result<Self> {
        let keymap = KeyMap::with_overrides(&manifest.keybindings)
            .map_err(GalleryError::Validation)?;

        let interval = match slideshow_override {
            Some(duration) => duration,
            None => manifest
                .gallery
                .slideshow_interval
                .as_deref()
                .map(humantime::parse_duration)
                .transpose()
                .map_err(|e| {
                    GalleryError::Manifest(format!("Invalid slideshow_interval: {}", e))
                })?
                .unwrap_or(slideshow::DEFAULT_INTERVAL),
        };

        let (scroll_lock, grid_frozen) = SharedScrollLock::new();
        let navigator = Navigator::with_scroll_lock(manifest.categories, Box::new(scroll_lock));

        Ok(Self {
            running: false,
            gallery_title: manifest.gallery.title,
            navigator,
            keymap,
            category_cursor: 0,
            image_cursor: 0,
            category_table_state: TableState::default(),
            image_table_state: TableState::default(),
            grid_frozen,
            search: SearchFilter::default(),
            slideshow: Slideshow::new(interval),
            show_help: false,
            show_quit_confirm: false,
            needs_render: true, // Initial render needed
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;

        while self.running {
            if self.needs_render {
                self.category_table_state.select(Some(self.category_cursor));
                // The scroll lock freezes the grid viewport beneath an open
                // lightbox; selection updates resume after release
                if !self.grid_frozen.get() {
                    self.image_table_state.select(Some(self.image_cursor));
                }

                terminal.draw(|frame| self.render(frame))?;
                self.needs_render = false;
            }

            // Poll for user input with timeout
            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.tick_slideshow(Instant::now());
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Filtered row lists
    // ------------------------------------------------------------------

    /// Indices of categories passing the search filter
    fn visible_category_indices(&self) -> Vec<usize> {
        self.navigator
            .categories()
            .iter()
            .enumerate()
            .filter(|(_, category)| self.search.matches_category(category))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Indices into the full image sequence passing the search filter.
    ///
    /// The filter narrows the grid display only: the navigator always
    /// receives indices into the full sequence, so lightbox wrap-around is
    /// unaffected by filtering.
    fn visible_image_indices(&self) -> Vec<usize> {
        self.navigator
            .current_images()
            .iter()
            .enumerate()
            .filter(|(_, image)| self.search.matches_image(image))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn visible_len(&self) -> usize {
        match self.navigator.screen() {
            Screen::Categories => self.visible_category_indices().len(),
            Screen::Images | Screen::Lightbox => self.visible_image_indices().len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.navigator.screen() {
            Screen::Categories => &mut self.category_cursor,
            Screen::Images | Screen::Lightbox => &mut self.image_cursor,
        }
    }

    fn clamp_cursors(&mut self) {
        let categories = self.visible_category_indices().len();
        self.category_cursor = self.category_cursor.min(categories.saturating_sub(1));

        let images = self.visible_image_indices().len();
        self.image_cursor = self.image_cursor.min(images.saturating_sub(1));
    }

    /// Point the grid cursor at the image last shown in the lightbox
    fn sync_image_cursor(&mut self) {
        let target = self.navigator.current_index();
        let visible = self.visible_image_indices();
        if let Some(pos) = visible.iter().position(|&idx| idx == target) {
            self.image_cursor = pos;
        } else {
            self.image_cursor = self.image_cursor.min(visible.len().saturating_sub(1));
        }
    }

    // ------------------------------------------------------------------
    // Input handling
    // ------------------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        // Handle quit confirmation dialog
        if self.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.running = false;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_confirm = false;
                }
                _ => {}
            }
            self.needs_render = true;
            return;
        }

        // Help overlay swallows the next key
        if self.show_help {
            self.show_help = false;
            self.needs_render = true;
            return;
        }

        // Handle search input mode
        if self.search.active {
            self.handle_search_key(key);
            self.needs_render = true;
            return;
        }

        match self.navigator.screen() {
            Screen::Lightbox => self.handle_lightbox_key(key),
            Screen::Images => self.handle_images_key(key),
            Screen::Categories => self.handle_categories_key(key),
        }

        self.needs_render = true;
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c)
                if c.eq_ignore_ascii_case(&'c')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                // Ctrl+C: toggle case sensitivity
                self.search.toggle_case_sensitive();
            }
            KeyCode::Char(c) => self.search.push_char(c),
            KeyCode::Backspace => {
                self.search.pop_char();
            }
            KeyCode::Enter => {
                self.search.apply();
                self.category_cursor = 0;
                self.image_cursor = 0;
                self.clamp_cursors();
            }
            KeyCode::Esc => {
                self.search.cancel();
                self.clamp_cursors();
            }
            _ => {}
        }
    }

    fn handle_lightbox_key(&mut self, key: KeyEvent) {
        match self.keymap.command_for(&key) {
            Some(NavCommand::Quit) => {
                self.show_quit_confirm = true;
                return;
            }
            Some(NavCommand::Slideshow) => {
                self.slideshow.toggle(Instant::now());
                return;
            }
            Some(NavCommand::NextImage) => {
                self.navigator.next_image();
                return;
            }
            Some(NavCommand::PrevImage) => {
                self.navigator.prev_image();
                return;
            }
            Some(NavCommand::Help) => {
                self.show_help = true;
                return;
            }
            Some(NavCommand::Back) => {
                // Escape hatch: straight back to the category list
                self.leave_to_categories();
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char(' ') => self.navigator.next_image(),
            KeyCode::Backspace => self.leave_to_categories(),
            // Escape and arrows are the navigator's keyboard contract;
            // handled globally while the lightbox is open, no focus involved
            code => {
                self.navigator.handle_key(code);
                if !self.navigator.lightbox_open() {
                    self.slideshow.stop();
                    self.sync_image_cursor();
                }
            }
        }
    }

    fn handle_images_key(&mut self, key: KeyEvent) {
        match self.keymap.command_for(&key) {
            Some(NavCommand::Quit) => {
                self.show_quit_confirm = true;
                return;
            }
            Some(NavCommand::Back) => {
                self.leave_to_categories();
                return;
            }
            Some(NavCommand::Select) => {
                self.open_selected_image(false);
                return;
            }
            Some(NavCommand::Slideshow) => {
                self.open_selected_image(true);
                return;
            }
            Some(NavCommand::Search) => {
                self.search.activate();
                return;
            }
            Some(NavCommand::Help) => {
                self.show_help = true;
                return;
            }
            Some(NavCommand::MoveDown) => {
                self.move_down();
                return;
            }
            Some(NavCommand::MoveUp) => {
                self.move_up();
                return;
            }
            Some(NavCommand::MoveTop) => {
                self.move_top();
                return;
            }
            Some(NavCommand::MoveBottom) => {
                self.move_bottom();
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Down => self.move_down(),
            KeyCode::Up => self.move_up(),
            KeyCode::Enter => self.open_selected_image(false),
            KeyCode::Backspace => self.leave_to_categories(),
            KeyCode::Esc => {
                // Clear an active filter first, then leave the grid
                if self.search.filter_active {
                    self.search.clear();
                    self.clamp_cursors();
                } else {
                    self.leave_to_categories();
                }
            }
            _ => {}
        }
    }

    fn handle_categories_key(&mut self, key: KeyEvent) {
        match self.keymap.command_for(&key) {
            Some(NavCommand::Quit) => {
                self.show_quit_confirm = true;
                return;
            }
            Some(NavCommand::Select) => {
                self.open_selected_category();
                return;
            }
            Some(NavCommand::Search) => {
                self.search.activate();
                return;
            }
            Some(NavCommand::Help) => {
                self.show_help = true;
                return;
            }
            Some(NavCommand::MoveDown) => {
                self.move_down();
                return;
            }
            Some(NavCommand::MoveUp) => {
                self.move_up();
                return;
            }
            Some(NavCommand::MoveTop) => {
                self.move_top();
                return;
            }
            Some(NavCommand::MoveBottom) => {
                self.move_bottom();
                return;
            }
            Some(NavCommand::Back) => {
                if self.search.filter_active {
                    self.search.clear();
                    self.clamp_cursors();
                }
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Down => self.move_down(),
            KeyCode::Up => self.move_up(),
            KeyCode::Enter => self.open_selected_category(),
            KeyCode::Esc => {
                if self.search.filter_active {
                    self.search.clear();
                    self.clamp_cursors();
                }
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn open_selected_category(&mut self) {
        let visible = self.visible_category_indices();
        let Some(&idx) = visible.get(self.category_cursor) else {
            return;
        };
        let id = self.navigator.categories()[idx].id.clone();

        self.navigator.select_category(&id);
        // Filters do not carry across screens
        self.search.clear();
        self.image_cursor = 0;
    }

    fn open_selected_image(&mut self, start_slideshow: bool) {
        let visible = self.visible_image_indices();
        let Some(&idx) = visible.get(self.image_cursor) else {
            return;
        };

        self.navigator.open_lightbox(idx);
        if start_slideshow && self.navigator.lightbox_open() {
            self.slideshow.start(Instant::now());
        }
    }

    fn leave_to_categories(&mut self) {
        self.navigator.return_to_categories();
        self.slideshow.stop();
        self.search.clear();
        self.image_cursor = 0;
        self.clamp_cursors();
    }

    fn tick_slideshow(&mut self, now: Instant) {
        if !self.navigator.lightbox_open() {
            if self.slideshow.is_running() {
                self.slideshow.stop();
                self.needs_render = true;
            }
            return;
        }

        if self.slideshow.tick(now) {
            self.navigator.next_image();
            self.needs_render = true;
        }
    }

    fn move_down(&mut self) {
        let max_index = self.visible_len().saturating_sub(1);
        let cursor = self.cursor_mut();
        if *cursor < max_index {
            *cursor += 1;
        }
    }

    fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        if *cursor > 0 {
            *cursor -= 1;
        }
    }

    fn move_top(&mut self) {
        *self.cursor_mut() = 0;
    }

    fn move_bottom(&mut self) {
        let max_index = self.visible_len().saturating_sub(1);
        *self.cursor_mut() = max_index;
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Search input gets its own row under the breadcrumb while typing
        let header_height = if self.search.active { 6 } else { 3 };

        let chunks = Layout::vertical([
            Constraint::Length(header_height), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(3),             // Status bar
        ])
        .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_statusbar(frame, chunks[2]);

        if self.navigator.lightbox_open() {
            self.render_lightbox(frame, area);
        }

        if self.show_help {
            self.render_help(frame, area);
        }

        if self.show_quit_confirm {
            self.render_quit_confirm(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        if self.search.active {
            let header_chunks = Layout::vertical([
                Constraint::Length(3), // Breadcrumb
                Constraint::Length(3), // Search input
            ])
            .split(area);

            self.render_breadcrumb(frame, header_chunks[0]);
            self.render_search_input(frame, header_chunks[1]);
        } else {
            self.render_breadcrumb(frame, area);
        }
    }

    fn render_breadcrumb(&self, frame: &mut Frame, area: Rect) {
        let screen = self.navigator.screen();

        let mut spans = vec![
            Span::styled(
                &self.gallery_title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
        ];

        let crumb = |text: String, current: bool| {
            if current {
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(text, Style::default().fg(Color::White))
            }
        };

        spans.push(crumb("Gallery".to_string(), screen == Screen::Categories));

        if let Some(category) = self.navigator.current_category() {
            spans.push(Span::raw(" > "));
            spans.push(crumb(category.title.clone(), screen == Screen::Images));

            if screen == Screen::Lightbox {
                spans.push(Span::raw(" > "));
                spans.push(crumb(self.navigator.view_state().position_text(), true));
            }
        }

        let header =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_search_input(&self, frame: &mut Frame, area: Rect) {
        let search_text = format!("{}_", self.search.query);

        let case_indicator = if self.search.case_sensitive {
            " [Case-sensitive]"
        } else {
            ""
        };

        let mode_indicator = if self.search.query.starts_with('!') {
            " (Regex)"
        } else {
            " (Literal)"
        };

        let title = format!(
            "Search{}{} - Enter to apply, Esc to cancel",
            mode_indicator, case_indicator
        );

        let search_input = Paragraph::new(search_text)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        frame.render_widget(search_input, area);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.navigator.screen() {
            Screen::Categories => self.render_categories(frame, area),
            // The grid stays rendered beneath an open lightbox
            Screen::Images | Screen::Lightbox => self.render_images(frame, area),
        }
    }

    /// Append the active filter to a panel title
    fn titled_with_filter(&self, base: String) -> String {
        if self.search.filter_active && !self.search.active {
            let filter_display = if self.search.query.chars().count() > 25 {
                let prefix: String = self.search.query.chars().take(22).collect();
                format!("{}...", prefix)
            } else {
                self.search.query.clone()
            };
            format!("{} | 🔍 {}", base, filter_display)
        } else {
            base
        }
    }

    fn render_categories(&mut self, frame: &mut Frame, area: Rect) {
        let title = self.titled_with_filter("Categories".to_string());
        let visible = self.visible_category_indices();

        if visible.is_empty() {
            let empty = Paragraph::new("No matching categories")
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Category").style(header_style()),
            Cell::from("Photos").style(header_style()),
            Cell::from("Description").style(header_style()),
        ])
        .height(1);

        let description_width = area.width.saturating_sub(42) as usize;
        let rows: Vec<Row> = visible
            .iter()
            .map(|&idx| {
                let category = &self.navigator.categories()[idx];
                Row::new(vec![
                    Cell::from(truncate_to_width(&category.title, 28)),
                    Cell::from(format!("{}", category.image_count())),
                    Cell::from(truncate_to_width(&category.description, description_width)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(30),
            Constraint::Length(8),
            Constraint::Min(0),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        frame.render_stateful_widget(table, area, &mut self.category_table_state);
    }

    fn render_images(&mut self, frame: &mut Frame, area: Rect) {
        let base_title = match self.navigator.current_category() {
            Some(category) => format!("{} ({} photos)", category.title, category.image_count()),
            None => "Photos".to_string(),
        };
        let title = self.titled_with_filter(base_title);
        let visible = self.visible_image_indices();

        if visible.is_empty() {
            let empty = Paragraph::new("No matching photos")
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec![
            Cell::from("#").style(header_style()),
            Cell::from("Caption").style(header_style()),
            Cell::from("Alt text").style(header_style()),
            Cell::from("Source").style(header_style()),
        ])
        .height(1);

        let images = self.navigator.current_images();
        let rows: Vec<Row> = visible
            .iter()
            .map(|&idx| {
                let image = &images[idx];
                Row::new(vec![
                    Cell::from(format!("{}", idx + 1)),
                    Cell::from(truncate_to_width(&image.caption, 38)),
                    Cell::from(truncate_to_width(&image.alt, 28)),
                    Cell::from(image.src.clone()).style(Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(5),
            Constraint::Length(40),
            Constraint::Length(30),
            Constraint::Min(0),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        frame.render_stateful_widget(table, area, &mut self.image_table_state);
    }

    fn render_lightbox(&self, frame: &mut Frame, area: Rect) {
        let state = self.navigator.view_state();
        let Some(image) = state.current_images.get(state.current_image_index) else {
            return;
        };
        let category_title = self
            .navigator
            .current_category()
            .map(|category| category.title.clone())
            .unwrap_or_default();

        // Centered popup over the grid
        let popup_width = (area.width.saturating_mul(3) / 4).clamp(30, 90).min(area.width);
        let popup_height = 12.min(area.height.saturating_sub(2));
        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the background area to hide content behind
        frame.render_widget(Clear, popup_area);

        let caption = if image.caption.is_empty() {
            format!("Photo {}", image.id)
        } else {
            image.caption.clone()
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                caption,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if !image.alt.is_empty() {
            lines.push(Line::from(Span::styled(
                image.alt.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            image.src.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            state.position_text(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        let mut title = format!(" {} ", category_title);
        if self.slideshow.is_running() {
            title.push_str("▶ SLIDESHOW ");
        }

        let popup = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .style(Style::default().bg(Color::Black))
                    .title(title),
            )
            .alignment(Alignment::Center);

        frame.render_widget(popup, popup_area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let key = |command: NavCommand, fallback: &str| {
            self.keymap
                .key_for(command)
                .unwrap_or_else(|| fallback.to_string())
        };

        let entries = [
            (format!("{}/{} or ↓/↑", key(NavCommand::MoveDown, "j"), key(NavCommand::MoveUp, "k")), "Move selection"),
            (format!("{}/{}", key(NavCommand::MoveTop, "g"), key(NavCommand::MoveBottom, "G")), "Jump to top / bottom"),
            ("Enter".to_string(), "Open category / photo"),
            ("←/→".to_string(), "Previous / next photo (lightbox)"),
            (key(NavCommand::Slideshow, "s"), "Toggle slideshow"),
            (key(NavCommand::Search, "/"), "Search"),
            ("ESC".to_string(), "Close / back / clear filter"),
            ("Backspace".to_string(), "Back to categories"),
            (key(NavCommand::Quit, "q"), "Quit"),
        ];

        let mut lines = vec![Line::from("")];
        for (keys, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", keys),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(description),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let popup_width = 52.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = Rect {
            x: (area.width.saturating_sub(popup_width)) / 2,
            y: (area.height.saturating_sub(popup_height)) / 2,
            width: popup_width,
            height: popup_height,
        };

        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black))
                .title("Keys"),
        );

        frame.render_widget(help, popup_area);
    }

    fn render_quit_confirm(&self, frame: &mut Frame, area: Rect) {
        // Create a centered popup
        let popup_width = 50.min(area.width.saturating_sub(4));
        let popup_height = 7;
        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the background area to hide content behind
        frame.render_widget(Clear, popup_area);

        let dialog_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit photostack?",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw("Press 'y' to quit, 'n' or ESC to cancel")),
            Line::from(""),
        ];

        let dialog = Paragraph::new(dialog_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .style(Style::default().bg(Color::Black))
                    .title("Confirm"),
            )
            .alignment(Alignment::Center);

        frame.render_widget(dialog, popup_area);
    }

    fn render_statusbar(&self, frame: &mut Frame, area: Rect) {
        let screen = self.navigator.screen();

        let shortcuts = match screen {
            Screen::Categories => {
                "j/k: Move  |  g/G: Top/Bottom  |  Enter: Open  |  /: Search  |  ?: Help  |  q: Quit"
            }
            Screen::Images => {
                "j/k: Move  |  Enter: View  |  s: Slideshow  |  /: Search  |  ESC: Back  |  q: Quit"
            }
            Screen::Lightbox => {
                "←/→: Prev/Next  |  s: Slideshow  |  ESC: Close  |  Backspace: Categories  |  q: Quit"
            }
        };

        let position = match screen {
            Screen::Categories => {
                let visible = self.visible_category_indices().len();
                let total = self.navigator.categories().len();
                if self.search.filter_active {
                    format!(
                        "Filtered: {}/{} | Category {}/{}",
                        visible,
                        total,
                        (self.category_cursor + 1).min(visible),
                        visible
                    )
                } else {
                    format!("Category {}/{}", self.category_cursor + 1, total)
                }
            }
            Screen::Images => {
                let visible = self.visible_image_indices().len();
                let total = self.navigator.current_images().len();
                if self.search.filter_active {
                    format!(
                        "Filtered: {}/{} | Photo {}/{}",
                        visible,
                        total,
                        (self.image_cursor + 1).min(visible),
                        visible
                    )
                } else {
                    format!("Photo {}/{}", self.image_cursor + 1, total)
                }
            }
            Screen::Lightbox => format!("Photo {}", self.navigator.view_state().position_text()),
        };

        let status_line = Line::from(vec![
            Span::styled(
                position,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(shortcuts, Style::default().fg(Color::White)),
        ]);

        let status = Paragraph::new(status_line)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(status, area);
    }
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
