//! View state for the terminal UI
//!
//! All state the UI shows lives in [`ItemsApp`]. Key handlers mutate it and
//! may hand back a [`Request`]; the event loop runs the request and feeds the
//! [`Outcome`] back through [`ItemsApp::apply`]. Rendering only reads.

use unicode_width::UnicodeWidthStr;

use crate::api::Item;

/// Whether submit creates a new item or renames the selected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Add,
    Edit { id: String },
}

/// A call the event loop should make against the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Fetch,
    Create { name: String },
    Update { id: String, name: String },
    Delete { id: String },
}

/// Result of a [`Request`], errors already rendered to text
#[derive(Debug, Clone)]
pub enum Outcome {
    Fetched(Result<Vec<Item>, String>),
    Created(Result<Item, String>),
    Updated { id: String, result: Result<Item, String> },
    Deleted { id: String, result: Result<(), String> },
}

pub struct ItemsApp {
    pub items: Vec<Item>,
    pub input: String,
    /// Cursor position in chars, not bytes
    pub cursor_pos: usize,
    pub mode: Mode,
    pub last_error: Option<String>,
    /// A request is in flight; further requests are refused until it resolves
    pub pending: bool,
    /// Highlighted row in the list
    pub selected: usize,
    pub should_quit: bool,
}

impl Default for ItemsApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemsApp {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            mode: Mode::Add,
            last_error: None,
            pending: false,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            Mode::Add => "Add Item",
            Mode::Edit { .. } => "Update Item",
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    fn dispatch(&mut self, request: Request) -> Option<Request> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.last_error = None;
        Some(request)
    }

    /// Initial load: replace the whole list with the server's
    pub fn load(&mut self) -> Option<Request> {
        self.dispatch(Request::Fetch)
    }

    pub fn reload(&mut self) -> Option<Request> {
        self.dispatch(Request::Fetch)
    }

    pub fn submit(&mut self) -> Option<Request> {
        let name = self.input.clone();
        let request = match &self.mode {
            Mode::Add => Request::Create { name },
            Mode::Edit { id } => Request::Update {
                id: id.clone(),
                name,
            },
        };
        self.dispatch(request)
    }

    /// Copy the highlighted item's name into the input and enter Edit mode.
    /// Ignored while a request is in flight, since its outcome resets the input.
    pub fn edit_selected(&mut self) {
        if self.pending {
            return;
        }
        let Some(item) = self.selected_item() else {
            return;
        };
        let (id, name) = (item.id.clone(), item.name.clone());

        self.cursor_pos = name.chars().count();
        self.input = name;
        self.mode = Mode::Edit { id };
    }

    pub fn delete_selected(&mut self) -> Option<Request> {
        let id = self.selected_item()?.id.clone();
        self.dispatch(Request::Delete { id })
    }

    pub fn apply(&mut self, outcome: Outcome) {
        self.pending = false;

        match outcome {
            Outcome::Fetched(Ok(items)) => {
                self.items = items;
            }
            Outcome::Created(Ok(item)) => {
                self.items.push(item);
                self.clear_input();
            }
            Outcome::Updated { id, result: Ok(item) } => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
                    *existing = item;
                }
                self.clear_input();
                self.mode = Mode::Add;
            }
            Outcome::Deleted { id, result: Ok(()) } => {
                self.items.retain(|i| i.id != id);
            }
            Outcome::Fetched(Err(e)) => self.fail("Fetch items error", "Failed to fetch items", e),
            Outcome::Created(Err(e)) => self.fail("Add item error", "Failed to add item", e),
            Outcome::Updated { result: Err(e), .. } => {
                self.fail("Update item error", "Failed to update item", e)
            }
            Outcome::Deleted { result: Err(e), .. } => {
                self.fail("Delete item error", "Failed to delete item", e)
            }
        }

        self.clamp_selection();
    }

    /// The task running the in-flight request went away without an outcome
    pub fn request_lost(&mut self) {
        tracing::error!("Request task ended without a result");
        self.pending = false;
        self.last_error = Some("Request failed".to_string());
    }

    fn fail(&mut self, context: &str, message: &str, error: String) {
        tracing::error!("{}: {}", context, error);
        self.last_error = Some(message.to_string());
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ============================================
    // Input editing
    // ============================================

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Terminal columns taken by the input left of the cursor
    pub fn cursor_width(&self) -> usize {
        self.input[..self.byte_index()].width()
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    pub fn input_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn input_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        self.cursor_pos -= 1;
        let idx = self.byte_index();
        self.input.remove(idx);
    }

    pub fn input_delete(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    pub fn input_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn input_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.input.chars().count());
    }

    pub fn input_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn input_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }
}
