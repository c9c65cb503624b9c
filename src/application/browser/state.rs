//! Browser State Machine
//!
//! `update` consumes the state and one event and returns the next state
//! plus an optional command for the event loop to run. Nothing here
//! touches the terminal or the network.

use chrono::{DateTime, Utc};

use crate::domain::{filter_rows, parse_count, parse_page_size, DisplayRow, Pager, Timeframe};

use super::events::{BrowserEvent, BrowserSettings, Command, FetchRequest, InputField, Key, Phase};
use super::text_input::TextInput;

#[derive(Debug, Clone)]
pub struct BrowserState {
    phase: Phase,
    exchanges: Vec<String>,
    timeframes: Vec<Timeframe>,
    top_volume: usize,
    top_change: usize,
    all_rows: Vec<DisplayRow>,
    filtered_rows: Vec<DisplayRow>,
    filter_text: String,
    pager: Pager,
    inputs: [TextInput; 4],
    focus: InputField,
    last_update: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl BrowserState {
    /// Fresh session in `Loading`; run `initial_command` to start the
    /// first fetch
    pub fn new(settings: BrowserSettings) -> Self {
        let pager = Pager::new(settings.page_size);
        Self {
            phase: Phase::Loading,
            inputs: [
                TextInput::new(settings.top_volume.to_string()),
                TextInput::new(settings.top_change.to_string()),
                TextInput::new(pager.page_size().to_string()),
                TextInput::default(),
            ],
            exchanges: settings.exchanges,
            timeframes: settings.timeframes,
            top_volume: settings.top_volume,
            top_change: settings.top_change,
            all_rows: Vec::new(),
            filtered_rows: Vec::new(),
            filter_text: String::new(),
            pager,
            focus: InputField::TopVolume,
            last_update: None,
            last_error: None,
        }
    }

    pub fn initial_command(&self) -> Command {
        Command::FetchAll(self.fetch_request())
    }

    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest {
            exchanges: self.exchanges.clone(),
            timeframes: self.timeframes.clone(),
            top_volume: self.top_volume,
            top_change: self.top_change,
        }
    }

    pub fn update(mut self, event: BrowserEvent) -> (Self, Option<Command>) {
        if self.phase == Phase::Quit {
            return (self, None);
        }

        let command = match event {
            BrowserEvent::Key(key) => self.on_key(key),
            BrowserEvent::DataLoaded { rows, loaded_at } => {
                self.all_rows = rows;
                self.refilter();
                self.pager.clamp(self.filtered_rows.len());
                self.last_update = Some(loaded_at);
                self.last_error = None;
                self.phase = Phase::Ready;
                None
            }
            BrowserEvent::LoadFailed(message) => {
                self.last_error = Some(message);
                self.phase = Phase::Ready;
                None
            }
            BrowserEvent::Resize => None,
        };

        (self, command)
    }

    fn on_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Char('q') | Key::CtrlC => {
                self.phase = Phase::Quit;
                return Some(Command::Quit);
            }
            Key::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            Key::Enter => return self.apply_focused(),
            _ => {}
        }

        // Bound keys act and are still typed into the focused input
        let command = match key {
            Key::Char('r') => Some(self.reload()),
            Key::Left | Key::Char('h') => {
                self.pager.prev();
                None
            }
            Key::Right | Key::Char('l') => {
                self.pager.next(self.filtered_rows.len());
                None
            }
            _ => None,
        };
        self.inputs[self.focus.index()].handle_key(key);
        command
    }

    fn apply_focused(&mut self) -> Option<Command> {
        let value = self.inputs[self.focus.index()].value().to_string();
        match self.focus {
            InputField::Filter => {
                self.filter_text = value;
                self.refilter();
                self.pager.reset();
                None
            }
            InputField::TopVolume => {
                self.top_volume = parse_count("N", &value).ok()?;
                Some(self.reload())
            }
            InputField::TopChange => {
                self.top_change = parse_count("M", &value).ok()?;
                Some(self.reload())
            }
            InputField::PageSize => {
                let size = parse_page_size(&value).ok()?;
                self.pager.set_page_size(size);
                Some(self.reload())
            }
        }
    }

    fn reload(&mut self) -> Command {
        self.phase = Phase::Loading;
        Command::FetchAll(self.fetch_request())
    }

    fn refilter(&mut self) {
        self.filtered_rows = filter_rows(&self.all_rows, &self.filter_text);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Quit
    }

    pub fn all_rows(&self) -> &[DisplayRow] {
        &self.all_rows
    }

    pub fn filtered_rows(&self) -> &[DisplayRow] {
        &self.filtered_rows
    }

    /// Rows on the current page
    pub fn visible_rows(&self) -> &[DisplayRow] {
        &self.filtered_rows[self.pager.bounds(self.filtered_rows.len())]
    }

    /// Zero-based page index
    pub fn current_page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered_rows.len())
    }

    pub fn page_indicator(&self) -> String {
        format!("Page {} of {}", self.current_page() + 1, self.page_count())
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn top_volume(&self) -> usize {
        self.top_volume
    }

    pub fn top_change(&self) -> usize {
        self.top_change
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn focus(&self) -> InputField {
        self.focus
    }

    pub fn input(&self, field: InputField) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
