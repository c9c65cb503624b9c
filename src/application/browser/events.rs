//! Events, commands and settings of the browser state machine.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::{DisplayRow, Timeframe};

/// Terminal-independent key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    CtrlC,
    Tab,
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    Key(Key),
    /// A fetch-all finished with at least one successful pair
    DataLoaded {
        rows: Vec<DisplayRow>,
        loaded_at: DateTime<Utc>,
    },
    /// Every pair of a fetch-all failed
    LoadFailed(String),
    /// Terminal size changed; redraw only
    Resize,
}

/// Parameters of one fetch-all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub exchanges: Vec<String>,
    pub timeframes: Vec<Timeframe>,
    pub top_volume: usize,
    pub top_change: usize,
}

impl FetchRequest {
    pub fn pair_count(&self) -> usize {
        self.exchanges.len() * self.timeframes.len()
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchAll(FetchRequest),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Quit,
}

/// Parameter inputs in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TopVolume,
    TopChange,
    PageSize,
    Filter,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::TopVolume,
        InputField::TopChange,
        InputField::PageSize,
        InputField::Filter,
    ];

    pub fn index(self) -> usize {
        match self {
            InputField::TopVolume => 0,
            InputField::TopChange => 1,
            InputField::PageSize => 2,
            InputField::Filter => 3,
        }
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::TopVolume => "Top Volume (N)",
            InputField::TopChange => "Top Change (M)",
            InputField::PageSize => "Page Size",
            InputField::Filter => "Filter",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Startup parameters of a browser session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSettings {
    pub exchanges: Vec<String>,
    pub timeframes: Vec<Timeframe>,
    pub top_volume: usize,
    pub top_change: usize,
    pub page_size: usize,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            exchanges: vec!["uniswap".to_string(), "pancakeswap".to_string()],
            timeframes: Timeframe::ALL.to_vec(),
            top_volume: 10,
            top_change: 10,
            page_size: 50,
        }
    }
}
