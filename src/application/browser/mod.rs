//! Interactive Browser
//!
//! Terminal-free model of the browser: events in, next state and
//! commands out. The terminal adapter drives it.

mod events;
mod loader;
mod state;
mod text_input;

pub use events::{BrowserEvent, BrowserSettings, Command, FetchRequest, InputField, Key, Phase};
pub use loader::fetch_all;
pub use state::BrowserState;
pub use text_input::TextInput;
