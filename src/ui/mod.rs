// UI module - terminal host for the helpers, rendered with Ratatui
//
// Architecture:
// - pane: Display target that draws the loading fragment as a spinner
// - alert: Modal alert dialog and the blocking terminal notifier

pub mod alert;
pub mod pane;

pub use alert::{render_alert, TerminalAlert};
pub use pane::{render_pane, Pane, LOADING_FRAGMENT};
