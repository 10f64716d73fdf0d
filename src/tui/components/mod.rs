// Components module - UI building blocks
//
// - Title bar: app name, load spinner, theme
// - Board panel: category header and clue cells
// - Logs panel: optional strip of recent log lines
// - Status bar: game state, progress, uptime, key hints
// - Toast: transient notifications

pub mod board_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
