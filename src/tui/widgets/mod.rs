//! Component-based UI architecture.

pub mod card;
pub mod footer;
pub mod header;
pub mod help_menu;
pub mod interactive_widget;
pub mod nav_menu;
pub mod page_canvas;
pub mod selection;
pub mod status_bar;
pub mod theme;
pub mod transition;

pub use crossterm::event::KeyEvent;
pub use interactive_widget::InteractiveStatefulWidget;
