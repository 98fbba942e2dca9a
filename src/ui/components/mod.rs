//! Reusable UI components

pub mod modal_dialog;
pub mod section_list;
pub mod status_bar;

// Component exports
pub use modal_dialog::ModalDialog;
pub use section_list::SectionList;
pub use status_bar::StatusBar;
