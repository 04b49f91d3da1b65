//! UI Components
//!
//! Reusable Leptos components.

mod idea_list;
mod idea_row;
mod message_bar;
mod new_idea_form;

pub use idea_list::IdeaList;
pub use idea_row::IdeaRow;
pub use message_bar::MessageBar;
pub use new_idea_form::NewIdeaForm;
