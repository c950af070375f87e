//! UI Components
//!
//! Leptos components for the todo screen.

mod todo_header;
mod todo_list;
mod todo_row;
mod todo_input;
mod log_panel;

pub use todo_header::TodoHeader;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use todo_input::TodoInput;
pub use log_panel::LogPanel;
