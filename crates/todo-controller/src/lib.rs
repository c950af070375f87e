//! Todo Controller
//!
//! Owns the task list and the edit session behind the todo screen.
//! The UI layer renders whatever this crate currently holds and feeds user
//! actions back in as [`TaskIntent`]s.

mod task;
mod session;
mod controller;
mod intent;


pub use task::{Task, TaskId};
pub use session::{EditSession, EditState};
pub use controller::{SubmitOutcome, TaskListController};
pub use intent::TaskIntent;
