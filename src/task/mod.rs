//! Task management module
//!
//! - Todo / deadline / event model with display and record forms
//! - Ordered task list with duplicate rejection
//! - Record file reader
//! - Date normalization for deadlines and events

pub mod list;
pub mod model;
pub mod record;
pub mod when;

pub use list::TaskList;
pub use model::{Task, TaskKind};
pub use when::When;
