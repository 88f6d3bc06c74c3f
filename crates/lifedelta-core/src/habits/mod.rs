//! Habit keys and the caller-supplied change set.

mod change_set;
mod key;

pub use change_set::HabitChangeSet;
pub use key::HabitKey;
