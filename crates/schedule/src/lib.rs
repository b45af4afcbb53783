pub mod compose;
pub mod roster;
