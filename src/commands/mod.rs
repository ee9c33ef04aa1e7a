// Non-interactive commands.

pub mod limits;
pub mod print;
