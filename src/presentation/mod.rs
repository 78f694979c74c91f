pub mod feedback;
pub mod terminal;

pub use feedback::{cue, headline, Cue, RESTART_PROMPT};
pub use terminal::{OutputFormat, TerminalObserver};
