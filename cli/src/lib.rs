pub mod game;
pub mod input;
pub mod message;

pub use game::{play, prompt_config, prompt_field_size, run};
pub use input::{ConsoleInput, LineSource, ScriptedLines};
