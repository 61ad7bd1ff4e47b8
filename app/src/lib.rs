mod config;
mod game_loop;
mod input_handler;
mod state;

pub use config::{load_config, Config, GameConfig};
pub use game_loop::run;
pub use input_handler::{InputHandler, InputScript, InputSource, InputStep};
