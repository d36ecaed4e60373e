mod config;
mod inventory;
mod render;
mod run;

pub use config::*;
pub use inventory::*;
pub use render::*;
pub use run::*;
