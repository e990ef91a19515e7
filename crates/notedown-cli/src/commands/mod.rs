mod common;
mod export;
mod note;
mod notebooks;

pub use export::run_export;
pub use note::run_note;
pub use notebooks::run_notebooks;
