pub mod file_writer;
pub mod scaffold;

pub use file_writer::FileWriter;
pub use scaffold::{ScaffoldEngine, Summary};
