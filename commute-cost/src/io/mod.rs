mod mode_reader;
mod mode_writer;

pub use mode_reader::{load_or_default, read_modes, read_modes_from_path};
pub use mode_writer::{write_modes, write_simulation, write_simulation_to_path};
