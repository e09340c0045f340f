pub mod destinations;
pub mod readers;

pub use destinations::{FileDestination, MemoryDestination, OutputDestination};
pub use readers::{parse_filenames, parse_predictions, read_filenames, read_predictions};
