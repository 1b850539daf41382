pub mod digits;
pub mod export;
pub mod reader;

pub use digits::{load_digits, DigitDataset, SampleSlice};
pub use export::write_costs;
pub use reader::NumberReader;
