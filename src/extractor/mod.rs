pub mod number_extractor;

pub use number_extractor::{is_all_digits, NumberExtractor};
