/// Query layer: filter parsing, appearance correlation, and command errors.
pub mod appearances;
pub mod errors;
pub mod filter;

pub use appearances::count_episodes_with_any;
pub use errors::RickyError;
pub use filter::Filter;
