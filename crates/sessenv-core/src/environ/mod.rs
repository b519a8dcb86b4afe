pub mod errors;
pub mod procstat;
pub mod reader;

pub use errors::EnvironError;
pub use reader::read_environment;
