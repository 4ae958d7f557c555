pub mod buzz;
pub mod round;
pub mod time_format;
pub mod vocabulary;
