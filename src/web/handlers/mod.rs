pub mod result;
pub mod upload;
pub mod words;
