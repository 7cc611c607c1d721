pub mod image;
pub mod output;
