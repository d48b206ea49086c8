pub mod decompose;
pub mod export;
pub mod parse;
