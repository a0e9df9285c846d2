pub mod document;
pub mod stream;
pub mod template;
