//! Reference generative service implementations.

pub mod openai;

pub use openai::OpenAI;
