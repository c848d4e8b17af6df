pub mod clipboard;
pub mod input;
pub mod runtime;
pub mod sampler;
