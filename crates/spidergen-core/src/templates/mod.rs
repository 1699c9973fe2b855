pub mod spider;

pub use spider::*;
