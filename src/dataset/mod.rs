// Publication dataset — record types and the one-shot collection loader.

pub mod loader;
pub mod models;
