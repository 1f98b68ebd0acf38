// qualia/src/commands/mod.rs

pub mod pivot;
pub mod score;
