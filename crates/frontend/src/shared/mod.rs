pub mod export;
pub mod notice;
