pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod settings;
pub mod storage;
