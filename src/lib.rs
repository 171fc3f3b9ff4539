pub mod backend;
pub mod error;
pub mod filter;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod mode;
pub mod select;
