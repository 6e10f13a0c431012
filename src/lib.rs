//! spritefont-bridge
pub mod core;
pub mod document;
pub mod font_source;
pub mod io;
pub mod logging;
pub mod pack;
#[cfg(test)]
mod tests;
pub mod transcode;
