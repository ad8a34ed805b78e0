// debugpaste - lib.rs
//
// Library entry point, exposing paste assembly and upload for integration
// testing and for embedding in other tools.
//
// The CLI lives in `main.rs` and is not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
