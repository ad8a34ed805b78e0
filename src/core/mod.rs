// debugpaste - core/mod.rs
//
// Core paste logic: data model, session, sanitising, wire encoding.
// Must NOT depend on: app, platform, or any network crate.

pub mod model;
pub mod paster;
pub mod payload;
pub mod sanitize;
