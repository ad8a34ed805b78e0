// debugpaste - app/mod.rs
//
// Application layer: bundle orchestration and upload.
// Dependencies: core, platform::fs, util.

pub mod bundle;
pub mod upload;
