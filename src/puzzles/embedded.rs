//! Embedded target equations generated at build time

// Include generated target list
include!(concat!(env!("OUT_DIR"), "/targets.rs"));
