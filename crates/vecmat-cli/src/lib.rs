//! Command handlers for the `vecmat` binary.
//!
//! Each handler writes its report to the supplied writer so it can be
//! exercised from tests without a terminal.
pub mod commands;
