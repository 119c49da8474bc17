//! Read, initialise and summarise prompt-engineering data files.
//!
//! A prompt data file is a JSON object with `promptParts`, `templates`,
//! `agents` and `promptHistory` sections.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
