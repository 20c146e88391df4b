//! loccheck - find unused keys in `Localizable.strings` files
//!
//! Every key of a strings resource file is searched for, as a literal quoted
//! substring, in the files of a project directory. Keys found no more than a
//! given number of times are reported as unused.
//!
//! ## Module Structure
//!
//! - `audit`: The per-key pass and its configuration
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Resource parsing, tree walking and occurrence counting
//! - `report`: Human-readable output

pub mod audit;
pub mod cli;
pub mod config;
pub mod core;
pub mod report;
