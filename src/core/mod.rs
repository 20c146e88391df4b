//! Building blocks of the audit.
//!
//! ## Module Structure
//!
//! - `text`: Soft-failing text file reads and line splitting
//! - `resource`: Key extraction from strings resource lines
//! - `tree`: Project directory walking with an extension filter
//! - `counter`: Counting lines that contain a key

pub mod counter;
pub mod resource;
pub mod text;
pub mod tree;

pub use counter::*;
pub use resource::*;
pub use text::*;
pub use tree::*;
