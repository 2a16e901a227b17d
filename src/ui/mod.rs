//! Terminal UI
//!
//! - **`OutputWriter`** - status messages with severity levels
//! - **`UserInput`** - confirmation and selection prompts
//! - **`render`** - turns view models into lines for an `OutputWriter`
//!
//! ```
//! use feedtags::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Followed rust");
//! output.warning("Tag already blocked");
//! output.info("Additional info");
//! ```

pub mod input;
pub mod output;
pub mod render;

#[cfg(test)]
pub mod mock;

pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{OutputWriter, StdoutWriter};
