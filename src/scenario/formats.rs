//! Output formats for token streams
//!
//! Each rendering implements [`Formatter`]; [`FormatRegistry`] looks them up by the name given
//! on the command line.

pub mod registry;
pub mod token_formats;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use token_formats::{DetokenizedFormatter, JsonFormatter, SimpleFormatter, YamlFormatter};
