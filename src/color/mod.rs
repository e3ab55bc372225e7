//! Color models and conversion
//!
//! This module holds the integer HSL/RGB value types, the converter
//! between them and hex strings, and the free-text color input parser.

pub mod conversion;
pub mod model;
pub mod parse;

pub use conversion::ColorConverter;
pub use model::{Hsl, Rgb};
pub use parse::ColorInput;
