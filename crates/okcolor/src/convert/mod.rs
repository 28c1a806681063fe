//! Top-level conversion entry points
//!
//! [`convert`] validates the input and runs the full pipeline once,
//! returning both representations. [`Conversion::project`] selects a view of
//! that single result.

mod conversion;
mod view;

pub use conversion::{convert, Conversion};
pub use view::{Projection, UnknownView, View};
