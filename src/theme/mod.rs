//! Visual styling for the generator window.

mod styles;

pub use styles::GLOBAL_STYLES;
