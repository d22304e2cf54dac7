//! Builtin converters compiled into the host
//!
//! Only the discovery/panel surface lives here; the toolpath algorithms
//! themselves belong to the conversion pipeline.

pub(crate) mod api;

pub(crate) mod crosshatch;
pub(crate) mod scanline;
pub(crate) mod spiral;
