//! Procedural big tree generation over an abstract block grid.

pub mod util;

pub mod block;
pub mod grid;
pub mod line;
pub mod io;

pub mod feature;
