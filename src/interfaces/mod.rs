//! Outer surfaces: how orders enter and leave the process.

pub mod csv;
