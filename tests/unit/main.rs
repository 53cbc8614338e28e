//! Unit tests mirroring the `src/` layout, one file per source module

mod optics;
mod shape;
