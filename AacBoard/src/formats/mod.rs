//! File formats read and written by `AacBoard`

pub mod board;
