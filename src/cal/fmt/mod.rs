//! Writing civil values out as text.

mod iso;

#[cfg(feature="format")]
pub mod custom;
