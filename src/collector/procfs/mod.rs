//! Host vitals read from the Linux `/proc` and `/sys` filesystems.

pub mod parser;
pub mod vitals;

pub use vitals::VitalsCollector;
