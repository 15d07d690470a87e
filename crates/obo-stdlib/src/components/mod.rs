//! Components provided by the OBO standard library

pub mod obo_reader;

pub use obo_reader::OboReader;
