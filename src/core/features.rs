//! Converter features

pub mod unit_converter;
