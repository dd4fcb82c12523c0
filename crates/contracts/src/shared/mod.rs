pub mod collections;
pub mod config;
pub mod date_utils;
pub mod form;
pub mod labels;
pub mod media;
pub mod navigation;
