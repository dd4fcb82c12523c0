pub mod download;
pub mod icons;
pub mod page_frame;
