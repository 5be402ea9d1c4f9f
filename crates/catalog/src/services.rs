pub mod catalog;

pub mod devfile_catalog;
pub mod image_catalog;
