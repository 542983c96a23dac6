mod fetch_request;
mod image_data;

pub use fetch_request::*;
pub use image_data::*;
