mod image_decoder;
mod transport;

pub use image_decoder::*;
pub use transport::*;
