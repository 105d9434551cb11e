pub mod image_search;

pub use image_search::{DuckDuckGoImageSearch, FixedImageSearch, PLACEHOLDER_IMAGE_URL};
