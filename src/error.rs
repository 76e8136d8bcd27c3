use thiserror::Error;

#[derive(Debug, Error)]
pub enum IslandError {
    #[error("invalid island dimensions {width}x{height}: each side must be between 1 and {}", u32::MAX)]
    InvalidDimensions { width: usize, height: usize },

    #[error("failed to write heightmap image")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, IslandError>;
