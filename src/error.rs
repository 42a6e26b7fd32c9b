use thiserror::Error;

/// Errors raised by the menu core and its SDL2 host
#[derive(Debug, Error)]
pub enum MenuError {
    /// Corner radius does not fit the rectangle.
    ///
    /// Recoverable: the rasterizer clamps the radius instead of returning this.
    #[error("invalid geometry: {width}x{height} rect with corner radius {radius}")]
    InvalidGeometry { width: i32, height: i32, radius: i32 },

    /// Pixel storage for a sprite could not be allocated
    #[error("out of memory allocating {width}x{height} sprite")]
    ResourceExhaustion { width: u32, height: u32 },

    /// Any failure reported by SDL2 itself
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<String> for MenuError {
    fn from(message: String) -> Self {
        MenuError::Sdl(message)
    }
}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}
