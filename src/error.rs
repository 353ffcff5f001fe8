use std::path::PathBuf;

/// Errors raised at the host boundary. The simulation core itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to build window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),
    #[error("failed to create canvas: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
