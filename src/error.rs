pub type OutworldResult<T> = Result<T, OutworldError>;

#[derive(thiserror::Error, Debug)]
pub enum OutworldError {
    #[error("config error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OutworldError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            OutworldError::config("x")
                .to_string()
                .contains("config error:")
        );
        assert!(
            OutworldError::backend("x")
                .to_string()
                .contains("backend error:")
        );
        assert!(
            OutworldError::engine("x")
                .to_string()
                .contains("engine error:")
        );
        assert!(
            OutworldError::platform("x")
                .to_string()
                .contains("platform error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = OutworldError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
