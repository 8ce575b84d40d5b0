use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArcError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown material type '{0}'")]
    UnknownMaterialType(String),
    #[error("material '{material}' does not bind uniform '{uniform}'")]
    UnboundUniform { material: String, uniform: String },
    #[error("uniform '{uniform}' has the wrong kind (expected {expected})")]
    UniformKind { uniform: String, expected: &'static str },
    #[error("no camera to fly to ({lon}, {lat})")]
    MissingCamera { lon: f64, lat: f64 },
    #[error("shader '{shader}' never references uniform '{uniform}'")]
    ShaderMissingUniform { shader: String, uniform: String },
}

impl ArcError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ArcError::InvalidArgument(message.into())
    }
}

// Failure while submitting primitives: either our own validation or the surface's error, untouched.
#[derive(Debug, Error)]
pub enum RenderError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Arc(#[from] ArcError),
    #[error("rendering surface failed: {0}")]
    Surface(#[source] E),
}
