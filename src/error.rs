/// Why a banner could not be mounted. None of these are fatal to the page.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("no drawing surface with id #{0}")]
    MissingSurface(String),
    #[error("WebGL2 is not available on this surface")]
    MissingCapability,
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl InitError {
    /// Short machine-readable code, handy for assertions and console filters.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSurface(_) => "E_NO_SURFACE",
            Self::MissingCapability => "E_NO_WEBGL2",
            Self::Render(_) => "E_RENDER",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader `{layer}` failed to compile: {log}")]
    Shader { layer: &'static str, log: String },
    #[error("program `{layer}` failed to link: {log}")]
    Link { layer: &'static str, log: String },
    #[error("could not allocate {0}")]
    Allocation(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("empty color value")]
    Empty,
    #[error("unsupported color syntax: {0}")]
    Syntax(String),
    #[error("color channel out of range in {0}")]
    Channel(String),
}
