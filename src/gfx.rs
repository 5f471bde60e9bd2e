use crate::{config::ResolvedConfig, error::OutworldResult, host::SystemHost};

/// The rendering implementations a run can select. `Original` is the 1991
/// software pipeline emulation, `Software` the generic raster path, `Gl` the
/// hardware surface (available only when built with the `gl` feature).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Original,
    Software,
    Gl,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Original => "original",
            BackendKind::Software => "software",
            BackendKind::Gl => "gl",
        }
    }
}

/// Contract the orchestrator needs from a rendering backend. The pixel-level
/// work behind these calls is not part of the startup layer.
pub trait Gfx {
    fn kind(&self) -> BackendKind;

    /// Allocate the target surface. Called once, after resolution, before the
    /// engine is wired.
    fn init(&mut self, width: u32, height: u32) -> OutworldResult<()>;

    /// Hand the finished frame to the platform host.
    fn present(&mut self, host: &mut dyn SystemHost) -> OutworldResult<()>;
}

/// Capability-checked backend factory. A kind the build cannot satisfy is an
/// error naming the missing backend, not an absent instance.
pub fn create_gfx(config: &ResolvedConfig) -> OutworldResult<Box<dyn Gfx>> {
    match config.backend {
        BackendKind::Original | BackendKind::Software => {
            tracing::info!(backend = config.backend.name(), "using software graphics");
            Ok(Box::new(crate::gfx_soft::GfxSoft::new(
                config.backend,
                config.legacy,
            )))
        }
        #[cfg(feature = "gl")]
        BackendKind::Gl => {
            tracing::info!("using GL graphics");
            Ok(Box::new(crate::gfx_gl::GfxGl::new(config.legacy)))
        }
        #[cfg(not(feature = "gl"))]
        BackendKind::Gl => Err(crate::error::OutworldError::backend(
            "'gl' backend requested but this build has no GL support",
        )),
    }
}
