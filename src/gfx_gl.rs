use crate::{
    config::LegacyFlags,
    error::{OutworldError, OutworldResult},
    gfx::{BackendKind, Gfx},
    host::SystemHost,
};

/// Hardware-surface backend. The startup layer only manages the surface
/// handshake; shader/texture work lives behind the platform host's GL
/// context.
pub struct GfxGl {
    legacy: LegacyFlags,
    width: u32,
    height: u32,
    staging: Vec<u8>,
}

impl GfxGl {
    pub fn new(legacy: LegacyFlags) -> Self {
        Self {
            legacy,
            width: 0,
            height: 0,
            staging: Vec::new(),
        }
    }

    pub fn legacy(&self) -> LegacyFlags {
        self.legacy
    }
}

impl Gfx for GfxGl {
    fn kind(&self) -> BackendKind {
        BackendKind::Gl
    }

    fn init(&mut self, width: u32, height: u32) -> OutworldResult<()> {
        if width == 0 || height == 0 {
            return Err(OutworldError::backend("surface with zero geometry"));
        }
        self.width = width;
        self.height = height;
        self.staging = vec![0; width as usize * height as usize * 4];
        Ok(())
    }

    fn present(&mut self, host: &mut dyn SystemHost) -> OutworldResult<()> {
        if self.staging.is_empty() {
            return Err(OutworldError::backend("present before init"));
        }
        host.push_frame(&self.staging, self.width, self.height)
    }
}
