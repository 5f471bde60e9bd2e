use crate::{
    config::LegacyFlags,
    error::{OutworldError, OutworldResult},
    gfx::{BackendKind, Gfx},
    host::SystemHost,
};

/// In-memory raster backend. Serves both the `Original` (1991 emulation) and
/// `Software` kinds; which one it is changes how downstream resource data is
/// interpreted, not the surface management done here.
pub struct GfxSoft {
    kind: BackendKind,
    legacy: LegacyFlags,
    width: u32,
    height: u32,
    framebuffer: Vec<u8>,
}

impl GfxSoft {
    pub fn new(kind: BackendKind, legacy: LegacyFlags) -> Self {
        debug_assert!(matches!(
            kind,
            BackendKind::Original | BackendKind::Software
        ));
        Self {
            kind,
            legacy,
            width: 0,
            height: 0,
            framebuffer: Vec::new(),
        }
    }

    fn bytes_per_pixel(&self) -> usize {
        if self.legacy.color_565 { 2 } else { 4 }
    }

    pub fn legacy(&self) -> LegacyFlags {
        self.legacy
    }
}

impl Gfx for GfxSoft {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn init(&mut self, width: u32, height: u32) -> OutworldResult<()> {
        if width == 0 || height == 0 {
            return Err(OutworldError::backend("surface with zero geometry"));
        }
        self.width = width;
        self.height = height;
        self.framebuffer = vec![0; width as usize * height as usize * self.bytes_per_pixel()];
        Ok(())
    }

    fn present(&mut self, host: &mut dyn SystemHost) -> OutworldResult<()> {
        if self.framebuffer.is_empty() {
            return Err(OutworldError::backend("present before init"));
        }
        host.push_frame(&self.framebuffer, self.width, self.height)
    }
}
