use std::path::PathBuf;

use crate::{
    error::{OutworldError, OutworldResult},
    gfx::BackendKind,
};

pub const DEFAULT_WINDOW_W: u32 = 640;
pub const DEFAULT_WINDOW_H: u32 = 400;

/// Menu/intro entry point, the start position used when `--part` is absent.
pub const DEFAULT_PART: u32 = 16001;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Fr,
    Us,
    De,
    Es,
    It,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayKind {
    #[default]
    Windowed,
    Fullscreen,
    FullscreenAspect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMode {
    pub kind: DisplayKind,
    pub width: u32,
    pub height: u32,
    pub gl_surface: bool, // recomputed at resolution, never set independently
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            kind: DisplayKind::Windowed,
            width: DEFAULT_WINDOW_W,
            height: DEFAULT_WINDOW_H,
            gl_surface: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalerSpec {
    pub name: String,
    pub factor: u32,
}

impl Default for ScalerSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            factor: 1,
        }
    }
}

impl ScalerSpec {
    pub fn is_default(&self) -> bool {
        self.name.is_empty() && self.factor == 1
    }
}

/// Legacy rendering toggles, carried as plain config fields and threaded into
/// the backend/engine constructors rather than living in process globals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyFlags {
    pub render_1991: bool,
    pub color_565: bool,
    pub ega_palette: bool,
}

/// Configuration as the option parser leaves it: backend still an open
/// request, legacy flags only partially known.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub data_path: PathBuf,
    pub part: u32,
    pub language: Language,
    pub requested_backend: Option<BackendKind>,
    pub display: DisplayMode,
    pub scaler: ScalerSpec,
    pub legacy: LegacyFlags,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("."),
            part: DEFAULT_PART,
            language: Language::default(),
            requested_backend: None,
            display: DisplayMode::default(),
            scaler: ScalerSpec::default(),
            legacy: LegacyFlags::default(),
        }
    }
}

/// Configuration after the resolution policy ran. Read-only for the rest of
/// the process; the orchestrator hands out borrows, never mutates it.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub data_path: PathBuf,
    pub part: u32,
    pub language: Language,
    pub backend: BackendKind,
    pub display: DisplayMode,
    pub scaler: ScalerSpec,
    pub legacy: LegacyFlags,
}

impl ResolvedConfig {
    pub fn validate(&self) -> OutworldResult<()> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(OutworldError::config(
                "display width/height must be > 0",
            ));
        }
        if self.display.gl_surface != (self.backend == BackendKind::Gl) {
            return Err(OutworldError::config(
                "gl_surface flag disagrees with resolved backend",
            ));
        }
        if self.scaler.factor == 0 {
            return Err(OutworldError::config("scaler factor must be >= 1"));
        }
        Ok(())
    }
}
