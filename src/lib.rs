#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod edition;
pub mod engine;
pub mod error;
pub mod gfx;
pub mod gfx_soft;
pub mod host;
pub mod options;
pub mod resolve;
pub mod resource;

#[cfg(feature = "gl")]
pub mod gfx_gl;

pub use config::{
    DisplayKind, DisplayMode, Language, LegacyFlags, ResolvedConfig, RuntimeConfig, ScalerSpec,
};
pub use edition::Edition;
pub use engine::Engine;
pub use error::{OutworldError, OutworldResult};
pub use gfx::{BackendKind, Gfx, create_gfx};
pub use host::{HeadlessHost, SystemHost};
pub use options::Cli;
pub use resolve::resolve;
