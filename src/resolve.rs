use crate::{
    config::{ResolvedConfig, RuntimeConfig},
    edition::Edition,
    gfx::BackendKind,
};

/// Backend resolution policy. Pure, evaluated exactly once, after the engine
/// has inspected its data and reported the edition. The returned config is
/// final: nothing downstream re-derives backend or surface flags.
///
/// Rules, in order:
/// 1. No explicit request: GL for modern editions, original emulation
///    otherwise.
/// 2. The console-port edition is forced to the software path with 16-bit
///    565 color whenever the user made any explicit request, or the backend
///    is otherwise not GL; its assets require that color path, so this
///    overrides the user's choice. Only the no-request default (GL, via
///    rule 1) is left alone.
/// 3. The original backend implies the 1991 rendering mode.
/// 4. The GL-surface flag is recomputed from the final backend.
pub fn resolve(config: RuntimeConfig, edition: Edition) -> ResolvedConfig {
    let mut backend = config.requested_backend.unwrap_or_else(|| {
        if edition.is_modern() {
            BackendKind::Gl
        } else {
            BackendKind::Original
        }
    });

    let mut legacy = config.legacy;
    if edition.is_console_port()
        && (config.requested_backend.is_some() || backend != BackendKind::Gl)
    {
        backend = BackendKind::Software;
        legacy.color_565 = true;
    }
    legacy.render_1991 = backend == BackendKind::Original;

    let mut display = config.display;
    display.gl_surface = backend == BackendKind::Gl;

    tracing::info!(
        backend = backend.name(),
        edition = edition.name(),
        explicit = config.requested_backend.is_some(),
        "backend resolved"
    );

    ResolvedConfig {
        data_path: config.data_path,
        part: config.part,
        language: config.language,
        backend,
        display,
        scaler: config.scaler,
        legacy,
    }
}
