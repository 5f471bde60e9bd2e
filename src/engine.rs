use std::path::Path;

use crate::{
    config::{Language, ScalerSpec},
    edition::Edition,
    error::{OutworldError, OutworldResult},
    gfx::{BackendKind, Gfx},
    host::SystemHost,
    resource::Resource,
};

/// Interpreter engine, seen from the startup layer: construction detects the
/// content edition, `setup` wires language/backend/scaler, `run_tick`
/// advances one cooperative slice against borrowed collaborators. The
/// bytecode machinery behind `run_tick` is not part of this layer.
pub struct Engine {
    resource: Resource,
    part: u32,
    language: Language,
    backend_kind: Option<BackendKind>,
    scaler: ScalerSpec,
    ticks: u64,
    finished: bool,
}

impl Engine {
    /// Construct from data path and start position only. Detects the edition
    /// by probing the data directory; performs no rendering setup.
    pub fn new(data_path: &Path, part: u32) -> OutworldResult<Self> {
        let resource = Resource::detect(data_path)?;
        tracing::info!(
            edition = resource.edition().name(),
            part,
            data_path = %data_path.display(),
            "engine constructed"
        );
        Ok(Self {
            resource,
            part,
            language: Language::default(),
            backend_kind: None,
            scaler: ScalerSpec::default(),
            ticks: 0,
            finished: false,
        })
    }

    pub fn edition(&self) -> Edition {
        self.resource.edition()
    }

    pub fn game_title(&self, language: Language) -> &'static str {
        match language {
            Language::Us => "Out of This World",
            _ => "Another World",
        }
    }

    pub fn start_part(&self) -> u32 {
        self.part
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Wiring entry point, called once after the backend exists.
    pub fn setup(
        &mut self,
        language: Language,
        backend_kind: BackendKind,
        scaler: &ScalerSpec,
    ) -> OutworldResult<()> {
        if self.backend_kind.is_some() {
            return Err(OutworldError::engine("setup called twice"));
        }
        self.language = language;
        self.backend_kind = Some(backend_kind);
        self.scaler = scaler.clone();
        tracing::debug!(
            backend = backend_kind.name(),
            scaler = %scaler.name,
            factor = scaler.factor,
            "engine setup"
        );
        Ok(())
    }

    /// One frame/tick of the interpreter. The engine borrows the backend and
    /// host for the duration of the call and holds no reference afterwards.
    pub fn run_tick(
        &mut self,
        gfx: &mut dyn Gfx,
        host: &mut dyn SystemHost,
    ) -> OutworldResult<()> {
        if self.backend_kind.is_none() {
            return Err(OutworldError::engine("run_tick before setup"));
        }
        host.process_events()?;
        self.ticks += 1;
        gfx.present(host)
    }

    /// Cleanup entry point, after the run loop has ended.
    pub fn finish(&mut self) {
        self.finished = true;
        tracing::info!(ticks = self.ticks, "engine finished");
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
