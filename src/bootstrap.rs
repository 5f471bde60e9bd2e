use crate::{
    config::RuntimeConfig,
    engine::Engine,
    error::{OutworldError, OutworldResult},
    gfx::create_gfx,
    host::{HeadlessHost, SystemHost},
    resolve::resolve,
};

/// Startup stages, strictly sequential, one run per process. The backend is
/// resolved only after the engine reports its edition; that ordering is the
/// one real data dependency here and must not be collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Parsed,
    EngineConstructed,
    BackendResolved,
    BackendConstructed,
    Wired,
    Running,
    Finished,
    TornDown,
}

impl Stage {
    pub fn successor(self) -> Option<Stage> {
        match self {
            Stage::Parsed => Some(Stage::EngineConstructed),
            Stage::EngineConstructed => Some(Stage::BackendResolved),
            Stage::BackendResolved => Some(Stage::BackendConstructed),
            Stage::BackendConstructed => Some(Stage::Wired),
            Stage::Wired => Some(Stage::Running),
            Stage::Running => Some(Stage::Finished),
            Stage::Finished => Some(Stage::TornDown),
            Stage::TornDown => None,
        }
    }
}

/// Tracks the current stage and rejects any transition that is not the
/// immediate successor.
#[derive(Debug)]
pub struct StageTracker {
    current: Stage,
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            current: Stage::Parsed,
        }
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    pub fn advance(&mut self, to: Stage) -> OutworldResult<()> {
        if self.current.successor() != Some(to) {
            return Err(OutworldError::config(format!(
                "stage transition {:?} -> {to:?} out of order",
                self.current
            )));
        }
        tracing::debug!(from = ?self.current, to = ?to, "stage");
        self.current = to;
        Ok(())
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one session with the default headless host.
pub fn run(config: RuntimeConfig) -> OutworldResult<()> {
    let mut host = HeadlessHost::new()?;
    run_with_host(config, &mut host)
}

/// Construct, resolve, wire, run and tear down one engine session against a
/// caller-supplied platform host.
#[tracing::instrument(skip_all)]
pub fn run_with_host(config: RuntimeConfig, host: &mut dyn SystemHost) -> OutworldResult<()> {
    let mut stage = StageTracker::new();

    // engine first: backend resolution needs the edition it detects
    let mut engine = Engine::new(&config.data_path, config.part)?;
    stage.advance(Stage::EngineConstructed)?;

    let config = resolve(config, engine.edition());
    config.validate()?;
    stage.advance(Stage::BackendResolved)?;

    // capability failure surfaces here, before anything is wired
    let mut gfx = create_gfx(&config)?;
    gfx.init(config.display.width, config.display.height)?;
    host.init(engine.game_title(config.language), &config.display)?;
    stage.advance(Stage::BackendConstructed)?;

    engine.setup(config.language, config.backend, &config.scaler)?;
    stage.advance(Stage::Wired)?;

    stage.advance(Stage::Running)?;
    while !host.quit_requested() {
        engine.run_tick(gfx.as_mut(), host)?;
    }

    engine.finish();
    stage.advance(Stage::Finished)?;

    // reverse of acquisition: the host goes first, the engine held only
    // borrows and is dropped after
    host.fini();
    drop(engine);
    stage.advance(Stage::TornDown)?;
    Ok(())
}
