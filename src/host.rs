use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crate::{
    config::DisplayMode,
    error::{OutworldError, OutworldResult},
};

/// Original timing: 50 Hz tick.
const TICK: Duration = Duration::from_millis(20);

/// Contract the orchestrator needs from the platform-integration subsystem
/// (window/input/timer). Quit is a polled flag, never a callback.
pub trait SystemHost {
    fn init(&mut self, title: &str, mode: &DisplayMode) -> OutworldResult<()>;

    /// Pump the platform event source once and pace to the tick rate.
    fn process_events(&mut self) -> OutworldResult<()>;

    fn quit_requested(&self) -> bool;

    /// Receive a finished frame from the rendering backend.
    fn push_frame(&mut self, data: &[u8], width: u32, height: u32) -> OutworldResult<()>;

    fn fini(&mut self);
}

/// Windowless host: quit comes from SIGINT/SIGTERM (or `quit_handle`), frames
/// are counted rather than displayed, pacing is real.
pub struct HeadlessHost {
    quit: Arc<AtomicBool>,
    sleeper: spin_sleep::SpinSleeper,
    last_tick: Option<Instant>,
    title: String,
    frames: u64,
    initialized: bool,
}

impl HeadlessHost {
    pub fn new() -> OutworldResult<Self> {
        let quit = Arc::new(AtomicBool::new(false));
        for sig in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            signal_hook::flag::register(sig, Arc::clone(&quit))
                .map_err(|e| OutworldError::platform(format!("signal handler: {e}")))?;
        }
        Ok(Self::with_quit_flag(quit))
    }

    /// Host with a caller-supplied quit flag and no signal handlers. Used by
    /// tests and embedders that drive the quit decision themselves.
    pub fn with_quit_flag(quit: Arc<AtomicBool>) -> Self {
        Self {
            quit,
            sleeper: spin_sleep::SpinSleeper::default(),
            last_tick: None,
            title: String::new(),
            frames: 0,
            initialized: false,
        }
    }

    pub fn quit_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl SystemHost for HeadlessHost {
    fn init(&mut self, title: &str, mode: &DisplayMode) -> OutworldResult<()> {
        if mode.width == 0 || mode.height == 0 {
            return Err(OutworldError::platform("display mode with zero geometry"));
        }
        self.title = title.to_string();
        self.initialized = true;
        tracing::info!(
            title,
            width = mode.width,
            height = mode.height,
            kind = ?mode.kind,
            gl_surface = mode.gl_surface,
            "host initialized"
        );
        Ok(())
    }

    fn process_events(&mut self) -> OutworldResult<()> {
        let now = Instant::now();
        if let Some(last) = self.last_tick {
            let next = last + TICK;
            if next > now {
                self.sleeper.sleep(next - now);
            }
        }
        self.last_tick = Some(Instant::now());
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }

    fn push_frame(&mut self, data: &[u8], width: u32, height: u32) -> OutworldResult<()> {
        if !self.initialized {
            return Err(OutworldError::platform("frame pushed before init"));
        }
        debug_assert!(data.len() as u64 >= u64::from(width) * u64::from(height));
        self.frames += 1;
        Ok(())
    }

    fn fini(&mut self) {
        tracing::info!(frames = self.frames, "host shut down");
        self.initialized = false;
    }
}
