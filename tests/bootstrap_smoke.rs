use std::{
    fs,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use outworld::{
    DisplayMode, HeadlessHost, OutworldResult, RuntimeConfig, SystemHost, bootstrap,
};

fn dos_fixture(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("bootstrap_tests").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("memlist.bin"), b"").unwrap();
    dir
}

fn config_for(dir: &PathBuf) -> RuntimeConfig {
    RuntimeConfig {
        data_path: dir.clone(),
        ..RuntimeConfig::default()
    }
}

/// Host that requests quit after a fixed number of event pumps, so the run
/// loop executes a known number of ticks.
struct CountdownHost {
    remaining: u32,
    frames: u64,
    initialized: bool,
}

impl CountdownHost {
    fn new(ticks: u32) -> Self {
        Self {
            remaining: ticks,
            frames: 0,
            initialized: false,
        }
    }
}

impl SystemHost for CountdownHost {
    fn init(&mut self, _title: &str, _mode: &DisplayMode) -> OutworldResult<()> {
        self.initialized = true;
        Ok(())
    }

    fn process_events(&mut self) -> OutworldResult<()> {
        self.remaining = self.remaining.saturating_sub(1);
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.remaining == 0
    }

    fn push_frame(&mut self, _data: &[u8], _width: u32, _height: u32) -> OutworldResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn fini(&mut self) {
        self.initialized = false;
    }
}

#[test]
fn full_session_runs_and_tears_down() {
    let dir = dos_fixture("session");
    let mut host = CountdownHost::new(5);
    bootstrap::run_with_host(config_for(&dir), &mut host).unwrap();
    assert_eq!(host.frames, 5);
    assert!(!host.initialized, "teardown must release the host");
}

#[test]
fn pre_quit_host_skips_the_run_loop_cleanly() {
    let dir = dos_fixture("prequit");
    let quit = Arc::new(AtomicBool::new(true));
    let mut host = HeadlessHost::with_quit_flag(quit);
    bootstrap::run_with_host(config_for(&dir), &mut host).unwrap();
    assert_eq!(host.frames_presented(), 0);
}

#[test]
fn quit_handle_stops_a_live_host() {
    let dir = dos_fixture("handle");
    let quit = Arc::new(AtomicBool::new(false));
    quit.store(true, Ordering::Relaxed);
    let mut host = HeadlessHost::with_quit_flag(quit);
    bootstrap::run_with_host(config_for(&dir), &mut host).unwrap();
}

#[test]
fn missing_game_data_fails_before_any_backend_work() {
    let dir = PathBuf::from("target").join("bootstrap_tests").join("nodata");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let mut host = CountdownHost::new(1);
    let err = bootstrap::run_with_host(config_for(&dir), &mut host).unwrap_err();
    assert!(err.to_string().contains("no recognizable game data"));
    assert!(!host.initialized);
}

#[cfg(not(feature = "gl"))]
#[test]
fn gl_request_without_capability_is_fatal_before_wiring() {
    use outworld::BackendKind;

    let dir = dos_fixture("nogl");
    let config = RuntimeConfig {
        requested_backend: Some(BackendKind::Gl),
        ..config_for(&dir)
    };
    let mut host = CountdownHost::new(1);
    let err = bootstrap::run_with_host(config, &mut host).unwrap_err();
    assert!(err.to_string().contains("backend error"));
    assert!(!host.initialized, "host must not be initialized after a capability failure");
}
