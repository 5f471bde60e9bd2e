use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{DisplayKind, Language, RuntimeConfig, ScalerSpec},
    gfx::BackendKind,
};

const LANGUAGES: &[(&str, Language)] = &[
    ("fr", Language::Fr),
    ("us", Language::Us),
    ("de", Language::De),
    ("es", Language::Es),
    ("it", Language::It),
];

const RENDERERS: &[(&str, BackendKind)] = &[
    ("original", BackendKind::Original),
    ("software", BackendKind::Software),
    ("gl", BackendKind::Gl),
];

/// Command line surface. Free-form tokens (language, renderer, geometry,
/// scaler) are taken as strings and matched leniently in `into_config`: an
/// unmatched token keeps the prior default instead of failing the parse.
#[derive(Parser, Debug)]
#[command(name = "outworld", version, about = "Another World interpreter")]
pub struct Cli {
    /// Path to data files (default '.')
    #[arg(long, value_name = "PATH")]
    pub datapath: Option<PathBuf>,

    /// Language (fr,us,de,es,it)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Game part to start from (0-35 or 16000-16009)
    #[arg(long, value_name = "NUM")]
    pub part: Option<u32>,

    /// Renderer (original,software,gl)
    #[arg(long, value_name = "NAME")]
    pub render: Option<String>,

    /// Windowed display size (default '640x400')
    #[arg(long, value_name = "WxH")]
    pub window: Option<String>,

    /// Fullscreen display (stretched)
    #[arg(long)]
    pub fullscreen: bool,

    /// Fullscreen display (4:3 aspect ratio)
    #[arg(long = "fullscreen-ar")]
    pub fullscreen_ar: bool,

    /// Pixel scaler (name@factor)
    #[arg(long, value_name = "NAME@N")]
    pub scaler: Option<String>,

    /// Use the EGA palette with the DOS version
    #[arg(long = "ega-palette")]
    pub ega_palette: bool,

    /// Data directory, accepted bare when it names an existing directory
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> RuntimeConfig {
        let mut config = RuntimeConfig::default();

        if let Some(path) = self.datapath {
            config.data_path = path;
        } else if let Some(bare) = self.data_dir
            && bare.is_dir()
        {
            // single bare argument naming an existing directory is the data
            // path, no flag required
            config.data_path = bare;
        }

        if let Some(token) = self.language.as_deref() {
            match lookup(LANGUAGES, token) {
                Some(lang) => config.language = lang,
                None => tracing::debug!(token, "unknown language, keeping default"),
            }
        }

        if let Some(part) = self.part {
            config.part = part;
        }

        if let Some(token) = self.render.as_deref() {
            match lookup(RENDERERS, token) {
                Some(kind) => config.requested_backend = Some(kind),
                None => tracing::debug!(token, "unknown renderer, keeping default"),
            }
        }

        if let Some(spec) = self.window.as_deref() {
            match parse_geometry(spec) {
                Some((w, h)) => {
                    config.display.width = w;
                    config.display.height = h;
                }
                None => tracing::debug!(spec, "malformed geometry, keeping default"),
            }
        }

        if self.fullscreen {
            config.display.kind = DisplayKind::Fullscreen;
        }
        if self.fullscreen_ar {
            config.display.kind = DisplayKind::FullscreenAspect;
        }

        if let Some(spec) = self.scaler.as_deref() {
            config.scaler = parse_scaler(spec);
        }

        config.legacy.ega_palette = self.ega_palette;
        config
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}

/// Parse `WxH`. Both integers must match and be non-zero; anything else is
/// `None` and the caller keeps its prior geometry untouched.
pub fn parse_geometry(spec: &str) -> Option<(u32, u32)> {
    let (w, h) = spec.split_once('x')?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

/// Parse `name@factor`. A spec without `@` leaves both name and factor at
/// their defaults: a bare scaler name selects no scaler at all. A factor that
/// is not an integer >= 1 also keeps the defaults.
pub fn parse_scaler(spec: &str) -> ScalerSpec {
    let Some((name, factor)) = spec.split_once('@') else {
        return ScalerSpec::default();
    };
    match factor.parse::<u32>() {
        Ok(factor) if factor >= 1 => ScalerSpec {
            name: name.to_string(),
            factor,
        },
        _ => ScalerSpec::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_WINDOW_H, DEFAULT_WINDOW_W, DisplayKind};

    fn config_from(args: &[&str]) -> RuntimeConfig {
        let mut argv = vec!["outworld"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn defaults_when_no_arguments() {
        let c = config_from(&[]);
        assert_eq!(c.data_path, PathBuf::from("."));
        assert_eq!(c.part, 16001);
        assert_eq!(c.language, Language::Fr);
        assert!(c.requested_backend.is_none());
        assert!(c.scaler.is_default());
    }

    #[test]
    fn geometry_parses_both_integers() {
        assert_eq!(parse_geometry("800x600"), Some((800, 600)));
        assert_eq!(parse_geometry("640x400"), Some((640, 400)));
    }

    #[test]
    fn malformed_geometry_keeps_prior_values() {
        for bad in ["800", "x600", "800x", "axb", "0x600", "800x0", ""] {
            assert_eq!(parse_geometry(bad), None, "{bad:?}");
            let c = config_from(&["--window", bad]);
            assert_eq!(c.display.width, DEFAULT_WINDOW_W);
            assert_eq!(c.display.height, DEFAULT_WINDOW_H);
        }
    }

    #[test]
    fn scaler_with_factor_sets_both_fields() {
        let c = config_from(&["--scaler", "hq@3"]);
        assert_eq!(c.scaler.name, "hq");
        assert_eq!(c.scaler.factor, 3);
    }

    #[test]
    fn bare_scaler_name_selects_no_scaler() {
        // name without a factor is dropped entirely, whatever the name was
        for bad in ["hq", "xbr", "", "hq@", "hq@zero", "hq@0"] {
            assert!(parse_scaler(bad).is_default(), "{bad:?}");
        }
    }

    #[test]
    fn unknown_language_token_keeps_default() {
        let c = config_from(&["--language", "jp"]);
        assert_eq!(c.language, Language::Fr);
        let c = config_from(&["--language", "de"]);
        assert_eq!(c.language, Language::De);
    }

    #[test]
    fn unknown_renderer_token_keeps_default() {
        let c = config_from(&["--render", "vulkan"]);
        assert!(c.requested_backend.is_none());
        let c = config_from(&["--render", "gl"]);
        assert_eq!(c.requested_backend, Some(BackendKind::Gl));
    }

    #[test]
    fn fullscreen_flags_set_display_kind() {
        assert_eq!(
            config_from(&["--fullscreen"]).display.kind,
            DisplayKind::Fullscreen
        );
        assert_eq!(
            config_from(&["--fullscreen-ar"]).display.kind,
            DisplayKind::FullscreenAspect
        );
    }

    #[test]
    fn fullscreen_keeps_recorded_geometry() {
        let c = config_from(&["--window", "800x600", "--fullscreen"]);
        assert_eq!(c.display.kind, DisplayKind::Fullscreen);
        assert_eq!((c.display.width, c.display.height), (800, 600));
    }

    #[test]
    fn bare_directory_argument_is_the_data_path() {
        let dir = PathBuf::from("target").join("options_tests").join("data");
        std::fs::create_dir_all(&dir).unwrap();
        let c = config_from(&[dir.to_str().unwrap()]);
        assert_eq!(c.data_path, dir);
    }

    #[test]
    fn bare_non_directory_argument_is_ignored() {
        let c = config_from(&["definitely/not/a/dir"]);
        assert_eq!(c.data_path, PathBuf::from("."));
    }

    #[test]
    fn explicit_datapath_wins_over_bare_argument() {
        let dir = PathBuf::from("target").join("options_tests").join("data2");
        std::fs::create_dir_all(&dir).unwrap();
        let c = config_from(&["--datapath", "/elsewhere", dir.to_str().unwrap()]);
        assert_eq!(c.data_path, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn unknown_long_option_fails_the_parse() {
        // the binary turns this into usage text and a clean exit
        assert!(Cli::try_parse_from(["outworld", "--no-such-option"]).is_err());
    }

    #[test]
    fn ega_palette_flag_is_recorded() {
        assert!(config_from(&["--ega-palette"]).legacy.ega_palette);
        assert!(!config_from(&[]).legacy.ega_palette);
    }
}
