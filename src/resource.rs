use std::path::{Path, PathBuf};

use crate::{
    edition::Edition,
    error::{OutworldError, OutworldResult},
};

/// Data-directory view of the resource layer. Detection only probes for the
/// marker files of each known release; decompression and bank loading happen
/// later, outside the startup layer.
#[derive(Clone, Debug)]
pub struct Resource {
    data_path: PathBuf,
    edition: Edition,
}

/// Probe table, checked in order. First hit wins, so the more specific
/// re-release layouts come before the legacy bank files.
const PROBES: &[(&str, Edition)] = &[
    ("GameData", Edition::ThreeDo),
    ("Pak01.pak", Edition::FifteenthEdition),
    ("game", Edition::TwentiethEdition),
    ("memlist.bin", Edition::Dos),
    ("demo01", Edition::DosDemo),
    ("bank01", Edition::Amiga),
];

impl Resource {
    pub fn detect(data_path: &Path) -> OutworldResult<Self> {
        for (marker, edition) in PROBES {
            if data_path.join(marker).exists() {
                tracing::debug!(edition = edition.name(), marker, "detected game data");
                return Ok(Self {
                    data_path: data_path.to_path_buf(),
                    edition: *edition,
                });
            }
        }
        Err(OutworldError::engine(format!(
            "no recognizable game data in '{}'",
            data_path.display()
        )))
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
