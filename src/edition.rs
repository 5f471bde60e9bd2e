/// Packaging/release of the game content, detected by inspecting the data
/// directory. Drives the default backend choice and the legacy color path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edition {
    Dos,
    DosDemo,
    Amiga,
    FifteenthEdition,
    TwentiethEdition,
    ThreeDo,
}

impl Edition {
    /// Anniversary re-releases and the console port ship high-resolution
    /// assets and default to the GL backend.
    pub fn is_modern(&self) -> bool {
        matches!(
            self,
            Edition::FifteenthEdition | Edition::TwentiethEdition | Edition::ThreeDo
        )
    }

    /// The 3DO port's assets require the 16-bit 565 color path.
    pub fn is_console_port(&self) -> bool {
        matches!(self, Edition::ThreeDo)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Edition::Dos => "dos",
            Edition::DosDemo => "dos-demo",
            Edition::Amiga => "amiga",
            Edition::FifteenthEdition => "15th-anniversary",
            Edition::TwentiethEdition => "20th-anniversary",
            Edition::ThreeDo => "3do",
        }
    }
}
