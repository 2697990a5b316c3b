/// Sound identifiers
///
/// The closed set of effects a host can ask for by name.
use std::fmt;
use std::str::FromStr;

use crate::error::SoundError;

/// Sound effect identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Answer was right
    Correct,

    /// Answer was wrong
    Wrong,

    /// Button click
    Button,

    /// Quiz or round start
    Start,

    /// Roulette spin
    Spin,
}

impl SoundId {
    /// Every identifier, in registry order
    pub const ALL: [SoundId; 5] = [
        SoundId::Correct,
        SoundId::Wrong,
        SoundId::Button,
        SoundId::Start,
        SoundId::Spin,
    ];

    /// Name used by hosts
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundId::Correct => "correct",
            SoundId::Wrong => "wrong",
            SoundId::Button => "button",
            SoundId::Start => "start",
            SoundId::Spin => "spin",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundId {
    type Err = SoundError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SoundId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| SoundError::UnknownSound(name.to_string()))
    }
}
