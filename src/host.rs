/// Host-facing operations
///
/// The three functions an embedding page or script calls by name, plus a
/// JSON command form for hosts that talk to the player over a message
/// channel instead of direct calls.
use serde::{Deserialize, Serialize};

use crate::audio_system::{AudioBackend, EffectPlayer, PlayOutcome};
use crate::error::SoundError;

/// Play the named effect if enabled and known; no-op otherwise
pub fn play_sound<B: AudioBackend>(player: &mut EffectPlayer<B>, name: &str) -> PlayOutcome {
    player.play_named(name)
}

/// Flip and return the enabled flag
pub fn toggle_sound<B: AudioBackend>(player: &mut EffectPlayer<B>) -> bool {
    player.toggle()
}

/// Clamp and apply the master volume
pub fn set_sound_volume<B: AudioBackend>(player: &mut EffectPlayer<B>, level: f32) {
    player.set_volume(level);
}

/// Host commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostCommand {
    /// Play a sound effect by name
    PlaySound { name: String },

    /// Flip the enabled flag
    ToggleSound,

    /// Set the master volume
    SetSoundVolume { level: f32 },
}

/// Result of a host command
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reply", rename_all = "camelCase")]
pub enum HostReply {
    Played { outcome: PlayOutcome },
    Enabled { enabled: bool },
    Volume { level: f32 },
}

impl HostCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            HostCommand::PlaySound { name } => format!("Play sound: {}", name),
            HostCommand::ToggleSound => "Toggle sound".to_string(),
            HostCommand::SetSoundVolume { level } => format!("Set sound volume: {}", level),
        }
    }

    /// Run the command against a player
    pub fn execute<B: AudioBackend>(&self, player: &mut EffectPlayer<B>) -> HostReply {
        tracing::debug!("Executing host command: {}", self.description());

        match self {
            HostCommand::PlaySound { name } => HostReply::Played {
                outcome: play_sound(player, name),
            },
            HostCommand::ToggleSound => HostReply::Enabled {
                enabled: toggle_sound(player),
            },
            HostCommand::SetSoundVolume { level } => {
                set_sound_volume(player, *level);
                HostReply::Volume {
                    level: player.volume(),
                }
            }
        }
    }
}

/// Parse and execute one JSON command
///
/// Only a malformed command is an error; everything the player does with a
/// well-formed one degrades silently.
pub fn dispatch_json<B: AudioBackend>(
    player: &mut EffectPlayer<B>,
    json: &str,
) -> Result<HostReply, SoundError> {
    let command: HostCommand = serde_json::from_str(json).map_err(SoundError::InvalidCommand)?;
    Ok(command.execute(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_description() {
        let cmd = HostCommand::ToggleSound;
        assert_eq!(cmd.description(), "Toggle sound");

        let cmd = HostCommand::PlaySound {
            name: "spin".to_string(),
        };
        assert_eq!(cmd.description(), "Play sound: spin");
    }

    #[test]
    fn test_command_parsing() {
        let cmd: HostCommand =
            serde_json::from_str(r#"{ "command": "playSound", "name": "correct" }"#).unwrap();
        assert_eq!(
            cmd,
            HostCommand::PlaySound {
                name: "correct".to_string()
            }
        );

        let cmd: HostCommand = serde_json::from_str(r#"{ "command": "toggleSound" }"#).unwrap();
        assert_eq!(cmd, HostCommand::ToggleSound);

        let cmd: HostCommand =
            serde_json::from_str(r#"{ "command": "setSoundVolume", "level": 0.7 }"#).unwrap();
        assert_eq!(cmd, HostCommand::SetSoundVolume { level: 0.7 });
    }

    #[test]
    fn test_reply_serialization() {
        let reply = HostReply::Played {
            outcome: PlayOutcome::NotLoaded,
        };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"reply":"played","outcome":"notLoaded"}"#
        );

        let reply = HostReply::Enabled { enabled: false };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"reply":"enabled","enabled":false}"#
        );
    }
}
