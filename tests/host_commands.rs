// Host interface tests: the by-name functions and JSON command dispatch

mod common;

use common::recording_player;
use quiz_sfx::host::{play_sound, set_sound_volume, toggle_sound};
use quiz_sfx::{dispatch_json, HostReply, PlayOutcome, SoundError, SoundId};

#[test]
fn test_host_functions() {
    let (mut player, recorder) = recording_player();

    assert_eq!(play_sound(&mut player, "button"), PlayOutcome::Requested);
    assert_eq!(play_sound(&mut player, "trumpet"), PlayOutcome::Unknown);

    set_sound_volume(&mut player, -4.0);
    assert_eq!(player.volume(), 0.0);

    assert!(!toggle_sound(&mut player));
    assert_eq!(play_sound(&mut player, "button"), PlayOutcome::Disabled);

    assert_eq!(recorder.plays(), vec![SoundId::Button]);
}

#[test]
fn test_dispatch_json_commands() {
    let (mut player, recorder) = recording_player();

    let reply =
        dispatch_json(&mut player, r#"{ "command": "playSound", "name": "start" }"#).unwrap();
    assert_eq!(
        reply,
        HostReply::Played {
            outcome: PlayOutcome::Requested
        }
    );

    let reply =
        dispatch_json(&mut player, r#"{ "command": "setSoundVolume", "level": 7.5 }"#).unwrap();
    assert_eq!(reply, HostReply::Volume { level: 1.0 });

    let reply = dispatch_json(&mut player, r#"{ "command": "toggleSound" }"#).unwrap();
    assert_eq!(reply, HostReply::Enabled { enabled: false });

    assert_eq!(recorder.plays(), vec![SoundId::Start]);
}

#[test]
fn test_dispatch_unknown_sound_is_not_an_error() {
    let (mut player, _recorder) = recording_player();

    let reply =
        dispatch_json(&mut player, r#"{ "command": "playSound", "name": "gong" }"#).unwrap();
    assert_eq!(
        reply,
        HostReply::Played {
            outcome: PlayOutcome::Unknown
        }
    );
}

#[test]
fn test_dispatch_malformed_command() {
    let (mut player, recorder) = recording_player();

    for json in [
        "not json",
        r#"{ "command": "stopSound" }"#,
        r#"{ "command": "setSoundVolume" }"#,
    ] {
        let result = dispatch_json(&mut player, json);
        assert!(matches!(result, Err(SoundError::InvalidCommand(_))), "{json}");
    }

    assert!(player.is_enabled());
    assert!(recorder.calls.borrow().is_empty());
}
