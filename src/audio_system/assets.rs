/// Embedded clip payloads
///
/// Every clip is a short tone sequence rendered into an in-memory WAV
/// buffer, so nothing is fetched from disk or the network.
use std::f32::consts::TAU;
use std::io::Cursor;
use std::ops::RangeInclusive;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::source::SoundId;
use crate::error::SoundError;

pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;

/// Sample rates the clips can be rendered at
pub const SAMPLE_RATE_RANGE: RangeInclusive<u32> = 8_000..=192_000;

/// Attack and release applied to every tone
const ENVELOPE_MS: f32 = 4.0;

/// Peak amplitude, leaving headroom below i16::MAX
const AMPLITUDE: f32 = 0.6;

/// One step of a clip recipe; `freq_hz == 0.0` is silence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: u32,
}

const fn tone(freq_hz: f32, duration_ms: u32) -> Tone {
    Tone {
        freq_hz,
        duration_ms,
    }
}

const CORRECT: &[Tone] = &[tone(1046.5, 90), tone(1318.5, 160)];
const WRONG: &[Tone] = &[tone(220.0, 140), tone(164.8, 220)];
const BUTTON: &[Tone] = &[tone(2000.0, 25)];
const START: &[Tone] = &[tone(523.3, 90), tone(659.3, 90), tone(784.0, 180)];
const SPIN: &[Tone] = &[
    tone(1500.0, 10),
    tone(0.0, 30),
    tone(1500.0, 10),
    tone(0.0, 30),
    tone(1500.0, 10),
    tone(0.0, 40),
    tone(1500.0, 10),
    tone(0.0, 50),
    tone(1500.0, 10),
    tone(0.0, 60),
    tone(1500.0, 10),
    tone(0.0, 80),
    tone(1500.0, 10),
];

/// Tone sequence for an identifier
pub fn recipe(sound: SoundId) -> &'static [Tone] {
    match sound {
        SoundId::Correct => CORRECT,
        SoundId::Wrong => WRONG,
        SoundId::Button => BUTTON,
        SoundId::Start => START,
        SoundId::Spin => SPIN,
    }
}

/// Decodable payload for one clip
#[derive(Debug, Clone)]
pub struct ClipAsset {
    sound: SoundId,
    wav: Arc<Vec<u8>>,
}

impl ClipAsset {
    /// Render the clip for `sound` at the given sample rate
    pub fn render(sound: SoundId, sample_rate: u32) -> Result<Self, SoundError> {
        if !SAMPLE_RATE_RANGE.contains(&sample_rate) {
            return Err(SoundError::InvalidSampleRate(sample_rate));
        }
        let wav = encode_wav(recipe(sound), sample_rate)?;
        Ok(Self {
            sound,
            wav: Arc::new(wav),
        })
    }

    /// Render every clip in registry order
    pub fn render_all(sample_rate: u32) -> Result<Vec<Self>, SoundError> {
        SoundId::ALL
            .into_iter()
            .map(|sound| Self::render(sound, sample_rate))
            .collect()
    }

    pub fn sound(&self) -> SoundId {
        self.sound
    }

    /// Shared WAV bytes
    pub fn wav(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.wav)
    }

    /// Inline `data:` URI for media elements
    pub fn data_uri(&self) -> String {
        format!("data:audio/wav;base64,{}", STANDARD.encode(self.wav.as_slice()))
    }
}

fn encode_wav(tones: &[Tone], sample_rate: u32) -> Result<Vec<u8>, SoundError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for tone in tones {
            write_tone(&mut writer, *tone, sample_rate)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

fn write_tone<W>(
    writer: &mut hound::WavWriter<W>,
    tone: Tone,
    sample_rate: u32,
) -> Result<(), hound::Error>
where
    W: std::io::Write + std::io::Seek,
{
    let rate = sample_rate as f32;
    let total = (rate * tone.duration_ms as f32 / 1000.0) as usize;
    let ramp = ((rate * ENVELOPE_MS / 1000.0) as usize).clamp(1, total.max(1));

    for i in 0..total {
        let sample = if tone.freq_hz > 0.0 {
            let gain = (i.min(total - 1 - i) as f32 / ramp as f32).min(1.0);
            (TAU * tone.freq_hz * i as f32 / rate).sin() * AMPLITUDE * gain
        } else {
            0.0
        };
        writer.write_sample((sample * i16::MAX as f32) as i16)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_back(asset: &ClipAsset) -> (hound::WavSpec, Vec<i16>) {
        let reader = hound::WavReader::new(Cursor::new(asset.wav().as_slice().to_vec())).unwrap();
        let spec = reader.spec();
        let samples = reader.into_samples::<i16>().map(Result::unwrap).collect();
        (spec, samples)
    }

    #[test]
    fn test_every_clip_renders_a_valid_wav() {
        let assets = ClipAsset::render_all(DEFAULT_SAMPLE_RATE).unwrap();
        assert_eq!(assets.len(), SoundId::ALL.len());

        for asset in &assets {
            let (spec, samples) = read_back(asset);
            assert_eq!(spec.channels, 1);
            assert_eq!(spec.sample_rate, DEFAULT_SAMPLE_RATE);
            assert!(!samples.is_empty(), "{} has no samples", asset.sound());
            assert!(samples.iter().any(|s| *s != 0), "{} is silent", asset.sound());
        }
    }

    #[test]
    fn test_clip_length_follows_recipe() {
        let asset = ClipAsset::render(SoundId::Start, 10_000).unwrap();
        let (_, samples) = read_back(&asset);
        // 90 + 90 + 180 ms at 10 kHz
        assert_eq!(samples.len(), 3_600);
    }

    #[test]
    fn test_clip_starts_and_ends_quietly() {
        let asset = ClipAsset::render(SoundId::Correct, DEFAULT_SAMPLE_RATE).unwrap();
        let (_, samples) = read_back(&asset);
        assert_eq!(samples[0], 0);
        assert!(samples.last().unwrap().abs() < 1_000);
    }

    #[test]
    fn test_render_rejects_unusable_sample_rates() {
        for rate in [0, 1, 7_999, 192_001, u32::MAX] {
            assert!(matches!(
                ClipAsset::render(SoundId::Correct, rate),
                Err(SoundError::InvalidSampleRate(r)) if r == rate
            ));
        }
        assert!(ClipAsset::render(SoundId::Button, 8_000).is_ok());
    }

    #[test]
    fn test_data_uri() {
        let asset = ClipAsset::render(SoundId::Button, DEFAULT_SAMPLE_RATE).unwrap();
        let uri = asset.data_uri();
        let encoded = uri.strip_prefix("data:audio/wav;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), *asset.wav());
    }
}
