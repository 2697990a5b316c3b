/// Volume level
///
/// Master volume shared by every clip.

/// Volume multiplier clamped to 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeLevel {
    level: f32,
}

impl VolumeLevel {
    /// Create a new volume level, clamping out-of-range input
    ///
    /// NaN has no meaningful clamp and falls back to the default level.
    pub fn new(level: f32) -> Self {
        let mut volume = Self::default();
        volume.set_level(level);
        volume
    }

    /// Get the volume level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Set the volume level
    ///
    /// Returns false and keeps the previous level when given NaN.
    pub fn set_level(&mut self, level: f32) -> bool {
        if level.is_nan() {
            return false;
        }
        self.level = level.clamp(0.0, 1.0);
        true
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self { level: 0.5 }
    }
}
