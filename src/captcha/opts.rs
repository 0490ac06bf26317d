use crate::foundation::core::Rgba8;
use crate::foundation::error::{PixgenError, PixgenResult};

/// Characters without look-alikes (no `0/O`, `1/I`).
pub const DEFAULT_CHARSET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Upper bound on code length.
pub const MAX_CODE_LEN: usize = 32;

/// How much noise is drawn behind the code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disturbance {
    /// Light noise.
    #[default]
    Normal,
    /// Twice the normal noise.
    Medium,
    /// Four times the normal noise.
    High,
}

impl Disturbance {
    /// Noise intensity: number of circles drawn, and the warp scale factor basis.
    pub fn intensity(self) -> u32 {
        match self {
            Self::Normal => 4,
            Self::Medium => 8,
            Self::High => 16,
        }
    }
}

/// CAPTCHA generation options. Every field has a default, so partial JSON is accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptchaOpts {
    /// Image width in pixels.
    pub width: i64,
    /// Image height in pixels.
    pub height: i64,
    /// Code to draw; empty picks a random one.
    pub code: String,
    /// Length of a random code.
    pub length: usize,
    /// Alphabet of a random code.
    pub charset: String,
    /// Noise level.
    pub disturbance: Disturbance,
    /// Generator seed; `None` derives one from the clock.
    pub seed: Option<u64>,
    /// Background colour; `None` picks a random light colour.
    pub background: Option<Rgba8>,
    /// Glyph colours cycled per character; empty picks random dark colours.
    pub foreground: Vec<Rgba8>,
    /// Apply the wave distortion as the last step.
    pub warp: bool,
}

impl Default for CaptchaOpts {
    fn default() -> Self {
        Self {
            width: 120,
            height: 30,
            code: String::new(),
            length: 4,
            charset: DEFAULT_CHARSET.to_string(),
            disturbance: Disturbance::Normal,
            seed: None,
            background: None,
            foreground: Vec::new(),
            warp: true,
        }
    }
}

impl CaptchaOpts {
    /// Check option consistency. Canvas extents are checked when the canvas is created.
    pub fn validate(&self) -> PixgenResult<()> {
        if self.code.is_empty() {
            if self.charset.is_empty() {
                return Err(PixgenError::validation("captcha charset must be non-empty"));
            }
            if self.length == 0 || self.length > MAX_CODE_LEN {
                return Err(PixgenError::validation(format!(
                    "captcha length must be in 1..={MAX_CODE_LEN}"
                )));
            }
        } else if self.code.chars().count() > MAX_CODE_LEN {
            return Err(PixgenError::validation(format!(
                "captcha code longer than {MAX_CODE_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/captcha/opts.rs"]
mod tests;
