//! Configuration types deserialized from `marquee.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

use marquee_core::{DisplayMode, Frequency, MarqueeConfig};

/// The top-level project configuration parsed from `marquee.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Clock source settings (frequency, PLL usage).
    pub clock: ClockConfig,
    /// Pattern generation settings (interval, display mode).
    pub pattern: PatternConfig,
}

impl ProjectConfig {
    /// Bridges to the core controller configuration.
    pub fn to_marquee_config(&self) -> MarqueeConfig {
        MarqueeConfig {
            clock_frequency: self.clock.frequency,
            interval_seconds: self.pattern.interval_seconds,
            mode: self.pattern.mode,
        }
    }
}

/// Clock source configuration.
#[derive(Debug, Deserialize)]
pub struct ClockConfig {
    /// The input clock frequency. Accepts a string with unit suffix
    /// (`"12MHz"`) or a bare integer in Hz.
    #[serde(deserialize_with = "deserialize_frequency")]
    pub frequency: Frequency,
    /// Whether the advanced board variant's PLL conditions the clock.
    #[serde(default)]
    pub use_pll: bool,
    /// Edges the PLL model consumes acquiring lock. Ignored unless
    /// `use_pll` is set.
    #[serde(default = "default_lock_cycles")]
    pub lock_cycles: u64,
}

fn default_lock_cycles() -> u64 {
    3
}

/// Pattern generation configuration.
#[derive(Debug, Deserialize)]
pub struct PatternConfig {
    /// The duration of one pattern interval, in seconds.
    pub interval_seconds: f64,
    /// The display mode: a lowercase name (`"scan"`, `"blink"`,
    /// `"breathe"`) or a raw selector integer. Unrecognized integers are
    /// accepted and drive the all-off pattern; unrecognized names are a
    /// parse error.
    #[serde(default = "default_mode", deserialize_with = "deserialize_mode")]
    pub mode: DisplayMode,
}

fn default_mode() -> DisplayMode {
    DisplayMode::Scan
}

/// Deserializes a frequency field that can be either a string with unit
/// suffix or a bare integer in Hz.
fn deserialize_frequency<'de, D>(deserializer: D) -> Result<Frequency, D::Error>
where
    D: Deserializer<'de>,
{
    struct FrequencyVisitor;

    impl Visitor<'_> for FrequencyVisitor {
        type Value = Frequency;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a frequency string like \"12MHz\" or an integer in Hz")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map_err(de::Error::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Frequency::new(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v)
                .map(Frequency::new)
                .map_err(|_| de::Error::custom("frequency must be non-negative"))
        }
    }

    deserializer.deserialize_any(FrequencyVisitor)
}

/// Deserializes a mode field that can be either a lowercase mode name or a
/// raw selector integer.
fn deserialize_mode<'de, D>(deserializer: D) -> Result<DisplayMode, D::Error>
where
    D: Deserializer<'de>,
{
    struct ModeVisitor;

    impl Visitor<'_> for ModeVisitor {
        type Value = DisplayMode;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("\"scan\", \"blink\", \"breathe\", or a selector integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            DisplayMode::from_name(v)
                .ok_or_else(|| de::Error::custom(format!("unknown mode name '{v}'")))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            // Selectors beyond a byte are still just unrecognized
            Ok(u8::try_from(v)
                .map(DisplayMode::from_raw)
                .unwrap_or(DisplayMode::Other(u8::MAX)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            if v < 0 {
                return Err(de::Error::custom("mode selector must be non-negative"));
            }
            self.visit_u64(v as u64)
        }
    }

    deserializer.deserialize_any(ModeVisitor)
}
