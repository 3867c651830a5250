//! Configuration types deserialized from `pwlgen.toml`.

use pwlgen_common::SignalMode;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Samples per waveform when `project.cycles` is not given.
pub const DEFAULT_CYCLES: usize = 32;

/// Number of blank signals created when no `[[signals]]` are listed.
pub const DEFAULT_SIGNAL_COUNT: usize = 3;

/// The top-level project configuration parsed from `pwlgen.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata (module name, cycle count).
    pub project: ProjectMeta,
    /// Export settings (clock, levels, edge time, output path).
    #[serde(default)]
    pub export: ExportConfig,
    /// Signal definitions in port order.
    #[serde(default)]
    pub signals: Vec<SignalDef>,
}

/// Core project metadata required in every `pwlgen.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// Project name, also used as the emitted module name.
    pub name: String,
    /// Samples per waveform; shared by every signal.
    #[serde(default = "default_cycles")]
    pub cycles: usize,
}

fn default_cycles() -> usize {
    DEFAULT_CYCLES
}

/// Export settings. Values stay as written; the compiler validates them.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// One nominal clock cycle, e.g. `"10ns"`. Required to export.
    pub clock_period: Option<String>,
    /// Low level in volts.
    #[serde(
        default = "default_vlow",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub vlow: String,
    /// High level in volts.
    #[serde(
        default = "default_vhigh",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub vhigh: String,
    /// Rise/fall time, e.g. `"10ps"`.
    #[serde(default = "default_edge_time")]
    pub edge_time: String,
    /// Default output path, relative to the project directory.
    pub output: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            clock_period: None,
            vlow: default_vlow(),
            vhigh: default_vhigh(),
            edge_time: default_edge_time(),
            output: None,
        }
    }
}

fn default_vlow() -> String {
    "0".to_string()
}

fn default_vhigh() -> String {
    "1.2".to_string()
}

fn default_edge_time() -> String {
    "10ps".to_string()
}

/// Deserializes a field that can be either a TOML number or a string.
///
/// Allows both `vhigh = 1.2` and `vhigh = "1.2"`. The text is kept so that
/// the compiler reports the value exactly as written if it is invalid.
fn deserialize_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberOrString;

    impl<'de> Visitor<'de> for NumberOrString {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a number or a string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(NumberOrString)
}

/// One signal: label, playback mode, and how to fill its waveform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignalDef {
    /// Free-form label; sanitized into a port name on export.
    #[serde(default)]
    pub name: String,
    /// Playback mode (`"one-shot"` or `"periodic"`). Defaults to one-shot,
    /// or periodic for an auto-filled clock.
    pub mode: Option<SignalMode>,
    /// `0`/`1` sample string; `_` and whitespace separate digits.
    pub pattern: Option<String>,
    /// High runs as `[start, width]` pairs, applied after `pattern`.
    #[serde(default)]
    pub pulses: Vec<(usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Levels {
        #[serde(deserialize_with = "deserialize_number_or_string")]
        v: String,
    }

    #[test]
    fn number_or_string_accepts_all_forms() {
        let f: Levels = toml::from_str("v = 1.2").unwrap();
        assert_eq!(f.v, "1.2");
        let i: Levels = toml::from_str("v = 3").unwrap();
        assert_eq!(i.v, "3");
        let n: Levels = toml::from_str("v = -1").unwrap();
        assert_eq!(n.v, "-1");
        let s: Levels = toml::from_str("v = \"0.9\"").unwrap();
        assert_eq!(s.v, "0.9");
    }

    #[test]
    fn number_or_string_rejects_other_types() {
        assert!(toml::from_str::<Levels>("v = true").is_err());
    }

    #[test]
    fn export_defaults() {
        let e = ExportConfig::default();
        assert!(e.clock_period.is_none());
        assert_eq!(e.vlow, "0");
        assert_eq!(e.vhigh, "1.2");
        assert_eq!(e.edge_time, "10ps");
    }

    #[test]
    fn signal_mode_names() {
        let s: SignalDef = toml::from_str("name = \"a\"\nmode = \"periodic\"").unwrap();
        assert_eq!(s.mode, Some(SignalMode::Periodic));
        let s: SignalDef = toml::from_str("mode = \"one-shot\"").unwrap();
        assert_eq!(s.mode, Some(SignalMode::OneShot));
        assert!(toml::from_str::<SignalDef>("mode = \"forever\"").is_err());
    }
}
