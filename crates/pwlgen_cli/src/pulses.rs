//! `pwlgen pulses`: print the high pulses of each signal.

use pwlgen_common::PulseReport;
use pwlgen_config::{build_signals, load_config};

use crate::project::resolve_project_root;
use crate::{GlobalArgs, PulsesArgs, ReportFormat};

/// Runs the `pwlgen pulses` command.
///
/// Prints one report per signal to stdout, or only the signal whose label
/// matches `--signal`. Returns exit code 0 on success.
pub fn run(args: &PulsesArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let root = resolve_project_root(global)?;
    let config = load_config(&root)?;
    let signals = build_signals(&config)?;

    let reports = select(PulseReport::for_all(&signals), args.signal.as_deref())?;
    print!("{}", render(&reports, args.format)?);
    Ok(0)
}

/// Keeps the report whose label matches `label`, or all of them.
fn select(
    reports: Vec<PulseReport>,
    label: Option<&str>,
) -> Result<Vec<PulseReport>, Box<dyn std::error::Error>> {
    let Some(label) = label else {
        return Ok(reports);
    };
    let matched: Vec<_> = reports
        .into_iter()
        .filter(|r| r.label.trim() == label.trim())
        .collect();
    if matched.is_empty() {
        return Err(format!("no signal labeled '{label}'").into());
    }
    Ok(matched)
}

/// Formats reports as text blocks separated by a blank line, or as a JSON array.
fn render(reports: &[PulseReport], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(reports)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwlgen_common::{Signal, SignalMode, Waveform};

    fn reports() -> Vec<PulseReport> {
        PulseReport::for_all(&[
            Signal::new("CLK", Waveform::clock(4), SignalMode::Periodic),
            Signal::new("EN", "0110".parse().unwrap(), SignalMode::OneShot),
        ])
    }

    #[test]
    fn select_all_without_label() {
        assert_eq!(select(reports(), None).unwrap().len(), 2);
    }

    #[test]
    fn select_by_label() {
        let picked = select(reports(), Some("EN")).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].index, 2);
    }

    #[test]
    fn select_unknown_label_errors() {
        let err = select(reports(), Some("RST")).unwrap_err();
        assert!(err.to_string().contains("RST"));
    }

    #[test]
    fn text_report_lists_pulses() {
        let text = render(&reports(), ReportFormat::Text).unwrap();
        assert!(text.starts_with("Signal 1: CLK (periodic)\n"));
        assert!(text.contains("Signal 2: EN (one-shot)\n"));
        assert!(text.contains("Pulse 1: start = 1, width = 2 clocks\n"));
    }

    #[test]
    fn json_report_is_an_array() {
        let json = render(&reports(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["label"], "CLK");
        assert_eq!(items[0]["mode"], "periodic");
        assert_eq!(items[1]["pulses"][0]["start"], 1);
        assert_eq!(items[1]["pulses"][0]["width"], 2);
        assert_eq!(items[1]["levels"], "0110");
    }
}
