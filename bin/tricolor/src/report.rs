//! Print a color in all three models.

use std::fmt::Write;

use serde::Serialize;
use tricolor::{Color, Component, Flags, Readout};

#[derive(Serialize)]
struct Report {
    hex: String,
    #[serde(flatten)]
    readout: Readout,
}

/// Render `color` as a table, or as JSON when `json` is set.
pub fn render(color: &Color, json: bool) -> anyhow::Result<String> {
    let readout = color.readout();

    if json {
        let report = Report {
            hex: color.to_hex(),
            readout,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(out, "hex   {}", color.to_hex())?;
    writeln!(
        out,
        "rgb   {}",
        row(&readout.rgb.to_array(), Flags::empty(), 2)
    )?;
    writeln!(
        out,
        "cmyk  {}",
        row(&readout.cmyk.to_array(), readout.cmyk_powerless, 4)
    )?;
    write!(
        out,
        "hls   {}",
        row(&readout.hls.to_array(), readout.hls_powerless, 4)
    )?;

    Ok(out)
}

/// Format channels in columns. Powerless channels are marked with `*`.
fn row(values: &[Component], powerless: Flags, precision: usize) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let mark = if powerless.contains(Flags::for_channel(index)) {
                "*"
            } else {
                " "
            };
            format!("{value:>8.precision$}{mark}")
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let color: Color = "#d2691e".parse().unwrap();
        let table = render(&color, false).unwrap();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "hex   #d2691e");
        assert_eq!(lines[1], "rgb     210.00    105.00     30.00");
        assert_eq!(lines[2], "cmyk    0.0000    0.5000    0.8571    0.1765");
        assert_eq!(lines[3], "hls     0.0694    0.8235    0.8571");
    }

    #[test]
    fn powerless_channels_are_marked() {
        let table = render(&Color::new(0.0, 0.0, 0.0), false).unwrap();
        assert!(table.contains("cmyk    0.0000*   0.0000*   0.0000*   1.0000"));
        assert!(table.contains("hls     0.0000*   0.0000    0.0000*"));
    }

    #[test]
    fn json() {
        let color: Color = "#ff0000".parse().unwrap();
        let text = render(&color, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["hex"], "#ff0000");
        assert_eq!(json["rgb"]["red"], 255.0);
        assert_eq!(json["cmyk"]["magenta"], 1.0);
        assert_eq!(json["hls"]["saturation"], 1.0);
        assert_eq!(json["cmyk_powerless"], 0);
    }
}
