//! Human-readable rendering of decoded reports.
//!
//! Only the station header and the flight condition are coloured; field
//! lines are plain text so they stay greppable when piped.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use crate::error::Result;
use crate::models::{FlightCondition, Metar, Observation, Report, Taf, WindData};

const LABEL_WIDTH: usize = 13;

/// Colour a flight condition the way charts do (green VFR, blue MVFR, red IFR)
pub fn condition_label(condition: FlightCondition) -> ColoredString {
    match condition {
        FlightCondition::VFR => condition.as_str().green().bold(),
        FlightCondition::MVFR => condition.as_str().blue().bold(),
        FlightCondition::IFR => condition.as_str().red().bold(),
        FlightCondition::NA => condition.as_str().dimmed(),
    }
}

/// Describe a wind group in words, if any part of it was reported
pub fn describe_wind(wind: &WindData) -> Option<String> {
    if wind.is_empty() {
        return None;
    }

    let mut text = match (wind.direction, wind.variable, wind.speed) {
        (Some(0), _, Some(0)) => "calm".to_string(),
        (Some(direction), _, Some(speed)) => format!("{:03}° at {} kt", direction, speed),
        (None, true, Some(speed)) => format!("variable at {} kt", speed),
        (_, _, None) => "not reported".to_string(),
        (None, false, Some(speed)) => format!("{} kt", speed),
    };

    if let Some(gust) = wind.gust {
        text.push_str(&format!(", gusting {} kt", gust));
    }
    if let Some(variability) = &wind.variability {
        text.push_str(&format!(", varying {}", variability));
    }

    Some(text)
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%MZ").to_string()
}

fn push_line(lines: &mut Vec<String>, label: &str, value: impl AsRef<str>) {
    let value = value.as_ref();
    if !value.is_empty() {
        lines.push(format!("  {:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH));
    }
}

fn observation_lines(observation: &Observation, lines: &mut Vec<String>) {
    if let Some(datetime) = observation.datetime {
        push_line(lines, "Issued", format_time(datetime));
    }
    push_line(lines, "Type", &observation.report_type);
    if let Some(wind) = describe_wind(&observation.wind) {
        push_line(lines, "Wind", wind);
    }
    match (observation.visibility, observation.visibility_group.as_deref()) {
        (Some(metres), Some(group)) if group.ends_with("SM") || group == "CAVOK" => {
            push_line(lines, "Visibility", format!("{} m ({})", metres, group))
        }
        (Some(metres), _) => push_line(lines, "Visibility", format!("{} m", metres)),
        (None, _) => {}
    }
    push_line(lines, "Weather", &observation.weather);

    if !observation.clouds.is_empty() {
        let clouds = match observation.cloud_height {
            Some(height) => format!(
                "{} (lowest {} ft, ceiling {} ft)",
                observation.clouds,
                height,
                observation.ceiling()
            ),
            None => observation.clouds.clone(),
        };
        push_line(lines, "Clouds", clouds);
    }
}

fn metar_lines(metar: &Metar, lines: &mut Vec<String>) {
    let temperature = match (metar.temperature, metar.dew_point) {
        (Some(t), Some(d)) => format!("{}°C, dew point {}°C", t, d),
        (Some(t), None) => format!("{}°C", t),
        (None, Some(d)) => format!("dew point {}°C", d),
        (None, None) => String::new(),
    };
    push_line(lines, "Temperature", temperature);
    if let Some(altimeter) = metar.altimeter {
        push_line(lines, "Altimeter", format!("{} hPa", altimeter));
    }
}

fn taf_lines(taf: &Taf, lines: &mut Vec<String>) {
    let valid = match (taf.from, taf.to) {
        (Some(from), Some(to)) => format!("{} to {}", format_time(from), format_time(to)),
        (Some(from), None) => format!("from {}", format_time(from)),
        (None, Some(to)) => format!("until {}", format_time(to)),
        (None, None) => String::new(),
    };
    push_line(lines, "Valid", valid);
}

/// Render a report as a multi-line briefing
pub fn render(report: &Report) -> String {
    let observation = report.observation();
    let mut lines = vec![format!(
        "{} {}  [{}]",
        observation.identifier.bold(),
        report.kind(),
        condition_label(observation.condition)
    )];

    match report {
        Report::Metar(metar) => {
            observation_lines(observation, &mut lines);
            metar_lines(metar, &mut lines);
        }
        Report::Taf(taf) => {
            taf_lines(taf, &mut lines);
            observation_lines(observation, &mut lines);
        }
    }
    push_line(&mut lines, "Remarks", &observation.supplements);

    lines.join("\n")
}

/// Render a report as JSON, pretty-printed or as a single line
pub fn render_json(report: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
