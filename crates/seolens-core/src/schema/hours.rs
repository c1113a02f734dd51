//! Opening-hours grammar
//!
//! Parses compact strings like "Mon-Fri 9am-5pm, Sat 10:30am-2pm" into
//! structured day lists with 24-hour times. Unparseable input falls back
//! to a fixed Monday-Friday 09:00-17:00 block, so the builder always has
//! something valid to emit.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const DAY_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursSpec {
    pub days: Vec<&'static str>,
    /// 24-hour "HH:MM".
    pub opens: String,
    pub closes: String,
}

impl OpeningHoursSpec {
    /// The fallback block used when nothing parses.
    pub fn weekday_default() -> Self {
        Self {
            days: DAY_NAMES[..5].to_vec(),
            opens: "09:00".to_string(),
            closes: "17:00".to_string(),
        }
    }
}

/// One fragment: "<day>[-<day>] <time>-<time>".
static FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)^\s*
          ([a-z]{3,9})              # first day
          (?:\s*-\s*([a-z]{3,9}))?  # optional range end
          \s+
          (\d{1,2}(?::\d{2})?\s*(?:am|pm)?)   # opening time
          \s*[-\x{2013}]\s*
          (\d{1,2}(?::\d{2})?\s*(?:am|pm)?)   # closing time
          \s*$",
    )
    .expect("invalid hours regex")
});

fn day_index(name: &str) -> Option<usize> {
    let name = name.to_lowercase();
    DAY_NAMES
        .iter()
        .position(|full| full.to_lowercase().starts_with(&name[..name.len().min(3)]))
        .filter(|_| name.len() >= 3)
}

/// Expand a day range, wrapping past Sunday ("Fri-Mon" covers four days).
fn expand_days(start: usize, end: usize) -> Vec<&'static str> {
    let mut days = Vec::new();
    let mut index = start;
    loop {
        days.push(DAY_NAMES[index]);
        if index == end {
            break;
        }
        index = (index + 1) % 7;
    }
    days
}

/// Parse one time token to "HH:MM" in 24-hour form.
fn parse_time(token: &str) -> Option<String> {
    static TIME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*(am|pm)?$").expect("invalid time regex")
    });
    let caps = TIME.captures(token.trim())?;
    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps
        .get(2)
        .map(|m| m.as_str().parse().unwrap_or(0))
        .unwrap_or(0);
    if minute > 59 {
        return None;
    }
    match caps.get(3).map(|m| m.as_str().to_lowercase()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            if meridiem == "pm" && hour != 12 {
                hour += 12;
            } else if meridiem == "am" && hour == 12 {
                hour = 0;
            }
        }
        None => {
            if hour > 23 {
                return None;
            }
        }
    }
    Some(format!("{hour:02}:{minute:02}"))
}

fn parse_fragment(fragment: &str) -> Option<OpeningHoursSpec> {
    let caps = FRAGMENT.captures(fragment)?;
    let start = day_index(caps.get(1)?.as_str())?;
    let end = match caps.get(2) {
        Some(m) => day_index(m.as_str())?,
        None => start,
    };
    let opens = parse_time(caps.get(3)?.as_str())?;
    let closes = parse_time(caps.get(4)?.as_str())?;
    Some(OpeningHoursSpec {
        days: expand_days(start, end),
        opens,
        closes,
    })
}

/// Parse a full hours string. Fragments are comma- or semicolon-separated;
/// every fragment that fails to parse collapses into (at most one) default
/// weekday block.
pub fn parse_hours(input: &str) -> Vec<OpeningHoursSpec> {
    let input = input.trim();
    if input.is_empty() {
        return vec![OpeningHoursSpec::weekday_default()];
    }

    let mut specs = Vec::new();
    let mut needs_default = false;
    for fragment in input.split([',', ';']) {
        if fragment.trim().is_empty() {
            continue;
        }
        match parse_fragment(fragment) {
            Some(spec) => specs.push(spec),
            None => needs_default = true,
        }
    }

    if needs_default || specs.is_empty() {
        let default = OpeningHoursSpec::weekday_default();
        if !specs.contains(&default) {
            specs.push(default);
        }
    }
    specs
}
