//! Line-oriented text encoding of the whole [`User`] graph.
//!
//! ```text
//! USER_START
//! CHILD_START
//! Name:Mia
//! DateOfBirth:2020-03-20
//! ACTIVITIES_COUNT:1
//! ACTIVITY_START
//! Id:6f1c0c44-54c1-4c55-8a43-5d7b3b7a0c11
//! Title:Swimming
//! Description:Pool with dad
//! ScheduledDate:2024-06-15 10:00
//! Type:Physical
//! Duration:00:45:00
//! IsCompleted:False
//! ACTIVITY_END
//! CHILD_END
//! USER_END
//! ```
//!
//! Decoding is a single forward pass that keeps at most one open child and
//! one open activity. `key:value` lines split on the first colon and go to
//! the open activity if there is one, otherwise to the open child. Unknown
//! keys and lines without a colon are ignored.
//!
//! In [`ParseMode::Permissive`] a malformed value leaves the field at its
//! default and is reported as a [`FormatWarning`]; structural problems
//! (missing end tokens, stray end tokens) are tolerated. [`ParseMode::Strict`]
//! turns both into a [`FormatError`].
//!
//! Free-text values escape `\`, line feed and carriage return with a
//! backslash so that they survive a reload. Surrounding whitespace of every
//! value is trimmed.

use crate::libs::activity::{Activity, ActivityId, Category};
use crate::libs::child::Child;
use crate::libs::error::FormatError;
use crate::libs::user::User;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

pub const USER_START: &str = "USER_START";
pub const USER_END: &str = "USER_END";
pub const CHILD_START: &str = "CHILD_START";
pub const CHILD_END: &str = "CHILD_END";
pub const ACTIVITY_START: &str = "ACTIVITY_START";
pub const ACTIVITY_END: &str = "ACTIVITY_END";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// How [`decode`] reacts to malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Warn and keep the field default.
    #[default]
    Permissive,
    /// Fail the whole decode.
    Strict,
}

/// A field value that could not be parsed and was left at its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    pub line: usize,
    pub key: String,
    pub value: String,
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: invalid {} value '{}'", self.line, self.key, self.value)
    }
}

/// Result of a successful decode.
#[derive(Debug, Clone, Default)]
pub struct Decoded {
    pub user: User,
    pub warnings: Vec<FormatWarning>,
}

/// Serialises the user, children first and their activities nested inside.
pub fn encode(user: &User) -> String {
    let mut lines: Vec<String> = vec![USER_START.to_string()];

    for child in &user.children {
        lines.push(CHILD_START.to_string());
        lines.push(format!("Name:{}", escape(&child.name)));
        lines.push(format!("DateOfBirth:{}", child.date_of_birth.format(DATE_FORMAT)));
        lines.push(format!("ACTIVITIES_COUNT:{}", child.activities.len()));

        for activity in &child.activities {
            lines.push(ACTIVITY_START.to_string());
            lines.push(format!("Id:{}", activity.id));
            lines.push(format!("Title:{}", escape(&activity.title)));
            lines.push(format!("Description:{}", escape(&activity.description)));
            lines.push(format!("ScheduledDate:{}", activity.scheduled_at.format(DATETIME_FORMAT)));
            lines.push(format!("Type:{}", activity.category));
            lines.push(format!("Duration:{}", format_duration(activity.duration)));
            lines.push(format!("IsCompleted:{}", if activity.is_completed { "True" } else { "False" }));
            lines.push(ACTIVITY_END.to_string());
        }

        lines.push(CHILD_END.to_string());
    }

    lines.push(USER_END.to_string());
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Parses text produced by [`encode`] or by earlier versions of the format.
pub fn decode(text: &str, mode: ParseMode) -> Result<Decoded, FormatError> {
    let mut decoder = Decoder {
        mode,
        warnings: Vec::new(),
    };
    let mut user = User::default();
    let mut child: Option<Child> = None;
    let mut activity: Option<Activity> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        match line {
            USER_START | USER_END => continue,
            CHILD_START => {
                if mode == ParseMode::Strict && (child.is_some() || activity.is_some()) {
                    return Err(FormatError::NestedBlock { line: line_no, token: CHILD_START });
                }
                child = Some(Child::default());
                continue;
            }
            CHILD_END => {
                if let Some(done) = child.take() {
                    user.children.push(done);
                }
                continue;
            }
            ACTIVITY_START => {
                if mode == ParseMode::Strict {
                    if activity.is_some() {
                        return Err(FormatError::NestedBlock { line: line_no, token: ACTIVITY_START });
                    }
                    if child.is_none() {
                        return Err(FormatError::OrphanActivity { line: line_no });
                    }
                }
                activity = Some(Activity::default());
                continue;
            }
            ACTIVITY_END => {
                if let Some(done) = activity.take() {
                    match child.as_mut() {
                        Some(owner) => owner.activities.push(done),
                        None => tracing::debug!(line = line_no, title = %done.title, "dropping activity outside of a child block"),
                    }
                }
                continue;
            }
            _ => {}
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        if let Some(current) = activity.as_mut() {
            decoder.activity_field(current, line_no, key, value)?;
        } else if let Some(current) = child.as_mut() {
            decoder.child_field(current, line_no, key, value)?;
        }
    }

    if mode == ParseMode::Strict {
        if activity.is_some() {
            return Err(FormatError::UnterminatedBlock { token: ACTIVITY_END });
        }
        if child.is_some() {
            return Err(FormatError::UnterminatedBlock { token: CHILD_END });
        }
    }

    Ok(Decoded {
        user,
        warnings: decoder.warnings,
    })
}

struct Decoder {
    mode: ParseMode,
    warnings: Vec<FormatWarning>,
}

impl Decoder {
    fn activity_field(&mut self, activity: &mut Activity, line: usize, key: &str, value: &str) -> Result<(), FormatError> {
        match key {
            "Id" => match ActivityId::parse(value) {
                Some(id) => activity.id = id,
                None => self.invalid(line, key, value)?,
            },
            "Title" => activity.title = unescape(value),
            "Description" => activity.description = unescape(value),
            "ScheduledDate" => match NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
                Ok(scheduled_at) => activity.scheduled_at = scheduled_at,
                Err(_) => self.invalid(line, key, value)?,
            },
            "Type" => match value.parse::<Category>() {
                Ok(category) => activity.category = category,
                Err(_) => self.invalid(line, key, value)?,
            },
            "Duration" => match parse_duration(value) {
                Some(duration) => activity.duration = duration,
                None => self.invalid(line, key, value)?,
            },
            "IsCompleted" => match parse_bool(value) {
                Some(flag) => activity.is_completed = flag,
                None => self.invalid(line, key, value)?,
            },
            _ => {}
        }
        Ok(())
    }

    fn child_field(&mut self, child: &mut Child, line: usize, key: &str, value: &str) -> Result<(), FormatError> {
        match key {
            "Name" => child.name = unescape(value),
            "DateOfBirth" => match NaiveDate::parse_from_str(value, DATE_FORMAT) {
                Ok(dob) => child.date_of_birth = dob,
                Err(_) => self.invalid(line, key, value)?,
            },
            // Informational only; the real count is the number of blocks.
            "ACTIVITIES_COUNT" => {}
            _ => {}
        }
        Ok(())
    }

    fn invalid(&mut self, line: usize, key: &str, value: &str) -> Result<(), FormatError> {
        if self.mode == ParseMode::Strict {
            return Err(FormatError::InvalidField {
                line,
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        let warning = FormatWarning {
            line,
            key: key.to_string(),
            value: value.to_string(),
        };
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
        Ok(())
    }
}

/// Formats a duration as `hh:mm:ss`, with a `d.` prefix when it spans days
/// and a seven digit fraction when it has sub-second precision.
pub fn format_duration(duration: Duration) -> String {
    let duration = duration.max(Duration::zero());
    let secs = duration.num_seconds();
    let (days, hours, minutes, seconds) = (secs / 86_400, secs % 86_400 / 3_600, secs % 3_600 / 60, secs % 60);

    let mut text = if days > 0 {
        format!("{}.{:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    };
    let ticks = duration.subsec_nanos() / 100;
    if ticks > 0 {
        text.push_str(&format!(".{:07}", ticks));
    }
    text
}

/// Parses `[d.]hh:mm[:ss[.fffffff]]` or a bare number of days.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('-') {
        return None;
    }
    if !text.contains(':') {
        return Duration::try_seconds(number(text)?.checked_mul(86_400)?);
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 3 {
        return None;
    }
    let (days, hours) = match parts[0].split_once('.') {
        Some((d, h)) => (number(d)?, number(h)?),
        None => (0, number(parts[0])?),
    };
    let minutes = number(parts[1])?;
    let (seconds, nanos) = match parts.get(2) {
        Some(part) => match part.split_once('.') {
            Some((s, fraction)) => (number(s)?, fraction_nanos(fraction)?),
            None => (number(part)?, 0),
        },
        None => (0, 0),
    };
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    let total = days
        .checked_mul(86_400)?
        .checked_add(hours * 3_600 + minutes * 60 + seconds)?;
    Duration::try_seconds(total)?.checked_add(&Duration::nanoseconds(nanos))
}

fn number(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn fraction_nanos(text: &str) -> Option<i64> {
    if text.is_empty() || text.len() > 9 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{:0<9}", text);
    padded.parse().ok()
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
