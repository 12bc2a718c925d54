//! Command parsing.
//!
//! A command is a group name followed by elements:
//!
//! ```text
//! group[:key[=value]]*
//! ```
//!
//! A key ends at `:` or `=`; after `=` comes its value, which ends at the
//! next `:` or `=`. Unknown keys are ignored. When a key appears more than
//! once, by name or alias, the last occurrence wins. Settings come out in
//! the group's table order regardless of the order they were written in.

use log::debug;
use plug417_protocol::Attribute;

use crate::error::{CommandError, CommandResult};
use crate::table::{Action, Group};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Attribute settings to apply in order.
    Settings(Vec<(Attribute, u32)>),
    /// Help was requested; the topic is the rest of the line.
    Help(String),
}

/// Split `text` into `(key, value)` elements.
pub fn elements(text: &str) -> Elements<'_> {
    Elements { rest: text }
}

/// Iterator over the elements of a command line.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    rest: &'a str,
}

impl<'a> Elements<'a> {
    /// Unparsed remainder.
    pub fn rest(&self) -> &'a str {
        self.rest
    }
}

fn is_separator(c: char) -> bool {
    c == ':' || c == '='
}

fn split_token(text: &str) -> (&str, Option<char>, &str) {
    match text.find(is_separator) {
        Some(at) => (&text[..at], Some(text.as_bytes()[at] as char), &text[at + 1..]),
        None => (text, None, ""),
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (key, sep, rest) = split_token(self.rest);
        if sep != Some('=') {
            self.rest = rest;
            return Some((key, None));
        }
        let (value, _, rest) = split_token(rest);
        self.rest = rest;
        Some((key, Some(value)))
    }
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Parse an integer the way C `strtol(text, NULL, 0)` reads it.
///
/// Accepts an optional sign followed by decimal, `0x` hex or leading-zero
/// octal digits. Negative values come back in two's complement.
pub fn parse_number(text: &str) -> Option<u32> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.starts_with(is_sign) {
        return None;
    }
    let magnitude = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        u64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<u64>().ok()?
    };
    if negative {
        if magnitude > 1 << 31 {
            return None;
        }
        Some((magnitude as i64).wrapping_neg() as i32 as u32)
    } else {
        u32::try_from(magnitude).ok()
    }
}

/// Parse a command line.
pub fn parse(text: &str) -> CommandResult<ParsedCommand> {
    let mut elements = elements(text.trim());
    let (head, _) = elements.next().ok_or(CommandError::Empty)?;
    if head.is_empty() {
        return Err(CommandError::Empty);
    }
    if head == "help" {
        return Ok(ParsedCommand::Help(elements.rest().to_string()));
    }
    let group = Group::find(head).ok_or_else(|| CommandError::UnknownGroup(head.to_string()))?;
    Ok(ParsedCommand::Settings(parse_group(group, elements)?))
}

/// Resolve the elements of one group into settings.
pub fn parse_group<'a>(
    group: &Group,
    elements: impl Iterator<Item = (&'a str, Option<&'a str>)>,
) -> CommandResult<Vec<(Attribute, u32)>> {
    let mut values: Vec<Option<u32>> = vec![None; group.keys.len()];

    for (token, value) in elements {
        debug!("{}: key {:?} value {:?}", group.name, token, value);
        let mut known = false;
        for (slot, key) in values.iter_mut().zip(group.keys) {
            if !key.matches(token) {
                continue;
            }
            known = true;
            *slot = Some(match key.action {
                Action::Switch(_, fixed) | Action::IconSwitch(_, fixed) => fixed,
                _ => {
                    let text = value
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| CommandError::MissingValue(key.name.to_string()))?;
                    parse_number(text).ok_or_else(|| CommandError::InvalidValue {
                        key: key.name.to_string(),
                        text: text.to_string(),
                    })?
                }
            });
        }
        if !known {
            debug!("{}: ignoring unknown key {:?}", group.name, token);
        }
    }

    let index = group
        .keys
        .iter()
        .zip(&values)
        .find_map(|(key, value)| match key.action {
            Action::IconIndex => *value,
            _ => None,
        })
        .unwrap_or(0);
    let index = u8::try_from(index).map_err(|_| CommandError::InvalidValue {
        key: "num".to_string(),
        text: index.to_string(),
    })?;

    let settings = group
        .keys
        .iter()
        .zip(values)
        .filter_map(|(key, value)| {
            let value = value?;
            let attribute = match key.action {
                Action::Set(attribute) | Action::Switch(attribute, _) => attribute,
                Action::Icon(indexed) | Action::IconSwitch(indexed, _) => indexed(index),
                Action::IconIndex => return None,
            };
            Some((attribute, value))
        })
        .collect();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements() {
        let items: Vec<_> = elements("icon:n=1:on:x=0x10").collect();
        assert_eq!(
            items,
            vec![("icon", None), ("n", Some("1")), ("on", None), ("x", Some("0x10"))]
        );
    }

    #[test]
    fn test_elements_equals_as_separator() {
        let items: Vec<_> = elements("a=1=b=2").collect();
        assert_eq!(items, vec![("a", Some("1")), ("b", Some("2"))]);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("0x1F"), Some(31));
        assert_eq!(parse_number("0XfF"), Some(255));
        assert_eq!(parse_number("010"), Some(8));
        assert_eq!(parse_number("0"), Some(0));
        assert_eq!(parse_number("+7"), Some(7));
        assert_eq!(parse_number("-1"), Some(0xFFFF_FFFF));
        assert_eq!(parse_number("-500"), Some(-500i32 as u32));
        assert_eq!(parse_number("4294967295"), Some(u32::MAX));
        assert_eq!(parse_number("4294967296"), None);
        assert_eq!(parse_number("09"), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_digital_video() {
        let parsed = parse("digit:port=2:c=4").unwrap();
        assert_eq!(
            parsed,
            ParsedCommand::Settings(vec![(Attribute::DigitalPort, 2), (Attribute::CmosContent, 4)])
        );
    }

    #[test]
    fn test_table_order_and_last_wins() {
        let parsed = parse("area:t=100:m=2:mode=3").unwrap();
        assert_eq!(
            parsed,
            ParsedCommand::Settings(vec![(Attribute::AreaMode, 3), (Attribute::AreaAlarmThreshold, 100)])
        );
    }

    #[test]
    fn test_icon_index() {
        let parsed = parse("icon:x=10:n=1:on:w=22").unwrap();
        assert_eq!(
            parsed,
            ParsedCommand::Settings(vec![
                (Attribute::SmallIconOn(1), 1),
                (Attribute::SmallIconX(1), 10),
                (Attribute::SmallIconWidth(1), 22),
            ])
        );

        let parsed = parse("icon:off:y=5").unwrap();
        assert_eq!(
            parsed,
            ParsedCommand::Settings(vec![(Attribute::SmallIconOn(0), 0), (Attribute::SmallIconY(0), 5)])
        );
    }

    #[test]
    fn test_switch_ignores_value() {
        let parsed = parse("menu:on=5").unwrap();
        assert_eq!(parsed, ParsedCommand::Settings(vec![(Attribute::MenuBarOn, 1)]));
    }

    #[test]
    fn test_on_and_off_apply_in_table_order() {
        let parsed = parse("layer:on:off").unwrap();
        assert_eq!(
            parsed,
            ParsedCommand::Settings(vec![(Attribute::LayerOn, 1), (Attribute::LayerOn, 0)])
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed = parse("hpcursor:bogus=1:color=0xFF0000").unwrap();
        assert_eq!(parsed, ParsedCommand::Settings(vec![(Attribute::CursorColor, 0xFF0000)]));
    }

    #[test]
    fn test_signed_temperature_values() {
        let parsed = parse("temp:c=-20:reset").unwrap();
        assert_eq!(
            parsed,
            ParsedCommand::Settings(vec![
                (Attribute::TemperatureCalibration, -20i32 as u32),
                (Attribute::TemperatureFactoryReset, 1),
            ])
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(""), Err(CommandError::Empty));
        assert_eq!(parse("video:on"), Err(CommandError::UnknownGroup("video".to_string())));
        assert_eq!(parse("menu:location"), Err(CommandError::MissingValue("location".to_string())));
        assert_eq!(
            parse("menu:t=high"),
            Err(CommandError::InvalidValue {
                key: "transparency".to_string(),
                text: "high".to_string()
            })
        );
        assert!(parse("icon:n=300:on").is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse("help").unwrap(), ParsedCommand::Help(String::new()));
        assert_eq!(parse("help:icon").unwrap(), ParsedCommand::Help("icon".to_string()));
    }
}
