//! Help text for the command language.

use std::fmt::Write;

use crate::error::{CommandError, CommandResult};
use crate::table::{Group, GROUPS};

/// Render help for `topic`.
///
/// An empty topic describes every group, `cmd` lists only the group names,
/// and a group name describes that group.
pub fn render(topic: &str) -> CommandResult<String> {
    let topic = topic.trim();
    let mut out = String::from("Command specified to plug417 sensor\n\n");
    match topic {
        "" => GROUPS.iter().for_each(|g| describe(&mut out, g, true)),
        "cmd" => GROUPS.iter().for_each(|g| describe(&mut out, g, false)),
        name => {
            let group = Group::find(name).ok_or_else(|| CommandError::UnknownGroup(name.to_string()))?;
            describe(&mut out, group, true);
        }
    }
    Ok(out)
}

fn describe(out: &mut String, group: &Group, with_keys: bool) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}: {}", group.title, group.name);
    if !with_keys {
        return;
    }
    out.push_str("Sub commands:\n");
    for key in group.keys {
        let _ = write!(out, "\t{}", key.name);
        if let Some(alias) = key.alias {
            let _ = write!(out, ", {}", alias);
        }
        if key.action.takes_value() {
            out.push_str("=<value>");
        }
        out.push('\n');
        let mut lines = key.help.iter();
        if let Some(summary) = lines.next() {
            let _ = writeln!(out, "\t {}", summary);
        }
        for line in lines {
            let _ = writeln!(out, "\t\t{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_help() {
        let text = render("menu").unwrap();
        assert!(text.starts_with("Command specified to plug417 sensor\n\nMenu bar: menu\nSub commands:\n"));
        assert!(text.contains("\tlocation, y=<value>\n\t Menu bar location setting\n\t\t0~height-16\n"));
        assert!(text.contains("\ton\n\t Menu bar on\n"));
        assert!(!text.contains("Layer"));
    }

    #[test]
    fn test_group_list() {
        let text = render("cmd").unwrap();
        assert!(text.contains("Small icon: icon\n"));
        assert!(text.contains("Temperature measurement: temp\n"));
        assert!(!text.contains("Sub commands"));
    }

    #[test]
    fn test_full_help_covers_all_groups() {
        let text = render("").unwrap();
        for group in GROUPS.iter() {
            assert!(text.contains(&format!("{}: {}\n", group.title, group.name)));
        }
    }

    #[test]
    fn test_unknown_topic() {
        assert_eq!(render("nope"), Err(CommandError::UnknownGroup("nope".to_string())));
    }
}
