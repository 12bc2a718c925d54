//! Command groups and their keys.

use plug417_protocol::Attribute;

/// What a key does when it appears in a command.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Set the attribute to the given value.
    Set(Attribute),
    /// Set the attribute to a fixed value; the key takes no value.
    Switch(Attribute, u32),
    /// Set an indexed small icon attribute to the given value.
    Icon(fn(u8) -> Attribute),
    /// Set an indexed small icon attribute to a fixed value.
    IconSwitch(fn(u8) -> Attribute, u32),
    /// Select the small icon the indexed keys apply to.
    IconIndex,
}

impl Action {
    /// Whether the key expects `=value`.
    pub fn takes_value(&self) -> bool {
        matches!(self, Action::Set(_) | Action::Icon(_) | Action::IconIndex)
    }
}

/// One key of a command group.
#[derive(Debug, Clone, Copy)]
pub struct Key {
    /// Canonical name.
    pub name: &'static str,
    /// Short alias.
    pub alias: Option<&'static str>,
    /// Effect.
    pub action: Action,
    /// Help text, one line per accepted value.
    pub help: &'static [&'static str],
}

impl Key {
    /// Whether `token` names this key.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.alias == Some(token)
    }
}

/// A named set of keys.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    /// Display name.
    pub title: &'static str,
    /// Name used on the command line.
    pub name: &'static str,
    /// Keys, in the order settings are applied.
    pub keys: &'static [Key],
}

impl Group {
    /// Look a group up by its command-line name.
    pub fn find(name: &str) -> Option<&'static Group> {
        GROUPS.iter().find(|g| g.name == name)
    }
}

const fn key(name: &'static str, alias: Option<&'static str>, action: Action, help: &'static [&'static str]) -> Key {
    Key {
        name,
        alias,
        action,
        help,
    }
}

const DIGITAL_VIDEO: &[Key] = &[
    key(
        "extsync",
        Some("s"),
        Action::Set(Attribute::ExternalSync),
        &["External synchronization switch", "Off (0)", "Slave mode (1)"],
    ),
    key(
        "port",
        Some("p"),
        Action::Set(Attribute::DigitalPort),
        &["Digital port parallel type", "Off (0)", "BT.656 (1)", "CMOS (2)"],
    ),
    key(
        "cmos",
        Some("c"),
        Action::Set(Attribute::CmosContent),
        &[
            "CMOS content selection",
            "YUV422 (0)",
            "YUV422 parameter line (1)",
            "YUV16 (2)",
            "YUV16 parameter line (3)",
            "Y16 YUV422 (4)",
            "Y16 parameter line YUV422 (5)",
        ],
    ),
    key(
        "interface",
        Some("i"),
        Action::Set(Attribute::CmosInterface),
        &["CMOS interface type", "CMOS16 (0)", "CMOS8 MSB first (1)", "CMOS8 LSB first (2)"],
    ),
    key(
        "rate",
        Some("r"),
        Action::Set(Attribute::DigitalFrameRate),
        &["Frame rate setting", "P-system 50Hz, N-system 60Hz (0)", "P-system 25Hz, N-system 30Hz (1)", "9Hz (2)"],
    ),
    key("mipi", Some("m"), Action::Set(Attribute::Mipi), &["MIPI switch", "Off (0)", "On (1)"]),
    key(
        "scene",
        Some("x"),
        Action::Set(Attribute::SceneCompensation),
        &["Scene compensation", "Off (0)", "On (1)"],
    ),
    key(
        "shutter",
        Some("z"),
        Action::Set(Attribute::ShutterCompensation),
        &["Shutter compensation", "Off (0)", "On (1)"],
    ),
];

const SMALL_ICON: &[Key] = &[
    key("num", Some("n"), Action::IconIndex, &["Small icon number", "0 or 1"]),
    key("on", None, Action::IconSwitch(Attribute::SmallIconOn, 1), &["Small icon on"]),
    key("off", None, Action::IconSwitch(Attribute::SmallIconOn, 0), &["Small icon off"]),
    key("x", None, Action::Icon(Attribute::SmallIconX), &["Small icon coordinate X", "0~width-width"]),
    key("y", None, Action::Icon(Attribute::SmallIconY), &["Small icon coordinate Y", "0~height-width"]),
    key("width", Some("w"), Action::Icon(Attribute::SmallIconWidth), &["Small icon width"]),
    key(
        "transparency",
        Some("t"),
        Action::Set(Attribute::SmallIconTransparency),
        &["Small icon transparency setting", "0~4"],
    ),
];

const MENU_BAR: &[Key] = &[
    key("on", None, Action::Switch(Attribute::MenuBarOn, 1), &["Menu bar on"]),
    key("off", None, Action::Switch(Attribute::MenuBarOn, 0), &["Menu bar off"]),
    key(
        "location",
        Some("y"),
        Action::Set(Attribute::MenuBarLocation),
        &["Menu bar location setting", "0~height-16"],
    ),
    key(
        "transparency",
        Some("t"),
        Action::Set(Attribute::MenuBarTransparency),
        &["Menu bar transparency setting", "0~4"],
    ),
];

const LAYER: &[Key] = &[
    key("on", None, Action::Switch(Attribute::LayerOn, 1), &["Layer on"]),
    key("off", None, Action::Switch(Attribute::LayerOn, 0), &["Layer off"]),
    key(
        "transparency",
        Some("t"),
        Action::Set(Attribute::LayerTransparency),
        &["Layer transparency setting", "0~8"],
    ),
];

const HALF_PIXEL_CURSOR: &[Key] = &[
    key("on", None, Action::Switch(Attribute::CursorOn, 1), &["Half pixel cursor on"]),
    key("off", None, Action::Switch(Attribute::CursorOn, 0), &["Half pixel cursor off"]),
    key("x", None, Action::Set(Attribute::CursorX), &["Half pixel cursor coordinate X", "0~width"]),
    key("y", None, Action::Set(Attribute::CursorY), &["Half pixel cursor coordinate Y", "0~height"]),
    key(
        "color",
        Some("c"),
        Action::Set(Attribute::CursorColor),
        &["Half pixel color setting", "RGB value (0xRRGGBB)"],
    ),
];

const AREA_ANALYSIS: &[Key] = &[
    key(
        "mode",
        Some("m"),
        Action::Set(Attribute::AreaMode),
        &[
            "Analysis mode",
            "Disable (0)",
            "Full screen analysis (1)",
            "Area one (2)",
            "Area two (3)",
            "Area three (4)",
        ],
    ),
    key("x", None, Action::Set(Attribute::AreaX), &["Area top left corner coordinate X", "0~383"]),
    key("y", None, Action::Set(Attribute::AreaY), &["Area top left corner coordinate Y", "0~287"]),
    key("width", Some("w"), Action::Set(Attribute::AreaWidth), &["Area width W", "1~255"]),
    key("height", Some("h"), Action::Set(Attribute::AreaHeight), &["Area height H", "1~255"]),
    key("r", None, Action::Set(Attribute::AreaColorR), &["The color R of rectangle", "0~255"]),
    key("g", None, Action::Set(Attribute::AreaColorG), &["The color G of rectangle", "0~255"]),
    key("b", None, Action::Set(Attribute::AreaColorB), &["The color B of rectangle", "0~255"]),
    key(
        "alarm",
        Some("a"),
        Action::Set(Attribute::AreaAlarm),
        &["High temperature alarm switch", "Off (0)", "On (1)"],
    ),
    key(
        "threshold",
        Some("t"),
        Action::Set(Attribute::AreaAlarmThreshold),
        &["High temperature alarm threshold", "Observation 0~65535", "Thermography -500~10000"],
    ),
];

const HOTSPOT_TRACKING: &[Key] = &[
    key("on", None, Action::Switch(Attribute::HotspotCursorOn, 1), &["Cursor switch on"]),
    key("off", None, Action::Switch(Attribute::HotspotCursorOn, 0), &["Cursor switch off"]),
    key(
        "upper",
        Some("u"),
        Action::Set(Attribute::HotspotUpperLimit),
        &["Hotspot tracking upper limit value", "Observation 0~65535", "Thermography -500~10000"],
    ),
    key(
        "lower",
        Some("l"),
        Action::Set(Attribute::HotspotLowerLimit),
        &["Hotspot tracking lower limit value", "Observation 0~65535", "Thermography -500~10000"],
    ),
    key("r", None, Action::Set(Attribute::HotspotColorR), &["The hottest cursor point color R", "0~255"]),
    key("g", None, Action::Set(Attribute::HotspotColorG), &["The hottest cursor point color G", "0~255"]),
    key("b", None, Action::Set(Attribute::HotspotColorB), &["The hottest cursor point color B", "0~255"]),
];

const TEMPERATURE_MEASUREMENT: &[Key] = &[
    key(
        "distance",
        Some("d"),
        Action::Set(Attribute::TemperatureDistance),
        &["Distance setting", "0~100"],
    ),
    key(
        "emissivity",
        Some("e"),
        Action::Set(Attribute::TemperatureEmissivity),
        &["Emissivity", "0~100"],
    ),
    key(
        "show",
        Some("s"),
        Action::Set(Attribute::TemperatureShow),
        &["Temperature unit", "degree Celsius (0)", "degree Fahrenheit (1)", "degree Kelvin (2)"],
    ),
    key(
        "calibration",
        Some("c"),
        Action::Set(Attribute::TemperatureCalibration),
        &["Temperature calibration", "-32768~32767"],
    ),
    key(
        "reset",
        Some("f"),
        Action::Switch(Attribute::TemperatureFactoryReset, 1),
        &["Factory reset"],
    ),
    key(
        "reflected",
        Some("r"),
        Action::Set(Attribute::TemperatureReflected),
        &["Reflected temperature"],
    ),
    key("save", Some("v"), Action::Set(Attribute::TemperatureSaveSettings), &["Save settings"]),
    key("humidity", Some("h"), Action::Set(Attribute::TemperatureHumidity), &["Humidity"]),
    key(
        "range",
        Some("g"),
        Action::Set(Attribute::TemperatureRange),
        &["Temperature measurement range", "-20°C~150°C (0)", "-20°C~800°C (1)"],
    ),
];

/// All command groups.
pub static GROUPS: [Group; 8] = [
    Group {
        title: "Digital video",
        name: "digit",
        keys: DIGITAL_VIDEO,
    },
    Group {
        title: "Small icon",
        name: "icon",
        keys: SMALL_ICON,
    },
    Group {
        title: "Menu bar",
        name: "menu",
        keys: MENU_BAR,
    },
    Group {
        title: "Layer",
        name: "layer",
        keys: LAYER,
    },
    Group {
        title: "Half pixel cursor",
        name: "hpcursor",
        keys: HALF_PIXEL_CURSOR,
    },
    Group {
        title: "Area analysis",
        name: "area",
        keys: AREA_ANALYSIS,
    },
    Group {
        title: "Hotspot tracking",
        name: "hptrack",
        keys: HOTSPOT_TRACKING,
    },
    Group {
        title: "Temperature measurement",
        name: "temp",
        keys: TEMPERATURE_MEASUREMENT,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_group() {
        assert_eq!(Group::find("icon").unwrap().title, "Small icon");
        assert!(Group::find("video").is_none());
    }

    #[test]
    fn test_names_unique_within_group() {
        for group in GROUPS.iter() {
            for (i, a) in group.keys.iter().enumerate() {
                for b in &group.keys[i + 1..] {
                    assert!(!b.matches(a.name), "{}: {} clashes", group.name, a.name);
                    if let Some(alias) = a.alias {
                        assert!(!b.matches(alias), "{}: {} clashes", group.name, alias);
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_attribute_resolves() {
        for group in GROUPS.iter() {
            for key in group.keys {
                let attribute = match key.action {
                    Action::Set(a) | Action::Switch(a, _) => a,
                    Action::Icon(f) | Action::IconSwitch(f, _) => f(1),
                    Action::IconIndex => continue,
                };
                assert!(attribute.address().is_ok(), "{}:{}", group.name, key.name);
            }
        }
    }
}
