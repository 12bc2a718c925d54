//! Attribute addressing.
//!
//! Every settable attribute lives at a fixed (functional, page, option)
//! triple. Values are checked against the attribute's declared domain before
//! a command is built; attributes without one are passed through and left to
//! the device to validate.

use crate::commands::Command;
use crate::constants::*;
use crate::error::{ProtocolError, Result};

/// Location of an attribute on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    /// Functional class.
    pub functional: u8,
    /// Page within the functional class.
    pub page: u8,
    /// Option within the page.
    pub option: u8,
}

impl Address {
    const fn new(functional: u8, page: u8, option: u8) -> Self {
        Address {
            functional,
            page,
            option,
        }
    }
}

/// A settable device attribute.
///
/// Small icon attributes carry the icon index (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    // Setup
    AutomaticCompensationTime,
    ImageFreezing,
    TestScreen,
    SaveSettings,
    RestoreFactoryDefault,
    RisingTemperatureCalibration,
    ShutterControl,

    // Analog video
    AnalogVideo,
    VideoSystem,
    FrameRate,
    PseudoColor,
    MirrorImage,
    Ezoom,
    ZoomX,
    ZoomY,
    HotspotTrack,

    // Digital video
    ExternalSync,
    DigitalPort,
    CmosContent,
    CmosInterface,
    DigitalFrameRate,
    Mipi,
    SceneCompensation,
    ShutterCompensation,

    // Algorithm
    Brightness,
    Contrast,

    // Small icon
    SmallIconOn(u8),
    SmallIconWidth(u8),
    SmallIconX(u8),
    SmallIconY(u8),
    SmallIconTransparency,

    // Menu bar
    MenuBarOn,
    MenuBarLocation,
    MenuBarTransparency,

    // Layer
    LayerOn,
    LayerTransparency,

    // Half pixel cursor
    CursorOn,
    CursorX,
    CursorY,
    /// `0xRRGGBB`.
    CursorColor,

    // Area analysis
    AreaMode,
    AreaX,
    AreaY,
    AreaWidth,
    AreaHeight,
    AreaColorR,
    AreaColorG,
    AreaColorB,
    AreaAlarm,
    /// Signed, two's complement.
    AreaAlarmThreshold,

    // Hotspot tracking
    HotspotCursorOn,
    /// Signed, two's complement.
    HotspotUpperLimit,
    /// Signed, two's complement.
    HotspotLowerLimit,
    HotspotColorR,
    HotspotColorG,
    HotspotColorB,

    // Temperature measurement
    TemperatureDistance,
    TemperatureEmissivity,
    TemperatureShow,
    /// Signed, two's complement.
    TemperatureCalibration,
    TemperatureFactoryReset,
    /// Signed, two's complement.
    TemperatureReflected,
    TemperatureSaveSettings,
    TemperatureHumidity,
    TemperatureRange,
}

/// Option code of an indexed small icon field.
fn small_icon_option(base: u8, index: u8) -> Result<u8> {
    if index >= SMALL_ICON_COUNT {
        return Err(ProtocolError::InvalidArgument(format!(
            "small icon index {} out of range 0..{}",
            index, SMALL_ICON_COUNT
        )));
    }
    Ok(base + SMALL_ICON_OPTION_STRIDE * index)
}

impl Attribute {
    /// Resolve the (functional, page, option) triple.
    pub fn address(&self) -> Result<Address> {
        use Attribute::*;

        let setup = |option| Address::new(FUNCTIONAL_SETUP, PAGE_SETUP, option);
        let analog = |option| Address::new(FUNCTIONAL_VIDEO, PAGE_ANALOG_VIDEO, option);
        let digital = |option| Address::new(FUNCTIONAL_VIDEO, PAGE_DIGITAL_VIDEO, option);
        let algorithm = |option| Address::new(FUNCTIONAL_VIDEO, PAGE_ALGORITHM, option);
        let icon = |option| Address::new(FUNCTIONAL_APPLICATION, PAGE_SMALL_ICON, option);
        let menu = |option| Address::new(FUNCTIONAL_APPLICATION, PAGE_MENU_BAR, option);
        let layer = |option| Address::new(FUNCTIONAL_APPLICATION, PAGE_LAYER, option);
        let cursor = |option| Address::new(FUNCTIONAL_APPLICATION, PAGE_HALF_PIXEL_CURSOR, option);
        let area = |option| Address::new(FUNCTIONAL_APPLICATION, PAGE_AREA_ANALYSIS, option);
        let hotspot = |option| Address::new(FUNCTIONAL_APPLICATION, PAGE_HOTSPOT_TRACKING, option);
        let temperature =
            |option| Address::new(FUNCTIONAL_TEMPERATURE_MEASUREMENT, PAGE_TEMPERATURE_MEASUREMENT, option);

        let address = match *self {
            AutomaticCompensationTime => setup(OPTION_AUTOMATIC_COMPENSATION_TIME),
            ImageFreezing => setup(OPTION_IMAGE_FREEZING),
            TestScreen => setup(OPTION_TEST_SCREEN_SWITCHING),
            SaveSettings => setup(OPTION_SAVE_SETTINGS),
            RestoreFactoryDefault => setup(OPTION_RESTORE_TO_FACTORY_DEFAULT),
            RisingTemperatureCalibration => setup(OPTION_RISING_TEMPERATURE_CALIBRATION),
            ShutterControl => setup(OPTION_SHUTTER_CONTROL),

            AnalogVideo => analog(OPTION_ANALOG_VIDEO_SWITCH),
            VideoSystem => analog(OPTION_VIDEO_SYSTEM_SWITCHING),
            FrameRate => analog(OPTION_FRAME_RATE_SETTING),
            PseudoColor => analog(OPTION_PSEUDO_COLOR),
            MirrorImage => analog(OPTION_MIRROR_IMAGE),
            Ezoom => analog(OPTION_EZOOM),
            ZoomX => analog(OPTION_COORDINATE_X_ZOOMED_AREA),
            ZoomY => analog(OPTION_COORDINATE_Y_ZOOMED_AREA),
            HotspotTrack => analog(OPTION_HOTSPOT_TRACK_SWITCH),

            ExternalSync => digital(OPTION_EXTERNAL_SYNCHRONIZATION_SWITCH),
            DigitalPort => digital(OPTION_DIGITAL_PORT_PARALLEL_TYPE),
            CmosContent => digital(OPTION_CMOS_CONTENT_SELECTION),
            CmosInterface => digital(OPTION_CMOS_INTERFACE_TYPE),
            DigitalFrameRate => digital(OPTION_DIGITAL_FRAME_RATE_SETTING),
            Mipi => digital(OPTION_MIPI_SWITCH),
            SceneCompensation => digital(OPTION_SCENE_COMPENSATION),
            ShutterCompensation => digital(OPTION_SHUTTER_COMPENSATION),

            Brightness => algorithm(OPTION_BRIGHTNESS),
            Contrast => algorithm(OPTION_CONTRAST),

            SmallIconOn(index) => icon(small_icon_option(OPTION_SMALL_ICON_ON, index)?),
            SmallIconWidth(index) => icon(small_icon_option(OPTION_SMALL_ICON_WIDTH, index)?),
            SmallIconX(index) => icon(small_icon_option(OPTION_SMALL_ICON_X, index)?),
            SmallIconY(index) => icon(small_icon_option(OPTION_SMALL_ICON_Y, index)?),
            SmallIconTransparency => icon(OPTION_SMALL_ICON_TRANSPARENCY),

            MenuBarOn => menu(OPTION_MENU_BAR_ON),
            MenuBarLocation => menu(OPTION_MENU_BAR_LOCATION),
            MenuBarTransparency => menu(OPTION_MENU_BAR_TRANSPARENCY),

            LayerOn => layer(OPTION_LAYER_ON),
            LayerTransparency => layer(OPTION_LAYER_TRANSPARENCY),

            CursorOn => cursor(OPTION_HALF_PIXEL_CURSOR_ON),
            CursorX => cursor(OPTION_HALF_PIXEL_CURSOR_X),
            CursorY => cursor(OPTION_HALF_PIXEL_CURSOR_Y),
            CursorColor => cursor(OPTION_HALF_PIXEL_CURSOR_COLOR),

            AreaMode => area(OPTION_AREA_MODE),
            AreaX => area(OPTION_AREA_X),
            AreaY => area(OPTION_AREA_Y),
            AreaWidth => area(OPTION_AREA_WIDTH),
            AreaHeight => area(OPTION_AREA_HEIGHT),
            AreaColorR => area(OPTION_AREA_COLOR_R),
            AreaColorG => area(OPTION_AREA_COLOR_G),
            AreaColorB => area(OPTION_AREA_COLOR_B),
            AreaAlarm => area(OPTION_AREA_HIGH_TEMPERATURE_ALARM),
            AreaAlarmThreshold => area(OPTION_AREA_HIGH_TEMPERATURE_ALARM_THRESHOLD),

            HotspotCursorOn => hotspot(OPTION_HOTSPOT_CURSOR_ON),
            HotspotUpperLimit => hotspot(OPTION_HOTSPOT_UPPER_LIMIT),
            HotspotLowerLimit => hotspot(OPTION_HOTSPOT_LOWER_LIMIT),
            HotspotColorR => hotspot(OPTION_HOTSPOT_COLOR_R),
            HotspotColorG => hotspot(OPTION_HOTSPOT_COLOR_G),
            HotspotColorB => hotspot(OPTION_HOTSPOT_COLOR_B),

            TemperatureDistance => temperature(OPTION_TEMPERATURE_DISTANCE),
            TemperatureEmissivity => temperature(OPTION_TEMPERATURE_EMISSIVITY),
            TemperatureShow => temperature(OPTION_TEMPERATURE_SHOW),
            TemperatureCalibration => temperature(OPTION_TEMPERATURE_CALIBRATION),
            TemperatureFactoryReset => temperature(OPTION_TEMPERATURE_FACTORY_RESET),
            TemperatureReflected => temperature(OPTION_TEMPERATURE_REFLECTED),
            TemperatureSaveSettings => temperature(OPTION_TEMPERATURE_SAVE_SETTINGS),
            TemperatureHumidity => temperature(OPTION_TEMPERATURE_HUMIDITY),
            TemperatureRange => temperature(OPTION_TEMPERATURE_RANGE),
        };
        Ok(address)
    }

    /// Inclusive value range, for attributes that declare one.
    pub fn domain(&self) -> Option<(u32, u32)> {
        use Attribute::*;

        match self {
            TestScreen => Some((0, COMMAND_TEST_SCREEN_MAX)),
            PseudoColor => Some((0, COMMAND_COLOR_MAX)),
            MirrorImage => Some((0, COMMAND_MIRROR_MAX)),
            CmosContent => Some((0, COMMAND_CMOS_CONTENT_MAX)),
            CmosInterface => Some((0, COMMAND_CMOS_INTERFACE_MAX)),
            Brightness => Some((0, COMMAND_BRIGHTNESS_MAX)),
            Contrast => Some((0, COMMAND_CONTRAST_MAX)),
            TemperatureShow => Some((0, COMMAND_TEMPERATURE_SHOW_MAX)),
            TemperatureRange => Some((0, COMMAND_TEMPERATURE_RANGE_MAX)),
            _ => None,
        }
    }

    /// Reject a value outside the declared domain.
    pub fn check(&self, value: u32) -> Result<()> {
        match self.domain() {
            Some((min, max)) if value < min || value > max => Err(ProtocolError::OutOfRange {
                attribute: self.name(),
                value,
                min,
                max,
            }),
            _ => Ok(()),
        }
    }

    /// Validate `value` and build the set command for it.
    pub fn command(&self, value: u32) -> Result<Command> {
        let address = self.address()?;
        self.check(value)?;
        Ok(Command::new(address.functional, address.page, address.option, value))
    }

    /// Stable name for logs and error messages.
    pub fn name(&self) -> &'static str {
        use Attribute::*;

        match self {
            AutomaticCompensationTime => "automatic compensation time",
            ImageFreezing => "image freezing",
            TestScreen => "test screen",
            SaveSettings => "save settings",
            RestoreFactoryDefault => "restore factory default",
            RisingTemperatureCalibration => "rising temperature calibration",
            ShutterControl => "shutter control",
            AnalogVideo => "analog video",
            VideoSystem => "video system",
            FrameRate => "frame rate",
            PseudoColor => "pseudo color",
            MirrorImage => "mirror image",
            Ezoom => "e-zoom",
            ZoomX => "zoom x",
            ZoomY => "zoom y",
            HotspotTrack => "hotspot track",
            ExternalSync => "external sync",
            DigitalPort => "digital port",
            CmosContent => "cmos content",
            CmosInterface => "cmos interface",
            DigitalFrameRate => "digital frame rate",
            Mipi => "mipi",
            SceneCompensation => "scene compensation",
            ShutterCompensation => "shutter compensation",
            Brightness => "brightness",
            Contrast => "contrast",
            SmallIconOn(_) => "small icon on",
            SmallIconWidth(_) => "small icon width",
            SmallIconX(_) => "small icon x",
            SmallIconY(_) => "small icon y",
            SmallIconTransparency => "small icon transparency",
            MenuBarOn => "menu bar on",
            MenuBarLocation => "menu bar location",
            MenuBarTransparency => "menu bar transparency",
            LayerOn => "layer on",
            LayerTransparency => "layer transparency",
            CursorOn => "cursor on",
            CursorX => "cursor x",
            CursorY => "cursor y",
            CursorColor => "cursor color",
            AreaMode => "area mode",
            AreaX => "area x",
            AreaY => "area y",
            AreaWidth => "area width",
            AreaHeight => "area height",
            AreaColorR => "area color r",
            AreaColorG => "area color g",
            AreaColorB => "area color b",
            AreaAlarm => "area alarm",
            AreaAlarmThreshold => "area alarm threshold",
            HotspotCursorOn => "hotspot cursor on",
            HotspotUpperLimit => "hotspot upper limit",
            HotspotLowerLimit => "hotspot lower limit",
            HotspotColorR => "hotspot color r",
            HotspotColorG => "hotspot color g",
            HotspotColorB => "hotspot color b",
            TemperatureDistance => "temperature distance",
            TemperatureEmissivity => "temperature emissivity",
            TemperatureShow => "temperature show",
            TemperatureCalibration => "temperature calibration",
            TemperatureFactoryReset => "temperature factory reset",
            TemperatureReflected => "temperature reflected",
            TemperatureSaveSettings => "temperature save settings",
            TemperatureHumidity => "temperature humidity",
            TemperatureRange => "temperature range",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::SmallIconOn(i)
            | Attribute::SmallIconWidth(i)
            | Attribute::SmallIconX(i)
            | Attribute::SmallIconY(i) => write!(f, "{} [{}]", self.name(), i),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_address() {
        let address = Attribute::PseudoColor.address().unwrap();
        assert_eq!(address, Address::new(FUNCTIONAL_VIDEO, PAGE_ANALOG_VIDEO, OPTION_PSEUDO_COLOR));
    }

    #[test]
    fn test_small_icon_options() {
        let option = |attr: Attribute| attr.address().unwrap().option;
        assert_eq!(option(Attribute::SmallIconOn(0)), 1);
        assert_eq!(option(Attribute::SmallIconWidth(0)), 2);
        assert_eq!(option(Attribute::SmallIconX(0)), 3);
        assert_eq!(option(Attribute::SmallIconY(0)), 4);
        assert_eq!(option(Attribute::SmallIconOn(1)), 5);
        assert_eq!(option(Attribute::SmallIconWidth(1)), 6);
        assert_eq!(option(Attribute::SmallIconX(1)), 7);
        assert_eq!(option(Attribute::SmallIconY(1)), 8);
        assert_eq!(option(Attribute::SmallIconTransparency), 9);
    }

    #[test]
    fn test_small_icon_bad_index() {
        assert!(matches!(
            Attribute::SmallIconX(2).address(),
            Err(ProtocolError::InvalidArgument(_))
        ));
        assert!(Attribute::SmallIconY(2).command(10).is_err());
    }

    #[test]
    fn test_domains() {
        assert!(Attribute::PseudoColor.check(9).is_ok());
        assert_eq!(
            Attribute::PseudoColor.check(10),
            Err(ProtocolError::OutOfRange {
                attribute: "pseudo color",
                value: 10,
                min: 0,
                max: 9
            })
        );
        assert!(Attribute::MirrorImage.check(4).is_err());
        assert!(Attribute::TestScreen.check(3).is_ok());
        assert!(Attribute::CmosContent.check(6).is_err());
        assert!(Attribute::CmosInterface.check(3).is_err());
        assert!(Attribute::Brightness.check(100).is_ok());
        assert!(Attribute::Contrast.check(101).is_err());
    }

    #[test]
    fn test_unbounded_passthrough() {
        assert!(Attribute::DigitalPort.check(0xFFFF_FFFF).is_ok());
        assert!(Attribute::MenuBarLocation.check(1234).is_ok());
    }

    #[test]
    fn test_signed_value_command() {
        let cmd = Attribute::TemperatureCalibration.command(-5i32 as u32).unwrap();
        assert_eq!(&cmd.encode()[3..], &[0xFF, 0xFF, 0xFF, 0xFB]);
    }

    #[test]
    fn test_display_indexed() {
        assert_eq!(Attribute::SmallIconWidth(1).to_string(), "small icon width [1]");
        assert_eq!(Attribute::Brightness.to_string(), "brightness");
    }
}
