//! Common types used in the protocol.

use serde::Serialize;

use crate::constants::*;

/// A 24-bit color carried as three big-endian bytes `R, G, B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Decode the 3-byte wire form.
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Rgb::new(bytes[0], bytes[1], bytes[2])
    }

    /// Encode to the 3-byte wire form.
    pub const fn to_be_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build from `0xRRGGBB`; bits above 24 are ignored.
    pub const fn from_u32(value: u32) -> Self {
        Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Pack as `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Generates a byte-coded enum with an `Unknown` fallback and a text label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:expr => $label:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not known to this driver.
            Unknown(u8),
        }

        impl $name {
            /// Human readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown(_) => "Unknown",
                }
            }
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                match code {
                    $(c if c == $code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $code,)+
                    $name::Unknown(code) => code,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labeled_enum! {
    /// Module variant reported in the status page.
    ModuleType {
        /// Imaging only.
        Observation = OBSERVATION_TYPE => "Observation type",
        /// Radiometric, reports temperatures.
        Thermography = THERMOGRAPHY_TYPE => "Thermography type",
    }
}

labeled_enum! {
    /// Sensor output resolution reported in the status page.
    VideoResolution {
        R400x300 = VIDEO_400_300 => "400x300",
        R384x288 = VIDEO_384_288 => "384x288",
        R360x288 = VIDEO_360_288 => "360x288",
        R320x240 = VIDEO_320_240 => "320x240",
        R360x240 = VIDEO_360_240 => "360x240",
        R160x120 = VIDEO_160_120 => "160x120",
    }
}

labeled_enum! {
    /// Analog video standard and raster.
    AnalogVideoSystem {
        Pal384x288 = ANALOG_P_SYSTEM_384_288 => "384x288",
        Ntsc320x240 = ANALOG_N_SYSTEM_320_240 => "320x240",
        Pal360x288 = ANALOG_P_SYSTEM_360_288 => "360x288",
        Ntsc360x240 = ANALOG_N_SYSTEM_360_240 => "360x240",
    }
}

labeled_enum! {
    /// Output frame rate (analog and digital pages share the coding).
    FrameRate {
        Full = FRAME_RATE_50_60_HZ => "50/60 Hz",
        Half = FRAME_RATE_25_30_HZ => "25/30 Hz",
        Low = FRAME_RATE_9_HZ => "9 Hz",
    }
}

labeled_enum! {
    /// Digital parallel port type.
    DigitalPort {
        Off = DIGITAL_PORT_OFF => "OFF",
        Bt656 = DIGITAL_PORT_BT_656 => "BT.656",
        Cmos = DIGITAL_PORT_CMOS => "CMOS",
    }
}

labeled_enum! {
    /// Content carried on the CMOS port.
    CmosContent {
        Yuv422 = COMMAND_CMOS_CONTENT_YUV422 as u8 => "YUV422",
        Yuv422ParamLine = COMMAND_CMOS_CONTENT_YUV422_PARM_LINE as u8 => "YUV422 parameter line",
        Yuv16 = COMMAND_CMOS_CONTENT_YUV16 as u8 => "YUV16",
        Yuv16ParamLine = COMMAND_CMOS_CONTENT_YUV16_PARM_LINE as u8 => "YUV16 parameter line",
        Y16Yuv422 = COMMAND_CMOS_CONTENT_Y16_YUV422 as u8 => "Y16 YUV422",
        Y16ParamLineYuv422 = COMMAND_CMOS_CONTENT_Y16_PARM_LINE_YUV422 as u8 => "Y16 parameter line YUV422",
    }
}

labeled_enum! {
    /// CMOS port bus layout.
    CmosInterface {
        Cmos16 = COMMAND_CMOS_INTERFACE_CMOS16 as u8 => "CMOS16",
        Cmos8Msb = COMMAND_CMOS_INTERFACE_CMOS8_MSB as u8 => "CMOS8 MSB",
        Cmos8Lsb = COMMAND_CMOS_INTERFACE_CMOS8_LSB as u8 => "CMOS8 LSB",
    }
}

labeled_enum! {
    /// Pseudo color palette.
    Palette {
        WhiteHot = COMMAND_COLOR_WHITE_HOT as u8 => "White hot",
        Fulgurite = COMMAND_COLOR_FULGURITE as u8 => "Fulgurite",
        IronRed = COMMAND_COLOR_IRON_RED as u8 => "Iron red",
        HotIron = COMMAND_COLOR_HOT_IRON as u8 => "Hot iron",
        Medical = COMMAND_COLOR_MEDICAL as u8 => "Medical",
        Arctic = COMMAND_COLOR_ARCTIC as u8 => "Arctic",
        Rainbow1 = COMMAND_COLOR_RAINBOW_1 as u8 => "Rainbow 1",
        Rainbow2 = COMMAND_COLOR_RAINBOW_2 as u8 => "Rainbow 2",
        Tint = COMMAND_COLOR_TINT as u8 => "Tint",
        BlackHot = COMMAND_COLOR_BLACK_HOT as u8 => "Black hot",
    }
}

labeled_enum! {
    /// Image mirroring.
    Mirror {
        Off = COMMAND_MIRROR_NA as u8 => "None",
        X = COMMAND_MIRROR_X as u8 => "X",
        Y = COMMAND_MIRROR_Y as u8 => "Y",
        Xy = COMMAND_MIRROR_XY as u8 => "XY",
    }
}

labeled_enum! {
    /// Temperature display unit.
    TemperatureUnit {
        Celsius = COMMAND_TEMPERATURE_CELSIUS as u8 => "degree Celsius",
        Fahrenheit = COMMAND_TEMPERATURE_FAHRENHEIT as u8 => "degree Fahrenheit",
        Kelvin = COMMAND_TEMPERATURE_KELVIN as u8 => "degree Kelvin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_packing() {
        let color = Rgb::from_u32(0x12_34_56);
        assert_eq!(color, Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(color.to_be_bytes(), [0x12, 0x34, 0x56]);
        assert_eq!(Rgb::from_be_bytes([0x12, 0x34, 0x56]).to_u32(), 0x12_34_56);
        assert_eq!(Rgb::from_u32(0xFF_00_00_01), Rgb::new(0, 0, 1));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ModuleType::from(1).to_string(), "Thermography type");
        assert_eq!(ModuleType::from(0).label(), "Observation type");
        assert_eq!(ModuleType::from(7), ModuleType::Unknown(7));
        assert_eq!(VideoResolution::from(1).label(), "384x288");
        assert_eq!(u8::from(VideoResolution::R160x120), 5);
        assert_eq!(Palette::from(9), Palette::BlackHot);
        assert_eq!(u8::from(Palette::Unknown(42)), 42);
    }
}
