//! Page layouts.
//!
//! A query reply carries the echoed functional class and page followed by the
//! page contents. Nothing in the contents says which layout they follow, so
//! the caller names the layout it expects through the [`Page`] type it
//! decodes into. All multi-byte fields are big-endian; colors are 3 bytes.

use bytes::{Buf, BufMut};
use serde::Serialize;

use crate::commands::QueryReply;
use crate::constants::*;
use crate::error::{ProtocolError, Result};
use crate::frame::Frame;
use crate::types::*;

/// Descriptor of a fixed-size page layout.
pub trait Page: Sized {
    /// Functional class the page belongs to.
    const FUNCTIONAL: u8;
    /// Page selector within the functional class.
    const PAGE: u8;
    /// Content size in bytes, excluding the echoed functional/page.
    const SIZE: usize;
    /// Short name used in logs.
    const NAME: &'static str;

    /// Read the fields from exactly [`SIZE`](Self::SIZE) bytes.
    fn read<B: Buf>(buf: &mut B) -> Self;

    /// Write the fields, [`SIZE`](Self::SIZE) bytes.
    fn write<B: BufMut>(&self, buf: &mut B);

    /// Decode page contents. Extra trailing bytes are ignored.
    fn decode(contents: &[u8]) -> Result<Self> {
        if contents.len() < Self::SIZE {
            return Err(ProtocolError::FrameTooShort {
                expected: Self::SIZE,
                actual: contents.len(),
            });
        }
        let mut buf = &contents[..Self::SIZE];
        Ok(Self::read(&mut buf))
    }

    /// Decode a query reply payload, checking the echoed functional/page.
    fn from_reply(payload: &[u8]) -> Result<Self> {
        let reply = QueryReply::parse(payload)?;
        if reply.functional != Self::FUNCTIONAL || reply.page != Self::PAGE {
            return Err(ProtocolError::UnexpectedPage {
                functional: reply.functional,
                page: reply.page,
                expected_functional: Self::FUNCTIONAL,
                expected_page: Self::PAGE,
            });
        }
        Self::decode(reply.contents)
    }

    /// Build the reply frame a device would send for this page.
    fn to_reply(&self) -> Frame {
        let mut payload = [0u8; MAX_PAYLOAD_SIZE];
        {
            let mut buf = &mut payload[..];
            buf.put_u8(Self::FUNCTIONAL);
            buf.put_u8(Self::PAGE);
            self.write(&mut buf);
        }
        Frame::from_valid(&payload[..Self::SIZE + 2])
    }
}

fn get_bool<B: Buf>(buf: &mut B) -> bool {
    buf.get_u8() != 0
}

fn get_array<const N: usize, B: Buf>(buf: &mut B) -> [u8; N] {
    let mut bytes = [0u8; N];
    buf.copy_to_slice(&mut bytes);
    bytes
}

fn get_rgb<B: Buf>(buf: &mut B) -> Rgb {
    Rgb::from_be_bytes(get_array(buf))
}

fn put_rgb<B: BufMut>(buf: &mut B, color: Rgb) {
    buf.put_slice(&color.to_be_bytes());
}

// ============================================================================
// Status
// ============================================================================

/// Device status report.
///
/// The status payload is 18 bytes on the wire including the echoed
/// functional/page, which leaves three reserved bytes at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Module variant.
    pub module_id: ModuleType,
    /// Communication protocol id.
    pub communication_id: u8,
    /// Firmware build year (two digits).
    pub year: u8,
    /// Firmware build month.
    pub month: u8,
    /// Firmware build day.
    pub day: u8,
    /// Focal plane temperature, hundredths of a degree.
    pub focal_spot_temperature: u16,
    /// Video system id.
    pub video_system: u8,
    /// Sensor resolution.
    pub video_resolution: VideoResolution,
    /// Machine identification code.
    pub machine_id: u32,
    /// Reserved.
    pub reserved: [u8; 3],
}

impl Status {
    /// Focal plane temperature in degrees.
    pub fn focal_spot_celsius(&self) -> f64 {
        self.focal_spot_temperature as f64 / 100.0
    }

    /// Firmware build date as `YY:MM:DD`.
    pub fn program_version(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.year, self.month, self.day)
    }
}

impl Page for Status {
    const FUNCTIONAL: u8 = STATUS_QUERY_FUNCTIONAL;
    const PAGE: u8 = PAGE_STATUS;
    const SIZE: usize = STATUS_PAYLOAD_SIZE - 2;
    const NAME: &'static str = "status";

    fn read<B: Buf>(buf: &mut B) -> Self {
        Status {
            module_id: ModuleType::from(buf.get_u8()),
            communication_id: buf.get_u8(),
            year: buf.get_u8(),
            month: buf.get_u8(),
            day: buf.get_u8(),
            focal_spot_temperature: buf.get_u16(),
            video_system: buf.get_u8(),
            video_resolution: VideoResolution::from(buf.get_u8()),
            machine_id: buf.get_u32(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.module_id.into());
        buf.put_u8(self.communication_id);
        buf.put_u8(self.year);
        buf.put_u8(self.month);
        buf.put_u8(self.day);
        buf.put_u16(self.focal_spot_temperature);
        buf.put_u8(self.video_system);
        buf.put_u8(self.video_resolution.into());
        buf.put_u32(self.machine_id);
        buf.put_slice(&self.reserved);
    }
}

// ============================================================================
// Setup
// ============================================================================

/// Setup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupPage {
    /// Automatic shutter compensation interval.
    pub automatic_compensation_time: u8,
    /// Image freezing (0 live, 1 frozen).
    pub image_freezing: u8,
    /// Test screen selection.
    pub test_screen: u8,
    /// Rising temperature calibration.
    pub rising_temperature_calibration: u8,
    /// Shutter control.
    pub shutter_control: u8,
    /// Reserved.
    pub reserved: [u8; 12],
}

impl Page for SetupPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_SETUP;
    const PAGE: u8 = PAGE_SETUP;
    const SIZE: usize = 17;
    const NAME: &'static str = "setup";

    fn read<B: Buf>(buf: &mut B) -> Self {
        SetupPage {
            automatic_compensation_time: buf.get_u8(),
            image_freezing: buf.get_u8(),
            test_screen: buf.get_u8(),
            rising_temperature_calibration: buf.get_u8(),
            shutter_control: buf.get_u8(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.automatic_compensation_time);
        buf.put_u8(self.image_freezing);
        buf.put_u8(self.test_screen);
        buf.put_u8(self.rising_temperature_calibration);
        buf.put_u8(self.shutter_control);
        buf.put_slice(&self.reserved);
    }
}

// ============================================================================
// Video
// ============================================================================

/// Analog video page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalogVideoPage {
    /// Analog output enabled.
    pub on: bool,
    /// Video standard and raster.
    pub video_system: AnalogVideoSystem,
    /// Frame rate.
    pub frame_rate: FrameRate,
    /// Pseudo color palette.
    pub pseudo_color: Palette,
    /// Mirroring.
    pub mirror: Mirror,
    /// Zoomed area X coordinate.
    pub zoom_x: u16,
    /// Zoomed area Y coordinate.
    pub zoom_y: u16,
    /// Hotspot track switch.
    pub hotspot_track: u16,
    /// Reserved.
    pub reserved: [u8; 6],
}

impl Page for AnalogVideoPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_VIDEO;
    const PAGE: u8 = PAGE_ANALOG_VIDEO;
    const SIZE: usize = 17;
    const NAME: &'static str = "analog video";

    fn read<B: Buf>(buf: &mut B) -> Self {
        AnalogVideoPage {
            on: get_bool(buf),
            video_system: AnalogVideoSystem::from(buf.get_u8()),
            frame_rate: FrameRate::from(buf.get_u8()),
            pseudo_color: Palette::from(buf.get_u8()),
            mirror: Mirror::from(buf.get_u8()),
            zoom_x: buf.get_u16(),
            zoom_y: buf.get_u16(),
            hotspot_track: buf.get_u16(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.on as u8);
        buf.put_u8(self.video_system.into());
        buf.put_u8(self.frame_rate.into());
        buf.put_u8(self.pseudo_color.into());
        buf.put_u8(self.mirror.into());
        buf.put_u16(self.zoom_x);
        buf.put_u16(self.zoom_y);
        buf.put_u16(self.hotspot_track);
        buf.put_slice(&self.reserved);
    }
}

/// Digital video page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitalVideoPage {
    /// External synchronization (0 off, 1 slave).
    pub external_sync: bool,
    /// Parallel port type.
    pub port: DigitalPort,
    /// CMOS content.
    pub format: CmosContent,
    /// CMOS interface.
    pub interface: CmosInterface,
    /// Frame rate.
    pub frame_rate: FrameRate,
    /// MIPI output enabled.
    pub mipi: bool,
    /// Reserved.
    pub reserved: [u8; 11],
}

impl Page for DigitalVideoPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_VIDEO;
    const PAGE: u8 = PAGE_DIGITAL_VIDEO;
    const SIZE: usize = 17;
    const NAME: &'static str = "digital video";

    fn read<B: Buf>(buf: &mut B) -> Self {
        DigitalVideoPage {
            external_sync: get_bool(buf),
            port: DigitalPort::from(buf.get_u8()),
            format: CmosContent::from(buf.get_u8()),
            interface: CmosInterface::from(buf.get_u8()),
            frame_rate: FrameRate::from(buf.get_u8()),
            mipi: get_bool(buf),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.external_sync as u8);
        buf.put_u8(self.port.into());
        buf.put_u8(self.format.into());
        buf.put_u8(self.interface.into());
        buf.put_u8(self.frame_rate.into());
        buf.put_u8(self.mipi as u8);
        buf.put_slice(&self.reserved);
    }
}

/// Image algorithm page.
///
/// Options 1 to 9 are firmware specific tuning values; brightness and
/// contrast sit at options 0x0A and 0x0B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmPage {
    /// Values of options 1 to 9.
    pub tuning: [u8; 9],
    /// Brightness, 0 to 100.
    pub brightness: u8,
    /// Contrast, 0 to 100.
    pub contrast: u8,
    /// Reserved.
    pub reserved: [u8; 6],
}

impl Page for AlgorithmPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_VIDEO;
    const PAGE: u8 = PAGE_ALGORITHM;
    const SIZE: usize = 17;
    const NAME: &'static str = "algorithm";

    fn read<B: Buf>(buf: &mut B) -> Self {
        AlgorithmPage {
            tuning: get_array(buf),
            brightness: buf.get_u8(),
            contrast: buf.get_u8(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.tuning);
        buf.put_u8(self.brightness);
        buf.put_u8(self.contrast);
        buf.put_slice(&self.reserved);
    }
}

// ============================================================================
// Application
// ============================================================================

/// One small icon overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SmallIcon {
    /// Icon shown.
    pub on: bool,
    /// Icon width in pixels.
    pub width: u8,
    /// Top left X.
    pub x: u16,
    /// Top left Y.
    pub y: u16,
}

/// Small icon overlay page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SmallIconPage {
    /// Both icons, by index.
    pub icons: [SmallIcon; SMALL_ICON_COUNT as usize],
    /// Shared transparency, 0 to 4.
    pub transparency: u8,
    /// Reserved.
    pub reserved: [u8; 4],
}

impl Page for SmallIconPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_APPLICATION;
    const PAGE: u8 = PAGE_SMALL_ICON;
    const SIZE: usize = 17;
    const NAME: &'static str = "small icon";

    fn read<B: Buf>(buf: &mut B) -> Self {
        let mut icons = [SmallIcon::default(); SMALL_ICON_COUNT as usize];
        for icon in icons.iter_mut() {
            icon.on = get_bool(buf);
            icon.width = buf.get_u8();
            icon.x = buf.get_u16();
            icon.y = buf.get_u16();
        }
        SmallIconPage {
            icons,
            transparency: buf.get_u8(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        for icon in &self.icons {
            buf.put_u8(icon.on as u8);
            buf.put_u8(icon.width);
            buf.put_u16(icon.x);
            buf.put_u16(icon.y);
        }
        buf.put_u8(self.transparency);
        buf.put_slice(&self.reserved);
    }
}

/// Menu bar overlay page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuBarPage {
    /// Menu bar shown.
    pub on: bool,
    /// Vertical location.
    pub location: u16,
    /// Transparency, 0 to 4.
    pub transparency: u8,
    /// Reserved.
    pub reserved: [u8; 13],
}

impl Page for MenuBarPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_APPLICATION;
    const PAGE: u8 = PAGE_MENU_BAR;
    const SIZE: usize = 17;
    const NAME: &'static str = "menu bar";

    fn read<B: Buf>(buf: &mut B) -> Self {
        MenuBarPage {
            on: get_bool(buf),
            location: buf.get_u16(),
            transparency: buf.get_u8(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.on as u8);
        buf.put_u16(self.location);
        buf.put_u8(self.transparency);
        buf.put_slice(&self.reserved);
    }
}

/// Layer overlay page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerPage {
    /// Layer shown.
    pub on: bool,
    /// Transparency, 0 to 8.
    pub transparency: u8,
    /// Reserved.
    pub reserved: [u8; 15],
}

impl Page for LayerPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_APPLICATION;
    const PAGE: u8 = PAGE_LAYER;
    const SIZE: usize = 17;
    const NAME: &'static str = "layer";

    fn read<B: Buf>(buf: &mut B) -> Self {
        LayerPage {
            on: get_bool(buf),
            transparency: buf.get_u8(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.on as u8);
        buf.put_u8(self.transparency);
        buf.put_slice(&self.reserved);
    }
}

/// Half pixel cursor page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HalfPixelCursorPage {
    /// Cursor shown.
    pub on: bool,
    /// Cursor X.
    pub x: u16,
    /// Cursor Y.
    pub y: u16,
    /// Cursor color.
    pub color: Rgb,
    /// Reserved.
    pub reserved: [u8; 9],
}

impl Page for HalfPixelCursorPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_APPLICATION;
    const PAGE: u8 = PAGE_HALF_PIXEL_CURSOR;
    const SIZE: usize = 17;
    const NAME: &'static str = "half pixel cursor";

    fn read<B: Buf>(buf: &mut B) -> Self {
        HalfPixelCursorPage {
            on: get_bool(buf),
            x: buf.get_u16(),
            y: buf.get_u16(),
            color: get_rgb(buf),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.on as u8);
        buf.put_u16(self.x);
        buf.put_u16(self.y);
        put_rgb(buf, self.color);
        buf.put_slice(&self.reserved);
    }
}

/// Area analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaAnalysisPage {
    /// 0 disabled, 1 full screen, 2..=4 area one to three.
    pub mode: u8,
    /// Top left X.
    pub x: u16,
    /// Top left Y.
    pub y: u16,
    /// Width.
    pub width: u8,
    /// Height.
    pub height: u8,
    /// Rectangle color.
    pub color: Rgb,
    /// High temperature alarm enabled.
    pub alarm: bool,
    /// Alarm threshold.
    pub alarm_threshold: i16,
    /// Reserved.
    pub reserved: [u8; 4],
}

impl Page for AreaAnalysisPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_APPLICATION;
    const PAGE: u8 = PAGE_AREA_ANALYSIS;
    const SIZE: usize = 17;
    const NAME: &'static str = "area analysis";

    fn read<B: Buf>(buf: &mut B) -> Self {
        AreaAnalysisPage {
            mode: buf.get_u8(),
            x: buf.get_u16(),
            y: buf.get_u16(),
            width: buf.get_u8(),
            height: buf.get_u8(),
            color: get_rgb(buf),
            alarm: get_bool(buf),
            alarm_threshold: buf.get_i16(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.mode);
        buf.put_u16(self.x);
        buf.put_u16(self.y);
        buf.put_u8(self.width);
        buf.put_u8(self.height);
        put_rgb(buf, self.color);
        buf.put_u8(self.alarm as u8);
        buf.put_i16(self.alarm_threshold);
        buf.put_slice(&self.reserved);
    }
}

/// Hotspot tracking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HotspotTrackingPage {
    /// Hottest point cursor shown.
    pub cursor_on: bool,
    /// Upper tracking limit.
    pub upper_limit: i16,
    /// Lower tracking limit.
    pub lower_limit: i16,
    /// Cursor color.
    pub color: Rgb,
    /// Reserved.
    pub reserved: [u8; 9],
}

impl Page for HotspotTrackingPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_APPLICATION;
    const PAGE: u8 = PAGE_HOTSPOT_TRACKING;
    const SIZE: usize = 17;
    const NAME: &'static str = "hotspot tracking";

    fn read<B: Buf>(buf: &mut B) -> Self {
        HotspotTrackingPage {
            cursor_on: get_bool(buf),
            upper_limit: buf.get_i16(),
            lower_limit: buf.get_i16(),
            color: get_rgb(buf),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.cursor_on as u8);
        buf.put_i16(self.upper_limit);
        buf.put_i16(self.lower_limit);
        put_rgb(buf, self.color);
        buf.put_slice(&self.reserved);
    }
}

// ============================================================================
// Temperature measurement
// ============================================================================

/// Temperature measurement page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureMeasurementPage {
    /// Target distance.
    pub distance: u8,
    /// Emissivity, percent.
    pub emissivity: u8,
    /// Display unit.
    pub unit: TemperatureUnit,
    /// Calibration offset.
    pub calibration: i16,
    /// Reflected temperature.
    pub reflected: i16,
    /// Relative humidity.
    pub humidity: u8,
    /// Measurement range (0 low, 1 high).
    pub range: u8,
    /// Reserved.
    pub reserved: [u8; 8],
}

impl Page for TemperatureMeasurementPage {
    const FUNCTIONAL: u8 = FUNCTIONAL_TEMPERATURE_MEASUREMENT;
    const PAGE: u8 = PAGE_TEMPERATURE_MEASUREMENT;
    const SIZE: usize = 17;
    const NAME: &'static str = "temperature measurement";

    fn read<B: Buf>(buf: &mut B) -> Self {
        TemperatureMeasurementPage {
            distance: buf.get_u8(),
            emissivity: buf.get_u8(),
            unit: TemperatureUnit::from(buf.get_u8()),
            calibration: buf.get_i16(),
            reflected: buf.get_i16(),
            humidity: buf.get_u8(),
            range: buf.get_u8(),
            reserved: get_array(buf),
        }
    }

    fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.distance);
        buf.put_u8(self.emissivity);
        buf.put_u8(self.unit.into());
        buf.put_i16(self.calibration);
        buf.put_i16(self.reflected);
        buf.put_u8(self.humidity);
        buf.put_u8(self.range);
        buf.put_slice(&self.reserved);
    }
}

// ============================================================================
// Dispatch by echo
// ============================================================================

/// Any page, selected by the functional/page a reply echoes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedPage {
    /// Status report.
    Status(Status),
    /// Setup page.
    Setup(SetupPage),
    /// Analog video page.
    AnalogVideo(AnalogVideoPage),
    /// Digital video page.
    DigitalVideo(DigitalVideoPage),
    /// Algorithm page.
    Algorithm(AlgorithmPage),
    /// Small icon page.
    SmallIcon(SmallIconPage),
    /// Menu bar page.
    MenuBar(MenuBarPage),
    /// Layer page.
    Layer(LayerPage),
    /// Half pixel cursor page.
    HalfPixelCursor(HalfPixelCursorPage),
    /// Area analysis page.
    AreaAnalysis(AreaAnalysisPage),
    /// Hotspot tracking page.
    HotspotTracking(HotspotTrackingPage),
    /// Temperature measurement page.
    TemperatureMeasurement(TemperatureMeasurementPage),
    /// A page without a known layout.
    Raw {
        /// Echoed functional class.
        functional: u8,
        /// Echoed page.
        page: u8,
        /// Raw contents.
        contents: Vec<u8>,
    },
}

impl DecodedPage {
    /// Decode a query reply using the layout its echo names.
    pub fn from_reply(payload: &[u8]) -> Result<Self> {
        let reply = QueryReply::parse(payload)?;
        let contents = reply.contents;
        let page = match (reply.functional, reply.page) {
            (Status::FUNCTIONAL, Status::PAGE) => DecodedPage::Status(Status::decode(contents)?),
            (SetupPage::FUNCTIONAL, SetupPage::PAGE) => DecodedPage::Setup(SetupPage::decode(contents)?),
            (AnalogVideoPage::FUNCTIONAL, AnalogVideoPage::PAGE) => {
                DecodedPage::AnalogVideo(AnalogVideoPage::decode(contents)?)
            }
            (DigitalVideoPage::FUNCTIONAL, DigitalVideoPage::PAGE) => {
                DecodedPage::DigitalVideo(DigitalVideoPage::decode(contents)?)
            }
            (AlgorithmPage::FUNCTIONAL, AlgorithmPage::PAGE) => {
                DecodedPage::Algorithm(AlgorithmPage::decode(contents)?)
            }
            (SmallIconPage::FUNCTIONAL, SmallIconPage::PAGE) => {
                DecodedPage::SmallIcon(SmallIconPage::decode(contents)?)
            }
            (MenuBarPage::FUNCTIONAL, MenuBarPage::PAGE) => DecodedPage::MenuBar(MenuBarPage::decode(contents)?),
            (LayerPage::FUNCTIONAL, LayerPage::PAGE) => DecodedPage::Layer(LayerPage::decode(contents)?),
            (HalfPixelCursorPage::FUNCTIONAL, HalfPixelCursorPage::PAGE) => {
                DecodedPage::HalfPixelCursor(HalfPixelCursorPage::decode(contents)?)
            }
            (AreaAnalysisPage::FUNCTIONAL, AreaAnalysisPage::PAGE) => {
                DecodedPage::AreaAnalysis(AreaAnalysisPage::decode(contents)?)
            }
            (HotspotTrackingPage::FUNCTIONAL, HotspotTrackingPage::PAGE) => {
                DecodedPage::HotspotTracking(HotspotTrackingPage::decode(contents)?)
            }
            (TemperatureMeasurementPage::FUNCTIONAL, TemperatureMeasurementPage::PAGE) => {
                DecodedPage::TemperatureMeasurement(TemperatureMeasurementPage::decode(contents)?)
            }
            (functional, page) => DecodedPage::Raw {
                functional,
                page,
                contents: contents.to_vec(),
            },
        };
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_payload() -> [u8; STATUS_PAYLOAD_SIZE] {
        [
            0x00, 0x00, // functional, page
            0x01, // module id
            0x02, // communication id
            24, 3, 15, // year, month, day
            0x09, 0x60, // focal spot temperature
            0x00, // video system
            0x01, // video resolution
            0xDE, 0xAD, 0xBE, 0xEF, // machine id
            0x00, 0x00, 0x00,
        ]
    }

    #[test]
    fn test_status_decode() {
        let status = Status::from_reply(&status_payload()).unwrap();
        assert_eq!(status.module_id, ModuleType::Thermography);
        assert_eq!(status.module_id.label(), "Thermography type");
        assert_eq!(status.video_resolution.label(), "384x288");
        assert_eq!(status.focal_spot_temperature, 2400);
        approx::assert_relative_eq!(status.focal_spot_celsius(), 24.0);
        assert_eq!(status.machine_id, 0xDEAD_BEEF);
        assert_eq!(status.program_version(), "24:03:15");
    }

    #[test]
    fn test_status_accepts_longer_payload() {
        let mut payload = status_payload().to_vec();
        payload.push(0x00);
        assert!(Status::from_reply(&payload).is_ok());
    }

    #[test]
    fn test_status_too_short() {
        let payload = status_payload();
        assert!(matches!(
            Status::from_reply(&payload[..10]),
            Err(ProtocolError::FrameTooShort { expected: 16, actual: 8 })
        ));
    }

    #[test]
    fn test_analog_video_decode() {
        let payload = [
            0x02, 0x00, // functional, page
            0x01, 0x00, 0x01, 0x02, 0x03, // on, system, rate, color, mirror
            0x01, 0x20, 0x00, 0x90, 0x00, 0x01, // zoom x, zoom y, hotspot
            0, 0, 0, 0, 0, 0,
        ];
        let page = AnalogVideoPage::from_reply(&payload).unwrap();
        assert!(page.on);
        assert_eq!(page.video_system, AnalogVideoSystem::Pal384x288);
        assert_eq!(page.frame_rate, FrameRate::Half);
        assert_eq!(page.pseudo_color, Palette::IronRed);
        assert_eq!(page.mirror, Mirror::Xy);
        assert_eq!(page.zoom_x, 0x0120);
        assert_eq!(page.zoom_y, 0x0090);
        assert_eq!(page.hotspot_track, 1);
    }

    #[test]
    fn test_unexpected_page() {
        let payload = [0x02, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(
            AnalogVideoPage::from_reply(&payload),
            Err(ProtocolError::UnexpectedPage { functional: 2, page: 1, .. })
        ));
    }

    #[test]
    fn test_color_fields_are_big_endian() {
        let page = HalfPixelCursorPage {
            on: true,
            x: 100,
            y: 200,
            color: Rgb::from_u32(0xFF8000),
            reserved: [0; 9],
        };
        let frame = page.to_reply();
        assert_eq!(frame.len(), HalfPixelCursorPage::SIZE + 2);
        assert_eq!(&frame.payload()[7..10], &[0xFF, 0x80, 0x00]);
        assert_eq!(HalfPixelCursorPage::from_reply(frame.payload()).unwrap(), page);
    }

    #[test]
    fn test_signed_fields() {
        let page = HotspotTrackingPage {
            cursor_on: true,
            upper_limit: 10000,
            lower_limit: -500,
            color: Rgb::new(255, 0, 0),
            reserved: [0; 9],
        };
        let frame = page.to_reply();
        assert_eq!(&frame.payload()[5..7], &(-500i16).to_be_bytes());
        assert_eq!(HotspotTrackingPage::from_reply(frame.payload()).unwrap(), page);
    }

    #[test]
    fn test_dispatch_by_echo() {
        let decoded = DecodedPage::from_reply(&status_payload()).unwrap();
        assert!(matches!(decoded, DecodedPage::Status(_)));

        let raw = DecodedPage::from_reply(&[5, 0, 1, 2, 3]).unwrap();
        assert_eq!(
            raw,
            DecodedPage::Raw {
                functional: 5,
                page: 0,
                contents: vec![1, 2, 3]
            }
        );
    }
}
