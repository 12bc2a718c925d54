//! Typed attribute setters.
//!
//! Thin wrappers over [`Session::set`]. Setters that touch several options
//! validate all of them before the first write.

use plug417_protocol::{
    AnalogVideoSystem, Attribute, CmosContent, CmosInterface, DigitalPort, FrameRate, Mirror, Palette, Rgb,
    TemperatureUnit, COMMAND_FREEZING, COMMAND_NOT_FREEZING,
};

use crate::error::Result;
use crate::session::Session;
use crate::transport::Transport;

impl<T: Transport> Session<T> {
    /// Set several attributes in order, checking every value first.
    pub fn set_all(&mut self, settings: &[(Attribute, u32)]) -> Result<()> {
        for (attribute, value) in settings {
            attribute.address()?;
            attribute.check(*value)?;
        }
        for (attribute, value) in settings {
            self.set(*attribute, *value)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------------

    /// Automatic shutter compensation interval.
    pub fn set_automatic_compensation_time(&mut self, minutes: u32) -> Result<()> {
        self.set(Attribute::AutomaticCompensationTime, minutes)
    }

    /// Freeze or unfreeze the image.
    pub fn set_image_freezing(&mut self, frozen: bool) -> Result<()> {
        let value = if frozen { COMMAND_FREEZING } else { COMMAND_NOT_FREEZING };
        self.set(Attribute::ImageFreezing, value)
    }

    /// Select the test screen, 0 (live image) to 3.
    pub fn set_test_screen(&mut self, screen: u8) -> Result<()> {
        self.set(Attribute::TestScreen, screen as u32)
    }

    /// Persist the current settings.
    pub fn save_settings(&mut self) -> Result<()> {
        self.set(Attribute::SaveSettings, 1)
    }

    /// Restore factory defaults.
    pub fn restore_factory_default(&mut self) -> Result<()> {
        self.set(Attribute::RestoreFactoryDefault, 1)
    }

    /// Rising temperature calibration value.
    pub fn set_rising_temperature_calibration(&mut self, value: u32) -> Result<()> {
        self.set(Attribute::RisingTemperatureCalibration, value)
    }

    /// Raw shutter control value.
    pub fn set_shutter_control(&mut self, value: u32) -> Result<()> {
        self.set(Attribute::ShutterControl, value)
    }

    // ------------------------------------------------------------------------
    // Analog video
    // ------------------------------------------------------------------------

    /// Turn the analog video output on or off.
    pub fn set_analog_video(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::AnalogVideo, on as u32)
    }

    /// Select the analog video standard and raster.
    pub fn set_video_system(&mut self, system: AnalogVideoSystem) -> Result<()> {
        self.set(Attribute::VideoSystem, u8::from(system) as u32)
    }

    /// Analog output frame rate.
    pub fn set_frame_rate(&mut self, rate: FrameRate) -> Result<()> {
        self.set(Attribute::FrameRate, u8::from(rate) as u32)
    }

    /// Select the pseudo color palette.
    pub fn set_pseudo_color(&mut self, palette: Palette) -> Result<()> {
        self.set(Attribute::PseudoColor, u8::from(palette) as u32)
    }

    /// Select the mirroring mode.
    pub fn set_mirror_image(&mut self, mirror: Mirror) -> Result<()> {
        self.set(Attribute::MirrorImage, u8::from(mirror) as u32)
    }

    /// Electronic zoom factor.
    pub fn set_ezoom(&mut self, zoom: u32) -> Result<()> {
        self.set(Attribute::Ezoom, zoom)
    }

    /// Move the zoomed area.
    pub fn set_zoom_position(&mut self, x: u16, y: u16) -> Result<()> {
        self.set_all(&[(Attribute::ZoomX, x as u32), (Attribute::ZoomY, y as u32)])
    }

    /// Turn hotspot tracking on or off.
    pub fn set_hotspot_track(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::HotspotTrack, on as u32)
    }

    // ------------------------------------------------------------------------
    // Digital video
    // ------------------------------------------------------------------------

    /// External synchronization, off or slave.
    pub fn set_external_sync(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::ExternalSync, on as u32)
    }

    /// Select the digital parallel port type.
    pub fn set_digital_port(&mut self, port: DigitalPort) -> Result<()> {
        self.set(Attribute::DigitalPort, u8::from(port) as u32)
    }

    /// Select what the CMOS port carries.
    pub fn set_cmos_content(&mut self, content: CmosContent) -> Result<()> {
        self.set(Attribute::CmosContent, u8::from(content) as u32)
    }

    /// Select the CMOS bus layout.
    pub fn set_cmos_interface(&mut self, interface: CmosInterface) -> Result<()> {
        self.set(Attribute::CmosInterface, u8::from(interface) as u32)
    }

    /// Digital output frame rate.
    pub fn set_digital_frame_rate(&mut self, rate: FrameRate) -> Result<()> {
        self.set(Attribute::DigitalFrameRate, u8::from(rate) as u32)
    }

    /// Turn the MIPI output on or off.
    pub fn set_mipi(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::Mipi, on as u32)
    }

    /// Trigger a scene (background) compensation.
    pub fn scene_compensation(&mut self) -> Result<()> {
        self.set(Attribute::SceneCompensation, 1)
    }

    /// Trigger a shutter compensation.
    pub fn shutter_compensation(&mut self) -> Result<()> {
        self.set(Attribute::ShutterCompensation, 1)
    }

    // ------------------------------------------------------------------------
    // Algorithm
    // ------------------------------------------------------------------------

    /// Brightness, 0 to 100.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<()> {
        self.set(Attribute::Brightness, brightness as u32)
    }

    /// Contrast, 0 to 100.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<()> {
        self.set(Attribute::Contrast, contrast as u32)
    }

    // ------------------------------------------------------------------------
    // Application overlays
    // ------------------------------------------------------------------------

    /// Show or hide small icon `index` (0 or 1).
    pub fn set_small_icon(&mut self, index: u8, on: bool) -> Result<()> {
        self.set(Attribute::SmallIconOn(index), on as u32)
    }

    /// Width of small icon `index`.
    pub fn set_small_icon_width(&mut self, index: u8, width: u32) -> Result<()> {
        self.set(Attribute::SmallIconWidth(index), width)
    }

    /// Move small icon `index` to (`x`, `y`).
    pub fn set_small_icon_position(&mut self, index: u8, x: u16, y: u16) -> Result<()> {
        self.set_all(&[
            (Attribute::SmallIconX(index), x as u32),
            (Attribute::SmallIconY(index), y as u32),
        ])
    }

    /// Transparency shared by both small icons.
    pub fn set_small_icon_transparency(&mut self, transparency: u32) -> Result<()> {
        self.set(Attribute::SmallIconTransparency, transparency)
    }

    /// Show or hide the menu bar.
    pub fn set_menu_bar(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::MenuBarOn, on as u32)
    }

    /// Vertical position of the menu bar, 0 to height - 16.
    pub fn set_menu_bar_location(&mut self, location: u32) -> Result<()> {
        self.set(Attribute::MenuBarLocation, location)
    }

    /// Menu bar transparency.
    pub fn set_menu_bar_transparency(&mut self, transparency: u32) -> Result<()> {
        self.set(Attribute::MenuBarTransparency, transparency)
    }

    /// Show or hide the layer overlay.
    pub fn set_layer(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::LayerOn, on as u32)
    }

    /// Layer transparency.
    pub fn set_layer_transparency(&mut self, transparency: u32) -> Result<()> {
        self.set(Attribute::LayerTransparency, transparency)
    }

    /// Show or hide the half pixel cursor.
    pub fn set_cursor(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::CursorOn, on as u32)
    }

    /// Move the half pixel cursor.
    pub fn set_cursor_position(&mut self, x: u16, y: u16) -> Result<()> {
        self.set_all(&[(Attribute::CursorX, x as u32), (Attribute::CursorY, y as u32)])
    }

    /// Cursor color, sent as `0xRRGGBB`.
    pub fn set_cursor_color(&mut self, color: Rgb) -> Result<()> {
        self.set(Attribute::CursorColor, color.to_u32())
    }

    /// 0 disabled, 1 full screen, 2 to 4 for area one to three.
    pub fn set_area_mode(&mut self, mode: u32) -> Result<()> {
        self.set(Attribute::AreaMode, mode)
    }

    /// Place the analysis rectangle.
    pub fn set_area_rect(&mut self, x: u16, y: u16, width: u8, height: u8) -> Result<()> {
        self.set_all(&[
            (Attribute::AreaX, x as u32),
            (Attribute::AreaY, y as u32),
            (Attribute::AreaWidth, width as u32),
            (Attribute::AreaHeight, height as u32),
        ])
    }

    /// Frame color of the analysis area.
    pub fn set_area_color(&mut self, color: Rgb) -> Result<()> {
        self.set_all(&[
            (Attribute::AreaColorR, color.r as u32),
            (Attribute::AreaColorG, color.g as u32),
            (Attribute::AreaColorB, color.b as u32),
        ])
    }

    /// Enable the high temperature alarm at `threshold`.
    pub fn set_area_alarm(&mut self, on: bool, threshold: i32) -> Result<()> {
        self.set_all(&[
            (Attribute::AreaAlarm, on as u32),
            (Attribute::AreaAlarmThreshold, threshold as u32),
        ])
    }

    /// Show or hide the hotspot cursor.
    pub fn set_hotspot_cursor(&mut self, on: bool) -> Result<()> {
        self.set(Attribute::HotspotCursorOn, on as u32)
    }

    /// Temperature window the hotspot cursor tracks within.
    pub fn set_hotspot_limits(&mut self, upper: i32, lower: i32) -> Result<()> {
        self.set_all(&[
            (Attribute::HotspotUpperLimit, upper as u32),
            (Attribute::HotspotLowerLimit, lower as u32),
        ])
    }

    /// Hotspot cursor color.
    pub fn set_hotspot_color(&mut self, color: Rgb) -> Result<()> {
        self.set_all(&[
            (Attribute::HotspotColorR, color.r as u32),
            (Attribute::HotspotColorG, color.g as u32),
            (Attribute::HotspotColorB, color.b as u32),
        ])
    }

    // ------------------------------------------------------------------------
    // Temperature measurement
    // ------------------------------------------------------------------------

    /// Distance to the measured target.
    pub fn set_temperature_distance(&mut self, distance: u32) -> Result<()> {
        self.set(Attribute::TemperatureDistance, distance)
    }

    /// Emissivity of the measured target.
    pub fn set_emissivity(&mut self, emissivity: u32) -> Result<()> {
        self.set(Attribute::TemperatureEmissivity, emissivity)
    }

    /// Select the display unit.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) -> Result<()> {
        self.set(Attribute::TemperatureShow, u8::from(unit) as u32)
    }

    /// Signed calibration offset.
    pub fn set_temperature_calibration(&mut self, offset: i32) -> Result<()> {
        self.set(Attribute::TemperatureCalibration, offset as u32)
    }

    /// Restore the measurement parameters to their defaults.
    pub fn reset_temperature_measurement(&mut self) -> Result<()> {
        self.set(Attribute::TemperatureFactoryReset, 1)
    }

    /// Signed reflected temperature.
    pub fn set_reflected_temperature(&mut self, temperature: i32) -> Result<()> {
        self.set(Attribute::TemperatureReflected, temperature as u32)
    }

    /// Persist the measurement parameters.
    pub fn save_temperature_settings(&mut self) -> Result<()> {
        self.set(Attribute::TemperatureSaveSettings, 1)
    }

    /// Relative humidity.
    pub fn set_humidity(&mut self, humidity: u32) -> Result<()> {
        self.set(Attribute::TemperatureHumidity, humidity)
    }

    /// 0 low range, 1 high range.
    pub fn set_temperature_range(&mut self, range: u32) -> Result<()> {
        self.set(Attribute::TemperatureRange, range)
    }
}
