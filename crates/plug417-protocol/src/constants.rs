//! Protocol constants
//!
//! Framing bytes, functional classes, page selectors, option numbers and the
//! enumerated option values understood by the PLUG417 sensor module.

// ============================================================================
// Framing
// ============================================================================

/// First header byte of every frame.
pub const FRAME_HEADER0: u8 = 0x55;
/// Second header byte of every frame.
pub const FRAME_HEADER1: u8 = 0xAA;
/// Terminator byte of every frame.
pub const FRAME_END: u8 = 0xF0;

/// Header (2) + length (1) + checksum (1) + terminator (1).
pub const FRAME_OVERHEAD: usize = 5;
/// Largest payload a single length byte can announce.
pub const MAX_PAYLOAD_SIZE: usize = 255;
/// Largest frame on the wire.
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + FRAME_OVERHEAD;

/// Command payload size: functional + page + option + 32-bit value.
pub const COMMAND_PAYLOAD_SIZE: usize = 7;
/// Handshake payload size.
pub const HANDSHAKE_PAYLOAD_SIZE: usize = 1;
/// Status payload size.
pub const STATUS_PAYLOAD_SIZE: usize = 18;

/// Handshake option reported by the device on success.
pub const HANDSHAKE_OK: u8 = 0;

/// Option value reserved for "read back this page".
///
/// No settable option on any page uses 0, the device answers a command with
/// this option with the current page contents.
pub const OPTION_QUERY: u8 = 0x00;

// ============================================================================
// Functional classes
// ============================================================================

/// Device status report.
pub const FUNCTIONAL_STATUS: u8 = 0;
/// Setup (calibration, freezing, test screens, persistence).
pub const FUNCTIONAL_SETUP: u8 = 1;
/// Analog/digital video and image algorithm settings.
pub const FUNCTIONAL_VIDEO: u8 = 2;
/// On-screen overlays and analysis tools.
pub const FUNCTIONAL_APPLICATION: u8 = 3;
/// Temperature measurement parameters.
pub const FUNCTIONAL_TEMPERATURE_MEASUREMENT: u8 = 4;
/// Expert settings.
pub const FUNCTIONAL_EXPERT: u8 = 5;
/// Highest functional class the device accepts.
pub const FUNCTIONAL_MAX: u8 = FUNCTIONAL_EXPERT;

/// Functional class used when querying the status report.
///
/// Not confirmed against the device protocol document; one firmware
/// revision may answer status on a different class.
pub const STATUS_QUERY_FUNCTIONAL: u8 = FUNCTIONAL_STATUS;

// ============================================================================
// Pages
// ============================================================================

/// Status page.
pub const PAGE_STATUS: u8 = 0;

/// Setup page.
pub const PAGE_SETUP: u8 = 0;

/// Analog video page.
pub const PAGE_ANALOG_VIDEO: u8 = 0;
/// Digital video page.
pub const PAGE_DIGITAL_VIDEO: u8 = 1;
/// Image algorithm page.
pub const PAGE_ALGORITHM: u8 = 2;

/// Small icon overlay page.
pub const PAGE_SMALL_ICON: u8 = 0;
/// Menu bar overlay page.
pub const PAGE_MENU_BAR: u8 = 1;
/// Layer overlay page.
pub const PAGE_LAYER: u8 = 2;
/// Half pixel cursor page.
pub const PAGE_HALF_PIXEL_CURSOR: u8 = 3;
/// Area analysis page.
pub const PAGE_AREA_ANALYSIS: u8 = 4;
/// Hotspot tracking page.
pub const PAGE_HOTSPOT_TRACKING: u8 = 5;

/// Temperature measurement page.
pub const PAGE_TEMPERATURE_MEASUREMENT: u8 = 0;

// ============================================================================
// Setup options
// ============================================================================

/// Automatic shutter compensation interval, in minutes.
pub const OPTION_AUTOMATIC_COMPENSATION_TIME: u8 = 1;
/// Freeze or unfreeze the image.
pub const OPTION_IMAGE_FREEZING: u8 = 2;
/// Select the test screen.
pub const OPTION_TEST_SCREEN_SWITCHING: u8 = 3;
/// Persist the current settings.
pub const OPTION_SAVE_SETTINGS: u8 = 4;
/// Restore factory defaults.
pub const OPTION_RESTORE_TO_FACTORY_DEFAULT: u8 = 5;
/// Rising temperature calibration.
pub const OPTION_RISING_TEMPERATURE_CALIBRATION: u8 = 7;
/// Shutter control.
pub const OPTION_SHUTTER_CONTROL: u8 = 8;

/// Live image.
pub const COMMAND_NOT_FREEZING: u32 = 0;
/// Frozen image.
pub const COMMAND_FREEZING: u32 = 1;

/// Test screen 0: the real-time image.
pub const COMMAND_REAL_TIME_IMAGE: u32 = 0;
/// Test screen 1: checkerboard.
pub const COMMAND_CHECKER_BOARD_PATTERN: u32 = 1;
/// Test screen 2: row gradients.
pub const COMMAND_ROW_GRADIENTS_PATTERN: u32 = 2;
/// Test screen 3: line gradients.
pub const COMMAND_LINE_GRADIENTS_PATTERN: u32 = 3;
/// Highest test screen.
pub const COMMAND_TEST_SCREEN_MAX: u32 = COMMAND_LINE_GRADIENTS_PATTERN;

// ============================================================================
// Analog video options
// ============================================================================

/// Analog video output on/off.
pub const OPTION_ANALOG_VIDEO_SWITCH: u8 = 1;
/// Analog video standard and raster.
pub const OPTION_VIDEO_SYSTEM_SWITCHING: u8 = 2;
/// Analog frame rate.
pub const OPTION_FRAME_RATE_SETTING: u8 = 3;
/// Pseudo color palette.
pub const OPTION_PSEUDO_COLOR: u8 = 4;
/// Image mirroring.
pub const OPTION_MIRROR_IMAGE: u8 = 5;
/// Electronic zoom factor.
pub const OPTION_EZOOM: u8 = 6;
/// X coordinate of the zoomed area.
pub const OPTION_COORDINATE_X_ZOOMED_AREA: u8 = 7;
/// Y coordinate of the zoomed area.
pub const OPTION_COORDINATE_Y_ZOOMED_AREA: u8 = 8;
/// Hotspot tracking on/off.
pub const OPTION_HOTSPOT_TRACK_SWITCH: u8 = 9;

/// White hot palette.
pub const COMMAND_COLOR_WHITE_HOT: u32 = 0;
/// Fulgurite palette.
pub const COMMAND_COLOR_FULGURITE: u32 = 1;
/// Iron red palette.
pub const COMMAND_COLOR_IRON_RED: u32 = 2;
/// Hot iron palette.
pub const COMMAND_COLOR_HOT_IRON: u32 = 3;
/// Medical palette.
pub const COMMAND_COLOR_MEDICAL: u32 = 4;
/// Arctic palette.
pub const COMMAND_COLOR_ARCTIC: u32 = 5;
/// First rainbow palette.
pub const COMMAND_COLOR_RAINBOW_1: u32 = 6;
/// Second rainbow palette.
pub const COMMAND_COLOR_RAINBOW_2: u32 = 7;
/// Tint palette.
pub const COMMAND_COLOR_TINT: u32 = 8;
/// Black hot palette.
pub const COMMAND_COLOR_BLACK_HOT: u32 = 9;
/// Highest palette index.
pub const COMMAND_COLOR_MAX: u32 = COMMAND_COLOR_BLACK_HOT;

/// No mirroring.
pub const COMMAND_MIRROR_NA: u32 = 0;
/// Mirror along X.
pub const COMMAND_MIRROR_X: u32 = 1;
/// Mirror along Y.
pub const COMMAND_MIRROR_Y: u32 = 2;
/// Mirror along both axes.
pub const COMMAND_MIRROR_XY: u32 = 3;
/// Highest mirror mode.
pub const COMMAND_MIRROR_MAX: u32 = COMMAND_MIRROR_XY;

/// PAL, 384x288.
pub const ANALOG_P_SYSTEM_384_288: u8 = 0;
/// NTSC, 320x240.
pub const ANALOG_N_SYSTEM_320_240: u8 = 1;
/// PAL, 360x288.
pub const ANALOG_P_SYSTEM_360_288: u8 = 2;
/// NTSC, 360x240.
pub const ANALOG_N_SYSTEM_360_240: u8 = 3;

/// 50 Hz (PAL) or 60 Hz (NTSC).
pub const FRAME_RATE_50_60_HZ: u8 = 0;
/// 25 Hz (PAL) or 30 Hz (NTSC).
pub const FRAME_RATE_25_30_HZ: u8 = 1;
/// 9 Hz.
pub const FRAME_RATE_9_HZ: u8 = 2;

// ============================================================================
// Digital video options
// ============================================================================

/// External synchronization: 0 off, 1 slave.
pub const OPTION_EXTERNAL_SYNCHRONIZATION_SWITCH: u8 = 1;
/// Digital parallel port type.
pub const OPTION_DIGITAL_PORT_PARALLEL_TYPE: u8 = 2;
/// Content carried on the CMOS port.
pub const OPTION_CMOS_CONTENT_SELECTION: u8 = 3;
/// CMOS bus layout.
pub const OPTION_CMOS_INTERFACE_TYPE: u8 = 4;
/// Digital frame rate.
pub const OPTION_DIGITAL_FRAME_RATE_SETTING: u8 = 5;
/// MIPI output on/off.
pub const OPTION_MIPI_SWITCH: u8 = 6;
/// Trigger a scene compensation.
pub const OPTION_SCENE_COMPENSATION: u8 = 7;
/// Trigger a shutter compensation.
pub const OPTION_SHUTTER_COMPENSATION: u8 = 8;

/// YUV422.
pub const COMMAND_CMOS_CONTENT_YUV422: u32 = 0;
/// YUV422 with a parameter line.
pub const COMMAND_CMOS_CONTENT_YUV422_PARM_LINE: u32 = 1;
/// YUV16.
pub const COMMAND_CMOS_CONTENT_YUV16: u32 = 2;
/// YUV16 with a parameter line.
pub const COMMAND_CMOS_CONTENT_YUV16_PARM_LINE: u32 = 3;
/// Y16 and YUV422.
pub const COMMAND_CMOS_CONTENT_Y16_YUV422: u32 = 4;
/// Y16 with a parameter line, and YUV422.
pub const COMMAND_CMOS_CONTENT_Y16_PARM_LINE_YUV422: u32 = 5;
/// Highest CMOS content selector.
pub const COMMAND_CMOS_CONTENT_MAX: u32 = COMMAND_CMOS_CONTENT_Y16_PARM_LINE_YUV422;

/// 16-bit CMOS bus.
pub const COMMAND_CMOS_INTERFACE_CMOS16: u32 = 0;
/// 8-bit CMOS bus, MSB first.
pub const COMMAND_CMOS_INTERFACE_CMOS8_MSB: u32 = 1;
/// 8-bit CMOS bus, LSB first.
pub const COMMAND_CMOS_INTERFACE_CMOS8_LSB: u32 = 2;
/// Highest CMOS interface selector.
pub const COMMAND_CMOS_INTERFACE_MAX: u32 = COMMAND_CMOS_INTERFACE_CMOS8_LSB;

/// Parallel port off.
pub const DIGITAL_PORT_OFF: u8 = 0;
/// BT.656 output.
pub const DIGITAL_PORT_BT_656: u8 = 1;
/// CMOS output.
pub const DIGITAL_PORT_CMOS: u8 = 2;

// ============================================================================
// Algorithm options
// ============================================================================

/// Image brightness.
pub const OPTION_BRIGHTNESS: u8 = 0x0A;
/// Image contrast.
pub const OPTION_CONTRAST: u8 = 0x0B;

/// Highest brightness.
pub const COMMAND_BRIGHTNESS_MAX: u32 = 100;
/// Highest contrast.
pub const COMMAND_CONTRAST_MAX: u32 = 100;

// ============================================================================
// Application options
// ============================================================================

/// Number of small icons the overlay supports.
pub const SMALL_ICON_COUNT: u8 = 2;
/// Option stride between the per-icon option groups.
pub const SMALL_ICON_OPTION_STRIDE: u8 = 4;
/// Icon on/off, icon 0 (add the stride per index).
pub const OPTION_SMALL_ICON_ON: u8 = 1;
/// Icon width, icon 0.
pub const OPTION_SMALL_ICON_WIDTH: u8 = 2;
/// Icon X position, icon 0.
pub const OPTION_SMALL_ICON_X: u8 = 3;
/// Icon Y position, icon 0.
///
/// Not confirmed against the device protocol document. One firmware
/// revision sends the X option number for Y as well; this driver gives Y
/// its own slot after X.
pub const OPTION_SMALL_ICON_Y: u8 = 4;
/// Transparency shared by both icons.
pub const OPTION_SMALL_ICON_TRANSPARENCY: u8 = 9;

/// Menu bar on/off.
pub const OPTION_MENU_BAR_ON: u8 = 1;
/// Menu bar vertical location.
pub const OPTION_MENU_BAR_LOCATION: u8 = 2;
/// Menu bar transparency.
pub const OPTION_MENU_BAR_TRANSPARENCY: u8 = 3;

/// Layer on/off.
pub const OPTION_LAYER_ON: u8 = 1;
/// Layer transparency.
pub const OPTION_LAYER_TRANSPARENCY: u8 = 2;

/// Half pixel cursor on/off.
pub const OPTION_HALF_PIXEL_CURSOR_ON: u8 = 1;
/// Cursor X position.
pub const OPTION_HALF_PIXEL_CURSOR_X: u8 = 2;
/// Cursor Y position.
pub const OPTION_HALF_PIXEL_CURSOR_Y: u8 = 3;
/// Cursor color, `0xRRGGBB`.
pub const OPTION_HALF_PIXEL_CURSOR_COLOR: u8 = 4;

/// Area analysis mode: 0 off, 1 full screen, 2 to 4 area one to three.
pub const OPTION_AREA_MODE: u8 = 1;
/// Area X position.
pub const OPTION_AREA_X: u8 = 2;
/// Area Y position.
pub const OPTION_AREA_Y: u8 = 3;
/// Area width.
pub const OPTION_AREA_WIDTH: u8 = 4;
/// Area height.
pub const OPTION_AREA_HEIGHT: u8 = 5;
/// Area frame red component.
pub const OPTION_AREA_COLOR_R: u8 = 6;
/// Area frame green component.
pub const OPTION_AREA_COLOR_G: u8 = 7;
/// Area frame blue component.
pub const OPTION_AREA_COLOR_B: u8 = 8;
/// High temperature alarm on/off.
pub const OPTION_AREA_HIGH_TEMPERATURE_ALARM: u8 = 9;
/// High temperature alarm threshold, signed.
pub const OPTION_AREA_HIGH_TEMPERATURE_ALARM_THRESHOLD: u8 = 10;

/// Hotspot cursor on/off.
pub const OPTION_HOTSPOT_CURSOR_ON: u8 = 1;
/// Hotspot upper limit, signed.
pub const OPTION_HOTSPOT_UPPER_LIMIT: u8 = 2;
/// Hotspot lower limit, signed.
pub const OPTION_HOTSPOT_LOWER_LIMIT: u8 = 3;
/// Hotspot cursor red component.
pub const OPTION_HOTSPOT_COLOR_R: u8 = 4;
/// Hotspot cursor green component.
pub const OPTION_HOTSPOT_COLOR_G: u8 = 5;
/// Hotspot cursor blue component.
pub const OPTION_HOTSPOT_COLOR_B: u8 = 6;

// ============================================================================
// Temperature measurement options
// ============================================================================

/// Distance to the target.
pub const OPTION_TEMPERATURE_DISTANCE: u8 = 1;
/// Target emissivity.
pub const OPTION_TEMPERATURE_EMISSIVITY: u8 = 2;
/// Display unit.
pub const OPTION_TEMPERATURE_SHOW: u8 = 3;
/// Calibration offset, signed.
pub const OPTION_TEMPERATURE_CALIBRATION: u8 = 4;
/// Restore measurement defaults.
pub const OPTION_TEMPERATURE_FACTORY_RESET: u8 = 5;
/// Reflected temperature, signed.
pub const OPTION_TEMPERATURE_REFLECTED: u8 = 6;
/// Persist measurement settings.
pub const OPTION_TEMPERATURE_SAVE_SETTINGS: u8 = 7;
/// Relative humidity.
pub const OPTION_TEMPERATURE_HUMIDITY: u8 = 8;
/// Measurement range.
pub const OPTION_TEMPERATURE_RANGE: u8 = 9;

/// Show degrees Celsius.
pub const COMMAND_TEMPERATURE_CELSIUS: u32 = 0;
/// Show degrees Fahrenheit.
pub const COMMAND_TEMPERATURE_FAHRENHEIT: u32 = 1;
/// Show Kelvin.
pub const COMMAND_TEMPERATURE_KELVIN: u32 = 2;
/// Highest display unit.
pub const COMMAND_TEMPERATURE_SHOW_MAX: u32 = COMMAND_TEMPERATURE_KELVIN;

/// Low temperature range.
pub const COMMAND_TEMPERATURE_RANGE_LOW: u32 = 0;
/// High temperature range.
pub const COMMAND_TEMPERATURE_RANGE_HIGH: u32 = 1;
/// Highest range selector.
pub const COMMAND_TEMPERATURE_RANGE_MAX: u32 = COMMAND_TEMPERATURE_RANGE_HIGH;

// ============================================================================
// Status values
// ============================================================================

/// Imaging-only module.
pub const OBSERVATION_TYPE: u8 = 0;
/// Radiometric module.
pub const THERMOGRAPHY_TYPE: u8 = 1;

/// 400x300 sensor output.
pub const VIDEO_400_300: u8 = 0;
/// 384x288 sensor output.
pub const VIDEO_384_288: u8 = 1;
/// 360x288 sensor output.
pub const VIDEO_360_288: u8 = 2;
/// 320x240 sensor output.
pub const VIDEO_320_240: u8 = 3;
/// 360x240 sensor output.
pub const VIDEO_360_240: u8 = 4;
/// 160x120 sensor output.
pub const VIDEO_160_120: u8 = 5;
