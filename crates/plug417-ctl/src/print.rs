//! Human readable page output.

use std::fmt::Write;

use plug417_protocol::{AnalogVideoPage, DecodedPage, DigitalVideoPage, Status};

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

/// Render the status report.
pub fn status(st: &Status) -> String {
    let mut out = String::from("PLUG417 status:\n");
    let _ = writeln!(
        out,
        "ID number of module ({:02x}) {}",
        u8::from(st.module_id),
        st.module_id
    );
    let _ = writeln!(out, "Program version {}", st.program_version());
    let _ = writeln!(
        out,
        "Focal spot temperature {:.2} ({:04x})",
        st.focal_spot_celsius(),
        st.focal_spot_temperature
    );
    let _ = writeln!(out, "Video system ({:02x})", st.video_system);
    let _ = writeln!(
        out,
        "Video resolution ({:02x}) {}",
        u8::from(st.video_resolution),
        st.video_resolution
    );
    let _ = writeln!(out, "Machine identification code {:08x}", st.machine_id);
    out
}

fn analog_video(page: &AnalogVideoPage) -> String {
    let mut out = String::from("Analog video page\n");
    let _ = writeln!(out, "Analog video: {}", on_off(page.on));
    let _ = writeln!(out, "Video system: {}", page.video_system);
    let _ = writeln!(out, "Frame rate: {}", page.frame_rate);
    let _ = writeln!(out, "Pseudo color: {}", page.pseudo_color);
    let _ = writeln!(out, "Mirror: {}", page.mirror);
    let _ = writeln!(out, "Zoom area: {}, {}", page.zoom_x, page.zoom_y);
    out
}

fn digital_video(page: &DigitalVideoPage) -> String {
    let mut out = String::from("Digital video page\n");
    let _ = writeln!(out, "External synchronization: {}", on_off(page.external_sync));
    let _ = writeln!(out, "Digital port: {}", page.port);
    let _ = writeln!(out, "Output contents: {}", page.format);
    let _ = writeln!(out, "Interface type: {}", page.interface);
    let _ = writeln!(out, "Frame rate: {}", page.frame_rate);
    let _ = writeln!(out, "MIPI: {}", on_off(page.mipi));
    out
}

/// Render any decoded page.
pub fn page(page: &DecodedPage) -> String {
    match page {
        DecodedPage::Status(st) => status(st),
        DecodedPage::AnalogVideo(p) => analog_video(p),
        DecodedPage::DigitalVideo(p) => digital_video(p),
        DecodedPage::Raw {
            functional,
            page,
            contents,
        } => format!("Page {}/{}: {:02x?}\n", functional, page, contents),
        other => format!("{:#?}\n", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plug417_protocol::{ModuleType, VideoResolution};

    #[test]
    fn test_status_output() {
        let st = Status {
            module_id: ModuleType::Thermography,
            communication_id: 0,
            year: 21,
            month: 7,
            day: 4,
            focal_spot_temperature: 0x0960,
            video_system: 0,
            video_resolution: VideoResolution::R384x288,
            machine_id: 0xCAFE,
            reserved: [0; 3],
        };
        let text = status(&st);
        assert!(text.contains("ID number of module (01) Thermography type\n"));
        assert!(text.contains("Program version 21:07:04\n"));
        assert!(text.contains("Focal spot temperature 24.00 (0960)\n"));
        assert!(text.contains("Video resolution (01) 384x288\n"));
        assert!(text.contains("Machine identification code 0000cafe\n"));
    }
}
