//! Rendering of motion primitives as G-code text.
//!
//! Output matches what common GRBL-style controllers expect: `G90`/`G21`
//! preamble, `G0` rapids, `G1` feed moves, `M03`/`M05` for the beam, a
//! return-to-origin trailer, CRLF line endings. Coordinates carry at most
//! four fractional digits with trailing zeros trimmed.

use image2gcode_core::{Motion, Toolpath};

/// Formats a number with up to four decimals, trimming trailing zeros.
pub fn format_number(value: f64) -> String {
    let mut text = format!("{:.4}", value);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        return "0".to_string();
    }
    text
}

fn push_motion(gcode: &mut String, motion: &Motion) {
    match *motion {
        Motion::Move { x, y, rapid } => {
            let word = if rapid { "G0" } else { "G1" };
            gcode.push_str(&format!(
                "{} X{} Y{}\r\n",
                word,
                format_number(x),
                format_number(y)
            ));
        }
        Motion::EngraveOn => gcode.push_str("M03\r\n"),
        Motion::EngraveOff => gcode.push_str("M05\r\n"),
        Motion::SetFeedRate { rate } => {
            gcode.push_str(&format!("G1 F{}\r\n", format_number(rate)));
        }
    }
}

/// Renders a complete program: preamble, every motion, trailer.
pub fn encode(toolpath: &Toolpath) -> String {
    let mut gcode = String::new();
    gcode.push_str("G90\r\n");
    gcode.push_str("G21\r\n");
    gcode.push_str("\r\n");

    for motion in toolpath.iter() {
        push_motion(&mut gcode, motion);
    }

    gcode.push_str("\r\n");
    gcode.push_str("G0 X0 Y0\r\n");
    gcode.push_str("M05\r\n");

    tracing::debug!(
        motions = toolpath.len(),
        bytes = gcode.len(),
        "encoded G-code program"
    );
    gcode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(99.95), "99.95");
        assert_eq!(format_number(0.204), "0.204");
        assert_eq!(format_number(-12.5), "-12.5");
        // Rounded to four fractional digits.
        assert_eq!(format_number(1.00004), "1");
        assert_eq!(format_number(0.01234567), "0.0123");
        // Tiny negatives must not render as "-0".
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_encode_program_shape() {
        let mut toolpath = Toolpath::new();
        toolpath.push(Motion::Move {
            x: 1.5,
            y: 0.0,
            rapid: true,
        });
        toolpath.push(Motion::EngraveOn);
        toolpath.push(Motion::Move {
            x: 2.5,
            y: 0.0,
            rapid: false,
        });
        toolpath.push(Motion::EngraveOff);

        let gcode = encode(&toolpath);
        assert_eq!(
            gcode,
            "G90\r\nG21\r\n\r\n\
             G0 X1.5 Y0\r\nM03\r\nG1 X2.5 Y0\r\nM05\r\n\
             \r\nG0 X0 Y0\r\nM05\r\n"
        );
    }

    #[test]
    fn test_encode_feed_rate() {
        let mut toolpath = Toolpath::new();
        toolpath.push(Motion::SetFeedRate { rate: 450.0 });
        let gcode = encode(&toolpath);
        assert!(gcode.contains("G1 F450\r\n"));
    }

    #[test]
    fn test_empty_toolpath_is_header_and_footer_only() {
        let gcode = encode(&Toolpath::new());
        assert_eq!(gcode, "G90\r\nG21\r\n\r\n\r\nG0 X0 Y0\r\nM05\r\n");
    }
}
