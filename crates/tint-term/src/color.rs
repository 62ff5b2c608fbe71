// SPDX-License-Identifier: MIT
//
// The ANSI-256 palette, by index.
//
//   0..=7     base colors (black, red, green, yellow, blue, magenta, cyan, white)
//   8..=15    bright versions of 0..=7
//   16..=231  6×6×6 color cube: 16 + 36r + 6g + b, each channel 0..=5
//   232..=255 24-step grayscale ramp: 232 + k
//
// Styles only ever carry the index; RGB is provided for previews and tests.

pub const BLACK: u8 = 0;
pub const RED: u8 = 1;
pub const GREEN: u8 = 2;
pub const YELLOW: u8 = 3;
pub const BLUE: u8 = 4;
pub const MAGENTA: u8 = 5;
pub const CYAN: u8 = 6;
pub const WHITE: u8 = 7;

pub const BRIGHT_BLACK: u8 = 8;
pub const BRIGHT_RED: u8 = 9;
pub const BRIGHT_GREEN: u8 = 10;
pub const BRIGHT_YELLOW: u8 = 11;
pub const BRIGHT_BLUE: u8 = 12;
pub const BRIGHT_MAGENTA: u8 = 13;
pub const BRIGHT_CYAN: u8 = 14;
pub const BRIGHT_WHITE: u8 = 15;

/// Index into the 6×6×6 color cube. Channels above 5 are clamped.
#[must_use]
pub const fn cube(r: u8, g: u8, b: u8) -> u8 {
    let r = if r > 5 { 5 } else { r };
    let g = if g > 5 { 5 } else { g };
    let b = if b > 5 { 5 } else { b };
    16 + 36 * r + 6 * g + b
}

/// Index into the grayscale ramp. `k` above 23 is clamped.
#[must_use]
pub const fn gray(k: u8) -> u8 {
    232 + if k > 23 { 23 } else { k }
}

/// xterm default RGB values for the 16 base colors.
pub const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // 0: Black
    (128, 0, 0),     // 1: Red
    (0, 128, 0),     // 2: Green
    (128, 128, 0),   // 3: Yellow
    (0, 0, 128),     // 4: Blue
    (128, 0, 128),   // 5: Magenta
    (0, 128, 128),   // 6: Cyan
    (192, 192, 192), // 7: White
    (128, 128, 128), // 8: Bright Black
    (255, 0, 0),     // 9: Bright Red
    (0, 255, 0),     // 10: Bright Green
    (255, 255, 0),   // 11: Bright Yellow
    (0, 0, 255),     // 12: Bright Blue
    (255, 0, 255),   // 13: Bright Magenta
    (0, 255, 255),   // 14: Bright Cyan
    (255, 255, 255), // 15: Bright White
];

/// Convert an ANSI-256 palette index to RGB values.
#[must_use]
pub fn ansi256_to_rgb(idx: u8) -> (u8, u8, u8) {
    match idx {
        0..=15 => ANSI16_RGB[idx as usize],
        16..=231 => {
            let idx = idx - 16;
            // Cube levels: 0, 95, 135, 175, 215, 255
            let level = |i: u8| -> u8 { if i == 0 { 0 } else { 55 + 40 * i } };
            (level(idx / 36), level((idx % 36) / 6), level(idx % 6))
        }
        232..=255 => {
            let v = 8 + 10 * (idx - 232);
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_corners() {
        assert_eq!(cube(0, 0, 0), 16);
        assert_eq!(cube(5, 5, 5), 231);
        assert_eq!(cube(5, 0, 0), 196);
        assert_eq!(cube(9, 9, 9), 231);
    }

    #[test]
    fn gray_ramp() {
        assert_eq!(gray(0), 232);
        assert_eq!(gray(23), 255);
        assert_eq!(gray(40), 255);
    }

    #[test]
    fn rgb_lookup() {
        assert_eq!(ansi256_to_rgb(RED), (128, 0, 0));
        assert_eq!(ansi256_to_rgb(cube(5, 0, 0)), (255, 0, 0));
        assert_eq!(ansi256_to_rgb(cube(1, 2, 3)), (95, 135, 175));
        assert_eq!(ansi256_to_rgb(gray(0)), (8, 8, 8));
        assert_eq!(ansi256_to_rgb(255), (238, 238, 238));
    }
}
