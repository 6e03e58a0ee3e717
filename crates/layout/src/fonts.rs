//! Width metrics for the standard Helvetica face.
//!
//! Only the regular face is measured; the renderer draws with the base-14 fonts, so no
//! font program is ever loaded.

/// Advance widths in 1/1000 em for printable ASCII (32..=126), from the Adobe AFM.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const DEFAULT_WIDTH: u16 = 556;

pub fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_ASCII[c as usize - 32],
        '©' | '®' => 737,
        '¡' => 333,
        '¿' => 611,
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 278,
        'Á' | 'À' | 'Â' | 'Ä' | 'É' | 'È' | 'Ê' | 'Ë' => 667,
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 778,
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ñ' | 'Ç' => 722,
        'ç' => 500,
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points when set in Helvetica at `font_size`.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    units as f32 * font_size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_table_lines_up() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('@'), 1015);
        assert_eq!(char_width('W'), 944);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('~'), 584);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        assert_eq!(text_width("", 12.0), 0.0);
        assert!((text_width("Total", 10.0) - 22.23).abs() < 1e-4);
        assert!((text_width("©", 8.0) - 5.896).abs() < 1e-4);
    }

    #[test]
    fn test_unmapped_characters_use_default_width() {
        assert_eq!(char_width('東'), DEFAULT_WIDTH);
        assert_eq!(char_width('á'), DEFAULT_WIDTH);
    }
}
