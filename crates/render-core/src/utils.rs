use report_layout::FontWeight;

/// Resource name under which the font for `weight` is registered on every page.
pub fn font_resource_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "F1",
        FontWeight::Bold => "F2",
    }
}

/// PostScript name of the base-14 Helvetica face for `weight`.
pub fn base_font_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "Helvetica",
        FontWeight::Bold => "Helvetica-Bold",
    }
}

/// Encodes `s` as WinAnsi (CP1252) bytes for a literal PDF string.
///
/// Control characters become spaces; characters outside the code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => b' ',
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) <= 0xff => c as u8,
            _ => b'?',
        })
        .collect()
}
