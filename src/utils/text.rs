/// Human label for a market capitalization given in millions. Zero means "no minimum".
pub fn format_market_cap(millions: f64) -> String {
    if !millions.is_finite() || millions <= 0.0 {
        return "Any".to_string();
    }

    if millions >= 1_000_000.0 {
        trim_fraction(millions / 1_000_000.0, "T")
    } else if millions >= 1_000.0 {
        trim_fraction(millions / 1_000.0, "B")
    } else {
        trim_fraction(millions, "M")
    }
}

fn trim_fraction(value: f64, unit: &str) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}{}", value, unit)
    } else {
        format!("{:.1}{}", value, unit)
    }
}

/// Shorten `text` to at most `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
