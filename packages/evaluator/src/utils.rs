use tokengen_parser::Rgba;

/// Sanitize a display name into a CSS custom property name
///
/// camelCase boundaries become hyphens, anything outside `[A-Za-z0-9-]`
/// becomes a hyphen, and the result is lowercased behind a `--` prefix:
/// - `css_property_name("primaryColor")` → `"--primary-color"`
/// - `css_property_name("Spacing/Large")` → `"--spacing-large"`
pub fn css_property_name(name: &str) -> String {
    format!("--{}", restyle_property_name(name))
}

/// Sanitize a display name into a Restyle palette key
///
/// Same rules as [`css_property_name`] without the `--` prefix. Sanitizing
/// an already-sanitized name is a no-op.
pub fn restyle_property_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            sanitized.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();

        if ch.is_ascii_alphanumeric() || ch == '-' {
            sanitized.push(ch.to_ascii_lowercase());
        } else {
            sanitized.push('-');
        }
    }

    sanitized
}

/// Format an RGBA color (channels in [0, 1]) as uppercase `#RRGGBBAA`
///
/// Each channel rounds to the nearest 8-bit value independently;
/// out-of-range input saturates at the channel boundary.
pub fn rgba_to_hex(color: &Rgba) -> String {
    let channel = |x: f64| (x * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a)
    )
}

/// Convert a pixel quantity to a rem string with three decimal places
///
/// `px_to_rem(24.0, 16.0)` → `"1.500rem"`
pub fn px_to_rem(value: f64, base_size: f64) -> String {
    format!("{:.3}rem", value / base_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_name_camel_case() {
        assert_eq!(css_property_name("primaryColor"), "--primary-color");
    }

    #[test]
    fn test_css_name_symbols_and_spaces() {
        assert_eq!(css_property_name("Spacing / Large"), "--spacing---large");
        assert_eq!(css_property_name("Font Size"), "--font-size");
    }

    #[test]
    fn test_restyle_name_has_no_prefix() {
        assert_eq!(restyle_property_name("primaryColor"), "primary-color");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let once = restyle_property_name("Brand/primaryColor 2");
        let twice = restyle_property_name(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sanitize_empty_name() {
        assert_eq!(restyle_property_name(""), "");
        assert_eq!(css_property_name(""), "--");
    }

    #[test]
    fn test_digit_before_uppercase_keeps_no_separator() {
        // Only a lowercase letter before an uppercase one inserts a hyphen
        assert_eq!(restyle_property_name("h1Title"), "h1title");
    }

    #[test]
    fn test_rgba_to_hex_pure_red() {
        let hex = rgba_to_hex(&Rgba {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        });
        assert_eq!(hex, "#FF0000FF");
    }

    #[test]
    fn test_rgba_to_hex_rounds_each_channel() {
        let hex = rgba_to_hex(&Rgba {
            r: 0.5,
            g: 0.25,
            b: 0.75,
            a: 1.0,
        });
        // 0.5 -> 128, 0.25 -> 64, 0.75 -> 191
        assert_eq!(hex, "#8040BFFF");
    }

    #[test]
    fn test_rgba_round_trip_within_half_unit() {
        let color = Rgba {
            r: 0.123,
            g: 0.456,
            b: 0.789,
            a: 0.5,
        };
        let hex = rgba_to_hex(&color);
        assert_eq!(hex.len(), 9);
        assert!(hex.starts_with('#'));

        for (i, expected) in [color.r, color.g, color.b, color.a].iter().enumerate() {
            let byte = u8::from_str_radix(&hex[1 + i * 2..3 + i * 2], 16).unwrap();
            let decoded = byte as f64 / 255.0;
            assert!((decoded - expected).abs() <= 0.5 / 255.0);
        }
    }

    #[test]
    fn test_rgba_out_of_range_saturates() {
        let hex = rgba_to_hex(&Rgba {
            r: 1.5,
            g: -0.5,
            b: 0.0,
            a: 1.0,
        });
        assert_eq!(hex, "#FF0000FF");
    }

    #[test]
    fn test_px_to_rem_base_16() {
        assert_eq!(px_to_rem(16.0, 16.0), "1.000rem");
        assert_eq!(px_to_rem(24.0, 16.0), "1.500rem");
        assert_eq!(px_to_rem(0.0, 16.0), "0.000rem");
    }

    #[test]
    fn test_px_to_rem_alternate_base() {
        assert_eq!(px_to_rem(20.0, 10.0), "2.000rem");
    }
}
