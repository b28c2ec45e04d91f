//! Geometry-string helpers
//!
//! Window placement travels as an X-style geometry string `WxH+X+Y`.
//! Only the `+X+Y` offset suffix is persisted; the size portion is
//! discarded on save and absent from stored records. Offsets may be
//! negative (`+-8+-8` is what a maximized window reports), so tokens
//! are signed.

/// Format window size and position as a `WxH+X+Y` geometry string.
pub fn format_geometry(width: f32, height: f32, x: f32, y: f32) -> String {
    format!(
        "{}x{}+{}+{}",
        width.round() as i32,
        height.round() as i32,
        x.round() as i32,
        y.round() as i32
    )
}

/// Extract the `+X+Y` offset suffix from a full geometry string.
/// Returns None when the string has no `+` separator at all.
pub fn offset_suffix(geometry: &str) -> Option<&str> {
    geometry.find('+').map(|idx| &geometry[idx..])
}

/// Collapse any run of leading `+` characters to exactly one.
/// Stored offsets are written verbatim, so a record may arrive with
/// zero or several leading markers.
pub fn normalize_offset(offset: &str) -> String {
    format!("+{}", offset.trim_start_matches('+'))
}

/// Parse an offset string into `(x, y)` screen coordinates.
/// Accepts a leading `+` or none; requires exactly two signed integer
/// tokens separated by `+`.
pub fn parse_offset(offset: &str) -> Option<(i32, i32)> {
    let mut tokens = offset.split('+').filter(|part| !part.is_empty());
    let x = tokens.next()?.parse::<i32>().ok()?;
    let y = tokens.next()?.parse::<i32>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_geometry() {
        assert_eq!(format_geometry(250.0, 350.0, 100.0, 200.0), "250x350+100+200");
    }

    #[test]
    fn test_format_geometry_rounds_fractional_coordinates() {
        assert_eq!(format_geometry(250.4, 349.6, 99.5, 200.49), "250x350+100+200");
    }

    #[test]
    fn test_format_geometry_negative_position() {
        // Maximized windows report slightly negative offsets
        assert_eq!(format_geometry(250.0, 350.0, -8.0, -8.0), "250x350+-8+-8");
    }

    #[test]
    fn test_offset_suffix() {
        assert_eq!(offset_suffix("250x350+100+200"), Some("+100+200"));
        assert_eq!(offset_suffix("250x350+-8+-8"), Some("+-8+-8"));
    }

    #[test]
    fn test_offset_suffix_without_offset() {
        assert_eq!(offset_suffix("250x350"), None);
        assert_eq!(offset_suffix(""), None);
    }

    #[test]
    fn test_normalize_offset() {
        assert_eq!(normalize_offset("+100+200"), "+100+200");
        assert_eq!(normalize_offset("100+200"), "+100+200");
        assert_eq!(normalize_offset("++100+200"), "+100+200");
    }

    #[test]
    fn test_normalize_offset_negative() {
        assert_eq!(normalize_offset("+-8+-8"), "+-8+-8");
        assert_eq!(normalize_offset("-8+-8"), "+-8+-8");
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("+100+200"), Some((100, 200)));
        assert_eq!(parse_offset("100+200"), Some((100, 200)));
        assert_eq!(parse_offset("+-8+-8"), Some((-8, -8)));
    }

    #[test]
    fn test_parse_offset_rejects_malformed() {
        assert_eq!(parse_offset(""), None);
        assert_eq!(parse_offset("+100"), None);
        assert_eq!(parse_offset("+100+200+300"), None);
        assert_eq!(parse_offset("+abc+def"), None);
    }

    #[test]
    fn test_parse_roundtrip_through_geometry() {
        let geometry = format_geometry(250.0, 350.0, -5.0, 42.0);
        let offset = offset_suffix(&geometry).unwrap();
        assert_eq!(parse_offset(offset), Some((-5, 42)));
    }
}
