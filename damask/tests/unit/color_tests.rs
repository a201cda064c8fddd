use damask::stripes::color::{percent_to_hex, with_alpha};

#[test]
fn test_percent_to_hex_bounds() {
    assert_eq!(percent_to_hex(0.0), "00");
    assert_eq!(percent_to_hex(100.0), "FF");
}

#[test]
fn test_percent_to_hex_known_values() {
    assert_eq!(percent_to_hex(85.0), "D9");
    assert_eq!(percent_to_hex(80.0), "CC");
    assert_eq!(percent_to_hex(90.0), "E6");
    assert_eq!(percent_to_hex(50.0), "80");
}

#[test]
fn test_percent_to_hex_shape() {
    for p in 0..=100 {
        let hex = percent_to_hex(f64::from(p));
        assert_eq!(hex.len(), 2, "intensity {p} rendered as {hex}");
        assert!(
            hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
            "intensity {p} rendered as {hex}"
        );
    }
}

#[test]
fn test_percent_to_hex_clamps() {
    assert_eq!(percent_to_hex(-1.0), percent_to_hex(0.0));
    assert_eq!(percent_to_hex(-250.0), "00");
    assert_eq!(percent_to_hex(101.0), percent_to_hex(100.0));
    assert_eq!(percent_to_hex(1000.0), "FF");
}

#[test]
fn test_percent_to_hex_rounds_fractions() {
    assert_eq!(percent_to_hex(84.9), percent_to_hex(85.0));
    assert_eq!(percent_to_hex(85.1), "D9");
}

#[test]
fn test_percent_to_hex_monotonic() {
    let mut previous = 0;
    for p in 0..=100 {
        let value = u8::from_str_radix(&percent_to_hex(f64::from(p)), 16).unwrap();
        assert!(value >= previous, "hex value decreased at intensity {p}");
        previous = value;
    }
}

#[test]
fn test_with_alpha() {
    assert_eq!(with_alpha("#2196F3", 85.0), "#2196F3D9");
    assert_eq!(with_alpha("#3b82f6", 0.0), "#3b82f600");
}
