//! Display formatting for optional mission fields.
//!
//! Every formatter renders "N/A" for an absent value instead of
//! panicking, so the detail views stay total over partial data.

use crate::models::{Label, Pos2, Pos3};

pub const NA: &str = "N/A";

pub fn text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NA.to_string(),
    }
}

pub fn label(value: Option<&Label>) -> String {
    value.map(|l| l.verbose_name.clone()).unwrap_or_else(|| NA.to_string())
}

pub fn count(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NA.to_string())
}

/// Two-decimal meter coordinate, e.g. "21380.02 m".
pub fn meters(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2} m")).unwrap_or_else(|| NA.to_string())
}

pub fn degrees(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.0}\u{00b0}")).unwrap_or_else(|| NA.to_string())
}

pub fn minutes(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.0} min")).unwrap_or_else(|| NA.to_string())
}

pub fn seconds(value: Option<u32>) -> String {
    value.map(|v| format!("{v} s")).unwrap_or_else(|| NA.to_string())
}

pub fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => NA.to_string(),
    }
}

pub fn pos2(value: Option<&Pos2>) -> (String, String) {
    match value {
        Some(p) => (format!("{:.2}", p.x), format!("{:.2}", p.y)),
        None => (NA.to_string(), NA.to_string()),
    }
}

pub fn pos3(value: Option<&Pos3>) -> (String, String, String) {
    match value {
        Some(p) => (
            format!("{:.2}", p.x),
            format!("{:.2}", p.y),
            format!("{:.2}", p.z),
        ),
        None => (NA.to_string(), NA.to_string(), NA.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_absent_and_empty() {
        assert_eq!(text(None), "N/A");
        assert_eq!(text(Some("")), "N/A");
        assert_eq!(text(Some("London")), "London");
    }

    #[test]
    fn test_label_absent() {
        assert_eq!(label(None), "N/A");
        let l = Label {
            name: "red".to_string(),
            verbose_name: "Allies".to_string(),
            help_text: None,
        };
        assert_eq!(label(Some(&l)), "Allies");
    }

    #[test]
    fn test_meters_rounding() {
        assert_eq!(meters(Some(21380.017)), "21380.02 m");
        assert_eq!(meters(None), "N/A");
    }

    #[test]
    fn test_degrees() {
        assert_eq!(degrees(Some(360.0)), "360\u{00b0}");
        assert_eq!(degrees(None), "N/A");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(minutes(Some(15.0)), "15 min");
        assert_eq!(seconds(Some(500)), "500 s");
        assert_eq!(minutes(None), "N/A");
        assert_eq!(seconds(None), "N/A");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(Some(true)), "yes");
        assert_eq!(yes_no(Some(false)), "no");
        assert_eq!(yes_no(None), "N/A");
    }

    #[test]
    fn test_pos2_absent() {
        assert_eq!(pos2(None), ("N/A".to_string(), "N/A".to_string()));
    }

    #[test]
    fn test_pos3_present() {
        let p = Pos3 { x: 1.5, y: 2.0, z: 500.0 };
        let (x, y, z) = pos3(Some(&p));
        assert_eq!((x.as_str(), y.as_str(), z.as_str()), ("1.50", "2.00", "500.00"));
    }
}
