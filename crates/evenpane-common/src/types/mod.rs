mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_along_axis() {
        let d = Dimensions::new(80, 24);
        assert_eq!(d.along(Orientation::Row), 80);
        assert_eq!(d.along(Orientation::Column), 24);
    }

    #[test]
    fn dimensions_with_along_keeps_cross_axis() {
        let d = Dimensions::new(80, 24);
        assert_eq!(d.with_along(Orientation::Row, 0), Dimensions::new(0, 24));
        assert_eq!(
            d.with_along(Orientation::Column, 12),
            Dimensions::new(80, 12)
        );
    }

    #[test]
    fn dimensions_display() {
        assert_eq!(Dimensions::new(80, 24).to_string(), "80x24");
    }

    #[test]
    fn pane_id_display() {
        assert_eq!(PaneId(3).to_string(), "pane-3");
    }

    #[test]
    fn orientation_serializes_lowercase() {
        let json = serde_json::to_string(&Orientation::Column).unwrap();
        assert_eq!(json, "\"column\"");
        let back: Orientation = serde_json::from_str("\"row\"").unwrap();
        assert_eq!(back, Orientation::Row);
    }
}
