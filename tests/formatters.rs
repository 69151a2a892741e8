#[cfg(test)]
mod tests {
    use liftlog::db::history::SetSummary;
    use liftlog::libs::formatter::{format_sets, format_weight};

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(100.0), "100");
        assert_eq!(format_weight(102.5), "102.5");
        assert_eq!(format_weight(61.25), "61.25");
        assert_eq!(format_weight(0.0), "0");
        assert_eq!(format_weight(-20.0), "-20");
    }

    #[test]
    fn test_format_sets() {
        let sets = [
            SetSummary {
                set_index: 1,
                weight: 100.0,
                reps: 5,
            },
            SetSummary {
                set_index: 2,
                weight: 102.5,
                reps: 3,
            },
        ];
        assert_eq!(format_sets(&sets), "100 x 5, 102.5 x 3");
        assert_eq!(format_sets(&[]), "-");
    }
}
