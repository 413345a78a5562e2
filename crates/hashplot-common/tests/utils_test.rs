//! Property tests for label extraction and output path construction.

use hashplot_common::utils::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_label_is_file_stem(dir in "[a-z0-9_]{1,12}", stem in "[A-Za-z0-9_-]{1,16}", ext in "[a-z]{1,4}") {
        let path = format!("{dir}/{stem}.{ext}");
        prop_assert_eq!(extract_label(&path), stem);
    }

    #[test]
    fn test_label_without_period_is_empty(dir in "[a-z0-9_]{1,12}", name in "[A-Za-z0-9_-]{0,16}") {
        let path = format!("{dir}/{name}");
        prop_assert_eq!(extract_label(&path), "");
    }

    #[test]
    fn test_output_path_is_concatenation(dir in "[a-z/]{0,12}", label in "[a-z0-9]{0,12}") {
        let path = output_path(&dir, &label);
        prop_assert!(path.starts_with(&dir));
        prop_assert!(path.ends_with(".png"));
        prop_assert_eq!(path.len(), dir.len() + label.len() + 4);
    }
}
