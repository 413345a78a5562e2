//! Integration tests for hashplot-config crate.

use hashplot_common::test_utils::write_data_file;
use hashplot_config::{ConfigLoader, PlotSettings, FIGURE_DPI};

#[test]
fn test_load_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(
        dir.path(),
        "hashplot.yaml",
        concat!(
            "figure:\n",
            "  width_inches: 8\n",
            "  height_inches: 6\n",
            "  dpi: 100\n",
            "style:\n",
            "  bar_color: \"#ff7f0e\"\n",
            "labels:\n",
            "  x: \"Slot\"\n",
        ),
    );

    let settings = ConfigLoader::load(Some(path.as_path())).unwrap();
    assert_eq!(settings.figure.pixels(), (800, 600));
    assert_eq!(settings.style.bar_color, "#ff7f0e");
    assert_eq!(settings.style.edge_color, "#000000");
    assert_eq!(settings.labels.x, "Slot");
    assert_eq!(settings.labels.y, "Elements number");
}

#[test]
fn test_defaults_without_file() {
    let settings = ConfigLoader::load(None).unwrap();
    assert_eq!(settings.figure.dpi, FIGURE_DPI);
    assert_eq!(settings, PlotSettings::default());
}

#[test]
fn test_rejects_bad_color_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data_file(dir.path(), "bad.yaml", "style:\n  edge_color: black\n");

    assert!(ConfigLoader::load_from_file(&path).is_err());
}
