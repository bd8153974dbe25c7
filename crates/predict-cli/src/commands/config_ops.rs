use std::fs;
use std::process;

pub fn settings_export() {
    print!("{}", predict_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        predict_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: correction.max_distance={}, predictions.default_limit={}, predictions.max_auto_suggest={}, load.shuffle={}",
        s.correction.max_distance,
        s.predictions.default_limit,
        s.predictions.max_auto_suggest,
        s.load.shuffle
    );
}

/// Install `file` as the process-wide settings. Must run before any
/// dictionary is opened.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        predict_core::settings::init_custom(content),
        "Error in settings {file}: {}"
    );
}
