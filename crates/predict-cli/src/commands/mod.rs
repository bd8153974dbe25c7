use std::path::Path;
use std::process;

use predict_core::PredictionEngine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod learn_ops;
pub mod query_ops;

fn open_engine(dict_file: &str) -> PredictionEngine {
    die!(
        PredictionEngine::open(Path::new(dict_file)),
        "Error opening dictionary {dict_file}: {}"
    )
}
