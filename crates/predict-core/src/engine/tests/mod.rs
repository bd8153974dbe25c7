mod learning;

use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dict::read_corpus;
use crate::engine::PredictionEngine;

/// Small corpus shared by the engine tests.
pub(super) const CORPUS: &str = "\
the;120&cat;3&dog;2&end;1
cat;5&sat;2
car;3&
cart;1&
dog;7&ran;1
do;2&
sat;4&
ran;2&
end;6&
then;9&
hello;8&world;4
help;3&
world;10&
";

pub(super) fn engine_from(text: &str) -> PredictionEngine {
    let lines = read_corpus(Cursor::new(text)).unwrap();
    PredictionEngine::from_lines_with_rng(lines, &mut StdRng::seed_from_u64(7))
}

pub(super) fn sample_engine() -> PredictionEngine {
    engine_from(CORPUS)
}
