use life_engine::patterns::PatternBuf;
use life_engine::render::{Renderer, TerminalRenderer};
use life_engine::Grid;
use std::path::Path;

fn main() {
    let pattern_file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/test_data/light_ship.life");
    let pattern = match PatternBuf::load(&pattern_file) {
        Ok(pattern) => pattern,
        Err(e) => panic!("Error reading pattern file: {}", e),
    };

    let grid = Grid::new(10, 20).unwrap().seed(&pattern.translated((3, 2))).unwrap();
    let mut renderer = TerminalRenderer::new();
    renderer.render(0, &grid).unwrap();
}
