use life_engine::patterns;
use life_engine::{step, Grid};

fn main() {
    // Seed a glider near the top left corner of an otherwise empty grid
    let glider = patterns::find("glider").unwrap();
    let mut grid = Grid::new(12, 12).unwrap().seed(&glider.translated((1, 1))).unwrap();

    // Every call to `step` returns a new grid and leaves the old one untouched
    for generation in 0..8 {
        println!("Generation {} ({} alive)", generation, grid.population());
        print!("{}", grid);
        grid = step(&grid);
    }

    println!("\nAlive cells after 8 generations: {:?}", grid.alive_cells());
}
