use std::time::Duration;

use life_core::{
    Grid, LifeConfig, ManualClock, Observation, PointerMapper, RowEdges, Simulation, TextCanvas,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sim_with(clock: &ManualClock, seed: u64) -> Simulation<StdRng, &ManualClock> {
    Simulation::new(LifeConfig::default(), 24, 16, StdRng::seed_from_u64(seed), clock).unwrap()
}

#[test]
fn same_seed_gives_same_history() {
    let clock = ManualClock::default();
    let mut a = sim_with(&clock, 99);
    let mut b = sim_with(&clock, 99);
    for _ in 0..50 {
        a.tick();
        b.tick();
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn oscillator_is_caught_within_history_window() {
    let clock = ManualClock::default();
    let mut sim = sim_with(&clock, 1);
    *sim.grid_mut() = Grid::from_alive(24, 16, &[(10, 8), (11, 8), (12, 8)]).unwrap();

    // Blinker: two fresh states, then every tick repeats one of them
    assert_eq!(sim.tick().observation, Observation::Recorded);
    assert_eq!(sim.tick().observation, Observation::Recorded);
    for _ in 0..20 {
        clock.advance(Duration::from_millis(100));
        let report = sim.tick();
        assert_eq!(report.observation, Observation::RepeatSuppressed);
    }
    assert_eq!(sim.monitor().len(), 2);

    clock.advance(Duration::from_secs(9));
    let report = sim.tick();
    assert!(report.restarted);
    assert_eq!(sim.restarts(), 1);
    assert!(sim.monitor().is_empty());
}

#[test]
fn long_run_never_grows_history_past_capacity() {
    let clock = ManualClock::default();
    let mut sim = sim_with(&clock, 7);
    for _ in 0..500 {
        clock.advance(Duration::from_millis(16));
        sim.tick();
        assert!(sim.monitor().len() <= 10);
    }
}

#[test]
fn click_pipeline_seeds_under_pointer() {
    let clock = ManualClock::default();
    let config = LifeConfig {
        seed_radius: 0,
        ..LifeConfig::default()
    };
    let mut sim = Simulation::for_viewport(config, 240.0, 160.0, StdRng::seed_from_u64(3), &clock)
        .unwrap();
    *sim.grid_mut() = Grid::new(24, 16).unwrap();

    let mapper = PointerMapper::unscaled((0.0, 0.0), (240.0, 160.0), 10.0);
    let (col, row) = mapper.cell_at(125.0, 47.0, 24, 16).unwrap();
    sim.seed_at(col, row).unwrap();

    assert_eq!(sim.grid().iter_alive().collect::<Vec<_>>(), vec![(12, 4)]);
}

#[test]
fn glider_crosses_the_column_seam() {
    // Glider heading right; after 4 generations it moves one cell right and down
    let cells = [(3, 1), (4, 2), (2, 3), (3, 3), (4, 3)];
    let mut grid = Grid::from_alive(6, 8, &cells).unwrap();
    for _ in 0..12 {
        grid = grid.step();
    }
    let shifted: Vec<(usize, usize)> = cells.iter().map(|&(c, r)| ((c + 3) % 6, r + 3)).collect();
    assert_eq!(grid, Grid::from_alive(6, 8, &shifted).unwrap());
}

#[test]
fn wrapped_world_text_render() {
    let grid = Grid::from_alive(3, 3, &[(1, 0), (1, 1), (1, 2)])
        .unwrap()
        .with_row_edges(RowEdges::Wrap);
    // On a fully wrapped 3x3 every cell sees all three live cells (or two plus itself)
    let next = grid.step();
    assert_eq!(TextCanvas::from_grid(&next).to_string(), "###\n###\n###\n");
}
