use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.random()
    }

    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.0.random_range(0..bound)
    }
}

/// Replays fixed draws, for reproducible layouts.
///
/// Once a queue runs dry, unit draws yield grass-leaning `0.99` and index
/// draws yield `0`. Index draws larger than the bound are clamped to it.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(
        units: impl IntoIterator<Item = f64>,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            units: units.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.99)
    }

    fn below(&mut self, bound: usize) -> usize {
        self.indices
            .pop_front()
            .unwrap_or(0)
            .min(bound.saturating_sub(1))
    }
}

/// Every cell is independently a hole with the configured probability, the
/// carrot lands on any cell with equal chance. No reachability is promised.
#[derive(Clone, Debug)]
pub struct RandomFieldGenerator<S> {
    source: S,
}

impl<S: RandomSource> RandomFieldGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: RandomSource> FieldGenerator for RandomFieldGenerator<S> {
    fn generate(mut self, config: &FieldConfig) -> FieldLayout {
        let probability = config.hole_probability;
        if probability >= 1.0 {
            log::warn!("Hole probability is {probability}, every cell will be a hole");
        }

        let mut terrain = Field::filled(config.size(), Cell::Grass);
        for row in 0..config.rows {
            for col in 0..config.cols {
                if self.source.unit() <= probability {
                    terrain[(row, col)] = Cell::Hole;
                }
            }
        }

        // row first, then column
        let carrot_row = self.source.below(config.rows.into());
        let carrot_col = self.source.below(config.cols.into());
        // below() stays under the bound, which is a Coord
        let carrot = (carrot_row as Coord, carrot_col as Coord);

        log::debug!(
            "Generated {}x{} field with {} holes, carrot at {:?}",
            config.rows,
            config.cols,
            terrain.count(Cell::Hole),
            carrot
        );
        FieldLayout { terrain, carrot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: Coord, cols: Coord) -> FieldConfig {
        FieldConfig::new(rows, cols).unwrap()
    }

    #[test]
    fn generated_terrain_matches_size_and_holds_only_terrain() {
        for seed in 0..32 {
            let layout = RandomFieldGenerator::new(RngSource::from_seed(seed))
                .generate(&config(7, 9));

            assert_eq!(layout.terrain.size(), (7, 9));
            assert!(layout.terrain.rows().flatten().all(Cell::is_terrain));
            assert!(layout.carrot.0 < 7 && layout.carrot.1 < 9);
        }
    }

    #[test]
    fn unit_draw_at_or_below_probability_digs_a_hole() {
        // 0.2 is exactly the threshold and still a hole
        let units = [0.2, 0.21, 0.0, 0.9, 0.19];
        let source = ScriptedSource::new(units, [3, 4]);

        let layout = RandomFieldGenerator::new(source).generate(&config(5, 5));

        assert_eq!(layout.terrain[(0, 0)], Cell::Hole);
        assert_eq!(layout.terrain[(0, 1)], Cell::Grass);
        assert_eq!(layout.terrain[(0, 2)], Cell::Hole);
        assert_eq!(layout.terrain[(0, 3)], Cell::Grass);
        assert_eq!(layout.terrain[(0, 4)], Cell::Hole);
        assert_eq!(layout.terrain.count(Cell::Hole), 3);
        assert_eq!(layout.carrot, (3, 4));
    }

    #[test]
    fn probability_extremes() {
        let all_holes = config(5, 5).with_hole_probability(1.0).unwrap();
        let layout = RandomFieldGenerator::new(RngSource::from_seed(7)).generate(&all_holes);
        assert_eq!(layout.terrain.count(Cell::Hole), 25);

        let no_holes = config(5, 5).with_hole_probability(0.0).unwrap();
        let source = ScriptedSource::new([0.5; 25], []);
        let layout = RandomFieldGenerator::new(source).generate(&no_holes);
        assert_eq!(layout.terrain.count(Cell::Hole), 0);
        assert_eq!(layout.carrot, (0, 0));
    }

    #[test]
    fn scripted_indices_are_clamped_to_bound() {
        let mut source = ScriptedSource::new([], [12]);

        assert_eq!(source.below(5), 4);
        assert_eq!(source.below(5), 0);
    }

    #[test]
    fn zero_bound_draws_zero() {
        let mut source = RngSource::from_seed(9);

        assert_eq!(source.below(0), 0);
        assert!(source.below(3) < 3);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = RandomFieldGenerator::new(RngSource::from_seed(42)).generate(&config(10, 10));
        let b = RandomFieldGenerator::new(RngSource::from_seed(42)).generate(&config(10, 10));

        assert_eq!(a, b);
    }
}
