use crate::*;
pub use random::*;

mod random;

/// Uniform randomness used to lay out a field.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..bound`, or `0` when `bound` is zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Terrain plus the spot the carrot should be planted on.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldLayout {
    pub terrain: Field,
    pub carrot: Coord2,
}

pub trait FieldGenerator {
    fn generate(self, config: &FieldConfig) -> FieldLayout;
}
