use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Smallest accepted number of rows or columns.
pub const MIN_FIELD_SIZE: Coord = 5;

/// Largest accepted number of rows or columns.
pub const MAX_FIELD_SIZE: Coord = 10;

/// Chance for any generated cell to be a hole.
pub const DEFAULT_HOLE_PROBABILITY: f64 = 0.2;

/// Validates a field dimension typed by the player.
///
/// Surrounding whitespace is ignored, the rest must be a finite number within
/// [`MIN_FIELD_SIZE`]`..=`[`MAX_FIELD_SIZE`]. Fractions are truncated.
pub fn parse_field_size(text: &str) -> Result<Coord> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GameError::EmptySize);
    }

    let value: f64 = text.parse().map_err(|_| GameError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(GameError::InvalidNumber);
    }
    check_field_size(value)
}

fn check_field_size(value: f64) -> Result<Coord> {
    if (f64::from(MIN_FIELD_SIZE)..=f64::from(MAX_FIELD_SIZE)).contains(&value) {
        // in range, so the truncation fits a Coord
        Ok(value as Coord)
    } else {
        Err(GameError::SizeOutOfRange { value })
    }
}

fn check_probability(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GameError::InvalidProbability(value))
    }
}

/// Settings for one session, fixed once the session is created.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub hole_probability: f64,
}

impl FieldConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, hole_probability: f64) -> Self {
        Self {
            rows,
            cols,
            hole_probability,
        }
    }

    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        let rows = check_field_size(rows.into())?;
        let cols = check_field_size(cols.into())?;
        Ok(Self::new_unchecked(rows, cols, DEFAULT_HOLE_PROBABILITY))
    }

    pub fn with_hole_probability(self, hole_probability: f64) -> Result<Self> {
        Ok(Self {
            hole_probability: check_probability(hole_probability)?,
            ..self
        })
    }

    /// Re-checks a config that bypassed [`FieldConfig::new`], e.g. one built
    /// with `new_unchecked` or deserialized.
    pub fn validate(&self) -> Result<()> {
        check_field_size(self.rows.into())?;
        check_field_size(self.cols.into())?;
        check_probability(self.hole_probability)?;
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }
}

/// The playing grid, addressed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    cells: Array2<Cell>,
}

impl Field {
    pub fn filled(size: Coord2, cell: Cell) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), cell),
        }
    }

    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 || Coord::try_from(rows).is_err() || Coord::try_from(cols).is_err()
        {
            return Err(GameError::InvalidFieldShape);
        }
        Ok(Self { cells })
    }

    /// Builds a field from one string of cell glyphs per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or(GameError::InvalidFieldShape)?;

        let mut glyphs = Vec::with_capacity(rows.len() * width);
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(GameError::InvalidFieldShape);
            }
            for glyph in row.chars() {
                glyphs.push(Cell::from_glyph(glyph).ok_or(GameError::UnknownGlyph(glyph))?);
            }
        }

        let cells = Array2::from_shape_vec((rows.len(), width), glyphs)
            .map_err(|_| GameError::InvalidFieldShape)?;
        Self::from_cells(cells)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // from_cells guarantees both dimensions fit a Coord
        (rows as Coord, cols as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(core::mem::replace(&mut self[coords], cell))
    }

    pub fn count(&self, cell: Cell) -> CellCount {
        // at most Coord::MAX squared cells
        self.cells.iter().filter(|&&c| c == cell).count() as CellCount
    }

    pub fn position_of(&self, cell: Cell) -> Option<Coord2> {
        self.cells
            .indexed_iter()
            .find(|&(_, &c)| c == cell)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }

    /// Text form of the field, one line per row and no separators.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl Index<Coord2> for Field {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Field {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_size_accepts_bounds_and_surrounding_space() {
        assert_eq!(parse_field_size("5"), Ok(5));
        assert_eq!(parse_field_size("10"), Ok(10));
        assert_eq!(parse_field_size("  7 "), Ok(7));
    }

    #[test]
    fn field_size_accepts_any_number_in_range() {
        assert_eq!(parse_field_size("5.5"), Ok(5));
        assert_eq!(parse_field_size("9.99"), Ok(9));
        assert_eq!(parse_field_size("1e1"), Ok(10));
        assert_eq!(parse_field_size("+7"), Ok(7));
        assert_eq!(
            parse_field_size("10.5"),
            Err(GameError::SizeOutOfRange { value: 10.5 })
        );
        assert_eq!(
            parse_field_size("4.9"),
            Err(GameError::SizeOutOfRange { value: 4.9 })
        );
    }

    #[test]
    fn field_size_rejects_bad_input() {
        assert_eq!(parse_field_size(""), Err(GameError::EmptySize));
        assert_eq!(parse_field_size("   "), Err(GameError::EmptySize));
        assert_eq!(parse_field_size("abc"), Err(GameError::InvalidNumber));
        assert_eq!(parse_field_size("NaN"), Err(GameError::InvalidNumber));
        assert_eq!(parse_field_size("inf"), Err(GameError::InvalidNumber));
        assert_eq!(parse_field_size("6 7"), Err(GameError::InvalidNumber));
        assert_eq!(
            parse_field_size("4"),
            Err(GameError::SizeOutOfRange { value: 4.0 })
        );
        assert_eq!(
            parse_field_size("11"),
            Err(GameError::SizeOutOfRange { value: 11.0 })
        );
        assert_eq!(
            parse_field_size("-7"),
            Err(GameError::SizeOutOfRange { value: -7.0 })
        );
    }

    #[test]
    fn config_checks_size_and_probability() {
        let config = FieldConfig::new(5, 8).unwrap();
        assert_eq!(config.size(), (5, 8));
        assert_eq!(config.hole_probability, DEFAULT_HOLE_PROBABILITY);

        assert_eq!(
            FieldConfig::new(3, 8),
            Err(GameError::SizeOutOfRange { value: 3.0 })
        );
        assert_eq!(
            config.with_hole_probability(1.5),
            Err(GameError::InvalidProbability(1.5))
        );
        assert_eq!(config.with_hole_probability(0.0).unwrap().hole_probability, 0.0);
    }

    #[test]
    fn field_renders_rows_without_separators() {
        let field = Field::from_rows(&["*░O", "░^░"]).unwrap();

        assert_eq!(field.size(), (2, 3));
        assert_eq!(field.render(), "*░O\n░^░");
        assert_eq!(field[(0, 2)], Cell::Hole);
        assert_eq!(field.position_of(Cell::Carrot), Some((1, 1)));
    }

    #[test]
    fn field_from_rows_rejects_bad_shapes() {
        assert_eq!(
            Field::from_rows(&["░░", "░"]),
            Err(GameError::InvalidFieldShape)
        );
        assert_eq!(
            Field::from_rows::<&str>(&[]),
            Err(GameError::InvalidFieldShape)
        );
        assert_eq!(Field::from_rows(&["░x"]), Err(GameError::UnknownGlyph('x')));
    }

    #[test]
    fn set_reports_previous_cell_and_checks_bounds() {
        let mut field = Field::filled((5, 5), Cell::Grass);

        assert_eq!(field.set((1, 1), Cell::Hole), Ok(Cell::Grass));
        assert_eq!(field.get((1, 1)), Some(Cell::Hole));
        assert_eq!(field.set((5, 0), Cell::Hole), Err(GameError::InvalidCoords));
        assert_eq!(field.get((0, 5)), None);
    }
}
