//! Boolean reachability grid produced by the move patterns.

use crate::game_state::chess_types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl MoveMatrix {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.rows && position.column < self.columns)
            .then_some(position.row * self.columns + position.column)
    }

    /// Mark a cell reachable. Off-grid positions are ignored.
    #[inline]
    pub fn mark(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.cells[index] = true;
        }
    }

    /// Off-grid positions are never reachable.
    #[inline]
    pub fn get(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.cells[index])
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.cells.iter().any(|&reachable| reachable)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&reachable| reachable).count()
    }

    /// Reachable cells in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &reachable)| reachable)
            .map(move |(index, _)| Position::new(index / columns, index % columns))
    }
}

#[cfg(test)]
mod tests {
    use super::MoveMatrix;
    use crate::game_state::chess_types::Position;

    #[test]
    fn marks_are_listed_in_row_major_order() {
        let mut matrix = MoveMatrix::new(3, 4);
        assert!(!matrix.any());

        matrix.mark(Position::new(2, 1));
        matrix.mark(Position::new(0, 3));
        matrix.mark(Position::new(5, 5));

        assert!(matrix.get(Position::new(0, 3)));
        assert!(!matrix.get(Position::new(5, 5)));
        assert_eq!(matrix.count(), 2);
        assert_eq!(
            matrix.positions().collect::<Vec<_>>(),
            vec![Position::new(0, 3), Position::new(2, 1)]
        );
    }
}
