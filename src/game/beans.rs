pub const BOARD_COLUMNS: usize = 10;
pub const BOARD_ROWS: usize = 5;
pub const BOARD_CELLS: usize = BOARD_COLUMNS * BOARD_ROWS;
/// Number of bean colors on the palette
pub const PALETTE_SIZE: usize = 8;

/// Palette index of a bean's color. Values outside `0..PALETTE_SIZE` are stored
/// as given.
pub type BeanColor = u8;

/// Beans placed by the player, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeanBoard {
    beans: Vec<BeanColor>,
}

impl BeanBoard {
    pub fn new() -> Self {
        BeanBoard { beans: Vec::new() }
    }

    pub fn from_beans(beans: Vec<BeanColor>) -> Self {
        BeanBoard { beans }
    }

    /// Append a bean at the end
    pub fn add(&mut self, color: BeanColor) {
        self.beans.push(color);
    }

    /// Remove the bean at `position`, shifting later beans down by one.
    /// Out-of-range positions are ignored.
    pub fn remove(&mut self, position: usize) -> Option<BeanColor> {
        if position < self.beans.len() {
            Some(self.beans.remove(position))
        } else {
            None
        }
    }

    pub fn count(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    /// Bean at `position`, if one is placed there
    pub fn get(&self, position: usize) -> Option<BeanColor> {
        self.beans.get(position).copied()
    }

    pub fn beans(&self) -> &[BeanColor] {
        &self.beans
    }

    pub fn clear(&mut self) {
        self.beans.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_first() {
        let mut board = BeanBoard::new();
        board.add(2);
        board.add(5);
        assert_eq!(board.remove(0), Some(2));
        assert_eq!(board, BeanBoard::from_beans(vec![5]));
    }

    #[test]
    fn test_remove_shifts_later_beans() {
        let mut board = BeanBoard::from_beans(vec![0, 1, 2, 3]);
        board.remove(1);
        assert_eq!(board.beans(), &[0, 2, 3]);
        assert_eq!(board.get(1), Some(2));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut board = BeanBoard::from_beans(vec![4, 4]);
        assert_eq!(board.remove(2), None);
        assert_eq!(board.remove(BOARD_CELLS), None);
        assert_eq!(board.count(), 2);
    }

    #[test]
    fn test_count_goes_past_visible_cells() {
        let mut board = BeanBoard::new();
        for i in 0..(BOARD_CELLS + 3) {
            board.add((i % PALETTE_SIZE) as BeanColor);
        }
        assert_eq!(board.count(), 53);
        board.clear();
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_accepts_any_color_index() {
        let mut board = BeanBoard::new();
        board.add(200);
        assert_eq!(board.get(0), Some(200));
    }
}
