// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::{Index, IndexMut};


/// `[x, y]`, with `y` growing downwards.
pub(crate) type Pos = [usize; 2];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Dir { Up, Down, Left, Right }

impl Dir {
	pub(crate) const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

	pub(crate) fn reverse(self) -> Self {
		use Dir::*;
		match self { Up => Down, Down => Up, Left => Right, Right => Left }
	}

	pub(crate) fn delta(self) -> [isize; 2] {
		use Dir::*;
		match self { Up => [0, -1], Down => [0, 1], Left => [-1, 0], Right => [1, 0] }
	}

	pub(crate) fn is_vertical(self) -> bool {
		matches!(self, Dir::Up | Dir::Down)
	}
}


#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Grid<T> {
	pub(crate) cells: Vec<T>,
	pub(crate) width: usize,
}

impl<T> Grid<T> {
	pub(crate) fn height(&self) -> usize {
		if self.width == 0 { 0 } else { self.cells.len() / self.width }
	}

	pub(crate) fn contains(&self, [x, y]: Pos) -> bool {
		x < self.width && y < self.height()
	}

	pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
		self.contains(pos).then(|| &self.cells[pos[1] * self.width + pos[0]])
	}

	pub(crate) fn pos(&self, idx: usize) -> Pos {
		[idx % self.width, idx / self.width]
	}

	pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
		(0..self.cells.len()).map(|i| self.pos(i))
	}

	/// The in-bounds neighbour of `pos` in direction `dir`.
	pub(crate) fn step(&self, [x, y]: Pos, dir: Dir) -> Option<Pos> {
		let [dx, dy] = dir.delta();
		let pos = [x.checked_add_signed(dx)?, y.checked_add_signed(dy)?];
		self.contains(pos).then_some(pos)
	}

	pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
		self.cells.chunks(self.width)
	}

	/// Parses a rectangular block of ASCII lines, mapping every byte through `cell`.
	pub(crate) fn try_from_str_with(
		s: &str,
		mut cell: impl FnMut(Pos, u8) -> Option<T>,
	) -> Result<Self, GridError> {
		let mut cells = Vec::new();
		let mut width = None;
		for (l, line) in s.lines().enumerate() {
			let line = line.trim_end();
			match width {
				None => width = Some(line.len()),
				Some(w) if w != line.len() =>
					return Err(GridError::Width { line: l + 1, expected: w, found: line.len() }),
				_ => (),
			}
			for (c, b) in line.bytes().enumerate() {
				cells.push(cell([c, l], b)
					.ok_or(GridError::Cell { line: l + 1, column: c + 1, found: b as char })?);
			}
		}
		match width {
			Some(width) if width > 0 => Ok(Grid { cells, width }),
			_ => Err(GridError::Empty),
		}
	}
}

impl<T> Index<Pos> for Grid<T> {
	type Output = T;
	fn index(&self, [x, y]: Pos) -> &Self::Output {
		&self.cells[y * self.width + x]
	}
}

impl<T> IndexMut<Pos> for Grid<T> {
	fn index_mut(&mut self, [x, y]: Pos) -> &mut Self::Output {
		&mut self.cells[y * self.width + x]
	}
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum GridError {
	#[error("empty grid")]
	Empty,
	#[error("line {line}: expected width {expected}, found {found}")]
	Width { line: usize, expected: usize, found: usize },
	#[error("line {line}, column {column}: unexpected {found:?}")]
	Cell { line: usize, column: usize, found: char },
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parsing() {
		let grid = Grid::try_from_str_with("12\n34\n56\n", |_, b| Some(b - b'0')).unwrap();
		assert_eq!((grid.width, grid.height()), (2, 3));
		assert_eq!(grid[[1, 2]], 6);
		assert_eq!(grid.step([0, 0], Dir::Up), None);
		assert_eq!(grid.step([0, 0], Dir::Right), Some([1, 0]));
		assert_eq!(grid.step([1, 1], Dir::Right), None);
		assert!(matches!(Grid::try_from_str_with("12\n3\n", |_, b| Some(b)),
			Err(GridError::Width { line: 2, expected: 2, found: 1 })));
		assert!(matches!(Grid::try_from_str_with("1x\n", |_, b| b.is_ascii_digit().then_some(b)),
			Err(GridError::Cell { line: 1, column: 2, found: 'x' })));
		assert!(matches!(Grid::<u8>::try_from_str_with("", |_, b| Some(b)), Err(GridError::Empty)));
	}
}
