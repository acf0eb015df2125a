// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, Pos};


/// Marks every cell 4-connected to `seed` through open cells (row-major result).
/// An occupied seed marks nothing.
pub(crate) fn fill(width: usize, height: usize, seed: Pos, is_open: impl Fn(Pos) -> bool) -> Vec<bool> {
	let mut filled = vec![false; width * height];
	let mut stack = vec![seed];
	while let Some([x, y]) = stack.pop() {
		if x >= width || y >= height { continue }
		let idx = y * width + x;
		if filled[idx] || !is_open([x, y]) { continue }
		filled[idx] = true;
		for [dx, dy] in Dir::ALL.map(Dir::delta) {
			if let (Some(x), Some(y)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
				stack.push([x, y]);
			}
		}
	}
	filled
}


/// Expands from `start` over the grid repeated infinitely in both directions.
/// Element `n` of the result is the number of cells reachable in exactly `n` steps.
pub(crate) fn frontier_counts<T>(grid: &Grid<T>, start: Pos, is_open: impl Fn(&T) -> bool, steps: usize) -> Vec<usize> {
	use std::collections::HashSet;

	let (w, h) = (grid.width as isize, grid.height() as isize);
	let wrapped = |[x, y]: [isize; 2]| [x.rem_euclid(w) as usize, y.rem_euclid(h) as usize];

	// Cells reachable in `n` steps are those first reached in `n`, `n - 2`, … steps.
	let mut seen = HashSet::new();
	let mut frontier = vec![[start[0] as isize, start[1] as isize]];
	seen.insert(frontier[0]);
	let mut counts = Vec::with_capacity(steps + 1);
	for n in 0..=steps {
		let parity_total = if n >= 2 { counts[n - 2] } else { 0 };
		counts.push(parity_total + frontier.len());

		let mut next = Vec::new();
		for [x, y] in frontier {
			for [dx, dy] in Dir::ALL.map(Dir::delta) {
				let pos = [x + dx, y + dy];
				if is_open(&grid[wrapped(pos)]) && seen.insert(pos) { next.push(pos) }
			}
		}
		frontier = next;
	}

	#[cfg(LOGGING)]
	println!("Visited {} cells in {steps} steps", seen.len());

	counts
}


/// The quadratic through `(0, g0)`, `(1, g1)`, & `(2, g2)`, kept in Newton form
/// so that evaluating at integers stays exact.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Quadratic { g0: i64, d1: i64, d2: i64 }

impl Quadratic {
	pub(crate) fn fit([g0, g1, g2]: [i64; 3]) -> Self {
		Quadratic { g0, d1: g1 - g0, d2: g2 - 2 * g1 + g0 }
	}

	pub(crate) fn eval(&self, n: i64) -> i64 {
		self.g0 + n * self.d1 + n * (n - 1) / 2 * self.d2
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const MAZE: &str = indoc::indoc! { "
		......
		.####.
		.#..#.
		.#..#.
		.####.
		..#...
	" };

	fn maze() -> Grid<bool> {
		Grid::try_from_str_with(MAZE, |_, b| Some(b == b'.')).unwrap()
	}

	#[test]
	fn connected_component() {
		let grid = maze();
		let fill = |seed| fill(grid.width, grid.height(), seed, |p| grid[p]);
		let outer = fill([0, 0]);
		assert_eq!(outer.iter().filter(|&&f| f).count(), 19);
		assert!(outer[5 * 6 + 3]);
		assert!(!outer[2 * 6 + 2]);
		assert_eq!(fill([5, 5]), outer);
		assert_eq!(fill([5, 0]), outer);

		let inner = fill([2, 2]);
		assert_eq!(inner.iter().filter(|&&f| f).count(), 4);
		assert_eq!(fill([3, 3]), inner);
		assert!(outer.iter().zip(&inner).all(|(o, i)| !(o & i)));

		assert!(fill([1, 1]).iter().all(|&f| !f));
	}

	#[test]
	fn open_plane() {
		let grid = Grid { cells: vec![true; 25], width: 5 };
		let counts = frontier_counts(&grid, [2, 2], |&open| open, 30);
		for (n, &count) in counts.iter().enumerate() {
			assert_eq!(count, (n + 1) * (n + 1));
		}
	}

	#[test]
	fn quadratic() {
		let f = |n: i64| 3 * n * n - 7 * n + 11;
		let q = Quadratic::fit([f(0), f(1), f(2)]);
		for n in [0, 1, 2, 3, 10, 202_300] {
			assert_eq!(q.eval(n), f(n));
		}
		// Half-integer leading coefficient
		let q = Quadratic::fit([0, 1, 3]);
		assert_eq!(q.eval(4), 10);
	}
}
