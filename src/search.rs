// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Dijkstra over grid states that remember how they were entered, so that callers
//! can constrain turning and stopping on the direction history.

use crate::grid::{Dir, Grid, Pos};


/// A node of the expanded search graph. The start state has no direction and a
/// zero run length, so its first move is unconstrained.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct SearchState {
	pub(crate) pos: Pos,
	pub(crate) dir: Option<Dir>,
	pub(crate) run: u32,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Error {
	#[error("position {0:?} is outside the grid")]
	OutOfBounds(Pos),
	#[error("no state satisfying the stopping condition is reachable")]
	NoPathFound,
}


/// Heap entry; cheapest first, ties broken on every state field so that `Ord`
/// agrees with `Eq`.
#[derive(PartialEq, Eq, Debug)]
struct Queued {
	cost: u64,
	state: SearchState,
}

impl PartialOrd for Queued {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Queued {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.cost.cmp(&other.cost).reverse()
			.then_with(|| self.state.pos.cmp(&other.state.pos))
			.then_with(|| self.state.run.cmp(&other.state.run))
			.then_with(|| self.state.dir.map(|d| d as u8).cmp(&other.state.dir.map(|d| d as u8)))
	}
}


/// Returns the lowest accumulated cost (entering a cell costs its value) of any
/// path from `start` to a state accepted by `stop`.
///
/// `steer(next, last, run)` decides whether the searcher may move in direction
/// `next` after `run` consecutive moves in direction `last`; reversing is never
/// allowed. `stop(pos, target, run)` decides whether a state counts as a goal.
pub(crate) fn min_cost<T, S, F>(
	grid: &Grid<T>,
	start: Pos,
	target: Pos,
	steer: S,
	stop: F,
) -> Result<u64, Error>
where
	T: Copy + Into<u64>,
	S: Fn(Dir, Option<Dir>, u32) -> bool,
	F: Fn(Pos, Pos, u32) -> bool,
{
	use std::collections::{BinaryHeap, HashMap, hash_map::Entry::*};

	for pos in [start, target] {
		if !grid.contains(pos) { return Err(Error::OutOfBounds(pos)) }
	}

	let mut heap = BinaryHeap::new();
	let mut visited = HashMap::new();
	let mut best = None::<u64>;

	heap.push(Queued { cost: 0, state: SearchState { pos: start, dir: None, run: 0 } });

	while let Some(Queued { cost, state }) = heap.pop() {
		match visited.entry(state) {
			Occupied(_) => continue,
			Vacant(entry) => _ = entry.insert(cost),
		}

		if stop(state.pos, target, state.run) {
			best = Some(best.map_or(cost, |best| best.min(cost)));
		}

		for next in Dir::ALL {
			if state.dir == Some(next.reverse()) { continue }
			if !steer(next, state.dir, state.run) { continue }
			let Some(pos) = grid.step(state.pos, next) else { continue };
			let run = if state.dir == Some(next) { state.run.saturating_add(1) } else { 1 };
			let next_state = SearchState { pos, dir: Some(next), run };
			if visited.contains_key(&next_state) { continue }
			heap.push(Queued { cost: cost + grid[pos].into(), state: next_state });
		}
	}

	#[cfg(LOGGING)]
	println!("Finalized {} search states", visited.len());

	best.ok_or(Error::NoPathFound)
}


#[cfg(test)]
mod tests {
	use super::*;

	fn unconstrained(_: Dir, _: Option<Dir>, _: u32) -> bool { true }
	fn at_target(pos: Pos, target: Pos, _: u32) -> bool { pos == target }

	fn uniform(width: usize, height: usize, cost: u8) -> Grid<u8> {
		Grid { cells: vec![cost; width * height], width }
	}

	#[test]
	fn queue_order_matches_equality() {
		let queued = |cost, dir| Queued { cost, state: SearchState { pos: [1, 1], dir, run: 1 } };
		let (up, down) = (queued(3, Some(Dir::Up)), queued(3, Some(Dir::Down)));
		assert_ne!(up, down);
		assert_ne!(up.cmp(&down), std::cmp::Ordering::Equal);
		assert_eq!(up.cmp(&queued(3, Some(Dir::Up))), std::cmp::Ordering::Equal);
		assert!(queued(2, None) > queued(3, None));
	}

	#[test]
	fn two_by_two() {
		assert_eq!(min_cost(&uniform(2, 2, 1), [0, 0], [1, 1], unconstrained, at_target), Ok(2));
	}

	#[test]
	fn manhattan() {
		let grid = uniform(7, 5, 1);
		for (start, target) in [([0usize, 0], [6, 4]), ([3, 2], [3, 2]), ([6, 0], [1, 3]), ([2, 4], [5, 4])] {
			let manhattan = start[0].abs_diff(target[0]) + start[1].abs_diff(target[1]);
			assert_eq!(min_cost(&grid, start, target, unconstrained, at_target), Ok(manhattan as u64));
		}
	}

	#[test]
	fn monotone_in_costs() {
		let mut grid = Grid { cells: (0..30u8).map(|i| i % 7 + 1).collect(), width: 6 };
		let mut prev = min_cost(&grid, [0, 0], [5, 4], unconstrained, at_target).unwrap();
		for i in [3, 8, 14, 20, 27, 29] {
			grid.cells[i] += 4;
			let cost = min_cost(&grid, [0, 0], [5, 4], unconstrained, at_target).unwrap();
			assert!(cost >= prev);
			prev = cost;
		}
	}

	#[test]
	fn failures() {
		let grid = uniform(3, 3, 1);
		assert_eq!(min_cost(&grid, [0, 0], [3, 0], unconstrained, at_target), Err(Error::OutOfBounds([3, 0])));
		assert_eq!(min_cost(&grid, [0, 0], [2, 2], unconstrained, |_, _, run| run > 5), Err(Error::NoPathFound));
	}

	#[test]
	fn steering() {
		// At most one move in a direction before turning: a staircase.
		let grid = uniform(4, 4, 1);
		let zigzag = |next, last, run| Some(next) != last || run < 1;
		assert_eq!(min_cost(&grid, [0, 0], [3, 3], zigzag, at_target), Ok(6));
		// Never moving straight, reaching [3, 0] needs detours.
		assert_eq!(min_cost(&grid, [0, 0], [3, 0], zigzag, at_target), Ok(5));
	}
}
