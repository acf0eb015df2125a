// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, GridError, Pos};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile { Path, Forest, Slope(Dir) }

#[derive(Debug, thiserror::Error)]
enum TrailError {
	#[error("no opening in the {0} row")]
	NoOpening(&'static str),
	#[error("{0} junctions don't fit a 64-bit visited set")]
	TooManyJunctions(usize),
}

/// The trail map reduced to its junctions (start & end included, as `0` & `1`),
/// connected by the lengths of the corridors between them.
struct Junctions {
	edges: Vec<Vec<(usize, u32)>>,
}

impl Junctions {
	fn new(map: &Grid<Tile>, slippery: bool) -> Result<Self, TrailError> {
		let opening = |y: usize, row| (0..map.width)
			.map(|x| [x, y])
			.find(|&pos| map[pos] == Tile::Path)
			.ok_or(TrailError::NoOpening(row));
		let (start, end) = (opening(0, "top")?, opening(map.height() - 1, "bottom")?);

		let open = |pos: Pos| map[pos] != Tile::Forest;
		let enterable = |pos: Pos, dir: Dir| match map[pos] {
			Tile::Path => true,
			Tile::Forest => false,
			Tile::Slope(slope) => !slippery || slope == dir,
		};

		let junctions = [start, end].into_iter()
			.chain(map.positions().filter(|&pos| open(pos)
				&& Dir::ALL.iter().filter_map(|&dir| map.step(pos, dir)).filter(|&next| open(next)).count() >= 3))
			.collect::<Vec<_>>();
		if junctions.len() > 64 { return Err(TrailError::TooManyJunctions(junctions.len())) }

		let mut edges = vec![Vec::new(); junctions.len()];
		for (from, &junction) in junctions.iter().enumerate() {
			for dir in Dir::ALL {
				let Some(mut pos) = map.step(junction, dir).filter(|&pos| enterable(pos, dir)) else { continue };
				let (mut prev, mut len) = (junction, 1);
				loop {
					if let Some(to) = junctions.iter().position(|&j| j == pos) {
						edges[from].push((to, len));
						break
					}
					let Some(next) = Dir::ALL.into_iter()
						.filter_map(|dir| map.step(pos, dir).filter(|&next| next != prev && enterable(next, dir)))
						.next() else { break };
					(prev, pos, len) = (pos, next, len + 1);
				}
			}
		}

		#[cfg(LOGGING)]
		println!("{} junctions, {} corridors", junctions.len(), edges.iter().map(Vec::len).sum::<usize>());

		Ok(Junctions { edges })
	}

	/// Explores every simple path from start to end with an explicit stack.
	fn longest_hike(&self) -> Option<u32> {
		const START: usize = 0;
		const END: usize = 1;

		// All hikes to the end pass through its only neighbour, so go straight there
		let last = match self.edges.iter().enumerate()
			.filter(|(_, edges)| edges.iter().any(|&(to, _)| to == END))
			.collect::<Vec<_>>()[..] {
			[(last, _)] => Some(last),
			_ => None,
		};

		let mut longest = None;
		let mut stack = vec![(START, 1u64 << START, 0)];
		while let Some((junction, visited, len)) = stack.pop() {
			if junction == END {
				longest = longest.max(Some(len));
				continue
			}
			for &(to, edge) in &self.edges[junction] {
				if visited & 1 << to != 0 { continue }
				if Some(junction) == last && to != END { continue }
				stack.push((to, visited | 1 << to, len + edge));
			}
		}
		longest
	}
}


fn input_map_from_str(s: &str) -> Result<Grid<Tile>, GridError> {
	Grid::try_from_str_with(s, |_, b| match b {
		b'.' => Some(Tile::Path),
		b'#' => Some(Tile::Forest),
		b'^' => Some(Tile::Slope(Dir::Up)),
		b'v' => Some(Tile::Slope(Dir::Down)),
		b'<' => Some(Tile::Slope(Dir::Left)),
		b'>' => Some(Tile::Slope(Dir::Right)),
		_ => None,
	})
}


fn part_impl(input: &str, slippery: bool) -> anyhow::Result<u32> {
	let junctions = Junctions::new(&input_map_from_str(input)?, slippery)?;
	junctions.longest_hike().ok_or_else(|| anyhow::anyhow!("No hike reaches the bottom row"))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	part_impl(input, true)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	part_impl(input, false)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.#####################
		#.......#########...###
		#######.#########.#.###
		###.....#.>.>.###.#.###
		###v#####.#v#.###.#.###
		###.>...#.#.#.....#...#
		###v###.#.#.#########.#
		###...#.#.#.......#...#
		#####.#.#.#######.#.###
		#.....#.#.#.......#...#
		#.#####.#.#.#########v#
		#.#...#...#...###...>.#
		#.#.#v#######v###.###v#
		#...#.>.#...>.>.#.###.#
		#####v#.#.###v#.#.###.#
		#.....#...#...#.#.#...#
		#.#########.###.#.#.###
		#...###...#...#...#.###
		###.###.#.###v#####v###
		#...#...#.#.>.>.#.>.###
		#.###.###.#.###.#.#v###
		#.....###...###...#...#
		#####################.#
	" };
	assert_eq!(part1(INPUT).unwrap(), 94);
	assert_eq!(part2(INPUT).unwrap(), 154);
	assert_eq!(Junctions::new(&input_map_from_str(INPUT).unwrap(), true).unwrap().edges.len(), 9);
	assert!(part1("#.#\n###\n").is_err());
}
