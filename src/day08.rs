// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::interner::Interner;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Turn { Left, Right }

struct Network<'a> {
	turns: Vec<Turn>,
	names: Interner<'a>,
	/// Left & right successor per node id.
	nodes: Vec<[usize; 2]>,
}

#[derive(Debug, thiserror::Error)]
enum WalkError {
	#[error("no node named “{0}”")]
	Missing(String),
	#[error("no end node reachable from “{0}”")]
	Unreachable(String),
}

impl Network<'_> {
	/// The number of steps from `start` until the first node accepted by `is_end`.
	fn steps(&self, start: usize, is_end: impl Fn(&str) -> bool) -> Result<u64, WalkError> {
		// Revisiting a node at the same turn index means walking in circles
		let limit = self.turns.len() * self.nodes.len();
		let mut node = start;
		for (n, &turn) in self.turns.iter().cycle().enumerate().take(limit + 1) {
			if is_end(self.names.resolve(node)) { return Ok(n as u64) }
			node = self.nodes[node][turn as usize];
		}
		Err(WalkError::Unreachable(self.names.resolve(start).to_owned()))
	}
}


fn input_network_from_str(s: &str) -> Result<Network<'_>, parsing::NetworkError> {
	parsing::try_network_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let network = input_network_from_str(input)?;
	let start = network.names.get("AAA").ok_or_else(|| WalkError::Missing("AAA".to_owned()))?;
	Ok(network.steps(start, |name| name == "ZZZ")?)
}


/// Every ghost's path happens to loop back onto its end node with a period equal to
/// its first arrival, so the ghosts first meet at the least common multiple.
pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let network = input_network_from_str(input)?;
	let mut starts = network.names.names()
		.filter(|(_, name)| name.ends_with('A'))
		.peekable();
	anyhow::ensure!(starts.peek().is_some(), "No “…A” start nodes");
	starts.try_fold(1, |acc, (start, _)| -> anyhow::Result<u64> {
		let steps = network.steps(start, |name| name.ends_with('Z'))?;
		Ok(num_integer::lcm(acc, steps))
	})
}


mod parsing {
	use crate::interner::Interner;
	use super::{Network, Turn};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum NetworkError {
		#[error("invalid turn {0:?}")]
		Turn(char),
		#[error("no turns")]
		NoTurns,
		#[error("line {0}: expected “<node> = (<left>, <right>)”")]
		Node(usize),
		#[error("line {0}: node “{1}” is defined twice")]
		Duplicate(usize, String),
		#[error("node “{0}” is referenced but not defined")]
		Undefined(String),
	}

	pub(super) fn try_network_from_str(s: &str) -> Result<Network<'_>, NetworkError> {
		let mut lines = s.lines().enumerate();

		let turns = lines.next().map_or("", |(_, line)| line.trim())
			.chars()
			.map(|c| match c {
				'L' => Ok(Turn::Left),
				'R' => Ok(Turn::Right),
				_ => Err(NetworkError::Turn(c)),
			})
			.collect::<Result<Vec<_>, _>>()?;
		if turns.is_empty() { return Err(NetworkError::NoTurns) }

		let mut names = Interner::default();
		let mut nodes = Vec::new();
		let mut defined = Vec::new();
		for (l, line) in lines {
			if line.trim().is_empty() { continue }
			let (node, left, right) = line.split_once(" = (")
				.and_then(|(node, rest)| rest.strip_suffix(')')
					.and_then(|rest| rest.split_once(", "))
					.map(|(left, right)| (node, left, right)))
				.ok_or(NetworkError::Node(l + 1))?;
			let [node, left, right] = [node, left, right].map(|name| names.intern(name.trim()));
			let len = names.len();
			nodes.resize(len, [usize::MAX; 2]);
			defined.resize(len, false);
			if defined[node] { return Err(NetworkError::Duplicate(l + 1, names.resolve(node).to_owned())) }
			nodes[node] = [left, right];
			defined[node] = true;
		}
		if let Some(id) = defined.iter().position(|d| !d) {
			return Err(NetworkError::Undefined(names.resolve(id).to_owned()))
		}

		Ok(Network { turns, names, nodes })
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			RL

			AAA = (BBB, CCC)
			BBB = (DDD, EEE)
			CCC = (ZZZ, GGG)
			DDD = (DDD, DDD)
			EEE = (EEE, EEE)
			GGG = (GGG, GGG)
			ZZZ = (ZZZ, ZZZ)
		" },
		indoc::indoc! { "
			LLR

			AAA = (BBB, BBB)
			BBB = (AAA, ZZZ)
			ZZZ = (ZZZ, ZZZ)
		" },
		indoc::indoc! { "
			LR

			11A = (11B, XXX)
			11B = (XXX, 11Z)
			11Z = (11B, XXX)
			22A = (22B, XXX)
			22B = (22C, 22C)
			22C = (22Z, 22Z)
			22Z = (22B, 22B)
			XXX = (XXX, XXX)
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 2);
	assert_eq!(part1(INPUTS[1]).unwrap(), 6);
	assert_eq!(part2(INPUTS[2]).unwrap(), 6);
	assert!(part1(INPUTS[2]).is_err());
	assert!(part1("LR\n\nAAA = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)\n").is_err());
	assert!(part1("LR\n\nAAA = (BBB, ZZZ)\nZZZ = (ZZZ, ZZZ)\n").is_err());
	assert!(matches!(input_network_from_str("L\n\nAAA = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)\nAAA = (AAA, AAA)\n"),
		Err(parsing::NetworkError::Duplicate(5, _))));
	assert!(matches!(input_network_from_str(""), Err(parsing::NetworkError::NoTurns)));
}
