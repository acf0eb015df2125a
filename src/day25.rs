// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use rand::{rngs::SmallRng, seq::SliceRandom as _, SeedableRng as _};


/// A multigraph of merged components; `sizes[v]` counts the input components
/// merged into vertex `v`.
#[derive(Clone, Debug)]
struct Contraction {
	sizes: Vec<usize>,
	edges: Vec<[usize; 2]>,
}

fn find(parents: &mut [usize], mut v: usize) -> usize {
	while parents[v] != v {
		parents[v] = parents[parents[v]];
		v = parents[v];
	}
	v
}

impl Contraction {
	/// Merges the ends of randomly picked edges until `target` vertices remain (or
	/// no edges connect distinct vertices any more).
	fn contract(&self, target: usize, rng: &mut SmallRng) -> Contraction {
		let mut edges = self.edges.clone();
		edges.shuffle(rng);
		let mut parents = (0..self.sizes.len()).collect::<Vec<_>>();
		let mut remaining = self.sizes.len();
		for &[a, b] in &edges {
			if remaining <= target { break }
			let (a, b) = (find(&mut parents, a), find(&mut parents, b));
			if a == b { continue }
			parents[b] = a;
			remaining -= 1;
		}

		let mut labels = vec![usize::MAX; self.sizes.len()];
		let mut sizes = Vec::with_capacity(remaining);
		for v in 0..self.sizes.len() {
			let root = find(&mut parents, v);
			if labels[root] == usize::MAX {
				labels[root] = sizes.len();
				sizes.push(0);
			}
			sizes[labels[root]] += self.sizes[v];
		}
		let edges = edges.into_iter()
			.map(|[a, b]| [labels[find(&mut parents, a)], labels[find(&mut parents, b)]])
			.filter(|[a, b]| a != b)
			.collect();
		Contraction { sizes, edges }
	}

	/// Karger–Stein: contract to about `n / √2` vertices twice independently and
	/// recurse on both, keeping the smaller cut.
	fn min_cut(&self, rng: &mut SmallRng) -> Contraction {
		let n = self.sizes.len();
		if n <= 6 { return self.contract(2, rng) }
		let target = (1.0 + n as f64 / std::f64::consts::SQRT_2).ceil() as usize;
		let mut branch = || {
			let contracted = self.contract(target, rng);
			// Disconnected leftovers can't shrink any further
			if contracted.sizes.len() < n { contracted.min_cut(rng) } else { contracted }
		};
		let (a, b) = (branch(), branch());
		if a.edges.len() <= b.edges.len() { a } else { b }
	}
}

#[derive(Debug, thiserror::Error)]
#[error("no cut of {wires} wires found in {tries} tries")]
struct NoCutFound { wires: usize, tries: usize }


fn input_wiring_from_str(s: &str) -> Result<Contraction, parsing::WiringError> {
	parsing::try_wiring_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	const WIRES: usize = 3;
	const TRIES: usize = 100;

	let wiring = input_wiring_from_str(input)?;
	let mut rng = SmallRng::seed_from_u64(2023);
	for _try in 0..TRIES {
		let cut = wiring.min_cut(&mut rng);

		#[cfg(LOGGING)]
		println!("Try {_try}: cut of {} wires", cut.edges.len());

		if cut.sizes.len() == 2 && cut.edges.len() == WIRES {
			return Ok(cut.sizes.iter().product())
		}
	}
	Err(NoCutFound { wires: WIRES, tries: TRIES }.into())
}


mod parsing {
	use crate::interner::Interner;
	use super::Contraction;

	#[derive(Debug, thiserror::Error)]
	#[error("line {0}: expected “<component>: <components>”")]
	pub(super) struct WiringError(usize);

	pub(super) fn try_wiring_from_str(s: &str) -> Result<Contraction, WiringError> {
		let mut names = Interner::default();
		let mut edges = Vec::new();
		for (l, line) in s.lines().enumerate() {
			if line.trim().is_empty() { continue }
			let (from, tos) = line.split_once(':').ok_or(WiringError(l + 1))?;
			let from = names.intern(from.trim());
			for to in tos.split_whitespace() {
				edges.push([from, names.intern(to)]);
			}
		}
		Ok(Contraction { sizes: vec![1; names.len()], edges })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		jqt: rhn xhk nvd
		rsh: frs pzl lsr
		xhk: hfx
		cmg: qnr nvd lhk bvb
		rhn: xhk bvb hfx
		bvb: xhk hfx
		pzl: lsr hfx nvd
		qnr: nvd
		ntq: jqt hfx bvb xhk
		nvd: lhk
		lsr: lhk
		rzs: qnr cmg lsr rsh
		frs: qnr lhk lsr
	" };
	assert_eq!(part1(INPUT).unwrap(), 54);

	let wiring = input_wiring_from_str(INPUT).unwrap();
	assert_eq!(wiring.sizes.len(), 15);
	let halves = wiring.contract(2, &mut SmallRng::seed_from_u64(0));
	assert_eq!(halves.sizes.len(), 2);
	assert_eq!(halves.sizes.iter().sum::<usize>(), 15);
	assert!(halves.edges.len() >= 3);

	assert!(part1("a: b\nc: d\n").is_err());
}
