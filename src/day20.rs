// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::interner::Interner;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Pulse { Low, High }

#[derive(Debug)]
enum Kind {
	Broadcaster,
	FlipFlop { on: bool },
	/// The last pulse remembered per input module.
	Conjunction { memory: Vec<(usize, Pulse)> },
	/// Only ever named as an output.
	DeadEnd,
}

#[derive(Debug)]
struct Module {
	kind: Kind,
	outputs: Vec<usize>,
}

impl Module {
	fn receive(&mut self, from: usize, pulse: Pulse) -> Option<Pulse> {
		match &mut self.kind {
			Kind::Broadcaster => Some(pulse),
			Kind::FlipFlop { .. } if pulse == Pulse::High => None,
			Kind::FlipFlop { on } => {
				*on = !*on;
				Some(if *on { Pulse::High } else { Pulse::Low })
			}
			Kind::Conjunction { memory } => {
				if let Some((_, last)) = memory.iter_mut().find(|(input, _)| *input == from) { *last = pulse }
				Some(if memory.iter().all(|&(_, p)| p == Pulse::High) { Pulse::Low } else { Pulse::High })
			}
			Kind::DeadEnd => None,
		}
	}
}

struct Network<'a> {
	names: Interner<'a>,
	modules: Vec<Module>,
	broadcaster: usize,
}

#[derive(Debug, thiserror::Error)]
enum WiringError {
	#[error("no “rx” module")]
	NoRx,
	#[error("“rx” must be fed by exactly one conjunction")]
	NoRxFeeder,
	#[error("“{0}” never sent a high pulse within {1} presses")]
	NeverHigh(String, usize),
}

impl Network<'_> {
	/// Pushes the button once, reporting every pulse `(from, to, pulse)` in the order
	/// it is processed. The button's own pulse comes from the broadcaster to itself.
	fn press(&mut self, mut observe: impl FnMut(usize, usize, Pulse)) {
		use std::collections::VecDeque;

		let mut queue = VecDeque::from([(self.broadcaster, self.broadcaster, Pulse::Low)]);
		while let Some((from, to, pulse)) = queue.pop_front() {
			observe(from, to, pulse);
			let module = &mut self.modules[to];
			let Some(sent) = module.receive(from, pulse) else { continue };
			queue.extend(module.outputs.iter().map(|&output| (to, output, sent)));
		}
	}

	fn inputs(&self, module: usize) -> impl Iterator<Item = usize> + '_ {
		(0..self.modules.len()).filter(move |&m| self.modules[m].outputs.contains(&module))
	}
}


fn input_network_from_str(s: &str) -> Result<Network<'_>, parsing::NetworkError> {
	parsing::try_network_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let mut network = input_network_from_str(input)?;
	let mut counts = [0u64; 2];
	for _ in 0..1000 {
		network.press(|_, _, pulse| counts[pulse as usize] += 1);
	}
	Ok(counts[0] * counts[1])
}


/// `rx` hangs off a single conjunction, which sends low only once all of its own
/// inputs last sent high. Each of those inputs goes high periodically, first at
/// the end of its period, so they line up at the least common multiple.
pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	const BUDGET: usize = 100_000;

	let mut network = input_network_from_str(input)?;
	let rx = network.names.get("rx").ok_or(WiringError::NoRx)?;
	let hub = match network.inputs(rx).collect::<Vec<_>>()[..] {
		[hub] if matches!(network.modules[hub].kind, Kind::Conjunction { .. }) => hub,
		_ => return Err(WiringError::NoRxFeeder.into()),
	};
	let feeders = network.inputs(hub).collect::<Vec<_>>();
	let mut first_high = vec![None; feeders.len()];

	for press in 1..=BUDGET {
		network.press(|from, to, pulse| {
			if to != hub || pulse != Pulse::High { return }
			if let Some(f) = feeders.iter().position(|&feeder| feeder == from) {
				first_high[f].get_or_insert(press as u64);
			}
		});
		if first_high.iter().all(Option::is_some) { break }
	}

	#[cfg(LOGGING)]
	println!("First high pulses into {}: {first_high:?}", network.names.resolve(hub));

	feeders.iter().zip(first_high).try_fold(1, |acc, (&feeder, press)| -> anyhow::Result<u64> {
		let press = press.ok_or_else(|| WiringError::NeverHigh(network.names.resolve(feeder).to_owned(), BUDGET))?;
		Ok(num_integer::lcm(acc, press))
	})
}


mod parsing {
	use crate::interner::Interner;
	use super::{Kind, Module, Network, Pulse};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum NetworkError {
		#[error("line {0}: expected “<module> -> <outputs>”")]
		Format(usize),
		#[error("line {0}: module “{1}” defined twice")]
		Duplicate(usize, String),
		#[error("no broadcaster")]
		NoBroadcaster,
	}

	pub(super) fn try_network_from_str(s: &str) -> Result<Network<'_>, NetworkError> {
		let mut names = Interner::default();
		let mut modules = Vec::<Module>::new();
		let mut defined = Vec::new();

		for (l, line) in s.lines().enumerate() {
			if line.trim().is_empty() { continue }
			let (module, outputs) = line.split_once(" -> ").ok_or(NetworkError::Format(l + 1))?;
			let (kind, name) = match module.trim().as_bytes().first() {
				Some(b'%') => (Kind::FlipFlop { on: false }, &module.trim()[1..]),
				Some(b'&') => (Kind::Conjunction { memory: Vec::new() }, &module.trim()[1..]),
				_ if module.trim() == "broadcaster" => (Kind::Broadcaster, "broadcaster"),
				_ => return Err(NetworkError::Format(l + 1)),
			};
			let id = names.intern(name);
			let outputs = outputs.split(',').map(|output| names.intern(output.trim())).collect();
			modules.resize_with(names.len(), || Module { kind: Kind::DeadEnd, outputs: Vec::new() });
			defined.resize(names.len(), false);
			if defined[id] { return Err(NetworkError::Duplicate(l + 1, name.to_owned())) }
			defined[id] = true;
			modules[id] = Module { kind, outputs };
		}

		for from in 0..modules.len() {
			for to in modules[from].outputs.clone() {
				if let Kind::Conjunction { memory } = &mut modules[to].kind { memory.push((from, Pulse::Low)) }
			}
		}

		let broadcaster = names.get("broadcaster").ok_or(NetworkError::NoBroadcaster)?;
		Ok(Network { names, modules, broadcaster })
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			broadcaster -> a, b, c
			%a -> b
			%b -> c
			%c -> inv
			&inv -> a
		" },
		indoc::indoc! { "
			broadcaster -> a
			%a -> inv, con
			&inv -> b
			%b -> con
			&con -> output
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 32000000);
	assert_eq!(part1(INPUTS[1]).unwrap(), 11687500);
	assert!(part2(INPUTS[1]).is_err());

	const COUNTERS: &str = indoc::indoc! { "
		broadcaster -> a, b
		%a -> ca
		%b -> b2
		%b2 -> cb
		&ca -> hub
		&cb -> hub
		&hub -> rx
	" };
	assert_eq!(part2(COUNTERS).unwrap(), 4);
}
