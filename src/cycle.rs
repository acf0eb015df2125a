// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::{HashMap, hash_map::Entry::*}, hash::Hash};


/// The per-iteration values of a deterministic process, together with where its
/// states start repeating.
#[derive(Debug)]
pub(crate) struct Cycle<V> {
	pub(crate) offset: usize,
	pub(crate) period: usize,
	values: Vec<V>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no repeated state within {budget} iterations")]
pub(crate) struct NoPeriodFound { pub(crate) budget: usize }

impl<V> Cycle<V> {
	/// Maps iteration `n` onto the recorded iteration with the same state.
	pub(crate) fn index_at(&self, n: usize) -> usize {
		if n < self.offset + self.period { n }
		else { self.offset + (n - self.offset) % self.period }
	}

	pub(crate) fn value_at(&self, n: usize) -> &V {
		&self.values[self.index_at(n)]
	}
}


/// Steps `state` until the `key` of some state recurs, recording `value` for every
/// iteration (iteration 0 being the initial state). Gives up after `budget` steps.
pub(crate) fn find<S, K, V>(
	mut state: S,
	mut step: impl FnMut(&mut S),
	key: impl Fn(&S) -> K,
	value: impl Fn(&S) -> V,
	budget: usize,
) -> Result<Cycle<V>, NoPeriodFound>
where K: Hash + Eq {
	let mut seen = HashMap::new();
	let mut values = Vec::new();
	for n in 0..=budget {
		match seen.entry(key(&state)) {
			Occupied(entry) => {
				let offset = *entry.get();

				#[cfg(LOGGING)]
				println!("Period {} after offset {offset}", n - offset);

				return Ok(Cycle { offset, period: n - offset, values })
			}
			Vacant(entry) => _ = entry.insert(n),
		}
		values.push(value(&state));
		step(&mut state);
	}
	Err(NoPeriodFound { budget })
}


#[cfg(test)]
mod tests {
	use super::*;

	const STATES: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

	/// A, B, C, D, E, C, D, E, …
	fn step(i: &mut usize) {
		*i = if *i == 4 { 2 } else { *i + 1 }
	}

	#[test]
	fn offset_and_period() {
		let cycle = find(0, step, |&i| STATES[i], |&i| STATES[i], 100).unwrap();
		assert_eq!((cycle.offset, cycle.period), (2, 3));
		assert_eq!(cycle.value_at(1000), cycle.value_at(2 + (1000 - 2) % 3));
		assert_eq!(*cycle.value_at(1000), 'E');
		for k in 0..10 {
			assert_eq!(cycle.value_at(2 + k * 3), &'C');
		}
		for n in 0..5 {
			assert_eq!(cycle.value_at(n), &STATES[n]);
		}
	}

	#[test]
	fn side_values() {
		// Values don't need to be part of the key.
		let cycle = find((0, 0), |(i, steps)| { step(i); *steps += 1 }, |&(i, _)| i, |&(_, steps)| steps * 10, 10)
			.unwrap();
		assert_eq!(*cycle.value_at(7), 40);
	}

	#[test]
	fn one_key_per_iteration() {
		let keys = std::cell::Cell::new(0);
		let cycle = find(0, step, |&i| { keys.set(keys.get() + 1); i }, |&i| i, 100).unwrap();
		assert_eq!(cycle.offset + cycle.period + 1, 6);
		assert_eq!(keys.get(), 6);
	}

	#[test]
	fn budget() {
		assert_eq!(find(0u32, |i| *i += 1, |&i| i, |&i| i, 50).unwrap_err(), NoPeriodFound { budget: 50 });
		assert!(find(0, step, |&i| i, |&i| i, 4).is_err());
		assert!(find(0, step, |&i| i, |&i| i, 5).is_ok());
	}
}
