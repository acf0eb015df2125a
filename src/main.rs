// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Display, path::PathBuf, time::Instant};

mod cycle;
mod flood;
mod grid;
mod interner;
mod search;


type Part = fn(&str) -> anyhow::Result<String>;

fn answer<T: Display>(res: anyhow::Result<T>) -> anyhow::Result<String> {
	res.map(|answer| answer.to_string())
}

macro_rules! days { ( $( $day:literal: [ $( $part:ident ),+ ] ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	fn days() -> Vec<(u8, Vec<Part>)> {
		vec![ $( ($day, vec![ $( (|s: &str| answer([<day $day>]::$part(s))) as Part ),+ ]) ),+ ]
	}
} } }

days! {
	01: [part1, part2],
	02: [part1, part2],
	03: [part1, part2],
	04: [part1, part2],
	05: [part1, part2],
	06: [part1, part2],
	07: [part1, part2],
	08: [part1, part2],
	09: [part1, part2],
	10: [part1, part2],
	11: [part1, part2],
	12: [part1, part2],
	13: [part1, part2],
	14: [part1, part2],
	15: [part1, part2],
	16: [part1, part2],
	17: [part1, part2],
	18: [part1, part2],
	19: [part1, part2],
	20: [part1, part2],
	21: [part1, part2],
	22: [part1, part2],
	23: [part1, part2],
	24: [part1, part2],
	25: [part1],
}


/// Advent of Code 2023 solutions.
#[derive(clap::Parser)]
struct Args {
	/// Days to run; all of them when omitted
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	days: Vec<u8>,

	/// Directory holding the `dayNN.txt` puzzle inputs
	#[arg(short, long, default_value = "inputs")]
	inputs: PathBuf,

	/// Only run this part
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
	part: Option<u8>,
}


fn main() -> anyhow::Result<()> {
	use {anyhow::Context as _, clap::Parser as _};

	let args = Args::parse();

	for (day, parts) in days() {
		if !args.days.is_empty() && !args.days.contains(&day) { continue }

		let path = args.inputs.join(format!("day{day:02}.txt"));
		let input = std::fs::read_to_string(&path)
			.with_context(|| format!("Failed to read input for day {day} from {}", path.display()))?;

		for (part, run) in (1..).zip(parts) {
			if args.part.is_some_and(|p| p != part) { continue }
			let start = Instant::now();
			let answer = run(&input).with_context(|| format!("Day {day} part {part} failed"))?;
			println!("Day {day:02} part {part}: {answer} ({:.2} ms)", start.elapsed().as_secs_f64() * 1000.0);
		}
	}

	Ok(())
}
