// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::Range;
use crate::interner::Interner;


/// Ratings for `x`, `m`, `a`, & `s`.
type Part = [u64; 4];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Target { Accept, Reject, Workflow(usize) }

#[derive(Clone, Copy, Debug)]
struct Condition {
	category: usize,
	less: bool,
	value: u64,
}

impl Condition {
	fn matches(&self, part: &Part) -> bool {
		let rating = part[self.category];
		if self.less { rating < self.value } else { rating > self.value }
	}

	/// The matching & non-matching parts of `range` (either may be empty).
	fn split(&self, range: Range<u64>) -> (Range<u64>, Range<u64>) {
		if self.less {
			(range.start..range.end.min(self.value), range.start.max(self.value)..range.end)
		} else {
			(range.start.max(self.value + 1)..range.end, range.start..range.end.min(self.value + 1))
		}
	}
}

struct Rule {
	condition: Option<Condition>,
	target: Target,
}

struct System<'a> {
	names: Interner<'a>,
	workflows: Vec<Vec<Rule>>,
	parts: Vec<Part>,
}

#[derive(Debug, thiserror::Error)]
enum SortError {
	#[error("no “in” workflow")]
	NoStart,
	#[error("workflows loop back onto “{0}”")]
	Loop(String),
}

impl System<'_> {
	fn start(&self) -> Result<usize, SortError> {
		self.names.get("in").ok_or(SortError::NoStart)
	}

	fn accepts(&self, part: &Part) -> Result<bool, SortError> {
		let mut workflow = self.start()?;
		for _ in 0..self.workflows.len() {
			let target = self.workflows[workflow].iter()
				.find(|rule| rule.condition.map_or(true, |c| c.matches(part)))
				.map_or(Target::Reject, |rule| rule.target);
			match target {
				Target::Accept => return Ok(true),
				Target::Reject => return Ok(false),
				Target::Workflow(next) => workflow = next,
			}
		}
		Err(SortError::Loop(self.names.resolve(workflow).to_owned()))
	}

	/// The number of distinct parts (ratings in `ratings`) that end up accepted.
	fn accepted_combinations(&self, ratings: Range<u64>) -> Result<u64, SortError> {
		let mut accepted = 0;
		let mut stack = vec![(Target::Workflow(self.start()?), [(); 4].map(|_| ratings.clone()), 0)];
		while let Some((target, mut ranges, depth)) = stack.pop() {
			let workflow = match target {
				Target::Accept => {
					accepted += ranges.iter().map(|r| r.end - r.start).product::<u64>();
					continue
				}
				Target::Reject => continue,
				Target::Workflow(workflow) if depth > self.workflows.len() =>
					return Err(SortError::Loop(self.names.resolve(workflow).to_owned())),
				Target::Workflow(workflow) => workflow,
			};
			for rule in &self.workflows[workflow] {
				let Some(condition) = rule.condition else {
					stack.push((rule.target, ranges, depth + 1));
					break
				};
				let (matching, rest) = condition.split(ranges[condition.category].clone());
				if !matching.is_empty() {
					let mut matched = ranges.clone();
					matched[condition.category] = matching;
					stack.push((rule.target, matched, depth + 1));
				}
				if rest.is_empty() { break }
				ranges[condition.category] = rest;
			}
		}
		Ok(accepted)
	}
}


fn input_system_from_str(s: &str) -> Result<System<'_>, parsing::SystemError> {
	parsing::try_system_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let system = input_system_from_str(input)?;
	let mut sum = 0;
	for part in &system.parts {
		if system.accepts(part)? { sum += part.iter().sum::<u64>() }
	}
	Ok(sum)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(input_system_from_str(input)?.accepted_combinations(1..4001)?)
}


mod parsing {
	use std::num::ParseIntError;
	use crate::interner::Interner;
	use super::{Condition, Part, Rule, System, Target};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum SystemError {
		#[error("no workflows")]
		Empty,
		#[error("line {0}: workflow “{1}” is defined twice")]
		Duplicate(usize, String),
		#[error("line {0}: expected “<name>{{<rules>}}”")]
		Workflow(usize),
		#[error("line {0}: invalid rule “{1}”")]
		Rule(usize, String),
		#[error("line {0}: last rule must be unconditional")]
		NoFallback(usize),
		#[error("line {0}: expected “{{x=…,m=…,a=…,s=…}}”")]
		Part(usize),
		#[error("line {line}: {source}")]
		Number { line: usize, source: ParseIntError },
		#[error("workflow “{0}” is referenced but not defined")]
		Undefined(String),
	}

	const CATEGORIES: [&str; 4] = ["x", "m", "a", "s"];

	pub(super) fn try_system_from_str(s: &str) -> Result<System<'_>, SystemError> {
		let mut lines = s.lines().enumerate();

		let mut names = Interner::default();
		let mut workflows = Vec::new();
		let mut defined = Vec::new();
		fn target<'a>(names: &mut Interner<'a>, name: &'a str) -> Target {
			match name {
				"A" => Target::Accept,
				"R" => Target::Reject,
				name => Target::Workflow(names.intern(name)),
			}
		}
		for (l, line) in lines.by_ref() {
			if line.trim().is_empty() { break }
			let (name, rules) = line.trim_end().strip_suffix('}')
				.and_then(|line| line.split_once('{'))
				.ok_or(SystemError::Workflow(l + 1))?;
			let id = names.intern(name);
			let rules = rules.split(',')
				.map(|rule| -> Result<Rule, SystemError> {
					let Some((condition, to)) = rule.split_once(':') else {
						return Ok(Rule { condition: None, target: target(&mut names, rule) })
					};
					let invalid = || SystemError::Rule(l + 1, rule.to_owned());
					let (category, value, less) = condition.split_once('<').map(|(c, v)| (c, v, true))
						.or_else(|| condition.split_once('>').map(|(c, v)| (c, v, false)))
						.ok_or_else(invalid)?;
					let category = CATEGORIES.iter().position(|&c| c == category).ok_or_else(invalid)?;
					let value = value.parse().map_err(|e| SystemError::Number { line: l + 1, source: e })?;
					Ok(Rule { condition: Some(Condition { category, less, value }), target: target(&mut names, to) })
				})
				.collect::<Result<Vec<_>, _>>()?;
			if rules.last().map_or(true, |rule| rule.condition.is_some()) {
				return Err(SystemError::NoFallback(l + 1))
			}
			workflows.resize_with(names.len(), Vec::new);
			defined.resize(names.len(), false);
			if defined[id] { return Err(SystemError::Duplicate(l + 1, name.to_owned())) }
			workflows[id] = rules;
			defined[id] = true;
		}
		if workflows.is_empty() { return Err(SystemError::Empty) }
		defined.resize(names.len(), false);
		if let Some(id) = defined.iter().position(|d| !d) {
			return Err(SystemError::Undefined(names.resolve(id).to_owned()))
		}

		let parts = lines
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| -> Result<Part, SystemError> {
				let ratings = line.trim().strip_prefix('{')
					.and_then(|line| line.strip_suffix('}'))
					.ok_or(SystemError::Part(l + 1))?
					.split(',')
					.collect::<Vec<_>>();
				if ratings.len() != 4 { return Err(SystemError::Part(l + 1)) }
				let mut part: Part = [0; 4];
				for ((rating, category), value) in ratings.into_iter().zip(CATEGORIES).zip(&mut part) {
					let rating = rating.strip_prefix(category)
						.and_then(|r| r.strip_prefix('='))
						.ok_or(SystemError::Part(l + 1))?;
					*value = rating.parse().map_err(|e| SystemError::Number { line: l + 1, source: e })?;
				}
				Ok(part)
			})
			.collect::<Result<_, _>>()?;

		Ok(System { names, workflows, parts })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		px{a<2006:qkq,m>2090:A,rfg}
		pv{a>1716:R,A}
		lnx{m>1548:A,A}
		rfg{s<537:gd,x>2440:R,A}
		qs{s>3448:A,lnx}
		qkq{x<1416:A,crn}
		crn{x>2662:A,R}
		in{s<1351:px,qqz}
		qqz{s>2770:qs,m<1801:hdj,R}
		gd{a>3333:R,R}
		hdj{m>838:A,pv}

		{x=787,m=2655,a=1222,s=2876}
		{x=1679,m=44,a=2067,s=496}
		{x=2036,m=264,a=79,s=2244}
		{x=2461,m=1339,a=466,s=291}
		{x=2127,m=1623,a=2188,s=1013}
	" };
	assert_eq!(part1(INPUT).unwrap(), 19114);
	assert_eq!(part2(INPUT).unwrap(), 167409079868000);

	let split = Condition { category: 0, less: true, value: 10 }.split(1..20);
	assert_eq!(split, (1..10, 10..20));
	let split = Condition { category: 0, less: false, value: 10 }.split(1..20);
	assert_eq!(split, (11..20, 1..11));

	assert!(part2("in{x<5:nope,A}\n").is_err());
	assert!(part2("in{x<5:ab,R}\nab{in}\n").is_err());
	assert!(matches!(input_system_from_str(""), Err(parsing::SystemError::Empty)));
	assert!(matches!(input_system_from_str("in{A}\nin{R}\n"), Err(parsing::SystemError::Duplicate(2, _))));
	assert!(part1("").is_err());
}
