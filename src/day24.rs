// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_bigint::BigInt;


#[derive(Clone, Copy, Debug)]
struct Hailstone {
	pos: [i64; 3],
	vel: [i64; 3],
}

impl Hailstone {
	/// Whether the future xy paths of `self` & `other` cross within `[lo, hi]` on
	/// both axes. Exact: every quantity is scaled by the system's determinant.
	fn crosses_within(&self, other: &Hailstone, lo: i64, hi: i64) -> bool {
		let [px, py, _] = self.pos.map(i128::from);
		let [vx, vy, _] = self.vel.map(i128::from);
		let [qx, qy, _] = other.pos.map(i128::from);
		let [wx, wy, _] = other.vel.map(i128::from);

		// p + t·v = q + s·w
		let mut det = wx * vy - vx * wy;
		if det == 0 { return false }
		let (dx, dy) = (qx - px, qy - py);
		let (mut t, mut s) = (wx * dy - dx * wy, vx * dy - vy * dx);
		if det < 0 { (det, t, s) = (-det, -t, -s) }
		if t < 0 || s < 0 { return false }

		let (lo, hi) = (i128::from(lo) * det, i128::from(hi) * det);
		[px * det + t * vx, py * det + t * vy].iter().all(|c| (lo..=hi).contains(c))
	}
}

/// Fraction-free (Bareiss) elimination, exact for integer matrices.
fn determinant(mut m: Vec<Vec<BigInt>>) -> BigInt {
	let zero = BigInt::from(0);
	let n = m.len();
	let (mut negate, mut prev) = (false, BigInt::from(1));
	for k in 0..n - 1 {
		if m[k][k] == zero {
			let Some(r) = (k + 1..n).find(|&r| m[r][k] != zero) else { return zero };
			m.swap(k, r);
			negate = !negate;
		}
		for i in k + 1..n {
			for j in k + 1..n {
				m[i][j] = (&m[i][j] * &m[k][k] - &m[i][k] * &m[k][j]) / &prev;
			}
		}
		prev = m[k][k].clone();
	}
	let det = m[n - 1][n - 1].clone();
	if negate { -det } else { det }
}

fn cross([ax, ay, az]: [i64; 3], [bx, by, bz]: [i64; 3]) -> [BigInt; 3] {
	let mul = |a: i64, b: i64| BigInt::from(a) * BigInt::from(b);
	[mul(ay, bz) - mul(az, by), mul(az, bx) - mul(ax, bz), mul(ax, by) - mul(ay, bx)]
}

#[derive(Debug, thiserror::Error)]
enum ThrowError {
	#[error("need three hailstones with independent paths")]
	Degenerate,
	#[error("the rock's position or velocity is not integral")]
	NonIntegral,
	#[error("the rock's coordinates overflow")]
	Overflow,
}

/// The rock `(P, V)` hits hailstone `(p, v)` iff `(P - p) × (V - v) = 0`. Subtracting
/// that for two hailstones cancels the nonlinear `P × V`, leaving three linear
/// equations in the six unknowns; two such pairs pin the rock down.
fn rock_throw(hailstones: &[Hailstone]) -> Result<[BigInt; 6], ThrowError> {
	use itertools::Itertools as _;

	for (a, b, c) in hailstones.iter().tuple_combinations() {
		let mut matrix = Vec::with_capacity(6);
		let mut rhs = Vec::with_capacity(6);
		for (i, j) in [(a, b), (a, c)] {
			let [dvx, dvy, dvz] = [0, 1, 2].map(|k| j.vel[k] - i.vel[k]);
			let [dpx, dpy, dpz] = [0, 1, 2].map(|k| j.pos[k] - i.pos[k]);
			matrix.extend([
				[0, dvz, -dvy, 0, -dpz, dpy],
				[-dvz, 0, dvx, dpz, 0, -dpx],
				[dvy, -dvx, 0, -dpy, dpx, 0],
			].map(|row| row.map(BigInt::from).to_vec()));
			let (cj, ci) = (cross(j.pos, j.vel), cross(i.pos, i.vel));
			rhs.extend(cj.into_iter().zip(ci).map(|(cj, ci)| cj - ci));
		}

		let det = determinant(matrix.clone());
		if det == BigInt::from(0) { continue }

		#[cfg(LOGGING)]
		println!("Solving with determinant {det}");

		let mut solution = [(); 6].map(|_| BigInt::from(0));
		for (col, unknown) in solution.iter_mut().enumerate() {
			let replaced = matrix.iter().zip(&rhs)
				.map(|(row, r)| { let mut row = row.clone(); row[col] = r.clone(); row })
				.collect();
			let numerator = determinant(replaced);
			if &numerator % &det != BigInt::from(0) { return Err(ThrowError::NonIntegral) }
			*unknown = numerator / &det;
		}
		return Ok(solution)
	}
	Err(ThrowError::Degenerate)
}


fn input_hailstones_from_str(s: &str) -> Result<Vec<Hailstone>, parsing::HailstonesError> {
	parsing::try_hailstones_from_str(s)
}


fn part1_impl(input: &str, lo: i64, hi: i64) -> anyhow::Result<usize> {
	use itertools::Itertools as _;

	Ok(input_hailstones_from_str(input)?.iter()
		.tuple_combinations()
		.filter(|(a, b)| a.crosses_within(b, lo, hi))
		.count())
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	part1_impl(input, 200_000_000_000_000, 400_000_000_000_000)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let [px, py, pz, ..] = rock_throw(&input_hailstones_from_str(input)?)?;
	Ok(i64::try_from(px + py + pz).map_err(|_| ThrowError::Overflow)?)
}


mod parsing {
	use std::str::FromStr;
	use super::Hailstone;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HailstoneError {
		#[error("expected “x, y, z @ dx, dy, dz”")]
		Format,
		#[error("invalid number: {0}")]
		Number(#[from] std::num::ParseIntError),
	}

	impl FromStr for Hailstone {
		type Err = HailstoneError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			fn triple(s: &str) -> Result<[i64; 3], HailstoneError> {
				let mut nums = s.split(',').map(|n| n.trim().parse::<i64>());
				let (Some(x), Some(y), Some(z), None) = (nums.next(), nums.next(), nums.next(), nums.next()) else {
					return Err(HailstoneError::Format)
				};
				Ok([x?, y?, z?])
			}
			let (pos, vel) = s.split_once('@').ok_or(HailstoneError::Format)?;
			Ok(Hailstone { pos: triple(pos)?, vel: triple(vel)? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HailstonesError {
		#[error("no hailstones")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: HailstoneError },
	}

	pub(super) fn try_hailstones_from_str(s: &str) -> Result<Vec<Hailstone>, HailstonesError> {
		let hailstones = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| HailstonesError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Hailstone>, _>>()?;
		if hailstones.is_empty() { return Err(HailstonesError::Empty) }
		Ok(hailstones)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		19, 13, 30 @ -2,  1, -2
		18, 19, 22 @ -1, -1, -2
		20, 25, 34 @ -2, -2, -4
		12, 31, 28 @ -1, -2, -1
		20, 19, 15 @  1, -5, -3
	" };
	assert_eq!(part1_impl(INPUT, 7, 27).unwrap(), 2);
	assert_eq!(part2(INPUT).unwrap(), 47);

	let rock = rock_throw(&input_hailstones_from_str(INPUT).unwrap()).unwrap();
	assert_eq!(rock, [24, 13, 10, -3, 1, 2].map(BigInt::from));

	let m = |rows: &[[i64; 3]]| rows.iter().map(|r| r.map(BigInt::from).to_vec()).collect::<Vec<_>>();
	assert_eq!(determinant(m(&[[0, 2, 1], [3, 0, 1], [1, 1, 0]])), BigInt::from(5));
	assert_eq!(determinant(m(&[[1, 2, 3], [2, 4, 6], [0, 1, 1]])), BigInt::from(0));
	assert!(matches!(rock_throw(&[]), Err(ThrowError::Degenerate)));
	assert!(part1("").is_err());
}
