//! Random permutations of `{0, ..., n-1}` (Fisher–Yates).

use crate::rng::RandomStream;

/// Fresh uniformly random permutation of `0..n`. Empty for `n == 0`.
///
/// Deterministic for a fixed stream state. Uniformity inherits the stream's
/// bounded-draw mode (see `BoundedDraw`).
pub fn random_permutation(n: usize, stream: &mut RandomStream) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    shuffle(&mut p, stream);
    p
}

/// Fill `buf` with a random permutation of `0..buf.len()`.
///
/// Consumes the same draws as `random_permutation(buf.len(), ..)`, so both
/// forms agree for equal stream states.
pub fn random_permutation_into(buf: &mut [usize], stream: &mut RandomStream) {
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = i;
    }
    shuffle(buf, stream);
}

fn shuffle(p: &mut [usize], stream: &mut RandomStream) {
    let mut len = p.len();
    while len > 1 {
        let j = stream.draw_below(len);
        p.swap(len - 1, j);
        len -= 1;
    }
}

/// True iff `p` contains each of `0..p.len()` exactly once.
pub fn is_permutation(p: &[usize]) -> bool {
    let mut seen = vec![false; p.len()];
    for &v in p {
        match seen.get_mut(v) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{BoundedDraw, StreamCfg};

    #[test]
    fn empty_for_zero() {
        let mut s = RandomStream::default();
        assert!(random_permutation(0, &mut s).is_empty());
    }

    #[test]
    fn singleton_is_identity() {
        let mut s = RandomStream::default();
        assert_eq!(random_permutation(1, &mut s), vec![0]);
    }

    #[test]
    fn permutation_for_many_sizes() {
        let mut s = RandomStream::seeded(11);
        for n in 1..200 {
            let p = random_permutation(n, &mut s);
            assert_eq!(p.len(), n);
            assert!(is_permutation(&p));
        }
    }

    #[test]
    fn into_matches_fresh() {
        let mut a = RandomStream::seeded(4);
        let mut b = RandomStream::seeded(4);
        let fresh = random_permutation(37, &mut a);
        let mut buf = vec![999; 37];
        random_permutation_into(&mut buf, &mut b);
        assert_eq!(fresh, buf);
    }

    #[test]
    fn is_permutation_rejects_duplicates_and_gaps() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 1, 3]));
    }

    #[test]
    fn positions_roughly_uniform() {
        let n = 5;
        let trials = 50_000;
        for bounded in [BoundedDraw::Modulo, BoundedDraw::Unbiased] {
            let mut s = RandomStream::new(StreamCfg {
                seed: 2024,
                bounded,
            });
            let mut counts = vec![vec![0usize; n]; n];
            for _ in 0..trials {
                let p = random_permutation(n, &mut s);
                for (pos, &v) in p.iter().enumerate() {
                    counts[pos][v] += 1;
                }
            }
            let expected = trials as f64 / n as f64;
            for row in &counts {
                for &c in row {
                    assert!(
                        (c as f64 - expected).abs() < 0.05 * expected,
                        "{bounded:?}: count {c} vs expected {expected}"
                    );
                }
            }
        }
    }
}
