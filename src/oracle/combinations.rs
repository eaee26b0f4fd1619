//! Lexicographic enumeration of k-combinations.

/// Number of `k`-subsets of an `n`-set, `C(n, k)`.
///
/// Returns `0` when `k > n`. Saturates at `u64::MAX`.
///
/// ```
/// use u_subset::oracle::binomial;
///
/// assert_eq!(binomial(15, 7), 6435);
/// assert_eq!(binomial(5, 0), 1);
/// assert_eq!(binomial(3, 4), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Enumerates every `k`-subset of `0..n` exactly once, in lexicographic order.
///
/// [`advance`](Self::advance) yields a borrowed slice without allocating;
/// the [`Iterator`] impl yields owned vectors.
///
/// ```
/// use u_subset::oracle::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all, vec![
///     vec![0, 1], vec![0, 2], vec![0, 3],
///     vec![1, 2], vec![1, 3], vec![2, 3],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Enumerator over the `k`-subsets of `0..n`; empty when `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Moves to the next combination and returns it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.as_slice());
        }

        let k = self.indices.len();
        // Rightmost position that can still be incremented
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.as_slice())
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance().map(<[usize]>::to_vec)
    }
}
