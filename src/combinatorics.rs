//! Degree tables for the generators and the two partition-style
//! enumerations that drive basis enumeration. Everything here is computed
//! on demand; no state survives a call.

use fp::prime::ValidPrime;

/// Degrees of the polynomial generators xi_1, xi_2, ... that are at most n,
/// in the normalization where |xi_i| = (p^i - 1)/(p - 1). At p = 2 this is
/// the topological degree 2^i - 1; at odd primes the topological degree is
/// q times this, q = 2p - 2.
pub fn xi_degrees(n: i32, p: ValidPrime) -> Vec<i32> {
    let p = *p as i64;
    let mut result = Vec::new();
    let mut degree: i64 = 1;
    while degree <= n as i64 {
        result.push(degree as i32);
        degree = degree * p + 1;
    }
    result
}

/// Degrees of the exterior generators tau_0, tau_1, ... that are at most n:
/// |tau_i| = 2 p^i - 1.
pub fn tau_degrees(n: i32, p: ValidPrime) -> Vec<i32> {
    let p = *p as i64;
    let mut result = Vec::new();
    let mut p_to_the_i: i64 = 1;
    while 2 * p_to_the_i - 1 <= n as i64 {
        result.push((2 * p_to_the_i - 1) as i32);
        p_to_the_i *= p;
    }
    result
}

/// Enumerates the vectors (c_1, ..., c_m) of non-negative integers with
/// sum_i c_i * weights[i] = total. Entries are filled greedily from the
/// left and backtracked from the right, so the order is deterministic. The
/// enumerator is Clone so a consumer can restart it.
#[derive(Debug, Clone)]
pub struct WeightedIntegerVectors {
    weights: Vec<i32>,
    current: Vec<u32>,
    remaining: i32,
    started: bool,
    exhausted: bool,
}

impl WeightedIntegerVectors {
    /// Weights must be positive.
    pub fn new(total: i32, weights: Vec<i32>) -> Self {
        Self {
            current: vec![0; weights.len()],
            weights,
            remaining: total,
            started: false,
            exhausted: total < 0,
        }
    }

    /// Put the largest value the remaining total allows at each entry from
    /// `from` onwards.
    fn fill_max(&mut self, from: usize) {
        for i in from..self.weights.len() {
            let c = self.remaining / self.weights[i];
            self.current[i] = c as u32;
            self.remaining -= c * self.weights[i];
        }
    }
}

impl Iterator for WeightedIntegerVectors {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            if !self.started {
                self.started = true;
                if self.weights.is_empty() {
                    self.exhausted = true;
                    return (self.remaining == 0).then(Vec::new);
                }
                self.fill_max(0);
            } else {
                // The last entry is determined by the rest, so give it back
                // wholesale, then decrement the rightmost positive entry
                // before it and refill.
                let last = self.weights.len() - 1;
                self.remaining += self.current[last] as i32 * self.weights[last];
                self.current[last] = 0;
                match (0..last).rev().find(|&i| self.current[i] > 0) {
                    Some(i) => {
                        self.current[i] -= 1;
                        self.remaining += self.weights[i];
                        self.fill_max(i + 1);
                    }
                    None => {
                        self.exhausted = true;
                        return None;
                    }
                }
            }
            if self.remaining == 0 {
                return Some(self.current.clone());
            }
        }
    }
}

/// Enumerates the ways to write `total` as a sum of distinct entries of
/// `parts`, yielded as the increasing list of indices used. Parts must be
/// sorted in increasing order.
#[derive(Debug, Clone)]
pub struct RestrictedPartitions {
    parts: Vec<i32>,
    selected: Vec<usize>,
    remaining: i32,
    pos: usize,
    exhausted: bool,
}

impl RestrictedPartitions {
    pub fn new(total: i32, parts: Vec<i32>) -> Self {
        Self {
            parts,
            selected: Vec::new(),
            remaining: total,
            pos: 0,
            exhausted: false,
        }
    }

    /// Undo the most recent inclusion and move past it. False when there is
    /// nothing left to undo.
    fn backtrack(&mut self) -> bool {
        match self.selected.pop() {
            Some(i) => {
                self.remaining += self.parts[i];
                self.pos = i + 1;
                true
            }
            None => false,
        }
    }
}

impl Iterator for RestrictedPartitions {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            if self.remaining == 0 {
                let result = self.selected.iter().map(|&i| i as u32).collect();
                if !self.backtrack() {
                    self.exhausted = true;
                }
                return Some(result);
            }
            // Parts are increasing, so once one overshoots they all do.
            if self.pos >= self.parts.len() || self.parts[self.pos] > self.remaining {
                if !self.backtrack() {
                    self.exhausted = true;
                    return None;
                }
                continue;
            }
            self.remaining -= self.parts[self.pos];
            self.selected.push(self.pos);
            self.pos += 1;
        }
    }
}
