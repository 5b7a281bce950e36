//! Fenwick tree (binary indexed tree) over row heights.
//!
//! Each slot holds the height of one logical row; `offset(i)` is the y
//! position of row `i` and `find(y)` maps a scroll position back to a row,
//! both in O(log n). Raw values are kept alongside the tree so `get` is exact
//! and point updates do not accumulate float error in the stored heights.

#[derive(Debug, Clone, Default)]
pub struct FenwickTree {
    /// 1-indexed partial sums. `tree[0]` is unused.
    tree: Vec<f32>,
    values: Vec<f32>,
}

impl FenwickTree {
    pub fn from_values(values: &[f32]) -> Self {
        let mut fenwick = Self::default();
        fenwick.rebuild(values);
        fenwick
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> f32 {
        self.values.get(i).copied().unwrap_or(0.0)
    }

    /// Set slot `i` to `value`. O(log n).
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn set(&mut self, i: usize, value: f32) {
        let n = self.len();
        assert!(i < n, "index {i} out of bounds (n={n})");
        let delta = value - self.values[i];
        self.values[i] = value;
        let mut idx = i + 1;
        while idx <= n {
            self.tree[idx] += delta;
            idx += lowbit(idx);
        }
    }

    /// Sum of the first `count` slots, i.e. the offset of row `count`.
    pub fn offset(&self, count: usize) -> f32 {
        let mut idx = count.min(self.len());
        let mut sum = 0.0;
        while idx > 0 {
            sum += self.tree[idx];
            idx -= lowbit(idx);
        }
        sum
    }

    pub fn total(&self) -> f32 {
        self.offset(self.len())
    }

    /// Row containing offset `y`: the largest `i` with `offset(i) <= y`,
    /// clamped to the last row. `None` when empty.
    pub fn find(&self, y: f32) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        let mut pos = 0usize;
        let mut remaining = y;
        let mut mask = most_significant_bit(n);
        while mask > 0 {
            let next = pos + mask;
            if next <= n && self.tree[next] <= remaining {
                remaining -= self.tree[next];
                pos = next;
            }
            mask >>= 1;
        }
        Some(pos.min(n - 1))
    }

    /// Replace every slot. O(n).
    pub fn rebuild(&mut self, values: &[f32]) {
        let n = values.len();
        self.values.clear();
        self.values.extend_from_slice(values);
        self.tree.clear();
        self.tree.resize(n + 1, 0.0);
        self.tree[1..].copy_from_slice(values);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                self.tree[parent] += self.tree[i];
            }
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

#[inline]
fn lowbit(x: usize) -> usize {
    x & x.wrapping_neg()
}

#[inline]
fn most_significant_bit(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}
