use std::cmp::Reverse;
use std::collections::HashSet;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::entities::{FRAGMENT_SUFFIX, Roll};

/// The fabric available during a single iteration.
///
/// Holds two disjoint collections: `regular` rolls, which have not been cut into yet, and
/// `residual` fragments, which were produced during the iteration and are long enough to be reused.
/// The pool never moves rolls on its own, every removal and insertion is initiated by the caller.
#[derive(Debug, Clone)]
pub struct RollPool {
    regular: Vec<Roll>,
    residual: Vec<Roll>,
    /// Every identifier that has been present in this pool, used to keep fragment names unique
    issued_ids: HashSet<String>,
}

impl RollPool {
    /// Creates a pool owning a fresh copy of the inventory. All rolls start out as `regular`.
    pub fn new(inventory: &[Roll]) -> Self {
        let regular = inventory.to_vec();
        let issued_ids = regular.iter().map(|r| r.id().to_owned()).collect();
        Self {
            regular,
            residual: vec![],
            issued_ids,
        }
    }

    pub fn regular(&self) -> &[Roll] {
        &self.regular
    }

    pub fn residual(&self) -> &[Roll] {
        &self.residual
    }

    pub fn len(&self) -> usize {
        self.regular.len() + self.residual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total length of all rolls currently in the pool
    pub fn total_length(&self) -> f64 {
        self.regular
            .iter()
            .chain(self.residual.iter())
            .map(|r| r.length())
            .sum()
    }

    /// Whether any roll, regular or residual, is at least `length` long
    pub fn any_fits(&self, length: f64) -> bool {
        self.regular
            .iter()
            .chain(self.residual.iter())
            .any(|r| r.length() >= length)
    }

    /// Removes and returns the longest residual roll of at least `min_length`.
    /// Ties go to the roll that entered the residual collection first.
    pub fn take_longest_residual(&mut self, min_length: f64) -> Option<Roll> {
        let idx = self
            .residual
            .iter()
            .enumerate()
            .filter(|(_, r)| r.length() >= min_length)
            .min_by_key(|(_, r)| Reverse(OrderedFloat(r.length())))
            .map(|(idx, _)| idx)?;
        Some(self.residual.remove(idx))
    }

    /// Removes and returns the longest residual roll, regardless of its length.
    pub fn pop_longest_residual(&mut self) -> Option<Roll> {
        let idx = self
            .residual
            .iter()
            .position_min_by_key(|r| Reverse(OrderedFloat(r.length())))?;
        Some(self.residual.remove(idx))
    }

    /// Puts a uniformly random permutation on the regular rolls, which [`RollPool::pop_regular`] draws from.
    pub fn shuffle_regular(&mut self, rng: &mut impl Rng) {
        self.regular.shuffle(rng);
    }

    /// Removes and returns the next regular roll in the current order.
    pub fn pop_regular(&mut self) -> Option<Roll> {
        self.regular.pop()
    }

    /// Returns rolls that were drawn from `regular` but not consumed.
    pub fn return_regular(&mut self, rolls: impl IntoIterator<Item = Roll>) {
        self.regular.extend(rolls);
    }

    /// Returns rolls that were drawn from `residual` but not consumed.
    pub fn return_residual(&mut self, rolls: impl IntoIterator<Item = Roll>) {
        self.residual.extend(rolls);
    }

    /// Offers a freshly cut fragment to the pool.
    /// It is kept as a residual if it is at least `min_length` long, otherwise it is handed back
    /// to the caller as a terminal leftover.
    #[must_use = "a rejected fragment is a leftover and must be tracked"]
    pub fn offer_fragment(&mut self, fragment: Roll, min_length: f64) -> Option<Roll> {
        match fragment.length() >= min_length {
            true => {
                self.residual.push(fragment);
                None
            }
            false => Some(fragment),
        }
    }

    /// Reserves a unique identifier for a fragment cut from `parent`: `<parent>-bit`,
    /// or `<parent>-bit2`, `<parent>-bit3`, ... if that name was already taken in this pool.
    pub fn fragment_id(&mut self, parent: &str) -> String {
        let base = format!("{parent}{FRAGMENT_SUFFIX}");
        let mut id = base.clone();
        let mut n = 2;
        while self.issued_ids.contains(&id) {
            id = format!("{base}{n}");
            n += 1;
        }
        self.issued_ids.insert(id.clone());
        id
    }

    /// Consumes the pool, returning every roll still in it (regular first, then residual)
    pub fn into_rolls(self) -> impl Iterator<Item = Roll> {
        self.regular.into_iter().chain(self.residual)
    }
}
