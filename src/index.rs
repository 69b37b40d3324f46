//! Name index.
//!
//! An open-addressing map from names to values, used during catalog
//! setup to reject duplicate names and to resolve course names to ids.
//!
//! # Hashing
//!
//! Names are hashed with a polynomial rolling hash (base 53, modulus
//! 1e9 + 9) and compressed into a slot with the MAD (multiply-add-divide)
//! method: `((h * A + B) mod P) mod capacity`. Collisions are resolved by
//! linear probing. The table starts at [`DEFAULT_CAPACITY`] slots and
//! doubles when more than half full, so probe chains stay short.
//!
//! # Reference
//! Goodrich, Tamassia & Goldwasser (2013), "Data Structures and Algorithms
//! in Python", Ch. 10.2 (compression functions, linear probing)

const HASH_BASE: i64 = 53;
const HASH_MODULUS: i64 = 1_000_000_009;
const MAD_A: i64 = 168_323;
const MAD_B: i64 = 211_867;
const MAD_PRIME: i64 = 370_801;

/// Initial number of slots.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Polynomial rolling hash of a name.
pub fn name_hash(name: &str) -> i64 {
    let mut value: i64 = 0;
    let mut power: i64 = 1;
    for byte in name.bytes() {
        value = value.wrapping_add(power.wrapping_mul(i64::from(byte) - i64::from(b'A')));
        power = power * HASH_BASE % HASH_MODULUS;
    }
    value
}

/// MAD compression of a hash into `[0, capacity)`.
fn compress(hash: i64, capacity: usize) -> usize {
    let mixed = hash.wrapping_mul(MAD_A).wrapping_add(MAD_B).rem_euclid(MAD_PRIME);
    // capacity never exceeds i64::MAX in practice; `mixed` is non-negative
    (mixed as u64 % capacity as u64) as usize
}

/// Open-addressing map with unique string keys.
///
/// # Example
/// ```
/// use u_staffing::index::NameIndex;
///
/// let mut index = NameIndex::new();
/// assert!(index.insert("Algebra", 0usize));
/// assert!(!index.insert("Algebra", 1));
/// assert_eq!(index.get("Algebra"), Some(&0));
/// assert_eq!(index.get("Geometry"), None);
/// ```
#[derive(Debug, Clone)]
pub struct NameIndex<V> {
    slots: Vec<Option<(String, V)>>,
    len: usize,
}

impl<V> NameIndex<V> {
    /// Creates an index with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an index with at least `capacity` slots (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Number of stored names.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts `name → value`.
    ///
    /// Returns `false` (leaving the index unchanged) if `name` is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> bool {
        let name = name.into();
        if self.find_slot(&name).is_ok() {
            return false;
        }
        if (self.len + 1) * 2 > self.slots.len() {
            self.grow();
        }
        match self.find_slot(&name) {
            Ok(_) => false,
            Err(empty) => {
                self.slots[empty] = Some((name, value));
                self.len += 1;
                true
            }
        }
    }

    /// Looks up the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        match self.find_slot(name) {
            Ok(i) => self.slots[i].as_ref().map(|(_, v)| v),
            Err(_) => None,
        }
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.find_slot(name).is_ok()
    }

    /// Probes from the compressed hash of `name`.
    ///
    /// `Ok(slot)` holds `name`; `Err(slot)` is the first empty slot, where
    /// `name` would be inserted.
    fn find_slot(&self, name: &str) -> Result<usize, usize> {
        let capacity = self.slots.len();
        let mut i = compress(name_hash(name), capacity);
        for _ in 0..capacity {
            match &self.slots[i] {
                None => return Err(i),
                Some((stored, _)) if stored == name => return Ok(i),
                Some(_) => i = (i + 1) % capacity,
            }
        }
        // Unreachable while the load factor stays at or below one half.
        Err(capacity)
    }

    fn grow(&mut self) {
        let new_capacity = self.slots.len() * 2;
        let old = std::mem::replace(&mut self.slots, {
            let mut slots = Vec::with_capacity(new_capacity);
            slots.resize_with(new_capacity, || None);
            slots
        });
        for (name, value) in old.into_iter().flatten() {
            if let Err(empty) = self.find_slot(&name) {
                self.slots[empty] = Some((name, value));
            }
        }
    }
}

impl<V> Default for NameIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
