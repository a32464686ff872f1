// Capabilities of Either
//
// Eq and Ord are the std traits. The others have no std counterpart
// and are declared here, with instances for the std types they usually wrap.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use seahash::SeaHasher;

use crate::either::Either;
use crate::{ops, DEFAULT_HASH_SEED};

/* Eq / Ord */

impl<L: PartialOrd, R: PartialOrd> PartialOrd for Either<L, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ops::partial_compare(self, other)
    }
}

impl<L: Ord, R: Ord> Ord for Either<L, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        ops::compare(self, other)
    }
}

impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // the Option discriminants double as the variant tag
        self.as_ref().into_left().hash(state);
        self.as_ref().into_right().hash(state);
    }
}

/* Semigroup */

/// Associative combination of two values.
pub trait Semigroup {
    fn concat(self, other: Self) -> Self;
}

impl Semigroup for () {
    fn concat(self, _other: Self) -> Self {}
}

impl Semigroup for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<L, R: Semigroup> Semigroup for Either<L, R> {
    fn concat(self, other: Self) -> Self {
        ops::concat(self, other)
    }
}

/* Functor / Foldable / Applicative / Monad */

/// Maps over the single "inner" slot of a container.
///
/// Laws: `x.fmap(|v| v) == x` and
/// `x.fmap(f).fmap(g) == x.fmap(|v| g(f(v)))`.
pub trait Functor {
    type Inner;
    type Mapped<B>;

    fn fmap<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

impl<L, R> Functor for Either<L, R> {
    type Inner = R;
    type Mapped<B> = Either<L, B>;

    fn fmap<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        ops::map(f, self)
    }
}

pub trait Foldable {
    type Item;

    fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A;

    fn foldl<A, F>(self, init: A, f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        self.fold(init, f)
    }

    fn foldr<A, F>(self, init: A, f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        self.fold(init, f)
    }
}

impl<L, R> Foldable for Either<L, R> {
    type Item = R;

    fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, R) -> A,
    {
        ops::fold(f, init, self)
    }
}

pub trait Applicative: Functor {
    fn of(value: Self::Inner) -> Self;

    /// Applies the function held by `apply` to the content of `self`.
    fn ap<B, F>(self, apply: Self::Mapped<F>) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

impl<L, R> Applicative for Either<L, R> {
    fn of(value: R) -> Self {
        ops::of(value)
    }

    fn ap<B, F>(self, apply: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        ops::ap(apply, self)
    }
}

pub trait Monad: Applicative {
    fn chain<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Inner) -> Self::Mapped<B>;
}

impl<L, R> Monad for Either<L, R> {
    fn chain<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        ops::flatten(ops::map(f, self))
    }
}

/* Show */

/// Textual representation of a value, strings quoted.
pub trait Show {
    fn show(&self) -> String;
}

macro_rules! show_display {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! show_debug {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )*
    };
}

show_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);
show_debug!(char, str, String, ());

impl<T: Show + ?Sized> Show for &T {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show> Show for Vec<T> {
    fn show(&self) -> String {
        let items: Vec<String> = self.iter().map(Show::show).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Show> Show for Option<T> {
    fn show(&self) -> String {
        match self {
            Some(value) => format!("Some({})", value.show()),
            None => "None".to_string(),
        }
    }
}

impl<L: Show, R: Show> Show for Either<L, R> {
    fn show(&self) -> String {
        ops::show(self)
    }
}

/* Hashable */

// SeaHash's own default keys, mixed with the caller's seed.
const KEY_1: u64 = 0x16f1_1fe8_9b0d_677c;
const KEY_2: u64 = 0xb480_a793_d8e6_c86c;
const KEY_3: u64 = 0x6fe2_e5aa_f078_ebc9;
const KEY_4: u64 = 0x14f9_94a4_c525_9381;

/// Hashes raw bytes with a hasher keyed on `seed`.
pub fn seeded_hash(seed: u64, bytes: &[u8]) -> u64 {
    let mut hasher = SeaHasher::with_seeds(
        KEY_1 ^ seed,
        KEY_2 ^ seed.rotate_left(16),
        KEY_3 ^ seed.rotate_left(32),
        KEY_4 ^ seed.rotate_left(48),
    );
    hasher.write(bytes);
    hasher.finish()
}

/// Deterministic hash threaded through an explicit seed.
///
/// Equal values hash equally for the same seed, and the result can be fed
/// back in as the seed of the next value to hash a sequence of them.
pub trait Hashable {
    fn hash_with_seed(&self, seed: u64) -> u64;

    fn hash_value(&self) -> u64 {
        self.hash_with_seed(DEFAULT_HASH_SEED)
    }
}

// Integers are fed as little-endian bytes of a fixed width, so the
// result does not depend on the target's pointer width or byte order.
macro_rules! hashable_int {
    ($($t:ty => $wide:ty),*) => {
        $(
            impl Hashable for $t {
                fn hash_with_seed(&self, seed: u64) -> u64 {
                    seeded_hash(seed, &(*self as $wide).to_le_bytes())
                }
            }
        )*
    };
}

hashable_int!(
    i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => i64,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => u64
);

impl Hashable for bool {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        u8::from(*self).hash_with_seed(seed)
    }
}

impl Hashable for char {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        u32::from(*self).hash_with_seed(seed)
    }
}

impl Hashable for str {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        // length first so that a sequence of strings cannot be re-split
        let seed = self.len().hash_with_seed(seed);
        seeded_hash(seed, self.as_bytes())
    }
}

impl Hashable for String {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        self.as_str().hash_with_seed(seed)
    }
}

impl Hashable for () {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        seeded_hash(seed, &[])
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        (**self).hash_with_seed(seed)
    }
}

impl<T: Hashable> Hashable for Vec<T> {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        self.iter()
            .fold(self.len().hash_with_seed(seed), |acc, item| item.hash_with_seed(acc))
    }
}

impl<L: Hashable, R: Hashable> Hashable for Either<L, R> {
    fn hash_with_seed(&self, seed: u64) -> u64 {
        ops::hash_with_seed(seed, self)
    }
}
