#[path = "either/either.rs"]
pub mod either;
#[path = "either/ops.rs"]
pub mod ops;
#[path = "either/caught.rs"]
pub mod caught;
#[path = "either/capability.rs"]
pub mod capability;
#[path = "parser/reader.rs"]
pub mod reader;

pub use crate::capability::{Applicative, Foldable, Functor, Hashable, Monad, Semigroup, Show};
pub use crate::caught::{caught, Catch, Caught};
pub use crate::either::{member, AsEither, Case, Const, Either, Handler, Left, Right};
pub use crate::reader::{read_either, ReadError};

/// Seed used by `Hashable::hash_value`.
pub static DEFAULT_HASH_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
