// Either operations
//
// Every function here reaches the wrapped value through `either` (and so
// through `Either::case`) or through the tag predicates.

use std::cmp::Ordering;

use crate::capability::{Hashable, Semigroup, Show};
use crate::either::{AsEither, Case, Either, Left, Right};

/// Folds both variants into a common result type.
pub fn either<L, R, C, F, G>(left_fn: F, right_fn: G, value: Either<L, R>) -> C
where
    F: FnOnce(L) -> C,
    G: FnOnce(R) -> C,
{
    value.case(Case::new(left_fn, right_fn))
}

/// Keeps the `Left` elements, in order.
pub fn lefts<I>(items: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: AsEither,
{
    items.into_iter().filter(|item| item.as_either().is_left())
}

/// Keeps the `Right` elements, in order.
pub fn rights<I>(items: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: AsEither,
{
    items.into_iter().filter(|item| item.as_either().is_right())
}

/// First `Left` wins; two `Right`s are combined.
pub fn concat<L, R: Semigroup>(left: Either<L, R>, right: Either<L, R>) -> Either<L, R> {
    either(
        Left,
        |first| either(Left, |second| Right(first.concat(second)), right),
        left,
    )
}

/// Total order where every `Left` sorts before every `Right`.
pub fn compare<L: Ord, R: Ord>(left: &Either<L, R>, right: &Either<L, R>) -> Ordering {
    either(
        |a| either(|b| a.cmp(b), |_| Ordering::Less, right.as_ref()),
        |a| either(|_| Ordering::Greater, |b| a.cmp(b), right.as_ref()),
        left.as_ref(),
    )
}

pub fn partial_compare<L, R>(left: &Either<L, R>, right: &Either<L, R>) -> Option<Ordering>
where
    L: PartialOrd,
    R: PartialOrd,
{
    either(
        |a| either(|b| a.partial_cmp(b), |_| Some(Ordering::Less), right.as_ref()),
        |a| either(|_| Some(Ordering::Greater), |b| a.partial_cmp(b), right.as_ref()),
        left.as_ref(),
    )
}

/// Applies `f` to a `Right` value. A `Left` passes through untouched.
pub fn map<L, R, B, F>(f: F, value: Either<L, R>) -> Either<L, B>
where
    F: FnOnce(R) -> B,
{
    either(Left, |inner| Right(f(inner)), value)
}

pub fn fmap<L, R, B, F>(f: F, value: Either<L, R>) -> Either<L, B>
where
    F: FnOnce(R) -> B,
{
    map(f, value)
}

/// Single-step fold: `init` for a `Left`, `f(init, value)` for a `Right`.
pub fn fold<L, R, A, F>(f: F, init: A, value: Either<L, R>) -> A
where
    F: FnOnce(A, R) -> A,
{
    match value.into_right() {
        Some(inner) => f(init, inner),
        None => init,
    }
}

pub fn foldl<L, R, A, F>(f: F, init: A, value: Either<L, R>) -> A
where
    F: FnOnce(A, R) -> A,
{
    fold(f, init, value)
}

pub fn foldr<L, R, A, F>(f: F, init: A, value: Either<L, R>) -> A
where
    F: FnOnce(A, R) -> A,
{
    fold(f, init, value)
}

pub fn of<L, R>(value: R) -> Either<L, R> {
    Right(value)
}

/// Applies the function held in `apply` to `value`.
/// The function side is checked first, so its `Left` wins.
pub fn ap<L, R, B, F>(apply: Either<L, F>, value: Either<L, R>) -> Either<L, B>
where
    F: FnOnce(R) -> B,
{
    either(Left, |f| map(f, value), apply)
}

/// `first` if it is a `Right`, `second` otherwise.
pub fn alt<L, R>(first: Either<L, R>, second: Either<L, R>) -> Either<L, R> {
    if first.is_right() {
        first
    } else {
        second
    }
}

/// Removes one level of nesting from the `Right` side.
pub fn flatten<L, R>(value: Either<L, Either<L, R>>) -> Either<L, R> {
    either(Left, |inner| inner, value)
}

pub fn show<L: Show, R: Show>(value: &Either<L, R>) -> String {
    either(
        |inner| format!("Either.Left({})", inner.show()),
        |inner| format!("Either.Right({})", inner.show()),
        value.as_ref(),
    )
}

/// Hashes the variant tag (0 for `Left`, 1 for `Right`) into `seed`,
/// then hashes the wrapped value with the result.
pub fn hash_with_seed<L: Hashable, R: Hashable>(seed: u64, value: &Either<L, R>) -> u64 {
    let tag: u8 = either(|_| 0, |_| 1, value.as_ref());
    let seed = tag.hash_with_seed(seed);
    either(
        |inner| inner.hash_with_seed(seed),
        |inner| inner.hash_with_seed(seed),
        value.as_ref(),
    )
}
