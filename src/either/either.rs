// Either struct

use std::any::Any;
use std::fmt;

/// A value that is exactly one of two alternatives.
///
/// `Left` conventionally carries a failure or an alternative, `Right` the primary value.
/// Nothing in the type enforces that reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

pub use Either::{Left, Right};

/// One arm of a [`Case`]: turns the wrapped value into the common result.
pub trait Handler<A, T> {
    fn handle(self, value: A) -> T;
}

impl<A, T, F> Handler<A, T> for F
where
    F: FnOnce(A) -> T,
{
    fn handle(self, value: A) -> T {
        self(value)
    }
}

/// Constant handler: ignores the wrapped value and returns its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const<T>(pub T);

impl<A, T> Handler<A, T> for Const<T> {
    fn handle(self, _value: A) -> T {
        self.0
    }
}

/// The two handlers given to [`Either::case`], one per variant.
#[derive(Debug, Clone, Copy)]
pub struct Case<HL, HR> {
    pub left: HL,
    pub right: HR,
}

impl<HL, HR> Case<HL, HR> {
    pub fn new(left: HL, right: HR) -> Self {
        Case { left, right }
    }
}

impl<L, R> Either<L, R> {
    /// Exhaustive dispatch over both variants.
    pub fn case<T, HL, HR>(self, handlers: Case<HL, HR>) -> T
    where
        HL: Handler<L, T>,
        HR: Handler<R, T>,
    {
        match self {
            Left(value) => handlers.left.handle(value),
            Right(value) => handlers.right.handle(value),
        }
    }

    pub fn is_left(&self) -> bool {
        self.as_ref().case(Case::new(Const(true), Const(false)))
    }

    pub fn is_right(&self) -> bool {
        self.as_ref().case(Case::new(Const(false), Const(true)))
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(value) => Left(value),
            Right(value) => Right(value),
        }
    }

    pub fn into_left(self) -> Option<L> {
        self.case(Case::new(Some, Const(None)))
    }

    pub fn into_right(self) -> Option<R> {
        self.case(Case::new(Const(None), Some))
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    pub fn into_result(self) -> Result<R, L> {
        self.case(Case::new(Err, Ok))
    }
}

impl<L: 'static, R: 'static> Either<L, R> {
    /// True iff `value` is an `Either` of this exact instantiation.
    pub fn member(value: &dyn Any) -> bool {
        value.is::<Either<L, R>>()
    }
}

/// Free-function form of [`Either::member`].
pub fn member<L: 'static, R: 'static>(value: &dyn Any) -> bool {
    Either::<L, R>::member(value)
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Right(value),
            Err(error) => Left(error),
        }
    }
}

/// Anything that can be looked at as an `Either`, owned or borrowed.
pub trait AsEither {
    type Left;
    type Right;

    fn as_either(&self) -> &Either<Self::Left, Self::Right>;
}

impl<L, R> AsEither for Either<L, R> {
    type Left = L;
    type Right = R;

    fn as_either(&self) -> &Either<L, R> {
        self
    }
}

impl<L, R> AsEither for &Either<L, R> {
    type Left = L;
    type Right = R;

    fn as_either(&self) -> &Either<L, R> {
        self
    }
}

impl<L, R> fmt::Display for Either<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, value) = self
            .as_ref()
            .case(Case::new(display_part::<L>("Left"), display_part::<R>("Right")));
        write!(f, "Either.{}({})", name, value)
    }
}

fn display_part<'a, T: fmt::Display>(
    name: &'static str,
) -> impl FnOnce(&'a T) -> (&'static str, &'a dyn fmt::Display) {
    move |value: &'a T| -> (&'static str, &'a dyn fmt::Display) { (name, value) }
}
