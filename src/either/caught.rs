// Error capture
//
// Turns a function reporting failure through `Result` into one that
// answers with an `Either`. Panics are not intercepted.

use log::trace;

use crate::either::Either;

/// A fallible function callable with the argument tuple `Args`.
pub trait Catch<Args> {
    type Output;
    type Error;

    /// Number of parameters the wrapped function takes.
    const ARITY: usize;

    fn call_caught(&self, args: Args) -> Either<Self::Error, Self::Output>;
}

macro_rules! impl_catch {
    ($arity:expr; $($ty:ident $name:ident),*) => {
        impl<Func, Out, Fail, $($ty),*> Catch<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Result<Out, Fail>,
        {
            type Output = Out;
            type Error = Fail;

            const ARITY: usize = $arity;

            fn call_caught(&self, ($($name,)*): ($($ty,)*)) -> Either<Fail, Out> {
                let result = Either::from(self($($name),*));
                if result.is_left() {
                    trace!("captured error from {}-argument call", $arity);
                }
                result
            }
        }
    };
}

impl_catch!(0;);
impl_catch!(1; A a);
impl_catch!(2; A a, B b);
impl_catch!(3; A a, B b, C c);
impl_catch!(4; A a, B b, C c, D d);

/// A function wrapped by [`caught`].
#[derive(Debug, Clone, Copy)]
pub struct Caught<F> {
    inner: F,
}

impl<F> Caught<F> {
    /// Calls the wrapped function with an argument tuple.
    /// `Ok(v)` comes back as `Right(v)`, `Err(e)` as `Left(e)`.
    pub fn call<Args>(&self, args: Args) -> Either<F::Error, F::Output>
    where
        F: Catch<Args>,
    {
        self.inner.call_caught(args)
    }

    pub fn arity<Args>(&self) -> usize
    where
        F: Catch<Args>,
    {
        F::ARITY
    }
}

pub fn caught<F>(f: F) -> Caught<F> {
    Caught { inner: f }
}
