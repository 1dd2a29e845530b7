//! Uniform calling convention for fallible operations of any arity.
//!
//! [`Operation`] lets a [`Guarded`](crate::Guarded) wrapper call closures and
//! functions taking zero to six arguments. Arguments travel as a tuple, so a
//! wrapped operation keeps its own parameter list.
//!
//! # Examples
//!
//! ```
//! use error_policy::traits::Operation;
//!
//! let split = |text: &str, at: usize| -> Result<usize, core::fmt::Error> {
//!     Ok(text.len().saturating_sub(at))
//! };
//!
//! assert_eq!(split.invoke(("hello", 2)), Ok(3));
//! ```

/// A fallible operation called with its arguments packed in a tuple.
pub trait Operation<Args> {
    /// Value produced on success.
    type Output;
    /// Error produced on failure.
    type Error;

    /// Calls the operation.
    fn invoke(&self, args: Args) -> Result<Self::Output, Self::Error>;
}

macro_rules! impl_operation {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, T, E, $($ty),*> Operation<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Result<T, E>,
        {
            type Output = T;
            type Error = E;

            #[inline]
            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Result<T, E> {
                (self)($($arg),*)
            }
        }
    };
}

impl_operation!();
impl_operation!(a1: A1);
impl_operation!(a1: A1, a2: A2);
impl_operation!(a1: A1, a2: A2, a3: A3);
impl_operation!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_operation!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_operation!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
