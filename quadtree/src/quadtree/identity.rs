use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison for payloads.
///
/// The tree never looks inside a payload; it only needs to tell whether two handles
/// refer to the same object. Shared pointers and references compare by address, plain
/// integer handles (entity ids) by value.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for Rc<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for Arc<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<'a, U: ?Sized> Identity for &'a U {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

macro_rules! handle_identity {
    ($($ty:ty),*) => {
        $(
            impl Identity for $ty {
                #[inline(always)]
                fn is_same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

handle_identity!(u32, u64, usize);
