#[cfg(feature = "threadsafe")]
mod inner {
    use std::sync::{LockResult, Mutex, MutexGuard};

    /// Marker to identify an implementing instance as thread-safe.
    pub trait SendAndSync: Send + Sync {}

    impl<T: Send + Sync> SendAndSync for T {}

    /// Interior-mutability cell guarding the write-once state of a
    /// [`Resource`](crate::resource::Resource), such as a lazily
    /// instantiated inner resource or a closed flag.
    pub(crate) struct Lock<T>(Mutex<T>);

    impl<T> Lock<T> {
        pub(crate) fn new(t: T) -> Self {
            Self(Mutex::new(t))
        }

        pub(crate) fn lock(&self) -> LockResult<MutexGuard<'_, T>> {
            self.0.lock()
        }
    }
}

#[cfg(not(feature = "threadsafe"))]
mod inner {
    use std::cell::{RefCell, RefMut};

    pub trait SendAndSync {}

    impl<T> SendAndSync for T {}

    pub(crate) struct Lock<T>(RefCell<T>);

    impl<T> Lock<T> {
        pub(crate) fn new(t: T) -> Self {
            Self(RefCell::new(t))
        }

        // LockResult keeps call sites identical across both cfg variants
        pub(crate) fn lock(&self) -> std::sync::LockResult<RefMut<'_, T>> {
            Ok(self.0.borrow_mut())
        }
    }
}

pub(crate) use inner::Lock;
pub use inner::SendAndSync;
