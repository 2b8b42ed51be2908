use core::fmt;

#[cfg(feature = "std")]
pub struct Once<T>(std::sync::OnceLock<T>);

#[cfg(feature = "std")]
impl<T> Once<T> {
    pub const fn new() -> Self {
        Self(std::sync::OnceLock::new())
    }

    pub fn initialized(value: T) -> Self {
        Self(std::sync::OnceLock::from(value))
    }

    pub fn get(&self) -> Option<&T> {
        self.0.get()
    }

    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub struct Once<T>(spin::Once<T>);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl<T> Once<T> {
    pub const fn new() -> Self {
        Self(spin::Once::new())
    }

    pub const fn initialized(value: T) -> Self {
        Self(spin::Once::initialized(value))
    }

    pub fn get(&self) -> Option<&T> {
        self.0.get()
    }

    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.call_once(f)
    }
}

impl<T: Clone> Clone for Once<T> {
    fn clone(&self) -> Self {
        self.get()
            .map_or_else(Self::new, |value| Self::initialized(value.clone()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Once<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Once").field(&self.get()).finish()
    }
}
