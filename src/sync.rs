#[cfg(feature = "std")]
pub struct Lazy<T> {
    cell: std::sync::OnceLock<T>,
    init: fn() -> T,
}

#[cfg(feature = "std")]
impl<T> Lazy<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: std::sync::OnceLock::new(),
            init,
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.init)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub struct Lazy<T> {
    cell: spin::Once<T>,
    init: fn() -> T,
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl<T> Lazy<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: spin::Once::new(),
            init,
        }
    }

    pub fn get(&self) -> &T {
        self.cell.call_once(self.init)
    }
}
