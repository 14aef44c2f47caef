#[cfg(feature = "std")]
pub trait RegistryKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> RegistryKey for T {}

#[cfg(not(feature = "std"))]
pub trait RegistryKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> RegistryKey for T {}
