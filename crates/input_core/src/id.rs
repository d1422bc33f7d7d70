//! Identifier for a field instance.
//!
//! A plain `u64` keeps this crate free of any widget or framework handle type.
//! Integration layers provide `From` implementations for their own handles.

/// Opaque identifier for a field within an [`InputValueStore`](crate::InputValueStore).
///
/// One field instance owns one id; the store never lets two fields share an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}
