//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference sequence.
///
/// The simulators are generic over any `Copy + Eq + Hash` identifier;
/// `PageId` is the one the driver and the workload generator produce.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!(page_id.to_string(), "Page(7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
