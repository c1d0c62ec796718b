//! Static lookup tables and board geometry.
//!
//! The server sends trade goods and tribes as bare integers. These tables map
//! those integers back to display names in the server's declaration order.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

/// Number of warpaths (rows) on the board.
pub const WARPATH_COUNT: usize = 5;

/// Spaces along one warpath. Flat per-land lists (such as `Chiefdoms`) are laid
/// out warpath-major with this stride.
pub const SPACES_PER_WARPATH: usize = 6;

/// Upper bound on the `Space` value accepted for a land cell.
pub const MAX_SPACES_PER_WARPATH: usize = 64;

/// Trade goods, indexed by the server's `TradeGood` integer.
pub const GOODS: [&str; 9] = [
    "Hides",
    "Chert",
    "Feathers",
    "Copper",
    "Mica",
    "Chalcedony",
    "Pipestone",
    "Obsidian",
    "Seashells",
];

/// Tribes, indexed by the server's `Tribe` integer.
///
/// The server also defines `All`, `None` and `CaddoOrShawnee` after `Spanish`;
/// those are card sentinels and have no display name here.
pub const TRIBES: [&str; 6] = ["HoChunk", "Shawnee", "Cherokee", "Natchez", "Caddo", "Spanish"];

/// Display name of a trade good, or `None` when `index` is out of range.
#[must_use]
pub fn good_name(index: i64) -> Option<&'static str> {
    lookup(&GOODS, index)
}

/// Display name of a tribe, or `None` when `index` is out of range.
#[must_use]
pub fn tribe_name(index: i64) -> Option<&'static str> {
    lookup(&TRIBES, index)
}

fn lookup(table: &[&'static str], index: i64) -> Option<&'static str> {
    usize::try_from(index).ok().and_then(|i| table.get(i).copied())
}
