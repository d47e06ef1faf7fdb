//! Query engine over an in-memory sequence of players.
//!
//! Listing is `filter` → `sort` → `paginate`; counting is `filter` only.
//! Everything here is a full scan with no index.

mod criteria;
mod order;
mod page;

pub use criteria::PlayerCriteria;
pub use order::PlayerOrder;
pub use page::{PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

use crate::entities::Player;

/// Players satisfying every present criterion, in input order.
pub fn filter(
    players: impl IntoIterator<Item = Player>,
    criteria: &PlayerCriteria,
) -> Vec<Player> {
    players
        .into_iter()
        .filter(|player| criteria.matches(player))
        .collect()
}

/// Stable ascending sort by `order`.
pub fn sort(mut players: Vec<Player>, order: PlayerOrder) -> Vec<Player> {
    players.sort_by(|a, b| order.compare(a, b));
    players
}

/// The slice `[offset, offset + size)` of `players`, clamped to its length.
pub fn paginate(players: Vec<Player>, page: &PageRequest) -> Vec<Player> {
    players
        .into_iter()
        .skip(page.offset())
        .take(page.page_size())
        .collect()
}

/// Number of players satisfying `criteria`.
pub fn count<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    criteria: &PlayerCriteria,
) -> usize {
    players
        .into_iter()
        .filter(|player| criteria.matches(player))
        .count()
}

/// `filter` → `sort` → `paginate`.
pub fn list(
    players: impl IntoIterator<Item = Player>,
    criteria: &PlayerCriteria,
    order: PlayerOrder,
    page: &PageRequest,
) -> Vec<Player> {
    paginate(sort(filter(players, criteria), order), page)
}
