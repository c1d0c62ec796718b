//! Board view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Board::build`] turns a decoded [`RawBoard`] into the shape a renderer
//! walks: the active card with a readable modifier, and a warpath-by-space
//! grid of land cells with chiefdoms attached. The transform is pure; the
//! controller calls it once per successful board fetch and replaces the
//! previous model wholesale.
//!
//! EDGE CASES
//! ==========
//! Server integers are never trusted as indices. A land outside the grid, a
//! chiefdom whose cell has no land, and a good or tribe index with no name are
//! all logged and dropped rather than failing the whole build. Two lands on
//! the same cell keep the later one.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;
use tracing::warn;

use crate::lookup::{MAX_SPACES_PER_WARPATH, SPACES_PER_WARPATH, WARPATH_COUNT, good_name, tribe_name};
use crate::snapshot::{RawBoard, RawCard, RawChiefdom, RawLand};

// =============================================================================
// BOARD
// =============================================================================

/// Render-ready board: active card plus land grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub card: Option<Card>,
    pub lands: Lands,
}

impl Board {
    /// Build the view model from a raw snapshot.
    #[must_use]
    pub fn build(raw: &RawBoard) -> Self {
        let mut lands = Lands::empty();
        for land in &raw.lands {
            lands.place(land);
        }
        for (index, chiefdom) in raw.chiefdoms.iter().enumerate() {
            if let Some(chiefdom) = chiefdom {
                lands.attach(index, chiefdom);
            }
        }

        Self { card: raw.card.as_ref().map(Card::build), lands }
    }
}

// =============================================================================
// CARD
// =============================================================================

/// The active history card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub action_points: i64,
    pub is_white: bool,
    pub resource_bonus: Vec<i64>,
    pub revolt: i64,
    /// e.g. `"Natchez + 1"`.
    pub modifier: Option<String>,
}

impl Card {
    fn build(raw: &RawCard) -> Self {
        Self {
            title: raw.title.clone(),
            action_points: raw.action_points,
            is_white: raw.is_white,
            resource_bonus: raw.resource_bonus.clone(),
            revolt: raw.revolt,
            modifier: modifier_label(raw),
        }
    }
}

/// Zero means "no modifier" on the wire, so a `HoChunk` modifier is never shown.
fn modifier_label(card: &RawCard) -> Option<String> {
    let index = card.modifier.filter(|&index| index != 0)?;
    let Some(tribe) = tribe_name(index) else {
        warn!(modifier = index, title = %card.title, "card modifier has no tribe name");
        return None;
    };
    let sign = if card.is_ascendant { '+' } else { '-' };
    Some(format!("{tribe} {sign} 1"))
}

// =============================================================================
// LANDS
// =============================================================================

/// Warpath-major grid: always [`WARPATH_COUNT`] rows, each as wide as its
/// highest occupied space. Serializes as nested arrays with `null` holes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lands {
    rows: Vec<Vec<Option<LandCell>>>,
}

impl Lands {
    fn empty() -> Self {
        Self { rows: vec![Vec::new(); WARPATH_COUNT] }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<LandCell>>] {
        &self.rows
    }

    /// Cell at `(warpath, column)`, `column` being 0-based.
    #[must_use]
    pub fn cell(&self, warpath: usize, column: usize) -> Option<&LandCell> {
        self.rows.get(warpath)?.get(column)?.as_ref()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &LandCell)> {
        self.rows.iter().enumerate().flat_map(|(warpath, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(column, cell)| cell.as_ref().map(|cell| (warpath, column, cell)))
        })
    }

    fn place(&mut self, land: &RawLand) {
        let warpath = usize::try_from(land.warpath).ok().filter(|&w| w < WARPATH_COUNT);
        let column = usize::try_from(land.space)
            .ok()
            .filter(|&space| (1..=MAX_SPACES_PER_WARPATH).contains(&space))
            .map(|space| space - 1);
        let (Some(warpath), Some(column)) = (warpath, column) else {
            warn!(warpath = land.warpath, space = land.space, name = %land.name, "land outside board grid");
            return;
        };

        let row = &mut self.rows[warpath];
        if row.len() <= column {
            row.resize(column + 1, None);
        }
        row[column] = Some(LandCell {
            name: land.name.clone(),
            is_wilderness: land.is_wilderness,
            is_controlled: land.is_controlled,
            chiefdom: None,
        });
    }

    fn attach(&mut self, index: usize, chiefdom: &RawChiefdom) {
        let (warpath, column) = (index / SPACES_PER_WARPATH, index % SPACES_PER_WARPATH);
        let Some(cell) = self.rows.get_mut(warpath).and_then(|row| row.get_mut(column)).and_then(Option::as_mut)
        else {
            warn!(index, warpath, column, "chiefdom has no land to stand on");
            return;
        };

        let face = chiefdom.face();
        let good = good_name(chiefdom.counter.good);
        if good.is_none() {
            warn!(index, good = chiefdom.counter.good, "chiefdom good has no name");
        }
        cell.chiefdom = Some(ChiefdomView { good, value: face.value, is_green_bird: face.is_green_bird });
    }
}

/// One land on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandCell {
    pub name: String,
    pub is_wilderness: bool,
    pub is_controlled: bool,
    pub chiefdom: Option<ChiefdomView>,
}

/// The chiefdom counter standing on a land, showing its current face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChiefdomView {
    pub good: Option<&'static str>,
    pub value: i64,
    pub is_green_bird: bool,
}
