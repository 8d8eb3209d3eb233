//! The four-slot pick state machine behind the guided reading.
//!
//! A cursor (`active`) names the slot the next pick lands in. Picking fills
//! that slot and advances the cursor until it reaches [`Slot::Future`], where
//! it stays. Clearing a slot re-arms it as the cursor target.
//!
//! The machine deliberately accepts the same bottle in several slots; the
//! reading view hides already-used bottles from its picker instead.

use crate::catalog::BottleRecord;
use strum::{Display, EnumIter, IntoEnumIterator};

/// One of the four fixed reading positions, in order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
)]
pub enum Slot {
    #[strum(to_string = "1")]
    Soul,
    #[strum(to_string = "2")]
    ChallengeGift,
    #[strum(to_string = "3")]
    Present,
    #[strum(to_string = "4")]
    Future,
}

impl Slot {
    pub const COUNT: usize = 4;

    /// 1-based position number.
    pub fn number(self) -> u8 {
        match self {
            Self::Soul => 1,
            Self::ChallengeGift => 2,
            Self::Present => 3,
            Self::Future => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Soul),
            2 => Some(Self::ChallengeGift),
            3 => Some(Self::Present),
            4 => Some(Self::Future),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Which bottle sits in each slot, plus the pick cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<'a> {
    active: Slot,
    slots: [Option<&'a BottleRecord>; Slot::COUNT],
}

impl Default for SelectionState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SelectionState<'a> {
    pub fn new() -> Self {
        Self {
            active: Slot::Soul,
            slots: [None; Slot::COUNT],
        }
    }

    pub fn active(&self) -> Slot {
        self.active
    }

    pub fn get(&self, slot: Slot) -> Option<&'a BottleRecord> {
        self.slots[slot.index()]
    }

    /// Place `bottle` into the active slot and advance the cursor.
    ///
    /// Returns the slot that was filled. At [`Slot::Future`] the cursor does
    /// not move, so a further pick replaces the fourth bottle.
    pub fn pick(&mut self, bottle: &'a BottleRecord) -> Slot {
        let filled = self.active;
        self.slots[filled.index()] = Some(bottle);
        if let Some(next) = filled.next() {
            self.active = next;
        }
        filled
    }

    /// Empty `slot` and make it the target of the next pick.
    pub fn clear_slot(&mut self, slot: Slot) {
        self.slots[slot.index()] = None;
        self.active = slot;
    }

    /// Move the cursor without changing any slot.
    pub fn focus(&mut self, slot: Slot) {
        self.active = slot;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether `bottle` (by id) already occupies any slot.
    pub fn contains(&self, bottle: &BottleRecord) -> bool {
        self.slots.iter().flatten().any(|b| b.id == bottle.id)
    }

    /// Slots in order with their contents.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<&'a BottleRecord>)> + '_ {
        Slot::all().map(|slot| (slot, self.get(slot)))
    }
}
