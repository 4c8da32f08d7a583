//! # Hotbar Module
//!
//! The player's nine-slot quick-access inventory. Each slot holds a block
//! material and a count; one slot is always selected. Slots are mutated only
//! through the break/place edit operations (deposit/withdraw) and through
//! bounds-checked selection.
//!
//! Counts are capped at [`MAX_STACK`]. Yield beyond the cap is silently
//! discarded, matching the reference behavior. When a withdrawal empties a
//! slot its material resets to air so the slot can accept a new material.

use super::voxels::block::block_type::BlockType;

/// Number of slots in the hotbar.
pub const SLOT_COUNT: usize = 9;

/// Maximum count a single slot can hold.
pub const MAX_STACK: u32 = 40;

/// One hotbar slot: a material and how many of it are held.
///
/// An empty slot has `count == 0` and `block_type == AIR`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotbarSlot {
    /// The material held in this slot. Air when the slot is empty.
    pub block_type: BlockType,
    /// How many blocks of the material are held, in `[0, MAX_STACK]`.
    pub count: u32,
}

/// The nine-slot hotbar plus the selected slot index.
pub struct Hotbar {
    slots: [HotbarSlot; SLOT_COUNT],
    selected: usize,
}

impl Hotbar {
    /// Creates a hotbar with all slots empty and slot 0 selected.
    pub fn new() -> Self {
        Hotbar {
            slots: [HotbarSlot::default(); SLOT_COUNT],
            selected: 0,
        }
    }

    /// Creates a hotbar with every slot pre-filled with the same stack, the
    /// way the demo starts the player out.
    ///
    /// # Arguments
    /// * `block_type` - The material to fill each slot with
    /// * `count` - The per-slot count, capped at `MAX_STACK`
    pub fn with_stacks(block_type: BlockType, count: u32) -> Self {
        let slot = HotbarSlot {
            block_type,
            count: count.min(MAX_STACK),
        };
        Hotbar {
            slots: [slot; SLOT_COUNT],
            selected: 0,
        }
    }

    /// Returns the full slot array.
    pub fn slots(&self) -> &[HotbarSlot; SLOT_COUNT] {
        &self.slots
    }

    /// Returns the index of the currently selected slot.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns a copy of the currently selected slot.
    pub fn selected_slot(&self) -> HotbarSlot {
        self.slots[self.selected]
    }

    /// Selects the slot at `index`.
    ///
    /// Out-of-range indices are rejected and leave the selection unchanged.
    ///
    /// # Returns
    /// `true` if the index was valid and is now selected.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= SLOT_COUNT {
            return false;
        }
        self.selected = index;
        true
    }

    /// Deposits one block of `block_type` into the selected slot.
    ///
    /// An empty slot or a slot already holding the same material takes the
    /// block, capped at `MAX_STACK` (excess is discarded). A slot holding a
    /// different material is overwritten with a fresh count of 1.
    pub fn deposit(&mut self, block_type: BlockType) {
        let slot = &mut self.slots[self.selected];
        if slot.block_type.is_air() || slot.block_type == block_type {
            slot.block_type = block_type;
            slot.count = (slot.count + 1).min(MAX_STACK);
        } else {
            slot.block_type = block_type;
            slot.count = 1;
        }
    }

    /// Withdraws one block from the selected slot.
    ///
    /// A withdrawal that empties the slot resets its material to air.
    ///
    /// # Returns
    /// The withdrawn material, or `None` when the slot is empty.
    pub fn withdraw(&mut self) -> Option<BlockType> {
        let slot = &mut self.slots[self.selected];
        if slot.count == 0 {
            return None;
        }

        let block_type = slot.block_type;
        slot.count -= 1;
        if slot.count == 0 {
            slot.block_type = BlockType::AIR;
        }
        Some(block_type)
    }
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::new()
    }
}
