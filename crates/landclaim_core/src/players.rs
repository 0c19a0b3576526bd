//! Player slots: which players are active and where their headquarters stand.

use landclaim_data::{MapPoint, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub used: bool,
    pub hq: Option<MapPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    slots: Vec<PlayerSlot>,
}

impl PlayerRegistry {
    /// Registry with players `1..=count` active and no headquarters placed.
    #[must_use]
    pub fn new(count: u8) -> Self {
        Self {
            slots: vec![
                PlayerSlot {
                    used: true,
                    hq: None,
                };
                usize::from(count)
            ],
        }
    }

    fn slot(&self, player: PlayerId) -> Option<&PlayerSlot> {
        self.slots.get(player.slot())
    }

    #[must_use]
    pub fn is_used(&self, player: PlayerId) -> bool {
        self.slot(player).is_some_and(|s| s.used)
    }

    /// Headquarters position; `None` until one is placed.
    #[must_use]
    pub fn hq_pos(&self, player: PlayerId) -> Option<MapPoint> {
        self.slot(player).and_then(|s| s.hq)
    }

    pub(crate) fn set_hq(&mut self, player: PlayerId, hq: Option<MapPoint>) {
        if let Some(slot) = self.slots.get_mut(player.slot()) {
            slot.hq = hq;
        }
    }

    pub(crate) fn retire(&mut self, player: PlayerId) {
        if let Some(slot) = self.slots.get_mut(player.slot()) {
            slot.used = false;
            slot.hq = None;
        }
    }

    /// Active players in id order.
    pub fn active(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            let id = u8::try_from(i + 1).ok().and_then(PlayerId::new)?;
            s.used.then_some(id)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
