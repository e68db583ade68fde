use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard tab. The set is closed; every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Demographics,
    Features,
    Purchasing,
    Price,
    Channels,
    Brands,
}

impl SectionId {
    /// Tab order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Demographics,
        SectionId::Features,
        SectionId::Purchasing,
        SectionId::Price,
        SectionId::Channels,
        SectionId::Brands,
    ];

    /// Stable key used as the tab value.
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Demographics => "demographics",
            SectionId::Features => "features",
            SectionId::Purchasing => "purchasing",
            SectionId::Price => "price",
            SectionId::Channels => "channels",
            SectionId::Brands => "brands",
        }
    }

    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Demographics => "Demographics",
            SectionId::Features => "Important Features",
            SectionId::Purchasing => "Purchasing Factors",
            SectionId::Price => "Price Points",
            SectionId::Channels => "Purchase Channels",
            SectionId::Brands => "Brand Recognition",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown section '{}'", s))
    }
}

/// Tab state machine: exactly one section is active at any time.
///
/// Starts at [`SectionId::Demographics`]; a fresh value is created on every
/// mount, so nothing survives a remount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionNav {
    active: SectionId,
}

impl SectionNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == id
    }

    /// Move to `id` unconditionally. Returns whether the active tab changed;
    /// re-selecting the current tab is allowed and leaves the state as is.
    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }

    /// Sections to render for the current state, always exactly one.
    pub fn visible(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL.into_iter().filter(move |id| self.is_active(*id))
    }
}
