//! The content render loop.
//!
//! For each slot: look up the mount, skip the slot if there is none, otherwise
//! format every entry in order and append it. A malformed entry becomes a
//! placeholder; a failed append is logged and counted. Neither stops the loop.

use tracing::{debug, info, warn};

use crate::components::{Fragment, Record};
use crate::content::{Collection, Content};
use crate::host::{MountPoint, MountRegistry};
use crate::types::Slot;

/// What happened to one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// No mount point on the page
    Skipped,
    Rendered {
        /// Fragments appended, placeholders included
        appended: usize,
        /// Malformed entries rendered as placeholders
        placeholders: usize,
        /// Appends the host rejected
        failed: usize,
    },
}

/// Per-slot outcomes of one [`render`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    outcomes: Vec<(Slot, SlotOutcome)>,
}

impl RenderSummary {
    pub fn outcome(&self, slot: Slot) -> Option<SlotOutcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, outcome)| *outcome)
    }

    /// Fragments appended to `slot`'s mount (0 when skipped).
    pub fn appended(&self, slot: Slot) -> usize {
        match self.outcome(slot) {
            Some(SlotOutcome::Rendered { appended, .. }) => appended,
            _ => 0,
        }
    }

    pub fn total_appended(&self) -> usize {
        Slot::ALL.iter().map(|slot| self.appended(*slot)).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = Slot> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == SlotOutcome::Skipped)
            .map(|(slot, _)| *slot)
    }

    fn record(&mut self, slot: Slot, outcome: SlotOutcome) {
        self.outcomes.push((slot, outcome));
    }
}

/// Renders every category of `content` into the mounts of `registry`.
pub fn render<M: MountPoint>(registry: &MountRegistry<M>, content: &Content) -> RenderSummary {
    let mut summary = RenderSummary::default();
    summary.record(Slot::Features, render_collection(registry, &content.features));
    summary.record(Slot::Steps, render_collection(registry, &content.steps));
    summary.record(Slot::UseCases, render_collection(registry, &content.use_cases));
    summary.record(Slot::Testimonials, render_collection(registry, &content.testimonials));
    summary.record(Slot::Faq, render_collection(registry, &content.faq));

    info!(
        appended = summary.total_appended(),
        skipped = summary.skipped().count(),
        "content rendered"
    );
    summary
}

fn render_collection<T: Record, M: MountPoint>(
    registry: &MountRegistry<M>,
    collection: &Collection<T>,
) -> SlotOutcome {
    let slot = T::SLOT;
    let Some(mount) = registry.get(slot) else {
        debug!(%slot, "no mount point, skipping");
        return SlotOutcome::Skipped;
    };

    let mut appended = 0;
    let mut placeholders = 0;
    let mut failed = 0;

    for (index, entry) in collection.entries().iter().enumerate() {
        let fragment = match entry {
            Ok(record) => record.format(index),
            Err(malformed) => {
                warn!(%slot, index, reason = %malformed.reason, "malformed record, rendering placeholder");
                placeholders += 1;
                Fragment::placeholder(malformed)
            }
        };

        match mount.append(&fragment) {
            Ok(()) => appended += 1,
            Err(err) => {
                warn!(%slot, index, error = %err, "failed to append fragment");
                failed += 1;
            }
        }
    }

    debug!(%slot, appended, placeholders, failed, "slot rendered");
    SlotOutcome::Rendered {
        appended,
        placeholders,
        failed,
    }
}
