//! Master/override composition: the effective element list for one slot.

use crate::master::MasterLabel;
use crate::model::Element;
use crate::overrides::LabelOverride;

/// Resolves the render-ready element list for a slot.
///
/// Walks the master in declaration order: hidden ids are skipped (hide wins
/// even when the same id also carries a patch), patched ids are emitted as a
/// copy with the patch merged on top, everything else is copied unmodified.
/// Slot-only elements follow, then the whole list is stably sorted by
/// z-index ascending, so equal z keeps the order built above. Deterministic
/// for identical inputs.
///
/// Pure: allocates fresh copies and never mutates `master` or `ovr`.
/// Overrides referencing ids no longer in the master are inert.
pub fn resolve(master: &MasterLabel, ovr: Option<&LabelOverride>) -> Vec<Element> {
    let extra = ovr.map_or(0, |o| o.additional_elements.len());
    let mut resolved = Vec::with_capacity(master.len() + extra);

    for element in master.elements() {
        match ovr {
            Some(o) if o.hides(element.id) => continue,
            Some(o) => {
                let mut copy = element.clone();
                if let Some(patch) = o.patch_for(element.id) {
                    patch.apply(&mut copy);
                }
                resolved.push(copy);
            }
            None => resolved.push(element.clone()),
        }
    }

    if let Some(o) = ovr {
        for element in &o.additional_elements {
            // Slot-only ids must never collide with master ids; skip rather
            // than render the same id twice.
            if master.contains(element.id) {
                tracing::warn!(
                    element_id = %element.id,
                    "additional element id collides with a master element, skipping"
                );
                continue;
            }
            resolved.push(element.clone());
        }
    }

    // Stable sort: the tie-break for equal z is the order built above.
    resolved.sort_by_key(|e| e.z_index);
    resolved
}
