//! Order reconciliation between a fresh listing and the saved order

use crate::model::{compare_names, Clip};

/// Merge freshly fetched clips with a saved id order
///
/// Clips named in `saved` come first, in saved order. Remaining clips follow,
/// sorted by title ignoring case; the sort is stable so incoming order breaks
/// ties between identical titles.
/// Unknown or repeated saved ids are skipped. Running the merge again on its
/// own output with that output's ids returns the same sequence.
pub fn reconcile_order(fetched: Vec<Clip>, saved: &[String]) -> Vec<Clip> {
    let mut remaining: Vec<Option<Clip>> = fetched.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for id in saved {
        let slot = remaining
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|clip| &clip.id == id));
        if let Some(clip) = slot.and_then(Option::take) {
            ordered.push(clip);
        }
    }

    let mut unknown: Vec<Clip> = remaining.into_iter().flatten().collect();
    unknown.sort_by(|a, b| compare_names(&a.title, &b.title));
    ordered.extend(unknown);
    ordered
}

/// Ids of a clip sequence, in order
pub fn ids_of(clips: &[Clip]) -> Vec<String> {
    clips.iter().map(|clip| clip.id.clone()).collect()
}
