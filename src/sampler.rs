use std::collections::HashSet;

use crate::logger;
use crate::models::VocabularyEntry;
use crate::random::RandomSource;

pub const OPTION_COUNT: usize = 4;

/// Random draws allowed per option slot before falling back to a scan.
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Builds the shuffled answer choices for `target`.
///
/// Returns `min(OPTION_COUNT, distinct translations)` unique strings, always
/// including `target.translation`. Distractors are drawn at random from
/// `pool`; once the attempt budget is spent the remaining slots are filled
/// with unused translations in pool order.
pub fn build_options<R: RandomSource + ?Sized>(
    target: &VocabularyEntry,
    pool: &[VocabularyEntry],
    rng: &mut R,
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(target.translation.as_str());
    for entry in pool {
        seen.insert(entry.translation.as_str());
    }
    let wanted = OPTION_COUNT.min(seen.len());

    let mut options = vec![target.translation.clone()];
    let mut attempts = 0;
    let max_attempts = MAX_SAMPLING_ATTEMPTS * wanted;

    while options.len() < wanted && attempts < max_attempts && !pool.is_empty() {
        attempts += 1;
        let candidate = &pool[rng.pick_index(pool.len())];
        if !options.contains(&candidate.translation) {
            options.push(candidate.translation.clone());
        }
    }

    if options.len() < wanted {
        logger::log(&format!(
            "Option sampling for '{}' hit the attempt cap, filling {} slot(s) in order",
            target.term,
            wanted - options.len()
        ));
        for entry in pool {
            if options.len() == wanted {
                break;
            }
            if !options.contains(&entry.translation) {
                options.push(entry.translation.clone());
            }
        }
    }

    rng.shuffle(&mut options);
    options
}
