//! Per-unit directive pipeline

use crate::classifier::classify;
use crate::directive::{Directive, Mode, Outcome};
use smallvec::SmallVec;

/// Scratch buffer large enough for any converted unit
pub type UnitBuf = SmallVec<[u8; 8]>;

/// A unit that at least one directive rewrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Final bytes of the unit
    pub bytes: UnitBuf,
    /// Directives that fired, in the order they were applied
    pub applied: SmallVec<[Directive; 4]>,
}

/// Run `unit` through the directives of `mode`
///
/// Returns `None` when the unit is emitted verbatim. The first directive
/// whose category matches the unit converts it and the result is final,
/// unless the unit matched several directives of the mode at once (a
/// full-width `Ａ` is both a Latin letter and printable, so `r` and `a`
/// compete for it). Competing directives are then applied in mode order,
/// each to the re-classified result of the previous one. A matching
/// directive that has no counterpart for the unit ends the walk.
pub fn convert_unit(mode: &Mode, unit: &[u8]) -> Option<Conversion> {
    let flags = classify(unit);
    if flags.is_empty() {
        return None;
    }

    let competing: SmallVec<[Directive; 4]> = mode.iter().filter(|d| d.matches(flags)).collect();
    let (&first, rest) = competing.split_first()?;
    let replacement = match first.apply(unit, flags) {
        Outcome::Converted(replacement) => replacement,
        Outcome::NotEligible | Outcome::Unmapped => return None,
    };

    let mut conversion = Conversion {
        bytes: UnitBuf::new(),
        applied: SmallVec::new(),
    };
    replacement.write_to(&mut conversion.bytes);
    conversion.applied.push(first);

    for &directive in rest {
        let current = &conversion.bytes;
        match directive.apply(current, classify(current)) {
            Outcome::NotEligible => continue,
            Outcome::Unmapped => break,
            Outcome::Converted(replacement) => {
                let mut next = UnitBuf::new();
                replacement.write_to(&mut next);
                conversion.bytes = next;
                conversion.applied.push(directive);
            }
        }
    }

    Some(conversion)
}
