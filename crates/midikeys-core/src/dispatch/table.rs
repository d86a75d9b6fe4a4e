//! The compiled dispatch table and its lookup algorithm.

use std::collections::HashMap;

use crate::domain::event::{EventKind, NormalizedEvent};
use crate::domain::selector::{ChannelSelector, ValueSelector};
use crate::keymap::KeyChord;

type ValueTier = HashMap<ValueSelector, Vec<KeyChord>>;
type ChannelTier = HashMap<ChannelSelector, ValueTier>;
type NumberTier = HashMap<u8, ChannelTier>;

/// One compiled matcher derived from a single midi entry.
///
/// The reference restricts each entry to one channel and one value selector;
/// the vectors keep the insert loop shaped for explicit selector lists.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSpec {
    pub kind: EventKind,
    pub number: u8,
    pub channels: Vec<ChannelSelector>,
    pub values: Vec<ValueSelector>,
    pub chord: KeyChord,
}

/// The compiled, read-only dispatch structure mapping event shape to chords.
///
/// Built once by [`crate::compile`] and never mutated afterwards, so it can
/// be shared freely across event-delivery threads.
///
/// For each [`EventKind`] the table nests `number → channel selector → value
/// selector → chords`.  Multiple rules compiling to the identical tuple
/// accumulate in declaration order; they never overwrite one another.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    kinds: HashMap<EventKind, NumberTier>,
}

impl DispatchTable {
    /// Appends `spec`'s chord at every `(channel, value)` cell it declares.
    pub(crate) fn insert(&mut self, spec: MatchSpec) {
        let numbers = self.kinds.entry(spec.kind).or_default();
        let channels = numbers.entry(spec.number).or_default();
        for channel in &spec.channels {
            let values = channels.entry(*channel).or_default();
            for value in &spec.values {
                values
                    .entry(*value)
                    .or_default()
                    .push(spec.chord.clone());
            }
        }
    }

    /// Resolves `event` to the accumulated chord list, or `None`.
    ///
    /// Fallback order, evaluated independently per tier:
    ///
    /// 1. unconfigured kind → no match
    /// 2. unconfigured number → no match (there is no "any number")
    /// 3. channel tier: the specific channel bucket if present, else the
    ///    any-channel bucket, else no match
    /// 4. value tier *within the selected channel bucket*: the specific
    ///    value if present, else any-value, else no match
    ///
    /// The channel tier commits before the value tier runs: a
    /// specific-channel bucket with no value match is a final no-match even
    /// if the any-channel bucket would have matched.
    pub fn lookup(&self, event: &NormalizedEvent) -> Option<&[KeyChord]> {
        let channels = self.kinds.get(&event.kind)?.get(&event.number)?;
        let values = channels
            .get(&ChannelSelector::Specific(event.channel))
            .or_else(|| channels.get(&ChannelSelector::Any))?;
        let chords = values
            .get(&ValueSelector::Specific(event.value))
            .or_else(|| values.get(&ValueSelector::Any))?;
        Some(chords.as_slice())
    }

    /// `true` when no rule was compiled into the table.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
