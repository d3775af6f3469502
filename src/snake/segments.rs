//! Frame to seven-segment pattern encoder.
//!
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD
//! ```

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{index::Idx, signal::SignalValue};

pub const FRAMES: usize = 34;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    strum::Display,
    Serialize,
    Deserialize,
)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Set of lit segments. Segment A is bit 0, G is bit 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Segment>", from = "Vec<Segment>")]
pub struct Segments(u8);

impl SignalValue for Segments {}

impl Segments {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_slice(segs: &[Segment]) -> Self {
        let mut bits = 0;
        let mut idx = 0;
        while idx < segs.len() {
            bits |= segs[idx].mask();
            idx += 1;
        }
        Self(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(&self, seg: Segment) -> bool {
        self.0 & seg.mask() != 0
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        Segment::iter().filter(|seg| self.contains(*seg))
    }

    /// Line levels for segments A..G.
    pub fn lines(&self) -> [bool; Segment::COUNT] {
        let mut lines = [false; Segment::COUNT];
        for seg in self.iter() {
            lines[seg as usize] = true;
        }
        lines
    }
}

impl Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for seg in self.iter() {
            Display::fmt(&seg, f)?;
        }
        Ok(())
    }
}

impl From<Segments> for Vec<Segment> {
    fn from(segs: Segments) -> Self {
        segs.iter().collect()
    }
}

impl From<Vec<Segment>> for Segments {
    fn from(segs: Vec<Segment>) -> Self {
        Self::from_slice(&segs)
    }
}

/// Animation frame of a snake sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame(Idx<FRAMES>);

impl SignalValue for Frame {}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Idx<FRAMES>> for Frame {
    fn from(idx: Idx<FRAMES>) -> Self {
        Self(idx)
    }
}

impl Frame {
    pub const BITS: usize = Idx::<FRAMES>::BITS;

    /// # Panics
    /// If `val` is not a valid frame (`0..34`).
    pub const fn new(val: usize) -> Self {
        Self(Idx::new(val))
    }

    #[inline]
    pub const fn val(self) -> usize {
        self.0.val()
    }

    #[inline]
    pub const fn idx(self) -> Idx<FRAMES> {
        self.0
    }

    #[inline]
    pub const fn succ(self) -> Self {
        Self(self.0.succ())
    }

    #[inline]
    pub const fn segments(self) -> Segments {
        encode(self)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Idx::<FRAMES>::all().map(Self)
    }
}

use Segment::*;

const ABF: Segments = Segments::from_slice(&[A, B, F]);
const ABC: Segments = Segments::from_slice(&[A, B, C]);
const BCD: Segments = Segments::from_slice(&[B, C, D]);
const CDE: Segments = Segments::from_slice(&[C, D, E]);
const DEF: Segments = Segments::from_slice(&[D, E, F]);
const AEF: Segments = Segments::from_slice(&[A, E, F]);
const AF: Segments = Segments::from_slice(&[A, F]);
const AFG: Segments = Segments::from_slice(&[A, F, G]);
const CD: Segments = Segments::from_slice(&[C, D]);
const BC: Segments = Segments::from_slice(&[B, C]);
const EF: Segments = Segments::from_slice(&[E, F]);
const AB: Segments = Segments::from_slice(&[A, B]);
const DE: Segments = Segments::from_slice(&[D, E]);
const CDG: Segments = Segments::from_slice(&[C, D, G]);

#[rustfmt::skip]
const TABLE: [Segments; FRAMES] = [
    // lap 0
    ABF, ABC, BCD, CDE, DEF, AEF, AF, AFG,
    // lap 1
    ABF, ABC, CD, DEF, AEF, AF,
    // lap 2
    ABF, BC, CDE, DEF, EF, AEF, AF,
    // lap 3
    ABF, AB, BCD, DE, DEF, AEF, AFG,
    // lap 4
    ABF, ABC, CDG, DEF, AEF, AF,
];

/// Number of distinct patterns in the table.
pub const CLASSES: usize = 14;

#[inline]
pub const fn encode(frame: Frame) -> Segments {
    TABLE[frame.val()]
}

pub type FrameClass = SmallVec<[Frame; 5]>;

/// Groups frames sharing a pattern, in order of first appearance.
pub fn classes() -> IndexMap<Segments, FrameClass> {
    let mut classes: IndexMap<Segments, FrameClass> = IndexMap::with_capacity(CLASSES);
    for frame in Frame::all() {
        classes.entry(encode(frame)).or_default().push(frame);
    }
    classes
}
