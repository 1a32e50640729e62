// File: crates/dlsplot-core/src/block.rs
// Summary: Block model for decimated series: plain polylines and min/max envelope halves.

use serde::{Deserialize, Serialize};

/// Raw timestamp ticks per horizontal axis unit.
pub const TIME_DIVISOR: f64 = 1000.0;

/// What a block contributes to the picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Plain polyline.
    #[serde(rename = "gen")]
    Generic,
    /// Lower curve of an envelope band; owns the band's path.
    #[serde(rename = "min")]
    EnvelopeMin,
    /// Upper curve of an envelope band; only drawn through its `EnvelopeMin` partner.
    #[serde(rename = "max")]
    EnvelopeMax,
}

impl BlockKind {
    /// Decode the wire tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gen" => Some(Self::Generic),
            "min" => Some(Self::EnvelopeMin),
            "max" => Some(Self::EnvelopeMax),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Generic => "gen",
            Self::EnvelopeMin => "min",
            Self::EnvelopeMax => "max",
        }
    }
}

/// One `(timestamp, value)` pair. Serialized as a two element array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Sample {
    pub t: f64, // raw ticks
    pub v: f64,
}

impl Sample {
    pub const fn new(t: f64, v: f64) -> Self {
        Self { t, v }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((t, v): (f64, f64)) -> Self {
        Self { t, v }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(s: Sample) -> Self {
        (s.t, s.v)
    }
}

/// Atomic drawable unit of a series.
///
/// `kind` is `None` when the producer sent no tag (or one this crate does not
/// know); such blocks are never drawn but still count for the vertical range.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub kind: Option<BlockKind>,
    /// Nominal start tick; pairs an `EnvelopeMin` with its `EnvelopeMax`.
    pub start_time: f64,
    pub samples: Vec<Sample>,
}

impl Block {
    pub fn new(kind: BlockKind, start_time: f64, samples: Vec<Sample>) -> Self {
        Self { kind: Some(kind), start_time, samples }
    }

    pub fn generic(start_time: f64, samples: Vec<Sample>) -> Self {
        Self::new(BlockKind::Generic, start_time, samples)
    }

    pub fn envelope_min(start_time: f64, samples: Vec<Sample>) -> Self {
        Self::new(BlockKind::EnvelopeMin, start_time, samples)
    }

    pub fn envelope_max(start_time: f64, samples: Vec<Sample>) -> Self {
        Self::new(BlockKind::EnvelopeMax, start_time, samples)
    }

    /// Build a block from `(t, v)` tuples.
    pub fn from_pairs(kind: BlockKind, start_time: f64, pairs: &[(f64, f64)]) -> Self {
        Self::new(kind, start_time, pairs.iter().copied().map(Sample::from).collect())
    }

    /// A block with a kind and at least two samples; everything else is skipped when drawing.
    pub fn is_drawable(&self) -> bool {
        self.kind.is_some() && self.samples.len() > 1
    }

    pub fn is_kind(&self, kind: BlockKind) -> bool {
        self.kind == Some(kind)
    }

    pub fn last_sample(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

/// First `EnvelopeMax` block in series order sharing `start_time` and holding
/// at least two samples.
pub fn find_envelope_max(blocks: &[Block], start_time: f64) -> Option<&Block> {
    blocks.iter().find(|b| {
        b.is_kind(BlockKind::EnvelopeMax) && b.start_time == start_time && b.samples.len() > 1
    })
}
