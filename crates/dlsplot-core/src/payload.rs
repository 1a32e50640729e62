// File: crates/dlsplot-core/src/payload.rs
// Summary: Decoding of the data source's JSON block payload into `Block`s.
// Notes:
// - Wire shape per block: {"meta": "gen"|"min"|"max", "start_time": <ticks>, "block": [[t, v], ...]}.
// - Both {"data": [...]} and a bare array are accepted.
// - Missing fields do not fail decoding: no/unknown `meta` -> kind None, no `block` -> no samples,
//   no `start_time` -> NaN (never pairs, never widens a range).

use std::io::Read;

use log::{debug, trace};
use serde::Deserialize;

use crate::block::{Block, BlockKind, Sample};
use crate::error::PayloadError;

#[derive(Debug, Deserialize)]
struct WireBlock {
    #[serde(default)]
    meta: Option<String>,
    #[serde(default)]
    start_time: Option<f64>,
    #[serde(default)]
    block: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePayload {
    Wrapped { data: Vec<WireBlock> },
    Bare(Vec<WireBlock>),
}

impl WirePayload {
    fn into_blocks(self) -> Vec<WireBlock> {
        match self {
            WirePayload::Wrapped { data } => data,
            WirePayload::Bare(data) => data,
        }
    }
}

pub fn parse_blocks(bytes: &[u8]) -> Result<Vec<Block>, PayloadError> {
    let payload: WirePayload = serde_json::from_slice(bytes)?;
    convert(payload.into_blocks())
}

pub fn parse_blocks_str(s: &str) -> Result<Vec<Block>, PayloadError> {
    parse_blocks(s.as_bytes())
}

pub fn read_blocks<R: Read>(reader: R) -> Result<Vec<Block>, PayloadError> {
    let payload: WirePayload = serde_json::from_reader(reader)?;
    convert(payload.into_blocks())
}

fn convert(wire: Vec<WireBlock>) -> Result<Vec<Block>, PayloadError> {
    let mut out = Vec::with_capacity(wire.len());
    for (bi, w) in wire.into_iter().enumerate() {
        let kind = w.meta.as_deref().and_then(BlockKind::from_tag);
        if kind.is_none() {
            trace!("block {bi}: meta {:?} not recognised", w.meta);
        }
        let mut samples = Vec::new();
        for (si, pair) in w.block.unwrap_or_default().into_iter().enumerate() {
            match pair.as_slice() {
                [t, v] => samples.push(Sample::new(*t, *v)),
                other => return Err(PayloadError::SampleArity { block: bi, sample: si, len: other.len() }),
            }
        }
        out.push(Block { kind, start_time: w.start_time.unwrap_or(f64::NAN), samples });
    }
    debug!("decoded {} block(s)", out.len());
    Ok(out)
}
