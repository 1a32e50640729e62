// File: crates/dlsplot-demo/src/input.rs
// Summary: Input loaders: JSON block payloads and CSV sample tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use dlsplot_core::{read_blocks, Block, BlockKind, Sample};
use log::{debug, warn};
use serde::Deserialize;

/// Dispatch on extension: `.csv` is a sample table, anything else a JSON payload.
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let is_csv = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_csv(file)
    } else {
        Ok(read_blocks(file)?)
    }
}

#[derive(Debug, Deserialize)]
struct Row {
    kind: String,
    start_time: f64,
    t: f64,
    v: f64,
}

/// Rows `kind,start_time,t,v`; consecutive rows sharing `(kind, start_time)`
/// form one block, in file order.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Block>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let mut out: Vec<Block> = Vec::new();
    // wire tag of the block being filled, to split on unknown tags too
    let mut current_tag: Option<String> = None;

    for (line, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("CSV row {}", line + 1))?;
        let kind = BlockKind::from_tag(&row.kind);
        if kind.is_none() {
            warn!("CSV row {}: unknown kind `{}`", line + 1, row.kind);
        }
        let same_block = current_tag.as_deref() == Some(row.kind.as_str())
            && out.last().is_some_and(|b| b.start_time == row.start_time);
        if !same_block {
            out.push(Block { kind, start_time: row.start_time, samples: Vec::new() });
            current_tag = Some(row.kind);
        }
        if let Some(b) = out.last_mut() {
            b.samples.push(Sample::new(row.t, row.v));
        }
    }
    debug!("CSV produced {} block(s)", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_rows_group_into_blocks() {
        let csv = "kind,start_time,t,v\n\
                   min,0,0,1.0\nmin,0,1000,2.0\n\
                   max,0,0,3.0\nmax,0,1000,4.0\n\
                   gen,2000,2000,0.5\ngen,2000,3000,0.7\n\
                   gen,4000,4000,0.9\n";
        let blocks = load_csv(csv.as_bytes()).expect("csv");
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].kind, Some(BlockKind::EnvelopeMin));
        assert_eq!(blocks[1].samples, vec![Sample::new(0.0, 3.0), Sample::new(1000.0, 4.0)]);
        assert_eq!(blocks[2].samples.len(), 2);
        assert_eq!(blocks[3].start_time, 4000.0);
    }

    #[test]
    fn unknown_kinds_are_kept_untagged() {
        let csv = "kind,start_time,t,v\navg,0,0,1\navg,0,1,2\n";
        let blocks = load_csv(csv.as_bytes()).expect("csv");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, None);
        assert_eq!(blocks[0].samples.len(), 2);
    }

    #[test]
    fn bad_numbers_are_reported() {
        let csv = "kind,start_time,t,v\ngen,0,zero,1\n";
        assert!(load_csv(csv.as_bytes()).is_err());
    }
}
