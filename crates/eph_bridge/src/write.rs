//! Hand the bridged coefficient matrix to C3 (§4.8 step 3).

use std::path::Path;

use eph_container::{BodyInput, CoeffBlock, encode_to_path};

use crate::error::BridgeError;

/// One body's bridged data, ready to write.
pub struct BridgedBody {
    pub id: i32,
    pub name: String,
    pub blocks: Vec<CoeffBlock>,
}

/// Write a container from bodies that all share the same `intervals` grid.
///
/// Adaptive interval halving (§4.8) is performed per body; bodies whose
/// halved grids disagree cannot be written into the same container (the
/// `.eph` interval index is global) — callers bridging bodies at
/// different fidelities should write one container per body, or re-run
/// [`crate::bridge::bridge_body`] for the coarsest body's grid.
pub fn write_container<P: AsRef<Path>>(
    path: P,
    intervals: &[(f64, f64)],
    degree: u32,
    bodies: Vec<BridgedBody>,
) -> Result<(), BridgeError> {
    let inputs: Vec<BodyInput> = bodies
        .into_iter()
        .map(|b| BodyInput {
            id: b.id,
            name: b.name,
            blocks: b.blocks,
        })
        .collect();
    encode_to_path(path, intervals, degree, inputs)?;
    Ok(())
}
