//! Flat text snapshots of the world store.
//!
//! A snapshot is one line per block, `x,y,z,type`, with base-10 integer
//! coordinates and the catalog name of the block type. There is no header
//! or footer. Records are written in the store's traversal order (ascending
//! `x`, then `y`, then `z`), so equal worlds produce identical files.
//!
//! `read_snapshot` parses the same format back into a store. Unknown type
//! names are rejected rather than replaced with a default.
use crate::block::BlockType;
use crate::error::SnapshotError;
use crate::settings::Settings;
use crate::world::WorldStore;
use bevy::math::IVec3;
use bevy::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Write every block in `world` to `out`.
///
/// # Return
/// * `Result<usize, SnapshotError>` - number of records written
///
/// # Errors
/// Returns `SnapshotError::Io` if writing to `out` fails.
pub fn write_snapshot<W: Write>(world: &WorldStore, out: W) -> Result<usize, SnapshotError> {
    let mut out = BufWriter::new(out);
    let mut count = 0;
    for (c, block) in world.iter() {
        writeln!(out, "{},{},{},{}", c.x, c.y, c.z, block.name())?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Write a snapshot to `path`, replacing any existing file.
///
/// # Errors
/// Returns `SnapshotError::Io` if the file cannot be created or written.
pub fn save_snapshot(world: &WorldStore, path: impl AsRef<Path>) -> Result<usize, SnapshotError> {
    let file = File::create(path)?;
    write_snapshot(world, file)
}

/// Parse a snapshot into a fresh store.
///
/// Blank lines are skipped. A coordinate listed twice keeps its first type,
/// as with any insertion into an occupied cell.
///
/// # Errors
/// * `SnapshotError::Malformed` for a line without four fields or with a
///   non-integer coordinate
/// * `SnapshotError::UnknownBlock` for a type name outside the catalog
/// * `SnapshotError::Io` if reading fails
pub fn read_snapshot<R: Read>(input: R) -> Result<WorldStore, SnapshotError> {
    let mut world = WorldStore::new();
    for (i, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.trim().split(',').collect();
        let [x, y, z, name] = fields.as_slice() else {
            return Err(SnapshotError::Malformed {
                line: line_no,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        };

        let coord = IVec3::new(
            parse_axis(x, line_no)?,
            parse_axis(y, line_no)?,
            parse_axis(z, line_no)?,
        );
        let block = name
            .parse::<BlockType>()
            .map_err(|source| SnapshotError::UnknownBlock { line: line_no, source })?;
        world.set_block(coord, block);
    }
    // Loading is not a world mutation the renderer should replay.
    world.drain_changes();
    Ok(world)
}

/// Read a snapshot file from `path`.
///
/// # Errors
/// See `read_snapshot`; a missing file is `SnapshotError::Io`.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<WorldStore, SnapshotError> {
    read_snapshot(File::open(path)?)
}

fn parse_axis(field: &str, line: usize) -> Result<i32, SnapshotError> {
    field.parse().map_err(|_| SnapshotError::Malformed {
        line,
        reason: format!("invalid coordinate `{field}`"),
    })
}

/// Save the world when the mapped save key is pressed (F5 by default).
///
/// Failures are logged and otherwise left to the operator; nothing retries.
#[allow(clippy::needless_pass_by_value)]
pub fn save_on_key(kb: Res<ButtonInput<KeyCode>>, world: Res<WorldStore>, settings: Res<Settings>) {
    let save_kc = settings.controls.key_for("save", KeyCode::F5);
    if !kb.just_pressed(save_kc) {
        return;
    }

    let path = &settings.snapshot.path;
    match save_snapshot(&world, path) {
        Ok(count) => info!("saved {count} blocks to {path}"),
        Err(e) => error!("failed to save snapshot to {path}: {e}"),
    }
}
