//! Core logic of the `maps-diff` binary: diff two JSON snapshot files.

use std::fs;
use std::path::{Path, PathBuf};

use maps_object::{
    try_key_by_object_id, Circle, MapsObject, MapsObjectError, Marker, Polygon, Polyline, TileOverlay,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::serializer::{DiffSerializer, FullSerializer};
use crate::{MapsObjectUpdates, SerializeError, ZipOptions};

pub const USAGE: &str =
    "usage: maps-diff <markers|polygons|polylines|circles|tileOverlays> <previous.json> <current.json> [--diff] [--no-check-duplicates]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,
    #[error("unknown object kind `{0}`")]
    UnknownKind(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: {source}")]
    Object {
        path: PathBuf,
        #[source]
        source: MapsObjectError,
    },
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Which object kind a snapshot file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Markers,
    Polygons,
    Polylines,
    Circles,
    TileOverlays,
}

impl ObjectKind {
    pub fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "markers" => Ok(ObjectKind::Markers),
            "polygons" => Ok(ObjectKind::Polygons),
            "polylines" => Ok(ObjectKind::Polylines),
            "circles" => Ok(ObjectKind::Circles),
            "tileOverlays" => Ok(ObjectKind::TileOverlays),
            other => Err(CliError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffArgs {
    pub kind: ObjectKind,
    pub previous: PathBuf,
    pub current: PathBuf,
    /// Send changed objects as field diffs instead of in full.
    pub differential: bool,
    pub options: ZipOptions,
}

impl DiffArgs {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut differential = false;
        let mut options = ZipOptions {
            check_duplicates: true,
        };
        for arg in args {
            match arg.as_str() {
                "--diff" => differential = true,
                "--no-check-duplicates" => options.check_duplicates = false,
                flag if flag.starts_with("--") => return Err(CliError::UnknownOption(flag.to_string())),
                _ => positional.push(arg),
            }
        }
        let [kind, previous, current] = positional.as_slice() else {
            return Err(CliError::Usage);
        };
        Ok(Self {
            kind: ObjectKind::parse(kind)?,
            previous: PathBuf::from(previous.as_str()),
            current: PathBuf::from(current.as_str()),
            differential,
            options,
        })
    }
}

/// Read both snapshot files and return the update payload.
pub fn run(args: &DiffArgs) -> Result<Value, CliError> {
    let previous = read_file(&args.previous)?;
    let current = read_file(&args.current)?;
    diff_snapshots(args, &previous, &current)
}

/// Diff two snapshots given as JSON arrays of objects of `args.kind`.
///
/// With `args.options.check_duplicates` set, a snapshot that repeats an id is
/// rejected. Without it the snapshots are diffed as they are, and a repeated
/// id in `current` degrades as described on [`ZipOptions`].
pub fn diff_snapshots(args: &DiffArgs, previous: &str, current: &str) -> Result<Value, CliError> {
    match args.kind {
        ObjectKind::Markers => diff_kind::<Marker>(args, previous, current),
        ObjectKind::Polygons => diff_kind::<Polygon>(args, previous, current),
        ObjectKind::Polylines => diff_kind::<Polyline>(args, previous, current),
        ObjectKind::Circles => diff_kind::<Circle>(args, previous, current),
        ObjectKind::TileOverlays => diff_kind::<TileOverlay>(args, previous, current),
    }
}

fn diff_kind<T>(args: &DiffArgs, previous: &str, current: &str) -> Result<Value, CliError>
where
    T: MapsObject + DeserializeOwned,
{
    let strict = args.options.check_duplicates;
    let previous: Vec<T> = parse_snapshot(&args.previous, previous, strict)?;
    let current: Vec<T> = parse_snapshot(&args.current, current, strict)?;
    let updates = MapsObjectUpdates::from_objects_with_options(&previous, &current, T::KIND, &args.options);
    let json = if args.differential {
        updates.to_json_with(&DiffSerializer)?
    } else {
        updates.to_json_with(&FullSerializer)?
    };
    Ok(json)
}

fn parse_snapshot<T>(path: &Path, text: &str, strict: bool) -> Result<Vec<T>, CliError>
where
    T: MapsObject + DeserializeOwned,
{
    let objects: Vec<T> = serde_json::from_str(text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if !strict {
        return Ok(objects);
    }
    let keyed = try_key_by_object_id(objects).map_err(|source| CliError::Object {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(keyed.into_values().collect())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
