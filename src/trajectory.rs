//! Satellite trajectory storage and loading.
//!
//! Trajectories come from a line-oriented text file exported by orbital
//! propagation tooling. The first line is a header and is discarded; each
//! data line is `name,x,y,z,r,g,b` with positions in normalized Earth-radius
//! units and color components in [0, 1]. Consecutive lines sharing a name
//! extend the same trajectory; a name change starts a new one.
//!
//! Malformed rows are skipped, never silently reordered: the parser returns
//! each skipped row with its line number and a typed error so the caller
//! can log them.

use std::fs;
use std::path::Path;

use bevy::prelude::*;

/// Default location of the trajectory data file, relative to the working
/// directory.
pub const TRAJECTORY_PATH: &str = "assets/trajectories.csv";

/// Fields expected on every data row.
const FIELDS_PER_ROW: usize = 7;

/// One satellite's path over simulated time.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Satellite name from the data file.
    pub name: String,
    /// Ordered positions in normalized Earth-radius units.
    pub positions: Vec<Vec3>,
    /// Display color (RGB), taken from the trajectory's first row.
    pub color: Vec3,
}

impl Trajectory {
    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the trajectory has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// This trajectory's frame cursor for the given global frame index.
    ///
    /// All trajectories share the global timeline, but a shorter trajectory
    /// loops on its own length rather than indexing past its end.
    pub fn cursor(&self, global_frame: usize) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(global_frame % self.len())
        }
    }

    /// Position at this trajectory's cursor for the given global frame.
    pub fn current_position(&self, global_frame: usize) -> Option<Vec3> {
        self.cursor(global_frame).map(|i| self.positions[i])
    }

    /// Trailing window of positions behind the cursor:
    /// `[max(0, cursor - trail_length), cursor)`, excluding the current
    /// position itself. Empty at the start of a loop.
    pub fn trail_window(&self, global_frame: usize, trail_length: usize) -> &[Vec3] {
        match self.cursor(global_frame) {
            Some(cursor) => &self.positions[cursor.saturating_sub(trail_length)..cursor],
            None => &[],
        }
    }
}

/// Why a data row was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("expected {FIELDS_PER_ROW} comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("field '{field}' is not a number: '{value}'")]
    BadNumber { field: &'static str, value: String },

    #[error("empty satellite name")]
    EmptyName,
}

/// Why the trajectory file could not be loaded at all.
#[derive(thiserror::Error, Debug)]
pub enum TrajectoryError {
    #[error("failed to read trajectory file: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected data row, reported back to the caller for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source file.
    pub line: usize,
    /// What was wrong with it.
    pub error: RowError,
}

/// In-memory collection of all loaded trajectories.
///
/// Populated once at startup and immutable thereafter; only the global
/// frame index in [`crate::types::AnimationState`] advances.
#[derive(Resource, Default, Debug)]
pub struct TrajectoryStore {
    /// Loaded trajectories in file order.
    pub trajectories: Vec<Trajectory>,
}

impl TrajectoryStore {
    /// Load trajectories from a file. IO failure is the only hard error;
    /// malformed rows are skipped and reported.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, Vec<SkippedRow>), TrajectoryError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parse trajectory data from text. The first line is a header and is
    /// discarded. Returns the store plus every skipped row with its reason.
    pub fn parse(text: &str) -> (Self, Vec<SkippedRow>) {
        let mut store = Self::default();
        let mut skipped = Vec::new();

        // Line 1 is the header.
        for (index, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            match parse_row(line) {
                Ok(row) => store.push_row(row),
                Err(error) => skipped.push(SkippedRow {
                    line: index + 1,
                    error,
                }),
            }
        }

        (store, skipped)
    }

    /// Append a parsed row, extending the last trajectory when the name
    /// matches and starting a new one otherwise.
    fn push_row(&mut self, row: TrajectoryRow) {
        if let Some(last) = self.trajectories.last_mut() {
            if last.name == row.name {
                last.positions.push(row.position);
                return;
            }
        }
        self.trajectories.push(Trajectory {
            name: row.name,
            positions: vec![row.position],
            color: row.color,
        });
    }

    /// Number of loaded trajectories.
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// True when nothing was loaded ("Earth-only mode").
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Length of the longest trajectory; the global frame index wraps here.
    pub fn controlling_len(&self) -> usize {
        self.trajectories
            .iter()
            .map(Trajectory::len)
            .max()
            .unwrap_or(0)
    }

    /// Iterate trajectories in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Trajectory> {
        self.trajectories.iter()
    }
}

/// One successfully parsed data row.
struct TrajectoryRow {
    name: String,
    position: Vec3,
    color: Vec3,
}

fn parse_row(line: &str) -> Result<TrajectoryRow, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_ROW {
        return Err(RowError::FieldCount {
            found: fields.len(),
        });
    }

    let name = fields[0].trim();
    if name.is_empty() {
        return Err(RowError::EmptyName);
    }

    let number = |field: &'static str, value: &str| -> Result<f32, RowError> {
        value.trim().parse::<f32>().map_err(|_| RowError::BadNumber {
            field,
            value: value.trim().to_string(),
        })
    };

    let x = number("x", fields[1])?;
    let y = number("y", fields[2])?;
    let z = number("z", fields[3])?;
    let r = number("r", fields[4])?;
    let g = number("g", fields[5])?;
    let b = number("b", fields[6])?;

    Ok(TrajectoryRow {
        name: name.to_string(),
        position: Vec3::new(x, y, z),
        color: Vec3::new(r, g, b),
    })
}

/// Plugin that loads the trajectory file at startup.
pub struct TrajectoryPlugin;

impl Plugin for TrajectoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrajectoryStore>()
            .add_systems(Startup, load_trajectories);
    }
}

/// Load [`TRAJECTORY_PATH`] into the store. A missing or unreadable file is
/// not fatal: the viewer runs in Earth-only mode.
fn load_trajectories(mut store: ResMut<TrajectoryStore>) {
    match TrajectoryStore::load(TRAJECTORY_PATH) {
        Ok((loaded, skipped)) => {
            for row in &skipped {
                warn!("skipping trajectory line {}: {}", row.line, row.error);
            }
            info!(
                "Loaded {} satellite trajectories ({} rows skipped)",
                loaded.len(),
                skipped.len()
            );
            *store = loaded;
        }
        Err(err) => {
            info!("No trajectory file at {TRAJECTORY_PATH}: {err}");
            info!("Running in Earth-only mode.");
        }
    }
}
