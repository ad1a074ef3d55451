use std::ops::Index;
use std::path::PathBuf;

use crate::notes;

/// How the array is declared in the generated source.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub comment: String,
    pub element_type: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct TuningConfig {
    /// Equal steps per octave.
    pub divisions: u32,
    /// Note that gets an offset of zero cents.
    pub reference_note: u8,
    /// Reference voltage carried over from the firmware's CV scheme. Reserved,
    /// does not affect the table.
    #[allow(dead_code)]
    pub reference_offset: f64,
    pub note_count: usize,
    pub output_path: PathBuf,
    pub declaration: Declaration,
}

impl TuningConfig {
    /// N-TET anchored at A4, covering all MIDI notes.
    pub fn equal(divisions: u32) -> Self {
        Self {
            divisions,
            reference_note: notes::MIDI_A4,
            reference_offset: 0.0,
            note_count: notes::MIDI_NOTE_COUNT,
            output_path: PathBuf::from(format!("tuning_{divisions}tet.h")),
            declaration: Declaration {
                comment: format!("// {divisions}-TET"),
                element_type: "const short".into(),
                name: "tuning".into(),
            },
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self::equal(12)
    }
}

/// Cent offsets indexed by note number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table(Vec<i16>);

#[allow(dead_code)]
impl Table {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = i16> + '_ {
        self.0.iter().copied()
    }
    pub fn as_slice(&self) -> &[i16] {
        &self.0
    }
}

impl Index<usize> for Table {
    type Output = i16;
    fn index(&self, ix: usize) -> &i16 {
        &self.0[ix]
    }
}

pub fn generate(config: &TuningConfig) -> Table {
    let entries = (0..config.note_count)
        .map(|i| notes::offset(i, config.reference_note, config.divisions).0)
        .collect();
    Table(entries)
}
