use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::table::{Declaration, Table, TuningConfig};

#[derive(Debug)]
pub enum Error {
    OutputWrite {
        path: PathBuf,
        inner: std::io::Error,
    },
}

impl Error {
    fn output_write(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |inner| Error::OutputWrite { path: path.into(), inner }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutputWrite { inner, .. } => write!(f, "{}", inner),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OutputWrite { inner, .. } => Some(inner),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Writes `table` as a C array initializer: comment, blank line, indented
/// declaration, one `value, ` line per entry, closing brace.
pub fn render<W: Write>(table: &Table, decl: &Declaration, w: &mut W) -> std::io::Result<()> {
    writeln!(w, "{}", decl.comment)?;
    writeln!(w)?;
    writeln!(w, "    {} {}[] = {{", decl.element_type, decl.name)?;
    for v in table.iter() {
        writeln!(w, "{}, ", v)?;
    }
    writeln!(w, "}};")
}

pub fn to_string(table: &Table, decl: &Declaration) -> String {
    let mut buf = vec![];
    // io::Write for Vec<u8> only grows the buffer and never returns Err.
    let _ = render(table, decl, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Creates or truncates the configured output file and writes the table to it.
pub fn write_file(table: &Table, config: &TuningConfig) -> Result<()> {
    let path = config.output_path.as_path();
    let f = File::create(path).map_err(Error::output_write(path))?;
    let mut w = BufWriter::new(f);
    render(table, &config.declaration, &mut w).map_err(Error::output_write(path))?;
    w.flush().map_err(Error::output_write(path))?;
    log::info!("Wrote {} entries to {}", table.len(), path.display());
    Ok(())
}
