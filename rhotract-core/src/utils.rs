use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

///
/// Check whether a path points at a gzip'd file, going by the extension.
///
pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        let file_path = Path::new(file_path_str);
        get_dynamic_reader(file_path)
    }
}

///
/// A file writer that is either plain or gzip'd. Gzip output is only complete
/// once [`DynamicWriter::finish`] has written the trailer.
///
pub enum DynamicWriter<W: Write = BufWriter<File>> {
    Plain(W),
    Gzip(GzEncoder<W>),
}

impl<W: Write> DynamicWriter<W> {
    ///
    /// Write any gzip trailer and flush the underlying sink.
    ///
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(mut inner) => inner.flush(),
            DynamicWriter::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl<W: Write> Write for DynamicWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            DynamicWriter::Plain(inner) => inner.write(buf),
            DynamicWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(inner) => inner.flush(),
            DynamicWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

///
/// Get a writer for a path, gzip'ing the output when the path ends in `.gz`.
/// Missing parent directories are created.
///
/// # Arguments
///
/// - path: path to the file to write
///
pub fn get_dynamic_writer(path: &Path) -> Result<DynamicWriter> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let writer = match is_gzipped(path) {
        true => DynamicWriter::Gzip(GzEncoder::new(BufWriter::new(file), Compression::default())),
        false => DynamicWriter::Plain(BufWriter::new(file)),
    };

    Ok(writer)
}
