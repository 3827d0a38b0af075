use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing sequence file formats.
///
/// This trait provides a common API for record-oriented sequence file I/O,
/// supporting both parsing from and serialization to the native text
/// format. Implementors handle format-specific framing and carry any
/// per-format state (such as a quality score encoding) themselves.
pub trait SequenceFile {
    /// The record type produced by parsing and consumed by serialization.
    type Record;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads all records from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed records in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<Self::Record>, Self::Error>;

    /// Writes records to a writer in the native text format.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, emitted in slice order.
    /// * `writer` - The writer to output to.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or I/O operations encounter issues.
    fn write_to(
        &self,
        records: &[Self::Record],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads all records from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the parsed records in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Self::Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }

    /// Writes records to a file path in the native text format.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, emitted in slice order.
    /// * `path` - The path to the file to write.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        &self,
        records: &[Self::Record],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(records, &mut writer)
    }
}
