//! DBF file assembly: header, descriptors, records, terminators.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use super::field::Field;
use super::record::{encode_record, FieldValue};
use super::DbfError;

const DBF_VERSION: u8 = 0x03;
const HEADER_TERMINATOR: u8 = 0x0D;
const EOF: u8 = 0x1A;

/// A DBF file under construction.
///
/// The binary views [`Dbf::header`] and [`Dbf::data`] are pure functions of
/// the current state, recomputed on every call - mutating `fields`,
/// `records` or `create_date` before reading `data` changes the output
/// deterministically, and nothing is cached.
///
/// # Example
///
/// ```rust
/// use geo_export_sdk::dbf::{Dbf, Field, FieldValue};
///
/// let fields = vec![
///     Field::character("NAME", 10).unwrap(),
///     Field::numeric("AGE", 3, 0).unwrap(),
/// ];
/// let dbf = Dbf::with_records(
///     fields,
///     vec![vec![FieldValue::from("Ada"), FieldValue::from(36i64)]],
/// );
/// let bytes = dbf.data().unwrap();
/// assert_eq!(bytes.len(), 97 + 14 + 1); // header + one record + EOF
/// ```
#[derive(Debug, Clone)]
pub struct Dbf {
    /// Column definitions
    pub fields: Vec<Field>,
    /// Data rows; `None` produces a header-only file
    pub records: Option<Vec<Vec<FieldValue>>>,
    /// Last-update date written to the header, defaults to today.
    ///
    /// The header stores the year as a single offset byte, so only
    /// 1900-2155 is representable; dates outside that range clamp to the
    /// nearer bound.
    pub create_date: NaiveDate,
}

impl Dbf {
    /// Create a DBF with fields only.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            records: None,
            create_date: Local::now().date_naive(),
        }
    }

    /// Create a DBF with fields and data rows.
    pub fn with_records(fields: Vec<Field>, records: Vec<Vec<FieldValue>>) -> Self {
        Self {
            records: Some(records),
            ..Self::new(fields)
        }
    }

    /// Override the header date; chainable.
    pub fn set_create_date(&mut self, date: NaiveDate) -> &mut Self {
        self.create_date = date;
        self
    }

    /// Byte length of one record: flag byte plus all field widths.
    pub fn record_length(&self) -> u16 {
        1 + self
            .fields
            .iter()
            .map(|f| u16::from(f.length()))
            .sum::<u16>()
    }

    /// The file header: 32-byte preamble, field descriptors, terminator.
    ///
    /// Never consults record values, so it cannot fail on bad rows.
    pub fn header(&self) -> Vec<u8> {
        let header_length = 32 + 32 * self.fields.len() + 1;
        let record_count = self.records.as_ref().map_or(0, Vec::len) as u32;

        let mut data = Vec::with_capacity(header_length);
        data.push(DBF_VERSION);
        data.push((self.create_date.year() - 1900).clamp(0, 255) as u8);
        data.push(self.create_date.month() as u8);
        data.push(self.create_date.day() as u8);
        data.extend_from_slice(&record_count.to_le_bytes());
        data.extend_from_slice(&(header_length as u16).to_le_bytes());
        data.extend_from_slice(&self.record_length().to_le_bytes());
        data.resize(32, 0); // reserved bytes 12-31
        for field in &self.fields {
            data.extend_from_slice(&field.descriptor());
        }
        data.push(HEADER_TERMINATOR);
        data
    }

    /// The complete file: header, records in input order, EOF marker.
    ///
    /// # Errors
    ///
    /// Fails on the first record that violates its field list (arity, type
    /// or width); no partial buffer is returned.
    pub fn data(&self) -> Result<Vec<u8>, DbfError> {
        let mut data = self.header();
        if let Some(records) = &self.records {
            for record in records {
                data.extend_from_slice(&encode_record(&self.fields, record)?);
            }
        }
        data.push(EOF);
        debug!(
            fields = self.fields.len(),
            records = self.records.as_ref().map_or(0, Vec::len),
            bytes = data.len(),
            "encoded dbf file"
        );
        Ok(data)
    }
}
