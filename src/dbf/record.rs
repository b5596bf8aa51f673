//! Record encoding: typed values to fixed-width binary cells.

use chrono::{Datelike, NaiveDate};

use super::field::{Field, FieldType};
use super::DbfError;

/// Flag byte prefixed to every active record.
///
/// The format also defines a deleted marker (`0x2A`) which this encoder
/// never emits.
const RECORD_ACTIVE: u8 = 0x20;

/// Padding byte for unused cell space.
const PAD: u8 = b' ';

/// One typed cell value of a record row.
///
/// `Null` is legal for every field type and encodes as a blank cell of the
/// field's full width.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text for a Character field
    Character(String),
    /// Number for a Numeric field
    Numeric(f64),
    /// Boolean for a Logical field
    Logical(bool),
    /// Calendar date for a Date field
    Date(NaiveDate),
    /// Blank cell, valid for any field type
    Null,
}

impl FieldValue {
    /// The field type this value belongs to; `None` for `Null`.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Character(_) => Some(FieldType::Character),
            Self::Numeric(_) => Some(FieldType::Numeric),
            Self::Logical(_) => Some(FieldType::Logical),
            Self::Date(_) => Some(FieldType::Date),
            Self::Null => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Character(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Character(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Numeric(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Logical(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Cell alignment inside the fixed field width.
enum Alignment {
    /// Value first, padding after - Character cells
    Left,
    /// Padding first, value last - Numeric cells
    Right,
}

/// Encode one row against its field list, flag byte included.
///
/// # Errors
///
/// - [`DbfError::ArityMismatch`] when value and field counts differ
/// - [`DbfError::TypeMismatch`] when a value kind does not match its field
/// - [`DbfError::WidthExceeded`] when an encoded value overflows its width
pub fn encode_record(fields: &[Field], values: &[FieldValue]) -> Result<Vec<u8>, DbfError> {
    if fields.len() != values.len() {
        return Err(DbfError::ArityMismatch {
            fields: fields.len(),
            values: values.len(),
        });
    }
    let width: usize = 1 + fields.iter().map(|f| f.length() as usize).sum::<usize>();
    let mut data = Vec::with_capacity(width);
    data.push(RECORD_ACTIVE);
    for (field, value) in fields.iter().zip(values) {
        data.extend_from_slice(&encode_cell(field, value)?);
    }
    Ok(data)
}

/// Encode one value into its field's fixed-width cell.
fn encode_cell(field: &Field, value: &FieldValue) -> Result<Vec<u8>, DbfError> {
    let width = field.length() as usize;
    let Some(found) = value.field_type() else {
        // Null: blank-fill the whole cell regardless of field type.
        return Ok(vec![PAD; width]);
    };
    if found != field.field_type() {
        return Err(DbfError::TypeMismatch {
            field: field.name().to_string(),
            expected: field.field_type(),
            found,
        });
    }
    let (text, alignment) = match value {
        FieldValue::Character(s) => (s.clone(), Alignment::Left),
        FieldValue::Numeric(n) if field.precision() == 0 => {
            // Integer fields truncate toward zero, no rounding.
            ((n.trunc() as i64).to_string(), Alignment::Right)
        }
        FieldValue::Numeric(n) => (
            format!("{n:.prec$}", prec = field.precision() as usize),
            Alignment::Right,
        ),
        FieldValue::Logical(b) => ((if *b { "T" } else { "F" }).to_string(), Alignment::Left),
        FieldValue::Date(d) => (
            format!("{:04}{:02}{:02}", d.year(), d.month(), d.day()),
            Alignment::Left,
        ),
        FieldValue::Null => unreachable!("handled above"),
    };
    fixed_width(&text, width, alignment).ok_or_else(|| DbfError::WidthExceeded {
        field: field.name().to_string(),
        value: text,
        width,
    })
}

/// Place `text` inside a space-filled cell of `width` bytes, or `None` when
/// its encoding does not fit.
fn fixed_width(text: &str, width: usize, alignment: Alignment) -> Option<Vec<u8>> {
    let bytes = text.as_bytes();
    if bytes.len() > width {
        return None;
    }
    let mut cell = vec![PAD; width];
    let start = match alignment {
        Alignment::Left => 0,
        Alignment::Right => width - bytes.len(),
    };
    cell[start..start + bytes.len()].copy_from_slice(bytes);
    Some(cell)
}
