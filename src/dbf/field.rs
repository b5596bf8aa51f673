//! Field definitions and their 32-byte binary descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DbfError;

/// The closed set of supported DBF field types.
///
/// The set is fixed by the file format; each variant carries its own
/// normalization and encoding rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Text, left-aligned and space-padded (`C`)
    Character,
    /// Number, right-aligned and space-padded (`N`)
    Numeric,
    /// Boolean, one byte `T`/`F` (`L`)
    Logical,
    /// Calendar date, eight bytes `YYYYMMDD` (`D`)
    Date,
}

impl FieldType {
    /// The single ASCII type tag stored at descriptor byte 11.
    pub fn tag(self) -> u8 {
        match self {
            Self::Character => b'C',
            Self::Numeric => b'N',
            Self::Logical => b'L',
            Self::Date => b'D',
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Character => "Character",
            Self::Numeric => "Numeric",
            Self::Logical => "Logical",
            Self::Date => "Date",
        };
        f.write_str(name)
    }
}

/// One DBF column: name, type, byte width and decimal precision.
///
/// Width and precision are normalized at construction and immutable
/// afterwards:
///
/// - Logical: length 1, precision 0
/// - Date: length 8, precision 0
/// - Character: precision 0
/// - Numeric with positive precision: length incremented by 1, the decimal
///   point occupies one byte (ArcMap calls the length "precision" and the
///   decimal digits "scale")
/// - Numeric declared length is capped at the 18 digits dBASE III allows
///
/// # Example
///
/// ```rust
/// use geo_export_sdk::dbf::Field;
///
/// let price = Field::numeric("PRICE", 8, 2).unwrap();
/// assert_eq!(price.length(), 9); // decimal point byte added
/// let name = Field::character("NAME", 10).unwrap();
/// assert_eq!(name.precision(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    field_type: FieldType,
    length: u8,
    precision: u8,
}

impl Field {
    /// Create a field, applying the type-dependent normalization above.
    ///
    /// # Errors
    ///
    /// Returns [`DbfError::FieldNameTooLong`] when the UTF-8 encoding of
    /// `name` exceeds the 11 name bytes of a descriptor, and
    /// [`DbfError::NumericWidthTooLarge`] for Numeric fields declared wider
    /// than the 18 digits dBASE III allows.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        length: u8,
        precision: u8,
    ) -> Result<Self, DbfError> {
        let name = name.into();
        if name.len() > 11 {
            return Err(DbfError::FieldNameTooLong {
                len: name.len(),
                name,
            });
        }
        if field_type == FieldType::Numeric && length > 18 {
            return Err(DbfError::NumericWidthTooLarge { name, length });
        }
        let (length, precision) = match field_type {
            FieldType::Logical => (1, 0),
            FieldType::Date => (8, 0),
            FieldType::Character => (length, 0),
            FieldType::Numeric if precision > 0 => (length + 1, precision),
            FieldType::Numeric => (length, 0),
        };
        Ok(Self {
            name,
            field_type,
            length,
            precision,
        })
    }

    /// A Character field of the given byte width.
    pub fn character(name: impl Into<String>, length: u8) -> Result<Self, DbfError> {
        Self::new(name, FieldType::Character, length, 0)
    }

    /// A Numeric field; `precision` is the decimal digit count.
    pub fn numeric(name: impl Into<String>, length: u8, precision: u8) -> Result<Self, DbfError> {
        Self::new(name, FieldType::Numeric, length, precision)
    }

    /// A one-byte Logical field.
    pub fn logical(name: impl Into<String>) -> Result<Self, DbfError> {
        Self::new(name, FieldType::Logical, 0, 0)
    }

    /// An eight-byte Date field.
    pub fn date(name: impl Into<String>) -> Result<Self, DbfError> {
        Self::new(name, FieldType::Date, 0, 0)
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Stored byte width, including the decimal point byte for Numeric
    /// fields with positive precision.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Decimal digit count; 0 for non-Numeric fields.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// The 32-byte field descriptor.
    ///
    /// Bytes 0-10 hold the name (zero-padded), byte 11 the type tag, byte 16
    /// the stored length, byte 17 the precision. All other bytes are
    /// reserved and stay zero.
    pub fn descriptor(&self) -> [u8; 32] {
        let mut data = [0u8; 32];
        data[..self.name.len()].copy_from_slice(self.name.as_bytes());
        data[11] = self.field_type.tag();
        data[16] = self.length;
        data[17] = self.precision;
        data
    }
}
