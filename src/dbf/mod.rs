//! DBF (dBASE III) attribute table encoder
//!
//! Produces the fixed-record binary `.dbf` files that accompany ESRI
//! Shapefiles, byte-for-byte compatible with ArcGIS output for the supported
//! field types (Character, Numeric, Logical, Date).
//!
//! Layout of the produced file:
//!
//! | Offset | Size   | Meaning                                  |
//! |--------|--------|------------------------------------------|
//! | 0      | 1      | version `0x03`                           |
//! | 1-3    | 3      | last-update date (year-1900, month, day) |
//! | 4-7    | 4      | record count, u32 little-endian          |
//! | 8-9    | 2      | header length, u16 little-endian         |
//! | 10-11  | 2      | record length, u16 little-endian         |
//! | 12-31  | 20     | reserved, zero                           |
//! | 32+    | 32 x N | field descriptors                        |
//! | -      | 1      | header terminator `0x0D`                 |
//! | -      | L x M  | records (1 flag byte + field bytes each) |
//! | -      | 1      | EOF marker `0x1A`                        |

pub mod field;
pub mod file;
pub mod record;

/// Error during DBF construction or encoding.
///
/// All violations are deterministic input errors raised synchronously at the
/// call that breaks the contract; none are retryable.
#[derive(Debug, thiserror::Error)]
pub enum DbfError {
    /// Field name does not fit the 11 name bytes of a descriptor
    #[error("field name '{name}' is {len} bytes encoded, the limit is 11")]
    FieldNameTooLong { name: String, len: usize },
    /// Numeric field declared wider than the dBASE III limit
    #[error("numeric field '{name}' declares width {length}, the limit is 18")]
    NumericWidthTooLarge { name: String, length: u8 },
    /// Record value count differs from the field count
    #[error("record has {values} values but {fields} fields are defined")]
    ArityMismatch { fields: usize, values: usize },
    /// Value kind does not match the declared field type
    #[error("field '{field}' is {expected} but the value is {found}")]
    TypeMismatch {
        field: String,
        expected: field::FieldType,
        found: field::FieldType,
    },
    /// Encoded value is wider than the declared field width
    #[error("value '{value}' does not fit the {width}-byte field '{field}'")]
    WidthExceeded {
        field: String,
        value: String,
        width: usize,
    },
}

// Re-export for convenience
pub use field::{Field, FieldType};
pub use file::Dbf;
pub use record::FieldValue;
