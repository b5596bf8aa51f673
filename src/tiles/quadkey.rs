//! Quadkey encodings for tiled web-map services.

use super::{TileError, Xyz, MAX_ZOOM};

fn is_bit_set(value: u32, mask: u32) -> bool {
    value & mask != 0
}

/// Encode a tile address as a Bing Maps / Virtual Earth quadkey.
///
/// One base-4 digit per zoom level, most significant first; zoom 0 is the
/// empty string.
///
/// # Example
///
/// ```rust
/// use geo_export_sdk::tiles::bing_quadkey;
///
/// assert_eq!(bing_quadkey(3, 5, 3), "213");
/// assert_eq!(bing_quadkey(0, 0, 0), "");
/// ```
pub fn bing_quadkey(x: u32, y: u32, z: u8) -> String {
    let mut quadkey = String::with_capacity(z as usize);
    for i in (1..=z).rev() {
        let mut digit = 0u8;
        // Bit positions past the u32 range read as zero.
        if let Some(mask) = 1u32.checked_shl(u32::from(i) - 1) {
            if is_bit_set(x, mask) {
                digit += 1;
            }
            if is_bit_set(y, mask) {
                digit += 2;
            }
        }
        quadkey.push(char::from(b'0' + digit));
    }
    quadkey
}

/// Google Earth quadrant layout (differs from Bing):
///
/// ```text
///  ___ ___
/// | 3 | 2 |
/// |---+---|
/// | 0 | 1 |
/// |___|___|
/// ```
fn tile_to_ge_quadkey(x: u32, y: u32, level: u8) -> String {
    let mut quadkey = String::with_capacity(level as usize + 1);
    for i in (0..=level).rev() {
        let mask = 1u32 << i;
        let mut digit = 0u8;
        if !is_bit_set(y, mask) {
            // Top row
            digit |= 2;
            if !is_bit_set(x, mask) {
                digit |= 1;
            }
        } else if is_bit_set(x, mask) {
            digit |= 1;
        }
        quadkey.push(char::from(b'0' + digit));
    }
    quadkey
}

fn ge_quadkey_to_tile(quadkey: &str) -> Result<(u32, u32, u8), TileError> {
    let digits = quadkey.as_bytes();
    if digits.is_empty() {
        return Err(TileError::InvalidQuadkey {
            quadkey: quadkey.to_string(),
            reason: "empty".to_string(),
        });
    }
    let level = (digits.len() - 1) as u8;
    let mut x = 0u32;
    let mut y = 0u32;
    for i in (0..=level).rev() {
        let mask = 1u32 << i;
        let digit = match digits[usize::from(level - i)] {
            d @ b'0'..=b'3' => u32::from(d - b'0'),
            other => {
                return Err(TileError::InvalidQuadkey {
                    quadkey: quadkey.to_string(),
                    reason: format!("unexpected digit '{}'", char::from(other)),
                })
            }
        };
        if is_bit_set(digit, 2) {
            // Top row
            if !is_bit_set(digit, 1) {
                x |= mask;
            }
        } else {
            y |= mask;
            if is_bit_set(digit, 1) {
                x |= mask;
            }
        }
    }
    Ok((x, y, level))
}

/// Encode a tile address as a Google Earth quadkey aligned with the
/// WorldCRS84Quad matrix set.
///
/// The alignment holds from zoom 2 (a 4x2 root grid), and every key carries
/// a leading `0`.
///
/// # Errors
///
/// Returns [`TileError::ZoomTooLow`] below zoom 2 and
/// [`TileError::ZoomTooHigh`] above [`MAX_ZOOM`].
pub fn google_earth_quadkey(x: u32, y: u32, z: u8) -> Result<String, TileError> {
    if z < 2 {
        return Err(TileError::ZoomTooLow { zoom: z, min: 2 });
    }
    if z > MAX_ZOOM {
        return Err(TileError::ZoomTooHigh {
            zoom: z,
            max: MAX_ZOOM,
        });
    }
    let level = z - 1;
    let shifted_y = y + (1u32 << (level - 1));
    Ok(format!("0{}", tile_to_ge_quadkey(x, shifted_y, level)))
}

/// Decode a WorldCRS84Quad-aligned Google Earth quadkey back to a tile
/// address; inverse of [`google_earth_quadkey`].
///
/// # Errors
///
/// Returns [`TileError::InvalidQuadkey`] for keys that are too short or too
/// long, do not start with `0`, contain non-quadrant digits, or decode to a
/// row outside the WorldCRS84Quad grid.
pub fn google_earth_quadkey_to_xyz(quadkey: &str) -> Result<Xyz, TileError> {
    let rest = quadkey.strip_prefix('0').ok_or_else(|| TileError::InvalidQuadkey {
        quadkey: quadkey.to_string(),
        reason: "missing leading '0'".to_string(),
    })?;
    if rest.len() < 2 {
        return Err(TileError::InvalidQuadkey {
            quadkey: quadkey.to_string(),
            reason: "too short for a zoom >= 2 key".to_string(),
        });
    }
    if rest.len() > usize::from(MAX_ZOOM) {
        return Err(TileError::InvalidQuadkey {
            quadkey: quadkey.to_string(),
            reason: format!("longer than a zoom {MAX_ZOOM} key"),
        });
    }
    let (x, y, level) = ge_quadkey_to_tile(rest)?;
    // Undo the row shift; digit-valid keys can still decode to rows the
    // WorldCRS84Quad grid never produces.
    let row = y
        .checked_sub(1u32 << (level - 1))
        .filter(|row| *row < 1u32 << level)
        .ok_or_else(|| TileError::InvalidQuadkey {
            quadkey: quadkey.to_string(),
            reason: "row is outside the WorldCRS84Quad grid".to_string(),
        })?;
    Ok(Xyz::new(x, row, level + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_crs84_root_tile() {
        assert_eq!(google_earth_quadkey(0, 0, 2).unwrap(), "030");
    }

    #[test]
    fn rejects_zoom_below_grid_origin() {
        assert!(matches!(
            google_earth_quadkey(0, 0, 1),
            Err(TileError::ZoomTooLow { zoom: 1, min: 2 })
        ));
    }
}
