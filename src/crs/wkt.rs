//! ESRI well-known text for `.prj` files.

use super::CrsError;

/// ESRI WKT for geographic WGS84 coordinates.
pub const WGS84_WKT: &str = concat!(
    "GEOGCS[\"GCS_WGS_1984\",",
    "DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137.0,298.257223563]],",
    "PRIMEM[\"Greenwich\",0.0],UNIT[\"Degree\",0.0174532925199433]]"
);

/// ESRI WKT for a CGCS2000 3-degree Gauss-Krüger zone (EPSG 4513-4533).
///
/// The central meridian advances 3 degrees per zone from 75°E at zone 25;
/// the false easting carries the zone number in its leading digits.
///
/// # Errors
///
/// Returns [`CrsError::ZoneOutOfRange`] for zones outside 25-45.
pub fn cgcs2000_gauss_kruger_wkt(zone: u8) -> Result<String, CrsError> {
    if !(25..=45).contains(&zone) {
        return Err(CrsError::ZoneOutOfRange { zone });
    }
    let false_easting = u32::from(zone) * 1_000_000 + 500_000;
    let central_meridian = 75 + (u32::from(zone) - 25) * 3;
    let geogcs = concat!(
        "GEOGCS[\"GCS_China_Geodetic_Coordinate_System_2000\",",
        "DATUM[\"D_China_2000\",SPHEROID[\"CGCS2000\",6378137.0,298.257222101]],",
        "PRIMEM[\"Greenwich\",0.0],UNIT[\"Degree\",0.0174532925199433]]"
    );
    Ok(format!(
        "PROJCS[\"CGCS2000_3_Degree_GK_Zone_{zone}\",{geogcs},\
         PROJECTION[\"Gauss_Kruger\"],\
         PARAMETER[\"False_Easting\",{false_easting}.0],\
         PARAMETER[\"False_Northing\",0.0],\
         PARAMETER[\"Central_Meridian\",{central_meridian}.0],\
         PARAMETER[\"Scale_Factor\",1.0],\
         PARAMETER[\"Latitude_Of_Origin\",0.0],\
         UNIT[\"Meter\",1.0]]"
    ))
}
