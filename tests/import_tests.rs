//! Boundary import tests

use geo_export_sdk::import::{
    kml_from_kmz, merge_polygons, polygon_from_csv, polygons_from_kml, ImportError,
};

mod csv_tests {
    use super::*;

    #[test]
    fn test_geographic_boundary_csv() {
        let csv = "name,lon,lat\n\
                   J1,116.40,39.90\n\
                   J2,116.41,39.90\n\
                   J3,116.41,39.91\n\
                   J4,116.40,39.91\n";
        let polygon = polygon_from_csv(csv).unwrap();
        let points = polygon.exterior().points();
        assert_eq!(points.len(), 5); // closed automatically
        assert_eq!(points[0], [116.40, 39.90]);
        assert_eq!(points[0], *points.last().unwrap());
    }

    #[test]
    fn test_projected_rows_get_axis_order_correction() {
        // Northing-first rows (7 integer digits before 8) are swapped.
        let csv = "name,x,y\n\
                   J1,3797916.479,39547228.491\n\
                   J2,3798076.324,39547246.449\n\
                   J3,3798062.844,39547399.598\n";
        let polygon = polygon_from_csv(csv).unwrap();
        assert_eq!(polygon.exterior().points()[0], [39547228.491, 3797916.479]);
    }

    #[test]
    fn test_easting_first_rows_pass_through() {
        let csv = "name,x,y\n\
                   J1,39547228.491,3797916.479\n\
                   J2,39547246.449,3798076.324\n\
                   J3,39547399.598,3798062.844\n";
        let polygon = polygon_from_csv(csv).unwrap();
        assert_eq!(polygon.exterior().points()[0], [39547228.491, 3797916.479]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let csv = "name,lon,lat\n\
                   J1, 116.40 , 39.90\n\
                   J2, 116.41 , 39.90\n\
                   J3, 116.41 , 39.91\n";
        assert!(polygon_from_csv(csv).is_ok());
    }

    #[test]
    fn test_short_row_is_rejected_with_its_row_number() {
        let csv = "name,lon,lat\n\
                   J1,116.40,39.90\n\
                   J2,116.41\n";
        assert!(matches!(
            polygon_from_csv(csv),
            Err(ImportError::ShortCsvRow { row: 3, columns: 2 })
        ));
    }

    #[test]
    fn test_non_numeric_coordinate_is_rejected() {
        let csv = "name,lon,lat\nJ1,not-a-number,39.90\n";
        match polygon_from_csv(csv) {
            Err(ImportError::InvalidCoordinate { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_too_few_points_surfaces_as_geometry_error() {
        let csv = "name,lon,lat\nJ1,116.40,39.90\nJ2,116.41,39.90\n";
        assert!(matches!(
            polygon_from_csv(csv),
            Err(ImportError::Geometry(_))
        ));
    }

    #[test]
    fn test_merge_collects_per_file_polygons() {
        let a = polygon_from_csv("n,x,y\nJ1,0,0\nJ2,1,0\nJ3,1,1\n").unwrap();
        let b = polygon_from_csv("n,x,y\nJ1,5,5\nJ2,6,5\nJ3,6,6\n").unwrap();
        let multi = merge_polygons(vec![a, b]);
        assert_eq!(multi.polygons().len(), 2);
    }
}

mod kml_tests {
    use super::*;

    const KML_WITH_HOLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <Polygon>
      <outerBoundaryIs>
        <LinearRing>
          <coordinates>
            116.40,39.90,0 116.41,39.90,0 116.41,39.91,0 116.40,39.91,0 116.40,39.90,0
          </coordinates>
        </LinearRing>
      </outerBoundaryIs>
      <innerBoundaryIs>
        <LinearRing>
          <coordinates>
            116.402,39.902 116.408,39.902 116.408,39.908 116.402,39.908
          </coordinates>
        </LinearRing>
      </innerBoundaryIs>
    </Polygon>
  </Placemark>
</kml>"#;

    #[test]
    fn test_polygon_with_hole() {
        let multi = polygons_from_kml(KML_WITH_HOLE).unwrap();
        assert_eq!(multi.polygons().len(), 1);
        let polygon = &multi.polygons()[0];
        assert_eq!(polygon.rings().len(), 2);
        assert_eq!(polygon.exterior().points()[0], [116.40, 39.90]);
        // Altitude components are dropped, the hole ring gets closed.
        assert_eq!(polygon.holes()[0].points().len(), 5);
    }

    #[test]
    fn test_two_placemarks_become_two_polygons() {
        let kml = r#"<kml>
  <Placemark><Polygon><outerBoundaryIs><LinearRing>
    <coordinates>0,0 1,0 1,1 0,1</coordinates>
  </LinearRing></outerBoundaryIs></Polygon></Placemark>
  <Placemark><Polygon><outerBoundaryIs><LinearRing>
    <coordinates>5,5 6,5 6,6</coordinates>
  </LinearRing></outerBoundaryIs></Polygon></Placemark>
</kml>"#;
        let multi = polygons_from_kml(kml).unwrap();
        assert_eq!(multi.polygons().len(), 2);
    }

    #[test]
    fn test_coordinates_outside_polygons_are_ignored() {
        let kml = r#"<kml>
  <Placemark><LineString><coordinates>0,0 1,1</coordinates></LineString></Placemark>
</kml>"#;
        assert!(matches!(
            polygons_from_kml(kml),
            Err(ImportError::NoCoordinates)
        ));
    }

    #[test]
    fn test_malformed_tuple_is_rejected() {
        let kml = r#"<kml><Polygon><outerBoundaryIs><LinearRing>
  <coordinates>0,0 broken 1,1</coordinates>
</LinearRing></outerBoundaryIs></Polygon></kml>"#;
        assert!(matches!(
            polygons_from_kml(kml),
            Err(ImportError::InvalidKmlTuple { .. })
        ));
    }
}

mod kmz_tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn kmz_with(entry_name: &str, kml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(entry_name, FileOptions::default())
            .unwrap();
        writer.write_all(kml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_kmz_round_trip() {
        let kml = r#"<kml><Polygon><outerBoundaryIs><LinearRing>
  <coordinates>116.40,39.90 116.41,39.90 116.41,39.91</coordinates>
</LinearRing></outerBoundaryIs></Polygon></kml>"#;
        let kmz = kmz_with("doc.kml", kml);
        let extracted = kml_from_kmz(&kmz).unwrap();
        assert_eq!(extracted, kml);

        let multi = polygons_from_kml(&extracted).unwrap();
        assert_eq!(multi.polygons().len(), 1);
    }

    #[test]
    fn test_missing_doc_kml_entry() {
        let kmz = kmz_with("other.kml", "<kml/>");
        assert!(matches!(
            kml_from_kmz(&kmz),
            Err(ImportError::MissingKmlEntry)
        ));
    }

    #[test]
    fn test_garbage_bytes_are_an_archive_error() {
        assert!(matches!(
            kml_from_kmz(b"not a zip archive"),
            Err(ImportError::Zip(_))
        ));
    }
}
