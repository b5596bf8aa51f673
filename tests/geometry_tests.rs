//! Geometry module tests

use geo_export_sdk::geometry::{GeometryError, MultiPolygon, Polygon, Ring};

mod ring_tests {
    use super::*;

    #[test]
    fn test_ring_is_closed_after_construction() {
        let ring = Ring::new(vec![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]).unwrap();
        assert_eq!(ring.points().len(), 4);
        assert_eq!(ring.points().first(), ring.points().last());
    }

    #[test]
    fn test_closing_is_idempotent() {
        let open = Ring::new(vec![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]).unwrap();
        let closed = Ring::new(vec![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 1.0]]).unwrap();
        assert_eq!(open, closed);
        assert_eq!(closed.points().len(), 4);
    }

    #[test]
    fn test_too_few_points_is_rejected() {
        let result = Ring::new(vec![[0.0, 0.0], [1.0, 1.0]]);
        assert!(matches!(
            result,
            Err(GeometryError::TooFewPoints { count: 3 })
        ));
    }

    #[test]
    fn test_signed_area_of_ccw_square() {
        let ring = Ring::new(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]).unwrap();
        assert_eq!(ring.signed_area(), 16.0);
    }

    #[test]
    fn test_signed_area_of_cw_rectangle_is_negative() {
        let ring = Ring::new(vec![[1.0, 1.0], [1.0, 4.0], [5.0, 4.0], [5.0, 1.0]]).unwrap();
        assert_eq!(ring.signed_area(), -12.0);
        assert!(!ring.is_outer());
        assert!(ring.is_clockwise());
    }

    #[test]
    fn test_signed_area_of_ccw_pentagon() {
        let ring = Ring::new(vec![
            [5.0, 0.0],
            [7.0, 10.0],
            [-2.0, 15.0],
            [-10.0, 2.0],
            [-5.0, -6.0],
        ])
        .unwrap();
        assert_eq!(ring.signed_area(), 210.5);
        assert!(ring.is_outer());
        assert_eq!(ring.ensure_outer().signed_area(), 210.5);
    }

    #[test]
    fn test_reversal_negates_area_and_is_involutive() {
        let ring = Ring::new(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]).unwrap();
        let reversed = ring.to_reversed();
        assert_eq!(reversed.signed_area(), -16.0);
        assert_eq!(reversed.to_reversed(), ring);
    }

    #[test]
    fn test_ensure_outer_flips_clockwise_rings() {
        let cw = Ring::new(vec![[1.0, 1.0], [1.0, 4.0], [5.0, 4.0], [5.0, 1.0]]).unwrap();
        assert!(cw.ensure_outer().is_outer());
        assert_eq!(cw.ensure_outer().signed_area(), 12.0);
        // Already-outer rings come back unchanged.
        let ccw = cw.to_reversed();
        assert_eq!(ccw.ensure_outer(), ccw);
    }

    #[test]
    fn test_esri_variants_mirror_geojson_variants() {
        let ccw = Ring::new(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]).unwrap();
        assert!(ccw.ensure_esri_outer().is_clockwise());
        assert!(ccw.ensure_esri_inner().is_outer());
        assert!(ccw.ensure_inner().is_clockwise());
    }

    #[test]
    fn test_zero_area_ring_is_neither_outer_nor_clockwise() {
        let degenerate = Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]).unwrap();
        assert_eq!(degenerate.signed_area(), 0.0);
        assert!(!degenerate.is_outer());
        assert!(!degenerate.is_clockwise());
        // The ensure operations leave it unreversed.
        assert_eq!(degenerate.ensure_outer(), degenerate);
        assert_eq!(degenerate.ensure_esri_outer(), degenerate);
    }

    #[test]
    fn test_transform_maps_every_point() {
        let ring = Ring::new(vec![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]).unwrap();
        let shifted = ring.transform(|[x, y]| [x + 10.0, y + 5.0]).unwrap();
        assert_eq!(shifted.points()[0], [11.0, 6.0]);
        assert_eq!(shifted.points().len(), ring.points().len());
    }
}

mod polygon_tests {
    use super::*;

    fn cw_exterior() -> Ring {
        Ring::new(vec![
            [39547228.491, 3797916.479],
            [39547246.449, 3798076.324],
            [39547399.598, 3798062.844],
            [39547381.907, 3797655.744],
            [39546951.091, 3797694.864],
            [39546979.970, 3797942.755],
        ])
        .unwrap()
    }

    fn ccw_hole() -> Ring {
        Ring::new(vec![
            [39547163.999907895922661, 3797857.179684211034328],
            [39547156.805776312947273, 3797784.684973684605211],
            [39547264.717749997973442, 3797777.490842105820775],
            [39547270.805092103779316, 3797848.878763158340007],
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_polygon_is_rejected() {
        assert!(matches!(
            Polygon::new(vec![]),
            Err(GeometryError::EmptyPolygon)
        ));
    }

    #[test]
    fn test_standard_conversions_are_mutual_inverses() {
        let esri = Polygon::new(vec![cw_exterior(), ccw_hole()]).unwrap();
        let geojson = Polygon::new(vec![cw_exterior().to_reversed(), ccw_hole().to_reversed()])
            .unwrap();

        assert_eq!(geojson.ensure_esri_standard(), esri);
        assert_eq!(esri.ensure_geojson_standard(), geojson);
        // Converting to the convention a polygon already follows is a no-op.
        assert_eq!(esri.ensure_esri_standard(), esri);
        assert_eq!(geojson.ensure_geojson_standard(), geojson);
    }

    #[test]
    fn test_single_ring_polygon_only_processes_the_exterior() {
        let polygon = Polygon::from_exterior(cw_exterior());
        let geojson = polygon.ensure_geojson_standard();
        assert!(geojson.exterior().is_outer());
        assert_eq!(geojson.rings().len(), 1);
    }

    #[test]
    fn test_signed_area_sums_ring_areas() {
        let a = Ring::new(vec![[1.0, 1.0], [1.0, 4.0], [5.0, 4.0], [5.0, 1.0]])
            .unwrap()
            .ensure_outer();
        let b = Ring::new(vec![
            [5.0, 0.0],
            [7.0, 10.0],
            [-2.0, 15.0],
            [-10.0, 2.0],
            [-5.0, -6.0],
        ])
        .unwrap();
        let polygon = Polygon::new(vec![a, b]).unwrap();
        assert_eq!(polygon.signed_area(), 222.5);
        assert_eq!(polygon.to_multipolygon().signed_area(), 222.5);
    }

    #[test]
    fn test_holes_subtract_under_geojson_standard() {
        let exterior = Ring::new(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]).unwrap();
        let hole = Ring::new(vec![[2.0, 2.0], [8.0, 2.0], [8.0, 8.0], [2.0, 8.0]]).unwrap();
        let polygon = Polygon::new(vec![exterior, hole])
            .unwrap()
            .ensure_geojson_standard();
        assert_eq!(polygon.signed_area(), 100.0 - 36.0);
    }

    #[test]
    fn test_transform_applies_to_all_rings() {
        let polygon = Polygon::new(vec![cw_exterior(), ccw_hole()]).unwrap();
        let shifted = polygon.transform(|[x, y]| [x + 1.0, y]).unwrap();
        assert_eq!(
            shifted.exterior().points()[0][0],
            polygon.exterior().points()[0][0] + 1.0
        );
        assert_eq!(shifted.rings().len(), 2);
    }
}

mod multipolygon_tests {
    use super::*;

    #[test]
    fn test_coordinates_nesting() {
        let ring = Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).unwrap();
        let multi = MultiPolygon::new(vec![ring.to_polygon(), ring.to_polygon()]);
        let coordinates = multi.coordinates();
        assert_eq!(coordinates.len(), 2);
        assert_eq!(coordinates[0].len(), 1);
        assert_eq!(coordinates[0][0][0], [0.0, 0.0]);
    }

    #[test]
    fn test_to_geojson_geometry_object() {
        let ring = Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 2.0]]).unwrap();
        let geojson = ring.to_polygon().to_multipolygon().to_geojson();
        assert_eq!(geojson["type"], "MultiPolygon");
        assert_eq!(geojson["coordinates"][0][0][0][0], 0.0);
        assert_eq!(
            geojson["coordinates"][0][0].as_array().unwrap().len(),
            4 // closed ring
        );
    }

    #[test]
    fn test_transform_reaches_every_member() {
        let ring = Ring::new(vec![[1.0, 1.0], [2.0, 1.0], [2.0, 2.0]]).unwrap();
        let multi = MultiPolygon::new(vec![ring.to_polygon()]);
        let shifted = multi.transform(|[x, y]| [x * 2.0, y * 2.0]).unwrap();
        assert_eq!(shifted.coordinates()[0][0][0], [2.0, 2.0]);
    }
}
