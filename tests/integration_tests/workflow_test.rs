use nurbs_svg::modules::export::svg::{to_svg, write_svg};
use nurbs_svg::modules::export::svg_path::ToSvgPath;
use nurbs_svg::modules::parse::json::FromJson;
use nurbs_svg::{decompose, BezierCurve, BezierError, NurbsCurve, Scene};

const SCENE: &str = r#"{
    "options": {"margin": 0, "flip_y": true, "stroke": "blue"},
    "layers": [
        {
            "name": "curves",
            "shapes": [
                {"type": "nurbs", "degree": 3,
                 "knots": [0, 0, 0, 0, 0.5, 1, 1, 1, 1],
                 "control_points": [{"x": 0, "y": 0}, {"x": 1, "y": 2}, {"x": 2, "y": 2},
                                    {"x": 3, "y": 0}, {"x": 4, "y": 1}]}
            ]
        },
        {
            "name": "frame",
            "shapes": [
                {"type": "polygon", "vertices": [{"x": 0, "y": 0}, {"x": 4, "y": 0},
                                                 {"x": 4, "y": 2}, {"x": 0, "y": 2}]},
                {"type": "ellipse", "center": {"x": 2, "y": 1}, "x_axis": {"x": 1, "y": 0},
                 "radius_x": 2, "radius_y": 1},
                {"type": "poly_curve", "closed": true, "segments": [
                    {"type": "line", "start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 0}},
                    {"type": "nurbs", "degree": 1,
                     "control_points": [{"x": 1, "y": 0}, {"x": 1, "y": 1}, {"x": 0, "y": 0}]}
                ]}
            ]
        }
    ]
}"#;

#[test]
fn test_complete_workflow() {
    let scene = Scene::from_json(SCENE).unwrap();

    let svg_string = to_svg(&scene).unwrap();

    // the box is 4 x 2 with Y flipped, so world (0, 0) lands at (0, 2)
    assert!(svg_string.contains("viewBox=\"0 0 4 2\""));
    assert!(svg_string.contains("id=\"curves\""));
    assert!(svg_string.contains("id=\"frame\""));
    assert!(svg_string.contains("stroke=\"blue\""));
    assert!(svg_string.contains("d=\"M0,2 C1,0,1.5,0,2,0.5 C2.5,1,3,2,4,1\""));
    assert!(svg_string.contains("points=\"0,2 4,2 4,0 0,0\""));
    assert!(svg_string.contains("<ellipse"));
    assert!(svg_string.contains("d=\"M0,2 L1,2 L1,1 L0,2Z\""));
}

#[test]
fn test_decomposed_curve_matches_direct_path() {
    let curve = NurbsCurve::from_json(
        r#"{"degree": 3, "control_points": [
            {"x": 0, "y": 0}, {"x": 2, "y": 4}, {"x": 5, "y": 4},
            {"x": 6, "y": 1}, {"x": 9, "y": 0}, {"x": 10, "y": 3}
        ]}"#,
    )
    .unwrap();

    let segments = decompose(&curve).unwrap();
    let via_segments = BezierCurve::new(segments).to_svg_path().unwrap();

    assert_eq!(via_segments, curve.to_svg_path().unwrap());
    assert_eq!(via_segments.matches('C').count(), 3);
    assert!(via_segments.starts_with("M0,0 C2,4,"));
    assert!(via_segments.ends_with(",10,3"));
}

#[test]
fn test_write_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let scene = Scene::from_json(SCENE).unwrap();

    let written = write_svg(dir.path().join("drawing"), &scene).unwrap();

    assert_eq!(written, dir.path().join("drawing.svg"));
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("<svg"));
    assert!(contents.contains("<path"));

    assert!(matches!(
        write_svg(dir.path().join("drawing.png"), &scene),
        Err(BezierError::InvalidFileName(_))
    ));
}
