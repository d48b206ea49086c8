//! SVG documents for whole scenes
//!
//! Each layer of a [`Scene`] becomes a `<g>` element carrying the stroke and
//! fill style; each shape becomes one element inside it. Shapes are first moved
//! onto the canvas with a [`Viewport`] fitted around the scene's bounding box.
//!
//! # Example
//!
//! ```rust
//! use nurbs_svg::{modules::export::svg, nurbs, pt, Layer, Scene, Shape};
//!
//! let scene = Scene::new(vec![Layer::new(
//!     "outline",
//!     vec![
//!         Shape::Point(pt!(0, 0)),
//!         Shape::Nurbs(nurbs!(3, [0, 0, 0, 0, 1, 1, 1, 1], [(0, 0), (10, 20), (30, 20), (40, 0)])),
//!     ],
//! )]);
//!
//! let svg_string = svg::to_svg(&scene).unwrap();
//!
//! assert!(svg_string.contains("<g"));
//! assert!(svg_string.contains("C20,30,40,30,50,10"));
//! ```

use crate::constants::SVG_EXTENSION;
use crate::data::{Layer, Point, Scene, Shape};
use crate::error::{BezierError, BezierResult};
use crate::modules::export::options::ExportOptions;
use crate::modules::export::svg_path::PathData;
use crate::modules::export::viewport::Viewport;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use svg::node::element::{Circle, Ellipse, Group, Line, Path as SvgPath, Polygon, Polyline};
use svg::Document;

/// Build the SVG document for a scene.
///
/// Fails without producing anything if any shape cannot be exported.
pub fn to_svg_document(scene: &Scene) -> BezierResult<Document> {
    let options = &scene.options;
    options.validate()?;

    let viewport = Viewport::fit(&scene.bounding_box(), options);
    let mut document = Document::new()
        .set("width", viewport.width())
        .set("height", viewport.height())
        .set("viewBox", (0, 0, viewport.width(), viewport.height()));

    for layer in &scene.layers {
        document = document.add(layer_group(layer, &viewport, options)?);
    }

    debug!(
        "built svg document of {}x{} with {} layers",
        viewport.width(),
        viewport.height(),
        scene.layers.len()
    );
    Ok(document)
}

/// Export a scene to an SVG string
pub fn to_svg(scene: &Scene) -> BezierResult<String> {
    to_svg_document(scene).map(|document| document.to_string())
}

/// Write a scene to an SVG file and return the path actually written.
///
/// The file name is checked with [`validate_file_name`] first.
pub fn write_svg(path: impl AsRef<Path>, scene: &Scene) -> BezierResult<PathBuf> {
    let path = validate_file_name(path.as_ref())?;
    let document = to_svg_document(scene)?;
    svg::save(&path, &document)?;
    info!("wrote {} shapes to {}", scene.shapes().count(), path.display());
    Ok(path)
}

/// Accept `name.svg` (any case), append `.svg` to a bare name, reject other extensions
pub fn validate_file_name(path: &Path) -> BezierResult<PathBuf> {
    let has_stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| !stem.trim().is_empty());
    if !has_stem {
        return Err(BezierError::InvalidFileName(format!(
            "'{}' has no file name",
            path.display()
        )));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        None if is_bare_extension(path) => Err(BezierError::InvalidFileName(format!(
            "'{}' has an extension but no file name",
            path.display()
        ))),
        None => Ok(path.with_extension(SVG_EXTENSION)),
        Some(ext) if ext.eq_ignore_ascii_case(SVG_EXTENSION) => Ok(path.to_path_buf()),
        Some(ext) => Err(BezierError::InvalidFileName(format!(
            "'{}' has extension .{}, expected .{}",
            path.display(),
            ext,
            SVG_EXTENSION
        ))),
    }
}

/// `.svg` parses as a hidden file without an extension
fn is_bare_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix('.'))
        .is_some_and(|rest| rest.eq_ignore_ascii_case(SVG_EXTENSION))
}

fn layer_group(layer: &Layer, viewport: &Viewport, options: &ExportOptions) -> BezierResult<Group> {
    let mut group = Group::new()
        .set("fill", options.fill.as_str())
        .set("stroke", options.stroke.as_str())
        .set("stroke-width", options.stroke_width);
    if let Some(name) = &layer.name {
        group = group.set("id", name.as_str());
    }
    if layer.shapes.is_empty() {
        warn!("layer {:?} has no shapes", layer.name);
    }

    for (index, shape) in layer.shapes.iter().enumerate() {
        group = shape
            .validate()
            .and_then(|_| add_shape(group, &viewport.map_shape(shape), options))
            .map_err(|e| {
                warn!(
                    "cannot export {} #{} in layer {:?}: {}",
                    shape.kind(),
                    index,
                    layer.name,
                    e
                );
                e
            })?;
    }
    Ok(group)
}

/// Append the element for an already mapped shape
fn add_shape(group: Group, shape: &Shape, options: &ExportOptions) -> BezierResult<Group> {
    let group = match shape {
        Shape::Point(p) => group.add(
            Circle::new()
                .set("cx", p.x)
                .set("cy", p.y)
                .set("r", options.point_radius)
                .set("fill", options.stroke.as_str())
                .set("stroke", "none"),
        ),
        Shape::Line(line) => group.add(
            Line::new()
                .set("x1", line.start.x)
                .set("y1", line.start.y)
                .set("x2", line.end.x)
                .set("y2", line.end.y),
        ),
        Shape::Circle(c) => {
            if c.radius == 0.0 {
                warn!("circle at ({}, {}) has zero radius", c.center.x, c.center.y);
            }
            group.add(
                Circle::new()
                    .set("cx", c.center.x)
                    .set("cy", c.center.y)
                    .set("r", c.radius),
            )
        }
        Shape::Ellipse(e) => group.add(
            Ellipse::new()
                .set("cx", e.center.x)
                .set("cy", e.center.y)
                .set("rx", e.radius_x)
                .set("ry", e.radius_y)
                .set(
                    "transform",
                    format!("rotate({} {} {})", e.rotation_degrees(), e.center.x, e.center.y),
                ),
        ),
        Shape::Polygon(p) if p.closed => group.add(Polygon::new().set("points", points_attribute(&p.vertices))),
        Shape::Polygon(p) => group.add(Polyline::new().set("points", points_attribute(&p.vertices))),
        Shape::Nurbs(curve) => {
            let mut data = PathData::new();
            data.append_nurbs(curve)?;
            group.add(SvgPath::new().set("d", data.into_string()))
        }
        Shape::PolyCurve(pc) => {
            let mut data = PathData::new();
            data.append_poly_curve(pc)?;
            group.add(SvgPath::new().set("d", data.into_string()))
        }
    };
    Ok(group)
}

fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        Circle as CircleShape, CurveSegment, Ellipse as EllipseShape, NurbsCurve, PolyCurve,
        Polygon as PolygonShape,
    };
    use crate::{nurbs, pt};

    fn no_margin() -> ExportOptions {
        ExportOptions {
            margin: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_group_per_layer() {
        let scene = Scene::new(vec![
            Layer::new("points", vec![Shape::Point(pt!(0, 0)), Shape::Point(pt!(10, 10))]),
            Layer::new("circles", vec![Shape::Circle(CircleShape {
                center: pt!(5, 5),
                radius: 2.0,
            })]),
        ])
        .with_options(no_margin());

        let svg_string = to_svg(&scene).unwrap();

        assert_eq!(svg_string.matches("<g").count(), 2);
        assert!(svg_string.contains("id=\"points\""));
        assert!(svg_string.contains("id=\"circles\""));
        assert_eq!(svg_string.matches("<circle").count(), 3);
        assert!(svg_string.contains("viewBox=\"0 0 10 10\""));
    }

    #[test]
    fn test_shapes_are_moved_to_origin() {
        let scene = Scene::new(vec![Layer::unnamed(vec![Shape::Polygon(PolygonShape {
            vertices: vec![pt!(100, 100), pt!(110, 100), pt!(110, 120)],
            closed: true,
        })])])
        .with_options(no_margin());

        let svg_string = to_svg(&scene).unwrap();

        assert!(svg_string.contains("<polygon"));
        assert!(svg_string.contains("points=\"0,0 10,0 10,20\""));
    }

    #[test]
    fn test_open_polygon_is_polyline() {
        let scene = Scene::new(vec![Layer::unnamed(vec![Shape::Polygon(PolygonShape {
            vertices: vec![pt!(0, 0), pt!(1, 1)],
            closed: false,
        })])]);

        let svg_string = to_svg(&scene).unwrap();
        assert!(svg_string.contains("<polyline"));
        assert!(!svg_string.contains("<polygon"));
    }

    #[test]
    fn test_ellipse_carries_rotation() {
        let scene = Scene::new(vec![Layer::unnamed(vec![Shape::Ellipse(EllipseShape {
            center: pt!(0, 0),
            x_axis: pt!(0, 1),
            radius_x: 4.0,
            radius_y: 2.0,
        })])])
        .with_options(no_margin());

        let svg_string = to_svg(&scene).unwrap();
        // box is 4 wide and 8 tall, so the center lands at (2, 4)
        assert!(svg_string.contains("rotate(90 2 4)"));
    }

    #[test]
    fn test_nurbs_is_written_as_path() {
        let scene = Scene::new(vec![Layer::unnamed(vec![Shape::Nurbs(nurbs!(
            3,
            [0, 0, 0, 0, 0.5, 1, 1, 1, 1],
            [(0, 0), (1, 2), (2, 2), (3, 0), (4, 1)]
        ))])])
        .with_options(no_margin());

        let svg_string = to_svg(&scene).unwrap();
        assert!(svg_string.contains("d=\"M0,0 C1,2,1.5,2,2,1.5 C2.5,1,3,0,4,1\""));
    }

    #[test]
    fn test_unsupported_degree_aborts_export() {
        let scene = Scene::new(vec![Layer::unnamed(vec![
            Shape::Point(pt!(0, 0)),
            Shape::Nurbs(nurbs!(2, [0, 0, 0, 1, 1, 1], [(0, 0), (1, 1), (2, 0)])),
        ])]);

        assert!(matches!(
            to_svg(&scene),
            Err(BezierError::UnsupportedDegree(2))
        ));
    }

    #[test]
    fn test_badly_repeated_knots_abort_export() {
        let four = vec![pt!(0, 0), pt!(1, 3), pt!(4, 3), pt!(5, 0)];
        let seven = vec![
            pt!(0, 0), pt!(1, 3), pt!(4, 3), pt!(5, 0), pt!(6, 2), pt!(8, 2), pt!(9, 0),
        ];
        let cases = [
            ("unclamped end", vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.5], four.clone()),
            ("unclamped start", vec![-0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0], four),
            (
                "interior knot repeated four times",
                vec![0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0],
                seven,
            ),
        ];

        for (name, knots, points) in cases {
            let curve = NurbsCurve::new_unchecked(3, knots, points);
            let standalone = Scene::new(vec![Layer::unnamed(vec![Shape::Nurbs(curve.clone())])]);
            let nested = Scene::new(vec![Layer::unnamed(vec![Shape::PolyCurve(PolyCurve {
                segments: vec![CurveSegment::Nurbs(curve)],
                closed: false,
            })])]);

            for scene in [standalone, nested] {
                assert!(
                    matches!(to_svg(&scene), Err(BezierError::InvalidCurve(_))),
                    "Test case: {}",
                    name
                );
            }
        }
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let scene = Scene::default().with_options(ExportOptions {
            scale: -1.0,
            ..Default::default()
        });
        assert!(to_svg(&scene).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert_eq!(
            validate_file_name(Path::new("out")).unwrap(),
            PathBuf::from("out.svg")
        );
        assert_eq!(
            validate_file_name(Path::new("dir/drawing.SVG")).unwrap(),
            PathBuf::from("dir/drawing.SVG")
        );
        assert!(matches!(
            validate_file_name(Path::new("out.png")),
            Err(BezierError::InvalidFileName(_))
        ));
        assert!(validate_file_name(Path::new("")).is_err());
        assert!(matches!(
            validate_file_name(Path::new("dir/.svg")),
            Err(BezierError::InvalidFileName(_))
        ));
        assert!(matches!(
            validate_file_name(Path::new(".SVG")),
            Err(BezierError::InvalidFileName(_))
        ));
    }
}
