//! End-to-end rendering of small sphere scenes.

use lumen_math::{Mat4, Vec3};
use lumen_raytrace::{render, Canvas, Material, PointLight, RenderSettings, Scene};

fn blue_sphere_scene() -> Scene<f32> {
    let mut scene = Scene::new(PointLight::white(Vec3::new(-10.0, 10.0, -10.0)));
    scene.objects.add_sphere().material = Material::with_color(Vec3::new(0.0, 0.5, 1.0));
    scene
}

fn covered(canvas: &Canvas<f32>, col: usize, row: usize) -> bool {
    canvas.get(col, row).is_some_and(|c| c != Vec3::zero())
}

#[test]
fn test_sphere_render() {
    let settings = RenderSettings::from_toml_str("canvas_size = 64").unwrap();
    let canvas = render(&blue_sphere_scene(), &settings).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (64, 64));

    // Straight-on ray: ambient plus diffuse, no visible highlight.
    let center = canvas.get(32, 32).unwrap();
    let light_dot_normal = 9.0 / 281f32.sqrt();
    let expected = Vec3::new(0.0, 0.5, 1.0) * (0.1 + 0.9 * light_dot_normal);
    assert!(center.approx_eq(&expected), "{center} != {expected}");

    for (col, row) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
        assert!(!covered(&canvas, col, row));
    }

    // The light is up and to the left, so that side is brighter.
    let upper_left = canvas.get(26, 26).unwrap();
    let lower_right = canvas.get(38, 38).unwrap();
    assert!(upper_left.z > lower_right.z);
}

#[test]
fn test_squashed_sphere_is_wider_than_tall() {
    let mut scene = blue_sphere_scene();
    let id = scene.objects.iter().next().unwrap().id();
    scene
        .objects
        .get_mut(id)
        .unwrap()
        .set_transform(Mat4::scale(1.0, 0.5, 1.0))
        .unwrap();

    let settings = RenderSettings {
        canvas_size: 48,
        ..Default::default()
    };
    let canvas = render(&scene, &settings).unwrap();

    let across = (0..48).filter(|&c| covered(&canvas, c, 24)).count();
    let down = (0..48).filter(|&r| covered(&canvas, 24, r)).count();
    assert!(across > 0);
    assert!(across > down + down / 2, "across {across}, down {down}");
}

#[test]
fn test_render_to_bytes() {
    let settings = RenderSettings {
        canvas_size: 8,
        background: [1.0, 1.0, 1.0],
        ..Default::default()
    };
    let canvas = render(&blue_sphere_scene(), &settings).unwrap();
    let bytes = canvas.to_rgb8();
    assert_eq!(bytes.len(), 8 * 8 * 3);
    // Top-left corner misses and shows the white background.
    assert_eq!(&bytes[..3], &[255, 255, 255]);
    assert_eq!(canvas.as_scalars().len(), 8 * 8 * 3);
}

#[test]
fn test_double_precision_matches_single() {
    let mut scene = Scene::<f64>::new(PointLight::white(Vec3::new(-10.0, 10.0, -10.0)));
    scene.objects.add_sphere().material = Material::with_color(Vec3::new(0.0, 0.5, 1.0));
    let settings = RenderSettings {
        canvas_size: 16,
        ..Default::default()
    };
    let wide = render(&scene, &settings).unwrap();
    let narrow = render(&blue_sphere_scene(), &settings).unwrap();

    let mut mismatched = 0;
    for (a, b) in wide.pixels().iter().zip(narrow.pixels()) {
        match (*a == Vec3::zero(), *b == Vec3::zero()) {
            (false, false) => assert!((a.z - f64::from(b.z)).abs() < 1e-3),
            (true, true) => {}
            // A ray grazing the silhouette may land on either side.
            _ => mismatched += 1,
        }
    }
    assert!(mismatched <= 2);
}
