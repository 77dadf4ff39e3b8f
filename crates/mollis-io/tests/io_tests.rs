//! Integration tests for mollis-io.

use mollis_io::contract::{FrameData, MeshSource, SimulationInput, TransformSpec};
use mollis_io::validator::validate_input;
use mollis_math::Vec3;
use mollis_mesh::generators::unit_cube;
use mollis_solver::{Simulator, SoftBodyBuilder, StepConfig};

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn default_input() {
    let input = SimulationInput::default();
    assert!(matches!(input.mesh, MeshSource::Box { size } if size == [1.0; 3]));
    assert_eq!(input.build.stiffness, 500.0);
    assert!((input.step.damping - 0.98).abs() < 1e-6);
    assert!(validate_input(&input, None).is_ok());
}

#[test]
fn input_from_toml() {
    let text = r#"
        steps = 10

        [mesh]
        kind = "sphere"
        radius = 0.5
        stacks = 6
        slices = 8

        [transform]
        translation = [0.0, 2.0, 0.0]

        [build]
        fill_interior = true
        interior_spacing = 0.2

        [step]
        dt = 0.005
    "#;
    let input: SimulationInput = toml::from_str(text).unwrap();
    assert_eq!(input.steps, 10);
    assert!(matches!(input.mesh, MeshSource::Sphere { stacks: 6, .. }));
    assert!(input.build.fill_interior);
    assert_eq!(input.build.neighbor_cap, 6);
    assert_eq!(input.transform.scale, [1.0; 3]);
    assert!(validate_input(&input, None).is_ok());
}

#[test]
fn transform_order_is_scale_rotate_translate() {
    let spec = TransformSpec {
        translation: [1.0, 0.0, 0.0],
        rotation_deg: [0.0, 0.0, 90.0],
        scale: [2.0, 2.0, 2.0],
    };
    let p = spec.to_mat4().transform_point3(Vec3::X);
    assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-5);
}

#[test]
fn inline_mesh_loads() {
    let source = MeshSource::Inline { mesh: unit_cube() };
    let json = serde_json::to_string(&source).unwrap();
    assert!(json.contains("\"kind\":\"inline\""));
    let mesh = source.load(None).unwrap();
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn missing_file_is_io_error() {
    let source = MeshSource::File {
        path: "does/not/exist.json".into(),
    };
    assert!(matches!(
        source.load(None),
        Err(mollis_types::MollisError::Io(_))
    ));
}

#[test]
fn frame_capture() {
    let (body, _) = SoftBodyBuilder::default()
        .build(&unit_cube(), mollis_math::Mat4::IDENTITY)
        .unwrap();
    let mut sim = Simulator::new(body, StepConfig::default()).unwrap();
    sim.run(3);

    let frame = FrameData::capture(&sim);
    assert_eq!(frame.timestep, 3);
    assert_eq!(frame.point_count(), 8);
    assert_eq!(frame.spring_count, 28);
    assert!(frame.is_internal.iter().all(|&i| !i));
    assert_eq!(frame.positions[0], sim.body().points()[0].position.to_array());
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn zero_steps_rejected() {
    let input = SimulationInput {
        steps: 0,
        ..Default::default()
    };
    assert!(validate_input(&input, None).is_err());
}

#[test]
fn degenerate_sources_rejected() {
    for mesh in [
        MeshSource::Box { size: [1.0, 0.0, 1.0] },
        MeshSource::Sphere {
            radius: 1.0,
            stacks: 1,
            slices: 8,
        },
        MeshSource::Grid {
            cols: 0,
            rows: 2,
            width: 1.0,
            height: 1.0,
        },
    ] {
        let input = SimulationInput {
            mesh,
            ..Default::default()
        };
        assert!(validate_input(&input, None).is_err());
    }
}

#[test]
fn zero_scale_rejected() {
    let input = SimulationInput {
        transform: TransformSpec {
            scale: [1.0, 0.0, 1.0],
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(validate_input(&input, None).is_err());
}

#[test]
fn small_uniform_scale_accepted() {
    let input = SimulationInput {
        mesh: MeshSource::Box {
            size: [1000.0; 3],
        },
        transform: TransformSpec {
            scale: [0.001; 3],
            ..Default::default()
        },
        ..Default::default()
    };
    validate_input(&input, None).unwrap();
}

#[test]
fn bad_step_config_rejected() {
    let mut input = SimulationInput::default();
    input.step.dt = -0.01;
    assert!(validate_input(&input, None).is_err());
}
