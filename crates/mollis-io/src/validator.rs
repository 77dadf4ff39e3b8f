//! Input validation.
//!
//! Validates simulation inputs before a soft body is built, catching
//! data-level errors early with clear diagnostics.

use std::path::Path;

use mollis_types::{MollisError, MollisResult};

use crate::contract::{MeshSource, SimulationInput, TransformSpec};

/// Validates a complete simulation input.
///
/// Checks:
/// - Mesh source parameters (and the mesh itself once loaded)
/// - Transform is finite and invertible
/// - Build and step configuration
/// - Step count is at least 1
pub fn validate_input(input: &SimulationInput, base_dir: Option<&Path>) -> MollisResult<()> {
    validate_source(&input.mesh)?;
    input
        .mesh
        .load(base_dir)?
        .validate()
        .map_err(|e| MollisError::InvalidMesh(format!("Surface mesh: {}", e)))?;

    validate_transform(&input.transform)?;
    input.build.validate()?;
    input.step.validate()?;

    if input.steps == 0 {
        return Err(MollisError::InvalidConfig(
            "Step count must be >= 1".into(),
        ));
    }

    Ok(())
}

/// Validates generator parameters before any geometry is produced.
fn validate_source(source: &MeshSource) -> MollisResult<()> {
    match source {
        MeshSource::Box { size } => {
            if size.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
                return Err(MollisError::InvalidConfig(format!(
                    "Box size must be positive, got {:?}",
                    size
                )));
            }
        }
        MeshSource::Sphere {
            radius,
            stacks,
            slices,
        } => {
            if !(radius.is_finite() && *radius > 0.0) {
                return Err(MollisError::InvalidConfig(format!(
                    "Sphere radius must be positive, got {}",
                    radius
                )));
            }
            if *stacks < 2 || *slices < 3 {
                return Err(MollisError::InvalidConfig(format!(
                    "Sphere needs at least 2 stacks and 3 slices, got {}x{}",
                    stacks, slices
                )));
            }
        }
        MeshSource::Grid {
            cols,
            rows,
            width,
            height,
        } => {
            if *cols == 0 || *rows == 0 {
                return Err(MollisError::InvalidConfig(
                    "Grid needs at least one column and one row".into(),
                ));
            }
            if !(*width > 0.0 && *height > 0.0) {
                return Err(MollisError::InvalidConfig(
                    "Grid dimensions must be positive".into(),
                ));
            }
        }
        MeshSource::File { .. } | MeshSource::Inline { .. } => {}
    }
    Ok(())
}

fn validate_transform(transform: &TransformSpec) -> MollisResult<()> {
    let m = transform.to_mat4();
    if !m.is_finite() {
        return Err(MollisError::InvalidConfig(
            "Transform must be finite".into(),
        ));
    }
    let det = m.determinant();
    if det == 0.0 || !m.inverse().is_finite() {
        return Err(MollisError::InvalidConfig(format!(
            "Transform scale {:?} is not invertible",
            transform.scale
        )));
    }
    Ok(())
}
