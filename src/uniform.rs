use crate::matrix::{self, Matrix};

/// anything that can hand its transform over as a plain column major array,
/// ready for bytemuck casting into a GPU buffer
pub trait ToRawMatrix {
    fn as_raw_matrix(&self) -> [[f32; 4]; 4];
}

impl ToRawMatrix for Matrix {
    fn as_raw_matrix(&self) -> [[f32; 4]; 4] {
        (*self).into()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view: &Matrix, projection: &Matrix) -> Self {
        Self {
            view_proj: Matrix::multiply(projection, view).into(),
        }
    }
}

/// takes world space positions into the light's texture space, for depth
/// comparison against the shadow map
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadowUniform {
    pub shadow_matrix: [[f32; 4]; 4],
}

impl ShadowUniform {
    pub fn new(light_view: &Matrix, light_projection: &Matrix) -> Self {
        let light_view_proj = Matrix::multiply(light_projection, light_view);
        Self {
            shadow_matrix: Matrix::multiply(&matrix::BIAS, &light_view_proj).into(),
        }
    }
}
