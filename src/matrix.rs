use crate::vector::{Vec3f, Vec4f};
use std::ops::{Index, IndexMut, Mul};


/// 4x4 matrix in column major order: element (row, col) lives at col * 4 + row.
/// The storage matches what the graphics backend expects for a uniform upload,
/// no transpose needed on the way out.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix {
    elements: [f32; 16],
}

#[rustfmt::skip]
pub const IDENTITY: Matrix = Matrix { elements: [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
]};

/// maps clip space [-1, 1] to texture space [0, 1], used to turn a light's
/// view projection into shadow map sampling coordinates
#[rustfmt::skip]
pub const BIAS: Matrix = Matrix { elements: [
    0.5, 0.0, 0.0, 0.0,
    0.0, 0.5, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.5, 0.5, 0.5, 1.0,
]};

impl Matrix {
    /// rotation about the x axis, angle in degrees
    pub fn rotation_x(angle_in_degrees: f32) -> Matrix {
        let angle_in_radians = angle_in_degrees.to_radians();
        let mut result = IDENTITY;

        result.elements[5] = angle_in_radians.cos();
        result.elements[9] = -angle_in_radians.sin();
        result.elements[6] = angle_in_radians.sin();
        result.elements[10] = angle_in_radians.cos();

        result
    }

    /// rotation about the y axis, angle in degrees
    pub fn rotation_y(angle_in_degrees: f32) -> Matrix {
        let angle_in_radians = angle_in_degrees.to_radians();
        let mut result = IDENTITY;

        result.elements[0] = angle_in_radians.cos();
        result.elements[8] = angle_in_radians.sin();
        result.elements[2] = -angle_in_radians.sin();
        result.elements[10] = angle_in_radians.cos();

        result
    }

    /// rotation about the z axis, angle in degrees
    pub fn rotation_z(angle_in_degrees: f32) -> Matrix {
        let angle_in_radians = angle_in_degrees.to_radians();
        let mut result = IDENTITY;

        result.elements[0] = angle_in_radians.cos();
        result.elements[4] = -angle_in_radians.sin();
        result.elements[1] = angle_in_radians.sin();
        result.elements[5] = angle_in_radians.cos();

        result
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Matrix {
        let mut result = IDENTITY;

        result.elements[0] = x;
        result.elements[5] = y;
        result.elements[10] = z;

        result
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Matrix {
        let mut result = IDENTITY;

        result.elements[12] = x;
        result.elements[13] = y;
        result.elements[14] = z;

        result
    }

    /// perspective projection mapping [z_near, z_far] into clip space, with
    /// w set up for the perspective divide. fov is in radians here, unlike
    /// the rotation constructors which take degrees
    pub fn perspective(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Matrix {
        let focal = 1.0 / (fov * 0.5).tan();
        let mut result = IDENTITY;

        result.elements[0] = focal / aspect_ratio;
        result.elements[5] = focal;
        result.elements[10] = -(z_far + z_near) / (z_far - z_near);
        result.elements[11] = -1.0;
        result.elements[14] = (-2.0 * z_far * z_near) / (z_far - z_near);
        result.elements[15] = 0.0;

        result
    }

    /// view matrix looking from eye towards center. The camera basis vectors
    /// land in the rows of the rotation block and the translation column
    /// holds the dot of each basis vector with the eye position, without
    /// negating eye first
    pub fn look_at(eye: Vec3f, center: Vec3f, up: Vec3f) -> Matrix {
        let forward = (center - eye).normalize();
        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward);
        let mut result = IDENTITY;

        result.elements[0] = right.x;
        result.elements[1] = new_up.x;
        result.elements[2] = -forward.x;

        result.elements[4] = right.y;
        result.elements[5] = new_up.y;
        result.elements[6] = -forward.y;

        result.elements[8] = right.z;
        result.elements[9] = new_up.z;
        result.elements[10] = -forward.z;

        result.elements[12] = right.dot(eye);
        result.elements[13] = new_up.dot(eye);
        result.elements[14] = forward.dot(eye);

        result
    }

    /// standard 4x4 product, left times right
    pub fn multiply(left: &Matrix, right: &Matrix) -> Matrix {
        let mut result = Matrix { elements: [0.0; 16] };

        for row in 0..4 {
            for column in 0..4 {
                let mut accumulator = 0.0;
                for k in 0..4 {
                    accumulator += left.elements[k * 4 + row] * right.elements[column * 4 + k];
                }
                result.elements[column * 4 + row] = accumulator;
            }
        }

        result
    }

    // 3x3 minor left after dropping one row and one column, laid out column
    // by column like the full matrix
    fn minor(&self, row: usize, column: usize) -> [f32; 9] {
        let mut minor = [0.0; 9];
        let mut slot = 0;
        for c in 0..4 {
            if c == column {
                continue;
            }
            for r in 0..4 {
                if r == row {
                    continue;
                }
                minor[slot] = self.elements[c * 4 + r];
                slot += 1;
            }
        }
        minor
    }

    /// cofactor expansion along the first row, signs alternating + - + -
    pub fn determinant(&self) -> f32 {
        let mut result = 0.0;
        for column in 0..4 {
            let term = self.elements[column * 4] * determinant3x3(&self.minor(0, column));
            if column % 2 == 0 {
                result += term;
            } else {
                result -= term;
            }
        }
        result
    }

    /// inverse via the adjoint divided by the determinant. There is no
    /// singularity check: a matrix with a zero determinant produces non
    /// finite elements, callers must only pass invertible matrices
    pub fn invert(&self) -> Matrix {
        let mut cofactors = Matrix { elements: [0.0; 16] };

        for row in 0..4 {
            for column in 0..4 {
                let sign = if (row + column) % 2 == 0 { 1.0 } else { -1.0 };
                cofactors.elements[column * 4 + row] =
                    sign * determinant3x3(&self.minor(row, column));
            }
        }

        // the adjoint is the transpose of the cofactor matrix
        cofactors.transpose();
        cofactors.scaled(1.0 / self.determinant())
    }

    /// every element multiplied by factor
    pub fn scaled(self, factor: f32) -> Matrix {
        let mut result = self;
        for element in result.elements.iter_mut() {
            *element *= factor;
        }
        result
    }

    /// swaps the six off diagonal pairs in place. The one operation here that
    /// mutates its receiver instead of returning a fresh matrix
    pub fn transpose(&mut self) {
        self.elements.swap(1, 4);
        self.elements.swap(2, 8);
        self.elements.swap(3, 12);
        self.elements.swap(6, 9);
        self.elements.swap(7, 13);
        self.elements.swap(11, 14);
    }

    /// raw column major storage, in upload order for the graphics backend
    pub fn as_array(&self) -> &[f32; 16] {
        &self.elements
    }

    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        &mut self.elements
    }
}

/// applies a matrix to a homogeneous vertex: each result component is the dot
/// of the vertex with one row of the matrix
pub fn vertex_transform(vertex: &Vec4f, matrix: &Matrix) -> Vec4f {
    let e = &matrix.elements;

    Vec4f::new(
        vertex.x * e[0] + vertex.y * e[4] + vertex.z * e[8] + vertex.w * e[12],
        vertex.x * e[1] + vertex.y * e[5] + vertex.z * e[9] + vertex.w * e[13],
        vertex.x * e[2] + vertex.y * e[6] + vertex.z * e[10] + vertex.w * e[14],
        vertex.x * e[3] + vertex.y * e[7] + vertex.z * e[11] + vertex.w * e[15],
    )
}

/// determinant of a 3x3 matrix handed over as nine floats grouped by column
pub fn determinant3x3(matrix: &[f32; 9]) -> f32 {
    let mut result = matrix[0] * (matrix[4] * matrix[8] - matrix[7] * matrix[5]);
    result -= matrix[3] * (matrix[1] * matrix[8] - matrix[7] * matrix[2]);
    result += matrix[6] * (matrix[1] * matrix[5] - matrix[4] * matrix[2]);
    result
}

impl Index<usize> for Matrix {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        assert!(index <= 15, "invalid matrix element index: {}", index);
        &self.elements[index]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        assert!(index <= 15, "invalid matrix element index: {}", index);
        &mut self.elements[index]
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, right: Matrix) -> Matrix {
        Matrix::multiply(&self, &right)
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(self, factor: f32) -> Matrix {
        self.scaled(factor)
    }
}

impl From<[f32; 16]> for Matrix {
    fn from(elements: [f32; 16]) -> Self {
        Matrix { elements }
    }
}

impl From<[[f32; 4]; 4]> for Matrix {
    fn from(columns: [[f32; 4]; 4]) -> Self {
        let mut elements = [0.0; 16];
        for (i, column) in columns.iter().enumerate() {
            elements[i * 4..i * 4 + 4].copy_from_slice(column);
        }
        Matrix { elements }
    }
}

impl From<Matrix> for [[f32; 4]; 4] {
    fn from(matrix: Matrix) -> Self {
        let e = matrix.elements;
        [
            [e[0], e[1], e[2], e[3]],
            [e[4], e[5], e[6], e[7]],
            [e[8], e[9], e[10], e[11]],
            [e[12], e[13], e[14], e[15]],
        ]
    }
}

impl From<Matrix> for cgmath::Matrix4<f32> {
    fn from(matrix: Matrix) -> Self {
        cgmath::Matrix4::from(<[[f32; 4]; 4]>::from(matrix))
    }
}

impl From<cgmath::Matrix4<f32>> for Matrix {
    fn from(matrix: cgmath::Matrix4<f32>) -> Self {
        let columns: [[f32; 4]; 4] = matrix.into();
        Matrix::from(columns)
    }
}
