//! Built-in operands for the `example` command.

use crate::matrix::Matrix;

pub const EXAMPLE_A: [[u64; 5]; 5] = [
    [0x22, 0x6b, 0xc6, 0xe7, 0xa7],
    [0x3d, 0x8f, 0x58, 0x60, 0xf3],
    [0xfb, 0xa6, 0x9c, 0x8e, 0x33],
    [0x13, 0x69, 0x68, 0xc3, 0xe1],
    [0x89, 0x8a, 0xf6, 0x7a, 0x1d],
];

pub const EXAMPLE_B: [[u64; 5]; 5] = [
    [0xfd, 0x13, 0x45, 0xb1, 0x39],
    [0x1f, 0xd7, 0x62, 0x3b, 0xec],
    [0x2f, 0xd7, 0x4a, 0x48, 0x6c],
    [0x55, 0x7e, 0x30, 0x50, 0x6a],
    [0x1e, 0x18, 0xe2, 0x56, 0x6e],
];

pub fn example_pair() -> (Matrix, Matrix) {
    (
        Matrix::from(ndarray::arr2(&EXAMPLE_A)),
        Matrix::from(ndarray::arr2(&EXAMPLE_B)),
    )
}
