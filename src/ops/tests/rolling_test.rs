use approx::assert_abs_diff_eq;
use ndarray::{array, Array1, Array2, Array3, ArrayD, Axis, IxDyn};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::init_logger;
use crate::error::KgeOpsError;
use crate::ops::rolling::{get_rolling_matrix, get_rolling_matrix_dyn, rolled_index};

#[test]
fn test_rolling_matrix_small() {
    init_logger();
    let x = array![[1, 2, 3]];
    let mat = get_rolling_matrix(&x.view());

    assert_eq!(mat.shape(), &[1, 3, 3]);
    assert_eq!(mat, array![[[1, 2, 3], [3, 1, 2], [2, 3, 1]]]);
}

#[test]
fn test_rolled_index() {
    println!("\n--- Test: Rolled source column ---");
    assert_eq!(rolled_index(0, 0, 3), Some(0));
    assert_eq!(rolled_index(0, 2, 3), Some(2));
    assert_eq!(rolled_index(1, 0, 3), Some(2));
    assert_eq!(rolled_index(2, 1, 3), Some(2));
    assert_eq!(rolled_index(1, 2, 3), Some(1));
    assert_eq!(rolled_index(4, 0, 5), Some(1));
    assert_eq!(rolled_index(0, 0, 1), Some(0));
    // no column to roll into
    assert_eq!(rolled_index(0, 0, 0), None);
    assert_eq!(rolled_index(3, 1, 0), None);
    println!("  [PASSED] rolled_index wraps with a floored modulus.");
}

#[test]
fn test_rolling_matrix_entries() {
    println!("\n--- Test: mat[b, i, j] == x[b, (j - i) mod dim] ---");
    init_logger();
    let (b_size, dim) = (6, 9);
    let x = Array2::random((b_size, dim), Uniform::new(-1.0f32, 1.0));
    let mat = get_rolling_matrix(&x.view());

    assert_eq!(mat.shape(), &[b_size, dim, dim]);
    for b in 0..b_size {
        assert_eq!(mat.index_axis(Axis(0), b).row(0), x.row(b));
        for i in 0..dim {
            for j in 0..dim {
                assert_eq!(mat[[b, i, j]], x[[b, (j + dim - i) % dim]]);
            }
        }
    }
    println!("  [PASSED] every entry matches its shifted source.");
}

#[test]
fn test_rolling_matrix_degenerate_shapes() {
    init_logger();
    let no_dim = Array2::<f64>::zeros((2, 0));
    assert_eq!(get_rolling_matrix(&no_dim.view()).shape(), &[2, 0, 0]);

    let no_batch = Array2::<f64>::zeros((0, 4));
    assert_eq!(get_rolling_matrix(&no_batch.view()).shape(), &[0, 4, 4]);

    let single = array![[7.5f64]];
    assert_eq!(get_rolling_matrix(&single.view()), array![[[7.5]]]);
}

#[test]
fn test_rolling_matrix_dyn_checks_rank() -> anyhow::Result<()> {
    init_logger();
    let x = Array2::random((3, 4), Uniform::new(0.0f32, 1.0));
    let from_dyn = get_rolling_matrix_dyn(&x.clone().into_dyn().view())?;
    assert_eq!(from_dyn, get_rolling_matrix(&x.view()));

    let flat = ArrayD::<f32>::zeros(IxDyn(&[4]));
    assert_eq!(
        get_rolling_matrix_dyn(&flat.view()),
        Err(KgeOpsError::InvalidRank { ndim: 1 })
    );

    let cube = ArrayD::<f32>::zeros(IxDyn(&[2, 3, 4]));
    assert_eq!(
        get_rolling_matrix_dyn(&cube.view()),
        Err(KgeOpsError::InvalidRank { ndim: 3 })
    );
    Ok(())
}

#[test]
fn test_rolling_matrix_is_circular_convolution() {
    println!("\n--- Test: y . mat equals circular convolution of x and y ---");
    init_logger();
    let dim = 8;
    let x = Array2::random((1, dim), Uniform::new(-1.0f64, 1.0));
    let y = Array1::random(dim, Uniform::new(-1.0f64, 1.0));

    let mat: Array3<f64> = get_rolling_matrix(&x.view());
    let conv = y.dot(&mat.index_axis(Axis(0), 0));

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(dim);
    let ifft = planner.plan_fft_inverse(dim);

    let mut fx: Vec<Complex<f64>> = x.row(0).iter().map(|&v| Complex::new(v, 0.0)).collect();
    let mut fy: Vec<Complex<f64>> = y.iter().map(|&v| Complex::new(v, 0.0)).collect();
    fft.process(&mut fx);
    fft.process(&mut fy);

    let mut product: Vec<Complex<f64>> = fx.iter().zip(&fy).map(|(a, b)| a * b).collect();
    ifft.process(&mut product);
    let expected: Array1<f64> = product.iter().map(|c| c.re / dim as f64).collect();

    assert_abs_diff_eq!(conv, expected, epsilon = 1e-9);
    println!("  [PASSED] matches the FFT reference.");
}

#[test]
fn test_rolling_matrix_is_deterministic() {
    let x = Array2::random((4, 5), Uniform::new(-1.0f32, 1.0));
    assert_eq!(get_rolling_matrix(&x.view()), get_rolling_matrix(&x.view()));
}
