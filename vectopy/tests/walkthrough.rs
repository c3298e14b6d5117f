//! The end to end scenarios from the README, run through the public API.

use vectopy::prelude::*;

#[test]
fn test_creation_and_arithmetic() {
    let a = array([1, 2, 3]).unwrap();
    let b = array([4.0, 5.0, 6.0]).unwrap();
    assert_eq!(a.to_string(), "VectoPyArray([1, 2, 3], dtype=int)");

    let c = &a + &b;
    assert_eq!(c, array([5.0, 7.0, 9.0]).unwrap());
    assert_eq!(a.dot(&b), Ok(Scalar::Float(32.0)));
    assert_eq!(&a * 2, array([2, 4, 6]).unwrap());
}

#[test]
fn test_errors_surface_through_try_methods() {
    let a = array([1, 2, 3]).unwrap();
    let b = array([1, 2]).unwrap();
    let err = a.try_add(&b).unwrap_err();
    assert!(err.to_string().contains("same shape"));

    let err = a.try_mul("text").unwrap_err();
    assert!(err.to_string().contains("Unsupported operand type"));

    assert_eq!(a.try_div(0), Err(Error::DivisionByZero));
    assert!(array(Vec::<f64>::new()).unwrap_err().to_string().contains("empty sequence"));
}

#[test]
fn test_indexing_and_slicing() {
    let a = arange_step(10, 60, 10).unwrap();
    assert_eq!(a.get(-1), Ok(Scalar::Int(50)));
    assert!(a.get(5).is_err());
    assert_eq!(a.slice(1..3).unwrap(), array([20, 30]).unwrap());
    assert_eq!(a.slice(Slice::from(..).with_step(-2)).unwrap(), array([50, 30, 10]).unwrap());
}

#[test]
fn test_statistics_walkthrough() {
    let a = array([-5, -3, -1, 2, 4]).unwrap();
    assert_eq!(a.sum(), Ok(Scalar::Int(-3)));
    assert_eq!(a.median(), Ok(Scalar::Int(-1)));
    assert_eq!(a.mode().unwrap().values().len(), 5);
    assert!((a.mean().unwrap() + 0.6).abs() < 1e-12);
}

#[test]
fn test_time_series_walkthrough() {
    let prices = array([100, 105, 110, 115, 120, 125]).unwrap();
    let ma = prices.moving_average(3).unwrap();
    assert_eq!(ma, array([105.0, 110.0, 115.0, 120.0]).unwrap());
    assert_eq!(prices.shift(2).get(0), Ok(Scalar::Int(0)));
    assert_eq!(prices.cumulative_sum().unwrap().get(-1), prices.sum());
}

#[test]
fn test_transform_walkthrough() {
    let a = array([-5, 0, 50, 100, 150]).unwrap();
    let clipped = a.clip(0, 100).unwrap();
    assert_eq!(clipped, array([0, 0, 50, 100, 100]).unwrap());
    assert_eq!(clipped.dtype(), Dtype::Integer);

    let scaled = arange_step(10, 60, 10).unwrap().minmax_scale().unwrap();
    assert_eq!(scaled, array([0.0, 0.25, 0.5, 0.75, 1.0]).unwrap());
}

#[test]
fn test_algorithms_walkthrough() {
    assert_eq!(array([2, 2, 3, 2, 4, 2, 2]).unwrap().majority_element(), Ok(Scalar::Int(2)));
    let err = array([1, 2, 3, 1, 2, 3]).unwrap().majority_element().unwrap_err();
    assert!(err.to_string().contains("No majority element"));
    assert!(array([7, 7, 7]).unwrap().is_monotonic());
    assert!(!array([1, 3, 2, 4]).unwrap().is_monotonic());
}

#[test]
fn test_educational_walkthrough() {
    let a = array([1, 2, 3]).unwrap();
    let text = explain(&a);
    assert!(text.contains("Strides: (4,)"));
    assert_eq!(visualize(&a).lines().count(), 3);
    let timed = benchmark("mean", &a, |a| a.mean());
    assert_eq!(timed.result, Ok(2.0));
}
