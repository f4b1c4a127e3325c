// Pearson correlation scoring tests

mod common;

use huefind::core::{score, Category, FeatureVector};
use huefind::processing::extract;
use huefind::Error;

fn ramp(n: usize) -> FeatureVector {
	FeatureVector::raw((0..n).map(|i| i as f32 / n as f32).collect())
}

fn wave(n: usize) -> FeatureVector {
	FeatureVector::raw((0..n).map(|i| ((i as f32 * 0.37).sin() + 1.0) / 2.0).collect())
}

#[test]
fn test_self_similarity() {
	for v in [ramp(768), wave(768), extract(&common::gradient(), Category::Glacier)] {
		let s = score(&v, &v).unwrap();
		assert!((s - 1.0).abs() < 1e-6, "self score was {}", s);
	}
}

#[test]
fn test_symmetry() {
	let a = wave(768);
	let b = extract(&common::gradient(), Category::Buildings);
	let ab = score(&a, &b).unwrap();
	let ba = score(&b, &a).unwrap();
	assert!((ab - ba).abs() < 1e-6);
	assert!((-1.0..=1.0).contains(&ab));
}

#[test]
fn test_anti_correlation() {
	let a = ramp(768);
	let b = FeatureVector::raw(a.as_slice().iter().map(|x| 1.0 - x).collect());
	let s = score(&a, &b).unwrap();
	assert!((s + 1.0).abs() < 1e-6, "score was {}", s);
}

#[test]
fn test_constant_vector_scores_zero() {
	let zero = FeatureVector::raw(vec![0.0; 768]);
	let flat = FeatureVector::raw(vec![0.5; 768]);
	let v = wave(768);

	assert_eq!(score(&zero, &v).unwrap(), 0.0);
	assert_eq!(score(&v, &flat).unwrap(), 0.0);
	assert_eq!(score(&zero, &flat).unwrap(), 0.0);
}

#[test]
fn test_dimension_mismatch() {
	let err = score(&ramp(768), &ramp(512)).unwrap_err();
	assert!(matches!(err, Error::DimensionMismatch { left: 768, right: 512 }));

	let empty = FeatureVector::raw(Vec::new());
	assert!(matches!(score(&empty, &empty), Err(Error::DimensionMismatch { .. })));
}

#[test]
fn test_small_magnitude_self_similarity() {
	let v = FeatureVector::raw((0..768).map(|i| (i % 2) as f32 * 1e-9).collect());
	let s = score(&v, &v).unwrap();
	assert!((s - 1.0).abs() < 1e-6, "self score was {}", s);

	let w = FeatureVector::raw((0..768).map(|i| ((i + 1) % 2) as f32 * 1e-9).collect());
	let s = score(&v, &w).unwrap();
	assert!((s + 1.0).abs() < 1e-6, "score was {}", s);
}

#[test]
fn test_fractional_constant_scores_zero() {
	let flat = FeatureVector::raw(vec![0.1; 768]);
	assert_eq!(score(&flat, &flat).unwrap(), 0.0);
	assert_eq!(score(&flat, &wave(768)).unwrap(), 0.0);
}

#[test]
fn test_from_counts_min_max() {
	let v = FeatureVector::from_counts(&[2, 4, 6]);
	assert_eq!(v.as_slice(), &[0.0, 0.5, 1.0]);

	let flat = FeatureVector::from_counts(&[7, 7, 7]);
	assert_eq!(flat.as_slice(), &[0.0, 0.0, 0.0]);

	assert!(FeatureVector::from_counts(&[]).is_empty());
}
