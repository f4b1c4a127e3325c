// Histogram extraction tests

mod common;

use huefind::config::{FEATURE_LEN, HIST_BINS};
use huefind::core::{category_of, Category, ColorSpace};
use huefind::processing::histogram::rgb_to_hsv;
use huefind::processing::{extract, extract_labeled};
use huefind::Error;
use std::path::Path;

#[test]
fn test_vector_length_and_range() {
	let img = common::gradient();

	for category in Category::ALL {
		let v = extract(&img, category);
		assert_eq!(v.len(), FEATURE_LEN, "{} vector length", category);
		assert!(v.as_slice().iter().all(|&x| (0.0..=1.0).contains(&x)));
		assert!(v.as_slice().iter().any(|&x| x == 1.0), "max bin scales to 1");
	}
}

#[test]
fn test_bgr_channel_order() {
	let v = extract(&common::solid(common::RED), Category::Buildings);
	let bins = v.as_slice();

	// B = 0, G = 0, R = 255
	assert_eq!(bins[0], 1.0);
	assert_eq!(bins[HIST_BINS], 1.0);
	assert_eq!(bins[2 * HIST_BINS + 255], 1.0);
	assert_eq!(bins.iter().filter(|&&x| x > 0.0).count(), 3);
}

#[test]
fn test_hsv_histogram() {
	let v = extract(&common::solid(common::GREEN), Category::Forest);
	let bins = v.as_slice();

	// H = 60 (120 degrees halved), S = 255, V = 255
	assert_eq!(bins[60], 1.0);
	assert_eq!(bins[HIST_BINS + 255], 1.0);
	assert_eq!(bins[2 * HIST_BINS + 255], 1.0);
	assert_eq!(bins.iter().filter(|&&x| x > 0.0).count(), 3);
}

#[test]
fn test_policy_changes_features() {
	let img = common::gradient();
	assert_ne!(extract(&img, Category::Street), extract(&img, Category::Sea));
	assert_eq!(extract(&img, Category::Street), extract(&img, Category::Mountain));
}

#[test]
fn test_uniform_histogram_is_zero_vector() {
	let v = extract(&common::gray_ramp(), Category::Buildings);
	assert_eq!(v.len(), FEATURE_LEN);
	assert!(v.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_unknown_label() {
	let err = extract_labeled(&common::solid(common::RED), "desert").unwrap_err();
	assert!(matches!(err, Error::UnknownCategory(ref s) if s == "desert"));

	let ok = extract_labeled(&common::solid(common::RED), "street").unwrap();
	assert_eq!(ok, extract(&common::solid(common::RED), Category::Street));
}

#[test]
fn test_rgb_to_hsv() {
	assert_eq!(rgb_to_hsv(255, 0, 0), [0, 255, 255]);
	assert_eq!(rgb_to_hsv(0, 255, 0), [60, 255, 255]);
	assert_eq!(rgb_to_hsv(0, 0, 255), [120, 255, 255]);
	assert_eq!(rgb_to_hsv(128, 128, 128), [0, 0, 128]);
	assert_eq!(rgb_to_hsv(0, 0, 0), [0, 0, 0]);
	assert_eq!(rgb_to_hsv(255, 0, 255), [150, 255, 255]);
	assert_eq!(rgb_to_hsv(255, 0, 1), [0, 255, 255]);
}

#[test]
fn test_category_policy_table() {
	assert_eq!(Category::Buildings.color_space(), ColorSpace::Bgr);
	assert_eq!(Category::Mountain.color_space(), ColorSpace::Bgr);
	assert_eq!(Category::Street.color_space(), ColorSpace::Bgr);
	assert_eq!(Category::Forest.color_space(), ColorSpace::Hsv);
	assert_eq!(Category::Glacier.color_space(), ColorSpace::Hsv);
	assert_eq!(Category::Sea.color_space(), ColorSpace::Hsv);
}

#[test]
fn test_category_of() {
	assert_eq!(category_of(Path::new("seg/forest/1.jpg")).unwrap(), Category::Forest);
	assert_eq!(category_of(Path::new("/data/seg_test/Sea/20.jpg")).unwrap(), Category::Sea);
	assert!(matches!(
		category_of(Path::new("seg/desert/1.jpg")),
		Err(Error::UnknownCategory(ref s)) if s == "desert"
	));
	assert!(matches!(category_of(Path::new("1.jpg")), Err(Error::UnknownCategory(_))));
}
