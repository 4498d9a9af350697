//! Filename derivation across the enumerated case set

use std::collections::HashSet;

use cmatgen::{enumerate_cases, planned_paths, GeneratorConfig};

#[test]
fn test_filenames_are_unique() {
    let config = GeneratorConfig::default();
    let names: Vec<String> = enumerate_cases(&config).map(|c| c.file_name()).collect();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_filenames_follow_convention() {
    let config = GeneratorConfig::default();
    let names: Vec<String> = enumerate_cases(&config).map(|c| c.file_name()).collect();
    assert_eq!(
        names,
        vec![
            "float16-float32-constant-8x8x16-acc-0.0.vk_shader_test",
            "float16-float32-constant-8x16x16-acc-0.0.vk_shader_test",
            "float16-float32-constant-8x8x16-acc-0.5.vk_shader_test",
            "float16-float32-constant-8x16x16-acc-0.5.vk_shader_test",
        ]
    );
}

#[test]
fn test_wider_axes_stay_collision_free() {
    let config = GeneratorConfig {
        acc_constants: vec![0.0, 0.5, 1.0, 0.25, -0.5],
        shapes: vec![(8, 8, 16), (8, 16, 16), (16, 8, 16), (16, 16, 16), (16, 16, 8)],
        ..GeneratorConfig::default()
    };
    let paths = planned_paths(&config).unwrap();
    let unique: HashSet<_> = paths.iter().collect();
    assert_eq!(paths.len(), 25);
    assert_eq!(unique.len(), 25);
}

#[test]
fn test_default_output_directory() {
    let paths = planned_paths(&GeneratorConfig::default()).unwrap();
    assert!(paths[0].starts_with("vulkan/shaders/vulkan-cmat-muladd-with-acc-constant"));
}
