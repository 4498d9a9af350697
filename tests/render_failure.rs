//! Rendering failures abort the batch with no file committed

use cmatgen::{run_with_renderer, GenError, GeneratorConfig, Renderer};

#[test]
fn test_missing_binding_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("fixtures");
    let config = GeneratorConfig::with_output_dir(&out);

    // Renders fine until a binding the pipeline never provides
    let renderer = Renderer::with_template(
        "missing_binding",
        "[require]\ncooperative_matrix m={{ m }}\n{{ matrix_c }}\n",
    )
    .unwrap();

    let mut report = Vec::new();
    let result = run_with_renderer(&config, &renderer, &mut report);

    match result {
        Err(GenError::Render { case, diagnostic }) => {
            assert_eq!(case, "float16-float32-constant-8x8x16-acc-0.0.vk_shader_test");
            assert!(diagnostic.contains("undefined"), "diagnostic was: {}", diagnostic);
        }
        other => panic!("expected render error, got {:?}", other),
    }
    assert!(!out.exists());
    assert!(report.is_empty());
}
