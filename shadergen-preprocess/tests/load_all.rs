use shadergen_common::ShaderStage;
use shadergen_preprocess::{PreprocessError, ShaderDefinition, ShaderProgram};

#[test_log::test]
fn load_fixture_program() {
    let program = ShaderProgram::load_dir("../test").unwrap();
    let names: Vec<_> = program
        .definitions()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, ["Basic", "blur", "Textured"]);

    let textured = &program.definitions()[2];
    let stages: Vec<_> = textured.stages().map(|(stage, _)| stage).collect();
    assert_eq!(stages, [ShaderStage::Vertex, ShaderStage::Fragment]);
}

#[test_log::test]
fn load_missing_file() {
    let result = ShaderDefinition::load("../test/does-not-exist.shader");
    assert!(matches!(result, Err(PreprocessError::IOError(..))));
}

#[test_log::test]
fn load_empty_dir() {
    let program = ShaderProgram::load_dir("../test/does-not-exist").unwrap();
    assert!(program.is_empty());
}
