use crate::pragma::{parse_pragma_line, parse_stage, Pragma};
use crate::PreprocessError;
use shadergen_common::ShaderStage;

#[derive(Debug, Default)]
pub(crate) struct SplitSource {
    pub(crate) name: Option<String>,
    pub(crate) vertex: Option<String>,
    pub(crate) fragment: Option<String>,
    pub(crate) compute: Option<String>,
}

impl SplitSource {
    fn slot(&mut self, stage: ShaderStage) -> &mut Option<String> {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
            ShaderStage::Compute => &mut self.compute,
        }
    }
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

/// Split a preprocessed source into its stages.
///
/// Every line before the first `#pragma stage` is shared and begins each stage source.
pub(crate) fn split_source(source: &str) -> Result<SplitSource, PreprocessError> {
    let mut output = SplitSource::default();
    let mut shared = String::new();
    let mut current = None;

    for line in source.lines() {
        match parse_pragma_line(line) {
            Some(Pragma::Name(name)) => {
                if output.name.is_some() {
                    return Err(PreprocessError::DuplicatePragmaError(line.to_string()));
                }
                if name.is_empty() {
                    return Err(PreprocessError::EmptyName);
                }
                output.name = Some(name.to_string());
                continue;
            }
            Some(Pragma::Stage(stage)) => {
                let stage = parse_stage(stage)?;
                let slot = output.slot(stage);
                if slot.is_some() {
                    return Err(PreprocessError::DuplicatePragmaError(line.to_string()));
                }
                *slot = Some(shared.clone());
                current = Some(stage);
                continue;
            }
            None => {}
        }

        match current {
            None => push_line(&mut shared, line),
            Some(stage) => {
                if let Some(out) = output.slot(stage).as_mut() {
                    push_line(out, line)
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod test {
    use crate::stage::split_source;
    use crate::PreprocessError;

    const SOURCE: &str = r#"#version 450
#pragma name Split
layout(location = 0) in vec4 Color;
#pragma stage vertex
void main() { gl_Position = vec4(0.0); }
#pragma stage fragment
layout(location = 0) out vec4 FragColor;
void main() { FragColor = Color; }
"#;

    #[test]
    fn splits_stages() {
        let split = split_source(SOURCE).unwrap();
        assert_eq!(split.name.as_deref(), Some("Split"));
        assert!(split.compute.is_none());

        let vertex = split.vertex.unwrap();
        assert!(vertex.starts_with("#version 450\nlayout(location = 0) in vec4 Color;\n"));
        assert!(vertex.contains("gl_Position"));
        assert!(!vertex.contains("FragColor"));

        let fragment = split.fragment.unwrap();
        assert!(fragment.starts_with("#version 450\n"));
        assert!(fragment.contains("FragColor = Color"));
        assert!(!fragment.contains("gl_Position"));
        assert!(!fragment.contains("#pragma"));
    }

    #[test]
    fn no_stages() {
        let split = split_source("#version 450\nfloat unused;\n").unwrap();
        assert!(split.vertex.is_none() && split.fragment.is_none() && split.compute.is_none());
    }

    #[test]
    fn duplicate_stage() {
        let result = split_source(
            "#version 450\n#pragma stage vertex\n#pragma stage vertex\n",
        );
        assert!(matches!(result, Err(PreprocessError::DuplicatePragmaError(_))));
    }

    #[test]
    fn duplicate_name() {
        let result = split_source("#version 450\n#pragma name A\n#pragma name B\n");
        assert!(matches!(result, Err(PreprocessError::DuplicatePragmaError(_))));
    }

    #[test]
    fn empty_name() {
        let result = split_source("#version 450\n#pragma name  \n");
        assert!(matches!(result, Err(PreprocessError::EmptyName)));
    }
}
