use shadergen_common::{ShaderBackend, ShaderStage};

/// Resolve the artifact name of one stage of a shader set.
///
/// Names have the form `<set>-<stage>.<extension>`, for example `Basic-fragment.330.glsl`.
/// Since extensions are distinct per backend, names are unique per backend, set and stage as
/// long as set names are unique.
pub fn resolve(backend: ShaderBackend, set_name: &str, stage: ShaderStage) -> String {
    debug_assert!(!set_name.is_empty(), "shader set names must not be empty");
    format!("{set_name}-{}.{}", stage.label(), backend.extension())
}

#[cfg(test)]
mod test {
    use crate::naming::resolve;
    use shadergen_common::{ShaderBackend, ShaderStage};
    use std::collections::HashSet;

    #[test]
    fn resolves_vertex_names() {
        for backend in ShaderBackend::ALL {
            assert_eq!(
                resolve(backend, "Foo", ShaderStage::Vertex),
                format!("Foo-vertex.{}", backend.extension())
            );
        }
    }

    #[test]
    fn resolves_exact_names() {
        assert_eq!(
            resolve(ShaderBackend::GlslEs300, "Basic", ShaderStage::Fragment),
            "Basic-fragment.300.glsles"
        );
        assert_eq!(
            resolve(ShaderBackend::Metal, "blur", ShaderStage::Compute),
            "blur-compute.metal"
        );
    }

    #[test]
    fn resolve_is_pure() {
        let first = resolve(ShaderBackend::Hlsl, "Foo", ShaderStage::Fragment);
        let second = resolve(ShaderBackend::Hlsl, "Foo", ShaderStage::Fragment);
        assert_eq!(first, second);
    }

    #[test]
    fn names_are_unique() {
        let mut names = HashSet::new();
        for backend in ShaderBackend::ALL {
            for set in ["Foo", "Bar"] {
                for stage in ShaderStage::ALL {
                    assert!(names.insert(resolve(backend, set, stage)));
                }
            }
        }
        assert_eq!(names.len(), 5 * 2 * 3);
    }
}
