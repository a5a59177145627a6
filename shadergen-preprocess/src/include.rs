use crate::PreprocessError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::Lines;

const MAX_INCLUDE_DEPTH: usize = 16;

#[cfg(feature = "line_directives")]
const GL_GOOGLE_CPP_STYLE_LINE_DIRECTIVE: &str =
    "#extension GL_GOOGLE_CPP_STYLE_LINE_DIRECTIVE : require";

trait SourceOutput {
    fn push_line(&mut self, str: &str);

    #[cfg(feature = "line_directives")]
    fn mark_line(&mut self, line_no: usize, comment: &str) {
        self.push_line(&format!("#line {} \"{}\"", line_no, comment))
    }

    #[cfg(not(feature = "line_directives"))]
    fn mark_line(&mut self, _line_no: usize, _comment: &str) {}
}

impl SourceOutput for String {
    fn push_line(&mut self, str: &str) {
        self.push_str(str);
        self.push('\n');
    }
}

pub(crate) fn read_file(path: impl AsRef<Path>) -> Result<String, PreprocessError> {
    let path = path.as_ref();
    let mut source = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut source))
        .map_err(|e| PreprocessError::IOError(path.to_path_buf(), e))?;
    Ok(source)
}

/// Resolve includes of a source file loaded from disk.
pub(crate) fn read_source(path: impl AsRef<Path>) -> Result<String, PreprocessError> {
    let path = path.as_ref();
    let source = read_file(path)?;
    let file_name = path.file_name().and_then(|f| f.to_str()).unwrap_or("");
    process_source(&source, file_name, Some(path))
}

/// Resolve includes of `source`. Includes are only permitted when `origin` is known.
pub(crate) fn process_source(
    source: &str,
    file_name: &str,
    origin: Option<&Path>,
) -> Result<String, PreprocessError> {
    let mut output = String::new();

    let source = source.trim();
    let mut lines = source.lines();

    if let Some(header) = lines.next() {
        if !header.starts_with("#version ") {
            return Err(PreprocessError::MissingVersionHeader);
        }
        output.push_line(header);
    } else {
        return Err(PreprocessError::UnexpectedEof);
    }

    #[cfg(feature = "line_directives")]
    output.push_line(GL_GOOGLE_CPP_STYLE_LINE_DIRECTIVE);
    output.mark_line(2, file_name);
    preprocess(lines, 2, file_name, origin, 0, &mut output)?;

    Ok(output)
}

fn preprocess(
    lines: Lines,
    first_line: usize,
    file_name: &str,
    origin: Option<&Path>,
    depth: usize,
    output: &mut String,
) -> Result<(), PreprocessError> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(PreprocessError::ExceededIncludeDepth);
    }

    let include_root = origin.and_then(Path::parent);

    for (line_no, line) in lines.enumerate() {
        let line_no = line_no + first_line;
        if let Some(include_file) = line.strip_prefix("#include ") {
            let include_file = include_file.trim().trim_matches('"');
            if include_file.is_empty() {
                return Err(PreprocessError::UnexpectedEol(line_no));
            }

            let Some(include_root) = include_root else {
                return Err(PreprocessError::UnresolvedInclude(include_file.to_string()));
            };

            let include_path = include_root.join(include_file);
            log::trace!("including {include_path:?} from {file_name}");

            let source = read_file(&include_path)?;
            let source = source.trim();
            let lines = source.lines();

            let include_name = include_path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("");
            output.mark_line(1, include_name);
            preprocess(lines, 1, include_name, Some(&include_path), depth + 1, output)?;
            output.mark_line(line_no + 1, file_name);
            continue;
        }
        if line.starts_with("#endif") || line.starts_with("#pragma") {
            output.push_line(line);
            output.mark_line(line_no + 1, file_name);
            continue;
        }

        output.push_line(line)
    }
    Ok(())
}
