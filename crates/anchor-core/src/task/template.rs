use super::directive::Directive;
use crate::domain::errors::TEMPLATE_READ;
use crate::domain::{ShowerError, ShowerResult};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLine {
    pub source_line: usize,
    pub text: String,
}

/// Strips `#` comments and blank lines; everything else is kept verbatim
/// (trimmed) since the engine owns the directive grammar.
pub fn tokenize_template(source: &str) -> Vec<TemplateLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let content = line.split('#').next().unwrap_or_default().trim();
            (!content.is_empty()).then(|| TemplateLine {
                source_line: index + 1,
                text: content.to_string(),
            })
        })
        .collect()
}

pub fn load_template(path: &Path) -> ShowerResult<Vec<Directive>> {
    let source = fs::read_to_string(path).map_err(|source| {
        ShowerError::io_system(
            TEMPLATE_READ,
            format!("failed to read template '{}': {}", path.display(), source),
        )
    })?;

    Ok(tokenize_template(&source)
        .into_iter()
        .map(|line| Directive::Loaded {
            source: path.to_path_buf(),
            source_line: line.source_line,
            text: line.text,
        })
        .collect())
}
