use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use regex::{Captures, Regex};
use tracing::debug;

use crate::{
    count_newlines,
    errors::errors::{Error, ErrorImpl},
    sources::read_source,
};

/// Keywords that shape the extracted snippets and the assembled file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Info string after the opening fence, e.g. ```` ```java ````.
    pub fence_tag: String,
    pub import_keyword: String,
    pub type_keyword: String,
    /// Modifiers that may precede `type_keyword` on a top-level declaration.
    pub modifiers: Vec<String>,
    /// Prepended to top-level declarations so they nest inside one type.
    pub nesting_modifier: String,
    pub package: String,
    pub enclosing_type: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            fence_tag: String::from("java"),
            import_keyword: String::from("import"),
            type_keyword: String::from("class"),
            modifiers: vec![
                String::from("public"),
                String::from("final"),
                String::from("abstract"),
            ],
            nesting_modifier: String::from("static"),
            package: String::from("com.example"),
            enclosing_type: String::from("Snippets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSection {
    pub source_file: PathBuf,
    /// 1-based line of the opening fence.
    pub starting_line: usize,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub path: PathBuf,
    pub sections: Vec<CodeSection>,
    pub imports: BTreeSet<String>,
}

pub struct Extractor {
    code_section: Regex,
    import: Regex,
    top_level_type: Regex,
    nesting_modifier: String,
}

fn compile(pattern: String) -> Result<Regex, Error> {
    Regex::new(&pattern)
        .map_err(|source| Error::new(ErrorImpl::InvalidPattern { pattern, source }, None))
}

impl Extractor {
    pub fn new(config: &ExtractConfig) -> Result<Extractor, Error> {
        let code_section = compile(format!(
            r"(?m)^```{}[^\S\n]*\n((?s:.*?))^```[^\S\n]*$",
            regex::escape(&config.fence_tag)
        ))?;

        let import = compile(format!(
            r"(?m)^{}[ \t]+([^;\n]*);[ \t\r]*$",
            regex::escape(&config.import_keyword)
        ))?;

        let modifiers = config
            .modifiers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        let modifiers = if modifiers.is_empty() {
            String::new()
        } else {
            format!(r"(?:(?:{})[ \t]+)*", modifiers)
        };
        let top_level_type = compile(format!(
            r"(?m)^({}{}\b)",
            modifiers,
            regex::escape(&config.type_keyword)
        ))?;

        Ok(Extractor {
            code_section,
            import,
            top_level_type,
            nesting_modifier: config.nesting_modifier.clone(),
        })
    }

    /// Pull every fenced section out of `markdown`.
    ///
    /// Import lines are blanked rather than deleted so line offsets inside a
    /// body still match the markdown they came from.
    pub fn extract(&self, path: &Path, markdown: &str) -> MarkdownDocument {
        let mut imports = BTreeSet::new();
        let mut sections = vec![];

        for captures in self.code_section.captures_iter(markdown) {
            let (Some(whole), Some(body)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            let starting_line = count_newlines(&markdown[..whole.start()]) + 1;

            let body = self.import.replace_all(body.as_str(), |caps: &Captures| {
                imports.insert(caps[1].to_string());
                String::new()
            });
            let body = self
                .top_level_type
                .replace_all(&body, |caps: &Captures| {
                    format!("{} {}", self.nesting_modifier, &caps[1])
                })
                .into_owned();

            sections.push(CodeSection {
                source_file: path.to_path_buf(),
                starting_line,
                body,
            });
        }

        debug!(
            path = %path.display(),
            sections = sections.len(),
            imports = imports.len(),
            "extracted code sections"
        );

        MarkdownDocument {
            path: path.to_path_buf(),
            sections,
            imports,
        }
    }

    pub fn load(&self, path: &Path) -> Result<MarkdownDocument, Error> {
        let markdown = read_source(path)?;
        Ok(self.extract(path, &markdown))
    }

    pub fn load_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<MarkdownDocument>, Error> {
        paths.iter().map(|path| self.load(path.as_ref())).collect()
    }
}
