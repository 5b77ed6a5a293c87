use std::collections::BTreeSet;

use tracing::debug;

use crate::markdown::markdown::{CodeSection, ExtractConfig, MarkdownDocument};

const INDENT: &str = "  ";

/// Prefix every non-empty line of `code` with `prefix`.
pub fn indent(code: &str, prefix: &str) -> String {
    code.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_section(section: &CodeSection) -> String {
    let comment = format!(
        "{}// {}:{}",
        INDENT,
        section.source_file.display(),
        section.starting_line
    );
    let body = section.body.trim_end_matches('\n');

    if body.is_empty() {
        comment
    } else {
        format!("{}\n{}", comment, indent(body, INDENT))
    }
}

/// Merge documents into one compilation unit.
///
/// Imports from every document are unioned and sorted; sections keep their
/// order within a document and documents keep the order they were given in.
pub fn assemble(documents: &[MarkdownDocument], config: &ExtractConfig) -> String {
    let imports: BTreeSet<&str> = documents
        .iter()
        .flat_map(|doc| doc.imports.iter().map(String::as_str))
        .collect();

    let sections: Vec<&CodeSection> = documents.iter().flat_map(|doc| &doc.sections).collect();

    debug!(
        documents = documents.len(),
        imports = imports.len(),
        sections = sections.len(),
        "assembling snippets"
    );

    let mut out = format!("package {};\n\n", config.package);

    if !imports.is_empty() {
        for import in &imports {
            out.push_str(&format!("{} {};\n", config.import_keyword, import));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} {} {{\n", config.type_keyword, config.enclosing_type));

    let snippets = sections
        .into_iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n");
    if !snippets.is_empty() {
        out.push_str(&snippets);
        out.push('\n');
    }

    out.push_str("}\n");
    out
}
