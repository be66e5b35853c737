// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RENDERIZAÇÃO DE REFERÊNCIAS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Converte a árvore de referências consolidada em texto plano indentado,
// pronto para segmentação e envio ao serviço de geração.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::types::{MergedFileReference, Reference};

/// Renderiza uma lista de referências com o prefixo de indentação dado.
///
/// Cada nó vira um bloco de linhas; o corpo do nó (protótipo, descrição,
/// parâmetros, retorno) recebe um tab além do título, e subreferências
/// descem um nível inteiro. Nós irmãos são separados por linha em branco.
///
/// ```
/// use ai_tests::render::render_references;
/// use ai_tests::types::{ParameterRef, Reference, ReturnRef};
///
/// let reference = Reference {
///     parameters: Some(vec![ParameterRef {
///         name: "x".into(),
///         param_type: "number".into(),
///     }]),
///     returns: Some(ReturnRef { return_type: "void".into() }),
///     ..Reference::new("f", "function")
/// };
///
/// assert_eq!(
///     render_references(&[reference], ""),
///     "f (function)\n\tParams:\n\t\tx (number)\n\tReturns: void"
/// );
/// ```
pub fn render_references(references: &[Reference], prefix: &str) -> String {
    references
        .iter()
        .map(|reference| render_reference(reference, prefix))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renderiza um nó e, recursivamente, suas subreferências.
fn render_reference(reference: &Reference, prefix: &str) -> String {
    let body_prefix = format!("{}\t", prefix);
    let mut lines = vec![format!(
        "{}{} ({})",
        prefix, reference.name, reference.category
    )];

    if let Some(prototype) = &reference.prototype {
        lines.push(format!("{}`{}`", body_prefix, prototype));
    }

    if let Some(description) = &reference.description {
        if !description.is_empty() {
            lines.push(format!("{}{}", body_prefix, description));
        }
    }

    if let Some(parameters) = &reference.parameters {
        if !parameters.is_empty() {
            lines.push(format!("{}Params:", body_prefix));
            for parameter in parameters {
                lines.push(format!(
                    "{}\t{} ({})",
                    body_prefix, parameter.name, parameter.param_type
                ));
            }
        }
    }

    if let Some(returns) = &reference.returns {
        lines.push(format!("{}Returns: {}", body_prefix, returns.return_type));
    }

    if let Some(subreferences) = &reference.subreferences {
        if !subreferences.is_empty() {
            // Bloco recursivo prefixado por newline, um nível abaixo
            lines.push(format!(
                "\n{}",
                render_references(subreferences, &body_prefix)
            ));
        }
    }

    lines.join("\n")
}

/// Renderiza o documento consolidado de um arquivo lógico.
///
/// Seções presentes (descrição, referências, exemplos) são unidas por
/// linha em branco; seções vazias somem sem deixar linhas órfãs.
pub fn render_merged(merged: &MergedFileReference) -> String {
    let mut sections = Vec::new();

    let description = merged.description.trim();
    if !description.is_empty() {
        sections.push(description.to_string());
    }

    if !merged.references.is_empty() {
        sections.push(render_references(&merged.references, ""));
    }

    if !merged.examples.is_empty() {
        sections.push(merged.examples.join("\n\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParameterRef, ReturnRef};

    #[test]
    fn test_render_minimal_reference_is_single_line() {
        let reference = Reference::new("f", "function");
        assert_eq!(render_references(&[reference], ""), "f (function)");
    }

    #[test]
    fn test_render_full_reference() {
        let reference = Reference {
            description: Some("Soma dois números".into()),
            prototype: Some("f(x: number): void".into()),
            parameters: Some(vec![ParameterRef {
                name: "x".into(),
                param_type: "number".into(),
            }]),
            returns: Some(ReturnRef {
                return_type: "void".into(),
            }),
            ..Reference::new("f", "function")
        };

        let rendered = render_references(&[reference], "");
        assert_eq!(
            rendered,
            "f (function)\n\t`f(x: number): void`\n\tSoma dois números\n\tParams:\n\t\tx (number)\n\tReturns: void"
        );
    }

    #[test]
    fn test_render_params_and_returns_only() {
        let reference = Reference {
            parameters: Some(vec![ParameterRef {
                name: "x".into(),
                param_type: "number".into(),
            }]),
            returns: Some(ReturnRef {
                return_type: "void".into(),
            }),
            ..Reference::new("f", "function")
        };

        assert_eq!(
            render_references(&[reference], ""),
            "f (function)\n\tParams:\n\t\tx (number)\n\tReturns: void"
        );
    }

    #[test]
    fn test_render_siblings_blank_line_separated() {
        let refs = vec![Reference::new("a", "function"), Reference::new("b", "class")];
        assert_eq!(render_references(&refs, ""), "a (function)\n\nb (class)");
    }

    #[test]
    fn test_render_nested_indents_one_tab_per_level() {
        let method = Reference {
            parameters: Some(vec![ParameterRef {
                name: "y".into(),
                param_type: "string".into(),
            }]),
            ..Reference::new("m", "method")
        };
        let class = Reference {
            subreferences: Some(vec![method]),
            ..Reference::new("C", "class")
        };

        let rendered = render_references(&[class], "");
        assert_eq!(
            rendered,
            "C (class)\n\n\tm (method)\n\t\tParams:\n\t\t\ty (string)"
        );
    }

    #[test]
    fn test_render_two_nesting_levels() {
        let inner = Reference::new("leaf", "function");
        let middle = Reference {
            subreferences: Some(vec![inner]),
            ..Reference::new("Mid", "class")
        };
        let outer = Reference {
            subreferences: Some(vec![middle]),
            ..Reference::new("Out", "module")
        };

        let rendered = render_references(&[outer], "");
        assert!(rendered.contains("\tMid (class)"));
        assert!(rendered.contains("\t\tleaf (function)"));
    }

    #[test]
    fn test_render_empty_optional_parts_omitted() {
        let reference = Reference {
            description: Some(String::new()),
            parameters: Some(vec![]),
            ..Reference::new("g", "function")
        };

        // Campos vazios não geram linhas
        assert_eq!(render_references(&[reference], ""), "g (function)");
    }

    #[test]
    fn test_render_merged_sections() {
        let merged = MergedFileReference {
            description: "Módulo de parsing".into(),
            references: vec![Reference::new("parse", "function")],
            examples: vec!["parse(input)".into()],
        };

        assert_eq!(
            render_merged(&merged),
            "Módulo de parsing\n\nparse (function)\n\nparse(input)"
        );
    }

    #[test]
    fn test_render_merged_skips_empty_sections() {
        let merged = MergedFileReference {
            description: String::new(),
            references: vec![Reference::new("f", "function")],
            examples: vec![],
        };

        assert_eq!(render_merged(&merged), "f (function)");
    }
}
