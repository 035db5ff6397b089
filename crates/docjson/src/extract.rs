//! Plain-text extraction from documentation nodes.
//!
//! Every function here is total: absent blocks produce an empty string or an
//! empty map, never an error.

use indexmap::IndexMap;

use crate::model::{DocTag, Documentation, TagWrapper};
use crate::options::VariantMerge;

/// Tag-map key under which `@param` blocks are stored.
pub const PARAMETERS_TAG: &str = "parameters";

/// Flattens a markup tree to its literal text, depth-first and in document
/// order. Text nodes contribute their body followed by their children; any
/// other node contributes only its children.
pub fn flatten(node: &DocTag) -> String {
    let mut buffer = String::new();
    flatten_into(node, &mut buffer);
    buffer
}

fn flatten_into(node: &DocTag, buffer: &mut String) {
    if let DocTag::Text { body, .. } = node {
        buffer.push_str(body);
    }
    for child in node.children() {
        flatten_into(child, buffer);
    }
}

/// Text extractor bound to a variant merge policy.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    merge: VariantMerge,
}

impl TextExtractor {
    pub fn new(merge: VariantMerge) -> Self {
        Self { merge }
    }

    /// Description text across all variants.
    pub fn extract_comment(&self, documentation: &Documentation) -> String {
        self.merge_variants(documentation, |block| match block {
            TagWrapper::Description { root } => Some(root),
            _ => None,
        })
    }

    /// Text documenting the parameter called `name`.
    ///
    /// Only `@param` blocks naming this parameter, or carrying no name at
    /// all, are considered.
    pub fn extract_param_comment(&self, name: &str, documentation: &Documentation) -> String {
        self.merge_variants(documentation, |block| match block {
            TagWrapper::Param {
                name: Some(tagged),
                root,
            } if tagged == name => Some(root),
            TagWrapper::Param { name: None, root } => Some(root),
            _ => None,
        })
    }

    /// Tag blocks keyed by tag name. Later blocks overwrite earlier ones
    /// sharing a key.
    pub fn extract_tags(&self, documentation: &Documentation) -> IndexMap<String, String> {
        let mut tags = IndexMap::new();
        for node in documentation.variants() {
            for block in &node.children {
                match block {
                    TagWrapper::Param { root, .. } => {
                        tags.insert(PARAMETERS_TAG.to_string(), flatten(root));
                    }
                    TagWrapper::See { name, root } | TagWrapper::CustomTag { name, root } => {
                        tags.insert(name.clone(), flatten(root));
                    }
                    TagWrapper::Description { .. } | TagWrapper::Unhandled => {}
                }
            }
        }
        tags
    }

    fn merge_variants<'a, F>(&self, documentation: &'a Documentation, select: F) -> String
    where
        F: Fn(&'a TagWrapper) -> Option<&'a DocTag>,
    {
        let parts = documentation.variants().map(|node| {
            node.children
                .iter()
                .filter_map(&select)
                .map(flatten)
                .collect::<String>()
        });
        self.merge.merge(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentationNode;

    fn doc(children: Vec<TagWrapper>) -> Documentation {
        Documentation::single("jvm", DocumentationNode::new(children))
    }

    #[test]
    fn flatten_drops_markup_and_keeps_order() {
        let tree = DocTag::element(
            "p",
            vec![
                DocTag::text("Documentation for "),
                DocTag::element("i", vec![DocTag::text("text")]),
                DocTag::text(" property"),
            ],
        );
        assert_eq!(flatten(&tree), "Documentation for text property");
    }

    #[test]
    fn flatten_recurses_into_text_children() {
        let tree = DocTag::Text {
            body: "outer ".to_string(),
            children: vec![DocTag::text("inner")],
        };
        assert_eq!(flatten(&tree), "outer inner");
    }

    #[test]
    fn flatten_ignores_unhandled_nodes() {
        let tree = DocTag::element("p", vec![DocTag::text("a"), DocTag::Unhandled, DocTag::text("b")]);
        assert_eq!(flatten(&tree), "ab");
    }

    #[test]
    fn text_block_root_contributes_its_body() {
        let documentation = doc(vec![TagWrapper::Description {
            root: DocTag::Text {
                body: "root ".to_string(),
                children: vec![DocTag::text("child")],
            },
        }]);
        assert_eq!(TextExtractor::default().extract_comment(&documentation), "root child");
    }

    #[test]
    fn comment_is_empty_without_description() {
        let extractor = TextExtractor::default();
        assert_eq!(extractor.extract_comment(&Documentation::none()), "");
        assert_eq!(
            extractor.extract_comment(&doc(vec![TagWrapper::see("Foo", vec![DocTag::text("x")])])),
            ""
        );
    }

    #[test]
    fn comment_concatenates_variants_by_default() {
        let documentation = Documentation::single(
            "jvm",
            DocumentationNode::new(vec![TagWrapper::description(vec![DocTag::text("On JVM.")])]),
        )
        .with_variant(
            "js",
            DocumentationNode::new(vec![TagWrapper::description(vec![DocTag::text("On JS.")])]),
        );

        assert_eq!(
            TextExtractor::default().extract_comment(&documentation),
            "On JVM.On JS."
        );
        assert_eq!(
            TextExtractor::new(VariantMerge::First).extract_comment(&documentation),
            "On JVM."
        );
    }

    #[test]
    fn tags_use_see_target_and_custom_names() {
        let documentation = doc(vec![
            TagWrapper::description(vec![DocTag::text("ignored")]),
            TagWrapper::see("Foo", vec![DocTag::text("see text")]),
            TagWrapper::custom("title", vec![DocTag::element("b", vec![DocTag::text("Custom")])]),
            TagWrapper::Unhandled,
        ]);

        let tags = TextExtractor::default().extract_tags(&documentation);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["Foo"], "see text");
        assert_eq!(tags["title"], "Custom");
    }

    #[test]
    fn tags_keep_last_param_block() {
        let documentation = doc(vec![
            TagWrapper::param("a", vec![DocTag::text("first")]),
            TagWrapper::param("b", vec![DocTag::text("second")]),
        ]);

        let tags = TextExtractor::default().extract_tags(&documentation);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[PARAMETERS_TAG], "second");
    }

    #[test]
    fn param_comment_matches_by_name() {
        let documentation = doc(vec![
            TagWrapper::param("a", vec![DocTag::text("for a")]),
            TagWrapper::param("b", vec![DocTag::text("for b")]),
        ]);
        let extractor = TextExtractor::default();

        assert_eq!(extractor.extract_param_comment("b", &documentation), "for b");
        assert_eq!(extractor.extract_param_comment("c", &documentation), "");
    }

    #[test]
    fn param_comment_accepts_unnamed_block() {
        let documentation = doc(vec![TagWrapper::Param {
            name: None,
            root: DocTag::element("root", vec![DocTag::text("the other point")]),
        }]);

        assert_eq!(
            TextExtractor::default().extract_param_comment("other", &documentation),
            "the other point"
        );
    }
}
