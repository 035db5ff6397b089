//! Consumed shape of the host's documentation tree.
//!
//! The host owns the real node hierarchy and may grow it at any time. Only
//! the parts read by the extractor are modelled here, and every open set of
//! node kinds carries an `Unhandled` arm so unknown kinds deserialize and are
//! then ignored.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of a render pass: every module handed over by the host.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DocumentationTree {
    /// Modules in host order.
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl DocumentationTree {
    /// Decodes a tree previously exported by the host as JSON.
    pub fn from_json(source: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Adds a module to the tree.
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }
}

/// A compilation module.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: Vec::new(),
        }
    }
}

/// A package and the class-like declarations it directly contains.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Dotted fully-qualified name. Empty for the root package.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub classlikes: Vec<Arc<Classlike>>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classlikes: Vec::new(),
        }
    }

    /// Appends a top-level declaration.
    pub fn with_classlike(mut self, classlike: Classlike) -> Self {
        self.classlikes.push(Arc::new(classlike));
        self
    }
}

/// Shape of a class-like declaration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClasslikeKind {
    #[default]
    Class,
    Interface,
    Object,
    Enum,
    Annotation,
    /// Any shape this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl ClasslikeKind {
    /// Whether nested declarations of this shape are discovered by default.
    pub fn has_nested_members(self) -> bool {
        matches!(self, Self::Class)
    }
}

/// A class-like declaration with its members.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Classlike {
    pub name: String,
    #[serde(default)]
    pub kind: ClasslikeKind,
    #[serde(default)]
    pub documentation: Documentation,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Declarations nested directly inside this one.
    #[serde(default)]
    pub classlikes: Vec<Arc<Classlike>>,
}

impl Classlike {
    pub fn new(name: impl Into<String>, kind: ClasslikeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = documentation;
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_nested(mut self, nested: Classlike) -> Self {
        self.classlikes.push(Arc::new(nested));
        self
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub documentation: Documentation,
}

impl Property {
    pub fn new(name: impl Into<String>, documentation: Documentation) -> Self {
        Self {
            name: name.into(),
            documentation,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub documentation: Documentation,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Function {
    pub fn new(name: impl Into<String>, documentation: Documentation) -> Self {
        Self {
            name: name.into(),
            documentation,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A function parameter. Receivers and synthetic parameters may be unnamed.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub documentation: Documentation,
}

impl Parameter {
    pub fn new(name: impl Into<String>, documentation: Documentation) -> Self {
        Self {
            name: Some(name.into()),
            documentation,
        }
    }
}

/// Documentation of one declaration, keyed by build variant (source set).
///
/// Variant order is the host's order and is preserved.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Documentation(pub IndexMap<String, DocumentationNode>);

impl Documentation {
    /// Documentation with no variants at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Documentation present in exactly one variant.
    pub fn single(variant: impl Into<String>, node: DocumentationNode) -> Self {
        let mut variants = IndexMap::new();
        variants.insert(variant.into(), node);
        Self(variants)
    }

    pub fn with_variant(mut self, variant: impl Into<String>, node: DocumentationNode) -> Self {
        self.0.insert(variant.into(), node);
        self
    }

    pub fn variants(&self) -> impl Iterator<Item = &DocumentationNode> {
        self.0.values()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Root documentation node of one variant: its top-level blocks.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationNode {
    #[serde(default)]
    pub children: Vec<TagWrapper>,
}

impl DocumentationNode {
    pub fn new(children: Vec<TagWrapper>) -> Self {
        Self { children }
    }
}

/// A top-level documentation block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagWrapper {
    /// Free-text description.
    Description { root: DocTag },
    /// `@param` block. Unnamed when attached directly to a parameter.
    Param {
        #[serde(default)]
        name: Option<String>,
        root: DocTag,
    },
    /// `@see` block; `name` is the referenced symbol.
    See { name: String, root: DocTag },
    /// Any tag the host does not model natively, e.g. `@title`.
    CustomTag { name: String, root: DocTag },
    /// Blocks this crate does not read (`@return`, `@throws`, ...).
    #[serde(other)]
    Unhandled,
}

impl TagWrapper {
    pub fn description(children: Vec<DocTag>) -> Self {
        Self::Description {
            root: DocTag::element("root", children),
        }
    }

    pub fn param(name: impl Into<String>, children: Vec<DocTag>) -> Self {
        Self::Param {
            name: Some(name.into()),
            root: DocTag::element("root", children),
        }
    }

    pub fn see(name: impl Into<String>, children: Vec<DocTag>) -> Self {
        Self::See {
            name: name.into(),
            root: DocTag::element("root", children),
        }
    }

    pub fn custom(name: impl Into<String>, children: Vec<DocTag>) -> Self {
        Self::CustomTag {
            name: name.into(),
            root: DocTag::element("root", children),
        }
    }
}

/// A node of the text/markup tree inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocTag {
    /// Literal text.
    Text {
        body: String,
        #[serde(default)]
        children: Vec<DocTag>,
    },
    /// Markup (paragraph, emphasis, link, code span, list...). Its name
    /// carries no text.
    Element {
        #[serde(default)]
        name: String,
        #[serde(default)]
        children: Vec<DocTag>,
    },
    #[serde(other)]
    Unhandled,
}

impl DocTag {
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text {
            body: body.into(),
            children: Vec::new(),
        }
    }

    pub fn element(name: impl Into<String>, children: Vec<DocTag>) -> Self {
        Self::Element {
            name: name.into(),
            children,
        }
    }

    pub fn children(&self) -> &[DocTag] {
        match self {
            Self::Text { children, .. } | Self::Element { children, .. } => children,
            Self::Unhandled => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_deserialize_to_unhandled() {
        let json = r#"{
            "name": "Widget",
            "kind": "typealias",
            "documentation": {
                "jvm": {
                    "children": [
                        { "kind": "return", "root": { "kind": "text", "body": "x" } },
                        { "kind": "description", "root": { "kind": "br" } }
                    ]
                }
            }
        }"#;

        let classlike: Classlike = serde_json::from_str(json).expect("valid classlike");
        assert_eq!(classlike.kind, ClasslikeKind::Unknown);

        let node = classlike.documentation.variants().next().expect("one variant");
        assert_eq!(node.children[0], TagWrapper::Unhandled);
        assert_eq!(
            node.children[1],
            TagWrapper::Description {
                root: DocTag::Unhandled
            }
        );
    }

    #[test]
    fn variant_order_is_preserved() {
        let documentation = Documentation::single("jvm", DocumentationNode::default())
            .with_variant("js", DocumentationNode::default())
            .with_variant("native", DocumentationNode::default());

        let json = serde_json::to_string(&documentation).expect("serializable");
        let decoded: Documentation = serde_json::from_str(&json).expect("decodable");
        let keys: Vec<_> = decoded.0.keys().cloned().collect();
        assert_eq!(keys, ["jvm", "js", "native"]);
    }

    #[test]
    fn only_classes_have_nested_members() {
        assert!(ClasslikeKind::Class.has_nested_members());
        assert!(!ClasslikeKind::Interface.has_nested_members());
        assert!(!ClasslikeKind::Object.has_nested_members());
        assert!(!ClasslikeKind::Unknown.has_nested_members());
    }
}
