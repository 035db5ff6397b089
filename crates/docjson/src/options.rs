use serde::{Deserialize, Serialize};

use crate::model::ClasslikeKind;

/// How text from several build variants of one node is combined.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VariantMerge {
    /// Concatenate every variant's text with no separator.
    #[default]
    Concatenate,
    /// Keep the first variant that yields non-empty text.
    First,
    /// Join non-empty variant texts with `separator`.
    Join { separator: String },
}

impl VariantMerge {
    /// Combines per-variant texts, in variant order.
    pub fn merge<I>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        match self {
            Self::Concatenate => parts.into_iter().collect(),
            Self::First => parts
                .into_iter()
                .find(|part| !part.is_empty())
                .unwrap_or_default(),
            Self::Join { separator } => parts
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(separator),
        }
    }
}

/// Keying of members that share a name (overloads).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadPolicy {
    /// Later members overwrite earlier ones.
    #[default]
    LastWins,
    /// The n-th member sharing a name (n >= 2) is keyed `name#n`.
    Ordinal,
}

/// Options controlling a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Multi-variant text policy.
    pub variant_merge: VariantMerge,

    /// Member-name collision policy.
    pub overloads: OverloadPolicy,

    /// Name nested declarations by their enclosing chain (`Outer.Inner`).
    pub qualify_nested_names: bool,

    /// Extra shapes whose nested declarations are discovered, on top of
    /// those reporting [`ClasslikeKind::has_nested_members`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested_kinds: Vec<ClasslikeKind>,

    /// Upper bound on in-flight emit tasks. Defaults to `min(cpus, 8)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<usize>,

    /// Indented JSON when true, compact otherwise.
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variant_merge: VariantMerge::default(),
            overloads: OverloadPolicy::default(),
            qualify_nested_names: false,
            nested_kinds: Vec::new(),
            max_parallel: None,
            pretty: true,
        }
    }
}

impl RenderOptions {
    /// Whether the walker descends into declarations of `kind`.
    pub fn descends_into(&self, kind: ClasslikeKind) -> bool {
        kind.has_nested_members() || self.nested_kinds.contains(&kind)
    }

    /// Effective concurrency bound.
    pub fn parallelism(&self) -> usize {
        self.max_parallel
            .unwrap_or_else(|| num_cpus::get().min(8))
            .max(1)
    }
}
