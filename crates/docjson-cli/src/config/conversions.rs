use docjson::{OverloadPolicy, VariantMerge};

use crate::cli::{OverloadMode, VariantMergeMode};
use crate::config::DEFAULT_JOIN_SEPARATOR;

impl From<OverloadMode> for OverloadPolicy {
    fn from(mode: OverloadMode) -> Self {
        match mode {
            OverloadMode::LastWins => OverloadPolicy::LastWins,
            OverloadMode::Ordinal => OverloadPolicy::Ordinal,
        }
    }
}

/// Builds a merge policy from `--variant-merge` and `--separator`.
pub(crate) fn variant_merge(mode: VariantMergeMode, separator: Option<&str>) -> VariantMerge {
    match mode {
        VariantMergeMode::Concatenate => VariantMerge::Concatenate,
        VariantMergeMode::First => VariantMerge::First,
        VariantMergeMode::Join => VariantMerge::Join {
            separator: separator.unwrap_or(DEFAULT_JOIN_SEPARATOR).to_string(),
        },
    }
}
