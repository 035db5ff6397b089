//! Record assembly, output paths and serialization.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::{DocsError, Result};
use crate::extract::TextExtractor;
use crate::model::{Classlike, Function, Property};
use crate::options::{OverloadPolicy, RenderOptions};
use crate::record::{DeclarationRecord, FunctionRecord, PropertyRecord};
use crate::walker::DeclarationSite;

/// Extension handed to the output writer.
pub const JSON_EXTENSION: &str = ".json";

/// Builds [`DeclarationRecord`]s from declarations.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    extractor: TextExtractor,
    overloads: OverloadPolicy,
}

impl RecordBuilder {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            extractor: TextExtractor::new(options.variant_merge.clone()),
            overloads: options.overloads,
        }
    }

    /// Assembles the record of `classlike`. Nested declarations are not
    /// included; they get records of their own.
    pub fn build(&self, classlike: &Classlike) -> DeclarationRecord {
        DeclarationRecord {
            comment: self.extractor.extract_comment(&classlike.documentation),
            fields: self.keyed(&classlike.properties, |property| {
                (property.name.clone(), self.property_record(property))
            }),
            methods: self.keyed(&classlike.functions, |function| {
                (function.name.clone(), self.function_record(function))
            }),
        }
    }

    fn property_record(&self, property: &Property) -> PropertyRecord {
        PropertyRecord {
            comment: self.extractor.extract_comment(&property.documentation),
            tags: IndexMap::new(),
        }
    }

    fn function_record(&self, function: &Function) -> FunctionRecord {
        let parameters = function
            .parameters
            .iter()
            .filter_map(|parameter| {
                let name = parameter.name.as_ref()?;
                let text = self
                    .extractor
                    .extract_param_comment(name, &parameter.documentation);
                Some((name.clone(), text))
            })
            .collect();

        FunctionRecord {
            comment: self.extractor.extract_comment(&function.documentation),
            parameters,
            tags: self.extractor.extract_tags(&function.documentation),
        }
    }

    fn keyed<T, R, F>(&self, members: &[T], mut entry: F) -> IndexMap<String, R>
    where
        F: FnMut(&T) -> (String, R),
    {
        let mut map = IndexMap::with_capacity(members.len());
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();

        for member in members {
            let (name, record) = entry(member);
            let key = match self.overloads {
                OverloadPolicy::LastWins => name,
                OverloadPolicy::Ordinal => {
                    let count = seen.entry(name.clone()).or_insert(0);
                    *count += 1;
                    if *count == 1 {
                        name
                    } else {
                        format!("{name}#{count}")
                    }
                }
            };
            map.insert(key, record);
        }

        map
    }
}

/// Logical output path (without extension) of a declaration:
/// `<package with '/' separators>/<name>`.
pub fn output_path(site: &DeclarationSite, options: &RenderOptions) -> String {
    let name = if options.qualify_nested_names {
        site.qualified_name()
    } else {
        site.declaration.name.clone()
    };

    if site.package.is_empty() {
        name
    } else {
        format!("{}/{}", site.package.replace('.', "/"), name)
    }
}

/// Serializes a record, indented or compact.
pub fn serialize_record(path: &str, record: &DeclarationRecord, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };

    result.map_err(|error| DocsError::Serialize {
        path: path.to_string(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{
        ClasslikeKind, DocTag, Documentation, DocumentationNode, Parameter, TagWrapper,
    };

    fn described(text: &str) -> Documentation {
        Documentation::single(
            "jvm",
            DocumentationNode::new(vec![TagWrapper::description(vec![DocTag::text(text)])]),
        )
    }

    fn site(package: &str, enclosing: &[&str], name: &str) -> DeclarationSite {
        DeclarationSite {
            package: package.to_string(),
            enclosing: enclosing.iter().map(|part| part.to_string()).collect(),
            declaration: Arc::new(Classlike::new(name, ClasslikeKind::Class)),
        }
    }

    #[test]
    fn undocumented_declaration_yields_empty_record() {
        let classlike = Classlike::new("Bare", ClasslikeKind::Class)
            .with_property(Property::new("x", Documentation::none()))
            .with_function(
                Function::new("run", Documentation::none())
                    .with_parameter(Parameter::new("arg", Documentation::none())),
            );

        let record = RecordBuilder::default().build(&classlike);
        assert_eq!(record.comment, "");
        assert_eq!(record.fields["x"], PropertyRecord::default());
        assert_eq!(record.methods["run"].comment, "");
        assert_eq!(record.methods["run"].parameters["arg"], "");
        assert!(record.methods["run"].tags.is_empty());
    }

    #[test]
    fn overloads_overwrite_by_default() {
        let classlike = Classlike::new("Calc", ClasslikeKind::Class)
            .with_function(Function::new("add", described("ints")))
            .with_function(Function::new("add", described("floats")));

        let record = RecordBuilder::default().build(&classlike);
        assert_eq!(record.methods.len(), 1);
        assert_eq!(record.methods["add"].comment, "floats");
    }

    #[test]
    fn ordinal_policy_keeps_every_overload() {
        let options = RenderOptions {
            overloads: OverloadPolicy::Ordinal,
            ..RenderOptions::default()
        };
        let classlike = Classlike::new("Calc", ClasslikeKind::Class)
            .with_function(Function::new("add", described("ints")))
            .with_function(Function::new("sub", described("minus")))
            .with_function(Function::new("add", described("floats")));

        let record = RecordBuilder::new(&options).build(&classlike);
        let keys: Vec<_> = record.methods.keys().cloned().collect();
        assert_eq!(keys, ["add", "sub", "add#2"]);
        assert_eq!(record.methods["add#2"].comment, "floats");
    }

    #[test]
    fn unnamed_parameters_are_skipped() {
        let classlike = Classlike::new("Ext", ClasslikeKind::Class).with_function(
            Function::new("apply", Documentation::none())
                .with_parameter(Parameter::default())
                .with_parameter(Parameter::new("value", Documentation::none())),
        );

        let record = RecordBuilder::default().build(&classlike);
        let keys: Vec<_> = record.methods["apply"].parameters.keys().cloned().collect();
        assert_eq!(keys, ["value"]);
    }

    #[test]
    fn output_path_replaces_package_separators() {
        let options = RenderOptions::default();
        assert_eq!(output_path(&site("com.example.geo", &[], "Point"), &options), "com/example/geo/Point");
        assert_eq!(output_path(&site("", &[], "Root"), &options), "Root");
        assert_eq!(output_path(&site("geo", &["Outer"], "Inner"), &options), "geo/Inner");
    }

    #[test]
    fn qualified_output_path_includes_enclosing_chain() {
        let options = RenderOptions {
            qualify_nested_names: true,
            ..RenderOptions::default()
        };
        assert_eq!(
            output_path(&site("geo", &["Outer", "Middle"], "Inner"), &options),
            "geo/Outer.Middle.Inner"
        );
    }

    #[test]
    fn compact_serialization_has_no_whitespace() {
        let record = DeclarationRecord::default();
        let json = serialize_record("x", &record, false).expect("serializable");
        assert_eq!(json, r#"{"comment":"","fields":{},"methods":{}}"#);
    }
}
