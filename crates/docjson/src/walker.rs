//! Discovery of class-like declarations, nested ones included.

use std::sync::Arc;

use crate::model::{Classlike, Module, Package};
use crate::options::RenderOptions;

/// A discovered declaration together with where it was found.
#[derive(Debug, Clone)]
pub struct DeclarationSite {
    /// Dotted name of the package the declaration lives in.
    pub package: String,
    /// Names of the enclosing declarations, outermost first.
    pub enclosing: Vec<String>,
    pub declaration: Arc<Classlike>,
}

impl DeclarationSite {
    /// Enclosing chain plus the declaration's own name, joined with `.`.
    pub fn qualified_name(&self) -> String {
        let mut parts = self.enclosing.clone();
        parts.push(self.declaration.name.clone());
        parts.join(".")
    }
}

/// Receives every declaration found by [`walk_module`].
pub trait DeclarationVisitor {
    fn visit(&mut self, site: DeclarationSite);
}

impl<F> DeclarationVisitor for F
where
    F: FnMut(DeclarationSite),
{
    fn visit(&mut self, site: DeclarationSite) {
        self(site)
    }
}

/// Visits each class-like declaration of `module` exactly once.
///
/// Packages are taken in order. All top-level declarations of a package are
/// visited first, then the nested pass runs: for each container, its direct
/// nested declarations are visited before any of them is descended into.
/// Nested declarations are only discovered below shapes for which
/// [`RenderOptions::descends_into`] holds.
pub fn walk_module<V>(module: &Module, options: &RenderOptions, visitor: &mut V)
where
    V: DeclarationVisitor + ?Sized,
{
    for package in &module.packages {
        walk_package(package, options, visitor);
    }
}

fn walk_package<V>(package: &Package, options: &RenderOptions, visitor: &mut V)
where
    V: DeclarationVisitor + ?Sized,
{
    let mut enclosing = Vec::new();
    for classlike in &package.classlikes {
        visit(&package.name, classlike, &enclosing, visitor);
    }
    walk_nested(&package.name, &package.classlikes, &mut enclosing, options, visitor);
}

fn walk_nested<V>(
    package: &str,
    containers: &[Arc<Classlike>],
    enclosing: &mut Vec<String>,
    options: &RenderOptions,
    visitor: &mut V,
) where
    V: DeclarationVisitor + ?Sized,
{
    for container in containers {
        if !options.descends_into(container.kind) {
            continue;
        }

        enclosing.push(container.name.clone());
        for nested in &container.classlikes {
            visit(package, nested, enclosing, visitor);
        }
        walk_nested(package, &container.classlikes, enclosing, options, visitor);
        enclosing.pop();
    }
}

fn visit<V>(package: &str, classlike: &Arc<Classlike>, enclosing: &[String], visitor: &mut V)
where
    V: DeclarationVisitor + ?Sized,
{
    visitor.visit(DeclarationSite {
        package: package.to_string(),
        enclosing: enclosing.to_vec(),
        declaration: Arc::clone(classlike),
    });
}

/// Collects every declaration of `module` in visiting order.
pub fn collect_declarations(module: &Module, options: &RenderOptions) -> Vec<DeclarationSite> {
    let mut sites: Vec<DeclarationSite> = Vec::new();
    walk_module(module, options, &mut |site: DeclarationSite| sites.push(site));
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClasslikeKind;

    fn names(sites: &[DeclarationSite]) -> Vec<String> {
        sites.iter().map(DeclarationSite::qualified_name).collect()
    }

    #[test]
    fn visits_top_level_declarations_before_nested_ones() {
        let mut module = Module::new("main");
        module.packages.push(
            Package::new("geo")
                .with_classlike(
                    Classlike::new("Outer", ClasslikeKind::Class).with_nested(
                        Classlike::new("Middle", ClasslikeKind::Class)
                            .with_nested(Classlike::new("Inner", ClasslikeKind::Enum)),
                    ),
                )
                .with_classlike(Classlike::new("Sibling", ClasslikeKind::Object)),
        );
        module
            .packages
            .push(Package::new("geo.util").with_classlike(Classlike::new("Helper", ClasslikeKind::Class)));

        let sites = collect_declarations(&module, &RenderOptions::default());
        assert_eq!(
            names(&sites),
            ["Outer", "Sibling", "Outer.Middle", "Outer.Middle.Inner", "Helper"]
        );
        assert_eq!(sites[4].package, "geo.util");
    }

    #[test]
    fn does_not_descend_into_non_class_shapes() {
        let mut module = Module::new("main");
        module.packages.push(
            Package::new("p").with_classlike(
                Classlike::new("Api", ClasslikeKind::Interface)
                    .with_nested(Classlike::new("Hidden", ClasslikeKind::Class)),
            ),
        );

        let sites = collect_declarations(&module, &RenderOptions::default());
        assert_eq!(names(&sites), ["Api"]);

        let options = RenderOptions {
            nested_kinds: vec![ClasslikeKind::Interface],
            ..RenderOptions::default()
        };
        let sites = collect_declarations(&module, &options);
        assert_eq!(names(&sites), ["Api", "Api.Hidden"]);
    }

    #[test]
    fn nested_non_class_is_visited_but_not_entered() {
        let mut module = Module::new("main");
        module.packages.push(
            Package::new("p").with_classlike(
                Classlike::new("Outer", ClasslikeKind::Class).with_nested(
                    Classlike::new("Companion", ClasslikeKind::Object)
                        .with_nested(Classlike::new("Deep", ClasslikeKind::Class)),
                ),
            ),
        );

        let sites = collect_declarations(&module, &RenderOptions::default());
        assert_eq!(names(&sites), ["Outer", "Outer.Companion"]);
    }

    #[test]
    fn nested_siblings_are_visited_before_their_children() {
        let mut module = Module::new("main");
        module.packages.push(
            Package::new("p").with_classlike(
                Classlike::new("Root", ClasslikeKind::Class)
                    .with_nested(
                        Classlike::new("A", ClasslikeKind::Class)
                            .with_nested(Classlike::new("Deep", ClasslikeKind::Class)),
                    )
                    .with_nested(Classlike::new("B", ClasslikeKind::Class)),
            ),
        );

        let sites = collect_declarations(&module, &RenderOptions::default());
        assert_eq!(names(&sites), ["Root", "Root.A", "Root.B", "Root.A.Deep"]);
    }

    #[test]
    fn empty_module_visits_nothing() {
        let sites = collect_declarations(&Module::new("empty"), &RenderOptions::default());
        assert!(sites.is_empty());
    }
}
