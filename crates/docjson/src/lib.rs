#![deny(clippy::all)]

//! Per-declaration JSON records from a parsed documentation tree.
//!
//! This crate provides:
//! - A model of the consumed parts of a host documentation tree (modules,
//!   packages, class-like declarations, members and their doc blocks).
//! - A text extractor that flattens doc blocks to plain text and tag maps.
//! - A walker that discovers class-like declarations, nested ones included.
//! - A record builder and a concurrent render pass that writes one JSON
//!   document per declaration through an [`OutputWriter`].

pub mod emitter;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod record;
pub mod render;
pub mod walker;
pub mod writer;

pub use emitter::{output_path, serialize_record, RecordBuilder, JSON_EXTENSION};
pub use error::{DocsError, Result};
pub use extract::{flatten, TextExtractor, PARAMETERS_TAG};
pub use model::{
    Classlike, ClasslikeKind, DocTag, Documentation, DocumentationNode, DocumentationTree,
    Function, Module, Package, Parameter, Property, TagWrapper,
};
pub use options::{OverloadPolicy, RenderOptions, VariantMerge};
pub use record::{DeclarationRecord, FunctionRecord, PropertyRecord};
pub use render::{find_collisions, JsonRenderer, RenderFailure, RenderReport};
pub use walker::{collect_declarations, walk_module, DeclarationSite, DeclarationVisitor};
pub use writer::{FileSystemWriter, MemoryWriter, OutputWriter};
