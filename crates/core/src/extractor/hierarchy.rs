//! Inheritance-aware views over annotated classes and documentation
//! resolution onto their annotation data.

use crate::types::{
    AnnotatedClass, AnnotatedClasses, ClassDoc, ClassDocMap, ComponentSpec, DocText, ExecuteSpec,
    ParameterSpec, PropertyDoc, DEPRECATED_TAG, SINCE_TAG,
};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// A field annotation seen from a class, together with the class declaring it
#[derive(Debug, Clone, Copy)]
pub struct Inherited<'a, T> {
    pub owner: &'a str,
    pub spec: &'a T,
}

/// The class followed by its annotated ancestors, nearest first.
///
/// Stops at the first ancestor missing from `classes` or at a cycle.
pub fn ancestry<'a>(classes: &'a AnnotatedClasses, class_name: &str) -> Vec<&'a AnnotatedClass> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = classes.get(class_name);

    while let Some(class) = current {
        if !visited.insert(class.class_name.as_str()) {
            debug!("Annotation hierarchy of {} loops at {}", class_name, class.class_name);
            break;
        }
        chain.push(class);
        current = class.parent().and_then(|parent| classes.get(parent));
    }

    chain
}

fn gather<'a, T>(
    classes: &'a AnnotatedClasses,
    class_name: &str,
    fields: impl Fn(&'a AnnotatedClass) -> &'a BTreeMap<String, T>,
) -> BTreeMap<&'a str, Inherited<'a, T>> {
    let mut gathered = BTreeMap::new();

    // farthest ancestor first so nearer declarations shadow it
    for class in ancestry(classes, class_name).into_iter().rev() {
        for (field_name, spec) in fields(class) {
            gathered.insert(
                field_name.as_str(),
                Inherited {
                    owner: class.class_name.as_str(),
                    spec,
                },
            );
        }
    }

    gathered
}

/// Effective parameters of a class keyed by field name
pub fn gather_parameters<'a>(
    classes: &'a AnnotatedClasses,
    class_name: &str,
) -> BTreeMap<&'a str, Inherited<'a, ParameterSpec>> {
    gather(classes, class_name, |class| &class.parameters)
}

/// Effective components of a class keyed by field name
pub fn gather_components<'a>(
    classes: &'a AnnotatedClasses,
    class_name: &str,
) -> BTreeMap<&'a str, Inherited<'a, ComponentSpec>> {
    gather(classes, class_name, |class| &class.components)
}

/// Nearest execute annotation in the class or its ancestors
pub fn find_execute<'a>(classes: &'a AnnotatedClasses, class_name: &str) -> Option<&'a ExecuteSpec> {
    ancestry(classes, class_name)
        .into_iter()
        .find_map(|class| class.execute.as_ref())
}

/// Field documentation visible from `class_doc`, merged over the class
/// hierarchy with the nearest declaration winning.
///
/// Parent names come from the annotation data first and from the
/// documentation super link once the annotation chain ends. At each level
/// the linked super documentation is used when it documents fields;
/// otherwise the level is looked up by name in `class_docs`.
pub fn merged_property_docs<'a>(
    classes: &'a AnnotatedClasses,
    class_docs: &'a ClassDocMap,
    class_doc: &'a ClassDoc,
) -> BTreeMap<&'a str, &'a PropertyDoc> {
    let mut levels: Vec<&'a ClassDoc> = Vec::new();
    let mut visited = HashSet::new();
    let mut name: &'a str = class_doc.fully_qualified_name.as_str();
    let mut doc = Some(class_doc);

    loop {
        if !visited.insert(name) {
            break;
        }
        if let Some(doc) = doc {
            levels.push(doc);
        }

        let linked = doc
            .and_then(ClassDoc::super_class_doc)
            .map(|super_doc| &**super_doc);
        let next_name = classes
            .get(name)
            .and_then(AnnotatedClass::parent)
            .or_else(|| linked.map(|super_doc| super_doc.fully_qualified_name.as_str()));
        let Some(next_name) = next_name else {
            break;
        };

        let linked = linked.filter(|super_doc| super_doc.fully_qualified_name == next_name);
        doc = match linked {
            Some(super_doc) if !super_doc.properties.is_empty() => Some(super_doc),
            _ => class_docs.get(next_name).map(|found| &**found).or(linked),
        };
        name = next_name;
    }

    let mut merged = BTreeMap::new();
    for level in levels.into_iter().rev() {
        for property in &level.properties {
            merged.insert(property.name.as_str(), property);
        }
    }
    merged
}

enum DocUpdate {
    Mojo {
        class_name: String,
        docs: DocText,
    },
    Parameter {
        owner: String,
        field_name: String,
        docs: DocText,
    },
    Component {
        owner: String,
        field_name: String,
        docs: DocText,
    },
}

fn property_doc_text(property: &PropertyDoc) -> DocText {
    DocText {
        description: property.comment.clone(),
        since: property.tag(SINCE_TAG).map(str::to_string),
        deprecated: property.tag(DEPRECATED_TAG).map(str::to_string),
    }
}

/// Write `update` over `target`; tags absent from the documentation keep
/// their previous value
fn apply_doc_text(target: &mut DocText, update: DocText) {
    target.description = update.description;
    if update.since.is_some() {
        target.since = update.since;
    }
    if update.deprecated.is_some() {
        target.deprecated = update.deprecated;
    }
}

fn plan_updates(classes: &AnnotatedClasses, class_docs: &ClassDocMap) -> Vec<DocUpdate> {
    let mut updates = Vec::new();

    for (class_name, class) in classes {
        if class.mojo.is_none() {
            continue;
        }

        let Some(class_doc) = class_docs.get(class_name) else {
            debug!("No documentation found for goal class {}", class_name);
            continue;
        };

        updates.push(DocUpdate::Mojo {
            class_name: class_name.clone(),
            docs: DocText {
                description: class_doc.comment.clone(),
                since: class_doc.find_in_class_hierarchy(SINCE_TAG).map(str::to_string),
                deprecated: class_doc
                    .find_in_class_hierarchy(DEPRECATED_TAG)
                    .map(str::to_string),
            },
        });

        let property_docs = merged_property_docs(classes, class_docs, class_doc);

        for (field_name, parameter) in gather_parameters(classes, class_name) {
            if let Some(property) = property_docs.get(field_name) {
                trace!("Documenting parameter {} of {}", field_name, parameter.owner);
                updates.push(DocUpdate::Parameter {
                    owner: parameter.owner.to_string(),
                    field_name: field_name.to_string(),
                    docs: property_doc_text(property),
                });
            }
        }

        for (field_name, component) in gather_components(classes, class_name) {
            if let Some(property) = property_docs.get(field_name) {
                trace!("Documenting component {} of {}", field_name, component.owner);
                updates.push(DocUpdate::Component {
                    owner: component.owner.to_string(),
                    field_name: field_name.to_string(),
                    docs: property_doc_text(property),
                });
            }
        }
    }

    updates
}

/// Copy documentation onto the goal, parameter and component annotations of
/// every goal class.
///
/// Updates land on the class declaring each annotation, so documentation
/// for an inherited field is written onto the ancestor's record. Running it
/// twice gives the same result.
pub fn resolve(classes: &mut AnnotatedClasses, class_docs: &ClassDocMap) {
    let updates = plan_updates(classes, class_docs);
    debug!("Applying {} documentation updates", updates.len());

    for update in updates {
        match update {
            DocUpdate::Mojo { class_name, docs } => {
                if let Some(mojo) = classes.get_mut(&class_name).and_then(|c| c.mojo.as_mut()) {
                    apply_doc_text(&mut mojo.docs, docs);
                }
            }
            DocUpdate::Parameter {
                owner,
                field_name,
                docs,
            } => {
                if let Some(parameter) = classes
                    .get_mut(&owner)
                    .and_then(|c| c.parameters.get_mut(&field_name))
                {
                    apply_doc_text(&mut parameter.docs, docs);
                }
            }
            DocUpdate::Component {
                owner,
                field_name,
                docs,
            } => {
                if let Some(component) = classes
                    .get_mut(&owner)
                    .and_then(|c| c.components.get_mut(&field_name))
                {
                    apply_doc_text(&mut component.docs, docs);
                }
            }
        }
    }
}
