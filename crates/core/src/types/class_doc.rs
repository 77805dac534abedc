//! Source documentation records produced by documentation back-ends

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

pub const SINCE_TAG: &str = "since";
pub const DEPRECATED_TAG: &str = "deprecated";

/// Field-level documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl PropertyDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag.into(), value.into());
        self
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}

/// Documentation record as emitted by a back-end, before superclass linking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClassDoc {
    pub fully_qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDoc>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<String>,
}

impl RawClassDoc {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDoc) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag.into(), value.into());
        self
    }

    pub fn with_super_class(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self
    }
}

/// Documentation extracted from source for one class.
///
/// Two records are equal when their fully-qualified names are equal, no
/// matter what properties or tags they carry.
pub struct ClassDoc {
    pub fully_qualified_name: String,
    pub comment: Option<String>,
    pub properties: Vec<PropertyDoc>,
    pub tags: BTreeMap<String, String>,
    super_class_doc: OnceLock<Arc<ClassDoc>>,
}

impl ClassDoc {
    pub fn new(
        fully_qualified_name: impl Into<String>,
        comment: Option<String>,
        properties: Vec<PropertyDoc>,
        tags: BTreeMap<String, String>,
    ) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            comment,
            properties,
            tags,
            super_class_doc: OnceLock::new(),
        }
    }

    pub fn super_class_doc(&self) -> Option<&Arc<ClassDoc>> {
        self.super_class_doc.get()
    }

    /// Link the superclass documentation.
    ///
    /// # Panics
    ///
    /// Panics if the link was already set.
    pub fn set_super_class_doc(&self, super_class_doc: Arc<ClassDoc>) {
        if self.super_class_doc.set(super_class_doc).is_err() {
            panic!(
                "superclass documentation of {} cannot be changed once set",
                self.fully_qualified_name
            );
        }
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    /// First value of `tag_name` found on this class or, failing that, up
    /// the documentation superclass chain
    pub fn find_in_class_hierarchy(&self, tag_name: &str) -> Option<&str> {
        let mut visited = HashSet::new();
        let mut current = self;

        loop {
            if !visited.insert(current.fully_qualified_name.as_str()) {
                return None;
            }
            if let Some(value) = current.tag(tag_name) {
                return Some(value);
            }
            current = current.super_class_doc()?.as_ref();
        }
    }
}

impl fmt::Debug for ClassDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // only the name of the superclass, links may form a cycle
        f.debug_struct("ClassDoc")
            .field("fully_qualified_name", &self.fully_qualified_name)
            .field("comment", &self.comment)
            .field("properties", &self.properties)
            .field("tags", &self.tags)
            .field(
                "super_class",
                &self.super_class_doc().map(|doc| doc.fully_qualified_name.as_str()),
            )
            .finish()
    }
}

impl PartialEq for ClassDoc {
    fn eq(&self, other: &Self) -> bool {
        self.fully_qualified_name == other.fully_qualified_name
    }
}

impl Eq for ClassDoc {}

impl Hash for ClassDoc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fully_qualified_name.hash(state);
    }
}

impl From<RawClassDoc> for ClassDoc {
    fn from(raw: RawClassDoc) -> Self {
        ClassDoc::new(raw.fully_qualified_name, raw.comment, raw.properties, raw.tags)
    }
}

/// Class documentation keyed by fully-qualified class name
pub type ClassDocMap = BTreeMap<String, Arc<ClassDoc>>;

/// Build linked class documentation from raw records.
///
/// All records are built first; superclass references are assigned in a
/// single pass afterwards, so a superclass found in a different scan request
/// than its subclass is still linked. A later record for the same class
/// replaces an earlier one.
pub fn link_class_docs(records: impl IntoIterator<Item = RawClassDoc>) -> ClassDocMap {
    let mut super_classes: BTreeMap<String, String> = BTreeMap::new();
    let mut class_docs = ClassDocMap::new();

    for mut record in records {
        let name = record.fully_qualified_name.clone();
        match record.super_class.take().filter(|s| !s.is_empty() && *s != name) {
            Some(super_class) => super_classes.insert(name.clone(), super_class),
            None => super_classes.remove(&name),
        };
        class_docs.insert(name, Arc::new(ClassDoc::from(record)));
    }

    for (name, super_class) in &super_classes {
        if let (Some(class_doc), Some(super_doc)) = (class_docs.get(name), class_docs.get(super_class)) {
            class_doc.set_super_class_doc(Arc::clone(super_doc));
        }
    }

    class_docs
}
