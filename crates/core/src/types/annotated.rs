//! Annotation data recorded for classes carrying plugin goal annotations
//!
//! These records are produced once by the annotation scanner. The only
//! fields changed afterwards are the [`DocText`] triples, filled in by the
//! hierarchy resolver.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::coordinate::ArtifactCoordinate;

/// Late-bound documentation scraped from sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

impl DocText {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.since.is_none() && self.deprecated.is_none()
    }
}

/// Dependency resolution scope a goal requires
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionScope {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "initialize")]
    Initialize,
    #[serde(rename = "compile")]
    Compile,
    #[serde(rename = "compile+runtime")]
    CompilePlusRuntime,
    #[serde(rename = "runtime")]
    Runtime,
    #[serde(rename = "runtime+system")]
    RuntimePlusSystem,
    #[serde(rename = "test")]
    Test,
}

impl ResolutionScope {
    /// Descriptor identifier, absent for [`ResolutionScope::None`]
    pub fn id(self) -> Option<&'static str> {
        match self {
            ResolutionScope::None => None,
            ResolutionScope::Initialize => Some("initialize"),
            ResolutionScope::Compile => Some("compile"),
            ResolutionScope::CompilePlusRuntime => Some("compile+runtime"),
            ResolutionScope::Runtime => Some("runtime"),
            ResolutionScope::RuntimePlusSystem => Some("runtime+system"),
            ResolutionScope::Test => Some("test"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstantiationStrategy {
    #[default]
    PerLookup,
    Singleton,
    KeepAlive,
    Poolable,
}

impl InstantiationStrategy {
    pub fn id(self) -> &'static str {
        match self {
            InstantiationStrategy::PerLookup => "per-lookup",
            InstantiationStrategy::Singleton => "singleton",
            InstantiationStrategy::KeepAlive => "keep-alive",
            InstantiationStrategy::Poolable => "poolable",
        }
    }
}

pub const ONCE_PER_SESSION_EXEC_STRATEGY: &str = "once-per-session";

/// Goal declaration carried by a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MojoSpec {
    pub goal: String,
    /// Default lifecycle phase id, empty when the goal binds to none
    pub default_phase: String,
    pub requires_dependency_resolution: ResolutionScope,
    pub requires_dependency_collection: ResolutionScope,
    pub instantiation_strategy: InstantiationStrategy,
    pub execution_strategy: String,
    pub requires_project: bool,
    pub requires_reports: bool,
    pub aggregator: bool,
    pub requires_direct_invocation: bool,
    pub requires_online: bool,
    pub inherit_by_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurator: Option<String>,
    pub thread_safe: bool,
    #[serde(skip_serializing_if = "DocText::is_empty")]
    pub docs: DocText,
}

impl Default for MojoSpec {
    fn default() -> Self {
        Self {
            goal: String::new(),
            default_phase: String::new(),
            requires_dependency_resolution: ResolutionScope::None,
            requires_dependency_collection: ResolutionScope::None,
            instantiation_strategy: InstantiationStrategy::PerLookup,
            execution_strategy: ONCE_PER_SESSION_EXEC_STRATEGY.to_string(),
            requires_project: true,
            requires_reports: false,
            aggregator: false,
            requires_direct_invocation: false,
            requires_online: false,
            inherit_by_default: true,
            configurator: None,
            thread_safe: false,
            docs: DocText::default(),
        }
    }
}

impl MojoSpec {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            ..Default::default()
        }
    }
}

/// One declared configurable field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParameterSpec {
    pub field_name: String,
    /// Explicit external name, the field name is used when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Bound property ("expression source")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub required: bool,
    pub readonly: bool,
    /// Declared type of the field
    pub class_name: String,
    #[serde(skip_serializing_if = "DocText::is_empty")]
    pub docs: DocText,
}

impl ParameterSpec {
    pub fn new(field_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    /// Name the parameter is configured under
    pub fn external_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.field_name)
    }
}

/// One declared injected-dependency field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ComponentSpec {
    pub field_name: String,
    pub role_class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "DocText::is_empty")]
    pub docs: DocText,
}

impl ComponentSpec {
    pub fn new(field_name: impl Into<String>, role_class_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            role_class_name: role_class_name.into(),
            ..Default::default()
        }
    }
}

/// Prerequisite goal, lifecycle or phase to run before a goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecuteSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

/// A class carrying at least one build-tool annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnnotatedClass {
    pub class_name: String,
    pub artifact: ArtifactCoordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mojo: Option<MojoSpec>,
    #[serde(default, with = "by_field_name")]
    pub parameters: BTreeMap<String, ParameterSpec>,
    #[serde(default, with = "by_field_name")]
    pub components: BTreeMap<String, ComponentSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute: Option<ExecuteSpec>,
}

impl AnnotatedClass {
    pub fn new(class_name: impl Into<String>, artifact: ArtifactCoordinate) -> Self {
        Self {
            class_name: class_name.into(),
            artifact,
            parent_class_name: None,
            mojo: None,
            parameters: BTreeMap::new(),
            components: BTreeMap::new(),
            execute: None,
        }
    }

    pub fn with_parent(mut self, parent_class_name: impl Into<String>) -> Self {
        self.parent_class_name = Some(parent_class_name.into());
        self
    }

    pub fn with_mojo(mut self, mojo: MojoSpec) -> Self {
        self.mojo = Some(mojo);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.insert(parameter.field_name.clone(), parameter);
        self
    }

    pub fn with_component(mut self, component: ComponentSpec) -> Self {
        self.components.insert(component.field_name.clone(), component);
        self
    }

    pub fn with_execute(mut self, execute: ExecuteSpec) -> Self {
        self.execute = Some(execute);
        self
    }

    /// Parent class name, treating an empty name as no parent
    pub fn parent(&self) -> Option<&str> {
        self.parent_class_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether any goal, parameter, component or execute annotation is present
    pub fn has_annotations(&self) -> bool {
        self.mojo.is_some()
            || !self.parameters.is_empty()
            || !self.components.is_empty()
            || self.execute.is_some()
    }
}

/// Annotated classes keyed by fully-qualified class name
pub type AnnotatedClasses = BTreeMap<String, AnnotatedClass>;

/// Field-keyed maps are written as plain lists, keyed back by field name on read
trait FieldNamed {
    fn field_name(&self) -> &str;
}

impl FieldNamed for ParameterSpec {
    fn field_name(&self) -> &str {
        &self.field_name
    }
}

impl FieldNamed for ComponentSpec {
    fn field_name(&self) -> &str {
        &self.field_name
    }
}

mod by_field_name {
    use super::FieldNamed;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S, T>(map: &BTreeMap<String, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FieldNamed,
    {
        let entries = Vec::<T>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.field_name().to_string(), entry))
            .collect())
    }
}
