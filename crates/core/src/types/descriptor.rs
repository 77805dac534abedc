use serde::{Deserialize, Serialize};

use super::project::PluginRef;

/// Container binding of a component-backed parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub role: String,
    /// Empty when the component is looked up without a hint
    pub role_hint: String,
}

/// One entry of a goal's parameter list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorParameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub required: bool,
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Requirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

/// Finished metadata record for one plugin goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MojoDescriptor {
    pub goal: String,
    /// Implementing class
    pub implementation: String,
    pub language: String,
    pub phase: String,
    pub description: Option<String>,
    pub since: Option<String>,
    pub deprecated: Option<String>,
    pub dependency_resolution_required: Option<String>,
    pub dependency_collection_required: Option<String>,
    pub instantiation_strategy: String,
    pub execution_strategy: String,
    pub project_required: bool,
    pub requires_reports: bool,
    pub aggregator: bool,
    pub direct_invocation_only: bool,
    pub online_required: bool,
    pub inherited_by_default: bool,
    pub thread_safe: bool,
    pub component_configurator: Option<String>,
    pub execute_goal: Option<String>,
    pub execute_lifecycle: Option<String>,
    pub execute_phase: Option<String>,
    pub parameters: Vec<DescriptorParameter>,
    pub plugin: PluginRef,
}

impl MojoDescriptor {
    pub fn parameter(&self, name: &str) -> Option<&DescriptorParameter> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|parameter| parameter.name.as_str()).collect()
    }
}
