//! Converts resolved goal classes into finished descriptors

use super::hierarchy::{find_execute, gather_components, gather_parameters};
use super::report::ExtractionWarning;
use crate::error::{Error, Result};
use crate::types::{
    AnnotatedClass, AnnotatedClasses, ComponentSpec, DescriptorParameter, MojoDescriptor, MojoSpec,
    ParameterSpec, PluginRef, Requirement,
};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Roles the build tool injects as plain values rather than components,
/// with the expression each one is available under
pub const INJECTED_COMPONENTS: [(&str, &str); 5] = [
    ("org.apache.maven.execution.MavenSession", "${session}"),
    ("org.apache.maven.project.MavenProject", "${project}"),
    ("org.apache.maven.plugin.MojoExecution", "${mojoExecution}"),
    ("org.apache.maven.plugin.descriptor.PluginDescriptor", "${plugin}"),
    ("org.apache.maven.settings.Settings", "${settings}"),
];

const FORBIDDEN_PROPERTY_CHARS: [char; 3] = ['$', '{', '}'];

/// Descriptors produced by one assembly, ordered by implementation class
#[derive(Debug, Default)]
pub struct Assembly {
    pub descriptors: Vec<MojoDescriptor>,
    pub warnings: Vec<ExtractionWarning>,
}

pub struct DescriptorAssembler {
    injected_components: BTreeMap<String, String>,
}

impl Default for DescriptorAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorAssembler {
    pub fn new() -> Self {
        Self {
            injected_components: INJECTED_COMPONENTS
                .iter()
                .map(|(role, expression)| (role.to_string(), expression.to_string()))
                .collect(),
        }
    }

    /// Extend the built-in table; entries for a known role replace its expression
    pub fn with_injected_components(mut self, extra: &BTreeMap<String, String>) -> Self {
        self.injected_components
            .extend(extra.iter().map(|(role, expression)| (role.clone(), expression.clone())));
        self
    }

    /// Expression for a natively injected role
    pub fn injected_expression(&self, role: &str) -> Option<&str> {
        self.injected_components.get(role).map(String::as_str)
    }

    /// Build a descriptor for every class declaring a goal.
    ///
    /// The first invalid parameter aborts the whole assembly.
    pub fn assemble(&self, classes: &AnnotatedClasses, plugin: &PluginRef) -> Result<Assembly> {
        let mut assembly = Assembly::default();
        let mut reported = HashSet::new();

        for class in classes.values() {
            let Some(mojo) = &class.mojo else {
                continue;
            };

            let descriptor = self.to_descriptor(classes, class, mojo, plugin, &mut |warning: ExtractionWarning| {
                if let ExtractionWarning::ComponentAsParameter {
                    class_name,
                    field_name,
                    ..
                } = &warning
                {
                    if !reported.insert((class_name.clone(), field_name.clone())) {
                        return;
                    }
                    warn!("{}", warning);
                }
                assembly.warnings.push(warning);
            })?;

            debug!(
                "Assembled goal '{}' from {} with {} parameters",
                descriptor.goal,
                descriptor.implementation,
                descriptor.parameters.len()
            );
            assembly.descriptors.push(descriptor);
        }

        Ok(assembly)
    }

    fn to_descriptor(
        &self,
        classes: &AnnotatedClasses,
        class: &AnnotatedClass,
        mojo: &MojoSpec,
        plugin: &PluginRef,
        on_warning: &mut dyn FnMut(ExtractionWarning),
    ) -> Result<MojoDescriptor> {
        let execute = find_execute(classes, &class.class_name);

        let mut parameters = Vec::new();
        let mut names = HashSet::new();

        for inherited in gather_parameters(classes, &class.class_name).into_values() {
            let parameter = parameter_to_descriptor(inherited.spec)?;
            if !names.insert(parameter.name.clone()) {
                return Err(Error::DuplicateParameter {
                    goal: mojo.goal.clone(),
                    parameter: parameter.name,
                });
            }
            parameters.push(parameter);
        }

        for inherited in gather_components(classes, &class.class_name).into_values() {
            let parameter = self.component_to_descriptor(inherited.owner, inherited.spec, on_warning);
            if !names.insert(parameter.name.clone()) {
                return Err(Error::DuplicateParameter {
                    goal: mojo.goal.clone(),
                    parameter: parameter.name,
                });
            }
            parameters.push(parameter);
        }

        Ok(MojoDescriptor {
            goal: mojo.goal.clone(),
            implementation: class.class_name.clone(),
            language: "java".to_string(),
            phase: mojo.default_phase.clone(),
            description: mojo.docs.description.clone(),
            since: mojo.docs.since.clone(),
            deprecated: mojo.docs.deprecated.clone(),
            dependency_resolution_required: mojo
                .requires_dependency_resolution
                .id()
                .map(str::to_string),
            dependency_collection_required: mojo
                .requires_dependency_collection
                .id()
                .map(str::to_string),
            instantiation_strategy: mojo.instantiation_strategy.id().to_string(),
            execution_strategy: mojo.execution_strategy.clone(),
            project_required: mojo.requires_project,
            requires_reports: mojo.requires_reports,
            aggregator: mojo.aggregator,
            direct_invocation_only: mojo.requires_direct_invocation,
            online_required: mojo.requires_online,
            inherited_by_default: mojo.inherit_by_default,
            thread_safe: mojo.thread_safe,
            component_configurator: mojo.configurator.clone(),
            execute_goal: execute.and_then(|e| e.goal.clone()),
            execute_lifecycle: execute.and_then(|e| e.lifecycle.clone()),
            execute_phase: execute.and_then(|e| e.phase.clone()),
            parameters,
            plugin: plugin.clone(),
        })
    }

    fn component_to_descriptor(
        &self,
        owner: &str,
        component: &ComponentSpec,
        on_warning: &mut dyn FnMut(ExtractionWarning),
    ) -> DescriptorParameter {
        let mut parameter = DescriptorParameter {
            name: component.field_name.clone(),
            editable: false,
            since: component.docs.since.clone(),
            deprecated: component.docs.deprecated.clone(),
            ..Default::default()
        };

        match self.injected_expression(&component.role_class_name) {
            Some(expression) => {
                on_warning(ExtractionWarning::ComponentAsParameter {
                    class_name: owner.to_string(),
                    field_name: component.field_name.clone(),
                    expression: expression.to_string(),
                });
                parameter.default_value = Some(expression.to_string());
                parameter.required = true;
                parameter.type_name = Some(component.role_class_name.clone());
            }
            None => {
                parameter.requirement = Some(Requirement {
                    role: component.role_class_name.clone(),
                    role_hint: component.hint.clone().unwrap_or_default(),
                });
            }
        }

        parameter
    }
}

fn parameter_to_descriptor(spec: &ParameterSpec) -> Result<DescriptorParameter> {
    let name = spec.external_name().to_string();

    let property = spec.property.as_deref().filter(|property| !property.is_empty());
    if let Some(property) = property {
        if property.contains(FORBIDDEN_PROPERTY_CHARS) {
            return Err(Error::InvalidParameter {
                parameter: name,
                property: property.to_string(),
            });
        }
    }

    Ok(DescriptorParameter {
        name,
        alias: spec.alias.clone().filter(|alias| !alias.is_empty()),
        type_name: Some(spec.class_name.clone()),
        required: spec.required,
        editable: !spec.readonly,
        default_value: spec.default_value.clone(),
        expression: property.map(|property| format!("${{{property}}}")),
        requirement: None,
        description: spec.docs.description.clone(),
        since: spec.docs.since.clone(),
        deprecated: spec.docs.deprecated.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArtifactCoordinate, DocText, ExecuteSpec, ResolutionScope};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn artifact() -> ArtifactCoordinate {
        ArtifactCoordinate::new("org.example", "plugin", "1.0", "maven-plugin")
    }

    fn classes(list: Vec<AnnotatedClass>) -> AnnotatedClasses {
        list.into_iter()
            .map(|class| (class.class_name.clone(), class))
            .collect()
    }

    fn plugin() -> PluginRef {
        PluginRef {
            group_id: "org.example".to_string(),
            artifact_id: "plugin".to_string(),
            version: "1.0".to_string(),
            goal_prefix: Some("example".to_string()),
        }
    }

    fn bound(field: &str, property: &str) -> ParameterSpec {
        ParameterSpec {
            property: Some(property.to_string()),
            ..ParameterSpec::new(field, "java.lang.String")
        }
    }

    #[test]
    fn test_classes_without_goal_are_not_assembled() {
        let classes = classes(vec![
            AnnotatedClass::new("org.example.Base", artifact())
                .with_parameter(ParameterSpec::new("skip", "boolean")),
            AnnotatedClass::new("org.example.BuildMojo", artifact())
                .with_parent("org.example.Base")
                .with_mojo(MojoSpec::new("build")),
        ]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        assert_eq!(assembly.descriptors.len(), 1);
        let descriptor = &assembly.descriptors[0];
        assert_eq!(descriptor.implementation, "org.example.BuildMojo");
        assert_eq!(descriptor.language, "java");
        assert_eq!(descriptor.plugin, plugin());
        assert_eq!(descriptor.parameter_names(), vec!["skip"]);
    }

    #[test]
    fn test_goal_fields_are_copied() {
        let mojo = MojoSpec {
            default_phase: "package".to_string(),
            requires_dependency_resolution: ResolutionScope::CompilePlusRuntime,
            thread_safe: true,
            aggregator: true,
            configurator: Some("include-project-dependencies".to_string()),
            docs: DocText {
                description: Some("Builds things.".to_string()),
                since: Some("2.0".to_string()),
                deprecated: None,
            },
            ..MojoSpec::new("build")
        };
        let classes = classes(vec![AnnotatedClass::new("org.example.BuildMojo", artifact())
            .with_mojo(mojo)
            .with_execute(ExecuteSpec {
                lifecycle: Some("site".to_string()),
                phase: Some("pre-site".to_string()),
                ..Default::default()
            })]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        let descriptor = &assembly.descriptors[0];
        assert_eq!(descriptor.phase, "package");
        assert_eq!(descriptor.dependency_resolution_required.as_deref(), Some("compile+runtime"));
        assert_eq!(descriptor.dependency_collection_required, None);
        assert_eq!(descriptor.instantiation_strategy, "per-lookup");
        assert_eq!(descriptor.execution_strategy, "once-per-session");
        assert!(descriptor.thread_safe);
        assert!(descriptor.aggregator);
        assert!(descriptor.project_required);
        assert!(descriptor.inherited_by_default);
        assert_eq!(descriptor.component_configurator.as_deref(), Some("include-project-dependencies"));
        assert_eq!(descriptor.description.as_deref(), Some("Builds things."));
        assert_eq!(descriptor.since.as_deref(), Some("2.0"));
        assert_eq!(descriptor.execute_goal, None);
        assert_eq!(descriptor.execute_lifecycle.as_deref(), Some("site"));
        assert_eq!(descriptor.execute_phase.as_deref(), Some("pre-site"));
    }

    #[test]
    fn test_parameter_naming_expression_and_editability() {
        let renamed = ParameterSpec {
            name: Some("output".to_string()),
            alias: Some("out".to_string()),
            readonly: true,
            required: true,
            default_value: Some("${project.build.directory}".to_string()),
            ..ParameterSpec::new("outputDirectory", "java.io.File")
        };
        let classes = classes(vec![AnnotatedClass::new("org.example.BuildMojo", artifact())
            .with_mojo(MojoSpec::new("build"))
            .with_parameter(renamed)
            .with_parameter(bound("encoding", "project.build.sourceEncoding"))]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        let descriptor = &assembly.descriptors[0];
        assert_eq!(descriptor.parameter_names(), vec!["encoding", "output"]);

        let encoding = descriptor.parameter("encoding").unwrap();
        assert_eq!(encoding.expression.as_deref(), Some("${project.build.sourceEncoding}"));
        assert!(encoding.editable);

        let output = descriptor.parameter("output").unwrap();
        assert_eq!(output.alias.as_deref(), Some("out"));
        assert_eq!(output.expression, None);
        assert_eq!(output.type_name.as_deref(), Some("java.io.File"));
        assert_eq!(output.default_value.as_deref(), Some("${project.build.directory}"));
        assert!(output.required);
        assert!(!output.editable);
    }

    #[test]
    fn test_forbidden_property_characters_abort_assembly() {
        let classes = classes(vec![
            AnnotatedClass::new("org.example.AMojo", artifact()).with_mojo(MojoSpec::new("a")),
            AnnotatedClass::new("org.example.BMojo", artifact())
                .with_mojo(MojoSpec::new("b"))
                .with_parameter(bound("target", "a${b}")),
        ]);

        let err = DescriptorAssembler::new()
            .assemble(&classes, &plugin())
            .unwrap_err();

        match err {
            Error::InvalidParameter {
                parameter,
                property,
            } => {
                assert_eq!(parameter, "target");
                assert_eq!(property, "a${b}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_injected_component_becomes_parameter_with_single_warning() {
        let classes = classes(vec![AnnotatedClass::new("org.example.BuildMojo", artifact())
            .with_mojo(MojoSpec::new("build"))
            .with_component(ComponentSpec::new(
                "session",
                "org.apache.maven.execution.MavenSession",
            ))]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        let session = assembly.descriptors[0].parameter("session").unwrap();
        assert_eq!(session.default_value.as_deref(), Some("${session}"));
        assert!(session.required);
        assert!(!session.editable);
        assert_eq!(session.type_name.as_deref(), Some("org.apache.maven.execution.MavenSession"));
        assert!(session.requirement.is_none());
        assert_eq!(
            assembly.warnings,
            vec![ExtractionWarning::ComponentAsParameter {
                class_name: "org.example.BuildMojo".to_string(),
                field_name: "session".to_string(),
                expression: "${session}".to_string(),
            }]
        );
    }

    #[test]
    fn test_inherited_injected_component_is_reported_once() {
        let classes = classes(vec![
            AnnotatedClass::new("org.example.Base", artifact()).with_component(ComponentSpec::new(
                "project",
                "org.apache.maven.project.MavenProject",
            )),
            AnnotatedClass::new("org.example.AMojo", artifact())
                .with_parent("org.example.Base")
                .with_mojo(MojoSpec::new("a")),
            AnnotatedClass::new("org.example.BMojo", artifact())
                .with_parent("org.example.Base")
                .with_mojo(MojoSpec::new("b")),
        ]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        assert_eq!(assembly.descriptors.len(), 2);
        assert_eq!(assembly.warnings.len(), 1);
    }

    /// Counts WARN events seen by the subscriber
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_inherited_injected_component_is_logged_once() {
        let classes = classes(vec![
            AnnotatedClass::new("org.example.Base", artifact()).with_component(ComponentSpec::new(
                "session",
                "org.apache.maven.execution.MavenSession",
            )),
            AnnotatedClass::new("org.example.AMojo", artifact())
                .with_parent("org.example.Base")
                .with_mojo(MojoSpec::new("a")),
            AnnotatedClass::new("org.example.BMojo", artifact())
                .with_parent("org.example.Base")
                .with_mojo(MojoSpec::new("b")),
            AnnotatedClass::new("org.example.CMojo", artifact())
                .with_parent("org.example.Base")
                .with_mojo(MojoSpec::new("c")),
        ]);
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

        let assembly = tracing::subscriber::with_default(subscriber, || {
            DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap()
        });

        assert_eq!(assembly.descriptors.len(), 3);
        assert_eq!(assembly.warnings.len(), 1);
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_regular_component_becomes_requirement() {
        let helper = ComponentSpec {
            hint: Some("fast".to_string()),
            docs: DocText {
                description: Some("Helper.".to_string()),
                since: Some("1.1".to_string()),
                deprecated: None,
            },
            ..ComponentSpec::new("helper", "org.example.Helper")
        };
        let classes = classes(vec![AnnotatedClass::new("org.example.BuildMojo", artifact())
            .with_mojo(MojoSpec::new("build"))
            .with_component(helper)
            .with_component(ComponentSpec::new("archiver", "org.example.Archiver"))]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        assert!(assembly.warnings.is_empty());
        let descriptor = &assembly.descriptors[0];
        let helper = descriptor.parameter("helper").unwrap();
        assert_eq!(
            helper.requirement,
            Some(Requirement {
                role: "org.example.Helper".to_string(),
                role_hint: "fast".to_string(),
            })
        );
        assert_eq!(helper.since.as_deref(), Some("1.1"));
        assert_eq!(helper.description, None);
        assert_eq!(helper.default_value, None);
        assert!(!helper.required);
        assert!(!helper.editable);

        let archiver = descriptor.parameter("archiver").unwrap();
        assert_eq!(archiver.requirement.as_ref().unwrap().role_hint, "");
    }

    #[test]
    fn test_parameters_precede_components() {
        let classes = classes(vec![AnnotatedClass::new("org.example.BuildMojo", artifact())
            .with_mojo(MojoSpec::new("build"))
            .with_component(ComponentSpec::new("archiver", "org.example.Archiver"))
            .with_parameter(ParameterSpec::new("skip", "boolean"))
            .with_parameter(ParameterSpec::new("basedir", "java.io.File"))]);

        let assembly = DescriptorAssembler::new().assemble(&classes, &plugin()).unwrap();

        assert_eq!(
            assembly.descriptors[0].parameter_names(),
            vec!["basedir", "skip", "archiver"]
        );
    }

    #[test]
    fn test_duplicate_external_names_are_rejected() {
        let renamed = ParameterSpec {
            name: Some("skip".to_string()),
            ..ParameterSpec::new("skipBuild", "boolean")
        };
        let classes = classes(vec![AnnotatedClass::new("org.example.BuildMojo", artifact())
            .with_mojo(MojoSpec::new("build"))
            .with_parameter(ParameterSpec::new("skip", "boolean"))
            .with_parameter(renamed)]);

        let err = DescriptorAssembler::new()
            .assemble(&classes, &plugin())
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateParameter { ref parameter, .. } if parameter == "skip"));
    }

    #[test]
    fn test_configured_roles_extend_the_table() {
        let extra = BTreeMap::from([(
            "org.example.BuildContext".to_string(),
            "${buildContext}".to_string(),
        )]);
        let assembler = DescriptorAssembler::new().with_injected_components(&extra);

        assert_eq!(assembler.injected_expression("org.example.BuildContext"), Some("${buildContext}"));
        assert_eq!(
            assembler.injected_expression("org.apache.maven.settings.Settings"),
            Some("${settings}")
        );
    }
}
