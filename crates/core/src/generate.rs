//! Top-level driver: documented objects to a formatted declaration file.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{debug, info};

use crate::assemble::{is_dictionary_global, object_interface, render_dictionary_alias};
use crate::contexts::{render_template_contexts, template_contexts};
use crate::error::GenerateError;
use crate::format::{Formatter, Passthrough};
use crate::naming::to_type_name;
use crate::schema::ObjectEntry;
use crate::ts::utils::is_valid_type_name;
use crate::ts::{Emit, Marker, TsModule, TsTypeDef, TypeDefKind};

/// What to include in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Append one `<Template>Context` interface per template.
    pub template_contexts: bool,
}

/// Counts gathered while building the module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Object interfaces emitted.
    pub interfaces: usize,
    /// Dictionary-global aliases emitted.
    pub aliases: usize,
    /// Template context interfaces emitted.
    pub contexts: usize,
    /// Marker substitutions, by marker.
    pub markers: BTreeMap<Marker, usize>,
}

impl GenerationStats {
    /// Substitutions of `marker`, zero when none were made.
    pub fn marker_count(&self, marker: Marker) -> usize {
        self.markers.get(&marker).copied().unwrap_or_default()
    }

    fn record(&mut self, def: &TsTypeDef) {
        match &def.kind {
            TypeDefKind::Interface { properties } => {
                self.interfaces += 1;
                for marker in properties.iter().flat_map(|p| p.ty.markers()) {
                    *self.markers.entry(marker).or_default() += 1;
                }
            }
            TypeDefKind::TypeAlias { ty } => {
                self.aliases += 1;
                for marker in ty.markers() {
                    *self.markers.entry(marker).or_default() += 1;
                }
            }
        }
    }
}

/// Generated declaration file.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Formatted declaration text.
    pub text: String,
    /// Counts for the run.
    pub stats: GenerationStats,
}

/// Builds declaration files with a fixed set of options and formatter.
pub struct Generator {
    options: GenerateOptions,
    formatter: Box<dyn Formatter>,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Generator that runs every declaration file through `formatter`.
    pub fn new(options: GenerateOptions, formatter: impl Formatter + 'static) -> Self {
        Self {
            options,
            formatter: Box::new(formatter),
        }
    }

    /// Build, emit and format the declaration file for `objects`.
    pub fn generate(&self, objects: &[ObjectEntry]) -> Result<Generated, GenerateError> {
        let (module, stats) = build_module(objects, self.options)?;
        let raw = module.emit();
        debug!(bytes = raw.len(), "formatting declarations");
        let text = self.formatter.format(&raw)?;
        info!(
            interfaces = stats.interfaces,
            aliases = stats.aliases,
            contexts = stats.contexts,
            missing_data = stats.marker_count(Marker::MissingData),
            unmapped = stats.marker_count(Marker::Unmapped),
            "generated declarations"
        );
        Ok(Generated { text, stats })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerateOptions::default(), Passthrough)
    }
}

/// Unformatted declaration file: marker preamble, then one block per object
/// in input order, separated by blank lines.
pub fn render(objects: &[ObjectEntry]) -> Result<String, GenerateError> {
    let (module, _) = build_module(objects, GenerateOptions::default())?;
    Ok(module.emit())
}

/// Assemble the module for `objects`. Fails before emitting anything when two
/// declarations would share a name or a name is not a usable identifier.
pub fn build_module(
    objects: &[ObjectEntry],
    options: GenerateOptions,
) -> Result<(TsModule, GenerationStats), GenerateError> {
    let mut module = TsModule::with_markers();
    let mut stats = GenerationStats::default();
    let mut declared: HashMap<String, String> = module
        .preamble
        .iter()
        .map(|def| (def.name.clone(), def.name.clone()))
        .collect();

    for object in objects {
        let type_name = object_type_name(object)?;
        claim(&mut declared, &object.name, &type_name)?;

        let def = if is_dictionary_global(object) {
            debug!(object = %object.name, type_name = %type_name, "dictionary global");
            render_dictionary_alias(type_name, object)
        } else {
            object_interface(type_name, object)
        };
        stats.record(&def);
        module.types.push(def);
    }

    if options.template_contexts {
        for def in render_template_contexts(&template_contexts(objects))? {
            claim(&mut declared, &def.name, &def.name)?;
            stats.contexts += 1;
            module.types.push(def);
        }
    }

    Ok((module, stats))
}

fn object_type_name(object: &ObjectEntry) -> Result<String, GenerateError> {
    let type_name = to_type_name(&object.name);
    if is_valid_type_name(&type_name) {
        Ok(type_name)
    } else {
        Err(GenerateError::InvalidTypeName {
            object: object.name.clone(),
            type_name,
        })
    }
}

/// Record `type_name` as declared by `name`, failing if it already is.
fn claim(
    declared: &mut HashMap<String, String>,
    name: &str,
    type_name: &str,
) -> Result<(), GenerateError> {
    match declared.entry(type_name.to_string()) {
        Entry::Occupied(previous) => {
            debug!(name, previous = %previous.get(), type_name, "name collision");
            Err(GenerateError::DuplicateName {
                name: name.to_string(),
                type_name: type_name.to_string(),
            })
        }
        Entry::Vacant(slot) => {
            slot.insert(name.to_string());
            Ok(())
        }
    }
}
