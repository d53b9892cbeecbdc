//! `veneer inspect` — build and print member models.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use termcolor::ColorChoice;
use tracing::info;
use veneer_engine::{
    load_shapes, ExposureConfig, Member, MemberModel, MemberModelCache, MethodOrderer,
    PropertyAccessors, PropertyDescriptor,
};

use crate::output::StyledOutput;

pub struct InspectOptions {
    pub shapes: PathBuf,
    pub config: Option<PathBuf>,
    pub class: Option<String>,
    pub json: bool,
    pub color: ColorChoice,
}

pub fn execute(options: InspectOptions) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => ExposureConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExposureConfig::default(),
    };
    let models = build_models(&options.shapes, &config, options.class.as_deref())?;

    if options.json {
        let models: Vec<&MemberModel> = models.iter().map(Arc::as_ref).collect();
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    let orderer = config.orderer();
    let mut out = StyledOutput::new(options.color);
    for model in &models {
        print_model(&mut out, model, &*orderer);
    }
    out.flush();
    Ok(())
}

/// Build the models of every class in `shapes` (or only `class`)
pub fn build_models(
    shapes: &Path,
    config: &ExposureConfig,
    class: Option<&str>,
) -> anyhow::Result<Vec<Arc<MemberModel>>> {
    let shapes =
        load_shapes(shapes).with_context(|| format!("loading shapes {}", shapes.display()))?;
    let cache = MemberModelCache::new(config.builder());

    let models: Vec<_> = shapes
        .iter()
        .filter(|shape| class.map_or(true, |name| shape.class.name == name))
        .map(|shape| cache.get_or_build(shape))
        .collect();
    if let Some(name) = class {
        if models.is_empty() {
            bail!("class {} not found in shape file", name);
        }
    }
    info!(classes = models.len(), builds = cache.builds(), "models built");
    Ok(models)
}

fn print_model(out: &mut StyledOutput, model: &MemberModel, orderer: &dyn MethodOrderer) {
    out.heading(&format!("{} ({})", model.class(), model.class().id));
    out.newline();

    for (name, member) in model.iter() {
        out.plain(&format!("  {:<20} ", name));
        match member {
            Member::Property(prop) => {
                out.label("property ");
                out.plain(&describe_property(prop));
                if prop.is_synthetic() {
                    out.note(" [synthetic]");
                }
                out.newline();
            }
            Member::Methods(group) if group.is_overloaded() => {
                out.label("methods  ");
                out.plain(&format!("{} overloads, {} order", group.len(), orderer.describe()));
                out.newline();
                for method in group.ordered(orderer) {
                    out.plain(&format!("  {:<20}   {}", "", method));
                    out.newline();
                }
            }
            Member::Methods(group) => {
                out.label("method   ");
                for method in group.iter() {
                    out.plain(&method.to_string());
                }
                out.newline();
            }
        }
    }

    for prop in model.shadowed_properties() {
        out.note(&format!("  shadowed property '{}' ({})", prop.name, describe_property(prop)));
        out.newline();
    }
    out.newline();
}

/// One-line accessor summary
pub fn describe_property(prop: &PropertyDescriptor) -> String {
    let slot = |label: &str, sig: &Option<veneer_engine::MethodSignature>| {
        sig.as_ref().map(|s| format!("{}: {}", label, s))
    };
    let parts: Vec<String> = match &prop.accessors {
        PropertyAccessors::Plain { read, write } => {
            [slot("read", read), slot("write", write)].into_iter().flatten().collect()
        }
        PropertyAccessors::Indexed {
            read,
            write,
            indexed_read,
            indexed_write,
        } => [
            slot("read", read),
            slot("write", write),
            slot("indexed read", indexed_read),
            slot("indexed write", indexed_write),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };
    parts.join(", ")
}
