use std::fs;
use std::path::Path;

use stringsgen::{Error, FormatType, L10nEnumBuilder, ResourceSupplier};
use tracing::info;

use crate::config::Settings;
use crate::path_glob::expand_input_globs;
use crate::validation::{ValidationContext, validate_context};

/// Wraps another supplier and sorts its pairs by key.
pub struct SortedSupplier<'a> {
    inner: &'a dyn ResourceSupplier,
}

impl<'a> SortedSupplier<'a> {
    pub fn new(inner: &'a dyn ResourceSupplier) -> Self {
        SortedSupplier { inner }
    }
}

impl ResourceSupplier for SortedSupplier<'_> {
    fn load(&self, path: &Path) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = self.inner.load(path)?;
        // Stable, so duplicate keys keep their file order.
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(pairs)
    }
}

/// Read every input of `settings` into one builder, in input order.
pub fn collect_entries(settings: &Settings) -> Result<L10nEnumBuilder, String> {
    let inputs = expand_input_globs(&settings.inputs)?;

    let mut context = ValidationContext::new();
    for input in &inputs {
        context = context.with_input_file(input.clone());
    }
    if let Some(output) = &settings.output {
        context = context.with_output_file(output.clone());
    }
    context = context.with_enum_name(settings.emit.enum_name.clone());
    validate_context(&context)?;

    let mut builder = L10nEnumBuilder::new();
    for input in &inputs {
        let format = match settings.format {
            Some(format) => format,
            None => FormatType::from_path(input).map_err(|e| format!("{}: {}", input, e))?,
        };

        let added = if settings.sort {
            builder.parse_file(input, &SortedSupplier::new(&format))
        } else {
            builder.parse_file(input, &format)
        }
        .map_err(|e| e.to_string())?;

        info!(input = %input, format = %format, entries = added, "read resource file");
    }

    Ok(builder)
}

/// Render the Swift source for `settings`.
pub fn render(settings: &Settings) -> Result<String, String> {
    let builder = collect_entries(settings)?;
    if settings.strict {
        builder
            .build_checked(&settings.emit)
            .map_err(|e| e.to_string())
    } else {
        Ok(builder.build(&settings.emit))
    }
}

/// Run the generate command: write the Swift file, or print it to stdout.
pub fn run_generate_command(settings: Settings) -> Result<(), String> {
    let text = render(&settings)?;

    match &settings.output {
        Some(output) => write_if_changed(output, &text),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

/// Leave an up-to-date file untouched so build systems do not see a change.
fn write_if_changed(output: &str, text: &str) -> Result<(), String> {
    if fs::read_to_string(output).is_ok_and(|existing| existing == text) {
        info!(output = %output, "generated code is unchanged");
        return Ok(());
    }

    fs::write(output, text).map_err(|e| format!("Error writing to {}: {}", output, e))?;
    info!(output = %output, "generated code written");
    Ok(())
}
