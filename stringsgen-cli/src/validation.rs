use std::path::Path;
use std::str::FromStr;

use stringsgen::{FormatType, Indentation};

/// Validation context for the generate and inspect commands
#[derive(Debug, Default)]
pub struct ValidationContext {
    pub input_files: Vec<String>,
    pub output_file: Option<String>,
    pub enum_name: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, file: String) -> Self {
        self.input_files.push(file);
        self
    }

    pub fn with_output_file(mut self, file: String) -> Self {
        self.output_file = Some(file);
        self
    }

    pub fn with_enum_name(mut self, name: String) -> Self {
        self.enum_name = Some(name);
        self
    }
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    if let Some(parent) = path_obj.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return Err(format!("Cannot create output directory: {}", e));
            }
        }
    }

    Ok(())
}

/// Validate the enum name contains at least one identifier character
pub fn validate_enum_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Enum name cannot be empty".to_string());
    }

    if !name.chars().any(|c| c.is_alphanumeric()) {
        return Err(format!(
            "Invalid enum name: {}. It must contain at least one letter or digit",
            name
        ));
    }

    Ok(())
}

/// Validate input format string
pub fn validate_format(format: &str) -> Result<(), String> {
    if format.trim().is_empty() {
        return Err("Format cannot be empty".to_string());
    }

    FormatType::from_str(format)
        .map(|_| ())
        .map_err(|_| {
            format!(
                "Unsupported format: {}. Supported formats: strings, csv, json",
                format
            )
        })
}

/// Validate an indentation spec such as `tabs` or `spaces:2`
pub fn validate_indentation(indentation: &str) -> Result<(), String> {
    Indentation::from_str(indentation)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if context.input_files.is_empty() {
        return Err("At least one input file is required".to_string());
    }

    for (i, input) in context.input_files.iter().enumerate() {
        validate_file_path(input)
            .map_err(|e| format!("Input file {} validation failed: {}", i + 1, e))?;
    }

    if let Some(ref output) = context.output_file {
        validate_output_path(output).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    if let Some(ref name) = context.enum_name {
        validate_enum_name(name).map_err(|e| format!("Enum name validation failed: {}", e))?;
    }

    Ok(())
}
