use std::collections::HashSet;

fn has_glob_meta(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
}

/// Expand possible glob patterns in a list of input strings into concrete file paths.
///
/// Plain paths are kept as given so a missing file is reported later with a
/// proper message. Matches of one pattern come back sorted, and a path listed
/// twice is only kept at its first position.
pub fn expand_input_globs(inputs: &[String]) -> Result<Vec<String>, String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<String> = Vec::with_capacity(inputs.len());

    for input in inputs {
        if !has_glob_meta(input) {
            if seen.insert(input.clone()) {
                results.push(input.clone());
            }
            continue;
        }

        let paths = glob::glob(input)
            .map_err(|e| format!("Invalid glob pattern '{}': {}", input, e))?;

        let mut matched = false;
        for entry in paths {
            let path = entry.map_err(|e| format!("Cannot read '{}': {}", input, e))?;
            if !path.is_file() {
                continue;
            }
            matched = true;
            let s = path.to_string_lossy().to_string();
            if seen.insert(s.clone()) {
                results.push(s);
            }
        }

        if !matched {
            return Err(format!("No files match pattern '{}'", input));
        }
    }

    Ok(results)
}
