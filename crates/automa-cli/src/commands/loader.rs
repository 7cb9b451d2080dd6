use std::fs;
use std::path::Path;

use automa_core::automaton::Automaton;
use automa_core::description::Description;
use automa_compiler::compile_regex;

/// Build an automaton from either a description file or an inline regex.
pub fn load_automaton(
    automaton_path: Option<&Path>,
    regex: Option<&str>,
) -> Result<Automaton, String> {
    if let Some(pattern) = regex {
        return compile_regex(pattern).map_err(|e| e.to_string());
    }

    if let Some(path) = automaton_path {
        return load_file(path);
    }

    Err("an automaton is required: pass a description file or -r/--regex".to_string())
}

fn load_file(path: &Path) -> Result<Automaton, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    let description = Description::from_json(&content).map_err(|e| e.to_string())?;
    description.build().map_err(|e| e.to_string())
}
