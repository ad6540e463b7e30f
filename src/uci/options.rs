use log::warn;

use crate::config::EngineConfig;

/// Apply a `setoption` to the engine configuration. Returns false for an
/// option this engine does not have.
pub fn apply_setoption(config: &mut EngineConfig, name: &str, value: Option<&str>) -> bool {
    match name.trim().to_ascii_lowercase().as_str() {
        "depth" => {
            if let Some(v) = value {
                config.apply_depth(v);
            }
            true
        }
        other => {
            warn!("unknown option '{other}'");
            false
        }
    }
}

/// Split `setoption name <name...> [value <value...>]` into its name and value.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = None;

    for part in parts.iter().skip(1) {
        match *part {
            "name" => in_value = Some(false),
            "value" => in_value = Some(true),
            _ => match in_value {
                Some(false) => name_parts.push(part),
                Some(true) => value_parts.push(part),
                None => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some((name_parts.join(" "), value))
}
