fn main() {
    // Validate embedded tables at compile time.
    let tables = [
        ("buckwalter", include_str!("src/tables/buckwalter.toml")),
        ("tamil", include_str!("src/tables/tamil.toml")),
        ("persian", include_str!("src/tables/persian.toml")),
        ("russian", include_str!("src/tables/russian.toml")),
        (
            "russian_swedish",
            include_str!("src/tables/russian_swedish.toml"),
        ),
        ("greek", include_str!("src/tables/greek.toml")),
    ];
    for (name, content) in tables {
        validate_table(&format!("src/tables/{name}.toml"), content);
    }
}

fn validate_table(path: &str, content: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(value) => value,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    let has_entries = value
        .get("mappings")
        .and_then(|m| m.get("entries"))
        .and_then(|e| e.as_array())
        .is_some_and(|e| !e.is_empty());
    if !has_entries {
        panic!("{path} has no [mappings] entries");
    }
}
