//! Safe access to nested fields of loosely typed API payloads.
//!
//! Paths are dot separated: `"fontes.0.area"` reads key `fontes`, then index
//! `0` of that array, then key `area`. Any missing key, out-of-range index,
//! `null` or non-traversable value along the way yields the caller's default.

use serde::Serialize;
use serde_json::Value;

/// Walk `path` through `value`, returning `None` when any segment is missing.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };

        if current.is_null() {
            return None;
        }
    }

    Some(current)
}

/// Read a string at `path`, falling back to `default` when absent or not a string.
pub fn get_str_or<'a>(value: &'a Value, path: &str, default: &'a str) -> &'a str {
    get_path(value, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
}

/// Same as [`get_path`] for any serializable value, e.g. a struct with named fields.
pub fn get_or<T: Serialize>(value: &T, path: &str, default: Value) -> Value {
    serde_json::to_value(value)
        .ok()
        .and_then(|tree| get_path(&tree, path).cloned())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn proceeding() -> Value {
        json!({
            "numero_cnj": "0000001-02.2023.5.02.0001",
            "fontes": [
                { "area": "Trabalhista", "sigla": "TRT2" },
                { "area": "Cível" }
            ],
            "estado_origem": null
        })
    }

    #[test]
    fn test_object_and_index_segments() {
        let p = proceeding();
        assert_eq!(get_path(&p, "fontes.0.area"), Some(&json!("Trabalhista")));
        assert_eq!(get_path(&p, "fontes.1.area"), Some(&json!("Cível")));
        assert_eq!(get_str_or(&p, "numero_cnj", "-"), "0000001-02.2023.5.02.0001");
    }

    #[test]
    fn test_missing_segments_fall_back() {
        let p = proceeding();
        assert_eq!(get_str_or(&p, "fontes.5.area", "unknown"), "unknown");
        assert_eq!(get_str_or(&p, "fontes.0.capa.area", "unknown"), "unknown");
        assert_eq!(get_str_or(&p, "partes.0.nome", "unknown"), "unknown");
        assert_eq!(get_str_or(&p, "fontes.first.area", "unknown"), "unknown");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let p = proceeding();
        assert!(get_path(&p, "estado_origem").is_none());
        assert_eq!(get_str_or(&p, "estado_origem.sigla", "?"), "?");
    }

    #[test]
    fn test_non_traversable_value() {
        let p = proceeding();
        assert!(get_path(&p, "numero_cnj.0").is_none());
        assert!(get_path(&json!(42), "anything").is_none());
    }

    #[test]
    fn test_non_string_uses_default() {
        let p = json!({ "fontes": [{ "area": 7 }] });
        assert_eq!(get_str_or(&p, "fontes.0.area", "unknown"), "unknown");
    }

    #[test]
    fn test_numeric_key_on_object() {
        let p = json!({ "0": { "area": "Trabalhista" } });
        assert_eq!(get_str_or(&p, "0.area", "unknown"), "Trabalhista");
    }

    #[test]
    fn test_get_or_on_struct() {
        #[derive(Serialize)]
        struct Party {
            nome: Option<String>,
            documentos: Vec<String>,
        }

        let party = Party {
            nome: Some("ACME LTDA".to_string()),
            documentos: vec!["11222333000181".to_string()],
        };
        assert_eq!(get_or(&party, "nome", json!("N/A")), json!("ACME LTDA"));
        assert_eq!(get_or(&party, "documentos.0", json!("")), json!("11222333000181"));

        let anonymous = Party { nome: None, documentos: vec![] };
        assert_eq!(get_or(&anonymous, "nome", json!("N/A")), json!("N/A"));
        assert_eq!(get_or(&anonymous, "documentos.0", json!("")), json!(""));
    }
}
