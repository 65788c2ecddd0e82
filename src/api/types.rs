use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deserializers::{empty_string_as_none, null_as_default};

/// Party matched by the API for the queried document (`envolvido_encontrado`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envolvido {
    /// Company name
    #[serde(default)]
    pub nome: Option<String>,
    /// Number of proceedings the API attributes to this party
    #[serde(default)]
    pub quantidade_processos: Option<u64>,
    /// Person type ("FISICA" / "JURIDICA")
    #[serde(default)]
    pub tipo_pessoa: Option<String>,
}

/// One page of proceedings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProceedingsPage {
    /// Proceeding records, kept as opaque JSON
    pub items: Vec<Value>,
    /// Continuation link, `None` on the last page
    pub next_url: Option<String>,
}

impl ProceedingsPage {
    pub fn new(items: Vec<Value>, next_url: Option<String>) -> Self {
        Self { items, next_url }
    }

    /// Whether another page can be fetched after this one
    pub fn has_more_pages(&self) -> bool {
        self.next_url.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of the initial lookup by CNPJ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CnpjSearch {
    /// Matched party, `None` when the API found nobody for the document
    pub envolvido: Option<Envolvido>,
    /// First page of proceedings
    pub page: ProceedingsPage,
}

/// Wire format of `GET /envolvido/processos`
#[derive(Debug, Deserialize)]
pub(crate) struct RawProceedingsResponse {
    #[serde(default)]
    pub envolvido_encontrado: Option<Envolvido>,
    #[serde(default, alias = "data", deserialize_with = "null_as_default")]
    pub items: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: RawLinks,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawLinks {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub next: Option<String>,
}

impl RawProceedingsResponse {
    pub fn into_search(self) -> CnpjSearch {
        CnpjSearch {
            envolvido: self.envolvido_encontrado,
            page: ProceedingsPage::new(self.items, self.links.next),
        }
    }

    pub fn into_page(self) -> ProceedingsPage {
        ProceedingsPage::new(self.items, self.links.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_page() {
        let raw: RawProceedingsResponse = serde_json::from_str(
            r#"{
                "envolvido_encontrado": {"nome": "ACME LTDA", "quantidade_processos": 3, "tipo_pessoa": "JURIDICA"},
                "items": [{"numero_cnj": "1"}, {"numero_cnj": "2"}],
                "links": {"next": "https://api.escavador.com/api/v2/envolvido/processos?cursor=abc"},
                "paginator": {"per_page": 2}
            }"#,
        )
        .unwrap();

        let search = raw.into_search();
        assert_eq!(search.envolvido.as_ref().and_then(|e| e.nome.as_deref()), Some("ACME LTDA"));
        assert_eq!(search.page.len(), 2);
        assert!(search.page.has_more_pages());
    }

    #[test]
    fn test_parse_last_page_without_links() {
        let raw: RawProceedingsResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        let page = raw.into_page();
        assert!(page.is_empty());
        assert!(!page.has_more_pages());
    }

    #[test]
    fn test_parse_null_fields() {
        let raw: RawProceedingsResponse =
            serde_json::from_str(r#"{"envolvido_encontrado": null, "items": null, "links": null}"#).unwrap();
        let search = raw.into_search();
        assert!(search.envolvido.is_none());
        assert!(search.page.is_empty());
        assert!(!search.page.has_more_pages());
    }

    #[test]
    fn test_data_alias() {
        let raw: RawProceedingsResponse =
            serde_json::from_str(r#"{"data": [{"numero_cnj": "1"}], "links": {"next": ""}}"#).unwrap();
        let page = raw.into_page();
        assert_eq!(page.len(), 1);
        assert!(!page.has_more_pages());
    }
}
