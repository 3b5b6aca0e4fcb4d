//! Query-string model for BatteryIncluded requests.
//!
//! The API reads bracketed keys: arrays go out as repeated `key[]=value`
//! pairs and nested maps as `key[sub]=value`. [`Query::to_pairs`] flattens
//! a [`Query`] into that form so it can be handed to `reqwest`.

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    List(Vec<String>),
    Map(Query),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Decimal(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        QueryValue::List(value)
    }
}

impl From<Query> for QueryValue {
    fn from(value: Query) -> Self {
        QueryValue::Map(value)
    }
}

/// Ordered set of query parameters. Setting an existing key replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Sets `key` only when a value is present; absent values are omitted
    /// from the request entirely.
    pub fn set_opt<V: Into<QueryValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    pub fn extend(&mut self, other: Query) -> &mut Self {
        for (key, value) in other.params {
            self.set(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for (key, value) in &self.params {
            flatten_into(key, value, &mut out);
        }
        out
    }
}

fn flatten_into(key: &str, value: &QueryValue, out: &mut Vec<(String, String)>) {
    match value {
        QueryValue::Text(s) => out.push((key.to_string(), s.clone())),
        QueryValue::Integer(n) => out.push((key.to_string(), n.to_string())),
        QueryValue::Decimal(f) => out.push((key.to_string(), f.to_string())),
        QueryValue::List(items) => {
            let list_key = if key.ends_with("[]") {
                key.to_string()
            } else {
                format!("{key}[]")
            };
            for item in items {
                out.push((list_key.clone(), item.clone()));
            }
        }
        QueryValue::Map(nested) => {
            for (sub, value) in &nested.params {
                flatten_into(&format!("{key}[{sub}]"), value, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &Query) -> Vec<(String, String)> {
        query.to_pairs()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn scalars_serialize_as_plain_pairs() {
        let mut q = Query::new();
        q.set("q", "red shoes").set("page", 2i64).set("price", 12.5);
        assert_eq!(
            pairs(&q),
            vec![pair("q", "red shoes"), pair("page", "2"), pair("price", "12.5")]
        );
    }

    #[test]
    fn whole_decimals_print_without_fraction() {
        let mut q = Query::new();
        q.set("f[price][from]", 5.0);
        assert_eq!(pairs(&q), vec![pair("f[price][from]", "5")]);
    }

    #[test]
    fn nested_maps_use_bracketed_keys() {
        let mut locale = Query::new();
        locale.set("locale", "de-DE");
        let mut q = Query::new();
        q.set("v", locale);
        assert_eq!(pairs(&q), vec![pair("v[locale]", "de-DE")]);
    }

    #[test]
    fn lists_repeat_key_without_doubling_brackets() {
        let mut q = Query::new();
        q.set("f[color][]", vec!["red".to_string(), "blue".to_string()]);
        q.set("tags", vec!["a".to_string()]);
        assert_eq!(
            pairs(&q),
            vec![
                pair("f[color][]", "red"),
                pair("f[color][]", "blue"),
                pair("tags[]", "a"),
            ]
        );
    }

    #[test]
    fn empty_list_and_map_emit_nothing() {
        let mut q = Query::new();
        q.set("f[color][]", Vec::<String>::new());
        q.set("v", Query::new());
        assert!(pairs(&q).is_empty());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn set_replaces_and_set_opt_skips_none() {
        let mut q = Query::new();
        q.set("sort", "a").set("sort", "b");
        q.set_opt("missing", None::<&str>);
        assert_eq!(q.get("sort"), Some(&QueryValue::Text("b".into())));
        assert_eq!(q.keys().collect::<Vec<_>>(), vec!["sort"]);
    }

    #[test]
    fn extend_merges_other_query() {
        let mut a = Query::new();
        a.set("q", "x").set("page", 1i64);
        let mut b = Query::new();
        b.set("page", 3i64).set("per_page", 10i64);
        a.extend(b);
        assert_eq!(
            pairs(&a),
            vec![pair("q", "x"), pair("page", "3"), pair("per_page", "10")]
        );
    }
}
