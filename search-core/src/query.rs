/// Flat, ordered key/value set handed to navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    /// Adds the pair only when `value` has content.
    pub fn push_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.push(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_non_empty_skips_empty() {
        let mut params = QueryParams::new();
        params.push_non_empty("date", "");
        params.push("location", "");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("location"), Some(""));
        assert_eq!(params.get("date"), None);
    }

    #[test]
    fn test_query_string_is_encoded_in_order() {
        let mut params = QueryParams::new();
        params.push("location", "Roma, Lazio");
        params.push("time", "20:30");
        params.push("bagsS", "0");
        assert_eq!(
            params.to_query_string(),
            "location=Roma%2C%20Lazio&time=20%3A30&bagsS=0"
        );
    }
}
