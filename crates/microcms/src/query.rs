/// Optional query parameters understood by the content API.
///
/// Only parameters that were set end up in the request. Values are sent
/// verbatim; the API is the one that validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub draft_key: Option<String>,
    pub filters: Option<String>,
    pub fields: Option<String>,
    pub ids: Option<String>,
    pub orders: Option<String>,
    pub q: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub depth: Option<u8>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preview token for unpublished content. `None` leaves the parameter out.
    pub fn draft_key(mut self, key: Option<String>) -> Self {
        self.draft_key = key;
        self
    }

    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    pub fn orders(mut self, orders: impl Into<String>) -> Self {
        self.orders = Some(orders.into());
        self
    }

    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Parameter pairs in the API's naming, in a stable order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let text = [
            ("draftKey", &self.draft_key),
            ("filters", &self.filters),
            ("fields", &self.fields),
            ("ids", &self.ids),
            ("orders", &self.orders),
            ("q", &self.q),
        ];
        for (name, value) in text {
            if let Some(value) = value {
                pairs.push((name, value.clone()));
            }
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(depth) = self.depth {
            pairs.push(("depth", depth.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(Query::new().to_pairs().is_empty());
    }

    #[test]
    fn test_absent_draft_key_is_left_out() {
        let query = Query::new().draft_key(None);
        assert!(query.to_pairs().is_empty());
    }

    #[test]
    fn test_filters_pass_through_verbatim() {
        let query = Query::new().filters("category[equals]tech");
        assert_eq!(
            query.to_pairs(),
            vec![("filters", "category[equals]tech".to_string())]
        );
    }

    #[test]
    fn test_pairs_order() {
        let query = Query::new()
            .limit(10)
            .draft_key(Some("secret".to_string()))
            .orders("-publishedAt")
            .depth(2);

        assert_eq!(
            query.to_pairs(),
            vec![
                ("draftKey", "secret".to_string()),
                ("orders", "-publishedAt".to_string()),
                ("limit", "10".to_string()),
                ("depth", "2".to_string()),
            ]
        );
    }
}
