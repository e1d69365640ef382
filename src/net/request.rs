use crate::net::{Header, Verb};

/// A request as handed to the [`Transport`](crate::net::Transport).
///
/// This mirrors the setter-style request object most engine HTTP modules
/// expose: URL, verb, headers and an optional string body.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    url: String,
    verb: Verb,
    headers: Vec<Header>,
    body: Option<String>,
}

impl Default for HttpRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            verb: Verb::Get,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl HttpRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn set_verb(&mut self, verb: Verb) {
        self.verb = verb;
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Returns the value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.has_name(name))
            .map(|h| h.value.as_str())
    }

    /// Sets a header. An existing header with the same name keeps its
    /// position and gets the new value; otherwise the header is appended.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.headers.iter_mut().find(|h| h.has_name(&name)) {
            Some(existing) => existing.value = value,
            None => self.headers.push(Header { name, value }),
        }
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn set_content_as_string(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_header_appends_in_order() {
        let mut req = HttpRequest::new();
        req.set_header("A", "1");
        req.set_header("B", "2");
        req.set_header("C", "3");

        let names: Vec<_> = req.headers().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn set_header_replaces_same_name_in_place() {
        let mut req = HttpRequest::new();
        req.set_header("User-Agent", "first");
        req.set_header("Accept", "application/json");
        req.set_header("user-agent", "second");

        assert_eq!(req.headers().len(), 2);
        assert_eq!(req.headers()[0].value, "second");
        assert_eq!(req.header("USER-AGENT"), Some("second"));
    }

    #[test]
    fn defaults_are_empty_get() {
        let req = HttpRequest::new();
        assert_eq!(req.url(), "");
        assert_eq!(req.verb(), Verb::Get);
        assert!(req.headers().is_empty());
        assert!(req.body().is_none());
    }
}
