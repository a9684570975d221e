//! Form parameters for Slack API methods

use url::form_urlencoded;

const TOKEN_KEY: &str = "token";

/// Ordered form parameters for one request.
///
/// Always carries `token`. Setting a key that is already present replaces
/// its value, so each key is encoded once.
#[derive(Clone, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new(token: &str) -> Self {
        Self {
            pairs: vec![(TOKEN_KEY.to_string(), token.to_string())],
        }
    }

    /// Set `key` to `value`, replacing any earlier value.
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Set `key` only when a value is supplied.
    pub fn set_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key/value pairs in insertion order; `token` comes first.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// `application/x-www-form-urlencoded` rendering of [`pairs`](Self::pairs),
    /// byte-for-byte what reqwest's `form()` sends.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Encoded form with the token value masked, for logging.
    pub(crate) fn redacted(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            if k == TOKEN_KEY {
                out.append_pair(k, "REDACTED");
            } else {
                out.append_pair(k, v);
            }
        }
        out.finish()
    }
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.redacted())
    }
}
