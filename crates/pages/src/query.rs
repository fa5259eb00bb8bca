/// Decoded `?key=value&…` parameters, in order.
///
/// Follows `URLSearchParams`: `+` is a space, the first occurrence of a key
/// wins on lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageQuery {
    params: Vec<(String, String)>,
}

impl PageQuery {
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let params = search
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            })
            .collect();
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn category(&self) -> Option<&str> {
        self.get("category")
    }

    /// Trimmed `id`; blank counts as absent.
    pub fn id(&self) -> Option<&str> {
        self.get("id").map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Invalid UTF-8 after percent-decoding becomes U+FFFD.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Which script entry the page asks for via `<body data-page=…>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageKind {
    Collection,
    Detail,
    Home,
}

impl PageKind {
    pub fn from_data_page(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "collection" => Some(PageKind::Collection),
            "detail" => Some(PageKind::Detail),
            "home" | "index" => Some(PageKind::Home),
            _ => None,
        }
    }
}
