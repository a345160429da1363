/// The parts of `window.location` a pushed history URL is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLocation {
    /// Scheme with its trailing colon, as `Location.protocol` reports it.
    pub protocol: String,
    pub hostname: String,
    /// Empty when the browser uses the scheme's default port.
    pub port: String,
}

impl PageLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
            port: port.into(),
        }
    }

    fn default_port(&self) -> Option<&'static str> {
        match self.protocol.as_str() {
            "http:" => Some("80"),
            "https:" => Some("443"),
            _ => None,
        }
    }

    /// Absolute URL of the page showing `seeds_param`.
    pub fn history_url(&self, app_path: &str, seeds_param: &str) -> String {
        let port = if self.port.is_empty() || Some(self.port.as_str()) == self.default_port() {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        format!(
            "{}//{}{}{}?seeds={}",
            self.protocol, self.hostname, port, app_path, seeds_param
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_non_default_port() {
        let location = PageLocation::new("http:", "localhost", "50000");
        assert_eq!(
            location.history_url("/skyeng/", "%5B%5D"),
            "http://localhost:50000/skyeng/?seeds=%5B%5D"
        );
    }

    #[test]
    fn drops_default_ports() {
        for (protocol, port) in [("http:", ""), ("http:", "80"), ("https:", "443"), ("https:", "")] {
            let location = PageLocation::new(protocol, "example.org", port);
            assert_eq!(
                location.history_url("/skyeng/", "x"),
                format!("{}//example.org/skyeng/?seeds=x", protocol)
            );
        }
    }

    #[test]
    fn port_80_is_kept_over_https() {
        let location = PageLocation::new("https:", "example.org", "80");
        assert_eq!(
            location.history_url("/skyeng/", "x"),
            "https://example.org:80/skyeng/?seeds=x"
        );
    }
}
