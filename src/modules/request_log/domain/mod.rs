use std::net::IpAddr;

pub const USER_AGENT_MAX_CHARS: usize = 500;
pub const UNKNOWN_IP: &str = "0.0.0.0";

const EXCLUDED_PREFIXES: [&str; 6] = [
    "/admin/",
    "/static/",
    "/media/",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
];

const EXCLUDED_EXTENSIONS: [&str; 13] = [
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".ico", ".svg", ".woff", ".woff2", ".ttf",
    ".eot", ".map",
];

/// Proxy headers consulted for the client address, in priority order.
pub const CLIENT_IP_HEADERS: [&str; 6] = [
    "x-forwarded-for",
    "x-real-ip",
    "x-forwarded",
    "x-cluster-client-ip",
    "forwarded-for",
    "forwarded",
];

/// Asset and admin paths are not audited.
pub fn should_log(path: &str) -> bool {
    let path = path.to_ascii_lowercase();

    !EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p))
        && !EXCLUDED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// First parseable address from the proxy headers (first comma-separated
/// entry of each), then the peer address, then `0.0.0.0`.
pub fn client_ip<'a, F>(header: F, peer: Option<IpAddr>) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    CLIENT_IP_HEADERS
        .iter()
        .filter_map(|name| header(name))
        .filter_map(|value| value.split(',').next())
        .map(str::trim)
        .find(|candidate| candidate.parse::<IpAddr>().is_ok())
        .map(str::to_string)
        .or_else(|| peer.map(|ip| ip.to_string()))
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}

pub fn truncate_user_agent(raw: &str) -> String {
    raw.chars().take(USER_AGENT_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn headers(map: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<&'static str> {
        move |name| map.get(name).copied()
    }

    #[test]
    fn static_and_admin_paths_are_skipped() {
        for path in [
            "/admin/login/",
            "/static/site.css",
            "/favicon.ico",
            "/docs/app.JS",
            "/fonts/inter.woff2",
        ] {
            assert!(!should_log(path), "{path} should be skipped");
        }

        for path in ["/", "/api/cvs/", "/cv/1/pdf/", "/logs/"] {
            assert!(should_log(path), "{path} should be logged");
        }
    }

    #[test]
    fn forwarded_for_takes_first_entry() {
        let ip = client_ip(
            headers(hashmap! { "x-forwarded-for" => "203.0.113.7, 10.0.0.1" }),
            None,
        );
        assert_eq!(ip, "203.0.113.7");
    }

    #[test]
    fn invalid_header_values_fall_through() {
        let ip = client_ip(
            headers(hashmap! {
                "x-forwarded-for" => "unknown",
                "x-real-ip" => "198.51.100.4",
            }),
            None,
        );
        assert_eq!(ip, "198.51.100.4");
    }

    #[test]
    fn peer_then_default() {
        let peer: IpAddr = "127.0.0.1".parse().unwrap();
        assert_eq!(client_ip(headers(hashmap! {}), Some(peer)), "127.0.0.1");
        assert_eq!(client_ip(headers(hashmap! {}), None), UNKNOWN_IP);
    }

    #[test]
    fn user_agent_is_capped() {
        assert_eq!(truncate_user_agent(&"a".repeat(800)).chars().count(), 500);
    }
}
