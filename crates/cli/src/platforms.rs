//! Registry of the supported social media platforms.
//!
//! Platforms are looked up by the id given with `--platform` when signing
//! and by the host of the post URL when verifying.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use itertools::Itertools;

/// A supported social media platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Short id, used as the value of `--platform`.
    pub id: String,
    /// Human readable name.
    pub name: String,
    /// Hosts serving the platform's posts.
    pub hosts: Vec<String>,
}

impl Platform {
    #[must_use]
    pub fn new(id: &str, name: &str, hosts: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hosts: hosts.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns `true` if `host` is one of the platform's hosts or a
    /// subdomain of one.
    #[must_use]
    pub fn serves(&self, host: &str) -> bool {
        self.hosts.iter().any(|known| {
            host.eq_ignore_ascii_case(known)
                || host
                    .to_ascii_lowercase()
                    .ends_with(&format!(".{}", known.to_ascii_lowercase()))
        })
    }
}

impl Display for Platform {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} (`{}`)", self.name, self.id)
    }
}

/// Platforms ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platforms {
    platforms: IndexMap<String, Platform>,
}

impl Platforms {
    #[must_use]
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self {
            platforms: platforms
                .into_iter()
                .sorted_by(|a, b| a.id.cmp(&b.id))
                .map(|platform| (platform.id.clone(), platform))
                .collect(),
        }
    }

    /// The platforms the signer supports.
    #[must_use]
    pub fn supported() -> Self {
        Self::new(vec![
            Platform::new("threads", "Threads", &["threads.net", "threads.com"]),
            Platform::new("x", "X.com", &["x.com", "twitter.com"]),
        ])
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Platform> {
        self.platforms.get(id)
    }

    /// Finds the platform serving the post at `url`.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&Platform> {
        let host = host_of(url)?;
        self.iter().find(|platform| platform.serves(host))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    /// Comma separated ids, for error messages.
    #[must_use]
    pub fn ids(&self) -> String {
        self.platforms.keys().join(", ")
    }
}

/// Extracts the host of a URL, e.g. `x.com` from `https://x.com/a/status/1`.
///
/// The scheme is optional; user info and port are dropped.
#[must_use]
pub fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_and_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host_and_port
        .split_once(':')
        .map_or(host_and_port, |(host, _)| host);

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
