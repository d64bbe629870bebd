//! Connection string inspection
//!
//! Supports formats:
//! * mongodb://[user[:password]@]host[:port][,host[:port]...][/database][?options]
//! * mongodb+srv://[user[:password]@]host[/database][?options]
//!
//! Parsing here never performs I/O. Full option parsing (and SRV lookup) is
//! left to the driver; this only extracts what is needed to reject obviously
//! unusable URIs early and to log them without credentials.

use crate::{Error, Result};

/// URI scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `mongodb://` with an explicit host list
    Standard,
    /// `mongodb+srv://` resolved through DNS SRV records
    Srv,
}

impl Scheme {
    fn prefix(&self) -> &'static str {
        match self {
            Scheme::Standard => "mongodb://",
            Scheme::Srv => "mongodb+srv://",
        }
    }
}

/// Parsed connection info
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    /// URI scheme
    pub scheme: Scheme,
    /// Hosts as written (`host[:port]`)
    pub hosts: Vec<String>,
    /// Default database from the URI path
    pub database: Option<String>,
    /// Username
    pub user: Option<String>,
    /// Whether a password was supplied
    pub has_password: bool,
    /// Raw query string, without the leading '?'
    pub query: Option<String>,
}

/// URI options whose values are credentials
const SECRET_OPTIONS: &[&str] = &[
    "tlsCertificateKeyFilePassword",
    "sslPEMKeyPassword",
    "authMechanismProperties",
];

/// Mask the values of credential-bearing options, keeping everything else
fn redact_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _))
                if SECRET_OPTIONS
                    .iter()
                    .any(|secret| key.eq_ignore_ascii_case(secret)) =>
            {
                format!("{}=****", key)
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Extract a query parameter value from a query string
fn parse_query_param(query_string: &str, param: &str) -> Option<String> {
    if query_string.is_empty() {
        return None;
    }

    let query = query_string.trim_start_matches('?');

    // MongoDB option names are case-insensitive
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key.eq_ignore_ascii_case(param) {
                return Some(value.to_string());
            }
        }
    }
    None
}

impl ConnectionInfo {
    /// Parse connection string
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Config("connection string is empty".into()));
        }

        let (scheme, rest) = if let Some(rest) = s.strip_prefix(Scheme::Srv.prefix()) {
            (Scheme::Srv, rest)
        } else if let Some(rest) = s.strip_prefix(Scheme::Standard.prefix()) {
            (Scheme::Standard, rest)
        } else {
            return Err(Error::Config(
                "connection string must start with mongodb:// or mongodb+srv://".into(),
            ));
        };

        let (rest, query) = match rest.split_once('?') {
            Some((r, q)) => (r, Some(q.to_string()).filter(|q| !q.is_empty())),
            None => (rest, None),
        };

        // Reserved characters in credentials must be percent-encoded, so the
        // first '/' always ends the authority
        let (authority, database) = match rest.split_once('/') {
            Some((a, db)) => (a, Some(db.to_string()).filter(|db| !db.is_empty())),
            None => (rest, None),
        };

        let (auth, host_list) = match authority.rsplit_once('@') {
            Some((auth, hosts)) => (Some(auth), hosts),
            None => (None, authority),
        };

        let (user, has_password) = match auth {
            Some(auth) => match auth.split_once(':') {
                Some((user, _)) => (Some(user.to_string()), true),
                None => (Some(auth.to_string()), false),
            },
            None => (None, false),
        };

        let hosts: Vec<String> = host_list
            .split(',')
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect();
        if hosts.is_empty() {
            return Err(Error::Config(
                "connection string must name at least one host".into(),
            ));
        }
        if scheme == Scheme::Srv && hosts.len() > 1 {
            return Err(Error::Config(
                "mongodb+srv:// connection strings accept exactly one host".into(),
            ));
        }

        Ok(Self {
            scheme,
            hosts,
            database,
            user,
            has_password,
            query,
        })
    }

    /// Look up a URI option (case-insensitive)
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query
            .as_deref()
            .and_then(|q| parse_query_param(q, name))
    }

    /// Render the URI with the password and secret options masked
    pub fn redacted(&self) -> String {
        let mut out = String::from(self.scheme.prefix());
        if let Some(ref user) = self.user {
            out.push_str(user);
            if self.has_password {
                out.push_str(":****");
            }
            out.push('@');
        }
        out.push_str(&self.hosts.join(","));
        if let Some(ref db) = self.database {
            out.push('/');
            out.push_str(db);
        }
        if let Some(ref query) = self.query {
            if self.database.is_none() {
                out.push('/');
            }
            out.push('?');
            out.push_str(&redact_query(query));
        }
        out
    }
}

impl std::fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.redacted())
    }
}
