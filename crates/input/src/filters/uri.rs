//! HTTP URI filters

use url::{Host, Url};

use crate::foundation::{Filter, Filtered, Param, ParamError, ids};
use crate::validators::HostResolver;

/// Parses `input` as an absolute `http`/`https` URI with a host.
pub(crate) fn parse_http_uri(input: &str) -> Option<Url> {
    let url = Url::parse(input.trim()).ok()?;
    let http = matches!(url.scheme(), "http" | "https");
    (http && url.host().is_some()).then_some(url)
}

/// Whether the host of `url` resolves. IP literals always do.
pub(crate) fn host_resolves<R: HostResolver + ?Sized>(resolver: &R, url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => {
            resolver.resolves(domain, url.port_or_known_default().unwrap_or(80))
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

fn read_http_uri(param: &Param) -> Filtered<Url> {
    let Some(raw) = param.scalar() else {
        return if param.is_null() {
            Filtered::none()
        } else {
            Filtered::error(ParamError::new(ids::HTTP_URI_INCORRECT))
        };
    };
    if raw.trim().is_empty() {
        return Filtered::none();
    }
    parse_http_uri(&raw).map_or_else(
        || Filtered::error(ParamError::new(ids::HTTP_URI_INCORRECT)),
        Filtered::ok,
    )
}

/// Reads an absolute `http` or `https` URI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpUriFilter;

impl Filter for HttpUriFilter {
    type Output = Url;

    fn apply(&self, param: &Param) -> Filtered<Url> {
        read_http_uri(param)
    }
}

/// Reads an `http`/`https` URI whose host resolves.
///
/// Malformed input is `HTTP_URI_INCORRECT`; a well-formed URI whose host
/// does not resolve is `HTTP_URI_NOT_AVAILABLE`.
#[derive(Debug, Clone, Default)]
pub struct ExistingHttpUriFilter<R> {
    resolver: R,
}

impl<R: HostResolver> ExistingHttpUriFilter<R> {
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: HostResolver> Filter for ExistingHttpUriFilter<R> {
    type Output = Url;

    fn apply(&self, param: &Param) -> Filtered<Url> {
        read_http_uri(param).and_then(|url| {
            if host_resolves(&self.resolver, &url) {
                Filtered::ok(url)
            } else {
                Filtered::error(ParamError::new(ids::HTTP_URI_NOT_AVAILABLE))
            }
        })
    }
}
