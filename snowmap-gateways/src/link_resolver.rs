use std::time::Duration;

use snowmap_core::gateways::link_resolver::LinkResolverGateway;
use snowmap_entities::url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_REDIRECTS: usize = 10;

/// Resolves shortened or redirecting map links by following
/// HTTP redirects with a HEAD request.
pub struct HttpLinkResolver {
    client: reqwest::blocking::Client,
}

impl HttpLinkResolver {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl LinkResolverGateway for HttpLinkResolver {
    fn resolve_target_url(&self, url: &Url) -> Option<Url> {
        match self.client.head(url.as_str()).send() {
            Ok(response) => Some(response.url().clone()),
            Err(err) => {
                log::debug!("Failed to resolve target of {url}: {err}");
                None
            }
        }
    }
}
