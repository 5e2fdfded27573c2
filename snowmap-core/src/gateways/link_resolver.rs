use snowmap_entities::url::Url;

/// Reveals the final destination of a redirecting map link
/// (e.g. a link shortener or a share redirect).
pub trait LinkResolverGateway {
    /// Follow HTTP redirects without downloading a response body and
    /// return the resolved URL.
    ///
    /// All transport failures collapse to `None`; the distinction only
    /// matters for logging, which is the implementor's concern.
    fn resolve_target_url(&self, url: &Url) -> Option<Url>;
}
