pub mod link_resolver;

pub use self::link_resolver::HttpLinkResolver;
