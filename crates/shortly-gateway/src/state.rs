use shortly_core::RecordStore;
use shortly_resolver::ResolverService;
use shortly_shortener::ShortenerService;
use std::sync::Arc;

/// Shared application state: both services over one store, plus the
/// public base URL used to render shortened links.
pub struct AppState<S> {
    pub shortener: ShortenerService<S>,
    pub resolver: ResolverService<S>,
    pub public_base_url: String,
}

impl<S: RecordStore> AppState<S> {
    pub fn new(store: Arc<S>, public_base_url: impl Into<String>) -> Self {
        Self {
            shortener: ShortenerService::new(Arc::clone(&store)),
            resolver: ResolverService::new(store),
            public_base_url: public_base_url.into(),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            shortener: self.shortener.clone(),
            resolver: self.resolver.clone(),
            public_base_url: self.public_base_url.clone(),
        }
    }
}
