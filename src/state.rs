//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Link service over whichever store the server was started with.
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    /// Fixed origin for generated short URLs; `None` means use the request's `Host`.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(link_service: Arc<DynLinkService>, public_base_url: Option<String>) -> Self {
        Self {
            link_service,
            public_base_url,
        }
    }

    /// Builds state around a bare repository with default service settings.
    pub fn with_repository(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self::new(Arc::new(LinkService::new(link_repository)), None)
    }
}
