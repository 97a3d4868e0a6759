use crate::catalog::models::ViewId;
use crate::catalog::store::CatalogState;

/// Resolve which surface renders for the current state.
///
/// A single render-time guard: the admin surface requires
/// authentication, and an unauthenticated request for it resolves to
/// the login surface. The stored `current_view` is never rewritten.
pub fn resolve_view(state: &CatalogState) -> ViewId {
    match state.current_view {
        ViewId::Admin if !state.is_authenticated => ViewId::Login,
        view => view,
    }
}
