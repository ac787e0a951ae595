/// Application service wiring every port the domain depends on.
///
/// Each domain module implements its service trait for this struct, so the
/// HTTP layer only ever holds a single handle.
#[derive(Clone)]
pub struct Service<U, H, S, V, HC> {
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) session_repository: S,
    pub(crate) vision_client: V,
    pub(crate) health_check_repository: HC,
}

impl<U, H, S, V, HC> Service<U, H, S, V, HC> {
    pub fn new(
        user_repository: U,
        hasher_repository: H,
        session_repository: S,
        vision_client: V,
        health_check_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            hasher_repository,
            session_repository,
            vision_client,
            health_check_repository,
        }
    }
}
