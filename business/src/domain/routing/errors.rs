#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("routing.invalid_app_url")]
    InvalidAppUrl(#[from] url::ParseError),
    #[error("routing.app_url_not_base")]
    AppUrlNotBase,
}
