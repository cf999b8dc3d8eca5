use ntex::web;

/// Configures the WATI webhook routes.
///
/// # Routes
/// - `POST /wati-webhook/{token}` - webhook receiver
pub fn wati(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/wati-webhook").service(super::wati::receive));
}
