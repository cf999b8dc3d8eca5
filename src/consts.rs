pub const STOREFRONT_URL: &str = "https://owltlv.com";

/// WooCommerce gateway id for orders placed from chat; paid later via link
pub const PAYMENT_METHOD_ID: &str = "bacs";
pub const PAYMENT_METHOD_TITLE: &str = "Direct Bank Transfer";

/// Name of the WATI custom parameter carrying the JSON-encoded cart
pub const CART_ITEMS_PARAM: &str = "last_cart_items";

/// Browser-style agent sent on WooCommerce calls; stores behind bot
/// filters reject the default programmatic one
pub const OUTBOUND_USER_AGENT: &str = "Mozilla/5.0";
