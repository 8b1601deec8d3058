//! The API endpoint URIs.

/// The route to create and list companies.
pub const COMPANIES: &str = "/companies";
/// The route to get, update, and delete a single company.
pub const COMPANY: &str = "/companies/{company_id}";
/// The route to create and list users.
pub const USERS: &str = "/users";
/// The route to get, update, and delete a single user.
pub const USER: &str = "/users/{user_id}";
/// The route to create and list categories.
pub const CATEGORIES: &str = "/categories";
/// The route to get, update, and delete a single category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route to create and list subscriptions.
pub const SUBSCRIPTIONS: &str = "/subscriptions";
/// The route to get, update, and delete a single subscription.
pub const SUBSCRIPTION: &str = "/subscriptions/{subscription_id}";
