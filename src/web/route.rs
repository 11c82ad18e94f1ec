//! Route table - pure domain model, no DOM or web_sys dependencies.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Services,
    Store,
    Gallery,
    About,
    Contact,
    Quote,
    Terms,
    Privacy,
    AdminLogin,
    AdminDashboard,
    AdminProducts,
    AdminProductNew,
    AdminProductEdit(String),
    AdminServices,
    AdminServiceNew,
    AdminServiceEdit(String),
    AdminCategories,
    AdminGallery,
    AdminSettings,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["services"] => Self::Services,
            ["store"] => Self::Store,
            ["gallery"] => Self::Gallery,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["quote"] => Self::Quote,
            ["terms"] => Self::Terms,
            ["privacy"] => Self::Privacy,
            ["admin", "login"] => Self::AdminLogin,
            ["admin"] | ["admin", "dashboard"] => Self::AdminDashboard,
            ["admin", "products"] => Self::AdminProducts,
            ["admin", "products", "new"] => Self::AdminProductNew,
            ["admin", "products", id, "edit"] => Self::AdminProductEdit((*id).to_string()),
            ["admin", "services"] => Self::AdminServices,
            ["admin", "services", "new"] => Self::AdminServiceNew,
            ["admin", "services", id, "edit"] => Self::AdminServiceEdit((*id).to_string()),
            ["admin", "categories"] => Self::AdminCategories,
            ["admin", "gallery"] => Self::AdminGallery,
            ["admin", "settings"] => Self::AdminSettings,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Services => "/services".to_string(),
            Self::Store => "/store".to_string(),
            Self::Gallery => "/gallery".to_string(),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Quote => "/quote".to_string(),
            Self::Terms => "/terms".to_string(),
            Self::Privacy => "/privacy".to_string(),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::AdminProducts => "/admin/products".to_string(),
            Self::AdminProductNew => "/admin/products/new".to_string(),
            Self::AdminProductEdit(id) => format!("/admin/products/{id}/edit"),
            Self::AdminServices => "/admin/services".to_string(),
            Self::AdminServiceNew => "/admin/services/new".to_string(),
            Self::AdminServiceEdit(id) => format!("/admin/services/{id}/edit"),
            Self::AdminCategories => "/admin/categories".to_string(),
            Self::AdminGallery => "/admin/gallery".to_string(),
            Self::AdminSettings => "/admin/settings".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Guard predicate: every admin route except the login screen needs a
    /// confirmed session.
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::AdminLogin => false,
            Self::AdminDashboard
            | Self::AdminProducts
            | Self::AdminProductNew
            | Self::AdminProductEdit(_)
            | Self::AdminServices
            | Self::AdminServiceNew
            | Self::AdminServiceEdit(_)
            | Self::AdminCategories
            | Self::AdminGallery
            | Self::AdminSettings => true,
            _ => false,
        }
    }

    /// Collapses nested admin routes onto the sidebar section they belong
    /// to (`/admin/products/p1/edit` highlights "Products").
    pub fn admin_section(&self) -> Option<Self> {
        match self {
            Self::AdminDashboard => Some(Self::AdminDashboard),
            Self::AdminProducts | Self::AdminProductNew | Self::AdminProductEdit(_) => {
                Some(Self::AdminProducts)
            }
            Self::AdminServices | Self::AdminServiceNew | Self::AdminServiceEdit(_) => {
                Some(Self::AdminServices)
            }
            Self::AdminCategories => Some(Self::AdminCategories),
            Self::AdminGallery => Some(Self::AdminGallery),
            Self::AdminSettings => Some(Self::AdminSettings),
            _ => None,
        }
    }

    /// An already-authenticated admin has no business on the login page.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::AdminLogin)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::AdminLogin
    }

    pub fn auth_success_redirect() -> Self {
        Self::AdminDashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths_parse() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/store"), AppRoute::Store);
        assert_eq!(AppRoute::from_path("/gallery"), AppRoute::Gallery);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn admin_paths_parse_including_params() {
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::AdminDashboard);
        assert_eq!(AppRoute::from_path("/admin/login"), AppRoute::AdminLogin);
        assert_eq!(
            AppRoute::from_path("/admin/products/p42/edit"),
            AppRoute::AdminProductEdit("p42".into())
        );
        assert_eq!(
            AppRoute::from_path("/admin/services/new"),
            AppRoute::AdminServiceNew
        );
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Quote,
            AppRoute::AdminProducts,
            AppRoute::AdminProductEdit("abc".into()),
            AppRoute::AdminSettings,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn guard_covers_every_admin_route_except_login() {
        assert!(!AppRoute::AdminLogin.requires_auth());
        assert!(AppRoute::AdminDashboard.requires_auth());
        assert!(AppRoute::AdminProductEdit("x".into()).requires_auth());
        assert!(AppRoute::AdminGallery.requires_auth());
        assert!(!AppRoute::Store.requires_auth());
    }

    #[test]
    fn nested_admin_routes_collapse_to_their_section() {
        assert_eq!(
            AppRoute::AdminProductEdit("p1".into()).admin_section(),
            Some(AppRoute::AdminProducts)
        );
        assert_eq!(
            AppRoute::AdminServiceNew.admin_section(),
            Some(AppRoute::AdminServices)
        );
        assert_eq!(
            AppRoute::AdminSettings.admin_section(),
            Some(AppRoute::AdminSettings)
        );
        assert_eq!(AppRoute::Store.admin_section(), None);
        assert_eq!(AppRoute::AdminLogin.admin_section(), None);
    }

    #[test]
    fn login_redirects_away_when_authenticated() {
        assert!(AppRoute::AdminLogin.should_redirect_when_authenticated());
        assert!(!AppRoute::AdminDashboard.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::AdminLogin);
    }
}
