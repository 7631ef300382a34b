pub mod app_config;
pub mod cards;
pub mod categories;
pub mod config;
pub mod display;
pub mod documents;
pub mod filters;
pub mod href;
pub mod navigation;
pub mod products;
pub mod query;
pub mod site;

pub use app_config::{AppConfig, Environment};
pub use cards::{results_summary, CardImage, ProductCard, ResultsSummary};
pub use categories::{
    Category, CategoryLink, FeaturedCategoriesBlock, FeaturedCategoriesView, FeaturedCategory,
};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use display::{resolve, DisplayState, StockStatus, LOW_STOCK_THRESHOLD};
pub use documents::{DocumentId, Media, Relation};
pub use filters::{FilterPanel, FilterPanelState};
pub use href::{category_href, product_href, search_href};
pub use navigation::{is_nav_active, Link, NavItem, NavLink, NavigationGlobal};
pub use products::{GalleryItem, ProductRecord, VariantRecord};
pub use query::{
    compile, CompiledQuery, Condition, FilterParams, Operand, Operator, Predicate, SearchParams,
};
pub use site::SiteConfig;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
