use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::engine::EngineError;
use domain::services::{AppProvisioner, CustomerService, GroupService, UserService};
use persistence::repositories::{PgAppStore, PgCustomerStore, PgGroupStore, PgUserStore};

use crate::config::Config;
use crate::routes::{apps, customers, groups, health, users};
use crate::services::DockerClient;

pub type Groups = GroupService<PgGroupStore>;
pub type Users = UserService<PgGroupStore, PgUserStore>;
pub type Customers = CustomerService<PgCustomerStore>;
pub type Apps = AppProvisioner<PgAppStore, DockerClient>;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub groups: Groups,
    pub users: Users,
    pub customers: Customers,
    pub apps: Apps,
    pub docker: DockerClient,
}

pub fn create_app(config: Config, pool: PgPool) -> Result<Router, EngineError> {
    let config = Arc::new(config);

    let docker = DockerClient::new(&config.docker)?;

    let state = AppState {
        pool: pool.clone(),
        config: config.clone(),
        groups: GroupService::new(PgGroupStore::new(pool.clone())),
        users: UserService::new(
            GroupService::new(PgGroupStore::new(pool.clone())),
            PgUserStore::new(pool.clone()),
        ),
        customers: CustomerService::new(PgCustomerStore::new(pool.clone())),
        apps: AppProvisioner::new(PgAppStore::new(pool), docker.clone()),
        docker,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        // Group routes (v1)
        .route("/api/v1/groups", get(groups::list_groups).post(groups::create_group))
        .route(
            "/api/v1/groups/:id",
            get(groups::get_group)
                .put(groups::update_group)
                .delete(groups::delete_group),
        )
        .route("/api/v1/groups/:id/restore", post(groups::restore_group))
        .route("/api/v1/groups/by-name/:name", get(groups::get_group_by_name))
        // User routes (v1)
        .route("/api/v1/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/v1/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/v1/users/:id/restore", post(users::restore_user))
        .route(
            "/api/v1/users/by-username/:username",
            get(users::get_user_by_username),
        )
        .route("/api/v1/users/by-email/:email", get(users::get_user_by_email))
        .route(
            "/api/v1/users/by-identity/:identity",
            get(users::get_user_by_identity),
        )
        // Customer routes (v1)
        .route(
            "/api/v1/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/v1/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route(
            "/api/v1/customers/:id/restore",
            post(customers::restore_customer),
        )
        // App provisioning routes (v1)
        .route("/api/v1/apps", get(apps::list_apps).post(apps::create_app))
        .route("/api/v1/apps/docker/info", get(apps::docker_info));

    // Public health routes
    let health_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live));

    let router = Router::new()
        .merge(health_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}
