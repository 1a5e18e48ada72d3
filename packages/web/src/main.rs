use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, NotificationsProvider};
use views::{Dashboard, Login, Register, ResetPassword, Settings, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/reset-password")]
    ResetPassword {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to run session migrations");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app and add the session layer to all routes
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    // Theme context: None = system, Some("dark"), Some("light")
    let mut theme: ui::ThemeSignal = use_context_provider(|| Signal::new(Option::<String>::None));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Authenticated shell: navbar and notification feed around the dashboard
/// routes.
#[component]
fn Shell() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Anonymous visitors go to login once the session check settles
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    let is_supervisor = auth()
        .user
        .as_ref()
        .map(|u| u.role == api::models::user::ROLE_SUPERVISOR)
        .unwrap_or(false);

    rsx! {
        NotificationsProvider {
            Navbar {
                Link { class: "navbar-link", to: Route::Dashboard {}, "Dashboard" }
                if is_supervisor {
                    Link { class: "navbar-link", to: Route::Users {}, "Users" }
                }
                Link { class: "navbar-link", to: Route::Settings {}, "Settings" }
            }
            main {
                class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` based on auth state.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().user.is_some() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
