//! The server hosting the panel: renders the app, serves the session and static files

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use panel::app::*;
    use panel::server::signal_handler::{signal_handler, wait_for_shutdown, InShutdown};
    use tracing::{debug, error, info, warn};
    use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

    let config = match panel::server::config::Config::try_create() {
        Ok(x) => x,
        Err(e) => {
            panic!("Error reading config: {e}.");
        }
    };
    let config_arc = Arc::new(config);

    let my_crate_filter = EnvFilter::new("panel");
    let subscriber = tracing_subscriber::registry().with(my_crate_filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_line_number(true)
            .with_filter(config_arc.log_level),
    );
    tracing::subscriber::set_global_default(subscriber).expect("static tracing config");
    debug!("Tracing enabled.");
    for ignored in &config_arc.ignored_pages {
        warn!(
            "Role {} grants access to the unknown page {}. It is ignored.",
            ignored.role, ignored.page
        );
    }

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let config_capsule = config_arc.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &config_arc.leptos_options,
            routes,
            move || {
                provide_context::<Arc<panel::server::config::Config>>(config_capsule.clone());
            },
            {
                let leptos_options = config_arc.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(config_arc.leptos_options.clone());

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(InShutdown::No);
    let signal_task = tokio::spawn(signal_handler(shutdown_rx.clone(), shutdown_tx));

    info!(
        "listening on http://{}",
        &config_arc.leptos_options.site_addr
    );
    let listener = match tokio::net::TcpListener::bind(&config_arc.leptos_options.site_addr).await
    {
        Ok(x) => x,
        Err(e) => {
            panic!(
                "Unable to bind to {}: {e}",
                config_arc.leptos_options.site_addr
            );
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await
    {
        error!("Server stopped with an error: {e}");
    }

    // a signal caused the shutdown unless the server failed, so the handler is usually done already
    signal_task.abort();
    info!("Shutdown complete.");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
