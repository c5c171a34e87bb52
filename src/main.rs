#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use dinereview::api::configure_functions;
    use dinereview::app::*;
    use dinereview::config::AppConfig;
    use dinereview::functions::{Aggregator, Gateway};
    use leptos::logging::{error, log};
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};

    // Load configuration
    let config = AppConfig::from_env().map_err(|err| {
        error!("[CONFIG] {}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;
    log!("[CONFIG] Upstream API at {}", config.upstream_base_url);
    log!("[CONFIG] Backend API at {}", config.backend_base_url);
    if config.aggregator.api_key.is_none() {
        log!("[CONFIG] APIFY_API_KEY not set, /functions/aggregator will answer 400");
    }

    let gateway = web::Data::new(Gateway::new(&config));
    let aggregator = web::Data::new(Aggregator::new(&config.aggregator));
    let config = web::Data::new(config);

    let conf = get_configuration(None)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(config.clone())
            .app_data(gateway.clone())
            .app_data(aggregator.clone())
            // Serverless-style functions, registered before the Leptos catch-alls
            .configure(configure_functions)
            // Register server functions
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Provider logos referenced by the review list
            .service(Files::new("/logos", format!("{site_root}/logos")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use dinereview::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
