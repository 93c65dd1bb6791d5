#![recursion_limit = "256"]
#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{middleware, web, App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};

    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let addr = conf.leptos_options.site_addr;
    log::info!("CharityConnect listening on http://{addr}");

    HttpServer::new(move || {
        let routes = generate_route_list(charityconnect::frontend::App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .wrap(middleware::Logger::default())
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")).prefer_utf8(true))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || charityconnect::frontend::shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Binary is only meaningful with the `ssr` feature; the WASM side
    // enters through `charityconnect::hydrate`.
}
