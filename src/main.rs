use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    cookie::Key,
    middleware::{DefaultHeaders, Logger},
    web, App, HttpServer,
};
use clap::Parser;
use gather_backend::{config::Config, routes};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::fs;
use std::path::PathBuf;
use tera::Tera;

#[derive(Parser, Debug)]
#[command(name = "gather_server", author, version, about = "Starts the Gather web server.")]
struct Cli {
    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = Config::from_env(&cli.env_file)
        .expect("FATAL: Failed to load or parse configuration.");

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    let tera = Tera::new("templates/**/*.html").expect("Tera initialization failed");

    fs::create_dir_all(&config.upload_path).expect("Failed to create upload directory");
    fs::create_dir_all(&config.background_path).expect("Failed to create background directory");

    if !config.db_path().exists() {
        panic!("FATAL: gather.db not found. Run 'cargo run --bin setup_cli -- --env-file <path> db setup'");
    }

    let manager = SqliteConnectionManager::file(config.db_path())
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    let pool = Pool::builder()
        .build(manager)
        .expect("FATAL: Failed to create Rusqlite connection pool.");

    let session_key_bytes = hex::decode(&config.session_secret_key)
        .expect("FATAL: SESSION_SECRET_KEY in .env is not a valid hex string.");
    let session_key = Key::try_from(session_key_bytes.as_slice())
        .expect("FATAL: The decoded SESSION_SECRET_KEY is not long enough (minimum 64 bytes required).");

    let server_address = format!("{}:{}", config.web.host, config.web.port);
    println!("🚀 Server starting at http://{}", server_address);

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                .cookie_secure(config.use_secure_cookies)
                .cookie_http_only(true)
                .cookie_same_site(actix_web::cookie::SameSite::Lax)
                .build();

        App::new()
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY")),
            )
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(pool.clone()))
            .service(actix_files::Files::new("/uploads", &config.upload_path))
            .service(actix_files::Files::new("/backgrounds", &config.background_path))
            // Session management applies to every page route below.
            .service(
                web::scope("")
                    .wrap(session_mw)
                    .configure(routes::auth::config)
                    .configure(routes::profile::config)
                    .configure(routes::admin::config)
                    .configure(routes::feed::config),
            )
    })
    .bind(server_address)?
    .run()
    .await
}
