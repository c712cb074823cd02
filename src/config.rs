use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub mail_gateway_url: String,
    pub mail_sender: String,
    pub blob_store_url: String,
    pub portal_url: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            mail_gateway_url: get_env("MAIL_GATEWAY_URL")?,
            mail_sender: get_env("MAIL_SENDER")?,
            blob_store_url: get_env("BLOB_STORE_URL")?,
            portal_url: get_env("PORTAL_URL")?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
