use std::env;
use std::io;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "employee-data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `EMPLOYEE_DATA_PATH` and `EMPLOYEE_SEED_PATH`.
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let host = lookup("HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("PORT must be a valid port number, got {:?}", port),
                )
            })?,
            None => DEFAULT_PORT,
        };

        let data_path = lookup("EMPLOYEE_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let seed_path = lookup("EMPLOYEE_SEED_PATH").map(PathBuf::from);

        Ok(ServerConfig {
            host,
            port,
            data_path,
            seed_path,
        })
    }
}
