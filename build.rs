use dotenv::dotenv;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes compile-time constants into `app_keys.rs` under OUT_DIR.
///
/// The session-secret storage encrypts the cached backend password with
/// keys embedded at build time (see `src/libs/secret.rs`).
struct AppKeys {
    file: File,
}

impl AppKeys {
    fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").unwrap();
        let dest_path = Path::new(&out_dir).join("app_keys.rs");
        let file = File::create(dest_path)?;
        Ok(Self { file })
    }

    fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        write!(self.file, "#[allow(unused)]\npub const APP_{}: &[u8; {}] = &[", key.to_uppercase(), value.len())?;
        for (i, byte) in value.iter().enumerate() {
            if i > 0 {
                write!(self.file, ", ")?;
            }
            write!(self.file, "{}", byte)?;
        }
        writeln!(self.file, "];")
    }
}

/// Pads or truncates a key string to an exact byte length.
fn fit(mut value: String, len: usize) -> Vec<u8> {
    value.truncate(len);
    while value.len() < len {
        value.push('!');
    }
    value.into_bytes()
}

fn main() -> io::Result<()> {
    // Load .env file if it exists
    let _ = dotenv();

    let (encryption_key, encryption_iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            let key_bytes = key.as_bytes();
            let iv_bytes = iv.as_bytes();

            if key_bytes.len() != 32 {
                panic!("ENCRYPTION_KEY must be exactly 32 bytes long, got {} bytes", key_bytes.len());
            }
            if iv_bytes.len() != 16 {
                panic!("ENCRYPTION_IV must be exactly 16 bytes long, got {} bytes", iv_bytes.len());
            }

            (key_bytes.to_vec(), iv_bytes.to_vec())
        }
        _ => {
            // Derive deterministic keys from the package name when no
            // explicit keys are provided in the environment.
            let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "proman".to_string());
            let default_key = fit(format!("{}_default_encryption_key_32b", package_name), 32);
            let default_iv = fit(format!("{}_iv_16b", package_name), 16);

            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not found in environment.");
            println!("cargo:warning=Using default keys. For production, create a .env file with:");
            println!("cargo:warning=ENCRYPTION_KEY=your_32_byte_key_here!!!!!!!!!");
            println!("cargo:warning=ENCRYPTION_IV=your_16_byte_iv!");

            (default_key, default_iv)
        }
    };

    let mut app_keys = AppKeys::new()?;
    app_keys.write_bytes("ENCRYPTION_KEY", &encryption_key)?;
    app_keys.write_bytes("ENCRYPTION_IV", &encryption_iv)?;

    Ok(())
}
