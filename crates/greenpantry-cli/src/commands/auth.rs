use clap::Subcommand;
use greenpantry_core::credentials;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Gemini API key in the OS keyring
    SetKey {
        /// API key
        key: String,
    },
    /// Remove the stored API key
    ClearKey,
    /// Show where the API key would be read from
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetKey { key } => {
            credentials::store_api_key(&key)?;
            println!("API key stored in OS keyring");
        }
        AuthAction::ClearKey => {
            credentials::clear_api_key()?;
            println!("API key removed from OS keyring");
        }
        AuthAction::Status => match credentials::api_key() {
            Ok((_, source)) => println!("configured ({source})"),
            Err(_) => println!(
                "not configured (set {} or run `greenpantry auth set-key`)",
                credentials::API_KEY_ENV_VARS.join(" or ")
            ),
        },
    }
    Ok(())
}
