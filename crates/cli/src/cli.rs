use std::collections::HashMap;

use clap::{Args, Parser, Subcommand};

/// Create and delete venues on a Fyyur server.
#[derive(Debug, Parser)]
#[command(name = "fyyur", version)]
pub struct Cli {
    /// Base URL of the venue server.
    #[arg(long, global = true, env = "FYYUR_API_URL")]
    pub base_url: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit the new-venue form.
    Create(CreateArgs),
    /// Delete venues by identifier.
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the front-end environment record as JSON.
    Env,
    /// Print the Auth0 hosted-login URL.
    LoginUrl,
}

/// Fields of the new-venue form.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub address: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub facebook_link: String,
    #[arg(long, default_value = "")]
    pub website: String,
    #[arg(long, default_value = "")]
    pub seeking_description: String,
    #[arg(long)]
    pub genres: String,
    #[arg(long, default_value = "")]
    pub image_link: String,
}

impl CreateArgs {
    /// The form as named fields, the way the page would expose them.
    pub fn into_fields(self) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), self.name),
            ("city".to_string(), self.city),
            ("state".to_string(), self.state),
            ("address".to_string(), self.address),
            ("phone".to_string(), self.phone),
            ("facebook_link".to_string(), self.facebook_link),
            ("website".to_string(), self.website),
            ("seeking_description".to_string(), self.seeking_description),
            ("genres".to_string(), self.genres),
            ("image_link".to_string(), self.image_link),
        ])
    }
}
